//! Browser front-end driver: form state, playback scheduling, status DOM.
//!
//! One `App` lives in thread-local storage for the page's lifetime. Playback
//! is pulled by `requestAnimationFrame`: each callback renders one frame and
//! either re-arms itself or tears the run down. Starting a new run while one
//! is playing cancels the pending callback and replaces the session, so the
//! old run simply stops mid-flight.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_core::{FrameRenderer, PlaybackSession, RunParameters, Tick};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlOptionElement, HtmlSelectElement,
};

use crate::api::ApiClient;
use crate::canvas::CanvasSurface;

// Form fallbacks, used when an input holds something unparseable.
const FALLBACK_X: f64 = 1.0;
const FALLBACK_Y: f64 = 0.1;
const FALLBACK_VX: f64 = 0.0;
const FALLBACK_VY: f64 = 1.0;
const FALLBACK_DT: f64 = 0.1;
const FALLBACK_STEPS: u32 = 2000;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = RefCell::new(None);
    static TICK: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&Rc<RefCell<App>>) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_ref().map(f))
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn element<T: JsCast>(doc: &Document, id: &str) -> Result<T, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

/// Handles to the status side-channel: error banner, frame counter,
/// coordinate readouts, and the start button.
struct StatusDom {
    error: HtmlElement,
    frame_info: HtmlElement,
    coord_x: HtmlElement,
    coord_y: HtmlElement,
    run_btn: HtmlButtonElement,
}

impl StatusDom {
    fn lookup(doc: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            error: element(doc, "error")?,
            frame_info: element(doc, "frameInfo")?,
            coord_x: element(doc, "coordX")?,
            coord_y: element(doc, "coordY")?,
            run_btn: element(doc, "runBtn")?,
        })
    }

    fn show_error(&self, message: &str) {
        self.error.set_text_content(Some(message));
        let _ = self.error.style().set_property("display", "block");
    }

    fn clear_error(&self) {
        self.error.set_text_content(None);
        let _ = self.error.style().set_property("display", "none");
    }

    fn set_running(&self, running: bool) {
        self.run_btn.set_disabled(running);
    }

    fn show_readout(&self, readout: &orrery_core::FrameReadout) {
        let (x, y) = readout.coords_text();
        self.coord_x.set_text_content(Some(&x));
        self.coord_y.set_text_content(Some(&y));
        self.frame_info.set_text_content(Some(&readout.frame_text()));
    }
}

/// Page-lifetime state.
struct App {
    api: ApiClient,
    surface: CanvasSurface,
    renderer: FrameRenderer,
    session: Option<PlaybackSession>,
    raf_id: Option<i32>,
    /// True while a simulate request is in flight. Playback itself is not
    /// busy: a new run during playback preempts it.
    busy: bool,
    dom: StatusDom,
}

impl App {
    /// Drop the session and any pending frame callback. Safe to call when
    /// nothing is playing.
    fn cancel_playback(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Ok(win) = window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.session = None;
    }
}

/// Build the app, paint the idle scene, wire the start button, and kick off
/// the preset fetch.
pub fn init(api_base: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let doc = document()?;
    let canvas: HtmlCanvasElement = element(&doc, "canvas")?;
    let renderer = FrameRenderer::new(canvas.width() as f64, canvas.height() as f64);
    let mut surface = CanvasSurface::from_canvas(&canvas)?;
    renderer.draw_idle(&mut surface);

    let dom = StatusDom::lookup(&doc)?;
    let app = Rc::new(RefCell::new(App {
        api: api_base.map(ApiClient::new).unwrap_or_default(),
        surface,
        renderer,
        session: None,
        raf_id: None,
        busy: false,
        dom,
    }));
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    let on_click = Closure::<dyn FnMut()>::new(run_simulation);
    element::<HtmlButtonElement>(&doc, "runBtn")?
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    spawn_local(load_presets());
    log::info!("orbit visualizer: initialized");
    Ok(())
}

/// Fetch the preset catalog and apply it to the form: one option per star
/// type, default dt/steps into their inputs. A failed fetch leaves the
/// hard-coded form values in place.
async fn load_presets() {
    let Some(api) = with_app(|app| app.borrow().api.clone()) else {
        return;
    };
    let catalog = match api.presets().await {
        Ok(catalog) => catalog,
        Err(err) => {
            log::warn!("presets unavailable, keeping form defaults: {err}");
            return;
        }
    };

    let result: Result<(), JsValue> = (|| {
        let doc = document()?;
        let select: HtmlSelectElement = element(&doc, "starType")?;
        if !catalog.star_types.is_empty() {
            select.set_inner_html("");
            for star_type in &catalog.star_types {
                let label = orrery_core::StarKind::from_id(star_type)
                    .map(|kind| kind.label().to_string())
                    .unwrap_or_else(|| star_type.clone());
                let option = HtmlOptionElement::new_with_text_and_value(&label, star_type)?;
                select.append_child(&option)?;
            }
        }
        if let Some(dt) = catalog.default_dt {
            element::<HtmlInputElement>(&doc, "dt")?.set_value(&dt.to_string());
        }
        if let Some(steps) = catalog.default_steps {
            element::<HtmlInputElement>(&doc, "steps")?.set_value(&steps.to_string());
        }
        Ok(())
    })();
    if let Err(err) = result {
        log::warn!("could not apply presets to form: {err:?}");
    }
}

fn input_f64(doc: &Document, id: &str, fallback: f64) -> f64 {
    element::<HtmlInputElement>(doc, id)
        .ok()
        .and_then(|input| input.value().trim().parse().ok())
        .unwrap_or(fallback)
}

fn read_params(doc: &Document) -> RunParameters {
    let star_type = element::<HtmlSelectElement>(doc, "starType")
        .map(|select| select.value())
        .unwrap_or_else(|_| "sun_like".to_string());
    RunParameters {
        star_type,
        x: input_f64(doc, "initialX", FALLBACK_X),
        y: input_f64(doc, "initialY", FALLBACK_Y),
        vx: input_f64(doc, "initialVx", FALLBACK_VX),
        vy: input_f64(doc, "initialVy", FALLBACK_VY),
        dt: input_f64(doc, "dt", FALLBACK_DT),
        steps: element::<HtmlInputElement>(doc, "steps")
            .ok()
            .and_then(|input| input.value().trim().parse().ok())
            .unwrap_or(FALLBACK_STEPS),
    }
}

/// Start (or restart) a run from the current form values.
pub fn run_simulation() {
    let Some(started) = with_app(|app| {
        let mut a = app.borrow_mut();
        if a.busy {
            return false;
        }
        a.cancel_playback();
        a.busy = true;
        a.dom.clear_error();
        a.dom.set_running(true);
        true
    }) else {
        return;
    };
    if !started {
        return;
    }

    spawn_local(async move {
        let outcome: Result<(), String> = async {
            let doc = document().map_err(|_| "page not ready".to_string())?;
            let params = read_params(&doc);
            let api = with_app(|app| app.borrow().api.clone())
                .ok_or_else(|| "app not initialized".to_string())?;
            let run = api.simulate(&params).await.map_err(|e| e.to_string())?;

            with_app(|app| {
                let mut a = app.borrow_mut();
                let session = PlaybackSession::new(
                    run,
                    &params.star_type,
                    a.renderer.width(),
                    a.renderer.height(),
                )
                .map_err(|e| e.to_string())?;
                a.session = Some(session);
                a.busy = false;
                Ok::<_, String>(())
            })
            .ok_or_else(|| "app not initialized".to_string())??;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => schedule_tick(),
            Err(message) => {
                log::error!("run failed: {message}");
                with_app(|app| {
                    let mut a = app.borrow_mut();
                    a.busy = false;
                    a.dom.show_error(&message);
                    a.dom.set_running(false);
                });
            }
        }
    });
}

/// Arm the next frame callback and remember its handle for preemption.
fn schedule_tick() {
    TICK.with(|cell| {
        if cell.borrow().is_none() {
            *cell.borrow_mut() = Some(Closure::<dyn FnMut()>::new(tick_once));
        }
    });
    let result: Result<(), JsValue> = (|| {
        let id = TICK.with(|cell| {
            let borrow = cell.borrow();
            // Populated just above; missing only if TLS is torn down.
            let tick = borrow
                .as_ref()
                .ok_or_else(|| JsValue::from_str("tick callback missing"))?;
            window()?.request_animation_frame(tick.as_ref().unchecked_ref())
        })?;
        with_app(|app| app.borrow_mut().raf_id = Some(id));
        Ok(())
    })();
    if let Err(err) = result {
        log::error!("could not schedule frame: {err:?}");
        with_app(|app| {
            let mut a = app.borrow_mut();
            a.cancel_playback();
            a.busy = false;
            a.dom.set_running(false);
        });
    }
}

/// One animation-frame callback: render the current frame, update readouts,
/// and either re-arm or finish.
fn tick_once() {
    let more = with_app(|app| {
        let mut a = app.borrow_mut();
        a.raf_id = None;
        let App {
            session,
            surface,
            dom,
            ..
        } = &mut *a;
        let Some(active) = session.as_mut() else {
            // Preempted between scheduling and firing.
            return false;
        };
        match active.tick(surface) {
            Tick::Continue(readout) => {
                dom.show_readout(&readout);
                true
            }
            Tick::Done(readout) => {
                dom.show_readout(&readout);
                *session = None;
                dom.set_running(false);
                false
            }
        }
    })
    .unwrap_or(false);

    if more {
        schedule_tick();
    }
}
