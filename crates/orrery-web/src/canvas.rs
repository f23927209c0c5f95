//! Canvas2D backend for the core's `Surface` trait.

use glam::DVec2;
use orrery_core::{Dash, Paint, Rgba, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const TAU: f64 = std::f64::consts::TAU;

/// Draws core render commands onto a `<canvas>` 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        // Surface text is centered on its anchor point.
        ctx.set_text_align("center");
        Ok(Self { ctx })
    }

    fn apply_dash(&self, dash: Option<Dash>) {
        let segments = js_sys::Array::new();
        if let Some((on, off)) = dash {
            segments.push(&JsValue::from_f64(on));
            segments.push(&JsValue::from_f64(off));
        }
        let _ = self.ctx.set_line_dash(segments.as_ref());
    }

    fn begin_circle(&self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba, dash: Option<Dash>) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.apply_dash(dash);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        if dash.is_some() {
            self.apply_dash(None);
        }
    }

    fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        width: f64,
        color: Rgba,
        dash: Option<Dash>,
    ) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.apply_dash(dash);
        self.begin_circle(center, radius);
        self.ctx.stroke();
        if dash.is_some() {
            self.apply_dash(None);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: Paint<'_>) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Radial {
                start_radius,
                stops,
            } => {
                let Ok(gradient) = self.ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    start_radius,
                    center.x,
                    center.y,
                    radius,
                ) else {
                    return;
                };
                for stop in stops {
                    let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.begin_circle(center, radius);
        self.ctx.fill();
    }

    fn fill_annulus(&mut self, center: DVec2, r_inner: f64, r_outer: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, r_outer, 0.0, TAU);
        // Reverse-wound inner path excludes the inner disc from the fill.
        let _ = self
            .ctx
            .arc_with_anticlockwise(center.x, center.y, r_inner, 0.0, TAU, true);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: DVec2, font: &str, color: Rgba) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, pos.x, pos.y);
    }
}
