//! Playback session: one run's state machine.
//!
//! The host owns the tick registration (one callback per display refresh) and
//! the cancellation handle; this session owns everything else — the snapshot
//! store, the scale computed once for the whole run, and the frame cursor.
//! Frames advance strictly in order, one per tick, never skipping to catch
//! up: a slow host plays back slower instead of dropping data. Preemption is
//! dropping the session and building a new one.

use crate::error::PlaybackError;
use crate::render::palette::StarKind;
use crate::render::surface::Surface;
use crate::render::{FrameReadout, FrameRenderer, PADDING};
use crate::scene::compute_scale;
use crate::store::SnapshotStore;
use crate::wire::SimulationRun;

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Frame drawn, more to come: schedule another tick.
    Continue(FrameReadout),
    /// Final frame drawn: deschedule and signal completion.
    Done(FrameReadout),
}

impl Tick {
    pub fn readout(&self) -> &FrameReadout {
        match self {
            Tick::Continue(readout) | Tick::Done(readout) => readout,
        }
    }
}

/// State for one playback run. Constructed fresh per run, discarded on
/// completion or preemption.
#[derive(Debug)]
pub struct PlaybackSession {
    store: SnapshotStore,
    renderer: FrameRenderer,
    scale: f64,
    star: StarKind,
    frame: usize,
}

impl PlaybackSession {
    /// Load a run and fit it to the given canvas. The scale is computed here,
    /// once, and reused for every frame so the view never breathes mid-run.
    pub fn new(
        run: SimulationRun,
        star_type: &str,
        width: f64,
        height: f64,
    ) -> Result<Self, PlaybackError> {
        let store = SnapshotStore::load(run)?;
        let scale = compute_scale(
            store.snapshots(),
            store.habitable_zone(),
            width,
            height,
            PADDING,
        );
        log::debug!(
            "playback: {} frames at {:.2} px/unit ({} star)",
            store.len(),
            scale,
            star_type
        );
        Ok(Self {
            store,
            renderer: FrameRenderer::new(width, height),
            scale,
            star: StarKind::from_id(star_type).unwrap_or_default(),
            frame: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Next frame index to render.
    pub fn current_frame(&self) -> usize {
        self.frame
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Render the current frame and advance the cursor.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Tick {
        let readout = self
            .renderer
            .draw_frame(surface, &self.store, self.scale, self.star, self.frame);
        self.frame += 1;
        if self.frame < self.store.len() {
            Tick::Continue(readout)
        } else {
            Tick::Done(readout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::TraceSurface;
    use crate::wire::Snapshot;

    fn run_of(n: usize) -> SimulationRun {
        SimulationRun {
            snapshots: (0..n).map(|i| Snapshot::at(i as f64, 0.0)).collect(),
            habitable_zone: None,
        }
    }

    #[test]
    fn empty_run_never_starts() {
        let err = PlaybackSession::new(SimulationRun::default(), "sun_like", 800.0, 600.0);
        assert_eq!(err.unwrap_err(), PlaybackError::EmptyRun);
    }

    #[test]
    fn frames_play_in_strict_order_exactly_once() {
        let mut session = PlaybackSession::new(run_of(5), "sun_like", 800.0, 600.0).unwrap();
        let mut surface = TraceSurface::new();
        let mut rendered = Vec::new();
        loop {
            match session.tick(&mut surface) {
                Tick::Continue(readout) => rendered.push(readout.frame),
                Tick::Done(readout) => {
                    rendered.push(readout.frame);
                    break;
                }
            }
        }
        assert_eq!(rendered, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn scale_is_stable_across_ticks() {
        let mut session = PlaybackSession::new(run_of(3), "sun_like", 800.0, 600.0).unwrap();
        let before = session.scale();
        let mut surface = TraceSurface::new();
        session.tick(&mut surface);
        session.tick(&mut surface);
        assert_eq!(session.scale(), before);
    }

    #[test]
    fn replacement_session_restarts_from_zero() {
        // Preemption: the host drops the old session and builds a new one;
        // the new run must start at frame 0 regardless of the old cursor.
        let mut old = PlaybackSession::new(run_of(4), "sun_like", 800.0, 600.0).unwrap();
        let mut surface = TraceSurface::new();
        old.tick(&mut surface);
        old.tick(&mut surface);
        assert_eq!(old.current_frame(), 2);

        let new = PlaybackSession::new(run_of(4), "red_giant", 800.0, 600.0).unwrap();
        assert_eq!(new.current_frame(), 0);
    }

    #[test]
    fn single_frame_run_completes_immediately() {
        let mut session = PlaybackSession::new(run_of(1), "sun_like", 800.0, 600.0).unwrap();
        let mut surface = TraceSurface::new();
        assert!(matches!(session.tick(&mut surface), Tick::Done(_)));
    }

    #[test]
    fn end_to_end_three_frame_scenario() {
        // Presets advertise sun_like with dt 0.1 / 2000 steps; simulate
        // answers three snapshots on the unit circle. Scale comes from
        // max_dist = 1, playback runs exactly three ticks, and the final
        // readout shows the last position.
        let catalog = serde_json::from_str::<crate::wire::PresetsResponse>(
            r#"{"star_types": ["sun_like"], "default_parameters": {"dt": 0.1, "steps": 2000}}"#,
        )
        .unwrap()
        .normalize();
        assert_eq!(catalog.star_types, ["sun_like"]);

        let run = serde_json::from_str::<crate::wire::SimulateResponse>(
            r#"[{"particles":[{"x":1,"y":0}]},{"particles":[{"x":0,"y":1}]},{"particles":[{"x":-1,"y":0}]}]"#,
        )
        .unwrap()
        .into_run();

        let mut session =
            PlaybackSession::new(run, &catalog.star_types[0], 800.0, 600.0).unwrap();
        // max_dist floors at 1 and all positions sit on the unit circle.
        assert_eq!(session.scale(), 240.0);

        let mut surface = TraceSurface::new();
        assert!(matches!(session.tick(&mut surface), Tick::Continue(_)));
        assert!(matches!(session.tick(&mut surface), Tick::Continue(_)));
        match session.tick(&mut surface) {
            Tick::Done(readout) => {
                assert_eq!(
                    readout.coords_text(),
                    ("-1.000".to_string(), "0.000".to_string())
                );
                assert_eq!(readout.frame_text(), "Frame: 3 / 3");
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }
}
