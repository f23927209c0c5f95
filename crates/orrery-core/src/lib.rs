//! Playback and rendering core for the orbit visualizer.
//!
//! Replays a time-ordered sequence of simulation snapshots as an animated 2-D
//! scene: a star at the origin, a moving body with a fading trail, and an
//! optional habitable-zone annulus. Physics never happens here — snapshots
//! arrive precomputed from the simulation service and this crate only fits,
//! schedules, and draws them.
//!
//! Host-independent by design: drawing goes through the [`Surface`] trait and
//! scheduling is pulled by the host's per-refresh callback, so the whole
//! pipeline runs under plain `cargo test` with the recording backend.

pub mod error;
pub mod playback;
pub mod render;
pub mod scene;
pub mod store;
pub mod wire;

// Re-export key types at crate root for convenience
pub use error::PlaybackError;
pub use playback::{PlaybackSession, Tick};
pub use render::palette::{StarKind, StarPalette};
pub use render::surface::{
    Dash, DrawCommand, GradientStop, Paint, Rgba, Surface, TracePaint, TraceSurface,
};
pub use render::{FrameReadout, FrameRenderer, PADDING};
pub use scene::{compute_scale, to_screen};
pub use store::SnapshotStore;
pub use wire::{
    HabitableZone, Particle, PresetCatalog, PresetsResponse, RunParameters, SimulateResponse,
    SimulationRun, Snapshot,
};
