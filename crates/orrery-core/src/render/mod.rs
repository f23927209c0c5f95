//! Frame renderer: draws one playback instant, back to front.

pub mod palette;
pub mod surface;

use glam::DVec2;

use crate::scene::to_screen;
use crate::store::SnapshotStore;
use crate::wire::HabitableZone;
use palette::StarKind;
use surface::{stop, Dash, GradientStop, Paint, Rgba, Surface};

/// Canvas padding used when fitting a run (px).
pub const PADDING: f64 = 60.0;

/// Decorative grid spacing (px).
const GRID_SPACING: f64 = 50.0;

const BACKGROUND: Rgba = Rgba::opaque(0, 0, 0);
const GRID_COLOR: Rgba = Rgba::new(102, 126, 234, 0.05);

/// Accent color shared by the trail, the moving body, and idle-state chrome.
const ACCENT: Rgba = Rgba::opaque(102, 126, 234);

const TRAIL_WIDTH: f64 = 2.0;
const TRAIL_ALPHA_FLOOR: f64 = 0.3;
const TRAIL_ALPHA_SPAN: f64 = 0.5;

/// Dash pattern for the habitable-zone rings.
const RING_DASH: Dash = (10.0, 5.0);
const RING_WIDTH: f64 = 2.0;
/// Half-width of the soft glow band around the outer radius (px).
const ZONE_GLOW_BAND: f64 = 20.0;
const ZONE_GLOW: [GradientStop; 3] = [
    stop(0.0, Rgba::new(34, 197, 94, 0.0)),
    stop(0.5, Rgba::new(34, 197, 94, 0.1)),
    stop(1.0, Rgba::new(34, 197, 94, 0.0)),
];
const ZONE_OUTER_RING: Rgba = Rgba::new(34, 197, 94, 0.6);
const ZONE_INNER_RING: Rgba = Rgba::new(74, 222, 128, 0.8);
const ZONE_FILL: Rgba = Rgba::new(34, 197, 94, 0.05);

const STAR_GLOW_RADIUS: f64 = 40.0;
const STAR_CORE_RADIUS: f64 = 12.0;

const BODY_GLOW_RADIUS: f64 = 20.0;
const BODY_CORE_RADIUS: f64 = 8.0;
const BODY_GLOW: [GradientStop; 2] = [
    stop(0.0, Rgba::new(102, 126, 234, 0.6)),
    stop(1.0, Rgba::new(102, 126, 234, 0.0)),
];
const BODY_CORE: [GradientStop; 3] = [
    stop(0.0, Rgba::opaque(165, 180, 252)),
    stop(0.7, Rgba::opaque(102, 126, 234)),
    stop(1.0, Rgba::opaque(76, 81, 191)),
];

const IDLE_FONT: &str = "16px Orbitron, sans-serif";
const IDLE_HINT: &str = "Configure parameters and launch simulation";

/// Side-channel outputs of one drawn frame, for any status display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReadout {
    /// Body position in simulation units.
    pub position: DVec2,
    /// Zero-based frame index.
    pub frame: usize,
    pub total: usize,
}

impl FrameReadout {
    /// Fixed-precision coordinate strings.
    pub fn coords_text(&self) -> (String, String) {
        (
            format!("{:.3}", self.position.x),
            format!("{:.3}", self.position.y),
        )
    }

    /// One-based counter, e.g. `Frame: 2 / 3`.
    pub fn frame_text(&self) -> String {
        format!("Frame: {} / {}", self.frame + 1, self.total)
    }
}

/// Stateless renderer for a fixed canvas size.
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    width: f64,
    height: f64,
}

impl FrameRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Draw frame `index` of the run. Layer order is fixed: background and
    /// grid, habitable zone, trail, star, moving body.
    pub fn draw_frame(
        &self,
        surface: &mut dyn Surface,
        store: &SnapshotStore,
        scale: f64,
        star: StarKind,
        index: usize,
    ) -> FrameReadout {
        self.draw_backdrop(surface);
        if let Some(hz) = store.habitable_zone() {
            self.draw_habitable_zone(surface, hz, scale);
        }
        self.draw_trail(surface, store, scale, index);
        self.draw_star(surface, star);

        let position = store.get(index).primary();
        self.draw_body(surface, to_screen(position, scale, self.width, self.height));

        FrameReadout {
            position,
            frame: index,
            total: store.len(),
        }
    }

    /// Placeholder scene before any run has started: grid, dashed crosshair,
    /// hint text.
    pub fn draw_idle(&self, surface: &mut dyn Surface) {
        self.draw_backdrop(surface);

        let center = self.center();
        let crosshair = ACCENT.with_alpha(0.3);
        surface.stroke_line(
            DVec2::new(center.x, 0.0),
            DVec2::new(center.x, self.height),
            1.0,
            crosshair,
            Some((5.0, 5.0)),
        );
        surface.stroke_line(
            DVec2::new(0.0, center.y),
            DVec2::new(self.width, center.y),
            1.0,
            crosshair,
            Some((5.0, 5.0)),
        );

        surface.fill_text(IDLE_HINT, center, IDLE_FONT, ACCENT.with_alpha(0.5));
    }

    fn draw_backdrop(&self, surface: &mut dyn Surface) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND);

        let mut x = 0.0;
        while x <= self.width {
            surface.stroke_line(
                DVec2::new(x, 0.0),
                DVec2::new(x, self.height),
                1.0,
                GRID_COLOR,
                None,
            );
            x += GRID_SPACING;
        }
        let mut y = 0.0;
        while y <= self.height {
            surface.stroke_line(
                DVec2::new(0.0, y),
                DVec2::new(self.width, y),
                1.0,
                GRID_COLOR,
                None,
            );
            y += GRID_SPACING;
        }
    }

    fn draw_habitable_zone(&self, surface: &mut dyn Surface, hz: &HabitableZone, scale: f64) {
        let center = self.center();

        if let Some(outer) = hz.outer() {
            let outer_px = outer * scale;
            // Soft glow band straddling the outer radius.
            surface.fill_circle(
                center,
                outer_px + ZONE_GLOW_BAND,
                Paint::Radial {
                    start_radius: (outer_px - ZONE_GLOW_BAND).max(0.0),
                    stops: &ZONE_GLOW,
                },
            );
            surface.stroke_circle(center, outer_px, RING_WIDTH, ZONE_OUTER_RING, Some(RING_DASH));
        }

        if let Some(inner) = hz.inner() {
            surface.stroke_circle(
                center,
                inner * scale,
                RING_WIDTH,
                ZONE_INNER_RING,
                Some(RING_DASH),
            );
        }

        if let (Some(inner), Some(outer)) = (hz.inner(), hz.outer()) {
            surface.fill_annulus(center, inner * scale, outer * scale, ZONE_FILL);
        }
    }

    /// Line segments between consecutive frames up to `index`, fading with
    /// age: `alpha = 0.3 + (j / index) * 0.5`, so the newest segment sits at
    /// 0.8 and the oldest near the floor. Nothing is drawn at frame 0.
    fn draw_trail(&self, surface: &mut dyn Surface, store: &SnapshotStore, scale: f64, index: usize) {
        for j in 1..=index.min(store.len().saturating_sub(1)) {
            let prev = to_screen(store.get(j - 1).primary(), scale, self.width, self.height);
            let cur = to_screen(store.get(j).primary(), scale, self.width, self.height);
            let alpha = TRAIL_ALPHA_FLOOR + (j as f64 / index as f64) * TRAIL_ALPHA_SPAN;
            surface.stroke_line(prev, cur, TRAIL_WIDTH, ACCENT.with_alpha(alpha as f32), None);
        }
    }

    fn draw_star(&self, surface: &mut dyn Surface, star: StarKind) {
        let center = self.center();
        let palette = star.palette();
        surface.fill_circle(
            center,
            STAR_GLOW_RADIUS,
            Paint::Radial {
                start_radius: 0.0,
                stops: &palette.glow,
            },
        );
        surface.fill_circle(
            center,
            STAR_CORE_RADIUS,
            Paint::Radial {
                start_radius: 0.0,
                stops: &palette.core,
            },
        );
    }

    fn draw_body(&self, surface: &mut dyn Surface, pos: DVec2) {
        surface.fill_circle(
            pos,
            BODY_GLOW_RADIUS,
            Paint::Radial {
                start_radius: 0.0,
                stops: &BODY_GLOW,
            },
        );
        surface.fill_circle(
            pos,
            BODY_CORE_RADIUS,
            Paint::Radial {
                start_radius: 0.0,
                stops: &BODY_CORE,
            },
        );
    }
}
