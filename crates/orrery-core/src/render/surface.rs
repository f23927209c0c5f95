//! Drawing surface abstraction.
//!
//! The frame renderer emits Canvas2D-shaped commands through this trait so
//! the core stays host-independent: the web crate backs it with a real
//! canvas context, tests and headless use back it with [`TraceSurface`].

use glam::DVec2;

/// sRGB color with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string, as canvas backends consume it.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One stop of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

pub const fn stop(offset: f32, color: Rgba) -> GradientStop {
    GradientStop { offset, color }
}

/// Fill style for circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    Solid(Rgba),
    /// Radial gradient centered on the circle, running from `start_radius`
    /// out to the circle's own radius.
    Radial {
        start_radius: f64,
        stops: &'a [GradientStop],
    },
}

/// Dash pattern `(on, off)` in pixels.
pub type Dash = (f64, f64);

/// Immediate-mode drawing target. Commands are honored in call order, so the
/// renderer's back-to-front sequence is the layering.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba, dash: Option<Dash>);

    fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        width: f64,
        color: Rgba,
        dash: Option<Dash>,
    );

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: Paint<'_>);

    /// Filled ring between the two radii; the inner disc is excluded
    /// (outer path plus reverse-wound inner path on canvas backends).
    fn fill_annulus(&mut self, center: DVec2, r_inner: f64, r_outer: f64, color: Rgba);

    /// Text centered horizontally on `pos`.
    fn fill_text(&mut self, text: &str, pos: DVec2, font: &str, color: Rgba);
}

/// Owned mirror of [`Paint`] for recording.
#[derive(Debug, Clone, PartialEq)]
pub enum TracePaint {
    Solid(Rgba),
    Radial {
        start_radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl From<Paint<'_>> for TracePaint {
    fn from(paint: Paint<'_>) -> Self {
        match paint {
            Paint::Solid(color) => TracePaint::Solid(color),
            Paint::Radial {
                start_radius,
                stops,
            } => TracePaint::Radial {
                start_radius,
                stops: stops.to_vec(),
            },
        }
    }
}

/// One recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgba,
    },
    StrokeLine {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
        dash: Option<Dash>,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        width: f64,
        color: Rgba,
        dash: Option<Dash>,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        paint: TracePaint,
    },
    FillAnnulus {
        center: DVec2,
        r_inner: f64,
        r_outer: f64,
        color: Rgba,
    },
    FillText {
        text: String,
        pos: DVec2,
    },
}

/// Software backend that records commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub commands: Vec<DrawCommand>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TraceSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba, dash: Option<Dash>) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
            dash,
        });
    }

    fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        width: f64,
        color: Rgba,
        dash: Option<Dash>,
    ) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
            dash,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: Paint<'_>) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.into(),
        });
    }

    fn fill_annulus(&mut self, center: DVec2, r_inner: f64, r_outer: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillAnnulus {
            center,
            r_inner,
            r_outer,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: DVec2, _font: &str, _color: Rgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::new(102, 126, 234, 0.5).to_css(), "rgba(102, 126, 234, 0.5)");
        assert_eq!(Rgba::opaque(0, 0, 0).to_css(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn trace_preserves_call_order() {
        let mut surface = TraceSurface::new();
        surface.fill_rect(0.0, 0.0, 10.0, 10.0, Rgba::opaque(0, 0, 0));
        surface.fill_circle(DVec2::ZERO, 5.0, Paint::Solid(Rgba::opaque(255, 0, 0)));
        assert_eq!(surface.commands.len(), 2);
        assert!(matches!(surface.commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(surface.commands[1], DrawCommand::FillCircle { .. }));
    }
}
