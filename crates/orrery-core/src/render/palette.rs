//! Star-type color palettes.
//!
//! The visual encodes which star type was simulated: each known identifier
//! maps to a glow/core gradient pair, with the sun-like palette as the
//! fallback for identifiers this build does not know.

use super::surface::{stop, GradientStop, Rgba};

/// Known star types, matching the service's preset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarKind {
    #[default]
    SunLike,
    RedGiant,
    WhiteDwarf,
}

impl StarKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "sun_like" => Some(StarKind::SunLike),
            "red_giant" => Some(StarKind::RedGiant),
            "white_dwarf" => Some(StarKind::WhiteDwarf),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            StarKind::SunLike => "sun_like",
            StarKind::RedGiant => "red_giant",
            StarKind::WhiteDwarf => "white_dwarf",
        }
    }

    /// Human-readable label for selects and legends.
    pub fn label(self) -> &'static str {
        match self {
            StarKind::SunLike => "Sun",
            StarKind::RedGiant => "Red Giant",
            StarKind::WhiteDwarf => "White Dwarf",
        }
    }

    pub fn palette(self) -> &'static StarPalette {
        match self {
            StarKind::SunLike => &SUN_LIKE,
            StarKind::RedGiant => &RED_GIANT,
            StarKind::WhiteDwarf => &WHITE_DWARF,
        }
    }
}

/// Gradient stops for one star type: an outer glow and a solid-looking core.
#[derive(Debug, Clone, Copy)]
pub struct StarPalette {
    pub glow: [GradientStop; 3],
    pub core: [GradientStop; 3],
}

const SUN_LIKE: StarPalette = StarPalette {
    glow: [
        stop(0.0, Rgba::new(255, 215, 0, 0.8)),
        stop(0.3, Rgba::new(255, 165, 0, 0.3)),
        stop(1.0, Rgba::new(255, 100, 0, 0.0)),
    ],
    core: [
        stop(0.0, Rgba::opaque(255, 255, 255)),
        stop(0.5, Rgba::opaque(255, 215, 0)),
        stop(1.0, Rgba::opaque(255, 165, 0)),
    ],
};

const RED_GIANT: StarPalette = StarPalette {
    glow: [
        stop(0.0, Rgba::new(255, 99, 71, 0.85)),
        stop(0.3, Rgba::new(220, 38, 38, 0.35)),
        stop(1.0, Rgba::new(220, 38, 38, 0.0)),
    ],
    core: [
        stop(0.0, Rgba::opaque(255, 245, 245)),
        stop(0.5, Rgba::opaque(248, 113, 113)),
        stop(1.0, Rgba::opaque(220, 38, 38)),
    ],
};

const WHITE_DWARF: StarPalette = StarPalette {
    glow: [
        stop(0.0, Rgba::new(255, 255, 255, 0.9)),
        stop(0.3, Rgba::new(226, 232, 240, 0.35)),
        stop(1.0, Rgba::new(203, 213, 225, 0.0)),
    ],
    core: [
        stop(0.0, Rgba::opaque(255, 255, 255)),
        stop(0.5, Rgba::opaque(226, 232, 240)),
        stop(1.0, Rgba::opaque(203, 213, 225)),
    ],
};
