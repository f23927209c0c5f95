//! Scene geometry: simulation space to screen space.
//!
//! One uniform scale factor is derived from the full snapshot set and stays
//! constant for every frame of a run. Recomputing it per frame would make the
//! trail and star visually jump as the body moves.

use glam::DVec2;

use crate::wire::{HabitableZone, Snapshot};

/// Pixels per simulation unit that fit every known position (and the outer
/// habitable-zone radius, if present) inside the canvas with `padding` pixels
/// to spare on each side.
///
/// `max_dist` is floored at 1 so an all-at-origin run cannot divide by zero
/// or zoom to infinity.
pub fn compute_scale(
    snapshots: &[Snapshot],
    habitable_zone: Option<&HabitableZone>,
    width: f64,
    height: f64,
    padding: f64,
) -> f64 {
    let mut max_dist = 1.0_f64;
    for snapshot in snapshots {
        max_dist = max_dist.max(snapshot.primary().length());
    }
    if let Some(outer) = habitable_zone.and_then(HabitableZone::outer) {
        max_dist = max_dist.max(outer);
    }
    (width.min(height) - 2.0 * padding) / (2.0 * max_dist)
}

/// Simulation coordinates to screen pixels. Screen Y grows downward while
/// simulation Y grows up, so the Y axis is inverted.
pub fn to_screen(p: DVec2, scale: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(width / 2.0 + p.x * scale, height / 2.0 - p.y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_positions_use_unit_floor() {
        // 800x600, padding 60: (600 - 120) / 2 = 240 px per unit.
        let snapshots = vec![Snapshot::at(0.0, 0.0); 5];
        let scale = compute_scale(&snapshots, None, 800.0, 600.0, 60.0);
        assert_eq!(scale, 240.0);
    }

    #[test]
    fn scale_covers_every_position() {
        let snapshots = vec![
            Snapshot::at(3.0, 0.0),
            Snapshot::at(0.0, -2.5),
            Snapshot::at(-1.0, 1.0),
        ];
        let (w, h, pad) = (800.0, 600.0, 60.0);
        let scale = compute_scale(&snapshots, None, w, h, pad);
        for snap in &snapshots {
            let screen = to_screen(snap.primary(), scale, w, h);
            assert!(screen.x >= pad - 1e-9 && screen.x <= w - pad + 1e-9);
            assert!(screen.y >= pad - 1e-9 && screen.y <= h - pad + 1e-9);
        }
    }

    #[test]
    fn outer_zone_radius_extends_bounds() {
        let snapshots = vec![Snapshot::at(1.0, 0.0)];
        let hz = HabitableZone {
            r_inner: 2.0,
            r_outer: 4.0,
        };
        let with = compute_scale(&snapshots, Some(&hz), 800.0, 600.0, 60.0);
        let without = compute_scale(&snapshots, None, 800.0, 600.0, 60.0);
        assert_eq!(with, without / 4.0);
    }

    #[test]
    fn unset_outer_radius_is_ignored() {
        let snapshots = vec![Snapshot::at(1.0, 0.0)];
        let hz = HabitableZone::default();
        let with = compute_scale(&snapshots, Some(&hz), 800.0, 600.0, 60.0);
        let without = compute_scale(&snapshots, None, 800.0, 600.0, 60.0);
        assert_eq!(with, without);
    }

    #[test]
    fn to_screen_inverts_y() {
        let p = to_screen(DVec2::new(1.0, 1.0), 100.0, 800.0, 600.0);
        assert_eq!(p, DVec2::new(500.0, 200.0));
    }

    #[test]
    fn origin_maps_to_canvas_center() {
        let p = to_screen(DVec2::ZERO, 240.0, 800.0, 600.0);
        assert_eq!(p, DVec2::new(400.0, 300.0));
    }
}
