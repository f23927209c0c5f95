//! Wire model for the simulation service.
//!
//! The service contract has drifted over time: `/presets` answers either a
//! bare list of descriptors or a catalog object, and `/simulate` answers
//! either a bare snapshot list or an envelope with a `snapshots` key. Both
//! shapes are accepted here via untagged enums and collapsed into one
//! normalized form, so the rest of the crate never sees the difference.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Request body for `POST /simulate`. Validated for physical plausibility by
/// the service, not here.
#[derive(Debug, Clone, Serialize)]
pub struct RunParameters {
    pub star_type: String,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub dt: f64,
    pub steps: u32,
}

/// Position of one body, relative to the star.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Particle {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Annulus around the star, drawn as an overlay. A zero radius means the
/// bound is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct HabitableZone {
    #[serde(default)]
    pub r_inner: f64,
    #[serde(default)]
    pub r_outer: f64,
}

impl HabitableZone {
    pub fn inner(&self) -> Option<f64> {
        (self.r_inner > 0.0).then_some(self.r_inner)
    }

    pub fn outer(&self) -> Option<f64> {
        (self.r_outer > 0.0).then_some(self.r_outer)
    }
}

/// One simulation instant. The body position arrives either nested in
/// `particles` or as flat `x`/`y` fields, depending on service version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub particles: Vec<Particle>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    pub habitable_zone: Option<HabitableZone>,
}

impl Snapshot {
    /// Snapshot with a single nested particle.
    pub fn at(x: f64, y: f64) -> Self {
        Snapshot {
            particles: vec![Particle { x, y }],
            ..Snapshot::default()
        }
    }

    /// Position of the tracked body. A malformed snapshot with neither a
    /// particle nor flat fields degrades to the origin so rendering keeps
    /// going; this best-effort policy is deliberate.
    pub fn primary(&self) -> DVec2 {
        if let Some(p) = self.particles.first() {
            return DVec2::new(p.x, p.y);
        }
        DVec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

/// Optional `default_parameters` block of the catalog-shaped `/presets`
/// response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DefaultParameters {
    #[serde(default)]
    pub dt: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
}

/// One entry of the list-shaped `/presets` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PresetDescriptor {
    Tagged { star_type: String },
    Named { name: String },
    Bare(String),
}

impl PresetDescriptor {
    fn star_type(self) -> String {
        match self {
            PresetDescriptor::Tagged { star_type } => star_type,
            PresetDescriptor::Named { name } => name,
            PresetDescriptor::Bare(id) => id,
        }
    }
}

/// Either shape of `GET /presets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PresetsResponse {
    Descriptors(Vec<PresetDescriptor>),
    Catalog {
        #[serde(default)]
        star_types: Option<Vec<String>>,
        #[serde(default)]
        stars: Option<serde_json::Map<String, serde_json::Value>>,
        #[serde(default)]
        default_parameters: Option<DefaultParameters>,
    },
}

/// Normalized preset catalog, independent of the wire shape.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    pub star_types: Vec<String>,
    pub default_dt: Option<f64>,
    pub default_steps: Option<u32>,
}

impl PresetsResponse {
    pub fn normalize(self) -> PresetCatalog {
        match self {
            PresetsResponse::Descriptors(list) => PresetCatalog {
                star_types: list.into_iter().map(PresetDescriptor::star_type).collect(),
                ..PresetCatalog::default()
            },
            PresetsResponse::Catalog {
                star_types,
                stars,
                default_parameters,
            } => {
                let star_types = star_types.unwrap_or_else(|| {
                    stars
                        .map(|m| m.keys().cloned().collect())
                        .unwrap_or_default()
                });
                let defaults = default_parameters.unwrap_or_default();
                PresetCatalog {
                    star_types,
                    default_dt: defaults.dt,
                    default_steps: defaults.steps,
                }
            }
        }
    }
}

/// Either shape of `POST /simulate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SimulateResponse {
    Snapshots(Vec<Snapshot>),
    Envelope {
        snapshots: Vec<Snapshot>,
        #[serde(default)]
        habitable_zone: Option<HabitableZone>,
    },
}

/// One run's worth of simulation data, ready for playback.
#[derive(Debug, Clone, Default)]
pub struct SimulationRun {
    pub snapshots: Vec<Snapshot>,
    pub habitable_zone: Option<HabitableZone>,
}

impl SimulateResponse {
    pub fn into_run(self) -> SimulationRun {
        let (snapshots, habitable_zone) = match self {
            SimulateResponse::Snapshots(snapshots) => (snapshots, None),
            SimulateResponse::Envelope {
                snapshots,
                habitable_zone,
            } => (snapshots, habitable_zone),
        };
        // Older service versions ride the annotation on the first snapshot
        // instead of the envelope.
        let habitable_zone =
            habitable_zone.or_else(|| snapshots.first().and_then(|s| s.habitable_zone));
        SimulationRun {
            snapshots,
            habitable_zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_list_of_descriptors() {
        let json = r#"[{"star_type": "sun_like"}, {"name": "red_giant"}, "white_dwarf"]"#;
        let resp: PresetsResponse = serde_json::from_str(json).unwrap();
        let catalog = resp.normalize();
        assert_eq!(catalog.star_types, ["sun_like", "red_giant", "white_dwarf"]);
        assert!(catalog.default_dt.is_none());
    }

    #[test]
    fn presets_catalog_object() {
        let json = r#"{"star_types": ["sun_like"], "default_parameters": {"dt": 0.1, "steps": 2000}}"#;
        let catalog = serde_json::from_str::<PresetsResponse>(json)
            .unwrap()
            .normalize();
        assert_eq!(catalog.star_types, ["sun_like"]);
        assert_eq!(catalog.default_dt, Some(0.1));
        assert_eq!(catalog.default_steps, Some(2000));
    }

    #[test]
    fn presets_catalog_falls_back_to_stars_keys() {
        let json = r#"{"stars": {"sun_like": {"mass": 1.0}, "white_dwarf": {"mass": 0.8}}}"#;
        let catalog = serde_json::from_str::<PresetsResponse>(json)
            .unwrap()
            .normalize();
        assert_eq!(catalog.star_types.len(), 2);
        assert!(catalog.star_types.contains(&"sun_like".to_string()));
    }

    #[test]
    fn simulate_bare_list() {
        let json = r#"[{"particles": [{"x": 1.0, "y": 0.0}]}, {"particles": [{"x": 0.0, "y": 1.0}]}]"#;
        let run = serde_json::from_str::<SimulateResponse>(json)
            .unwrap()
            .into_run();
        assert_eq!(run.snapshots.len(), 2);
        assert!(run.habitable_zone.is_none());
        assert_eq!(run.snapshots[0].primary(), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn simulate_envelope_with_zone() {
        let json = r#"{"snapshots": [{"x": 1.0, "y": 2.0}], "habitable_zone": {"r_inner": 0.5, "r_outer": 1.0}}"#;
        let run = serde_json::from_str::<SimulateResponse>(json)
            .unwrap()
            .into_run();
        assert_eq!(run.snapshots[0].primary(), DVec2::new(1.0, 2.0));
        let hz = run.habitable_zone.unwrap();
        assert_eq!(hz.inner(), Some(0.5));
        assert_eq!(hz.outer(), Some(1.0));
    }

    #[test]
    fn zone_annotation_rides_on_first_snapshot() {
        let json = r#"[{"particles": [{"x": 1.0, "y": 0.0}], "habitable_zone": {"r_inner": 0.9, "r_outer": 1.4}}]"#;
        let run = serde_json::from_str::<SimulateResponse>(json)
            .unwrap()
            .into_run();
        assert_eq!(run.habitable_zone.unwrap().r_outer, 1.4);
    }

    #[test]
    fn malformed_snapshot_degrades_to_origin() {
        let snap: Snapshot = serde_json::from_str(r#"{"star": {"mass": 1.0}}"#).unwrap();
        assert_eq!(snap.primary(), DVec2::ZERO);
    }

    #[test]
    fn zero_radius_means_unset() {
        let hz = HabitableZone {
            r_inner: 0.0,
            r_outer: 1.2,
        };
        assert_eq!(hz.inner(), None);
        assert_eq!(hz.outer(), Some(1.2));
    }

    #[test]
    fn run_parameters_serialize_flat() {
        let params = RunParameters {
            star_type: "sun_like".into(),
            x: 1.0,
            y: 0.1,
            vx: 0.0,
            vy: 1.0,
            dt: 0.1,
            steps: 2000,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["star_type"], "sun_like");
        assert_eq!(json["steps"], 2000);
    }
}
