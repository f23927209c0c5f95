//! Snapshot store: the ordered frame sequence for one run.

use crate::error::PlaybackError;
use crate::wire::{HabitableZone, SimulationRun, Snapshot};

/// Owns one run's snapshots plus the optional habitable-zone annotation.
/// Immutable for the lifetime of a playback session; a new run replaces the
/// whole store rather than mutating it.
#[derive(Debug)]
pub struct SnapshotStore {
    snapshots: Vec<Snapshot>,
    habitable_zone: Option<HabitableZone>,
}

impl SnapshotStore {
    /// Takes ownership of a run's data. An empty snapshot sequence is
    /// rejected; callers surface that to the user and do not start playback.
    pub fn load(run: SimulationRun) -> Result<Self, PlaybackError> {
        if run.snapshots.is_empty() {
            return Err(PlaybackError::EmptyRun);
        }
        Ok(Self {
            snapshots: run.snapshots,
            habitable_zone: run.habitable_zone,
        })
    }

    /// Frame at `index`. Requesting past `len() - 1` is a caller bug and
    /// panics.
    pub fn get(&self, index: usize) -> &Snapshot {
        &self.snapshots[index]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        // load() rejects empty runs, so this only exists for completeness.
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn habitable_zone(&self) -> Option<&HabitableZone> {
        self.habitable_zone.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_rejected() {
        let result = SnapshotStore::load(SimulationRun::default());
        assert_eq!(result.unwrap_err(), PlaybackError::EmptyRun);
    }

    #[test]
    fn load_keeps_order_and_annotation() {
        let run = SimulationRun {
            snapshots: vec![Snapshot::at(1.0, 0.0), Snapshot::at(0.0, 1.0)],
            habitable_zone: Some(HabitableZone {
                r_inner: 0.5,
                r_outer: 1.0,
            }),
        };
        let store = SnapshotStore::load(run).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).primary().y, 1.0);
        assert_eq!(store.habitable_zone().unwrap().r_outer, 1.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let run = SimulationRun {
            snapshots: vec![Snapshot::at(0.0, 0.0)],
            habitable_zone: None,
        };
        let store = SnapshotStore::load(run).unwrap();
        let _ = store.get(1);
    }
}
