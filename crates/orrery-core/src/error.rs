//! Error types for the playback core.

use thiserror::Error;

/// Errors that can stop a run from starting.
///
/// All of these are local to one run attempt: the caller surfaces the message
/// and stays ready to accept a new run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// The service returned zero snapshots. Distinct from transport failures
    /// so the UI can word the message accordingly.
    #[error("simulation returned no snapshots")]
    EmptyRun,
}
