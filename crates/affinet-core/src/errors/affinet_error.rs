use super::{ConfigError, SessionError, SnapshotError};

/// Root error for the workspace. Subsystem errors convert into it with `?`.
///
/// Structural anomalies in member data (missing ids, orphans, cycles) are
/// never errors; they are tallied in [`crate::AnomalyTally`].
#[derive(Debug, thiserror::Error)]
pub enum AffinetError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type AffinetResult<T> = Result<T, AffinetError>;
