/// Snapshot document errors. Only raised when the document itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot document: {reason}")]
    InvalidDocument { reason: String },

    #[error("snapshot document has no `tree` array")]
    MissingTree,
}
