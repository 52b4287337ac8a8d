/// Display session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    SessionNotFound(String),
}
