mod affinet_error;
mod config_error;
mod session_error;
mod snapshot_error;

pub use affinet_error::{AffinetError, AffinetResult};
pub use config_error::ConfigError;
pub use session_error::SessionError;
pub use snapshot_error::SnapshotError;
