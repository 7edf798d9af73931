use crate::config::ConfigError;
use crate::notify::NotifyError;

/// Faults that stop the bridge. Anything wrong with an individual event line
/// is handled inside the dispatcher and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("console log I/O failed: {0}")]
    ConsoleLog(#[from] std::io::Error),

    #[error("command output failed: {0}")]
    Output(#[from] NotifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
