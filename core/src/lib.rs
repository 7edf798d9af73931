pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod handlers;
pub mod notify;
pub mod rules;
pub mod tailer;
pub mod tf_ids;

// Re-exports for convenience
pub use config::{BridgeConfigExt, ConfigError};
pub use dispatch::Dispatcher;
pub use error::BridgeError;
pub use events::{DeathEvent, EventKind, GameEvent, decode};
pub use handlers::{EventHandler, PlayerDeathHandler};
pub use notify::{CommandFileNotifier, Notification, Notifier};
pub use rules::RuleSet;
pub use tailer::{SENTINEL_PREFIX, tail_console_log};
