//! Outbound notifications to players.
//!
//! The game server plugin polls a command file; every [`Notification`] becomes
//! one line in that file. Which command the line uses depends on the
//! configured [`WireFormat`](dgbridge_types::WireFormat).

mod command_file;

pub use command_file::CommandFileNotifier;

/// Errors that can occur while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("command file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode notification: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A message for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub client_id: i32,
    pub steam_id: String,
    pub messages: Vec<String>,
    pub play_drink_sound: bool,
    pub show_in_panel: bool,
}

impl Notification {
    /// Plain chat message without sound or panel.
    pub fn tell(client_id: i32, steam_id: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            client_id,
            steam_id: steam_id.into(),
            messages,
            play_drink_sound: false,
            show_in_panel: false,
        }
    }

    /// Drink order: plays the drink sound and shows the breakdown in the panel.
    pub fn drink(client_id: i32, steam_id: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            play_drink_sound: true,
            show_in_panel: true,
            ..Self::tell(client_id, steam_id, messages)
        }
    }
}

/// Delivery channel for notifications.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// Whether attackers and assisters can be credited with a separate message.
    fn supports_credit(&self) -> bool {
        true
    }
}
