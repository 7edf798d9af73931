use dgbridge_types::WireFormat;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::{Notification, Notifier, NotifyError};

#[derive(Serialize)]
struct TellPlayerPayload<'a> {
    client_id: i32,
    steam_id: &'a str,
    messages: &'a [String],
    play_drink_sound: bool,
    show_in_panel: bool,
}

#[derive(Serialize)]
struct PlayerDrinksPayload<'a> {
    client_id: i32,
    steam_id: &'a str,
    messages: &'a [String],
}

/// Appends `<command> <json>` lines to the plugin's command file.
///
/// The file is opened for every notification and closed right after, so the
/// plugin is free to read, truncate or delete it between writes. It must
/// already exist.
#[derive(Debug, Clone)]
pub struct CommandFileNotifier {
    path: PathBuf,
    format: WireFormat,
}

impl CommandFileNotifier {
    pub fn new(path: impl Into<PathBuf>, format: WireFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Render the command line (without trailing newline).
    pub fn render(&self, notification: &Notification) -> Result<String, NotifyError> {
        let json = match self.format {
            WireFormat::TellPlayer => serde_json::to_string(&TellPlayerPayload {
                client_id: notification.client_id,
                steam_id: &notification.steam_id,
                messages: &notification.messages,
                play_drink_sound: notification.play_drink_sound,
                show_in_panel: notification.show_in_panel,
            })?,
            WireFormat::PlayerDrinks => serde_json::to_string(&PlayerDrinksPayload {
                client_id: notification.client_id,
                steam_id: &notification.steam_id,
                messages: &notification.messages,
            })?,
        };
        Ok(format!("{} {}", self.format.command_name(), json))
    }
}

#[async_trait::async_trait]
impl Notifier for CommandFileNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut line = self.render(notification)?;
        line.push('\n');

        // std's default Windows share mode already allows read, write and delete.
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            client_id = notification.client_id,
            command = self.format.command_name(),
            "Notification written"
        );
        Ok(())
    }

    fn supports_credit(&self) -> bool {
        self.format.supports_credit()
    }
}
