pub mod player_death;

pub use player_death::PlayerDeathHandler;

use crate::events::{EventKind, GameEvent};
use crate::notify::NotifyError;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("handler for {expected:?} received {received:?}")]
    UnexpectedEvent {
        expected: EventKind,
        received: EventKind,
    },
}

impl HandlerError {
    /// Failures of the command file itself, as opposed to a bad event.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, HandlerError::Notify(NotifyError::Io(_)))
    }
}

/// Reacts to one kind of decoded event.
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &GameEvent) -> Result<(), HandlerError>;
}
