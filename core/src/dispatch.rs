//! Routes decoded events to their handler.
//!
//! Every event kind has at most one handler, registered once at startup.
//! Faults caused by the event itself (undecodable payload, handler rejecting
//! the event) are logged and swallowed so the tail loop keeps going. Failures
//! writing the command file are returned to the caller.

use std::collections::HashMap;

use crate::error::BridgeError;
use crate::events::{EventKind, GameEvent, decode};
use crate::handlers::{EventHandler, HandlerError};
use crate::notify::NotifyError;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Box<dyn EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: EventKind, handler: impl EventHandler + 'static) -> &mut Self {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            tracing::warn!(event = kind.event_name(), "Replaced existing handler");
        }
        self
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Decode a raw payload and dispatch it.
    pub async fn handle_message(&self, raw: &str) -> Result<(), BridgeError> {
        match decode(raw) {
            Ok(event) => self.dispatch(&event).await,
            Err(e) => {
                tracing::error!(error = %e, payload = raw, "Failed to decode event");
                Ok(())
            }
        }
    }

    pub async fn dispatch(&self, event: &GameEvent) -> Result<(), BridgeError> {
        let Some(handler) = self.handlers.get(&event.kind()) else {
            tracing::info!(event = event.name(), "No handler found for event");
            return Ok(());
        };

        match handler.handle(event).await {
            Ok(()) => Ok(()),
            Err(HandlerError::Notify(NotifyError::Io(e))) => {
                Err(BridgeError::Output(NotifyError::Io(e)))
            }
            Err(e) => {
                tracing::error!(event = event.name(), error = %e, "Failure while handling event");
                Ok(())
            }
        }
    }
}
