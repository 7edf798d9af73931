use phf::phf_map;

use super::schema::{DeathEvent, EventEnvelope, GameEvent, RoundStartEvent, RoundWinEvent};

/// Concrete schema an event line decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PlayerDeath,
    ObjectDestroyed,
    RoundStart,
    RoundWin,
}

static EVENT_KINDS: phf::Map<&'static str, EventKind> = phf_map! {
    "player_death" => EventKind::PlayerDeath,
    "teamplay_round_start" => EventKind::RoundStart,
    "teamplay_round_win" => EventKind::RoundWin,
    "object_destroyed" => EventKind::ObjectDestroyed,
};

impl EventKind {
    pub fn from_event_name(name: &str) -> Option<Self> {
        EVENT_KINDS.get(name).copied()
    }

    pub const fn event_name(self) -> &'static str {
        match self {
            EventKind::PlayerDeath => "player_death",
            EventKind::ObjectDestroyed => "object_destroyed",
            EventKind::RoundStart => "teamplay_round_start",
            EventKind::RoundWin => "teamplay_round_win",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

/// Decode a raw payload (sentinel prefix already stripped) into a typed event.
pub fn decode(raw: &str) -> Result<GameEvent, DecodeError> {
    let envelope: EventEnvelope = serde_json::from_str(raw)?;
    let kind = EventKind::from_event_name(&envelope.event_name)
        .ok_or(DecodeError::UnknownEvent(envelope.event_name))?;

    let event = match kind {
        EventKind::PlayerDeath => {
            GameEvent::PlayerDeath(serde_json::from_str::<DeathEvent>(raw)?)
        }
        EventKind::ObjectDestroyed => {
            GameEvent::ObjectDestroyed(serde_json::from_str::<DeathEvent>(raw)?)
        }
        EventKind::RoundStart => {
            GameEvent::RoundStart(serde_json::from_str::<RoundStartEvent>(raw)?)
        }
        EventKind::RoundWin => GameEvent::RoundWin(serde_json::from_str::<RoundWinEvent>(raw)?),
    };

    Ok(event)
}
