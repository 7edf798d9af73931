//! Typed game events and the decoder that produces them.
//!
//! Event lines carry a JSON object with an `event_name` discriminator. Decoding
//! happens in two phases: the envelope is read to find the schema, then the
//! same payload is parsed again against that schema.

mod decode;
mod schema;

pub use decode::{DecodeError, EventKind, decode};
pub use schema::{
    DeathEvent, EventEnvelope, GameEvent, PlayerIdentity, RoundStartEvent, RoundWinEvent,
};
