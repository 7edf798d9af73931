use serde::Deserialize;

use super::EventKind;
use crate::rules::is_marked_name;

/// Minimal shape used to discover the concrete schema of a payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    pub event_name: String,
}

/// One participant of a death event. Every field is optional on the wire:
/// attackers and assisters are absent for suicides and world kills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub client_id: Option<i32>,
    pub name: Option<String>,
    pub steam_id: Option<String>,
}

impl PlayerIdentity {
    /// Display name carries a drinking tag such as `[DG]` or `{SCG}`.
    pub fn is_marked(&self) -> bool {
        self.name.as_deref().is_some_and(is_marked_name)
    }

    /// Both ids needed to address the player are present.
    pub fn addressable(&self) -> Option<(i32, &str)> {
        Some((self.client_id?, self.steam_id.as_deref()?))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// `player_death` / `object_destroyed` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "WireDeathEvent")]
pub struct DeathEvent {
    pub victim: PlayerIdentity,
    pub attacker: PlayerIdentity,
    pub assister: PlayerIdentity,
    pub damage_bits: Option<i64>,
    pub death_flags: Option<i64>,
    pub weapon: Option<String>,
    pub weapon_log_class_name: Option<String>,
}

impl DeathEvent {
    /// Attacker is not the victim. Absent ids compare like any other value,
    /// so a missing attacker id only matches a missing victim id.
    pub fn is_not_suicide(&self) -> bool {
        self.attacker.client_id != self.victim.client_id
    }

    pub fn weapon(&self) -> Option<&str> {
        self.weapon.as_deref()
    }
}

/// Flat field layout emitted by the game plugin.
#[derive(Deserialize)]
struct WireDeathEvent {
    userid_client_id: Option<i32>,
    attacker_client_id: Option<i32>,
    assister_client_id: Option<i32>,
    userid_name: Option<String>,
    attacker_name: Option<String>,
    assister_name: Option<String>,
    userid_steam_id: Option<String>,
    attacker_steam_id: Option<String>,
    assister_steam_id: Option<String>,
    damagebits: Option<i64>,
    death_flags: Option<i64>,
    weapon: Option<String>,
    weapon_logclassname: Option<String>,
}

impl From<WireDeathEvent> for DeathEvent {
    fn from(wire: WireDeathEvent) -> Self {
        Self {
            victim: PlayerIdentity {
                client_id: wire.userid_client_id,
                name: wire.userid_name,
                steam_id: wire.userid_steam_id,
            },
            attacker: PlayerIdentity {
                client_id: wire.attacker_client_id,
                name: wire.attacker_name,
                steam_id: wire.attacker_steam_id,
            },
            assister: PlayerIdentity {
                client_id: wire.assister_client_id,
                name: wire.assister_name,
                steam_id: wire.assister_steam_id,
            },
            damage_bits: wire.damagebits,
            death_flags: wire.death_flags,
            weapon: wire.weapon,
            weapon_log_class_name: wire.weapon_logclassname,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoundStartEvent {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoundWinEvent {
    pub team: Option<i32>,
    #[serde(rename = "winreason")]
    pub win_reason: Option<i32>,
}

/// A fully decoded event line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PlayerDeath(DeathEvent),
    ObjectDestroyed(DeathEvent),
    RoundStart(RoundStartEvent),
    RoundWin(RoundWinEvent),
}

impl GameEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayerDeath(_) => EventKind::PlayerDeath,
            GameEvent::ObjectDestroyed(_) => EventKind::ObjectDestroyed,
            GameEvent::RoundStart(_) => EventKind::RoundStart,
            GameEvent::RoundWin(_) => EventKind::RoundWin,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind().event_name()
    }
}
