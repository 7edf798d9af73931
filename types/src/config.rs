use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outbound command format understood by the game server's plugin.
///
/// Both formats deliver the same capability; a deployment picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// `dg_tell_player` with sound/panel flags. Supports credit notifications.
    #[default]
    TellPlayer,
    /// Legacy `player_drinks` command: client id, steam id and messages only.
    PlayerDrinks,
}

impl WireFormat {
    /// Command name written in front of the JSON payload.
    pub const fn command_name(self) -> &'static str {
        match self {
            WireFormat::TellPlayer => "dg_tell_player",
            WireFormat::PlayerDrinks => "player_drinks",
        }
    }

    /// Whether attackers/assisters can be told they made someone drink.
    pub const fn supports_credit(self) -> bool {
        matches!(self, WireFormat::TellPlayer)
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::TellPlayer => f.write_str("tell_player"),
            WireFormat::PlayerDrinks => f.write_str("player_drinks"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tell_player" | "dg_tell_player" => Ok(WireFormat::TellPlayer),
            "player_drinks" => Ok(WireFormat::PlayerDrinks),
            other => Err(format!(
                "unknown wire format '{other}' (expected tell_player or player_drinks)"
            )),
        }
    }
}

/// Daemon configuration, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Game server console log that is tailed for event lines.
    pub console_log_path: String,
    /// File the game server plugin reads commands from.
    pub command_path: String,
    pub wire_format: WireFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert!(config.console_log_path.is_empty());
        assert!(config.command_path.is_empty());
        assert_eq!(config.wire_format, WireFormat::TellPlayer);
    }

    #[test]
    fn test_parse_toml() {
        let config: BridgeConfig = toml::from_str(
            r#"
            console_log_path = "/srv/tf/console.log"
            command_path = "/srv/tf/dg_commands.txt"
            wire_format = "player_drinks"
            "#,
        )
        .unwrap();

        assert_eq!(config.console_log_path, "/srv/tf/console.log");
        assert_eq!(config.command_path, "/srv/tf/dg_commands.txt");
        assert_eq!(config.wire_format, WireFormat::PlayerDrinks);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BridgeConfig = toml::from_str(r#"console_log_path = "a.log""#).unwrap();
        assert_eq!(config.console_log_path, "a.log");
        assert_eq!(config.command_path, "");
        assert_eq!(config.wire_format, WireFormat::TellPlayer);
    }

    #[test]
    fn test_wire_format_from_str() {
        assert_eq!("tell_player".parse::<WireFormat>(), Ok(WireFormat::TellPlayer));
        assert_eq!("DG_TELL_PLAYER".parse::<WireFormat>(), Ok(WireFormat::TellPlayer));
        assert_eq!("player_drinks".parse::<WireFormat>(), Ok(WireFormat::PlayerDrinks));
        assert!("shots".parse::<WireFormat>().is_err());
    }

    #[test]
    fn test_wire_format_commands() {
        assert_eq!(WireFormat::TellPlayer.command_name(), "dg_tell_player");
        assert_eq!(WireFormat::PlayerDrinks.command_name(), "player_drinks");
        assert!(WireFormat::TellPlayer.supports_credit());
        assert!(!WireFormat::PlayerDrinks.supports_credit());
    }
}
