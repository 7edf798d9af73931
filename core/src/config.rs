//! Loading and validating [`BridgeConfig`].

use dgbridge_types::BridgeConfig;
use std::path::{Path, PathBuf};

/// Name used for the platform config directory.
pub const APP_NAME: &str = "dgbridge";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] confy::ConfyError),

    #[error("{0} is not configured")]
    MissingPath(&'static str),
}

/// Loading and validation for [`BridgeConfig`], which lives in the
/// dependency-free types crate.
pub trait BridgeConfigExt: Sized {
    /// Load from `path`, or from the platform config directory when `None`.
    /// A missing file is created with defaults.
    fn load(path: Option<&Path>) -> Result<Self, ConfigError>;

    /// Where [`BridgeConfigExt::load`] reads from when no path is given.
    fn default_path() -> Result<PathBuf, ConfigError>;

    /// Both file paths must be set.
    fn validate(&self) -> Result<(), ConfigError>;
}

impl BridgeConfigExt for BridgeConfig {
    fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => confy::load_path(path)?,
            None => confy::load(APP_NAME, None)?,
        };
        Ok(config)
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.console_log_path.trim().is_empty() {
            return Err(ConfigError::MissingPath("console_log_path"));
        }
        if self.command_path.trim().is_empty() {
            return Err(ConfigError::MissingPath("command_path"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgbridge_types::WireFormat;

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dgbridge.toml");
        std::fs::write(
            &path,
            r#"
            console_log_path = "console.log"
            command_path = "commands.txt"
            wire_format = "player_drinks"
            "#,
        )
        .unwrap();

        let config = BridgeConfig::load(Some(&path)).unwrap();
        assert_eq!(config.console_log_path, "console.log");
        assert_eq!(config.command_path, "commands.txt");
        assert_eq!(config.wire_format, WireFormat::PlayerDrinks);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dgbridge.toml");

        let config = BridgeConfig::load(Some(&path)).unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_validate_requires_paths() {
        let mut config = BridgeConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPath("console_log_path"))
        ));

        config.console_log_path = "console.log".to_string();
        config.command_path = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPath("command_path"))
        ));
    }
}
