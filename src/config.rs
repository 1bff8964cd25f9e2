use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GitPrepError, Result};

/// Represents the complete configuration for git-prep.
///
/// Contains the git config entries to apply, the hooks to install, and the
/// behaviour switches a host build tool would normally inject.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Initialise a git repository when none can be found.
    pub initialise: bool,

    /// Directory to configure as the custom git hooks path (core.hooksPath).
    pub hooks_path: Option<String>,

    /// Per-step skip switches.
    pub skip: SkipConfig,

    /// Dotted git config keys and the values to set them to.
    pub git_config: BTreeMap<String, String>,

    /// Hook file names and the sources to install them from.
    pub install_hooks: BTreeMap<String, String>,
}

/// Switches for skipping individual preparation steps.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SkipConfig {
    pub init: bool,
    pub configure: bool,
    pub install: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitprep.toml` in current directory
/// 3. `~/.config/.gitprep.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitprep.toml").exists() {
        fs::read_to_string("./gitprep.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitprep.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| GitPrepError::config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(!config.initialise);
        assert!(config.hooks_path.is_none());
        assert!(config.git_config.is_empty());
        assert!(config.install_hooks.is_empty());
        assert_eq!(config.skip, SkipConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            initialise = true
            hooks-path = "hooks/"

            [skip]
            install = true

            [git-config]
            "core.hooksPath" = "hooks-path/"
            "custom.config.name" = "custom"

            [install-hooks]
            pre-commit = "hook-to-install.sh"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.initialise);
        assert_eq!(config.hooks_path.as_deref(), Some("hooks/"));
        assert!(config.skip.install);
        assert!(!config.skip.init);
        assert_eq!(
            config.git_config.get("core.hooksPath").map(String::as_str),
            Some("hooks-path/")
        );
        assert_eq!(
            config.git_config.get("custom.config.name").map(String::as_str),
            Some("custom")
        );
        assert_eq!(
            config.install_hooks.get("pre-commit").map(String::as_str),
            Some("hook-to-install.sh")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("initialise = true").unwrap();
        assert!(config.initialise);
        assert!(config.git_config.is_empty());
        assert!(config.install_hooks.is_empty());
    }

    #[test]
    fn test_load_config_missing_explicit_path_fails() {
        let result = load_config(Some("/nonexistent/path/gitprep.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gitprep.toml");
        fs::write(&path, "initialise = true\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert!(config.initialise);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gitprep.toml");
        fs::write(&path, "initialise = [not toml").unwrap();

        let result = load_config(path.to_str());
        assert!(matches!(result, Err(GitPrepError::Config(_))));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config {
            initialise: true,
            hooks_path: Some("hooks/".to_string()),
            ..Config::default()
        };
        config
            .git_config
            .insert("core.hooksPath".to_string(), "hooks/".to_string());
        config
            .install_hooks
            .insert("pre-push".to_string(), "scripts/pre-push.sh".to_string());

        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
