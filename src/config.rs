use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for gradle-bump.
///
/// Contains the descriptor and changelog locations, the version-name policy,
/// and behavior options. CLI flags override all of these.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_gradle_path")]
    pub gradle_path: String,

    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,

    #[serde(default)]
    pub strict_names: bool,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default descriptor location.
fn default_gradle_path() -> String {
    "android/app/build.gradle".to_string()
}

/// Returns the default changelog location.
fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of gradle-bump without affecting the bump
/// policy itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub always_changelog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gradle_path: default_gradle_path(),
            changelog_path: default_changelog_path(),
            strict_names: false,
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gradlebump.toml` in current directory
/// 3. `.gradlebump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gradlebump.toml").exists() {
        fs::read_to_string("./gradlebump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gradlebump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
