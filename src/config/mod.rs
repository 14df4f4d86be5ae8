use crate::constants::{env_vars, labels, layout};
use crate::draw::DrawKind;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Draw generated when no `--draw` argument is given.
    #[serde(default)]
    pub default_draw: DrawKind,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Horizontal distance between bracket rounds in layout output.
    #[serde(default = "default_x_gap")]
    pub x_gap: f64,
    /// Vertical distance between the two entries of a bracket match.
    #[serde(default = "default_y_gap")]
    pub y_gap: f64,
    /// Label placed at the terminal node of a knockout bracket.
    #[serde(default = "default_champion_label")]
    pub champion_label: String,
    /// Label shown for bye slots.
    #[serde(default = "default_bye_label")]
    pub bye_label: String,
}

fn default_x_gap() -> f64 {
    layout::DEFAULT_X_GAP
}

fn default_y_gap() -> f64 {
    layout::DEFAULT_Y_GAP
}

fn default_champion_label() -> String {
    labels::CHAMPION.to_string()
}

fn default_bye_label() -> String {
    labels::BYE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_draw: DrawKind::default(),
            log_file_path: None,
            x_gap: default_x_gap(),
            y_gap: default_y_gap(),
            champion_label: default_champion_label(),
            bye_label: default_bye_label(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used; nothing is written until
    /// a configuration command saves the file.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `DRAWS_DEFAULT_DRAW` - Override default draw kind
    /// - `DRAWS_LOG_FILE` - Override log file path
    /// - `DRAWS_X_GAP` / `DRAWS_Y_GAP` - Override bracket layout gaps
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the loaded values.
    /// Unparseable values are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(draw) = std::env::var(env_vars::DEFAULT_DRAW) {
            match draw.parse::<DrawKind>() {
                Ok(kind) => self.default_draw = kind,
                Err(e) => warn!("Ignoring {}: {e}", env_vars::DEFAULT_DRAW),
            }
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(x_gap) = parse_env_f64(env_vars::X_GAP) {
            self.x_gap = x_gap;
        }

        if let Some(y_gap) = parse_env_f64(env_vars::Y_GAP) {
            self.y_gap = y_gap;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Default Draw:");
            println!("{}", config.default_draw);
            println!("────────────────────────────────────");
            println!("Bracket Layout:");
            println!("x gap {}, y gap {}", config.x_gap, config.y_gap);
            println!("Labels: bye \"{}\", champion \"{}\"", config.bye_label, config.champion_label);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn parse_env_f64(name: &str) -> Option<f64> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {name}: '{value}' is not a number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
default_draw = "knockout"
log_file_path = "/custom/log/path"
x_gap = 3.0
champion_label = "Mestari"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.default_draw, DrawKind::Knockout);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.x_gap, 3.0);
        assert_eq!(config.y_gap, layout::DEFAULT_Y_GAP);
        assert_eq!(config.champion_label, "Mestari");
        assert_eq!(config.bye_label, labels::BYE);
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            default_draw: DrawKind::Seeded,
            log_file_path: Some("/custom/log/path".to_string()),
            x_gap: 2.5,
            y_gap: 0.5,
            champion_label: "Winner".to_string(),
            bye_label: "vapaa".to_string(),
        };

        original_config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("default_draw") && content.contains("seeded"),
            "Content should contain the default draw. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config, original_config);
    }

    #[tokio::test]
    async fn test_config_without_log_file_path_serialization() {
        let config = Config::default();

        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("round-robin"));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "default_draw = [unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_unknown_draw_kind() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "default_draw = \"swiss\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();

        assert!(config_path.contains("tournament_draws"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();

        assert!(log_dir_path.contains("tournament_draws"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_config_validation_valid_configs() {
        assert!(Config::default().validate().is_ok());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("draws.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let invalid = vec![
            Config {
                x_gap: 0.0,
                ..Config::default()
            },
            Config {
                y_gap: -1.0,
                ..Config::default()
            },
            Config {
                x_gap: f64::NAN,
                ..Config::default()
            },
            Config {
                bye_label: " ".to_string(),
                ..Config::default()
            },
            Config {
                champion_label: String::new(),
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in invalid {
            let result = config.validate();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Config {config:?} should be rejected"
            );
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(env_vars::DEFAULT_DRAW, "knockout");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::X_GAP, "5");
            std::env::set_var(env_vars::Y_GAP, "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.default_draw, DrawKind::Knockout);
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.x_gap, 5.0);
        assert_eq!(config.y_gap, layout::DEFAULT_Y_GAP);

        unsafe {
            std::env::remove_var(env_vars::DEFAULT_DRAW);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::X_GAP);
            std::env::remove_var(env_vars::Y_GAP);
        }
    }

    #[test]
    #[serial]
    fn test_invalid_draw_env_var_is_ignored() {
        unsafe {
            std::env::set_var(env_vars::DEFAULT_DRAW, "swiss");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.default_draw, DrawKind::RoundRobin);

        unsafe {
            std::env::remove_var(env_vars::DEFAULT_DRAW);
        }
    }

    #[test]
    fn test_layout_options_from_config() {
        let config = Config {
            x_gap: 3.0,
            bye_label: "vapaa".to_string(),
            ..Config::default()
        };

        let options = crate::draw::LayoutOptions::from(&config);
        assert_eq!(options.x_gap, 3.0);
        assert_eq!(options.y_gap, config.y_gap);
        assert_eq!(options.bye_label, "vapaa");
        assert_eq!(options.champion_label, labels::CHAMPION);
    }
}
