use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Bracket gaps must be finite and greater than zero
/// - Bye and champion labels cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    for (name, gap) in [("x_gap", config.x_gap), ("y_gap", config.y_gap)] {
        if !gap.is_finite() || gap <= 0.0 {
            return Err(AppError::config_error(format!(
                "{name} must be a positive number, got {gap}"
            )));
        }
    }

    if config.bye_label.trim().is_empty() {
        return Err(AppError::config_error("Bye label cannot be empty"));
    }

    if config.champion_label.trim().is_empty() {
        return Err(AppError::config_error("Champion label cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
