use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Draw generation errors
    #[error("At least 2 participants are required, found {found}")]
    InsufficientParticipants { found: usize },

    #[error("Seeded draw requires a seed for every participant, missing for: {}", missing.join(", "))]
    MissingSeedData { missing: Vec<String> },

    #[error("Invalid seed value '{value}' for {name}: {reason}")]
    InvalidSeedValue {
        name: String,
        value: String,
        reason: String,
    },

    // Roster file errors
    #[error("Failed to parse roster file {path}: {message}")]
    RosterParse { path: String, message: String },

    #[error("Roster file {path} has no '{column}' column")]
    MissingColumn { path: String, column: String },

    #[error("Unsupported roster format: {path} (expected .csv, .json or .toml)")]
    UnsupportedRosterFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an insufficient participants error
    pub fn insufficient_participants(found: usize) -> Self {
        Self::InsufficientParticipants { found }
    }

    /// Create a missing seed data error listing the participants without a seed
    pub fn missing_seed_data(missing: Vec<String>) -> Self {
        Self::MissingSeedData { missing }
    }

    /// Create an invalid seed value error
    pub fn invalid_seed_value(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSeedValue {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a roster parse error with context
    pub fn roster_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RosterParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(path: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    /// Create an unsupported roster format error
    pub fn unsupported_roster_format(path: impl Into<String>) -> Self {
        Self::UnsupportedRosterFormat { path: path.into() }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if the error aborts the requested operation.
    ///
    /// Seed problems are reported back to the caller with an empty result
    /// so the roster can be fixed and the draw requested again.
    pub fn is_fatal(&self) -> bool {
        !self.is_seed_error()
    }

    /// Check if error is caused by missing or unusable seed ranks
    pub fn is_seed_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingSeedData { .. } | AppError::InvalidSeedValue { .. }
        )
    }
}
