//! Application-wide constants and configuration values
//!
//! This module centralizes labels, layout defaults and environment variable
//! names so the draw engine, renderer and configuration agree on them.

/// Minimum number of participants for any draw
pub const MIN_PARTICIPANTS: usize = 2;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "tournament_draws.log";

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "tournament_draws";

/// Labels shown for non-participant slots
pub mod labels {
    /// Literal rendered for a bye slot
    pub const BYE: &str = "BYE";

    /// Prefix for undetermined bracket advancers ("Winner 1", "Winner 2", ...)
    pub const WINNER_PREFIX: &str = "Winner";

    /// Label placed at the terminal node of a knockout bracket
    pub const CHAMPION: &str = "Champion";
}

/// Bracket layout geometry
pub mod layout {
    /// Horizontal distance between bracket rounds
    pub const DEFAULT_X_GAP: f64 = 2.0;

    /// Vertical distance between the two entries of a match
    pub const DEFAULT_Y_GAP: f64 = 1.0;
}

/// Terminal table rendering
pub mod table {
    /// Minimum column width for team names
    pub const MIN_COLUMN_WIDTH: usize = 12;

    /// Left margin before each table row
    pub const CONTENT_MARGIN: usize = 2;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable overriding the default draw kind
    pub const DEFAULT_DRAW: &str = "DRAWS_DEFAULT_DRAW";

    /// Environment variable for log file path
    pub const LOG_FILE: &str = "DRAWS_LOG_FILE";

    /// Environment variable overriding the bracket horizontal gap
    pub const X_GAP: &str = "DRAWS_X_GAP";

    /// Environment variable overriding the bracket vertical gap
    pub const Y_GAP: &str = "DRAWS_Y_GAP";
}
