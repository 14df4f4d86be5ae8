use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tournament_draws::draw::DrawKind;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// How a generated draw is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Teletext-style table in the terminal
    #[default]
    Table,
    /// JSON for external renderers and exporters
    Json,
}

/// Returns true when the invocation only touches configuration
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_default_draw.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Tournament draw generator
///
/// Reads a roster file (CSV, JSON or TOML) and generates a random or seeded
/// single-round pairing, a full round-robin schedule, or a single-elimination
/// knockout bracket.
///
/// CSV rosters need a "Team" (or "Name") column and, for seeded draws, a
/// "Seed" column with numeric ranks. Lower rank means stronger seed.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Roster file to draw from (.csv, .json or .toml)
    #[arg(value_name = "ROSTER")]
    pub roster: Option<PathBuf>,

    /// Kind of draw to generate. Defaults to the configured draw, or round-robin.
    #[arg(short = 't', long = "draw", value_name = "KIND", help_heading = "Draw Options")]
    pub draw: Option<DrawKind>,

    /// RNG seed for random and knockout draws. The same roster and seed always
    /// produce the same draw.
    #[arg(short = 's', long = "seed", value_name = "SEED", help_heading = "Draw Options")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Include the bracket layout (node coordinates and connectors) in JSON
    /// output of knockout draws.
    #[arg(long = "layout", help_heading = "Output Options")]
    pub layout: bool,

    /// Write JSON output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Disable colours in table output
    #[arg(long = "plain", short = 'p', help_heading = "Output Options")]
    pub plain: bool,

    /// Set the draw kind used when --draw is not given
    #[arg(long = "set-default-draw", value_name = "KIND", help_heading = "Configuration")]
    pub new_default_draw: Option<DrawKind>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Logs are written to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
