//! Terminal output for generated draws

pub mod colors;
pub mod table;

pub use table::render_draw;

use crate::config::Config;
use crate::constants::labels;
use crate::draw::Draw;
use crate::error::AppError;
use crossterm::{execute, style::Print};
use std::io::stdout;

/// Options controlling terminal rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Emit ANSI colours in the teletext palette
    pub color: bool,
    /// Label shown for bye slots
    pub bye_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            bye_label: labels::BYE.to_string(),
        }
    }
}

impl RenderOptions {
    /// Rendering options taken from the configuration
    pub fn from_config(config: &Config, color: bool) -> Self {
        Self {
            color,
            bye_label: config.bye_label.clone(),
        }
    }
}

/// Writes the rendered draw to stdout.
pub fn print_draw(draw: &Draw, options: &RenderOptions) -> Result<(), AppError> {
    let mut stdout = stdout();
    execute!(stdout, Print(render_draw(draw, options)))?;
    Ok(())
}

/// Writes a highlighted notice line to stdout, e.g. guidance after a
/// rejected seeded draw.
pub fn print_notice(message: &str, options: &RenderOptions) -> Result<(), AppError> {
    let mut stdout = stdout();
    let line = table::paint(message, colors::notice_fg(), options);
    execute!(stdout, Print(format!("{line}\n")))?;
    Ok(())
}
