//! Tournament Draw Generation Library
//!
//! This library turns a roster of participants into structured tournament
//! draws: random or seeded single-round pairings, full round-robin schedules
//! and single-elimination knockout brackets, plus the 2-D layout needed to
//! draw a bracket as a tree.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tournament_draws::draw::{BracketLayout, DrawKind, LayoutOptions, generate_draw};
//! use tournament_draws::error::AppError;
//! use tournament_draws::roster::{load_roster, normalize_roster};
//! use tournament_draws::ui::{RenderOptions, print_draw};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Read and clean up the roster
//!     let entries = load_roster(Path::new("teams.csv")).await?;
//!     let roster = normalize_roster(&entries)?;
//!
//!     // The same roster and seed always give the same bracket
//!     let draw = generate_draw(&roster, DrawKind::Knockout, Some(2024))?;
//!     print_draw(&draw, &RenderOptions::default())?;
//!
//!     if let Some(bracket) = draw.bracket() {
//!         let layout = BracketLayout::compute(bracket, &LayoutOptions::default());
//!         println!("{} nodes, {} connectors", layout.nodes.len(), layout.connectors.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod roster;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use draw::{
    Bracket, BracketLayout, Draw, DrawKind, LayoutOptions, Match, MatchId, Slot, generate_draw,
    knockout_bracket, random_pairing, round_robin, seeded_pairing,
};
pub use error::AppError;
pub use roster::{Participant, RosterEntry, SeedValue, load_roster, normalize_roster};
pub use ui::{RenderOptions, print_draw, render_draw};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
