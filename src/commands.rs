use crate::cli::{Args, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tournament_draws::config::Config;
use tournament_draws::draw::{BracketLayout, Draw, DrawKind, LayoutOptions, generate_draw};
use tournament_draws::error::AppError;
use tournament_draws::roster::{load_roster, normalize_roster};
use tournament_draws::ui::{RenderOptions, print_draw, print_notice};
use tracing::{info, warn};

const SEED_GUIDANCE: &str =
    "Add a numeric 'Seed' value for every participant (lower is stronger) and run the draw again.";

/// JSON document written for a generated draw
#[derive(Debug, Serialize)]
struct DrawOutput<'a> {
    draw: &'a Draw,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<BracketLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.layout && args.format != OutputFormat::Json {
        return Err(AppError::config_error(
            "--layout is only available with JSON output (--format json)",
        ));
    }

    if args.output.is_some() && args.format != OutputFormat::Json {
        return Err(AppError::config_error(
            "--output is only available with JSON output (--format json)",
        ));
    }

    if args.roster.is_none() && !crate::cli::is_config_command(args) {
        return Err(AppError::config_error(
            "No roster file given. Pass a .csv, .json or .toml roster file.",
        ));
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-default-draw, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|e| {
        warn!("Could not load existing config, starting from defaults: {e}");
        Config::default()
    });

    apply_config_updates(&mut config, args);

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(kind) = args.new_default_draw {
        config.default_draw = kind;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Loads the roster, generates the requested draw and writes it out.
///
/// A rejected seeded draw is not fatal: the reason and a hint are shown
/// together with an empty table (or an `error` field in JSON output).
pub async fn handle_generate_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let roster_path = args
        .roster
        .as_deref()
        .ok_or_else(|| AppError::config_error("No roster file given"))?;

    let entries = load_roster(roster_path).await?;
    let roster = normalize_roster(&entries)?;
    let kind = resolve_draw_kind(args, config);
    let render_options = RenderOptions::from_config(config, !args.plain);

    let (draw, error) = match generate_draw(&roster, kind, args.seed) {
        Ok(draw) => (draw, None),
        Err(e) if !e.is_fatal() => {
            // Only seeded draws read seed ranks, so they are the only source of non-fatal errors
            debug_assert_eq!(kind, DrawKind::Seeded);
            warn!("{kind} draw rejected: {e}");
            (Draw::Seeded { matches: Vec::new() }, Some(e))
        }
        Err(e) => return Err(e),
    };

    match args.format {
        OutputFormat::Table => {
            if let Some(e) = &error {
                print_notice(&e.to_string(), &render_options)?;
                print_notice(SEED_GUIDANCE, &render_options)?;
            }
            print_draw(&draw, &render_options)?;
        }
        OutputFormat::Json => {
            let layout_options = args.layout.then(|| LayoutOptions::from(config));
            let json = render_json(&draw, layout_options.as_ref(), error.as_ref())?;
            write_json(&json, args.output.as_deref()).await?;
        }
    }

    info!(
        "Generated {} draw with {} matches from {}",
        draw.kind(),
        draw.match_count(),
        roster_path.display()
    );
    Ok(())
}

/// Serializes a draw for JSON output, adding the bracket layout when
/// `layout_options` is given and the draw is a knockout bracket.
fn render_json(
    draw: &Draw,
    layout_options: Option<&LayoutOptions>,
    error: Option<&AppError>,
) -> Result<String, AppError> {
    let layout = match (layout_options, draw.bracket()) {
        (Some(options), Some(bracket)) => Some(BracketLayout::compute(bracket, options)),
        (Some(_), None) => {
            warn!("Layout requested for a {} draw; only knockout draws have one", draw.kind());
            None
        }
        (None, _) => None,
    };

    let output = DrawOutput {
        draw,
        layout,
        error: error.map(ToString::to_string),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

async fn write_json(json: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, format!("{json}\n")).await?;
            info!("Draw written to {}", path.display());
            println!("Draw written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Resolves the draw kind named on the command line or in the config
pub fn resolve_draw_kind(args: &Args, config: &Config) -> DrawKind {
    args.draw.unwrap_or(config.default_draw)
}
