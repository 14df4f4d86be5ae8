//! Table rendering for generated draws

use super::RenderOptions;
use super::colors::*;
use crate::constants::table::{CONTENT_MARGIN, MIN_COLUMN_WIDTH};
use crate::draw::{Draw, Match, Slot};
use crossterm::style::Color;

const NO_MATCHES: &str = "no matches";

/// Renders a draw as a two-column table per round.
///
/// Schedules get "Round N" headers, knockout rounds get their bracket names
/// ("Final", "Semi-finals", ...). Byes and winner placeholders are dimmed when
/// colours are enabled.
pub fn render_draw(draw: &Draw, options: &RenderOptions) -> String {
    let width = column_width(draw, options);
    let margin = " ".repeat(CONTENT_MARGIN);
    let mut lines = Vec::new();

    let title = format!("{} DRAW", draw.kind().as_str().to_uppercase());
    lines.push(paint(&title, header_fg(), options));
    if let Some(seed) = draw.rng_seed() {
        lines.push(paint(&format!("Seed: {seed}"), seed_fg(), options));
    }

    for (r, round) in draw.rounds().iter().enumerate() {
        lines.push(String::new());
        let heading = match draw.bracket() {
            Some(bracket) => bracket.round_name(r),
            None => format!("Round {}", r + 1),
        };
        lines.push(paint(&heading, subheader_fg(), options));

        if round.is_empty() {
            lines.push(format!("{margin}{}", paint(NO_MATCHES, dimmed_fg(), options)));
            continue;
        }

        lines.push(format!(
            "{margin}{} | {}",
            paint(&format!("{:<width$}", "Team 1"), column_header_fg(), options),
            paint("Team 2", column_header_fg(), options)
        ));
        for m in round {
            lines.push(format_match(m, width, &margin, options));
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn format_match(m: &Match, width: usize, margin: &str, options: &RenderOptions) -> String {
    let left = format!("{:<width$}", m.team1.label_with(&options.bye_label));
    let right = m.team2.label_with(&options.bye_label);
    format!(
        "{margin}{} | {}",
        paint(&left, slot_color(&m.team1), options),
        paint(&right, slot_color(&m.team2), options)
    )
}

fn slot_color(slot: &Slot) -> Color {
    match slot {
        Slot::Entrant(_) => text_fg(),
        Slot::Bye | Slot::WinnerOf(_) => dimmed_fg(),
    }
}

fn column_width(draw: &Draw, options: &RenderOptions) -> usize {
    draw.rounds()
        .iter()
        .flatten()
        .map(|m| m.team1.label_with(&options.bye_label).chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH)
}

pub(crate) fn paint(text: &str, color: Color, options: &RenderOptions) -> String {
    if options.color {
        let code = get_ansi_code(color, 231);
        format!("\x1b[38;5;{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
