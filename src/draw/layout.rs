//! Bracket layout: 2-D node positions and connector segments for tree rendering

use super::models::Bracket;
use crate::config::Config;
use crate::constants::{labels, layout};
use serde::Serialize;

/// Geometry and labels used when laying out a bracket
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Horizontal distance between rounds
    pub x_gap: f64,
    /// Vertical distance between the two entries of a match
    pub y_gap: f64,
    pub bye_label: String,
    pub champion_label: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            x_gap: layout::DEFAULT_X_GAP,
            y_gap: layout::DEFAULT_Y_GAP,
            bye_label: labels::BYE.to_string(),
            champion_label: labels::CHAMPION.to_string(),
        }
    }
}

impl From<&Config> for LayoutOptions {
    fn from(config: &Config) -> Self {
        Self {
            x_gap: config.x_gap,
            y_gap: config.y_gap,
            bye_label: config.bye_label.clone(),
            champion_label: config.champion_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
}

impl Connector {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

/// A rendering-ready position for one bracket entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketNode {
    pub round: usize,
    /// Entry index within the round: `2 * match_index` for team 1, `+ 1` for team 2
    pub slot: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// All nodes and connectors of a laid out bracket.
///
/// The champion node is always the last node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketLayout {
    pub nodes: Vec<BracketNode>,
    pub connectors: Vec<Connector>,
}

impl BracketLayout {
    /// Computes node coordinates and connectors for a bracket.
    ///
    /// Round `r` sits at `x = r * x_gap`. Match `i` places team 1 at
    /// `y1 = i * 2 * y_gap` and team 2 at `y2 = y1 - y_gap`. Each entry gets a
    /// horizontal line to the midline `x + x_gap / 2`, the midline joins `y1`
    /// and `y2`, and a horizontal line leads from the midpoint of the match to
    /// the next round's `x`. The champion node sits one gap right of the final
    /// round at `y = 0`.
    pub fn compute(bracket: &Bracket, options: &LayoutOptions) -> Self {
        let x_gap = options.x_gap;
        let y_gap = options.y_gap;
        let match_count: usize = bracket.rounds.iter().map(Vec::len).sum();

        let mut nodes = Vec::with_capacity(match_count * 2 + 1);
        let mut connectors = Vec::with_capacity(match_count * 4);

        for (r, round) in bracket.rounds.iter().enumerate() {
            let x = r as f64 * x_gap;
            let mid_x = x + x_gap / 2.0;
            let next_x = x + x_gap;

            for (i, m) in round.iter().enumerate() {
                let y1 = i as f64 * 2.0 * y_gap;
                let y2 = y1 - y_gap;
                let y_mid = (y1 + y2) / 2.0;

                nodes.push(BracketNode {
                    round: r,
                    slot: 2 * i,
                    label: m.team1.label_with(&options.bye_label),
                    x,
                    y: y1,
                });
                nodes.push(BracketNode {
                    round: r,
                    slot: 2 * i + 1,
                    label: m.team2.label_with(&options.bye_label),
                    x,
                    y: y2,
                });

                connectors.push(Connector::new(Point::new(x, y1), Point::new(mid_x, y1)));
                connectors.push(Connector::new(Point::new(x, y2), Point::new(mid_x, y2)));
                connectors.push(Connector::new(Point::new(mid_x, y2), Point::new(mid_x, y1)));
                connectors.push(Connector::new(
                    Point::new(mid_x, y_mid),
                    Point::new(next_x, y_mid),
                ));
            }
        }

        nodes.push(BracketNode {
            round: bracket.rounds.len(),
            slot: 0,
            label: options.champion_label.clone(),
            x: bracket.rounds.len() as f64 * x_gap,
            y: 0.0,
        });

        Self { nodes, connectors }
    }

    /// The terminal node holding the champion label
    pub fn champion(&self) -> Option<&BracketNode> {
        self.nodes.last()
    }

    pub fn nodes_in_round(&self, round: usize) -> impl Iterator<Item = &BracketNode> {
        self.nodes.iter().filter(move |node| node.round == round)
    }
}
