//! ANSI terminal rendering of resolved clusters.
//!
//! Each cluster gets a random colour from the six basic ANSI colours
//! (red..cyan). Size-priority results are disjoint, so each cluster row is
//! painted as one background-coloured span. Containment results may
//! overlap; there each cell keeps the first foreground colour it receives.

use rand::Rng;
use square_clusters_core::{BinaryGrid, Cluster, ResolveMode, SizeSummary};

pub const ESC: char = '\u{1b}';
pub const RESET: &str = "\u{1b}[0m";

/// Wrap `text` in the ANSI green foreground colour.
pub fn green(text: &str) -> String {
    format!("{ESC}[32m{text}{RESET}")
}

fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

/// Render `grid` as space-separated cells with `clusters` highlighted.
pub fn render_clusters<R: Rng + ?Sized>(
    grid: &BinaryGrid,
    clusters: &[Cluster],
    mode: ResolveMode,
    rng: &mut R,
) -> String {
    let mut cells: Vec<Vec<String>> = grid
        .rows()
        .map(|row| row.iter().map(u8::to_string).collect())
        .collect();

    for c in clusters {
        let colour = random_colour(rng);
        match mode {
            ResolveMode::SizePriority => {
                for row in &mut cells[c.y1..=c.y2] {
                    row[c.x1].insert_str(0, &format!("{ESC}[4{colour}m"));
                    row[c.x2].push_str(RESET);
                }
            }
            ResolveMode::Containment => {
                for row in &mut cells[c.y1..=c.y2] {
                    for cell in &mut row[c.x1..=c.x2] {
                        if !cell.contains(ESC) {
                            *cell = format!("{ESC}[3{colour}m{cell}{RESET}");
                        }
                    }
                }
            }
        }
    }

    cells
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `Found {count} {size}x{size} clusters!` line per size, ascending.
pub fn render_summary(summary: &SizeSummary, colour: bool) -> String {
    summary
        .iter()
        .map(|(size, count)| {
            let line = format!("Found {count} {size}x{size} clusters!");
            if colour {
                green(&line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove ANSI escape sequences (`ESC [ ... m`).
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}
