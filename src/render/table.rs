//! Transition table rendering.

use super::sorted_edges;
use crate::core::State;
use crate::definition::Definition;

const HEADER: [&str; 3] = ["Source", "Dest", "Event"];

/// Output format for [`transition_table`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    /// reStructuredText simple table.
    Rst,
    /// Markdown pipe table.
    Markdown,
    /// Space-aligned columns, no rules.
    Plain,
}

/// Render a definition's transition table.
///
/// Three columns (source, destination, event name), one row per
/// (source, event) edge, ordered by ascending in-degree of the source
/// state so entry points come first.
///
/// # Example
///
/// ```rust
/// use automaton::render::{transition_table, TableFormat};
/// use automaton::DefinitionBuilder;
///
/// let definition = DefinitionBuilder::new()
///     .event("go", ["red"], "green")
///     .event("slowdown", ["green"], "yellow")
///     .event("stop", ["yellow"], "red")
///     .build()
///     .unwrap();
///
/// let table = transition_table(&definition, TableFormat::Rst);
/// assert!(table.contains("red     green   go"));
/// ```
pub fn transition_table<S: State>(definition: &Definition<S>, format: TableFormat) -> String {
    let rows: Vec<[String; 3]> = sorted_edges(definition)
        .into_iter()
        .map(|(source, dest, event)| {
            [
                source.name().to_string(),
                dest.name().to_string(),
                event.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for column in 0..3 {
        widths[column] = HEADER[column].len();
        for row in &rows {
            widths[column] = widths[column].max(row[column].len());
        }
    }

    match format {
        TableFormat::Rst => render_rst(&rows, &widths),
        TableFormat::Markdown => render_markdown(&rows, &widths),
        TableFormat::Plain => render_plain(&rows, &widths),
    }
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

fn joined(cells: [&str; 3], widths: &[usize; 3], separator: &str) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join(separator);
    line.trim_end().to_string()
}

fn render_rst(rows: &[[String; 3]], widths: &[usize; 3]) -> String {
    let rule = widths
        .iter()
        .map(|&width| "=".repeat(width))
        .collect::<Vec<_>>()
        .join("  ");
    let mut lines = vec![
        rule.clone(),
        joined(HEADER, widths, "  "),
        rule.clone(),
    ];
    for row in rows {
        lines.push(joined(
            [row[0].as_str(), row[1].as_str(), row[2].as_str()],
            widths,
            "  ",
        ));
    }
    lines.push(rule);
    lines.join("\n")
}

fn render_markdown(rows: &[[String; 3]], widths: &[usize; 3]) -> String {
    let frame = |cells: [&str; 3]| format!("| {} |", joined_markdown(cells, widths));
    let rule = widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join(" | ");
    let mut lines = vec![frame(HEADER), format!("| {rule} |")];
    for row in rows {
        lines.push(frame([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    lines.join("\n")
}

fn joined_markdown(cells: [&str; 3], widths: &[usize; 3]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_plain(rows: &[[String; 3]], widths: &[usize; 3]) -> String {
    let mut lines = vec![joined(HEADER, widths, "  ")];
    for row in rows {
        lines.push(joined(
            [row[0].as_str(), row[1].as_str(), row[2].as_str()],
            widths,
            "  ",
        ));
    }
    lines.join("\n")
}
