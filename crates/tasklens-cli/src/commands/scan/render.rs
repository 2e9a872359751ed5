//! Output formatting for scan results

use anyhow::Result;
use tasklens_core::{SweepReport, TaskRow};

const HEADERS: [&str; 5] = ["Type", "Description", "Project", "File", "Line"];

/// Render rows as aligned columns under a header
#[must_use]
pub fn render_table(rows: &[TaskRow]) -> String {
    if rows.is_empty() {
        return "No tasks found".to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.kind.clone(),
                row.description.clone(),
                row.project.clone(),
                row.file.clone(),
                row.line.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(format_line(&HEADERS.map(str::to_string), &widths));
    lines.extend(cells.iter().map(|row| format_line(row, &widths)));
    lines.join("\n")
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Render the full report as pretty JSON
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(report: &SweepReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
