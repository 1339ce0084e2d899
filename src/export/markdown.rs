//! Markdown export implementation.
//!
//! Exports the follow graph and its components in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Escape pipe characters so values do not break table cells.
    fn cell(value: &str) -> String {
        value.replace('|', "\\|")
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# Follow Graph Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Users | {} |", data.users.len())?;
        writeln!(writer, "| Follows | {} |", data.follow_count)?;
        if data.has_components() {
            writeln!(writer, "| Components | {} |", data.components.len())?;
            writeln!(writer, "| Cyclic Components | {} |", data.cyclic_count())?;
            writeln!(writer, "| Largest Component | {} |", data.largest_component())?;
        }
        writeln!(writer)?;

        // Adjacency list
        writeln!(writer, "## Adjacency List")?;
        writeln!(writer)?;
        writeln!(writer, "| User | Topic | Follows |")?;
        writeln!(writer, "|------|-------|---------|")?;
        for user in &data.users {
            let following = user
                .following
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                writer,
                "| {} | {} | {} |",
                Self::cell(&user.name),
                Self::cell(user.topic.as_deref().unwrap_or("-")),
                Self::cell(&following)
            )?;
        }
        writeln!(writer)?;

        if !data.has_components() {
            return Ok(());
        }

        writeln!(writer, "## Strongly Connected Components")?;
        writeln!(writer)?;
        for (id, component) in data.components.iter().enumerate() {
            let marker = if component.is_cyclic() { " (cyclic)" } else { "" };
            writeln!(
                writer,
                "{}. {}{}",
                id + 1,
                component.member_list(),
                marker
            )?;
        }

        Ok(())
    }
}
