//! CSV export implementation.
//!
//! Exports one row per user in CSV format for spreadsheet use.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "user,topic,component,component_size,following")?;

        for user in &data.users {
            let following = user
                .following
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";");

            writeln!(
                writer,
                "{},{},{},{},{}",
                Self::escape_field(&user.name),
                Self::escape_field(user.topic.as_deref().unwrap_or("")),
                user.component.map(|c| c.to_string()).unwrap_or_default(),
                data.component_size(user.component)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                Self::escape_field(&following)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{sample_data, sample_graph};
    use crate::graph::SocialGraph;

    fn export_lines(data: &ExportData) -> Vec<String> {
        let mut output = Vec::new();
        CsvExporter.export(data, &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_csv_export_header() {
        let lines = export_lines(&sample_data());
        assert_eq!(lines[0], "user,topic,component,component_size,following");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_csv_export_rows() {
        let lines = export_lines(&sample_data());

        assert!(lines[1].starts_with("Alice,Cars,"));
        assert!(lines[1].ends_with(",3,Bob"));
        assert!(lines[5].starts_with("Eva,,"));
        assert!(lines[5].ends_with(",2,David"));
    }

    #[test]
    fn test_csv_export_adjacency_only() {
        let lines = export_lines(&ExportData::adjacency(&sample_graph()));
        assert_eq!(lines[1], "Alice,Cars,,,Bob");
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvExporter::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_escapes_topics() {
        let mut graph = SocialGraph::new();
        graph.add_user("zoe").unwrap();
        graph.set_topic("zoe", "Cars, Bikes").unwrap();

        let lines = export_lines(&ExportData::adjacency(&graph));
        assert_eq!(lines[1], "zoe,\"Cars, Bikes\",,,");
    }
}
