//! Export functionality for follow graph analysis results.
//!
//! This module provides exporters for outputting the adjacency list and
//! strongly connected components in various formats: JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::graph::SocialGraph;
use crate::scc::{Component, SccPartition};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One user's row in an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub name: String,
    pub topic: Option<String>,
    pub following: BTreeSet<String>,
    /// Index of the user's component, when components were computed
    pub component: Option<usize>,
}

/// Data container for export operations.
///
/// Holds the adjacency list and, optionally, the component partition.
/// Users are sorted by name.
#[derive(Debug, Clone, Default)]
pub struct ExportData {
    /// Every user with its out-edges
    pub users: Vec<UserRow>,
    /// Components in discovery order; empty when not computed
    pub components: Vec<Component>,
    /// Number of follow edges
    pub follow_count: usize,
}

impl ExportData {
    /// Create export data for the adjacency list only.
    pub fn adjacency(graph: &SocialGraph) -> Self {
        Self::build(graph, None)
    }

    /// Create export data from a graph and its component partition.
    pub fn new(graph: &SocialGraph, partition: &SccPartition) -> Self {
        Self::build(graph, Some(partition))
    }

    fn build(graph: &SocialGraph, partition: Option<&SccPartition>) -> Self {
        let topics = graph.topics();
        let users = graph
            .adjacency()
            .into_iter()
            .map(|(name, following)| UserRow {
                topic: topics.get(&name).cloned(),
                component: partition.and_then(|p| p.component_of(&name)),
                name,
                following,
            })
            .collect();

        Self {
            users,
            components: partition.map(|p| p.components().to_vec()).unwrap_or_default(),
            follow_count: graph.edge_count(),
        }
    }

    /// Returns true if components were included.
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// Get count of components containing a follow cycle
    pub fn cyclic_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_cyclic()).count()
    }

    /// Size of the largest component
    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Component::len).max().unwrap_or(0)
    }

    /// Size of the component at `index`
    pub(crate) fn component_size(&self, index: Option<usize>) -> Option<usize> {
        index.and_then(|i| self.components.get(i)).map(Component::len)
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
