//! JSON export implementation.
//!
//! Exports the adjacency list and components in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable user for JSON output.
#[derive(Serialize)]
struct JsonUser<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'a str>,
    following: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<usize>,
}

/// Serializable component for JSON output.
#[derive(Serialize)]
struct JsonComponent<'a> {
    id: usize,
    size: usize,
    cyclic: bool,
    members: Vec<&'a str>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    users: usize,
    follows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cyclic_components: Option<usize>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    users: Vec<JsonUser<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<JsonComponent<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let users = data
            .users
            .iter()
            .map(|u| JsonUser {
                name: &u.name,
                topic: u.topic.as_deref(),
                following: u.following.iter().map(String::as_str).collect(),
                component: u.component,
            })
            .collect();

        let components = data
            .components
            .iter()
            .enumerate()
            .map(|(id, c)| JsonComponent {
                id,
                size: c.len(),
                cyclic: c.is_cyclic(),
                members: c.members().iter().map(String::as_str).collect(),
            })
            .collect();

        let has_components = data.has_components();
        let export = JsonExport {
            summary: JsonSummary {
                users: data.users.len(),
                follows: data.follow_count,
                components: has_components.then(|| data.components.len()),
                cyclic_components: has_components.then(|| data.cyclic_count()),
            },
            users,
            components,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
