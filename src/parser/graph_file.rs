//! Loader for JSON graph files.
//!
//! Graph data always comes from the caller: a file or string describing
//! users, topics and follows, turned into a [`SocialGraph`].

use std::fs;
use std::path::Path;

use super::types::GraphFile;
use crate::graph::{GraphError, SocialGraph};

/// Errors that can occur while reading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document parsed but describes an unusable graph.
    #[error("Invalid graph file: {0}")]
    InvalidGraph(String),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a graph file from a path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use followgraph::parser::parse_file;
///
/// let file = parse_file(Path::new("graph.json")).unwrap();
/// println!("{} users", file.users.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<GraphFile> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a graph file from a string.
pub fn parse_str(content: &str) -> ParseResult<GraphFile> {
    let file: GraphFile = serde_json::from_str(content)?;
    Ok(file)
}

/// Checks that every user and follow names a non-blank key.
pub fn validate(file: &GraphFile) -> ParseResult<()> {
    if let Some(pos) = file.users.iter().position(|u| u.name.trim().is_empty()) {
        return Err(ParseError::InvalidGraph(format!(
            "user #{} has an empty name",
            pos + 1
        )));
    }

    if let Some(pos) = file
        .follows
        .iter()
        .position(|f| f.follower.trim().is_empty() || f.following.trim().is_empty())
    {
        return Err(ParseError::InvalidGraph(format!(
            "follow #{} has an empty endpoint",
            pos + 1
        )));
    }

    Ok(())
}

/// Outcome of building a graph from a file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The graph built from every declaration that could be applied.
    pub graph: SocialGraph,
    /// Rejected declarations, in file order. None of them abort loading.
    pub warnings: Vec<GraphError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Builds a graph from a parsed file.
///
/// Users are created first, then follows. A repeated user or a follow that
/// names an unknown user is recorded as a warning and skipped. A topic on a
/// repeated user still replaces the earlier one.
///
/// # Example
///
/// ```rust
/// use followgraph::parser::{build_graph, parse_str};
///
/// let file = parse_str(r#"{
///     "users": [{"name": "alice"}, {"name": "bob"}],
///     "follows": [{"follower": "alice", "following": "bob"},
///                 {"follower": "alice", "following": "carol"}]
/// }"#).unwrap();
///
/// let report = build_graph(&file);
/// assert_eq!(report.graph.edge_count(), 1);
/// assert_eq!(report.warnings.len(), 1);
/// ```
pub fn build_graph(file: &GraphFile) -> LoadReport {
    let mut graph = SocialGraph::with_capacity(file.users.len(), file.follows.len());
    let mut warnings = Vec::new();

    for user in &file.users {
        if let Err(err) = graph.add_user(&user.name) {
            warnings.push(err);
        }
        if let Some(topic) = &user.topic {
            if let Err(err) = graph.set_topic(&user.name, topic.as_str()) {
                warnings.push(err);
            }
        }
    }

    for follow in &file.follows {
        if let Err(err) = graph.add_follow(&follow.follower, &follow.following) {
            warnings.push(err);
        }
    }

    LoadReport { graph, warnings }
}

/// Reads, validates and builds a graph file in one step.
pub fn load_file(path: &Path) -> ParseResult<LoadReport> {
    let file = parse_file(path)?;
    validate(&file)?;
    Ok(build_graph(&file))
}
