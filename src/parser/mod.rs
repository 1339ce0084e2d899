//! Parser module for graph input files.
//!
//! Users, topics and follows are supplied by the caller as JSON:
//!
//! ```json
//! {
//!   "users": [{"name": "Alice", "topic": "Cars"}, {"name": "Bob"}],
//!   "follows": [{"follower": "Alice", "following": "Bob"}]
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use followgraph::parser::load_file;
//!
//! let report = load_file(Path::new("graph.json")).unwrap();
//! for warning in &report.warnings {
//!     eprintln!("skipped: {}", warning);
//! }
//! println!("{} users", report.graph.node_count());
//! ```

pub mod graph_file;
pub mod types;

// Re-export commonly used types for convenience
pub use graph_file::{
    build_graph, load_file, parse_file, parse_str, validate, LoadReport, ParseError, ParseResult,
};

pub use types::{FollowEntry, GraphFile, UserEntry};
