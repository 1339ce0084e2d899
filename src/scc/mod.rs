//! Strongly connected component analysis.
//!
//! [`kosaraju`] partitions a [`GraphSnapshot`] into [`Component`]s, each a
//! maximal group of users who can all reach one another through follows.
//!
//! # Example
//!
//! ```rust
//! use followgraph::graph::SocialGraph;
//! use followgraph::scc::kosaraju;
//!
//! let mut graph = SocialGraph::new();
//! graph.add_user("x").unwrap();
//!
//! let partition = kosaraju(&graph.snapshot()).unwrap();
//! assert_eq!(partition.len(), 1);
//! assert!(partition.components()[0].contains("x"));
//! ```

mod kosaraju;
mod partition;
mod snapshot;
mod stack;

pub use kosaraju::{kosaraju, KosarajuDetector, SccDetector, SccError, SccResult};
pub use partition::{Component, SccPartition};
pub use snapshot::GraphSnapshot;
pub use stack::Stack;
