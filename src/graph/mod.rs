//! Graph module for follow relationship modeling.
//!
//! This module provides the [`SocialGraph`] struct for building and
//! querying a directed "follows" network between users.
//!
//! # Example
//!
//! ```rust
//! use followgraph::graph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//! graph.add_user("alice").unwrap();
//! graph.add_user("bob").unwrap();
//! graph.add_follow("alice", "bob").unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod social_graph;

pub use social_graph::{GraphError, GraphResult, SocialGraph, UserNode};
