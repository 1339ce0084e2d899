//! followgraph - Social follow graph with strongly connected component analysis
//!
//! This crate models a directed "follows" network between users and
//! partitions it into strongly connected components with Kosaraju's
//! algorithm.

pub mod export;
pub mod graph;
pub mod parser;
pub mod scc;
