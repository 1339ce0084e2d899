//! Read-only graph snapshots consumed by the SCC engine.

use std::collections::HashMap;

/// An owned copy of a follow graph's users and out-edges.
///
/// Snapshots taken with [`SocialGraph::snapshot`](crate::graph::SocialGraph::snapshot)
/// are always well-formed. Snapshots assembled with [`GraphSnapshot::from_parts`]
/// are checked by the engine, which rejects edges to unknown users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSnapshot {
    users: Vec<String>,
    follows: HashMap<String, Vec<String>>,
}

impl GraphSnapshot {
    pub(crate) fn new(users: Vec<String>, follows: HashMap<String, Vec<String>>) -> Self {
        Self { users, follows }
    }

    /// Assembles a snapshot from a user list and `(follower, following)`
    /// pairs. No validation happens here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followgraph::scc::GraphSnapshot;
    ///
    /// let snapshot = GraphSnapshot::from_parts(["a", "b"], [("a", "b")]);
    /// assert_eq!(snapshot.user_count(), 2);
    /// assert_eq!(snapshot.follow_count(), 1);
    /// ```
    pub fn from_parts<U, F, S>(users: U, follows: F) -> Self
    where
        U: IntoIterator<Item = S>,
        F: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let users = users.into_iter().map(Into::into).collect();
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        for (from, to) in follows {
            adjacency.entry(from.into()).or_default().push(to.into());
        }
        Self::new(users, adjacency)
    }

    /// Users in the order traversal roots are tried.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Out-edges of `user`, or `None` if it has no entry.
    pub fn following(&self, user: &str) -> Option<&[String]> {
        self.follows.get(user).map(Vec::as_slice)
    }

    /// Iterates over every `(follower, targets)` entry.
    pub fn follows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.follows
            .iter()
            .map(|(from, targets)| (from.as_str(), targets.as_slice()))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn follow_count(&self) -> usize {
        self.follows.values().map(Vec::len).sum()
    }
}
