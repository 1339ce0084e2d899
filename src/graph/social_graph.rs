//! Social follow graph implementation using petgraph.
//!
//! Provides a directed graph of users where an edge `a -> b` means
//! "a follows b", with an optional topic label attached to each user.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::scc::{self, GraphSnapshot, SccPartition, SccResult};

/// Errors returned by graph mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The user was already present. The graph is unchanged.
    #[error("User '{0}' already exists")]
    DuplicateNode(String),

    /// The operation referenced a user that was never added.
    #[error("Unknown user: '{0}'")]
    UnknownNode(String),
}

impl GraphError {
    /// Returns true for outcomes that are reported but never abort processing.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::DuplicateNode(_))
    }

    /// The user key the error refers to.
    pub fn user(&self) -> &str {
        match self {
            Self::DuplicateNode(name) | Self::UnknownNode(name) => name,
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// A user in the social graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNode {
    /// Unique user key (e.g., "alice")
    pub name: String,
    /// Content topic this user posts about, if known
    pub topic: Option<String>,
}

impl UserNode {
    /// Creates a user without a topic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: None,
        }
    }
}

/// A directed "follows" graph.
///
/// Edges point from the follower to the followed user. Keys are compared
/// byte-for-byte; keeping them unique and meaningful is up to the caller.
///
/// The graph is not internally synchronized. Share it across threads only
/// behind a single lock guarding the whole value.
///
/// # Example
///
/// ```rust
/// use followgraph::graph::SocialGraph;
///
/// let mut graph = SocialGraph::new();
/// graph.add_user("alice").unwrap();
/// graph.add_user("bob").unwrap();
/// graph.add_follow("alice", "bob").unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.following("alice").unwrap().contains("bob"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    graph: DiGraph<UserNode, ()>,
    /// Maps user keys to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl SocialGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(users: usize, follows: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(users, follows),
            node_indices: HashMap::with_capacity(users),
        }
    }

    /// Adds a user with no follows.
    ///
    /// Adding a key that already exists returns
    /// [`GraphError::DuplicateNode`] and leaves the graph untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followgraph::graph::{GraphError, SocialGraph};
    ///
    /// let mut graph = SocialGraph::new();
    /// assert!(graph.add_user("alice").is_ok());
    /// assert_eq!(
    ///     graph.add_user("alice"),
    ///     Err(GraphError::DuplicateNode("alice".to_string()))
    /// );
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn add_user(&mut self, name: &str) -> GraphResult<NodeIndex> {
        if self.node_indices.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }

        let idx = self.graph.add_node(UserNode::new(name));
        self.node_indices.insert(name.to_string(), idx);
        Ok(idx)
    }

    /// Records that `follower` follows `following`.
    ///
    /// Both users must already exist. Returns `Ok(true)` when the edge is
    /// new and `Ok(false)` when it was already present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followgraph::graph::SocialGraph;
    ///
    /// let mut graph = SocialGraph::new();
    /// graph.add_user("alice").unwrap();
    /// graph.add_user("bob").unwrap();
    ///
    /// assert_eq!(graph.add_follow("alice", "bob"), Ok(true));
    /// assert_eq!(graph.add_follow("alice", "bob"), Ok(false));
    /// assert!(graph.add_follow("alice", "nobody").is_err());
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn add_follow(&mut self, follower: &str, following: &str) -> GraphResult<bool> {
        let from = self.index_of(follower)?;
        let to = self.index_of(following)?;

        if self.graph.find_edge(from, to).is_some() {
            return Ok(false);
        }

        self.graph.add_edge(from, to, ());
        Ok(true)
    }

    /// Returns the users `name` follows (its out-edges).
    pub fn following(&self, name: &str) -> GraphResult<BTreeSet<String>> {
        let idx = self.index_of(name)?;
        Ok(self.names_in_direction(idx, Direction::Outgoing))
    }

    /// Returns the users following `name` (its in-edges).
    pub fn followers(&self, name: &str) -> GraphResult<BTreeSet<String>> {
        let idx = self.index_of(name)?;
        Ok(self.names_in_direction(idx, Direction::Incoming))
    }

    /// Returns every user key. The set is a copy, later mutations do not
    /// show up in it.
    pub fn all_users(&self) -> BTreeSet<String> {
        self.node_indices.keys().cloned().collect()
    }

    /// Sets the topic label of a user, returning the previous label.
    pub fn set_topic(&mut self, name: &str, topic: impl Into<String>) -> GraphResult<Option<String>> {
        let idx = self.index_of(name)?;
        Ok(self.graph[idx].topic.replace(topic.into()))
    }

    /// Returns the topic label of a user, if one was set.
    pub fn topic(&self, name: &str) -> GraphResult<Option<&str>> {
        let idx = self.index_of(name)?;
        Ok(self.graph[idx].topic.as_deref())
    }

    /// Returns all assigned topic labels keyed by user.
    pub fn topics(&self) -> BTreeMap<String, String> {
        self.graph
            .node_weights()
            .filter_map(|user| Some((user.name.clone(), user.topic.clone()?)))
            .collect()
    }

    /// Returns the full adjacency list: each user mapped to the users it
    /// follows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followgraph::graph::SocialGraph;
    ///
    /// let mut graph = SocialGraph::new();
    /// graph.add_user("alice").unwrap();
    /// graph.add_user("bob").unwrap();
    /// graph.add_follow("bob", "alice").unwrap();
    ///
    /// let adjacency = graph.adjacency();
    /// assert!(adjacency["alice"].is_empty());
    /// assert!(adjacency["bob"].contains("alice"));
    /// ```
    pub fn adjacency(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.graph
            .node_indices()
            .map(|idx| {
                (
                    self.graph[idx].name.clone(),
                    self.names_in_direction(idx, Direction::Outgoing),
                )
            })
            .collect()
    }

    /// Gets a reference to a user node by key.
    pub fn get_user(&self, name: &str) -> Option<&UserNode> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Takes an owned, read-only copy of the structure for SCC analysis.
    ///
    /// Users appear in insertion order and each out-edge list is sorted, so
    /// two snapshots of the same graph are identical.
    pub fn snapshot(&self) -> GraphSnapshot {
        let users: Vec<String> = self
            .graph
            .node_weights()
            .map(|user| user.name.clone())
            .collect();

        let follows = self
            .graph
            .node_indices()
            .map(|idx| {
                let targets = self.names_in_direction(idx, Direction::Outgoing);
                (self.graph[idx].name.clone(), targets.into_iter().collect())
            })
            .collect();

        GraphSnapshot::new(users, follows)
    }

    /// Partitions the users into strongly connected components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followgraph::graph::SocialGraph;
    ///
    /// let mut graph = SocialGraph::new();
    /// for user in ["a", "b", "c"] {
    ///     graph.add_user(user).unwrap();
    /// }
    /// graph.add_follow("a", "b").unwrap();
    /// graph.add_follow("b", "a").unwrap();
    ///
    /// let partition = graph.strongly_connected_components().unwrap();
    /// assert_eq!(partition.len(), 2);
    /// assert!(partition.same_component("a", "b"));
    /// assert!(!partition.same_component("a", "c"));
    /// ```
    pub fn strongly_connected_components(&self) -> SccResult<SccPartition> {
        scc::kosaraju(&self.snapshot())
    }

    /// Returns the number of users.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of follow edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a user exists.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    fn index_of(&self, name: &str) -> GraphResult<NodeIndex> {
        self.node_indices
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    fn names_in_direction(&self, idx: NodeIndex, direction: Direction) -> BTreeSet<String> {
        self.graph
            .neighbors_directed(idx, direction)
            .map(|neighbor| self.graph[neighbor].name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(users: &[&str]) -> SocialGraph {
        let mut graph = SocialGraph::new();
        for user in users {
            graph.add_user(user).unwrap();
        }
        graph
    }

    #[test]
    fn test_create_empty_graph() {
        let graph = SocialGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.all_users().is_empty());
    }

    #[test]
    fn test_add_user() {
        let mut graph = SocialGraph::new();
        graph.add_user("alice").unwrap();

        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains("alice"));
        assert!(graph.following("alice").unwrap().is_empty());
    }

    #[test]
    fn test_add_user_twice_is_noop() {
        let mut graph = graph_with(&["alice", "bob"]);
        graph.add_follow("alice", "bob").unwrap();
        graph.set_topic("alice", "Cars").unwrap();

        let err = graph.add_user("alice").unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("alice".to_string()));
        assert!(err.is_informational());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.all_users(), graph_with(&["alice", "bob"]).all_users());
        // Existing edges and topics survive the duplicate attempt
        assert!(graph.following("alice").unwrap().contains("bob"));
        assert_eq!(graph.topic("alice").unwrap(), Some("Cars"));
    }

    #[test]
    fn test_add_follow() {
        let mut graph = graph_with(&["alice", "bob"]);

        assert_eq!(graph.add_follow("alice", "bob"), Ok(true));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.following("alice").unwrap().contains("bob"));
        assert!(graph.following("bob").unwrap().is_empty());
    }

    #[test]
    fn test_add_follow_twice_is_noop() {
        let mut graph = graph_with(&["alice", "bob"]);

        graph.add_follow("alice", "bob").unwrap();
        let before = graph.following("alice").unwrap();

        assert_eq!(graph.add_follow("alice", "bob"), Ok(false));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.following("alice").unwrap(), before);
    }

    #[test]
    fn test_add_follow_unknown_user() {
        let mut graph = graph_with(&["alice"]);

        assert_eq!(
            graph.add_follow("alice", "ghost"),
            Err(GraphError::UnknownNode("ghost".to_string()))
        );
        assert_eq!(
            graph.add_follow("ghost", "alice"),
            Err(GraphError::UnknownNode("ghost".to_string()))
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_follow_between_unknown_users_leaves_graph_unchanged() {
        let mut graph = SocialGraph::new();

        let err = graph.add_follow("a", "b").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(_)));
        assert!(!err.is_informational());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_follow() {
        let mut graph = graph_with(&["narcissus"]);

        assert_eq!(graph.add_follow("narcissus", "narcissus"), Ok(true));
        assert!(graph.following("narcissus").unwrap().contains("narcissus"));
        assert!(graph.followers("narcissus").unwrap().contains("narcissus"));
    }

    #[test]
    fn test_following_unknown_user() {
        let graph = SocialGraph::new();
        assert_eq!(
            graph.following("ghost"),
            Err(GraphError::UnknownNode("ghost".to_string()))
        );
        assert!(graph.followers("ghost").is_err());
    }

    #[test]
    fn test_followers() {
        let mut graph = graph_with(&["alice", "bob", "carol"]);
        graph.add_follow("alice", "carol").unwrap();
        graph.add_follow("bob", "carol").unwrap();

        let followers = graph.followers("carol").unwrap();
        assert_eq!(followers.len(), 2);
        assert!(followers.contains("alice"));
        assert!(followers.contains("bob"));
        assert!(graph.followers("alice").unwrap().is_empty());
    }

    #[test]
    fn test_all_users_is_a_snapshot() {
        let mut graph = graph_with(&["alice"]);
        let users = graph.all_users();

        graph.add_user("bob").unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(graph.all_users().len(), 2);
    }

    #[test]
    fn test_topics() {
        let mut graph = graph_with(&["alice", "bob"]);

        assert_eq!(graph.topic("alice").unwrap(), None);
        assert_eq!(graph.set_topic("alice", "Cars").unwrap(), None);
        assert_eq!(graph.set_topic("alice", "BMW").unwrap(), Some("Cars".to_string()));
        assert_eq!(graph.topic("alice").unwrap(), Some("BMW"));

        let topics = graph.topics();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics["alice"], "BMW");
    }

    #[test]
    fn test_topic_unknown_user() {
        let mut graph = SocialGraph::new();

        assert!(matches!(
            graph.set_topic("ghost", "Cars"),
            Err(GraphError::UnknownNode(_))
        ));
        assert!(graph.topic("ghost").is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_adjacency() {
        let mut graph = graph_with(&["alice", "bob", "carol"]);
        graph.add_follow("alice", "bob").unwrap();
        graph.add_follow("alice", "carol").unwrap();

        let adjacency = graph.adjacency();
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency["alice"].len(), 2);
        assert!(adjacency["bob"].is_empty());
        assert!(adjacency["carol"].is_empty());
    }

    #[test]
    fn test_get_user() {
        let mut graph = graph_with(&["alice"]);
        graph.set_topic("alice", "Engine").unwrap();

        let user = graph.get_user("alice").unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.topic.as_deref(), Some("Engine"));
        assert!(graph.get_user("ghost").is_none());
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut graph = graph_with(&["c", "a", "b"]);
        graph.add_follow("c", "b").unwrap();
        graph.add_follow("c", "a").unwrap();

        let snapshot = graph.snapshot();
        assert_eq!(snapshot.users(), ["c", "a", "b"]);
        assert_eq!(snapshot.following("c"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(snapshot, graph.snapshot());
    }

    #[test]
    fn test_graph_error_display() {
        assert_eq!(
            GraphError::DuplicateNode("alice".into()).to_string(),
            "User 'alice' already exists"
        );
        assert_eq!(
            GraphError::UnknownNode("ghost".into()).to_string(),
            "Unknown user: 'ghost'"
        );
        assert_eq!(GraphError::UnknownNode("ghost".into()).user(), "ghost");
    }
}
