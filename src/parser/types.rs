//! Shared types for graph file parsing.
//!
//! These mirror the JSON document a caller supplies to describe users,
//! their topics and who follows whom.

use serde::{Deserialize, Serialize};

/// Represents the structure of a graph file.
///
/// # Example
///
/// ```rust
/// use followgraph::parser::GraphFile;
///
/// let json = r#"{"users": [{"name": "alice", "topic": "Cars"}], "follows": []}"#;
/// let file: GraphFile = serde_json::from_str(json).unwrap();
/// assert_eq!(file.users[0].name, "alice");
/// assert_eq!(file.users[0].topic.as_deref(), Some("Cars"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GraphFile {
    /// Users to create, in order.
    #[serde(default)]
    pub users: Vec<UserEntry>,

    /// Follow edges to create after all users exist.
    #[serde(default)]
    pub follows: Vec<FollowEntry>,
}

impl GraphFile {
    /// Returns true if the file declares no users and no follows.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.follows.is_empty()
    }
}

/// A user declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEntry {
    /// Unique user key.
    pub name: String,

    /// Content topic the user posts about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl UserEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: None,
        }
    }

    pub fn with_topic(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: Some(topic.into()),
        }
    }
}

/// A follow declaration: `follower` follows `following`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowEntry {
    pub follower: String,
    pub following: String,
}

impl FollowEntry {
    pub fn new(follower: impl Into<String>, following: impl Into<String>) -> Self {
        Self {
            follower: follower.into(),
            following: following.into(),
        }
    }
}
