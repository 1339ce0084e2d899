//! Kosaraju's two-pass strongly connected component algorithm.
//!
//! Pass one runs a depth-first search over the follow graph and pushes each
//! user onto a finish stack once everything reachable from it is explored.
//! Pass two pops that stack and searches the transposed graph; every search
//! started from a user not yet assigned collects exactly one component.
//!
//! Both passes share one iterative search driven by an explicit [`Stack`],
//! so long follow chains never grow the call stack.

use std::collections::{BTreeSet, HashMap};

use super::partition::{Component, SccPartition};
use super::snapshot::GraphSnapshot;
use super::stack::Stack;

/// Integrity violations found while reading a snapshot.
///
/// These mean the snapshot was built from inconsistent data; the resulting
/// partition would be meaningless, so computation stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SccError {
    /// An edge references a user missing from the user list.
    #[error("Follow edge '{from}' -> '{to}' references an unknown user")]
    DanglingEdge { from: String, to: String },

    /// The same user key appears twice in the user list.
    #[error("User '{0}' appears more than once in the snapshot")]
    DuplicateKey(String),
}

/// Result type alias for SCC computation.
pub type SccResult<T> = Result<T, SccError>;

/// Computes strongly connected components of a graph snapshot.
pub trait SccDetector {
    fn compute_scc(&self, snapshot: &GraphSnapshot) -> SccResult<SccPartition>;
}

/// [`SccDetector`] backed by [`kosaraju`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KosarajuDetector;

impl SccDetector for KosarajuDetector {
    fn compute_scc(&self, snapshot: &GraphSnapshot) -> SccResult<SccPartition> {
        kosaraju(snapshot)
    }
}

/// Partitions the users of `snapshot` into strongly connected components.
///
/// Components are returned in second-pass discovery order.
///
/// # Errors
///
/// Returns [`SccError`] if the snapshot lists a user twice or contains an
/// edge to or from a user it does not list.
///
/// # Example
///
/// ```rust
/// use followgraph::scc::{kosaraju, GraphSnapshot};
///
/// let snapshot = GraphSnapshot::from_parts(
///     ["a", "b", "c", "d", "e"],
///     [("a", "b"), ("b", "c"), ("c", "a"), ("d", "e"), ("e", "d")],
/// );
///
/// let partition = kosaraju(&snapshot).unwrap();
/// assert_eq!(partition.len(), 2);
/// assert!(partition.same_component("a", "c"));
/// assert!(partition.same_component("d", "e"));
/// assert!(!partition.same_component("a", "d"));
/// ```
pub fn kosaraju(snapshot: &GraphSnapshot) -> SccResult<SccPartition> {
    let users = snapshot.users();
    let adjacency = index_adjacency(snapshot)?;
    let n = users.len();

    // Pass 1: finish order over the original graph
    let mut finished: Stack<usize> = Stack::with_capacity(n);
    let mut frames: Stack<(usize, usize)> = Stack::new();
    let mut visited = vec![false; n];

    for root in 0..n {
        if !visited[root] {
            depth_first(&adjacency, root, &mut visited, &mut frames, |node| {
                finished.push(node)
            });
        }
    }

    let transposed = transpose(&adjacency);

    // Pass 2: reverse finish order over the transpose
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    while let Some(root) = finished.pop() {
        if visited[root] {
            continue;
        }

        let mut members = Vec::new();
        depth_first(&transposed, root, &mut visited, &mut frames, |node| {
            members.push(node)
        });

        let cyclic = members.len() > 1 || adjacency[root].contains(&root);
        let members: BTreeSet<String> = members.into_iter().map(|i| users[i].clone()).collect();
        components.push(Component::new(members, cyclic));
    }

    tracing::debug!(
        users = n,
        follows = snapshot.follow_count(),
        components = components.len(),
        "computed strongly connected components"
    );

    Ok(SccPartition::new(components))
}

/// Resolves the snapshot's string edges into index adjacency lists.
fn index_adjacency(snapshot: &GraphSnapshot) -> SccResult<Vec<Vec<usize>>> {
    let users = snapshot.users();
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(users.len());

    for (i, user) in users.iter().enumerate() {
        if index.insert(user.as_str(), i).is_some() {
            return Err(SccError::DuplicateKey(user.clone()));
        }
    }

    let mut adjacency = vec![Vec::new(); users.len()];

    for (from, targets) in snapshot.follows() {
        let dangling = |to: &str| SccError::DanglingEdge {
            from: from.to_string(),
            to: to.to_string(),
        };

        let Some(&u) = index.get(from) else {
            let to = targets.first().map(String::as_str).unwrap_or_default();
            return Err(dangling(to));
        };

        for to in targets {
            let &v = index.get(to.as_str()).ok_or_else(|| dangling(to.as_str()))?;
            adjacency[u].push(v);
        }
    }

    // Follows come out of a hash map; sort so traversal order is repeatable
    for targets in adjacency.iter_mut() {
        targets.sort_unstable();
        targets.dedup();
    }

    Ok(adjacency)
}

fn transpose(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut transposed = vec![Vec::new(); adjacency.len()];
    for (u, targets) in adjacency.iter().enumerate() {
        for &v in targets {
            transposed[v].push(u);
        }
    }
    transposed
}

/// Iterative depth-first search from `root`.
///
/// Each frame holds a node and the position of the next out-edge to try.
/// `on_finish` runs once per newly visited node, after all of its unvisited
/// successors have finished.
fn depth_first<F>(
    adjacency: &[Vec<usize>],
    root: usize,
    visited: &mut [bool],
    frames: &mut Stack<(usize, usize)>,
    mut on_finish: F,
) where
    F: FnMut(usize),
{
    visited[root] = true;
    frames.push((root, 0));

    while let Some(frame) = frames.peek_mut() {
        let (node, next) = *frame;

        match adjacency[node].get(next) {
            Some(&target) => {
                frame.1 += 1;
                if !visited[target] {
                    visited[target] = true;
                    frames.push((target, 0));
                }
            }
            None => {
                frames.pop();
                on_finish(node);
            }
        }
    }
}
