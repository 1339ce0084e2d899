//! Result types for strongly connected component analysis.

use std::collections::{BTreeSet, HashMap};

/// One strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    members: BTreeSet<String>,
    cyclic: bool,
}

impl Component {
    pub(crate) fn new(members: BTreeSet<String>, cyclic: bool) -> Self {
        Self { members, cyclic }
    }

    /// Users in this component.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, user: &str) -> bool {
        self.members.contains(user)
    }

    /// Returns true if the component contains a follow cycle: more than one
    /// member, or a single member following itself.
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Renders members as `a, b, c`.
    pub fn member_list(&self) -> String {
        self.members
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The partition of a graph's users into strongly connected components.
///
/// Components are kept in the order the second traversal pass discovered
/// them. That order depends on traversal order; the partition itself does
/// not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccPartition {
    components: Vec<Component>,
    component_of: HashMap<String, usize>,
}

impl SccPartition {
    pub(crate) fn new(components: Vec<Component>) -> Self {
        let component_of = components
            .iter()
            .enumerate()
            .flat_map(|(id, component)| component.members.iter().map(move |m| (m.clone(), id)))
            .collect();

        Self {
            components,
            component_of,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index of the component containing `user`.
    pub fn component_of(&self, user: &str) -> Option<usize> {
        self.component_of.get(user).copied()
    }

    /// The component containing `user`.
    pub fn component_for(&self, user: &str) -> Option<&Component> {
        self.component_of(user).map(|id| &self.components[id])
    }

    /// Returns true if both users are known and mutually reachable.
    pub fn same_component(&self, a: &str, b: &str) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Components that contain a follow cycle.
    pub fn nontrivial(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_cyclic())
    }

    /// The partition as a set of member sets, ignoring discovery order.
    pub fn as_sets(&self) -> BTreeSet<BTreeSet<String>> {
        self.components.iter().map(|c| c.members.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a SccPartition {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
