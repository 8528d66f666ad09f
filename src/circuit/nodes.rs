//! Node indexing.

use std::collections::{BTreeSet, HashMap};

use super::types::{is_reference, NodeId};

/// Bijection between free node names and their MNA rows.
///
/// Rows are assigned in sorted token order, so the mapping depends only on
/// the set of tokens, never on the order components mention them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndexMap {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
}

impl NodeIndexMap {
    /// Build the map from every node token seen in a netlist.
    ///
    /// Reference spellings are dropped; duplicates collapse.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let free: BTreeSet<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !is_reference(t))
            .collect();

        let names: Vec<String> = free.into_iter().collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), NodeId(i)))
            .collect();

        Self { names, index }
    }

    /// Number of free nodes (N).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether there are no free nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a free node by name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve a terminal token: `None` for the reference node.
    pub fn resolve(&self, token: &str) -> Option<NodeId> {
        if is_reference(token) {
            return None;
        }
        let node = self.get(token);
        debug_assert!(node.is_some(), "node '{}' was never indexed", token);
        node
    }

    /// Name of a free node.
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.0]
    }

    /// Iterate over `(name, node)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), NodeId(i)))
    }
}
