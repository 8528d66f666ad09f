//! Circuit structure.

use std::collections::HashMap;

use log::debug;

use super::nodes::NodeIndexMap;
use super::types::{BranchId, NodeId, VarIndex};
use crate::components::StampRegistry;
use crate::netlist::Netlist;

/// A component instance with its terminals resolved to MNA rows.
#[derive(Debug, Clone)]
pub struct Element {
    /// Type tag used to look up the stamp
    pub component_type: String,
    /// Instance name
    pub name: String,
    /// Terminals in netlist order; `None` is the reference node
    pub terminals: Vec<Option<NodeId>>,
    /// Raw `key="value"` parameters
    pub params: HashMap<String, String>,
    /// Auxiliary branch unknowns owned by this element
    pub branches: Vec<BranchId>,
    /// Source line number for diagnostics
    pub line: usize,
}

impl Element {
    /// Look up a raw parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Matrix row of the terminal at `position`, `None` for the reference node.
    pub fn terminal_index(&self, position: usize) -> Option<usize> {
        self.terminals
            .get(position)
            .copied()
            .flatten()
            .map(|node| node.index())
    }
}

/// A complete circuit ready for assembly.
///
/// The system has `N + M` unknowns: `N` free node voltages in
/// [`NodeIndexMap`] order, then `M` branch currents in allocation order.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Elements in netlist order, unknown types included
    pub elements: Vec<Element>,

    /// Free node names and their rows
    pub nodes: NodeIndexMap,

    /// Number of branch current variables (M)
    pub num_branches: usize,

    /// Owning element name of each branch
    pub branch_names: Vec<String>,
}

impl Circuit {
    /// Build a circuit from a parsed netlist.
    ///
    /// Branches are handed out in netlist order to every element whose type
    /// the registry knows and which asks for them. With the default registry
    /// this makes branch `k` belong to the `k`-th `Vdc` line.
    pub fn from_netlist(netlist: &Netlist, registry: &StampRegistry) -> Self {
        let nodes = NodeIndexMap::from_tokens(netlist.node_tokens());

        let mut elements = Vec::with_capacity(netlist.components.len());
        let mut branch_names = Vec::new();

        for component in &netlist.components {
            let terminals = component
                .nodes
                .iter()
                .map(|token| nodes.resolve(token))
                .collect();

            let branch_count = registry
                .get(&component.component_type)
                .map(|model| model.branch_count())
                .unwrap_or(0);
            let branches = (0..branch_count)
                .map(|_| {
                    let branch = BranchId(branch_names.len());
                    branch_names.push(component.name.clone());
                    branch
                })
                .collect();

            elements.push(Element {
                component_type: component.component_type.clone(),
                name: component.name.clone(),
                terminals,
                params: component.params.clone(),
                branches,
                line: component.line,
            });
        }

        debug!(
            "circuit: {} free nodes, {} branches, {} elements",
            nodes.len(),
            branch_names.len(),
            elements.len()
        );

        Circuit {
            elements,
            nodes,
            num_branches: branch_names.len(),
            branch_names,
        }
    }

    /// Number of free nodes (N).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total size of the MNA solution vector.
    pub fn matrix_size(&self) -> usize {
        self.num_nodes() + self.num_branches
    }

    /// Get the matrix index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        VarIndex::Current(branch).to_index(self.num_nodes())
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name)
    }

    /// Get the name of a node.
    pub fn node_name(&self, node: NodeId) -> &str {
        self.nodes.name(node)
    }

    /// Find the first branch owned by the named element.
    pub fn find_branch(&self, owner: &str) -> Option<BranchId> {
        self.branch_names
            .iter()
            .position(|name| name == owner)
            .map(BranchId)
    }
}
