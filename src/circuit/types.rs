//! Core types for circuit representation.

/// Node tokens that name the reference (zero potential) node.
pub const REFERENCE_NODES: [&str; 2] = ["0", "gnd"];

/// Check whether a node token names the reference node.
pub fn is_reference(token: &str) -> bool {
    REFERENCE_NODES.contains(&token)
}

/// Index of a free (non-reference) node.
///
/// Free nodes occupy rows `0..N` of the MNA system, so the wrapped value is
/// also the node's row. The reference node has no `NodeId`; terminals use
/// `Option<NodeId>` with `None` meaning reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Row of this node in the MNA system.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Index of an auxiliary branch-current unknown (voltage sources).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(pub usize);

/// Variable index in the MNA solution vector.
/// Can be either a node voltage or a branch current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarIndex {
    /// Node voltage variable
    Voltage(NodeId),
    /// Branch current variable (voltage sources)
    Current(BranchId),
}

impl VarIndex {
    /// Get the raw index into the solution vector.
    /// Node voltages come first, then branch currents.
    pub fn to_index(&self, num_nodes: usize) -> usize {
        match self {
            VarIndex::Voltage(NodeId(n)) => *n,
            VarIndex::Current(BranchId(b)) => num_nodes + b,
        }
    }
}
