//! Syntax tree types for parsed netlists.

use std::collections::{BTreeSet, HashMap};

/// Complete representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    /// Component instances in source order
    pub components: Vec<ComponentInstance>,
    /// Merged `.DC` directive
    pub sweep: SweepDirective,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of component instances.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the netlist holds no component instances.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Every node token referenced by a component, reference spellings included.
    pub fn node_tokens(&self) -> BTreeSet<&str> {
        self.components
            .iter()
            .flat_map(|component| component.nodes.iter().map(String::as_str))
            .collect()
    }
}

/// One `TYPE:NAME node... key="value"...` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    /// Type tag, e.g. `R` or `Vdc`
    pub component_type: String,
    /// Instance name
    pub name: String,
    /// Node tokens in encounter order
    pub nodes: Vec<String>,
    /// Raw `key="value"` parameters
    pub params: HashMap<String, String>,
    /// Source line number (1-indexed)
    pub line: usize,
}

impl ComponentInstance {
    /// Look up a raw parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// The raw key/value pairs of the `.DC` directive.
///
/// Values stay textual here; numeric conversion happens when a
/// [`SweepPlan`](crate::solver::SweepPlan) is built from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepDirective {
    pub params: HashMap<String, String>,
}

impl SweepDirective {
    /// Look up a raw directive value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Merge pairs from a later `.DC` line; later keys overwrite earlier ones.
    pub fn merge(&mut self, params: HashMap<String, String>) {
        self.params.extend(params);
    }
}
