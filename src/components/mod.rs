//! Component models for circuit simulation.
//!
//! Each supported component type is a [`Stamp`]: a pure function from an
//! element's terminals and parameters to matrix/vector contributions. Stamps
//! are looked up by type tag in a [`StampRegistry`]:
//! - `R`: Resistor ([`ResistorStamp`])
//! - `Vdc`: Ideal DC voltage source ([`VoltageSourceStamp`])
//!
//! Types without a registered stamp contribute nothing to the system.

mod linear;
mod sources;

pub use linear::{Resistor, ResistorStamp, DEFAULT_RESISTANCE};
pub use sources::{VoltageSource, VoltageSourceStamp, DEFAULT_VOLTAGE};

use std::collections::HashMap;
use std::fmt;

use crate::circuit::{Circuit, Element};
use crate::error::{QucsimError, Result};
use crate::solver::MnaMatrix;

/// Type tag of resistors.
pub const RESISTOR: &str = "R";

/// Type tag of DC voltage sources.
pub const VOLTAGE_SOURCE: &str = "Vdc";

/// Capability of contributing to the MNA system.
pub trait Stamp: fmt::Debug + Send + Sync {
    /// Auxiliary branch unknowns each instance owns.
    fn branch_count(&self) -> usize {
        0
    }

    /// Minimum number of terminals an instance must name to be stamped.
    fn terminal_count(&self) -> usize {
        2
    }

    /// Add this element's contributions to the matrix and source vector.
    fn stamp(&self, circuit: &Circuit, element: &Element, matrix: &mut MnaMatrix) -> Result<()>;
}

/// Mapping from component type tag to its stamp.
#[derive(Debug)]
pub struct StampRegistry {
    stamps: HashMap<String, Box<dyn Stamp>>,
}

impl StampRegistry {
    /// Create a registry without any component types.
    pub fn empty() -> Self {
        Self {
            stamps: HashMap::new(),
        }
    }

    /// Register a stamp for a type tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, stamp: impl Stamp + 'static) -> &mut Self {
        self.stamps.insert(tag.into(), Box::new(stamp));
        self
    }

    /// Look up the stamp for a type tag.
    pub fn get(&self, tag: &str) -> Option<&dyn Stamp> {
        self.stamps.get(tag).map(|stamp| stamp.as_ref())
    }

    /// Check whether a type tag has a stamp.
    pub fn contains(&self, tag: &str) -> bool {
        self.stamps.contains_key(tag)
    }
}

impl Default for StampRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(RESISTOR, ResistorStamp)
            .register(VOLTAGE_SOURCE, VoltageSourceStamp);
        registry
    }
}

/// Read a numeric parameter, falling back to `default` text when absent.
///
/// Present but non-numeric text is an error: there is no fallback for
/// malformed values.
pub fn numeric_param(element: &Element, key: &str, default: &str) -> Result<f64> {
    let text = element.param(key).unwrap_or(default);
    text.trim().parse::<f64>().map_err(|e| {
        QucsimError::invalid_parameter(&element.name, key, text, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;

    #[derive(Debug)]
    struct CurrentSink;

    impl Stamp for CurrentSink {
        fn stamp(&self, _circuit: &Circuit, element: &Element, matrix: &mut MnaMatrix) -> Result<()> {
            if let Some(i) = element.terminal_index(0) {
                matrix.add_source(i, -numeric_param(element, "I", "0")?);
            }
            Ok(())
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = StampRegistry::default();
        assert!(registry.contains("R"));
        assert!(registry.contains("Vdc"));
        assert!(!registry.contains("r"));
        assert_eq!(registry.get("Vdc").map(|s| s.branch_count()), Some(1));
        assert_eq!(registry.get("R").map(|s| s.branch_count()), Some(0));
    }

    #[test]
    fn test_register_custom_stamp() {
        let mut registry = StampRegistry::default();
        registry.register("Idc", CurrentSink);
        assert!(registry.contains("Idc"));
        assert_eq!(registry.get("Idc").map(|s| s.terminal_count()), Some(2));
    }

    #[test]
    fn test_numeric_param_trims_and_defaults() {
        let element = Element {
            component_type: "R".to_string(),
            name: "R1".to_string(),
            terminals: vec![Some(NodeId(0)), None],
            params: [("R".to_string(), " 1e3 ".to_string())].into_iter().collect(),
            branches: Vec::new(),
            line: 1,
        };
        assert_eq!(numeric_param(&element, "R", "5").unwrap(), 1000.0);
        assert_eq!(numeric_param(&element, "X", "5").unwrap(), 5.0);
    }
}
