//! Linear passive components.

use crate::circuit::{Circuit, Element, NodeId};
use crate::error::{QucsimError, Result};
use crate::solver::MnaMatrix;

use super::{numeric_param, Stamp};

/// Resistance used when an `R` line carries no `R` parameter.
pub const DEFAULT_RESISTANCE: &str = "1000";

/// A resistor component.
#[derive(Debug, Clone)]
pub struct Resistor {
    pub name: String,
    pub nodes: [Option<NodeId>; 2],
    pub resistance: f64,
}

impl Resistor {
    /// Build a resistor from a resolved element.
    ///
    /// The resistance must parse as a decimal and be non-zero.
    pub fn from_element(element: &Element) -> Result<Self> {
        let resistance = numeric_param(element, "R", DEFAULT_RESISTANCE)?;
        if resistance == 0.0 {
            return Err(QucsimError::invalid_parameter(
                &element.name,
                "R",
                element.param("R").unwrap_or(DEFAULT_RESISTANCE),
                "resistance must be non-zero",
            ));
        }

        Ok(Self {
            name: element.name.clone(),
            nodes: [
                element.terminals.first().copied().flatten(),
                element.terminals.get(1).copied().flatten(),
            ],
            resistance,
        })
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

/// Stamp for `R` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResistorStamp;

impl Stamp for ResistorStamp {
    fn stamp(&self, _circuit: &Circuit, element: &Element, matrix: &mut MnaMatrix) -> Result<()> {
        let r = Resistor::from_element(element)?;
        let n1 = r.nodes[0].map(|n| n.index());
        let n2 = r.nodes[1].map(|n| n.index());
        matrix.stamp_conductance(n1, n2, r.conductance());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn element(params: &[(&str, &str)]) -> Element {
        Element {
            component_type: "R".to_string(),
            name: "R1".to_string(),
            terminals: vec![Some(NodeId(0)), None],
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            branches: Vec::new(),
            line: 1,
        }
    }

    #[test]
    fn test_resistor_conductance() {
        let r = Resistor::from_element(&element(&[("R", "2000")])).unwrap();
        assert_relative_eq!(r.conductance(), 0.0005);
        assert_eq!(r.nodes, [Some(NodeId(0)), None]);
    }

    #[test]
    fn test_resistor_default_value() {
        let r = Resistor::from_element(&element(&[])).unwrap();
        assert_relative_eq!(r.resistance, 1000.0);
    }

    #[test]
    fn test_resistor_rejects_malformed_values() {
        let err = Resistor::from_element(&element(&[("R", "10k")])).unwrap_err();
        assert!(matches!(err, QucsimError::InvalidParameter { ref param, .. } if param == "R"));

        let err = Resistor::from_element(&element(&[("R", "0")])).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }
}
