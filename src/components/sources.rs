//! Independent sources.

use log::warn;

use crate::circuit::{BranchId, Circuit, Element, NodeId};
use crate::error::Result;
use crate::solver::MnaMatrix;

use super::{numeric_param, Stamp};

/// Voltage used when a `Vdc` line carries no `U` parameter.
pub const DEFAULT_VOLTAGE: &str = "1";

/// An ideal DC voltage source.
///
/// Voltage sources require an extra row/column in the MNA matrix for the
/// branch current. The source enforces: V+ - V- = U
#[derive(Debug, Clone)]
pub struct VoltageSource {
    pub name: String,
    pub nodes: [Option<NodeId>; 2], // [positive, negative]
    pub voltage: f64,
    pub branch: BranchId,
}

impl VoltageSource {
    /// Build a voltage source from a resolved element and its branch.
    pub fn from_element(element: &Element, branch: BranchId) -> Result<Self> {
        Ok(Self {
            name: element.name.clone(),
            nodes: [
                element.terminals.first().copied().flatten(),
                element.terminals.get(1).copied().flatten(),
            ],
            voltage: numeric_param(element, "U", DEFAULT_VOLTAGE)?,
            branch,
        })
    }
}

/// Stamp for `Vdc` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoltageSourceStamp;

impl Stamp for VoltageSourceStamp {
    fn branch_count(&self) -> usize {
        1
    }

    fn stamp(&self, circuit: &Circuit, element: &Element, matrix: &mut MnaMatrix) -> Result<()> {
        let Some(&branch) = element.branches.first() else {
            warn!("voltage source '{}' has no branch allocated", element.name);
            return Ok(());
        };
        let v = VoltageSource::from_element(element, branch)?;
        matrix.stamp_voltage_source(
            v.nodes[0].map(|n| n.index()),
            v.nodes[1].map(|n| n.index()),
            circuit.branch_index(v.branch),
            v.voltage,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn element(params: &[(&str, &str)]) -> Element {
        Element {
            component_type: "Vdc".to_string(),
            name: "V1".to_string(),
            terminals: vec![None, Some(NodeId(0))],
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            branches: vec![BranchId(0)],
            line: 1,
        }
    }

    #[test]
    fn test_voltage_source_value() {
        let v = VoltageSource::from_element(&element(&[("U", "-2.5")]), BranchId(0)).unwrap();
        assert_relative_eq!(v.voltage, -2.5);
        assert_eq!(v.nodes, [None, Some(NodeId(0))]);
    }

    #[test]
    fn test_voltage_source_default() {
        let v = VoltageSource::from_element(&element(&[]), BranchId(3)).unwrap();
        assert_relative_eq!(v.voltage, 1.0);
        assert_eq!(v.branch, BranchId(3));
    }

    #[test]
    fn test_voltage_source_malformed_value() {
        assert!(VoltageSource::from_element(&element(&[("U", "five")]), BranchId(0)).is_err());
    }
}
