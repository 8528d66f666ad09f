//! Main simulator interface.

use log::{debug, warn};

use crate::circuit::{is_reference, BranchId, Circuit, NodeIndexMap, VarIndex};
use crate::components::StampRegistry;
use crate::error::Result;
use crate::netlist::Netlist;

use super::mna::MnaMatrix;
use super::DEFAULT_PIVOT_TOLERANCE;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Pivots and diagonals below this magnitude count as zero.
    pub pivot_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-pivot tolerance.
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}

/// Solved unknowns of a circuit.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Free node names and their rows
    pub nodes: NodeIndexMap,
    /// Owning element name of each branch
    pub branch_names: Vec<String>,
    /// Node voltages followed by branch currents
    pub x: Vec<f64>,
    /// Unknowns reported as 0 because their pivot vanished
    pub degraded: usize,
}

impl Solution {
    /// Value of one unknown.
    pub fn value(&self, var: VarIndex) -> f64 {
        self.x[var.to_index(self.nodes.len())]
    }

    /// Voltage at a named node; the reference node reads 0.
    pub fn node_voltage(&self, name: &str) -> Option<f64> {
        if is_reference(name) {
            return Some(0.0);
        }
        self.nodes
            .get(name)
            .map(|node| self.value(VarIndex::Voltage(node)))
    }

    /// Branch current of a named voltage source.
    pub fn branch_current(&self, source: &str) -> Option<f64> {
        self.branch_names
            .iter()
            .position(|name| name == source)
            .map(|b| self.value(VarIndex::Current(BranchId(b))))
    }

    /// Node voltages in row order.
    pub fn voltages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.nodes
            .iter()
            .map(move |(name, node)| (name, self.value(VarIndex::Voltage(node))))
    }
}

/// The DC operating-point simulator.
pub struct Simulator {
    /// The circuit being simulated
    circuit: Circuit,
    /// Stamps by component type
    registry: StampRegistry,
    /// MNA matrix system
    matrix: MnaMatrix,
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the default component set and configuration.
    pub fn new(netlist: &Netlist) -> Self {
        Self::with_config(netlist, StampRegistry::default(), SimulatorConfig::default())
    }

    /// Create a simulator with a custom component set and configuration.
    pub fn with_config(netlist: &Netlist, registry: StampRegistry, config: SimulatorConfig) -> Self {
        let circuit = Circuit::from_netlist(netlist, &registry);
        let matrix = MnaMatrix::new(circuit.matrix_size());
        Self {
            circuit,
            registry,
            matrix,
            config,
        }
    }

    /// Stamp every element into a fresh system.
    ///
    /// Unknown component types and elements with too few terminals are
    /// skipped. A parameter that is present but not numeric is an error.
    pub fn assemble(&mut self) -> Result<&MnaMatrix> {
        self.matrix.clear();
        debug!("assembling {0}x{0} system", self.matrix.size);

        for element in &self.circuit.elements {
            let Some(stamp) = self.registry.get(&element.component_type) else {
                debug!(
                    "line {}: no stamp for component type '{}', skipping {}",
                    element.line, element.component_type, element.name
                );
                continue;
            };

            if element.terminals.len() < stamp.terminal_count() {
                warn!(
                    "line {}: {} names {} terminals, needs {}; skipping",
                    element.line,
                    element.name,
                    element.terminals.len(),
                    stamp.terminal_count()
                );
                continue;
            }

            stamp.stamp(&self.circuit, element, &mut self.matrix)?;
        }

        Ok(&self.matrix)
    }

    /// Assemble and solve the system.
    pub fn solve(&mut self) -> Result<Solution> {
        self.assemble()?;
        let degraded = self.matrix.solve(self.config.pivot_tolerance);

        Ok(Solution {
            nodes: self.circuit.nodes.clone(),
            branch_names: self.circuit.branch_names.clone(),
            x: self.matrix.x.clone(),
            degraded,
        })
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get a reference to the last assembled system.
    pub fn matrix(&self) -> &MnaMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::parse;
    use approx::assert_relative_eq;

    fn solve(input: &str) -> Solution {
        Simulator::new(&parse(input)).solve().unwrap()
    }

    #[test]
    fn test_loaded_divider() {
        let solution = solve(
            "Vdc:V1 in 0 U=\"10\"\nR:R1 in out R=\"1000\"\nR:R2 out gnd R=\"1000\"\n",
        );
        assert_relative_eq!(solution.node_voltage("in").unwrap(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(solution.node_voltage("out").unwrap(), 5.0, epsilon = 1e-9);
        // Source current flows out of the positive terminal: negative by convention
        assert_relative_eq!(solution.branch_current("V1").unwrap(), -0.005, epsilon = 1e-12);
        assert_eq!(solution.degraded, 0);

        // Unknowns: [in, out] voltages, then the V1 current
        let out = solution.nodes.get("out").unwrap();
        assert_eq!(solution.value(VarIndex::Voltage(out)), solution.x[1]);
        assert_eq!(solution.value(VarIndex::Current(BranchId(0))), solution.x[2]);
    }

    #[test]
    fn test_unequal_divider() {
        let solution = solve(
            "Vdc:V1 a 0 U=\"9\"\nR:R1 a b R=\"2000\"\nR:R2 b 0 R=\"1000\"\n",
        );
        assert_relative_eq!(solution.node_voltage("b").unwrap(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_floating_node_degrades_to_zero() {
        // n2 hangs off a single resistor; its pivot vanishes and it reads 0
        let solution = solve("Vdc:V1 n1 0 U=\"5\"\nR:R1 n1 n2 R=\"1000\"\n");
        assert_relative_eq!(solution.node_voltage("n1").unwrap(), 5.0, epsilon = 1e-9);
        assert_eq!(solution.node_voltage("n2"), Some(0.0));
        assert_eq!(solution.degraded, 1);
    }

    #[test]
    fn test_reference_only_circuit() {
        let mut sim = Simulator::new(&parse("Vdc:V1 0 gnd U=\"3\"\nR:R1 gnd 0\n"));
        let solution = sim.solve().unwrap();
        assert_eq!(sim.circuit().num_nodes(), 0);
        assert_eq!(solution.x.len(), 1);
        assert_eq!(solution.branch_current("V1"), Some(0.0));
        assert_eq!(sim.matrix().z, vec![3.0]);
    }

    #[test]
    fn test_assembled_matrix_is_symmetric() {
        let mut sim = Simulator::new(&parse(
            "Vdc:V1 a 0 U=\"1\"\nR:R1 a b\nR:R2 b c R=\"470\"\nR:R3 c 0\nVdc:V2 c b U=\"2\"\nR:R4 a c R=\"33\"\n",
        ));
        let matrix = sim.assemble().unwrap();
        assert_eq!(matrix.size, 5);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_unknown_and_short_elements_skipped() {
        let solution = solve("Vdc:V1 a 0 U=\"2\"\nC:C1 a 0 C=\"1u\"\nR:R9 a\nR:R1 a 0\n");
        assert_relative_eq!(solution.node_voltage("a").unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(solution.branch_current("V1").unwrap(), -0.002, epsilon = 1e-12);
    }

    #[test]
    fn test_malformed_parameter_propagates() {
        let mut sim = Simulator::new(&parse("R:R1 a 0 R=\"1k\"\n"));
        assert!(sim.solve().is_err());
        let mut sim = Simulator::new(&parse("Vdc:V1 a 0 U=\"abc\"\n"));
        assert!(sim.solve().is_err());
    }

    #[test]
    fn test_custom_pivot_tolerance() {
        // With a huge tolerance every pivot is "zero"
        let config = SimulatorConfig::new().with_pivot_tolerance(1e6);
        let mut sim = Simulator::with_config(
            &parse("Vdc:V1 a 0 U=\"1\"\nR:R1 a 0\n"),
            StampRegistry::default(),
            config,
        );
        let solution = sim.solve().unwrap();
        assert_eq!(solution.x, vec![0.0, 0.0]);
        assert_eq!(solution.degraded, 2);
    }
}
