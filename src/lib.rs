//! # Qucsim Core
//!
//! A tiny DC simulator for resistive circuits.
//!
//! This library provides:
//! - A parser for Qucs-style netlists (`TYPE:NAME node... key="value"...`)
//! - Modified Nodal Analysis (MNA) assembly with pluggable component stamps
//! - A dense Gaussian-elimination solver that degrades instead of failing
//! - Writer and reader for the block-tagged Qucs dataset format
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Netlist lexer, parser and syntax tree
//! - [`circuit`] - Node indexing and the resolved circuit model
//! - [`components`] - Component stamps (resistor, DC voltage source)
//! - [`solver`] - MNA matrix assembly, elimination and sweep planning
//! - [`dataset`] - Result encoder and decoder
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! qucsim -i circuit.net -o circuit.dat
//! ```
//!
//! ### Library
//!
//! ```
//! let netlist = "Vdc:V1 in 0 U=\"10\"\nR:R1 in out R=\"1000\"\nR:R2 out 0 R=\"1000\"\n";
//! let text = qucsim_core::run(netlist).unwrap();
//! let results = qucsim_core::decode(&text);
//! assert_eq!(results["out"], vec![5.0, 5.0]);
//! assert_eq!(results["sweep"], vec![0.0, 10.0]);
//! ```
//!
//! ## Error Policy
//!
//! Malformed lines, unknown component types and singular systems never abort
//! a run; they are skipped or degraded and logged through [`log`]. Only
//! parameter text that cannot become a number, and missing or unreadable
//! files, surface as [`QucsimError`].

pub mod circuit;
pub mod components;
pub mod dataset;
pub mod error;
pub mod netlist;
pub mod solver;

#[cfg(feature = "cli")]
pub mod files;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use components::{Stamp, StampRegistry};
pub use dataset::{decode, decode_file, Dataset};
pub use error::{QucsimError, Result};
pub use solver::{Simulator, SimulatorConfig, Solution, SweepPlan};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// Parse, assemble, solve and encode a netlist with the default components.
pub fn run(netlist_text: &str) -> Result<String> {
    run_with(netlist_text, StampRegistry::default(), SimulatorConfig::default())
}

/// Like [`run`], with a custom component set and configuration.
pub fn run_with(
    netlist_text: &str,
    registry: StampRegistry,
    config: SimulatorConfig,
) -> Result<String> {
    let netlist = netlist::parse(netlist_text);
    let solution = Simulator::with_config(&netlist, registry, config).solve()?;
    let plan = SweepPlan::from_directive(&netlist.sweep)?;
    Ok(Dataset::from_solution(&solution, &plan).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_run_divider_output() {
        let netlist = "# Qucs-Web Netlist 1234\n\
                       Vdc:V1 n1 gnd U=\"5\"\n\
                       R:R1 n1 n2 R=\"1000\"\n\
                       R:R2 n2 gnd R=\"1000\"\n\
                       .DC:DC1 Start=\"0\" Stop=\"10\" Points=\"2\" Param=\"sweep\"\n";
        let expected = "<indep sweep 2>\n0.000000e+00\n1.000000e+01\n</indep>\n\
                        <dep n1 sweep>\n5.000000e+00\n5.000000e+00\n</dep>\n\
                        <dep n2 sweep>\n2.500000e+00\n2.500000e+00\n</dep>\n";
        assert_eq!(run(netlist).unwrap(), expected);
    }

    #[test]
    fn test_empty_netlist() {
        assert_eq!(
            run("").unwrap(),
            "<indep sweep 2>\n0.000000e+00\n1.000000e+01\n</indep>\n"
        );

        let text = run(".DC Points=\"4\" Param=\"Vx\"\n").unwrap();
        let results = decode(&text);
        assert_eq!(results.len(), 1);
        assert_eq!(results["Vx"].len(), 4);
    }

    #[test]
    fn test_decode_round_trips_solution() {
        let netlist = "Vdc:V1 a 0 U=\"3.3\"\nR:R1 a b R=\"4700\"\nR:R2 b c R=\"10000\"\n\
                       R:R3 c 0 R=\"2200\"\nVdc:V2 c 0 U=\"0.7\"\n.DC Points=\"3\"\n";
        let solution = Simulator::new(&netlist::parse(netlist)).solve().unwrap();
        let results = decode(&run(netlist).unwrap());

        for (name, voltage) in solution.voltages() {
            let values = &results[name];
            assert_eq!(values.len(), 3);
            for value in values {
                assert_relative_eq!(*value, voltage, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn test_node_order_independent_of_component_order() {
        let a = run("R:R1 b a\nVdc:V1 a 0 U=\"2\"\nR:R2 b 0\n").unwrap();
        let b = run("R:R2 b 0\nR:R1 b a\nVdc:V1 a 0 U=\"2\"\n").unwrap();
        assert_eq!(a, b);
        let results = decode(&a);
        assert_relative_eq!(results["b"][0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reference_only_netlist() {
        let text = run("Vdc:V1 0 gnd U=\"5\"\nR:R1 gnd 0\n").unwrap();
        assert_eq!(text, "<indep sweep 2>\n0.000000e+00\n1.000000e+01\n</indep>\n");
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        let err = run("R:R1 a 0 R=\"ten\"\n").unwrap_err();
        assert!(matches!(err, QucsimError::InvalidParameter { .. }));

        let err = run("Vdc:V1 a 0 U=\"\"\n.DC Stop=\"x\"\n").unwrap_err();
        assert!(matches!(err, QucsimError::InvalidSimulationParam { ref param, .. } if param == "Stop"));
    }

    #[test]
    fn test_malformed_lines_do_not_fail() {
        let netlist = "garbage line here\nR:\n:R1 a b\nQ:Q1 c b e\nR:R2 x\n.DC Points=\"1\"\n";
        let results = decode(&run(netlist).unwrap());
        // Nodes of skipped or unknown elements still get a (zero) block
        for node in ["a", "b", "c", "e", "x"] {
            assert_eq!(results[node], vec![0.0]);
        }
        assert_eq!(results["sweep"], vec![0.0]);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let text = run("Vdc:V1 a 0 U=\"5\"\rR:R1 a 0 R=\"1000\"\r").unwrap();
        assert_eq!(decode(&text)["a"], vec![5.0, 5.0]);
    }

    #[test]
    fn test_points_above_limit_is_error() {
        let err = run(".DC Points=\"3000000000000000000\"\n").unwrap_err();
        assert!(matches!(err, QucsimError::InvalidSimulationParam { ref param, .. } if param == "Points"));
    }

    #[test]
    fn test_non_word_node_names_do_not_decode() {
        let text = run("Vdc:V1 out.Vt 0 U=\"2\"\nR:R1 out.Vt n-1\nR:R2 n-1 0\n").unwrap();
        assert!(text.contains("<dep n-1 sweep>\n1.000000e+00\n"));
        assert!(text.contains("<dep out.Vt sweep>\n2.000000e+00\n"));

        let results = decode(&text);
        assert_eq!(results.len(), 1);
        assert!(results.contains_key("sweep"));
    }

    #[test]
    fn test_custom_stamp_via_run_with() {
        use crate::circuit::Element;
        use crate::solver::MnaMatrix;

        /// Ideal current source pushing `I` amps into its second terminal.
        #[derive(Debug)]
        struct CurrentSource;

        impl Stamp for CurrentSource {
            fn stamp(&self, _c: &Circuit, element: &Element, m: &mut MnaMatrix) -> Result<()> {
                let current = components::numeric_param(element, "I", "0")?;
                if let Some(i) = element.terminal_index(0) {
                    m.add_source(i, -current);
                }
                if let Some(j) = element.terminal_index(1) {
                    m.add_source(j, current);
                }
                Ok(())
            }
        }

        let mut registry = StampRegistry::default();
        registry.register("Idc", CurrentSource);
        let text = run_with(
            "Idc:I1 0 out I=\"0.002\"\nR:R1 out 0 R=\"500\"\n",
            registry,
            SimulatorConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(decode(&text)["out"][0], 1.0, epsilon = 1e-9);
    }
}
