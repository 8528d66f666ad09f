//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for circuit simulation.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   D ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B, C connect voltage sources to nodes
//! - D is 0 for ideal voltage sources
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! With only resistors and ideal voltage sources, B = Cᵀ and A is symmetric.

mod mna;
mod simulator;
mod sweep;

pub use mna::MnaMatrix;
pub use simulator::{Simulator, SimulatorConfig, Solution};
pub use sweep::{
    SweepPlan, DEFAULT_PARAM, DEFAULT_POINTS, DEFAULT_START, DEFAULT_STOP, MAX_POINTS,
};

/// Pivots and diagonals with smaller magnitude are treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
