//! Circuit model and node indexing.
//!
//! This module turns a parsed [`Netlist`](crate::netlist::Netlist) into the
//! shape the assembler works on: every free node gets a stable row, every
//! terminal is resolved to a row or to the reference node, and auxiliary
//! branch unknowns are allocated for the elements that need them.

mod graph;
mod nodes;
mod types;

pub use graph::{Circuit, Element};
pub use nodes::NodeIndexMap;
pub use types::*;
