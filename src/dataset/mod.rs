//! Block-tagged result datasets.
//!
//! Results are written in the Qucs dataset layout:
//!
//! ```text
//! <indep sweep 2>
//! 0.000000e+00
//! 1.000000e+01
//! </indep>
//! <dep n1 sweep>
//! 5.000000e+00
//! 5.000000e+00
//! </dep>
//! ```
//!
//! The writer lives in [`writer`] (via `Display` on [`Dataset`]) and the
//! reader in [`reader`]. The reader accepts output from any producer using
//! the same tags, not only this crate.
//!
//! Block names are written as given, but the reader only accepts names made
//! of word characters (letters, digits, `_`). A node named `out.Vt` or `n-1`
//! is encoded, yet its block is not recovered by [`decode`].

mod reader;
mod writer;

pub use reader::{decode, decode_file, read_dataset};
pub use writer::format_number;

use std::collections::HashMap;

use crate::solver::{Solution, SweepPlan};

/// Kind of a result block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Independent variable (the sweep axis)
    Independent,
    /// Dependent variable (a node voltage)
    Dependent,
}

impl BlockKind {
    /// Tag used in the opening and closing markers.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Independent => "indep",
            Self::Dependent => "dep",
        }
    }
}

/// One tagged block of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBlock {
    pub kind: BlockKind,
    pub name: String,
    /// Third header field: point count for `indep`, swept variable for `dep`
    pub type_tag: String,
    pub values: Vec<f64>,
}

/// Ordered collection of result blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub blocks: Vec<ResultBlock>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: ResultBlock) {
        self.blocks.push(block);
    }

    /// Values of the last block with the given name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.blocks
            .iter()
            .rev()
            .find(|block| block.name == name)
            .map(|block| block.values.as_slice())
    }

    /// The first independent block, if any.
    pub fn independent(&self) -> Option<&ResultBlock> {
        self.blocks
            .iter()
            .find(|block| block.kind == BlockKind::Independent)
    }

    /// Name to values; later blocks replace earlier ones of the same name.
    pub fn into_map(self) -> HashMap<String, Vec<f64>> {
        self.blocks
            .into_iter()
            .map(|block| (block.name, block.values))
            .collect()
    }

    /// Build the dataset for a solved circuit.
    ///
    /// One `indep` block holds the sweep values. Each free node gets a `dep`
    /// block repeating its operating-point voltage once per sweep point (see
    /// [`SweepPlan`] on the constant-sweep limitation).
    pub fn from_solution(solution: &Solution, plan: &SweepPlan) -> Self {
        let count = plan.point_count();
        let mut dataset = Self::new();

        dataset.push(ResultBlock {
            kind: BlockKind::Independent,
            name: plan.param.clone(),
            type_tag: plan.points.to_string(),
            values: plan.values(),
        });

        for (name, voltage) in solution.voltages() {
            dataset.push(ResultBlock {
                kind: BlockKind::Dependent,
                name: name.to_string(),
                type_tag: plan.param.clone(),
                values: vec![voltage; count],
            });
        }

        dataset
    }
}
