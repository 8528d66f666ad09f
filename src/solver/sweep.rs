//! DC sweep planning.
//!
//! # Limitation: ConstantSweepApproximation
//!
//! The circuit is solved once, at the source values written in the netlist.
//! The sweep only shapes the output: every dependent block repeats the single
//! operating-point value at each sweep point. Nothing is re-solved per point.

use crate::error::{QucsimError, Result};
use crate::netlist::SweepDirective;

/// Sweep start used when `.DC` has no `Start`.
pub const DEFAULT_START: f64 = 0.0;
/// Sweep stop used when `.DC` has no `Stop`.
pub const DEFAULT_STOP: f64 = 10.0;
/// Point count used when `.DC` has no `Points`.
pub const DEFAULT_POINTS: i64 = 2;
/// Swept variable name used when `.DC` has no `Param`.
pub const DEFAULT_PARAM: &str = "sweep";
/// Largest accepted `Points`; every block holds this many values at most.
pub const MAX_POINTS: i64 = 1_000_000;

/// Numeric view of a `.DC` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub start: f64,
    pub stop: f64,
    /// Requested point count as written; zero or negative yields no points
    pub points: i64,
    pub param: String,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            points: DEFAULT_POINTS,
            param: DEFAULT_PARAM.to_string(),
        }
    }
}

impl SweepPlan {
    /// Convert a directive, applying defaults for absent keys.
    pub fn from_directive(directive: &SweepDirective) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            start: float_value(directive, "Start")?.unwrap_or(defaults.start),
            stop: float_value(directive, "Stop")?.unwrap_or(defaults.stop),
            points: match directive.get("Points") {
                Some(text) => points_value(text)?,
                None => defaults.points,
            },
            param: directive
                .get("Param")
                .map(str::to_string)
                .unwrap_or(defaults.param),
        })
    }

    /// Number of values each block carries.
    pub fn point_count(&self) -> usize {
        self.points.max(0) as usize
    }

    /// Distance between consecutive sweep values.
    pub fn step(&self) -> f64 {
        if self.points > 1 {
            (self.stop - self.start) / (self.points - 1) as f64
        } else {
            0.0
        }
    }

    /// Linearly spaced sweep values from `start` to `stop` inclusive.
    pub fn values(&self) -> Vec<f64> {
        let step = self.step();
        (0..self.point_count())
            .map(|i| self.start + i as f64 * step)
            .collect()
    }
}

fn points_value(text: &str) -> Result<i64> {
    let points = text
        .trim()
        .parse::<i64>()
        .map_err(|e| QucsimError::invalid_simulation_param("Points", text, e.to_string()))?;
    if points > MAX_POINTS {
        return Err(QucsimError::invalid_simulation_param(
            "Points",
            text,
            format!("at most {} points are supported", MAX_POINTS),
        ));
    }
    Ok(points)
}

fn float_value(directive: &SweepDirective, key: &str) -> Result<Option<f64>> {
    directive
        .get(key)
        .map(|text| {
            text.trim()
                .parse::<f64>()
                .map_err(|e| QucsimError::invalid_simulation_param(key, text, e.to_string()))
        })
        .transpose()
}
