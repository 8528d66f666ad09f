//! MNA matrix assembly and solving.

use log::{trace, warn};

/// MNA matrix system Ax = z.
///
/// `a` stays as assembled; elimination works on a copy so the stamped system
/// can still be inspected after [`solve`](MnaMatrix::solve).
#[derive(Debug, Clone)]
pub struct MnaMatrix {
    /// System matrix A (row-major)
    pub a: Vec<f64>,
    /// Source vector z
    pub z: Vec<f64>,
    /// Solution vector x
    pub x: Vec<f64>,
    /// Matrix dimension
    pub size: usize,
    /// Upper-triangular working copy of A after elimination
    pub lu: Vec<f64>,
    /// Source vector after elimination
    pub y: Vec<f64>,
}

impl MnaMatrix {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            y: vec![0.0; size],
        }
    }

    /// Clear the matrix and vectors to zero.
    pub fn clear(&mut self) {
        self.a.fill(0.0);
        self.z.fill(0.0);
        self.x.fill(0.0);
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: f64) {
        self.z[row] += value;
    }

    /// Check whether A equals its transpose exactly.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size;
        (0..n).all(|i| (i + 1..n).all(|j| self.a[i * n + j] == self.a[j * n + i]))
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a voltage source between two nodes with branch current at index br.
    /// V[n+] - V[n-] = E
    pub fn stamp_voltage_source(
        &mut self,
        n_pos: Option<usize>,
        n_neg: Option<usize>,
        br: usize,
        voltage: f64,
    ) {
        if let Some(i) = n_pos {
            self.add(br, i, 1.0);
            self.add(i, br, 1.0);
        }
        if let Some(j) = n_neg {
            self.add(br, j, -1.0);
            self.add(j, br, -1.0);
        }
        self.add_source(br, voltage);
    }

    /// Solve Ax = z by Gaussian elimination without row exchanges.
    ///
    /// A pivot with magnitude below `tolerance` is skipped: its column is left
    /// uneliminated. During back substitution any row whose diagonal is not
    /// above `tolerance` yields `x[i] = 0`. Never fails; returns the number of
    /// unknowns that were degraded to zero.
    pub fn solve(&mut self, tolerance: f64) -> usize {
        let n = self.size;
        self.lu.copy_from_slice(&self.a);
        self.y.copy_from_slice(&self.z);
        self.x.fill(0.0);

        // Forward elimination
        for i in 0..n {
            let pivot = self.lu[i * n + i];
            if pivot.abs() < tolerance {
                trace!("skipping zero pivot in column {}", i);
                continue;
            }

            for j in (i + 1)..n {
                let factor = self.lu[j * n + i] / pivot;
                self.y[j] -= factor * self.y[i];
                for k in i..n {
                    self.lu[j * n + k] -= factor * self.lu[i * n + k];
                }
            }
        }

        // Back substitution
        let mut degraded = 0;
        for i in (0..n).rev() {
            let sum: f64 = ((i + 1)..n).map(|j| self.lu[i * n + j] * self.x[j]).sum();
            let diag = self.lu[i * n + i];
            if diag.abs() > tolerance {
                self.x[i] = (self.y[i] - sum) / diag;
            } else {
                degraded += 1;
            }
        }

        if degraded > 0 {
            warn!("singular system: {} of {} unknowns reported as 0", degraded, n);
        }
        degraded
    }
}
