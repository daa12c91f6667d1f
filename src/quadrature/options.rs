//! Solver configuration for the tridiagonal QL eigensolver.
//!
//! [`SolverOptions`] bounds the work done per eigenvalue and sets the
//! relative deflation tolerance used to split the tridiagonal matrix.
//! Both fields are private and validated once, in [`SolverOptions::new`],
//! so the solver itself never has to re-check them.
use crate::quadrature::errors::{QuadError, QuadResult};

/// Default cap on QL iterations spent on a single eigenvalue.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Default relative tolerance for treating an off-diagonal entry as zero.
pub const DEFAULT_TOLERANCE: f64 = f64::EPSILON;

/// Configuration for the implicit QL iteration.
///
/// - `max_iterations_per_eigenvalue`: hard cap on shifted QL sweeps before
///   an eigenvalue is declared non-convergent. The total work is therefore
///   bounded by `max_iterations_per_eigenvalue · n` sweeps.
/// - `tolerance`: an off-diagonal `e_m` is deflated when
///   `|e_m| ≤ tolerance · (|d_m| + |d_{m+1}|)`.
///
/// Default:
/// - `max_iterations_per_eigenvalue = 30`
/// - `tolerance = f64::EPSILON`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    max_iterations_per_eigenvalue: usize,
    tolerance: f64,
}

impl SolverOptions {
    /// Construct validated solver options; `None` keeps the default.
    ///
    /// # Rules
    /// - `max_iterations_per_eigenvalue`, if provided, must be `> 0`.
    /// - `tolerance`, if provided, must be finite with `0 < tolerance < 1`.
    ///
    /// # Errors
    /// - [`QuadError::InvalidOptions`] naming the offending field.
    pub fn new(
        max_iterations_per_eigenvalue: Option<usize>, tolerance: Option<f64>,
    ) -> QuadResult<Self> {
        let max_iterations_per_eigenvalue =
            max_iterations_per_eigenvalue.unwrap_or(DEFAULT_MAX_ITERATIONS);
        if max_iterations_per_eigenvalue == 0 {
            return Err(QuadError::InvalidOptions {
                name: "max_iterations_per_eigenvalue",
                value: 0.0,
                reason: "Iteration cap must be greater than zero.",
            });
        }
        let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            return Err(QuadError::InvalidOptions {
                name: "tolerance",
                value: tolerance,
                reason: "Tolerance must be finite and lie in (0, 1).",
            });
        }
        Ok(Self { max_iterations_per_eigenvalue, tolerance })
    }

    pub fn max_iterations_per_eigenvalue(&self) -> usize {
        self.max_iterations_per_eigenvalue
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { max_iterations_per_eigenvalue: DEFAULT_MAX_ITERATIONS, tolerance: DEFAULT_TOLERANCE }
    }
}
