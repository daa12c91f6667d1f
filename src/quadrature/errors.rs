//! quadrature::errors — failures of the Jacobi-matrix eigensolver path.
//!
//! Purpose
//! -------
//! Collect the error conditions that can arise while assembling a Jacobi
//! matrix, running the implicit QL iteration, and deriving Gauss weights,
//! behind a single [`QuadError`] enum and [`QuadResult`] alias.
//!
//! Conventions
//! -----------
//! - Convergence, ordering and weight failures are numerical errors; they
//!   are never downgraded to partial results.
//! - Configuration mistakes (`InvalidOptions`, `TableTooShort`) are argument
//!   errors raised before any iteration starts.
//! - The polynomial layer wraps these values in
//!   `PolyError::Quadrature` through `From<QuadError>`.
use thiserror::Error;

pub type QuadResult<T> = Result<T, QuadError>;

/// Error conditions for tridiagonal eigenproblems and quadrature rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadError {
    // ---- Eigensolver ----
    /// The QL sweep for eigenvalue `index` hit its iteration cap.
    #[error("QL iteration did not converge for eigenvalue {index} after {iterations} iterations")]
    NoConvergence { index: usize, iterations: usize },

    /// Two consecutive sorted eigenvalues are not strictly increasing.
    #[error("eigenvalues at positions {index} and its successor coincide at {value}")]
    CoincidentNodes { index: usize, value: f64 },

    /// A quadrature weight is zero, negative or non-finite.
    #[error("quadrature weight {index} = {value} is not finite and positive")]
    NonPositiveWeight { index: usize, value: f64 },

    // ---- Jacobi matrix ----
    /// A recurrence scale term `b_k` (k ≥ 1) is negative or non-finite.
    #[error("recurrence scale b_{index} = {value} must be finite and non-negative")]
    NegativeScale { index: usize, value: f64 },

    /// The total mass `b_0` is not finite and strictly positive.
    #[error("measure mass b_0 = {value} must be finite and > 0")]
    InvalidMass { value: f64 },

    /// Fewer recurrence pairs were supplied than the matrix size needs.
    #[error("Jacobi matrix of size {required} needs {required} recurrence pairs; got {actual}")]
    TableTooShort { required: usize, actual: usize },

    // ---- Options ----
    /// A solver option is outside its admissible range.
    #[error("invalid solver option {name} = {value}: {reason}")]
    InvalidOptions { name: &'static str, value: f64, reason: &'static str },
}
