//! quadrature — Jacobi matrices, tridiagonal eigensolver, Gauss rules.
//!
//! Purpose
//! -------
//! Provide the numerical back end that turns three-term recurrence
//! coefficients into Gauss quadrature rules. This layer knows nothing about
//! polynomial families; it consumes `(a_k, b_k)` arrays and returns nodes and
//! weights.
//!
//! Key behaviors
//! -------------
//! - `jacobi`: assemble the symmetric tridiagonal Jacobi matrix and the mass.
//! - `eigensolver`: implicit QL with a per-eigenvalue iteration cap, optionally
//!   tracking the first eigenvector row.
//! - `rule`: Gauss nodes (eigenvalues) and Christoffel weights.
//! - `options`: validated solver configuration.
//! - `errors`: `QuadError` / `QuadResult`.
//!
//! Conventions
//! -----------
//! - All vectors are `ndarray::Array1<f64>`.
//! - Nodes are sorted ascending; ties are reported as errors.
//! - This layer logs only eigensolver non-convergence (`tracing::warn!`).

pub mod eigensolver;
pub mod errors;
pub mod jacobi;
pub mod options;
pub mod rule;

pub mod prelude {
    pub use super::errors::{QuadError, QuadResult};
    pub use super::jacobi::JacobiMatrix;
    pub use super::options::SolverOptions;
    pub use super::rule::QuadratureRule;
}
