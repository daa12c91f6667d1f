//! Gauss quadrature rules from a Jacobi matrix.
//!
//! Purpose
//! -------
//! Represent an `n`-point Gauss rule (nodes and weights) and build it from a
//! [`JacobiMatrix`]. Nodes are the eigenvalues, as in Golub–Welsch. Weights
//! are the Christoffel numbers `w_i = 1 / Σ_{k<n} q_k(x_i)²`, with `q_k` the
//! orthonormal polynomials evaluated by the recurrence stored in the matrix.
//!
//! Key behaviors
//! -------------
//! - The squared first eigenvector component `b_0 · v_i[0]²` equals the same
//!   weight, but only to absolute accuracy: tail weights far below
//!   `f64::EPSILON` come out as garbage or exactly zero. The Christoffel sum
//!   keeps them to relative accuracy.
//! - A weight below the `f64` range relative to `b_0` makes the sum
//!   overflow and is reported instead of being rounded to zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - `nodes.len() == weights.len()`; nodes strictly increasing.
//! - Every weight is finite and strictly positive, otherwise the rule is
//!   rejected with `QuadError::NonPositiveWeight`. Weights sum to `b_0`,
//!   and the rule integrates polynomials of degree `≤ 2n − 1` exactly.
//!
//! Testing notes
//! -------------
//! - Unit tests here use hand-built Legendre and Hermite tables; the
//!   family-level exactness properties are exercised in
//!   `orthogonal::models::family` and the integration tests.
use crate::quadrature::{
    errors::{QuadError, QuadResult},
    jacobi::JacobiMatrix,
    options::SolverOptions,
};
use ndarray::{Array1, ArrayView1, Zip};

/// Nodes and weights of a Gauss quadrature rule.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    nodes: Array1<f64>,
    weights: Array1<f64>,
}

impl QuadratureRule {
    /// The zero-point rule.
    pub fn empty() -> Self {
        Self { nodes: Array1::zeros(0), weights: Array1::zeros(0) }
    }

    /// Gauss rule of `jacobi`: eigenvalues as nodes, Christoffel numbers as
    /// weights.
    ///
    /// # Errors
    /// - `NoConvergence` / `CoincidentNodes` from the eigensolver.
    /// - `NonPositiveWeight` if a weight is zero, negative or non-finite,
    ///   which happens when it underflows `f64` or the matrix has a zero
    ///   coupling.
    pub fn from_jacobi(jacobi: &JacobiMatrix, options: &SolverOptions) -> QuadResult<Self> {
        if jacobi.size() == 0 {
            return Ok(Self::empty());
        }
        let nodes = jacobi.eigenvalues(options)?;
        let weights = nodes.mapv(|x| christoffel_weight(jacobi, x));
        if let Some((index, &value)) =
            weights.iter().enumerate().find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(QuadError::NonPositiveWeight { index, value });
        }
        Ok(Self { nodes, weights })
    }

    /// Build the `n`-point rule directly from recurrence coefficients.
    ///
    /// # Errors
    /// Table validation errors from [`JacobiMatrix::from_coefficients`] and
    /// eigensolver and weight errors from [`QuadratureRule::from_jacobi`].
    pub fn from_coefficients(
        a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, n: usize, options: &SolverOptions,
    ) -> QuadResult<Self> {
        let jacobi = JacobiMatrix::from_coefficients(a, b, n)?;
        Self::from_jacobi(&jacobi, options)
    }

    pub fn nodes(&self) -> &Array1<f64> {
        &self.nodes
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the weights; equals the measure mass up to rounding.
    pub fn total_mass(&self) -> f64 {
        self.weights.sum()
    }

    /// Approximate `∫ f dμ` by `Σ w_i f(x_i)`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut acc = 0.0;
        Zip::from(&self.nodes).and(&self.weights).for_each(|&x, &w| acc += w * f(x));
        acc
    }

    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.nodes, self.weights)
    }
}

/// `1 / Σ_{k<n} q_k(x)²` for the orthonormal family of `jacobi`.
///
/// Runs the recurrence on `p_k = √b_0 · q_k`, so `p_0 = 1` and the weight is
/// `b_0 / Σ p_k²`.
fn christoffel_weight(jacobi: &JacobiMatrix, x: f64) -> f64 {
    let a = jacobi.diagonal();
    let e = jacobi.off_diagonal();
    let (mut prev, mut curr, mut sum) = (0.0, 1.0, 1.0);
    for k in 0..e.len() {
        let coupling = if k == 0 { 0.0 } else { e[k - 1] };
        let next = ((x - a[k]) * curr - coupling * prev) / e[k];
        prev = curr;
        curr = next;
        sum += curr * curr;
    }
    jacobi.mass() / sum
}
