//! orthogonal::core::polynomial — orthonormal polynomials built from a
//! recurrence table.
//!
//! Purpose
//! -------
//! Turn a [`RecurrenceTable`] into the degree-`n` member `qₙ` of the
//! orthonormal family, represented both by its ascending monomial
//! coefficients and by the table that generated it.
//!
//! Key behaviors
//! -------------
//! - Construction applies the orthonormal recurrence
//!   `√b_{k+1} q_{k+1} = (x − a_k) q_k − √b_k q_{k−1}` with `q_0 = 1/√b_0`,
//!   normalizing at every step.
//! - [`OrthonormalPolynomial::evaluate`] runs the same recurrence at a point,
//!   which is far better conditioned than summing monomials at high degree.
//!   [`OrthonormalPolynomial::evaluate_monomial`] uses Horner on the stored
//!   coefficients.
//!
//! Invariants & assumptions
//! ------------------------
//! - `coefficients().len() == degree() + 1` and the leading coefficient is
//!   `1/√(b_0 ⋯ b_n) > 0`.
//! - The stored table has at least `degree + 1` entries.
//!
//! Conventions
//! -----------
//! - Coefficient index `i` multiplies `xⁱ`.
//!
//! Downstream usage
//! ----------------
//! - Returned by `OrthogonalFamily::build`; consumers read coefficients,
//!   evaluate, or differentiate.
//!
//! Testing notes
//! -------------
//! - Unit tests check textbook normalized Hermite/Legendre polynomials and
//!   agreement between the two evaluation paths. Orthonormality under each
//!   measure is tested at the facade level.
use crate::{
    orthogonal::{
        core::recurrence::RecurrenceTable,
        errors::{PolyError, PolyResult},
    },
    quadrature::errors::QuadError,
};
use ndarray::{Array1, ArrayView1};

/// Degree-`n` orthonormal polynomial of a measure.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthonormalPolynomial {
    degree: usize,
    coefficients: Array1<f64>,
    recurrence: RecurrenceTable,
}

impl OrthonormalPolynomial {
    /// Build `q_degree` from `table`.
    ///
    /// Errors
    /// ------
    /// - `PolyError::TableTooShort` if `table.len() < degree + 1`.
    /// - `QuadError::InvalidMass` / `QuadError::NegativeScale` (wrapped) for a
    ///   non-positive `b_0` or `b_k`.
    /// - `PolyError::NonFiniteCoefficient` when a coefficient overflows or the
    ///   leading coefficient underflows to zero.
    pub fn from_recurrence(table: RecurrenceTable, degree: usize) -> PolyResult<Self> {
        let required = degree + 1;
        if table.len() < required {
            return Err(PolyError::TableTooShort { required, actual: table.len() });
        }
        let a = table.a();
        let b = table.b();
        let mass = b[0];
        if !mass.is_finite() || mass <= 0.0 {
            return Err(QuadError::InvalidMass { value: mass }.into());
        }

        let mut prev: Array1<f64> = Array1::zeros(required);
        let mut curr: Array1<f64> = Array1::zeros(required);
        curr[0] = 1.0 / mass.sqrt();

        for k in 0..degree {
            let scale = b[k + 1];
            if !scale.is_finite() || scale <= 0.0 {
                return Err(QuadError::NegativeScale { index: k + 1, value: scale }.into());
            }
            let root_next = scale.sqrt();
            let root_curr = if k == 0 { 0.0 } else { b[k].sqrt() };

            let mut next = Array1::<f64>::zeros(required);
            for i in 0..=k {
                next[i + 1] += curr[i];
                next[i] -= a[k] * curr[i];
                next[i] -= root_curr * prev[i];
            }
            next.mapv_inplace(|c| c / root_next);
            if next[k + 1] == 0.0 || next.iter().any(|c| !c.is_finite()) {
                return Err(PolyError::NonFiniteCoefficient { degree: k + 1 });
            }
            prev = std::mem::replace(&mut curr, next);
        }

        Ok(Self { degree, coefficients: curr, recurrence: table })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Ascending monomial coefficients.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.degree]
    }

    pub fn recurrence(&self) -> &RecurrenceTable {
        &self.recurrence
    }

    /// `qₙ(x)` through the orthonormal recurrence.
    pub fn evaluate(&self, x: f64) -> f64 {
        let a = self.recurrence.a();
        let b = self.recurrence.b();
        let mut prev = 0.0;
        let mut curr = 1.0 / b[0].sqrt();
        for k in 0..self.degree {
            let root_curr = if k == 0 { 0.0 } else { b[k].sqrt() };
            let next = ((x - a[k]) * curr - root_curr * prev) / b[k + 1].sqrt();
            prev = curr;
            curr = next;
        }
        curr
    }

    pub fn evaluate_many(&self, xs: ArrayView1<'_, f64>) -> Array1<f64> {
        xs.mapv(|x| self.evaluate(x))
    }

    /// `qₙ(x)` by Horner's rule on the monomial coefficients.
    pub fn evaluate_monomial(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Ascending coefficients of `qₙ'`; `[0.0]` for degree 0.
    pub fn derivative_coefficients(&self) -> Array1<f64> {
        if self.degree == 0 {
            return Array1::zeros(1);
        }
        Array1::from_shape_fn(self.degree, |i| (i + 1) as f64 * self.coefficients[i + 1])
    }
}
