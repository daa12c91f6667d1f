//! orthogonal::core::recurrence — three-term recurrence coefficients.
//!
//! Purpose
//! -------
//! Produce the coefficients `(a_k, b_k)` of the monic recurrence
//! `P_{k+1}(x) = (x − a_k) P_k(x) − b_k P_{k−1}(x)` for every supported
//! measure. The table is the single input of both the polynomial builder
//! and the Jacobi matrix.
//!
//! Key behaviors
//! -------------
//! - Classical families use closed forms evaluated directly in `f64`.
//! - Jacobi special-cases `a_0` and `b_1`, whose general formulas are
//!   `0/0` for `α + β = 0` and `α + β = −1` respectively.
//! - Finite discrete measures delegate to
//!   [`stieltjes_coefficients`](crate::orthogonal::core::stieltjes::stieltjes_coefficients).
//!
//! Invariants & assumptions
//! ------------------------
//! - `b_0` is the total mass of the measure (1 for probability measures).
//! - `b_k > 0` for `1 ≤ k < support_len`; tables never extend past the
//!   support of a finite measure.
//! - A request for `count` entries always returns `max(count, 1)` entries.
//!
//! Conventions
//! -----------
//! - Index `k` of both arrays refers to the same recurrence step.
//! - Tables are computed fresh per request; memoization lives in
//!   `models::cache`.
use crate::orthogonal::{
    core::{families::FamilyKind, stieltjes::stieltjes_coefficients},
    errors::{PolyError, PolyResult},
};
use ndarray::{Array1, ArrayView1};

/// Recurrence coefficients `a_k` (centering) and `b_k` (scale).
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceTable {
    a: Array1<f64>,
    b: Array1<f64>,
}

impl RecurrenceTable {
    /// Coefficients `k = 0..count` for `kind`.
    ///
    /// Errors
    /// ------
    /// - `PolyError::DegreeAboveCeiling` when `count − 1` exceeds
    ///   [`FamilyKind::max_degree`]. For finite measures the ceiling never
    ///   exceeds `support_len − 1`.
    pub fn compute(kind: &FamilyKind, count: usize) -> PolyResult<Self> {
        let count = count.max(1);
        let max = kind.max_degree();
        if count - 1 > max {
            return Err(PolyError::DegreeAboveCeiling { degree: count - 1, max });
        }

        let (a, b) = match kind {
            FamilyKind::Discrete(measure) => stieltjes_coefficients(measure, count)?,
            _ => closed_form_table(kind, count).ok_or(PolyError::EmptyMeasure)?,
        };
        Ok(Self { a, b })
    }

    /// Wrap precomputed coefficient arrays.
    ///
    /// Errors
    /// ------
    /// - `PolyError::MismatchedLengths` when `a` and `b` differ in length.
    /// - `PolyError::EmptyMeasure` when both are empty.
    pub fn from_arrays(a: Array1<f64>, b: Array1<f64>) -> PolyResult<Self> {
        if a.len() != b.len() {
            return Err(PolyError::MismatchedLengths { points: a.len(), weights: b.len() });
        }
        if a.is_empty() {
            return Err(PolyError::EmptyMeasure);
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> ArrayView1<'_, f64> {
        self.a.view()
    }

    pub fn b(&self) -> ArrayView1<'_, f64> {
        self.b.view()
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Total mass `b_0`.
    pub fn mass(&self) -> f64 {
        self.b[0]
    }

    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.a, self.b)
    }
}

/// Closed-form table of `count` entries, without the ceiling check.
///
/// `None` for discrete measures, whose coefficients come from the Stieltjes
/// procedure.
pub(crate) fn closed_form_table(
    kind: &FamilyKind, count: usize,
) -> Option<(Array1<f64>, Array1<f64>)> {
    let table = match kind {
        FamilyKind::Legendre => closed_form(count, |_| 0.0, |k| {
            let k2 = (k * k) as f64;
            k2 / (4.0 * k2 - 1.0)
        }),
        FamilyKind::Hermite => closed_form(count, |_| 0.0, |k| k as f64),
        FamilyKind::Chebyshev => closed_form(count, |_| 0.0, |k| if k == 1 { 0.5 } else { 0.25 }),
        FamilyKind::Jacobi { alpha, beta } => jacobi(*alpha, *beta, count),
        FamilyKind::Laguerre { k: shape } => closed_form(
            count,
            |j| 2.0 * j as f64 + shape + 1.0,
            |j| j as f64 * (j as f64 + shape),
        ),
        FamilyKind::Charlier { lambda } => {
            closed_form(count, |j| j as f64 + lambda, |j| j as f64 * lambda)
        }
        FamilyKind::Krawtchouk { n, p } => {
            let n = *n as f64;
            let q = 1.0 - p;
            closed_form(
                count,
                |j| p * (n - j as f64) + j as f64 * q,
                |j| j as f64 * p * q * (n - j as f64 + 1.0),
            )
        }
        FamilyKind::Meixner { r, p } => {
            let q = 1.0 - p;
            closed_form(
                count,
                |j| (j as f64 + (j as f64 + r) * p) / q,
                |j| j as f64 * (j as f64 + r - 1.0) * p / (q * q),
            )
        }
        FamilyKind::Discrete(_) => return None,
    };
    Some(table)
}

/// Probability-measure tables with `b_0 = 1` and closed-form `b_k`, `k ≥ 1`.
fn closed_form<A, B>(count: usize, a_k: A, b_k: B) -> (Array1<f64>, Array1<f64>)
where
    A: Fn(usize) -> f64,
    B: Fn(usize) -> f64,
{
    let a = Array1::from_shape_fn(count, a_k);
    let b = Array1::from_shape_fn(count, |k| if k == 0 { 1.0 } else { b_k(k) });
    (a, b)
}

fn jacobi(alpha: f64, beta: f64, count: usize) -> (Array1<f64>, Array1<f64>) {
    let s = alpha + beta;
    let diff = beta * beta - alpha * alpha;
    closed_form(
        count,
        |k| {
            if k == 0 {
                (beta - alpha) / (s + 2.0)
            } else {
                let m = 2.0 * k as f64 + s;
                diff / (m * (m + 2.0))
            }
        },
        |k| {
            if k == 1 {
                4.0 * (1.0 + alpha) * (1.0 + beta) / ((s + 2.0) * (s + 2.0) * (s + 3.0))
            } else {
                let kf = k as f64;
                let m = 2.0 * kf + s;
                4.0 * kf * (kf + alpha) * (kf + beta) * (kf + s) / (m * m * (m + 1.0) * (m - 1.0))
            }
        },
    )
}
