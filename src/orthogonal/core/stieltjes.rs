//! Discretized Stieltjes procedure for finite measures.
//!
//! The monic orthogonal polynomials of `μ = Σ wᵢ δ_{xᵢ}` are generated by
//! their values on the support points. Working with the normalized vectors
//! `uₖ[i] = √wᵢ · qₖ(xᵢ)` (with `qₖ` orthonormal) keeps every iterate of unit
//! norm, which rescales the monic values at each step and avoids the
//! overflow/underflow of the raw products. The coefficients follow from
//!
//! ```text
//! a_k     = Σᵢ xᵢ uₖ[i]²
//! r       = diag(x) uₖ − a_k uₖ − √b_k uₖ₋₁
//! b_{k+1} = ‖r‖²,   uₖ₊₁ = r / √b_{k+1}
//! ```
//!
//! and `r` is reorthogonalized against every earlier `uⱼ` (two passes) so the
//! coefficients stay accurate up to `len − 1`, where plain Stieltjes drifts.
use crate::orthogonal::{
    core::families::DiscreteMeasure,
    errors::{PolyError, PolyResult},
};
use ndarray::{Array1, Zip};

/// Recurrence coefficients `(a_k, b_k)`, `k = 0..count`, of a finite measure.
///
/// # Errors
/// - `PolyError::DegreeAboveCeiling` when `count` exceeds the number of
///   support points (the measure has no orthogonal polynomials of degree
///   `≥ len`).
pub fn stieltjes_coefficients(
    measure: &DiscreteMeasure, count: usize,
) -> PolyResult<(Array1<f64>, Array1<f64>)> {
    let len = measure.len();
    let count = count.max(1);
    if count > len {
        return Err(PolyError::DegreeAboveCeiling { degree: count - 1, max: len - 1 });
    }

    let x = measure.points();
    let mass = measure.mass();
    let mut a = Array1::zeros(count);
    let mut b = Array1::zeros(count);
    b[0] = mass;

    let mut basis: Vec<Array1<f64>> = Vec::with_capacity(count);
    basis.push(measure.weights().mapv(|w| (w / mass).sqrt()));

    for k in 0..count {
        let u = &basis[k];
        a[k] = Zip::from(x).and(u).fold(0.0, |acc, &xi, &ui| acc + xi * ui * ui);
        if k + 1 == count {
            break;
        }

        let mut r = Zip::from(x).and(u).map_collect(|&xi, &ui| (xi - a[k]) * ui);
        if k > 0 {
            r.scaled_add(-b[k].sqrt(), &basis[k - 1]);
        }
        for _ in 0..2 {
            for prev in &basis {
                let overlap = r.dot(prev);
                r.scaled_add(-overlap, prev);
            }
        }

        let norm_sq = r.dot(&r);
        b[k + 1] = norm_sq;
        let norm = norm_sq.sqrt();
        if norm == 0.0 {
            // Exhausted support; the remaining entries are meaningless.
            return Err(PolyError::DegreeAboveCeiling { degree: k + 1, max: k });
        }
        r.mapv_inplace(|v| v / norm);
        basis.push(r);
    }

    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Two equally weighted points have the textbook coefficients.
    //
    // Given
    // -----
    // - μ = ½δ₋₁ + ½δ₁.
    //
    // Expect
    // ------
    // - a = (0, 0), b = (1, 1).
    fn symmetric_two_point_measure() {
        let measure = DiscreteMeasure::new(&[-1.0, 1.0], &[0.5, 0.5]).unwrap();
        let (a, b) = stieltjes_coefficients(&measure, 2).unwrap();
        assert_relative_eq!(a[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(a[1], 0.0, epsilon = 1e-15);
        assert_relative_eq!(b[0], 1.0, epsilon = 1e-15);
        assert_relative_eq!(b[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // The measure mass and mean appear as `b_0` and `a_0`.
    //
    // Given
    // -----
    // - Points {0, 1, 4} with weights {1, 2, 3}.
    //
    // Expect
    // ------
    // - b_0 = 6, a_0 = (0 + 2 + 12) / 6.
    fn first_coefficients_are_mass_and_mean() {
        let measure = DiscreteMeasure::new(&[0.0, 1.0, 4.0], &[1.0, 2.0, 3.0]).unwrap();
        let (a, b) = stieltjes_coefficients(&measure, 1).unwrap();
        assert_eq!(a.len(), 1);
        assert_relative_eq!(b[0], 6.0, epsilon = 1e-15);
        assert_relative_eq!(a[0], 14.0 / 6.0, epsilon = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Requests beyond the support size are rejected.
    //
    // Given
    // -----
    // - A three-point measure and `count = 4`.
    //
    // Expect
    // ------
    // - `DegreeAboveCeiling { degree: 3, max: 2 }`.
    fn count_above_support_is_rejected() {
        let measure = DiscreteMeasure::new(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            stieltjes_coefficients(&measure, 4),
            Err(PolyError::DegreeAboveCeiling { degree: 3, max: 2 })
        );
    }
}
