//! orthogonal::core::validation — parameter guards for measure families.
//!
//! Purpose
//! -------
//! Centralize the domain checks applied when a family is constructed so
//! that every constructor reports the same [`PolyError`] variants and the
//! recurrence code can assume validated inputs.
//!
//! Key behaviors
//! -------------
//! - Probabilities must lie in the open interval `(0, 1)`.
//! - Rates and shape parameters must be finite and strictly positive.
//! - Jacobi / Laguerre exponents must be finite and `> −1`.
//! - Population sizes must be integers in `[1, 2³² − 1]`, whether passed
//!   as `usize` or as an `f64` coming from a generic parameter list.
//! - Discrete measures need matching lengths, finite distinct points, and
//!   finite positive weights.
//!
//! Conventions
//! -----------
//! - Each helper returns the validated value so call sites read as
//!   `let p = verify_probability("p", p)?;`.
//! - This module performs no allocation except for sorting discrete
//!   measures.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every rejection branch and one success path each.
use crate::orthogonal::errors::{PolyError, PolyResult};

/// Probability parameter in the open interval `(0, 1)`.
pub fn verify_probability(name: &'static str, p: f64) -> PolyResult<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(PolyError::InvalidParameter {
            name,
            value: p,
            reason: "probability must lie in the open interval (0, 1)",
        });
    }
    Ok(p)
}

/// Finite, strictly positive parameter (rates, shapes).
pub fn verify_positive(name: &'static str, value: f64) -> PolyResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PolyError::InvalidParameter {
            name,
            value,
            reason: "parameter must be finite and > 0",
        });
    }
    Ok(value)
}

/// Finite exponent strictly greater than −1 (Jacobi α/β, Laguerre k).
pub fn verify_exponent(name: &'static str, value: f64) -> PolyResult<f64> {
    if !value.is_finite() || value <= -1.0 {
        return Err(PolyError::InvalidParameter {
            name,
            value,
            reason: "exponent must be finite and > -1",
        });
    }
    Ok(value)
}

/// Largest accepted population size.
pub const MAX_POPULATION: usize = u32::MAX as usize;

/// Population size given as an integer, in `1..=MAX_POPULATION`.
pub fn verify_population(n: usize) -> PolyResult<usize> {
    if n == 0 || n > MAX_POPULATION {
        return Err(PolyError::InvalidParameter {
            name: "n",
            value: n as f64,
            reason: "population size must be an integer in [1, 2^32 - 1]",
        });
    }
    Ok(n)
}

/// Population size given as a float (generic parameter lists).
pub fn verify_population_f64(n: f64) -> PolyResult<usize> {
    if !n.is_finite() || n < 1.0 || n.fract() != 0.0 || n > MAX_POPULATION as f64 {
        return Err(PolyError::InvalidParameter {
            name: "n",
            value: n,
            reason: "population size must be an integer in [1, 2^32 - 1]",
        });
    }
    Ok(n as usize)
}

/// Validate a finite discrete measure and return it sorted by point.
///
/// Errors
/// ------
/// - `EmptyMeasure` for no points.
/// - `MismatchedLengths` when `points.len() != weights.len()`.
/// - `InvalidParameter` for non-finite points or non-positive / non-finite
///   weights.
/// - `DuplicatePoint` when a point appears twice.
pub fn verify_discrete_measure(
    points: &[f64], weights: &[f64],
) -> PolyResult<(Vec<f64>, Vec<f64>)> {
    if points.len() != weights.len() {
        return Err(PolyError::MismatchedLengths { points: points.len(), weights: weights.len() });
    }
    if points.is_empty() {
        return Err(PolyError::EmptyMeasure);
    }
    for &x in points {
        if !x.is_finite() {
            return Err(PolyError::InvalidParameter {
                name: "point",
                value: x,
                reason: "support points must be finite",
            });
        }
    }
    for &w in weights {
        verify_positive("weight", w)?;
    }

    let mut pairs: Vec<(f64, f64)> = points.iter().copied().zip(weights.iter().copied()).collect();
    pairs.sort_by(|l, r| l.0.total_cmp(&r.0));
    for pair in pairs.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(PolyError::DuplicatePoint { value: pair[0].0 });
        }
    }
    Ok(pairs.into_iter().unzip())
}
