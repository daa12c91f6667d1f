//! orthogonal::core::moments — exact raw moments of the supported measures.
//!
//! Purpose
//! -------
//! Compute `E[X^j]` under each [`FamilyKind`] in closed form so that
//! quadrature exactness can be checked against exact values instead of
//! against another numerical rule.
//!
//! Key behaviors
//! -------------
//! - Symmetric continuous measures (Legendre, Hermite, Chebyshev) have
//!   vanishing odd moments and simple products for even ones.
//! - Jacobi moments use the shifted variable `t = (1 + x)/2 ~ Beta(β+1, α+1)`
//!   and expand `x = 2t − 1` binomially.
//! - Laguerre moments are ratios of gamma functions, evaluated in log space
//!   with `statrs::function::gamma::ln_gamma`.
//! - Counting measures (Poisson, binomial, negative binomial) combine their
//!   factorial moments with Stirling numbers of the second kind:
//!   `E[X^j] = Σ_i S(j, i) E[(X)_i]`.
//! - Finite measures sum `w_i x_i^j` directly.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated [`FamilyKind`] values.
//! - Results are exact up to floating-point rounding for moderate orders;
//!   the Jacobi expansion alternates in sign and loses relative precision
//!   for large orders, which is acceptable for the low orders used in
//!   exactness checks.
use crate::orthogonal::core::families::FamilyKind;
use statrs::function::{factorial::binomial, gamma::ln_gamma};

/// Raw moment `∫ x^order dμ` of the measure described by `kind`.
pub fn raw_moment(kind: &FamilyKind, order: usize) -> f64 {
    match kind {
        FamilyKind::Legendre => {
            if order % 2 == 1 {
                0.0
            } else {
                1.0 / (order as f64 + 1.0)
            }
        }
        FamilyKind::Hermite => {
            if order % 2 == 1 {
                return 0.0;
            }
            // (order − 1)!!
            (1..order).step_by(2).map(|m| m as f64).product()
        }
        FamilyKind::Chebyshev => {
            if order % 2 == 1 {
                return 0.0;
            }
            // C(2k, k) / 4^k
            (1..=order / 2).fold(1.0, |acc, k| acc * (2 * k - 1) as f64 / (2 * k) as f64)
        }
        FamilyKind::Jacobi { alpha, beta } => jacobi_moment(*alpha, *beta, order),
        FamilyKind::Laguerre { k } => {
            let shape = k + 1.0;
            (ln_gamma(shape + order as f64) - ln_gamma(shape)).exp()
        }
        FamilyKind::Charlier { lambda } => {
            from_factorial_moments(order, |i| lambda.powi(i as i32))
        }
        FamilyKind::Krawtchouk { n, p } => from_factorial_moments(order, |i| {
            falling_factorial(*n as f64, i) * p.powi(i as i32)
        }),
        FamilyKind::Meixner { r, p } => {
            let odds = p / (1.0 - p);
            from_factorial_moments(order, |i| rising_factorial(*r, i) * odds.powi(i as i32))
        }
        FamilyKind::Discrete(measure) => measure
            .points()
            .iter()
            .zip(measure.weights())
            .map(|(&x, &w)| w * x.powi(order as i32))
            .sum(),
    }
}

fn jacobi_moment(alpha: f64, beta: f64, order: usize) -> f64 {
    // E[T^i] for T ~ Beta(β + 1, α + 1), built incrementally.
    let mut beta_moment = 1.0;
    let mut total = 0.0;
    for i in 0..=order {
        if i > 0 {
            let m = (i - 1) as f64;
            beta_moment *= (beta + 1.0 + m) / (alpha + beta + 2.0 + m);
        }
        let sign = if (order - i) % 2 == 0 { 1.0 } else { -1.0 };
        total += sign * binomial(order as u64, i as u64) * 2f64.powi(i as i32) * beta_moment;
    }
    total
}

fn from_factorial_moments<F>(order: usize, factorial_moment: F) -> f64
where
    F: Fn(usize) -> f64,
{
    stirling_second_kind_row(order)
        .iter()
        .enumerate()
        .map(|(i, &s)| if s == 0.0 { 0.0 } else { s * factorial_moment(i) })
        .sum()
}

/// Row `S(order, 0..=order)` of the Stirling numbers of the second kind.
fn stirling_second_kind_row(order: usize) -> Vec<f64> {
    let mut row = vec![0.0; order + 1];
    row[0] = 1.0;
    for n in 1..=order {
        for k in (1..=n).rev() {
            row[k] = k as f64 * row[k] + row[k - 1];
        }
        row[0] = 0.0;
    }
    row
}

fn falling_factorial(x: f64, i: usize) -> f64 {
    (0..i).map(|m| x - m as f64).product()
}

fn rising_factorial(x: f64, i: usize) -> f64 {
    (0..i).map(|m| x + m as f64).product()
}
