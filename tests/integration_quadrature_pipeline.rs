//! Integration tests for polynomial families and Gauss quadrature.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from family construction, through
//!   recurrence tables and the Jacobi eigenproblem, to quadrature rules that
//!   reproduce expectations under the reference distributions.
//! - Cross-check against independent implementations (`statrs` pmfs and
//!   moments, `nalgebra` dense eigensolver, textbook closed-form rules).
//!
//! Coverage
//! --------
//! - `orthogonal::models::family::OrthogonalFamily`:
//!   - Counting families against truncated pmf sums.
//!   - Orthonormality at the parameter-dependent degree ceiling.
//!   - Full-support Krawtchouk rule vs. the binomial pmf.
//!   - Stieltjes-generated tables vs. closed-form Krawtchouk.
//!   - Shared use across threads.
//! - `orthogonal::models::cache::QuadratureCache` under concurrent access.
//! - `quadrature::jacobi::JacobiMatrix::to_dense` vs. `nalgebra`.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of building blocks (validation helpers, the QL
//!   iteration, error classification); these are covered by unit tests.
//! - Python bindings, which need an interpreter.
use approx::assert_relative_eq;
use nalgebra::SymmetricEigen;
use rust_orthopoly::{
    orthogonal::{
        core::families::FamilyTag,
        models::{cache::QuadratureCache, family::OrthogonalFamily},
    },
    quadrature::{jacobi::JacobiMatrix, rule::QuadratureRule},
};
use statrs::{
    distribution::{Binomial, Discrete, Gamma, NegativeBinomial, Poisson},
    statistics::Distribution,
};
use std::{f64::consts::PI, sync::Arc};

/// Purpose
/// -------
/// Expectation of `x^j` under a pmf on `0..=upper`, by direct summation.
///
/// Parameters
/// ----------
/// - `pmf`: probability mass function on the non-negative integers.
/// - `upper`: truncation point; the caller picks it so the tail is
///   negligible at the orders tested.
/// - `order`: power `j`.
fn truncated_moment<F>(pmf: F, upper: u64, order: i32) -> f64
where
    F: Fn(u64) -> f64,
{
    (0..=upper).map(|k| pmf(k) * (k as f64).powi(order)).sum()
}

fn assert_rule_matches_pmf<F>(rule: &QuadratureRule, pmf: F, upper: u64, max_order: i32)
where
    F: Fn(u64) -> f64,
{
    for j in 0..=max_order {
        let want = truncated_moment(&pmf, upper, j);
        let got = rule.integrate(|x| x.powi(j));
        assert_relative_eq!(got, want, max_relative = 1e-9, epsilon = 1e-12);
    }
}

#[test]
// Purpose
// -------
// The Charlier rule reproduces Poisson moments through degree 2n − 1.
//
// Given
// -----
// - λ = 3, n = 6; statrs Poisson pmf summed to k = 120.
//
// Expect
// ------
// - Agreement for orders 0..=11.
fn charlier_rule_matches_poisson_pmf() {
    // Arrange
    let family = OrthogonalFamily::charlier(3.0).expect("valid rate");
    let poisson = Poisson::new(3.0).expect("valid rate");

    // Act
    let rule = family.nodes_and_weights(6).expect("six-point rule");

    // Assert
    assert_rule_matches_pmf(&rule, |k| poisson.pmf(k), 120, 11);
}

#[test]
// Purpose
// -------
// The Meixner rule reproduces negative-binomial moments.
//
// Given
// -----
// - r = 2.5, p = 0.3 (pmf ∝ pˣ(1 − p)ʳ), n = 5. statrs parametrizes by the
//   success probability `1 − p`.
//
// Expect
// ------
// - Agreement for orders 0..=9.
fn meixner_rule_matches_negative_binomial_pmf() {
    let family = OrthogonalFamily::meixner(2.5, 0.3).expect("valid shape");
    let nb = NegativeBinomial::new(2.5, 0.7).expect("valid shape");
    let rule = family.nodes_and_weights(5).expect("five-point rule");
    assert_rule_matches_pmf(&rule, |k| nb.pmf(k), 400, 9);
}

/// Purpose
/// -------
/// `⟨f, g⟩` under a pmf on `0..=upper`, by direct summation.
fn pmf_inner<F, G, H>(pmf: F, upper: u64, f: G, g: H) -> f64
where
    F: Fn(u64) -> f64,
    G: Fn(f64) -> f64,
    H: Fn(f64) -> f64,
{
    (0..=upper)
        .map(|k| {
            let x = k as f64;
            pmf(k) * f(x) * g(x)
        })
        .sum()
}

#[test]
// Purpose
// -------
// Counting-family polynomials stay orthonormal up to and including the
// parameter-dependent `max_degree()`.
//
// Given
// -----
// - Charlier λ ∈ {0.3, 2, 10}, Meixner (3, 0.4) and (20, 0.5), Krawtchouk
//   (150, 0.4), (20, 0.4) and (500, 0.9); exact statrs pmfs summed over a
//   window where the tail of `pmf · q_d²` is negligible.
// - d = `max_degree()`, pinned to its expected value.
//
// Expect
// ------
// - ⟨q_d, q_d⟩ = 1 and ⟨q_d, q_{d−1}⟩ = 0 within 1e-8.
fn counting_families_are_orthonormal_at_their_ceiling() {
    // Arrange
    type Pmf = Box<dyn Fn(u64) -> f64>;
    let poisson = |lambda: f64| -> Pmf {
        let dist = Poisson::new(lambda).expect("valid rate");
        Box::new(move |k| dist.pmf(k))
    };
    let negative_binomial = |r: f64, p: f64| -> Pmf {
        let dist = NegativeBinomial::new(r, 1.0 - p).expect("valid shape");
        Box::new(move |k| dist.pmf(k))
    };
    let binomial = |n: u64, p: f64| -> Pmf {
        let dist = Binomial::new(p, n).expect("valid binomial");
        Box::new(move |k| dist.pmf(k))
    };
    let cases: Vec<(OrthogonalFamily, Pmf, u64, usize)> = vec![
        (OrthogonalFamily::charlier(0.3).unwrap(), poisson(0.3), 200, 16),
        (OrthogonalFamily::charlier(2.0).unwrap(), poisson(2.0), 300, 28),
        (OrthogonalFamily::charlier(10.0).unwrap(), poisson(10.0), 400, 56),
        (OrthogonalFamily::meixner(3.0, 0.4).unwrap(), negative_binomial(3.0, 0.4), 2000, 35),
        (OrthogonalFamily::meixner(20.0, 0.5).unwrap(), negative_binomial(20.0, 0.5), 4000, 102),
        (OrthogonalFamily::krawtchouk(150, 0.4).unwrap(), binomial(150, 0.4), 150, 73),
        (OrthogonalFamily::krawtchouk(20, 0.4).unwrap(), binomial(20, 0.4), 20, 20),
        (OrthogonalFamily::krawtchouk(500, 0.9).unwrap(), binomial(500, 0.9), 500, 35),
    ];

    for (family, pmf, upper, ceiling) in cases {
        let d = family.max_degree();
        assert_eq!(d, ceiling, "{:?}", family.kind());

        // Act
        let top = family.build(d).expect("polynomial at the ceiling");
        let below = family.build(d - 1).expect("polynomial below the ceiling");
        let norm = pmf_inner(&pmf, upper, |x| top.evaluate(x), |x| top.evaluate(x));
        let cross = pmf_inner(&pmf, upper, |x| top.evaluate(x), |x| below.evaluate(x));

        // Assert
        assert!((norm - 1.0).abs() < 1e-8, "{:?}: <q{d}, q{d}> = {norm}", family.kind());
        assert!(cross.abs() < 1e-8, "{:?}: <q{d}, q{}> = {cross}", family.kind(), d - 1);
    }
}

#[test]
// Purpose
// -------
// The (n + 1)-point Krawtchouk rule is the binomial measure itself.
//
// Given
// -----
// - Binomial(12, 0.35).
//
// Expect
// ------
// - Nodes 0, 1, …, 12 and weights equal to the pmf.
fn krawtchouk_full_support_rule_is_binomial_pmf() {
    // Arrange
    let (n, p) = (12u64, 0.35);
    let family = OrthogonalFamily::krawtchouk(n as usize, p).expect("valid binomial");
    let binom = Binomial::new(p, n).expect("valid binomial");

    // Act
    let rule = family.nodes_and_weights(n as usize + 1).expect("full-support rule");

    // Assert
    assert_eq!(rule.len(), n as usize + 1);
    for k in 0..=n {
        assert_relative_eq!(rule.nodes()[k as usize], k as f64, epsilon = 1e-9);
        assert_relative_eq!(rule.weights()[k as usize], binom.pmf(k), epsilon = 1e-11);
    }
}

#[test]
// Purpose
// -------
// A discrete measure built from the binomial pmf yields the same table and
// rule as the closed-form Krawtchouk family.
//
// Given
// -----
// - Binomial(30, 0.5) pmf as a `discrete` family; degree 30.
//
// Expect
// ------
// - Recurrence tables agree to 1e-6 relative; 8-point rules agree.
fn stieltjes_on_binomial_support_matches_krawtchouk() {
    let (n, p) = (30u64, 0.5);
    let binom = Binomial::new(p, n).expect("valid binomial");
    let points: Vec<f64> = (0..=n).map(|k| k as f64).collect();
    let weights: Vec<f64> = (0..=n).map(|k| binom.pmf(k)).collect();

    let discrete = OrthogonalFamily::discrete(&points, &weights).expect("valid measure");
    let kraw = OrthogonalFamily::krawtchouk(n as usize, p).expect("valid binomial");

    let got = discrete.recurrence(30).expect("discrete table");
    let want = kraw.recurrence(30).expect("closed-form table");
    for k in 0..=30 {
        assert_relative_eq!(got.a()[k], want.a()[k], max_relative = 1e-6, epsilon = 1e-8);
        assert_relative_eq!(got.b()[k], want.b()[k], max_relative = 1e-6, epsilon = 1e-8);
    }

    let rule_d = discrete.nodes_and_weights(8).expect("discrete rule");
    let rule_k = kraw.nodes_and_weights(8).expect("closed-form rule");
    for i in 0..8 {
        assert_relative_eq!(rule_d.nodes()[i], rule_k.nodes()[i], epsilon = 1e-9);
        assert_relative_eq!(rule_d.weights()[i], rule_k.weights()[i], epsilon = 1e-10);
    }
}

#[test]
// Purpose
// -------
// Closed-form Gauss rules are reproduced.
//
// Given
// -----
// - Chebyshev (arcsine) with n = 7; Legendre with n = 2.
//
// Expect
// ------
// - Chebyshev nodes cos((2i − 1)π/(2n)) with weights 1/n.
// - Legendre nodes ±1/√3 with weights 1/2.
fn closed_form_rules_are_reproduced() {
    let n = 7;
    let rule = OrthogonalFamily::chebyshev().nodes_and_weights(n).expect("chebyshev rule");
    for i in 0..n {
        // Ascending order: i = 0 is the most negative node.
        let want = ((2 * (n - i) - 1) as f64 * PI / (2 * n) as f64).cos();
        assert_relative_eq!(rule.nodes()[i], want, epsilon = 1e-13);
        assert_relative_eq!(rule.weights()[i], 1.0 / n as f64, epsilon = 1e-13);
    }

    let rule = OrthogonalFamily::legendre().nodes_and_weights(2).expect("legendre rule");
    let s = 1.0 / 3f64.sqrt();
    assert_relative_eq!(rule.nodes()[0], -s, epsilon = 1e-15);
    assert_relative_eq!(rule.nodes()[1], s, epsilon = 1e-15);
    assert_relative_eq!(rule.weights()[0], 0.5, epsilon = 1e-15);
    assert_relative_eq!(rule.weights()[1], 0.5, epsilon = 1e-15);
}

#[test]
// Purpose
// -------
// The Laguerre rule reproduces the Gamma mean and variance reported by
// statrs.
//
// Given
// -----
// - k = 1.5 (Gamma(2.5, 1)), n = 4.
//
// Expect
// ------
// - Quadrature mean and variance equal statrs values.
fn laguerre_rule_matches_gamma_mean_and_variance() {
    let family = OrthogonalFamily::laguerre(1.5).expect("valid exponent");
    let gamma = Gamma::new(2.5, 1.0).expect("valid gamma");
    let rule = family.nodes_and_weights(4).expect("four-point rule");

    let mean = rule.integrate(|x| x);
    let second = rule.integrate(|x| x * x);
    assert_relative_eq!(mean, gamma.mean().expect("finite mean"), max_relative = 1e-12);
    assert_relative_eq!(
        second - mean * mean,
        gamma.variance().expect("finite variance"),
        max_relative = 1e-11
    );
}

#[test]
// Purpose
// -------
// Roots from the QL solver agree with nalgebra's dense eigensolver on the
// same Jacobi matrix.
//
// Given
// -----
// - Jacobi(α = 1.2, β = −0.4) with n = 12.
//
// Expect
// ------
// - Sorted dense eigenvalues equal `roots(12)` to 1e-12.
fn roots_agree_with_dense_eigensolver() {
    let family = OrthogonalFamily::jacobi(1.2, -0.4).expect("valid exponents");
    let table = family.recurrence(12).expect("table");
    let jacobi = JacobiMatrix::from_coefficients(table.a(), table.b(), 12).expect("matrix");

    let mut dense: Vec<f64> = SymmetricEigen::new(jacobi.to_dense()).eigenvalues.iter().copied().collect();
    dense.sort_by(f64::total_cmp);
    let roots = family.roots(12).expect("roots");

    for (got, want) in roots.iter().zip(&dense) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
// Purpose
// -------
// A single family is usable from many threads at once, and every thread
// sees identical results.
//
// Given
// -----
// - Families built from tags, shared behind `Arc`, queried from 4 threads.
//
// Expect
// ------
// - Each thread's rule and polynomial equal the single-threaded ones.
fn families_are_shareable_across_threads() {
    let families: Vec<Arc<OrthogonalFamily>> = [
        (FamilyTag::Hermite, vec![]),
        (FamilyTag::Charlier, vec![0.3]),
        (FamilyTag::Krawtchouk, vec![25.0, 0.2]),
    ]
    .into_iter()
    .map(|(tag, params)| Arc::new(OrthogonalFamily::from_tag(tag, &params).expect("valid family")))
    .collect();

    for family in &families {
        let want_rule = family.nodes_and_weights(10).expect("rule");
        let want_poly = family.build(10).expect("polynomial");
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let family = Arc::clone(family);
                    scope.spawn(move || {
                        (
                            family.nodes_and_weights(10).expect("rule"),
                            family.build(10).expect("polynomial"),
                        )
                    })
                })
                .collect();
            for handle in handles {
                let (rule, poly) = handle.join().expect("worker thread");
                assert_eq!(rule, want_rule);
                assert_eq!(poly, want_poly);
            }
        });
    }
}

#[test]
// Purpose
// -------
// The cache is safe under concurrent access and deduplicates entries.
//
// Given
// -----
// - One cache, one Legendre family, 8 threads requesting sizes 1..=5.
//
// Expect
// ------
// - Exactly five entries; every returned rule equals the direct result.
fn cache_is_shared_safely_between_threads() {
    let cache = QuadratureCache::new();
    let family = OrthogonalFamily::legendre();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for size in 1..=5usize {
                    let rule = cache.get_or_compute(&family, size).expect("cached rule");
                    assert_eq!(rule.len(), size);
                }
            });
        }
    });

    assert_eq!(cache.len(), 5);
    for size in 1..=5usize {
        let cached = cache.get_or_compute(&family, size).expect("cached rule");
        assert_eq!(*cached, family.nodes_and_weights(size).expect("direct rule"));
    }
}
