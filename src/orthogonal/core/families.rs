//! Measure families supported by the polynomial engine.
//!
//! This module defines [`FamilyKind`], the closed set of probability measures
//! an [`OrthogonalFamily`](crate::orthogonal::models::family::OrthogonalFamily)
//! can be orthogonal against, and [`FamilyTag`], its field-less tag used for
//! parsing, dispatch tables and cache keys.
//!
//! ## Supported measures
//! - [`FamilyKind::Legendre`]: Uniform(−1, 1).
//! - [`FamilyKind::Hermite`]: standard normal.
//! - [`FamilyKind::Chebyshev`]: arcsine law on (−1, 1).
//! - [`FamilyKind::Jacobi`]: density ∝ `(1 − x)^α (1 + x)^β` on (−1, 1).
//! - [`FamilyKind::Laguerre`]: Gamma(k + 1, 1), density ∝ `x^k e^{−x}`.
//! - [`FamilyKind::Charlier`]: Poisson(λ).
//! - [`FamilyKind::Krawtchouk`]: Binomial(n, p).
//! - [`FamilyKind::Meixner`]: negative binomial with pmf
//!   `Γ(x + r)/(Γ(r) x!) pˣ (1 − p)ʳ`.
//! - [`FamilyKind::Discrete`]: an arbitrary finite measure `Σ wᵢ δ_{xᵢ}`.
//!
//! ## Precision ceilings
//! Every family reports [`FamilyKind::max_degree`], the largest polynomial
//! degree it builds. The bounded continuous families stop at 400, Hermite at
//! 250 and Laguerre at 150.
//!
//! The counting families lose accuracy much earlier, and how early depends
//! on their parameters. Near the low end of the support `q_d` is the
//! minimal solution of its recurrence, so forward evaluation amplifies
//! rounding by roughly two orders of magnitude per degree once `d` exceeds
//! the spread of the measure. Their ceiling is read from
//! [`VARIANCE_CEILINGS`], indexed by an effective variance:
//! - Charlier: `λ`.
//! - Meixner: `r p / (1 − p)²`.
//! - Krawtchouk: `n · min(p, 1 − p)²`, further capped at `n`.
//!
//! The table holds the last degree at which `⟨q_d, q_d⟩` evaluated with the
//! recurrence stays within `1e-10` of 1 under the exact Poisson pmf, over a
//! quarter-decade grid of `λ`. The three mappings were checked against the
//! exact pmfs on parameter grids with no degree below the ceiling off by
//! more than `1e-8`.
//!
//! Closed-form families are also capped where the leading coefficient
//! `1/√(b_0 ⋯ b_n)` leaves the normal `f64` range, which only bites for very
//! large variances or exponents. Finite-support families stop at
//! `support_len − 1` and allow one extra quadrature node, for the
//! full-support rule, when the ceiling reaches the support.
use crate::orthogonal::{
    core::{
        moments,
        recurrence::closed_form_table,
        validation::{
            verify_discrete_measure, verify_exponent, verify_population, verify_population_f64,
            verify_positive, verify_probability,
        },
    },
    errors::{PolyError, PolyResult},
};
use ndarray::Array1;
use std::str::FromStr;

/// Ceiling for the continuous families on (−1, 1).
pub const CONTINUOUS_MAX_DEGREE: usize = 400;

/// Ceiling for the normal measure.
pub const HERMITE_MAX_DEGREE: usize = 250;

/// Ceiling for the gamma measure.
pub const LAGUERRE_MAX_DEGREE: usize = 150;

/// Hard cap for counting families and Stieltjes-generated discrete measures.
pub const DISCRETE_MAX_DEGREE: usize = 150;

/// `(log10 variance threshold, ceiling)` for the counting families, ascending.
///
/// A variance `v` maps to the ceiling of the last entry with
/// `log10(v) ≥ threshold`; below the first threshold the ceiling is 1.
pub const VARIANCE_CEILINGS: [(f64, usize); 24] = [
    (-150.0, 2),
    (-11.25, 3),
    (-7.75, 4),
    (-5.5, 5),
    (-4.5, 6),
    (-3.5, 7),
    (-2.75, 8),
    (-2.25, 9),
    (-2.0, 10),
    (-1.75, 11),
    (-1.25, 13),
    (-1.0, 14),
    (-0.75, 16),
    (-0.5, 18),
    (-0.25, 20),
    (0.0, 24),
    (0.25, 28),
    (0.5, 35),
    (0.75, 44),
    (1.0, 56),
    (1.25, 73),
    (1.5, 102),
    (1.75, 142),
    (2.0, DISCRETE_MAX_DEGREE),
];

/// Ceiling of a counting family with effective variance `variance`.
pub fn variance_ceiling(variance: f64) -> usize {
    let level = variance.log10();
    VARIANCE_CEILINGS
        .iter()
        .rev()
        .find(|(threshold, _)| level >= *threshold)
        .map_or(1, |&(_, ceiling)| ceiling)
}

/// Field-less tag of a [`FamilyKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FamilyTag {
    Legendre,
    Hermite,
    Chebyshev,
    Jacobi,
    Laguerre,
    Charlier,
    Krawtchouk,
    Meixner,
    Discrete,
}

impl FamilyTag {
    /// All tags, in declaration order.
    pub const ALL: [FamilyTag; 9] = [
        FamilyTag::Legendre,
        FamilyTag::Hermite,
        FamilyTag::Chebyshev,
        FamilyTag::Jacobi,
        FamilyTag::Laguerre,
        FamilyTag::Charlier,
        FamilyTag::Krawtchouk,
        FamilyTag::Meixner,
        FamilyTag::Discrete,
    ];

    /// Number of shape parameters; `None` for the variable-length discrete
    /// measure (interleaved `point, weight` pairs).
    pub const fn arity(self) -> Option<usize> {
        match self {
            FamilyTag::Legendre | FamilyTag::Hermite | FamilyTag::Chebyshev => Some(0),
            FamilyTag::Laguerre | FamilyTag::Charlier => Some(1),
            FamilyTag::Jacobi | FamilyTag::Krawtchouk | FamilyTag::Meixner => Some(2),
            FamilyTag::Discrete => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FamilyTag::Legendre => "legendre",
            FamilyTag::Hermite => "hermite",
            FamilyTag::Chebyshev => "chebyshev",
            FamilyTag::Jacobi => "jacobi",
            FamilyTag::Laguerre => "laguerre",
            FamilyTag::Charlier => "charlier",
            FamilyTag::Krawtchouk => "krawtchouk",
            FamilyTag::Meixner => "meixner",
            FamilyTag::Discrete => "discrete",
        }
    }

    fn expected_arity(self) -> &'static str {
        match self.arity() {
            Some(0) => "0",
            Some(1) => "1",
            Some(_) => "2",
            None => "an even number (>= 2) of",
        }
    }
}

impl std::fmt::Display for FamilyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FamilyTag {
    type Err = PolyError;

    /// Parse a family tag (case-insensitive). Distribution names are accepted
    /// as aliases: `"uniform"`, `"normal"`, `"arcsine"`, `"beta"`, `"gamma"`,
    /// `"poisson"`, `"binomial"`, `"negative_binomial"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legendre" | "uniform" => Ok(FamilyTag::Legendre),
            "hermite" | "normal" => Ok(FamilyTag::Hermite),
            "chebyshev" | "arcsine" => Ok(FamilyTag::Chebyshev),
            "jacobi" | "beta" => Ok(FamilyTag::Jacobi),
            "laguerre" | "gamma" => Ok(FamilyTag::Laguerre),
            "charlier" | "poisson" => Ok(FamilyTag::Charlier),
            "krawtchouk" | "binomial" => Ok(FamilyTag::Krawtchouk),
            "meixner" | "negative_binomial" | "negativebinomial" => Ok(FamilyTag::Meixner),
            "discrete" | "user_defined" => Ok(FamilyTag::Discrete),
            _ => Err(PolyError::UnknownFamily { name: s.to_string() }),
        }
    }
}

/// A validated finite measure `Σ wᵢ δ_{xᵢ}` with sorted, distinct points.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteMeasure {
    points: Array1<f64>,
    weights: Array1<f64>,
}

impl DiscreteMeasure {
    /// Validate and sort a finite measure.
    ///
    /// # Errors
    /// See [`verify_discrete_measure`].
    pub fn new(points: &[f64], weights: &[f64]) -> PolyResult<Self> {
        let (points, weights) = verify_discrete_measure(points, weights)?;
        Ok(Self { points: Array1::from(points), weights: Array1::from(weights) })
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn mass(&self) -> f64 {
        self.weights.sum()
    }
}

/// Probability measure (or finite measure) an orthogonal family is built on.
///
/// Variants carry their validated shape parameters. The parametric variants
/// are `#[non_exhaustive]`, so outside this crate they can be matched (with
/// `..`) but only built through the associated functions, which enforce the
/// parameter domains.
///
/// ```compile_fail
/// use rust_orthopoly::orthogonal::FamilyKind;
///
/// let unchecked = FamilyKind::Meixner { r: 2.0, p: 1.5 };
/// ```
///
/// ```
/// use rust_orthopoly::orthogonal::FamilyKind;
///
/// assert!(FamilyKind::meixner(2.0, 1.5).is_err());
/// assert!(matches!(FamilyKind::meixner(2.0, 0.5), Ok(FamilyKind::Meixner { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FamilyKind {
    /// Uniform(−1, 1).
    Legendre,
    /// Standard normal.
    Hermite,
    /// Arcsine law on (−1, 1).
    Chebyshev,
    /// Density ∝ (1 − x)^alpha (1 + x)^beta on (−1, 1); alpha, beta > −1.
    #[non_exhaustive]
    Jacobi { alpha: f64, beta: f64 },
    /// Gamma(k + 1, 1); k > −1.
    #[non_exhaustive]
    Laguerre { k: f64 },
    /// Poisson(lambda); lambda > 0.
    #[non_exhaustive]
    Charlier { lambda: f64 },
    /// Binomial(n, p); 1 ≤ n ≤ 2³² − 1, p ∈ (0, 1).
    #[non_exhaustive]
    Krawtchouk { n: usize, p: f64 },
    /// Negative binomial(r, p); r > 0, p ∈ (0, 1).
    #[non_exhaustive]
    Meixner { r: f64, p: f64 },
    /// Arbitrary finite measure.
    Discrete(DiscreteMeasure),
}

impl FamilyKind {
    pub fn jacobi(alpha: f64, beta: f64) -> PolyResult<Self> {
        let alpha = verify_exponent("alpha", alpha)?;
        let beta = verify_exponent("beta", beta)?;
        Ok(FamilyKind::Jacobi { alpha, beta })
    }

    pub fn laguerre(k: f64) -> PolyResult<Self> {
        Ok(FamilyKind::Laguerre { k: verify_exponent("k", k)? })
    }

    pub fn charlier(lambda: f64) -> PolyResult<Self> {
        Ok(FamilyKind::Charlier { lambda: verify_positive("lambda", lambda)? })
    }

    pub fn krawtchouk(n: usize, p: f64) -> PolyResult<Self> {
        let n = verify_population(n)?;
        let p = verify_probability("p", p)?;
        Ok(FamilyKind::Krawtchouk { n, p })
    }

    pub fn meixner(r: f64, p: f64) -> PolyResult<Self> {
        let r = verify_positive("r", r)?;
        let p = verify_probability("p", p)?;
        Ok(FamilyKind::Meixner { r, p })
    }

    pub fn discrete(points: &[f64], weights: &[f64]) -> PolyResult<Self> {
        Ok(FamilyKind::Discrete(DiscreteMeasure::new(points, weights)?))
    }

    /// Build a family from a tag and a flat parameter list.
    ///
    /// Parameter order: Jacobi `(alpha, beta)`, Laguerre `(k)`, Charlier
    /// `(lambda)`, Krawtchouk `(n, p)`, Meixner `(r, p)`, Discrete
    /// `(x_0, w_0, x_1, w_1, …)`.
    ///
    /// # Errors
    /// - `PolyError::WrongArity` when the list length does not match the tag.
    /// - Domain errors from the typed constructors.
    pub fn from_tag(tag: FamilyTag, params: &[f64]) -> PolyResult<Self> {
        let arity_ok = match tag.arity() {
            Some(expected) => params.len() == expected,
            None => params.len() >= 2 && params.len() % 2 == 0,
        };
        if !arity_ok {
            return Err(PolyError::WrongArity {
                family: tag,
                expected: tag.expected_arity(),
                actual: params.len(),
            });
        }
        match tag {
            FamilyTag::Legendre => Ok(FamilyKind::Legendre),
            FamilyTag::Hermite => Ok(FamilyKind::Hermite),
            FamilyTag::Chebyshev => Ok(FamilyKind::Chebyshev),
            FamilyTag::Jacobi => FamilyKind::jacobi(params[0], params[1]),
            FamilyTag::Laguerre => FamilyKind::laguerre(params[0]),
            FamilyTag::Charlier => FamilyKind::charlier(params[0]),
            FamilyTag::Krawtchouk => FamilyKind::krawtchouk(verify_population_f64(params[0])?, params[1]),
            FamilyTag::Meixner => FamilyKind::meixner(params[0], params[1]),
            FamilyTag::Discrete => {
                let points: Vec<f64> = params.iter().step_by(2).copied().collect();
                let weights: Vec<f64> = params.iter().skip(1).step_by(2).copied().collect();
                FamilyKind::discrete(&points, &weights)
            }
        }
    }

    pub fn tag(&self) -> FamilyTag {
        match self {
            FamilyKind::Legendre => FamilyTag::Legendre,
            FamilyKind::Hermite => FamilyTag::Hermite,
            FamilyKind::Chebyshev => FamilyTag::Chebyshev,
            FamilyKind::Jacobi { .. } => FamilyTag::Jacobi,
            FamilyKind::Laguerre { .. } => FamilyTag::Laguerre,
            FamilyKind::Charlier { .. } => FamilyTag::Charlier,
            FamilyKind::Krawtchouk { .. } => FamilyTag::Krawtchouk,
            FamilyKind::Meixner { .. } => FamilyTag::Meixner,
            FamilyKind::Discrete(_) => FamilyTag::Discrete,
        }
    }

    /// Flat parameter list in the order accepted by [`FamilyKind::from_tag`].
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            FamilyKind::Legendre | FamilyKind::Hermite | FamilyKind::Chebyshev => Vec::new(),
            FamilyKind::Jacobi { alpha, beta } => vec![*alpha, *beta],
            FamilyKind::Laguerre { k } => vec![*k],
            FamilyKind::Charlier { lambda } => vec![*lambda],
            FamilyKind::Krawtchouk { n, p } => vec![*n as f64, *p],
            FamilyKind::Meixner { r, p } => vec![*r, *p],
            FamilyKind::Discrete(measure) => measure
                .points()
                .iter()
                .zip(measure.weights())
                .flat_map(|(&x, &w)| [x, w])
                .collect(),
        }
    }

    /// Number of support points for finite measures, `None` otherwise.
    pub fn support_len(&self) -> Option<usize> {
        match self {
            FamilyKind::Krawtchouk { n, .. } => Some(n.saturating_add(1)),
            FamilyKind::Discrete(measure) => Some(measure.len()),
            _ => None,
        }
    }

    /// Largest polynomial degree this family builds (see the module docs).
    pub fn max_degree(&self) -> usize {
        let nominal = match self {
            FamilyKind::Legendre | FamilyKind::Chebyshev | FamilyKind::Jacobi { .. } => {
                CONTINUOUS_MAX_DEGREE
            }
            FamilyKind::Hermite => HERMITE_MAX_DEGREE,
            FamilyKind::Laguerre { .. } => LAGUERRE_MAX_DEGREE,
            FamilyKind::Charlier { lambda } => variance_ceiling(*lambda),
            FamilyKind::Meixner { r, p } => variance_ceiling(r * p / ((1.0 - p) * (1.0 - p))),
            FamilyKind::Krawtchouk { n, p } => {
                let tail = p.min(1.0 - p);
                let spread = variance_ceiling(*n as f64 * tail * tail);
                (*n).min(DISCRETE_MAX_DEGREE).min(spread)
            }
            FamilyKind::Discrete(measure) => (measure.len() - 1).min(DISCRETE_MAX_DEGREE),
        };
        self.representable_degree(nominal)
    }

    /// Largest quadrature size (and root count) this family supports.
    ///
    /// Equal to [`FamilyKind::max_degree`], except that a finite-support
    /// measure whose ceiling reaches `support_len − 1` also admits the rule
    /// with one node per support point.
    pub fn max_quadrature_size(&self) -> usize {
        let max = self.max_degree();
        match self.support_len() {
            Some(support) if max + 1 == support => support,
            _ => max,
        }
    }

    /// Largest `n ≤ nominal` whose leading coefficient `1/√(b_0 ⋯ b_n)` is a
    /// normal `f64`.
    fn representable_degree(&self, nominal: usize) -> usize {
        let Some((_, b)) = closed_form_table(self, nominal + 1) else {
            return nominal;
        };
        let limit = -2.0 * f64::MIN_POSITIVE.ln();
        let mut log_norm = 0.0;
        for (degree, &scale) in b.iter().enumerate() {
            log_norm += scale.ln();
            if !(log_norm.abs() <= limit) {
                return degree.saturating_sub(1);
            }
        }
        nominal
    }

    /// Closed support interval `[lower, upper]` (possibly infinite).
    pub fn support(&self) -> (f64, f64) {
        match self {
            FamilyKind::Legendre | FamilyKind::Chebyshev | FamilyKind::Jacobi { .. } => (-1.0, 1.0),
            FamilyKind::Hermite => (f64::NEG_INFINITY, f64::INFINITY),
            FamilyKind::Laguerre { .. } | FamilyKind::Charlier { .. } | FamilyKind::Meixner { .. } => {
                (0.0, f64::INFINITY)
            }
            FamilyKind::Krawtchouk { n, .. } => (0.0, *n as f64),
            FamilyKind::Discrete(measure) => {
                let points = measure.points();
                (points[0], points[points.len() - 1])
            }
        }
    }

    /// Total mass `b_0` of the measure.
    pub fn mass(&self) -> f64 {
        match self {
            FamilyKind::Discrete(measure) => measure.mass(),
            _ => 1.0,
        }
    }

    /// Exact raw moment `∫ x^order dμ`.
    pub fn moment(&self, order: usize) -> f64 {
        moments::raw_moment(self, order)
    }
}
