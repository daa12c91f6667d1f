//! orthogonal::errors — error surface for polynomial families.
//!
//! Purpose
//! -------
//! Define [`PolyError`], the single error type returned by family
//! construction, recurrence generation, polynomial building, and the
//! quadrature facade, together with the [`PolyResult`] alias and the
//! coarse [`ErrorKind`] classification.
//!
//! Key behaviors
//! -------------
//! - Every variant belongs to exactly one [`ErrorKind`]:
//!   `InvalidArgument` (malformed requests), `DomainError` (mathematically
//!   invalid parameters or degrees above a family's ceiling), or
//!   `NumericalError` (eigensolver failure, overflow).
//! - Eigensolver failures are wrapped verbatim from
//!   [`QuadError`] through `From`.
//! - With `python-bindings`, `From<PolyError> for PyErr` raises
//!   `ValueError` carrying the `Display` message.
//!
//! Conventions
//! -----------
//! - Messages name the offending parameter and value, phrased as the
//!   domain constraint that was violated.
//! - Errors are cheap to clone and compare, which the unit tests rely on.
use crate::{orthogonal::core::families::FamilyTag, quadrature::errors::QuadError};
use thiserror::Error;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type PolyResult<T> = Result<T, PolyError>;

/// Coarse classification of [`PolyError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    DomainError,
    NumericalError,
}

/// Failures of polynomial-family operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyError {
    // ---- InvalidArgument ----
    /// A negative degree was requested.
    #[error("degree must be non-negative; got {degree}")]
    NegativeDegree { degree: i64 },

    /// Wrong number of shape parameters for the family tag.
    #[error("{family} expects {expected} shape parameter(s); got {actual}")]
    WrongArity { family: FamilyTag, expected: &'static str, actual: usize },

    /// Family name not recognised.
    #[error("unknown polynomial family {name:?}")]
    UnknownFamily { name: String },

    /// A recurrence table shorter than the requested degree needs.
    #[error("recurrence table has {actual} entries; {required} required")]
    TableTooShort { required: usize, actual: usize },

    /// Discrete measure points and weights differ in length.
    #[error("discrete measure has {points} points but {weights} weights")]
    MismatchedLengths { points: usize, weights: usize },

    /// Discrete measure without support points.
    #[error("discrete measure must have at least one support point")]
    EmptyMeasure,

    // ---- DomainError ----
    /// Shape parameter outside its mathematical domain.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    /// Requested degree exceeds the family's safe-precision ceiling.
    #[error("degree {degree} exceeds the safe-precision ceiling {max} of this family")]
    DegreeAboveCeiling { degree: usize, max: usize },

    /// A discrete support point occurs twice.
    #[error("support point {value} appears more than once")]
    DuplicatePoint { value: f64 },

    // ---- NumericalError ----
    /// Monomial coefficients left the `f64` range while building the polynomial.
    #[error("monomial coefficients at degree {degree} are not representable in f64")]
    NonFiniteCoefficient { degree: usize },

    /// The Jacobi-matrix eigensolver failed.
    #[error(transparent)]
    Quadrature(#[from] QuadError),
}

impl PolyError {
    /// Classify the error as argument, domain, or numerical failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolyError::NegativeDegree { .. }
            | PolyError::WrongArity { .. }
            | PolyError::UnknownFamily { .. }
            | PolyError::TableTooShort { .. }
            | PolyError::MismatchedLengths { .. }
            | PolyError::EmptyMeasure => ErrorKind::InvalidArgument,
            PolyError::InvalidParameter { .. }
            | PolyError::DegreeAboveCeiling { .. }
            | PolyError::DuplicatePoint { .. } => ErrorKind::DomainError,
            PolyError::NonFiniteCoefficient { .. } => ErrorKind::NumericalError,
            PolyError::Quadrature(inner) => match inner {
                QuadError::InvalidOptions { .. } | QuadError::TableTooShort { .. } => {
                    ErrorKind::InvalidArgument
                }
                QuadError::NoConvergence { .. }
                | QuadError::CoincidentNodes { .. }
                | QuadError::NonPositiveWeight { .. }
                | QuadError::NegativeScale { .. }
                | QuadError::InvalidMass { .. } => ErrorKind::NumericalError,
            },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<PolyError> for PyErr {
    fn from(err: PolyError) -> PyErr {
        PyValueError::new_err(format!("PolyError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payloads of representative variants.
    // - The `ErrorKind` classification, including wrapped `QuadError`s.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion, which needs the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `NegativeDegree` reports the offending degree.
    //
    // Given
    // -----
    // - `PolyError::NegativeDegree { degree: -1 }`.
    //
    // Expect
    // ------
    // - Message contains "-1"; kind is `InvalidArgument`.
    fn negative_degree_is_invalid_argument() {
        // Arrange
        let err = PolyError::NegativeDegree { degree: -1 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-1"), "unexpected message: {msg}");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    // Purpose
    // -------
    // Parameter-domain failures classify as `DomainError` and name the
    // parameter.
    //
    // Given
    // -----
    // - `InvalidParameter { name: "p", value: 1.5, .. }`.
    //
    // Expect
    // ------
    // - Message contains "p" and "1.5"; kind is `DomainError`.
    fn invalid_parameter_is_domain_error() {
        let err = PolyError::InvalidParameter {
            name: "p",
            value: 1.5,
            reason: "probability must lie in (0, 1)",
        };
        let msg = err.to_string();
        assert!(msg.contains("p = 1.5"), "unexpected message: {msg}");
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    // Purpose
    // -------
    // Eigensolver failures wrap transparently and classify as numerical.
    //
    // Given
    // -----
    // - `QuadError::NoConvergence` converted with `From`.
    //
    // Expect
    // ------
    // - Same message as the inner error; kind is `NumericalError`.
    fn wrapped_no_convergence_is_numerical_error() {
        // Arrange
        let inner = QuadError::NoConvergence { index: 2, iterations: 30 };

        // Act
        let err: PolyError = inner.clone().into();

        // Assert
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.kind(), ErrorKind::NumericalError);
    }

    #[test]
    // Purpose
    // -------
    // Invalid solver options surface as argument errors, not numerical ones.
    //
    // Given
    // -----
    // - A wrapped `QuadError::InvalidOptions`.
    //
    // Expect
    // ------
    // - Kind is `InvalidArgument`.
    fn wrapped_invalid_options_is_invalid_argument() {
        let err: PolyError = QuadError::InvalidOptions {
            name: "tolerance",
            value: 2.0,
            reason: "out of range",
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
