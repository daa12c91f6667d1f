//! core — measures, recurrence coefficients, and orthonormal polynomials.
//!
//! Purpose
//! -------
//! Collect the building blocks of the polynomial stack: measure families
//! and their validated parameters, exact moments, three-term recurrence
//! tables (closed form or Stieltjes), and the orthonormal polynomial
//! builder. The facade in `orthogonal::models` wires these together with
//! the quadrature back end.
//!
//! Key behaviors
//! -------------
//! - [`FamilyKind`] / [`FamilyTag`] describe the supported measures, their
//!   parameter domains, supports, and precision ceilings.
//! - [`RecurrenceTable::compute`] produces `(a_k, b_k)` for any family.
//! - [`OrthonormalPolynomial::from_recurrence`] builds `qₙ` with monomial
//!   coefficients and recurrence-based evaluation.
//! - [`Degree`] converts signed and unsigned integers into validated degrees.
//!
//! Invariants & assumptions
//! ------------------------
//! - Family values are validated at construction and immutable afterwards.
//! - Recurrence tables satisfy `b_0 > 0` and `b_k > 0` within the support.
//!
//! Conventions
//! -----------
//! - All coefficient vectors are `ndarray::Array1<f64>`.
//! - This layer performs no logging; the facade logs requests.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its closed forms and rejection
//!   paths; facade-level tests cover orthonormality and exactness.

pub mod degree;
pub mod families;
pub mod moments;
pub mod polynomial;
pub mod recurrence;
pub mod stieltjes;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::degree::Degree;
pub use self::families::{
    CONTINUOUS_MAX_DEGREE, DISCRETE_MAX_DEGREE, DiscreteMeasure, FamilyKind, FamilyTag,
    HERMITE_MAX_DEGREE, LAGUERRE_MAX_DEGREE,
};
pub use self::moments::raw_moment;
pub use self::polynomial::OrthonormalPolynomial;
pub use self::recurrence::RecurrenceTable;
pub use self::stieltjes::stieltjes_coefficients;

pub mod prelude {
    pub use super::degree::Degree;
    pub use super::families::{DiscreteMeasure, FamilyKind, FamilyTag};
    pub use super::polynomial::OrthonormalPolynomial;
    pub use super::recurrence::RecurrenceTable;
}
