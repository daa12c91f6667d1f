//! orthogonal — orthonormal polynomial families of probability measures.
//!
//! Purpose
//! -------
//! Provide the polynomial layer of the crate: validated measure families,
//! their three-term recurrence coefficients, orthonormal polynomials with
//! monomial coefficients, and the facade that turns a family into roots and
//! Gauss quadrature rules through the `quadrature` back end.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds the math: families, moments, recurrences (closed form
//!   and Stieltjes), and the polynomial builder.
//! - [`models`] holds the public handle [`OrthogonalFamily`] and the
//!   [`QuadratureCache`].
//! - [`errors`] defines [`PolyError`] / [`PolyResult`] and the coarse
//!   [`ErrorKind`] classification shared by every operation.
//!
//! Invariants & assumptions
//! ------------------------
//! - All measures are probability measures (mass 1) except user-supplied
//!   discrete measures, whose mass is the sum of their weights.
//! - Families are immutable and `Send + Sync`; the cache is the only shared
//!   mutable structure and is internally synchronized.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Construct a family (`OrthogonalFamily::charlier(0.3)?`, or
//!      `OrthogonalFamily::from_name("poisson", &[0.3])?`).
//!   2. Request polynomials with `build(n)` for `n = 0, 1, …`.
//!   3. Request the rule with `nodes_and_weights(m)` and integrate with
//!      [`QuadratureRule::integrate`](crate::quadrature::rule::QuadratureRule::integrate).

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{Degree, DiscreteMeasure, FamilyKind, FamilyTag, OrthonormalPolynomial, RecurrenceTable};
pub use self::errors::{ErrorKind, PolyError, PolyResult};
pub use self::models::{OrthogonalFamily, QuadratureCache};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_orthopoly::orthogonal::prelude::*;
//
// to import the polynomial surface in a single line.

pub mod prelude {
    pub use super::{
        Degree, DiscreteMeasure, ErrorKind, FamilyKind, FamilyTag, OrthogonalFamily,
        OrthonormalPolynomial, PolyError, PolyResult, QuadratureCache, RecurrenceTable,
    };
    pub use crate::quadrature::prelude::*;
}
