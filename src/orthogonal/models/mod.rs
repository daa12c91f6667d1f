//! models — user-facing polynomial families and rule caching.
//!
//! Purpose
//! -------
//! Collect the facade [`OrthogonalFamily`] and the optional
//! [`QuadratureCache`]. This layer sits on top of `orthogonal::core` and the
//! `quadrature` back end and is what front-ends (Python bindings, downstream
//! crates) depend on.
//!
//! Key behaviors
//! -------------
//! - [`OrthogonalFamily`] exposes `build`, `roots`, `nodes_and_weights`, and
//!   `recurrence`, all checked against the family's precision ceiling.
//! - [`QuadratureCache`] memoizes rules behind `Arc`s in a concurrent map.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`family`] cover orthonormality, exactness, and error
//!   paths; [`cache`] covers sharing and failure handling. Cross-thread use
//!   is exercised by the integration tests.

pub mod cache;
pub mod family;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cache::QuadratureCache;
pub use self::family::OrthogonalFamily;

pub mod prelude {
    pub use super::cache::QuadratureCache;
    pub use super::family::OrthogonalFamily;
}
