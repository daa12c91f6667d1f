//! rust_orthopoly — orthonormal polynomial families and Gauss quadrature with
//! optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the polynomial-family facade to Python via the `_rust_orthopoly`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and the `polynomials` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`orthogonal` and `quadrature`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_orthopoly` Python extension.
//! - Register the `polynomials` submodule in `sys.modules` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts
//!   ([`OrthogonalFamily`](crate::orthogonal::OrthogonalFamily),
//!   [`OrthonormalPolynomial`](crate::orthogonal::OrthonormalPolynomial)).
//!
//! Conventions
//! -----------
//! - Degrees coming from Python are signed so that negative requests reach
//!   the Rust validation and raise `ValueError` instead of `OverflowError`.
//! - Errors from core Rust code are converted to `PyErr` at the boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`orthogonal`] and
//!   [`quadrature`] and can ignore the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration tests under `tests/`.

pub mod orthogonal;
pub mod quadrature;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    orthogonal::{core::polynomial::OrthonormalPolynomial, models::family::OrthogonalFamily},
    utils::{build_family, extract_f64_array},
};

/// PolynomialFamily — Python-facing wrapper for [`OrthogonalFamily`].
///
/// Parameters
/// ----------
/// Constructed from Python via `PolynomialFamily(tag, params=None)`:
/// - `tag`: `str`
///   Family name (`"legendre"`, `"hermite"`, `"chebyshev"`, `"jacobi"`,
///   `"laguerre"`, `"charlier"`/`"poisson"`, `"krawtchouk"`/`"binomial"`,
///   `"meixner"`/`"negative_binomial"`, `"discrete"`).
/// - `params`: array-like of `float`, optional
///   Shape parameters in the order documented on `FamilyKind::from_tag`.
///
/// Notes
/// -----
/// - Rust callers should use [`OrthogonalFamily`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_orthopoly.polynomials", name = "PolynomialFamily")]
pub struct PyPolynomialFamily {
    inner: OrthogonalFamily,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyPolynomialFamily {
    #[new]
    #[pyo3(text_signature = "(tag, /, params=None)", signature = (tag, params = None))]
    pub fn new<'py>(
        py: Python<'py>, tag: &str, params: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Self> {
        Ok(Self { inner: build_family(py, tag, params)? })
    }

    /// Orthonormal polynomial of the given degree.
    pub fn build(&self, degree: i64) -> PyResult<PyOrthonormalPolynomial> {
        Ok(PyOrthonormalPolynomial { inner: self.inner.build(degree)? })
    }

    /// Roots of the degree-`degree` polynomial, ascending.
    pub fn get_roots<'py>(&self, py: Python<'py>, degree: i64) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let roots = self.inner.roots(degree)?;
        Ok(roots.into_pyarray(py))
    }

    /// `(nodes, weights)` of the `degree`-point Gauss rule.
    pub fn get_nodes_and_weights<'py>(
        &self, py: Python<'py>, degree: i64,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
        let (nodes, weights) = self.inner.nodes_and_weights(degree)?.into_parts();
        Ok((nodes.into_pyarray(py), weights.into_pyarray(py)))
    }

    /// `(a, b)` recurrence coefficients for indices `0..=degree`.
    pub fn recurrence<'py>(
        &self, py: Python<'py>, degree: i64,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
        let (a, b) = self.inner.recurrence(degree)?.into_parts();
        Ok((a.into_pyarray(py), b.into_pyarray(py)))
    }

    /// Exact raw moment `E[X^order]` of the measure.
    pub fn moment(&self, order: usize) -> f64 {
        self.inner.moment(order)
    }

    #[getter]
    pub fn tag(&self) -> String {
        self.inner.tag().to_string()
    }

    #[getter]
    pub fn params(&self) -> Vec<f64> {
        self.inner.kind().parameters()
    }

    #[getter]
    pub fn max_degree(&self) -> usize {
        self.inner.max_degree()
    }

    #[getter]
    pub fn support(&self) -> (f64, f64) {
        self.inner.support()
    }
}

/// OrthonormalPolynomial — Python-facing wrapper for a built polynomial.
///
/// Instances are returned by `PolynomialFamily.build` and are not created
/// directly by user code.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_orthopoly.polynomials", name = "OrthonormalPolynomial")]
pub struct PyOrthonormalPolynomial {
    inner: OrthonormalPolynomial,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyOrthonormalPolynomial {
    #[getter]
    pub fn degree(&self) -> usize {
        self.inner.degree()
    }

    /// Ascending monomial coefficients.
    #[getter]
    pub fn coefficients<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.coefficients().to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn leading_coefficient(&self) -> f64 {
        self.inner.leading_coefficient()
    }

    pub fn __call__(&self, x: f64) -> f64 {
        self.inner.evaluate(x)
    }

    /// Vectorized evaluation over an array-like of points.
    pub fn evaluate<'py>(
        &self, py: Python<'py>, xs: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let arr: PyReadonlyArray1<f64> = extract_f64_array(py, xs)?;
        let values = self.inner.evaluate_many(arr.as_array());
        Ok(values.into_pyarray(py))
    }
}

/// _rust_orthopoly — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `polynomials` submodule and attach it to `_rust_orthopoly`.
/// - Register it in `sys.modules` under `rust_orthopoly.polynomials`.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_orthopoly<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let polynomials_mod = PyModule::new(_py, "polynomials")?;
    polynomials(_py, m, &polynomials_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_orthopoly.polynomials", polynomials_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn polynomials<'py>(
    _py: Python, rust_orthopoly: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyPolynomialFamily>()?;
    m.add_class::<PyOrthonormalPolynomial>()?;
    rust_orthopoly.add_submodule(m)?;
    Ok(())
}
