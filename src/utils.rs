#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::orthogonal::models::family::OrthogonalFamily;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy an optional array-like of shape parameters into a `Vec<f64>`.
///
/// `None` means "no parameters" (Legendre, Hermite, Chebyshev).
#[cfg(feature = "python-bindings")]
pub fn extract_params<'py>(
    py: Python<'py>, params: Option<&Bound<'py, PyAny>>,
) -> PyResult<Vec<f64>> {
    let Some(raw) = params else {
        return Ok(Vec::new());
    };
    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyTypeError::new_err("params must be a 1-D contiguous float64 array or sequence")
    })?;
    Ok(slice.to_vec())
}

/// Resolve a family name and parameter list into an [`OrthogonalFamily`].
///
/// Unknown names, wrong parameter counts, and out-of-domain parameters all
/// surface as `ValueError` through `From<PolyError> for PyErr`.
#[cfg(feature = "python-bindings")]
pub fn build_family<'py>(
    py: Python<'py>, tag: &str, params: Option<&Bound<'py, PyAny>>,
) -> PyResult<OrthogonalFamily> {
    let params = extract_params(py, params)?;
    Ok(OrthogonalFamily::from_name(tag, &params)?)
}
