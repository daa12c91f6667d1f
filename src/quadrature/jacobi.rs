//! Jacobi matrices assembled from three-term recurrence coefficients.
//!
//! Purpose
//! -------
//! Turn the monic recurrence pairs `(a_k, b_k)` of an orthogonal family into
//! the symmetric tridiagonal Jacobi matrix whose eigenvalues are the Gauss
//! nodes, and keep the measure mass `b_0` next to it for the weights.
//!
//! Conventions
//! -----------
//! - Diagonal: `a_0 .. a_{n-1}`; off-diagonal: `√b_1 .. √b_{n-1}`.
//! - `b_0` is the total mass and is never placed in the matrix.
//! - [`JacobiMatrix::to_dense`] copies into a `nalgebra::DMatrix` for callers
//!   who want dense linear algebra on the same matrix.
use crate::quadrature::{
    eigensolver::{ensure_strictly_increasing, tridiagonal_ql},
    errors::{QuadError, QuadResult},
    options::SolverOptions,
};
use nalgebra::DMatrix;
use ndarray::{Array1, ArrayView1};

/// Symmetric tridiagonal Jacobi matrix plus the mass of its measure.
#[derive(Debug, Clone, PartialEq)]
pub struct JacobiMatrix {
    diagonal: Array1<f64>,
    off_diagonal: Array1<f64>,
    mass: f64,
}

impl JacobiMatrix {
    /// Assemble the `n × n` Jacobi matrix from recurrence coefficients.
    ///
    /// Parameters
    /// ----------
    /// - `a`: centering terms; at least `n` entries are read.
    /// - `b`: scale terms with `b[0]` the mass; at least `max(n, 1)` entries
    ///   are read.
    /// - `n`: matrix size (number of quadrature nodes).
    ///
    /// Errors
    /// ------
    /// - `QuadError::TableTooShort` if `a` or `b` is shorter than required.
    /// - `QuadError::InvalidMass` if `b[0]` is not finite and positive.
    /// - `QuadError::NegativeScale` if some `b_k`, `1 ≤ k < n`, is negative or
    ///   non-finite.
    pub fn from_coefficients(
        a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>, n: usize,
    ) -> QuadResult<Self> {
        let required = n.max(1);
        if b.len() < required {
            return Err(QuadError::TableTooShort { required, actual: b.len() });
        }
        if a.len() < n {
            return Err(QuadError::TableTooShort { required: n, actual: a.len() });
        }
        let mass = b[0];
        if !mass.is_finite() || mass <= 0.0 {
            return Err(QuadError::InvalidMass { value: mass });
        }

        let mut off_diagonal = Array1::zeros(n.saturating_sub(1));
        for k in 1..n {
            let value = b[k];
            if !value.is_finite() || value < 0.0 {
                return Err(QuadError::NegativeScale { index: k, value });
            }
            off_diagonal[k - 1] = value.sqrt();
        }
        let diagonal = a.slice(ndarray::s![..n]).to_owned();

        Ok(Self { diagonal, off_diagonal, mass })
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }

    pub fn diagonal(&self) -> &Array1<f64> {
        &self.diagonal
    }

    pub fn off_diagonal(&self) -> &Array1<f64> {
        &self.off_diagonal
    }

    /// Total mass `b_0` of the underlying measure.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Dense symmetric copy of the matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.size();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                self.diagonal[i]
            } else if i + 1 == j {
                self.off_diagonal[i]
            } else if j + 1 == i {
                self.off_diagonal[j]
            } else {
                0.0
            }
        })
    }

    /// Eigenvalues only, ascending and strictly increasing.
    ///
    /// # Errors
    /// - `QuadError::NoConvergence` from the QL iteration.
    /// - `QuadError::CoincidentNodes` if two eigenvalues are not distinct.
    pub fn eigenvalues(&self, options: &SolverOptions) -> QuadResult<Array1<f64>> {
        let eig = tridiagonal_ql(self.diag_slice(), self.off_slice(), false, options)?;
        ensure_strictly_increasing(&eig.values)?;
        Ok(Array1::from(eig.values))
    }

    /// Eigenvalues with the first component of each unit eigenvector.
    ///
    /// # Errors
    /// Same as [`JacobiMatrix::eigenvalues`].
    pub fn eigen_first_row(
        &self, options: &SolverOptions,
    ) -> QuadResult<(Array1<f64>, Array1<f64>)> {
        let eig = tridiagonal_ql(self.diag_slice(), self.off_slice(), true, options)?;
        ensure_strictly_increasing(&eig.values)?;
        let first = eig.first_components.unwrap_or_default();
        Ok((Array1::from(eig.values), Array1::from(first)))
    }

    fn diag_slice(&self) -> &[f64] {
        self.diagonal.as_slice().unwrap_or(&[])
    }

    fn off_slice(&self) -> &[f64] {
        self.off_diagonal.as_slice().unwrap_or(&[])
    }
}
