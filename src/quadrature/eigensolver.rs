//! Implicit QL iteration for real symmetric tridiagonal matrices.
//!
//! Purpose
//! -------
//! Compute all eigenvalues of a symmetric tridiagonal matrix and, on
//! request, the first component of every normalized eigenvector. The
//! rotations for that first row are accumulated into a single length-`n`
//! vector instead of a dense `n × n` matrix.
//!
//! Key behaviors
//! -------------
//! - Implicit QL with a Wilkinson-type shift, deflating from the top-left
//!   corner one eigenvalue at a time.
//! - Each eigenvalue gets at most
//!   `SolverOptions::max_iterations_per_eigenvalue()` sweeps; exceeding the
//!   cap returns [`QuadError::NoConvergence`].
//! - Eigenvalues are returned in ascending order with the tracked first
//!   components permuted alongside them.
//!
//! Invariants & assumptions
//! ------------------------
//! - `off_diagonal.len() == diagonal.len() - 1` for non-empty input.
//! - Inputs are finite; non-finite entries never satisfy the deflation test
//!   and therefore surface as `NoConvergence` rather than garbage output.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against closed-form 2 × 2 spectra and against
//!   `nalgebra::SymmetricEigen` on a dense copy of the matrix.
use crate::quadrature::{
    errors::{QuadError, QuadResult},
    options::SolverOptions,
};
use tracing::warn;

/// Spectrum of a symmetric tridiagonal matrix.
///
/// - `values`: eigenvalues in ascending order.
/// - `first_components`: `v_i[0]` for each unit eigenvector `v_i`, aligned
///   with `values`; `None` when tracking was not requested.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalEigen {
    pub values: Vec<f64>,
    pub first_components: Option<Vec<f64>>,
}

/// Run the implicit QL iteration on the matrix with the given diagonal and
/// off-diagonal.
///
/// Parameters
/// ----------
/// - `diagonal`: `&[f64]`
///   Diagonal entries `d_0 .. d_{n-1}`.
/// - `off_diagonal`: `&[f64]`
///   Off-diagonal entries `e_0 .. e_{n-2}`, where `e_i` couples rows `i` and
///   `i + 1`.
/// - `track_first_row`: `bool`
///   When `true`, accumulate the first row of the eigenvector matrix.
/// - `options`: `&SolverOptions`
///   Iteration cap and deflation tolerance.
///
/// Returns
/// -------
/// `QuadResult<TridiagonalEigen>` with ascending eigenvalues.
///
/// Errors
/// ------
/// - `QuadError::TableTooShort` if the off-diagonal has the wrong length.
/// - `QuadError::NoConvergence` if some eigenvalue exhausts its iteration cap.
pub fn tridiagonal_ql(
    diagonal: &[f64], off_diagonal: &[f64], track_first_row: bool, options: &SolverOptions,
) -> QuadResult<TridiagonalEigen> {
    let n = diagonal.len();
    if n == 0 {
        return Ok(TridiagonalEigen {
            values: Vec::new(),
            first_components: track_first_row.then(Vec::new),
        });
    }
    if off_diagonal.len() + 1 != n {
        return Err(QuadError::TableTooShort { required: n - 1, actual: off_diagonal.len() });
    }

    let mut d = diagonal.to_vec();
    // e[n-1] stays zero and terminates the deflation scan.
    let mut e = vec![0.0; n];
    e[..n - 1].copy_from_slice(off_diagonal);
    let mut z = track_first_row.then(|| {
        let mut row = vec![0.0; n];
        row[0] = 1.0;
        row
    });

    let cap = options.max_iterations_per_eigenvalue();
    let tolerance = options.tolerance();
    for l in 0..n {
        let mut iterations = 0usize;
        loop {
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= tolerance * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }
            if iterations == cap {
                warn!(index = l, iterations, size = n, "tridiagonal QL iteration did not converge");
                return Err(QuadError::NoConvergence { index: l, iterations });
            }
            iterations += 1;

            // Wilkinson-type shift from the leading 2 × 2 block.
            let mut g = (d[l + 1] - d[l]) / (2.0 * e[l]);
            let mut r = g.hypot(1.0);
            g = d[m] - d[l] + e[l] / (g + r.copysign(g));

            let (mut s, mut c, mut p) = (1.0_f64, 1.0_f64, 0.0_f64);
            let mut underflow = false;
            for i in (l..m).rev() {
                let f = s * e[i];
                let b = c * e[i];
                r = f.hypot(g);
                e[i + 1] = r;
                if r == 0.0 {
                    d[i + 1] -= p;
                    e[m] = 0.0;
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + 2.0 * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                if let Some(row) = z.as_mut() {
                    let f = row[i + 1];
                    row[i + 1] = s * row[i] + c * f;
                    row[i] = c * row[i] - s * f;
                }
            }
            if underflow {
                continue;
            }
            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| d[i].total_cmp(&d[j]));
    let values = order.iter().map(|&i| d[i]).collect();
    let first_components = z.map(|row| order.iter().map(|&i| row[i]).collect());

    Ok(TridiagonalEigen { values, first_components })
}

/// Check that sorted eigenvalues are pairwise distinct.
///
/// # Errors
/// - [`QuadError::CoincidentNodes`] at the first non-increasing neighbour.
pub fn ensure_strictly_increasing(values: &[f64]) -> QuadResult<()> {
    for (index, pair) in values.windows(2).enumerate() {
        if !(pair[1] > pair[0]) {
            return Err(QuadError::CoincidentNodes { index, value: pair[0] });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, SymmetricEigen};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form spectra of small matrices.
    // - Agreement with nalgebra's dense symmetric eigensolver.
    // - Unit norm of the tracked first eigenvector row.
    // - The iteration cap surfacing as `NoConvergence`.
    //
    // They intentionally DO NOT cover:
    // - Quadrature weights; those live in `quadrature::rule`.
    // -------------------------------------------------------------------------

    fn dense(diagonal: &[f64], off: &[f64]) -> DMatrix<f64> {
        let n = diagonal.len();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                diagonal[i]
            } else if i + 1 == j {
                off[i]
            } else if j + 1 == i {
                off[j]
            } else {
                0.0
            }
        })
    }

    #[test]
    // Purpose
    // -------
    // Verify the 2 × 2 case against its closed-form eigenvalues.
    //
    // Given
    // -----
    // - Diagonal (2, 3), off-diagonal 1.
    //
    // Expect
    // ------
    // - Eigenvalues (5 ∓ √5)/2 in ascending order.
    fn two_by_two_matches_closed_form() {
        // Arrange
        let opts = SolverOptions::default();

        // Act
        let eig = tridiagonal_ql(&[2.0, 3.0], &[1.0], false, &opts).unwrap();

        // Assert
        let root5 = 5.0_f64.sqrt();
        assert_relative_eq!(eig.values[0], (5.0 - root5) / 2.0, epsilon = 1e-14);
        assert_relative_eq!(eig.values[1], (5.0 + root5) / 2.0, epsilon = 1e-14);
        assert!(eig.first_components.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Cross-check a non-trivial spectrum against nalgebra.
    //
    // Given
    // -----
    // - A 7 × 7 tridiagonal matrix with mixed-sign diagonal and positive
    //   couplings.
    //
    // Expect
    // ------
    // - Sorted eigenvalues agree to 1e-12.
    fn agrees_with_nalgebra_symmetric_eigen() {
        // Arrange
        let diagonal = [1.5, -0.3, 2.2, 0.0, -1.1, 0.7, 3.0];
        let off = [0.9, 0.4, 1.3, 0.2, 0.8, 0.5];
        let opts = SolverOptions::default();

        // Act
        let eig = tridiagonal_ql(&diagonal, &off, true, &opts).unwrap();
        let mut reference: Vec<f64> =
            SymmetricEigen::new(dense(&diagonal, &off)).eigenvalues.iter().copied().collect();
        reference.sort_by(f64::total_cmp);

        // Assert
        for (ours, theirs) in eig.values.iter().zip(&reference) {
            assert_relative_eq!(*ours, *theirs, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // The tracked first row must be a row of an orthogonal matrix.
    //
    // Given
    // -----
    // - The Hermite Jacobi matrix of size 9 (zero diagonal, √k couplings).
    //
    // Expect
    // ------
    // - Σ v_i[0]² = 1 to rounding.
    fn first_row_has_unit_norm() {
        // Arrange
        let n = 9;
        let diagonal = vec![0.0; n];
        let off: Vec<f64> = (1..n).map(|k| (k as f64).sqrt()).collect();

        // Act
        let eig = tridiagonal_ql(&diagonal, &off, true, &SolverOptions::default()).unwrap();
        let row = eig.first_components.unwrap();

        // Assert
        let norm: f64 = row.iter().map(|v| v * v).sum();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-13);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the iteration cap is enforced rather than looping on.
    //
    // Given
    // -----
    // - A 10 × 10 Hermite Jacobi matrix and a cap of one sweep per eigenvalue.
    //
    // Expect
    // ------
    // - `QuadError::NoConvergence` with `iterations == 1`.
    fn iteration_cap_reports_no_convergence() {
        // Arrange
        let n = 10;
        let diagonal = vec![0.0; n];
        let off: Vec<f64> = (1..n).map(|k| (k as f64).sqrt()).collect();
        let opts = SolverOptions::new(Some(1), None).unwrap();

        // Act
        let err = tridiagonal_ql(&diagonal, &off, true, &opts).unwrap_err();

        // Assert
        match err {
            QuadError::NoConvergence { iterations, .. } => assert_eq!(iterations, 1),
            other => panic!("expected NoConvergence, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // A mismatched off-diagonal length is rejected up front.
    //
    // Given
    // -----
    // - Three diagonal entries and one off-diagonal entry.
    //
    // Expect
    // ------
    // - `QuadError::TableTooShort { required: 2, actual: 1 }`.
    fn rejects_mismatched_off_diagonal() {
        let err = tridiagonal_ql(&[1.0, 2.0, 3.0], &[0.5], false, &SolverOptions::default())
            .unwrap_err();
        assert_eq!(err, QuadError::TableTooShort { required: 2, actual: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Ties in a sorted spectrum are reported.
    //
    // Given
    // -----
    // - Values [0.0, 1.0, 1.0].
    //
    // Expect
    // ------
    // - `CoincidentNodes` at index 1.
    fn ensure_strictly_increasing_flags_ties() {
        let err = ensure_strictly_increasing(&[0.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, QuadError::CoincidentNodes { index: 1, value: 1.0 });
        assert!(ensure_strictly_increasing(&[-1.0, 0.0, 2.0]).is_ok());
    }
}
