//! Householder QR least squares on small dense systems.

use ndarray::{Array1, Array2, Axis, s};

use crate::error::CalibrationError;

/// Diagonal entries of `R` below this (relative to unit-norm columns) mark
/// the design as rank-deficient.
const RANK_TOL: f64 = 1e-10;

/// Builds the Vandermonde matrix with columns `x^degree, ..., x^1, x^0`.
pub(crate) fn vandermonde(x: &[f64], degree: usize) -> Array2<f64> {
    Array2::from_shape_fn((x.len(), degree + 1), |(i, j)| {
        x[i].powi((degree - j) as i32)
    })
}

/// Solves `min ||A c - b||` for `c`.
///
/// Columns are scaled to unit norm before factorisation and the solution is
/// rescaled afterwards. Requires `A.nrows() >= A.ncols()`.
pub(crate) fn least_squares(
    mut a: Array2<f64>,
    mut b: Array1<f64>,
) -> Result<Array1<f64>, CalibrationError> {
    let (m, n) = a.dim();
    debug_assert!(m >= n);
    debug_assert_eq!(b.len(), m);

    let scale: Vec<f64> = a
        .axis_iter(Axis(1))
        .map(|col| col.dot(&col).sqrt())
        .collect();
    for (j, &norm) in scale.iter().enumerate() {
        if norm == 0.0 {
            return Err(CalibrationError::SingularDesign { column: j });
        }
        a.column_mut(j).mapv_inplace(|v| v / norm);
    }

    for k in 0..n {
        let head = a.slice(s![k.., k]);
        let norm = head.dot(&head).sqrt();
        if norm <= RANK_TOL {
            return Err(CalibrationError::SingularDesign { column: k });
        }
        let alpha = if head[0] > 0.0 { -norm } else { norm };
        let mut v = head.to_owned();
        v[0] -= alpha;
        let v_norm2 = v.dot(&v);
        if v_norm2 == 0.0 {
            continue;
        }

        for j in k..n {
            let mut col = a.slice_mut(s![k.., j]);
            let proj = v.dot(&col);
            col.scaled_add(-2.0 * proj / v_norm2, &v);
        }
        let mut tail = b.slice_mut(s![k..]);
        let proj = v.dot(&tail);
        tail.scaled_add(-2.0 * proj / v_norm2, &v);
    }

    let mut c = Array1::zeros(n);
    for k in (0..n).rev() {
        let mut acc = b[k];
        for j in k + 1..n {
            acc -= a[[k, j]] * c[j];
        }
        c[k] = acc / a[[k, k]];
    }
    for (cj, norm) in c.iter_mut().zip(&scale) {
        *cj /= norm;
    }
    Ok(c)
}
