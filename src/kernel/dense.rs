//! Dense row-major kernel: elementwise ops, multiplication, Gauss-Jordan
//! inversion, and right-division.
//!
//! Every function here trusts the declared dimensions: buffers must hold
//! exactly `rows * cols` elements and shapes must be compatible for the
//! requested operation. Violations surface as index panics, never as wrong
//! results. Inputs are read-only; every call returns a freshly allocated
//! output buffer.

/// Absolute pivot cutoff below which a matrix is treated as singular.
///
/// Deliberately a fixed threshold, not scaled by the matrix norm.
pub const PIVOT_THRESHOLD: f64 = 1e-12;

/// Linear index of `(row, col)` in a row-major buffer with `cols` columns.
#[inline]
pub(crate) fn at(cols: usize, row: usize, col: usize) -> usize {
    row * cols + col
}

/// Elementwise sum of two `rows x cols` buffers.
#[must_use]
pub fn add(rows: usize, cols: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = rows * cols;
    (0..len).map(|i| a[i] + b[i]).collect()
}

/// Elementwise difference of two `rows x cols` buffers.
#[must_use]
pub fn sub(rows: usize, cols: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = rows * cols;
    (0..len).map(|i| a[i] - b[i]).collect()
}

/// Product of an `r_a x c_a` buffer with an `r_b x c_b` buffer.
///
/// Requires `c_a == r_b`; the result has shape `r_a x c_b`. Plain triple-loop
/// accumulation, deterministic for deterministic inputs.
#[must_use]
pub fn matmul(r_a: usize, c_a: usize, r_b: usize, c_b: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(c_a, r_b, "inner dimensions must agree");
    let mut out = vec![0.0; r_a * c_b];
    for i in 0..r_a {
        for j in 0..c_b {
            let mut sum = 0.0;
            for k in 0..c_a {
                sum += a[at(c_a, i, k)] * b[at(c_b, k, j)];
            }
            out[at(c_b, i, j)] = sum;
        }
    }
    out
}

/// Inverse of an `n x n` buffer by Gauss-Jordan elimination with partial
/// pivoting.
///
/// Returns the `n x n` inverse, or an empty `Vec` when no pivot of magnitude
/// at least [`PIVOT_THRESHOLD`] exists in some column (the matrix is
/// numerically singular). Never returns a partial result.
#[must_use]
pub fn invert(n: usize, m: &[f64]) -> Vec<f64> {
    let w = 2 * n;
    // Augmented [M | I].
    let mut aug = vec![0.0; n * w];
    for i in 0..n {
        for j in 0..n {
            aug[at(w, i, j)] = m[at(n, i, j)];
        }
        aug[at(w, i, n + i)] = 1.0;
    }

    for i in 0..n {
        // Largest-magnitude entry in column i among rows i..n; ties keep the
        // earliest row.
        let mut piv = aug[at(w, i, i)];
        let mut sel = i;
        for r in (i + 1)..n {
            let v = aug[at(w, r, i)];
            if v.abs() > piv.abs() {
                piv = v;
                sel = r;
            }
        }
        if piv.abs() < PIVOT_THRESHOLD {
            return Vec::new();
        }
        if sel != i {
            for c in 0..w {
                aug.swap(at(w, i, c), at(w, sel, c));
            }
        }
        for c in 0..w {
            aug[at(w, i, c)] /= piv;
        }
        for r in 0..n {
            if r == i {
                continue;
            }
            let f = aug[at(w, r, i)];
            for c in 0..w {
                aug[at(w, r, c)] -= f * aug[at(w, i, c)];
            }
        }
    }

    // Right half now holds the inverse.
    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            inv[at(n, i, j)] = aug[at(w, i, n + j)];
        }
    }
    inv
}

/// Right-division `A x B^-1` of an `r_a x c_a` buffer by a square
/// `r_b x c_b` buffer.
///
/// Requires `r_b == c_b == c_a`. Returns an empty `Vec` when B is singular,
/// without attempting the multiplication.
#[must_use]
pub fn div(r_a: usize, c_a: usize, r_b: usize, c_b: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(r_b, c_b, "divisor must be square");
    debug_assert_eq!(c_a, r_b, "inner dimensions must agree");
    let n = r_b;
    let inv_b = invert(n, b);
    if inv_b.is_empty() {
        return Vec::new();
    }
    matmul(r_a, c_a, n, n, a, &inv_b)
}

#[cfg(test)]
#[path = "dense_tests.rs"]
mod tests;
