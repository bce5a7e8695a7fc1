//! Sample moments: sums, means, and centered second moments.
//!
//! All reductions are plain sequential folds so that identical inputs always
//! produce bit-identical outputs.

// External dependencies
use num_traits::Float;

/// Sum of all values.
#[inline]
pub fn sum<T: Float>(vals: &[T]) -> T {
    vals.iter().copied().fold(T::zero(), |acc, v| acc + v)
}

/// Arithmetic mean. Returns zero for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n_t = T::from(vals.len()).unwrap_or(T::one());
    sum(vals) / n_t
}

/// Largest absolute value. Returns zero for an empty slice.
#[inline]
pub fn max_abs<T: Float>(vals: &[T]) -> T {
    vals.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()))
}

/// Centered second moments of paired samples in one pass.
///
/// Returns `(sxx, sxy, syy)` where
/// `sxx = Σ(x - x̄)²`, `sxy = Σ(x - x̄)(y - ȳ)` and `syy = Σ(y - ȳ)²`.
/// Pairs beyond the shorter slice are ignored.
pub fn centered_sums<T: Float>(x: &[T], y: &[T], x_mean: T, y_mean: T) -> (T, T, T) {
    let mut sxx = T::zero();
    let mut sxy = T::zero();
    let mut syy = T::zero();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx = sxx + dx * dx;
        sxy = sxy + dx * dy;
        syy = syy + dy * dy;
    }

    (sxx, sxy, syy)
}

/// Population variance `Σ(v - mean)² / n`. Returns zero for an empty slice.
pub fn population_variance<T: Float>(vals: &[T], mean: T) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n_t = T::from(vals.len()).unwrap_or(T::one());
    let ss = vals.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    });
    ss / n_t
}
