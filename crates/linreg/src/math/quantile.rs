//! Order statistics for descriptive summaries.
//!
//! Quantiles use linear interpolation between the two nearest order
//! statistics at rank `(n - 1) * p`, the same rule most dataframe libraries
//! use when drawing box plots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Return an ascending copy of `vals`.
///
/// Callers are expected to have rejected NaN already; any that slip through
/// compare as equal and keep their relative position.
pub fn sorted_copy<T: Float>(vals: &[T]) -> Vec<T> {
    let mut sorted = vals.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    sorted
}

/// Quantile `p` in `[0, 1]` of an ascending slice.
///
/// Returns zero for an empty slice. `p` outside `[0, 1]` is clamped.
pub fn quantile_sorted<T: Float>(sorted: &[T], p: T) -> T {
    let n = sorted.len();
    if n == 0 {
        return T::zero();
    }
    if n == 1 {
        return sorted[0];
    }

    let p = p.max(T::zero()).min(T::one());
    let last = T::from(n - 1).unwrap_or(T::zero());
    let rank = p * last;

    let lo = rank.floor();
    let lo_idx = lo.to_usize().unwrap_or(0).min(n - 1);
    let hi_idx = (lo_idx + 1).min(n - 1);
    let frac = rank - lo;

    sorted[lo_idx] + (sorted[hi_idx] - sorted[lo_idx]) * frac
}

/// Median of an ascending slice.
#[inline]
pub fn median_sorted<T: Float>(sorted: &[T]) -> T {
    let half = T::from(0.5).unwrap_or(T::zero());
    quantile_sorted(sorted, half)
}
