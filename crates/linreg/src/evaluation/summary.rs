//! Descriptive statistics and box-plot summaries.
//!
//! ## Purpose
//!
//! This module summarises a single sample (count, mean, spread, quartiles)
//! and partitions a sample by a group label, such as a 0/1 category column,
//! summarising each group.
//!
//! ## Design notes
//!
//! * **Population SD**: The standard deviation uses divisor `n`.
//! * **Box plot**: Whiskers reach the most extreme observations within
//!   `1.5 * IQR` of the quartiles (Tukey); anything beyond is an outlier.
//! * **Ordered groups**: Groups are stored in ascending label order.
//!
//! ## Invariants
//!
//! * `min <= q1 <= median <= q3 <= max`.
//! * Both whiskers are observations, so they lie within `[min, max]`.
//! * Every outlier lies strictly outside `[whisker_low, whisker_high]`.
//! * Group counts add up to the input length.
//!
//! ## Non-goals
//!
//! * This module does not render plots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::math::moments::{mean, population_variance};
use crate::math::quantile::{median_sorted, quantile_sorted, sorted_copy};
use crate::primitives::errors::RegressionError;

// ============================================================================
// Summary
// ============================================================================

/// Descriptive statistics of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Number of observations.
    pub n: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Population standard deviation.
    pub std_dev: T,

    /// Smallest observation.
    pub min: T,

    /// First quartile.
    pub q1: T,

    /// Median.
    pub median: T,

    /// Third quartile.
    pub q3: T,

    /// Largest observation.
    pub max: T,

    /// Lower box-plot whisker.
    pub whisker_low: T,

    /// Upper box-plot whisker.
    pub whisker_high: T,

    /// Observations beyond the whiskers, ascending.
    pub outliers: Vec<T>,
}

impl<T: Float> Summary<T> {
    /// Tukey fence multiplier.
    const WHISKER_IQR: f64 = 1.5;

    /// Summarise a sample. Values must be finite and the sample non-empty.
    pub fn compute(values: &[T]) -> core::result::Result<Self, RegressionError> {
        if values.is_empty() {
            return Err(RegressionError::EmptyInput);
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        let sorted = sorted_copy(values);
        let n = sorted.len();

        let mean = mean(&sorted);
        let std_dev = population_variance(&sorted, mean).sqrt();
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "overflow in {}",
                if mean.is_finite() { "std_dev" } else { "mean" }
            )));
        }

        let quarter = T::from(0.25).unwrap_or(T::zero());
        let three_quarters = T::from(0.75).unwrap_or(T::one());
        let q1 = quantile_sorted(&sorted, quarter);
        let median = median_sorted(&sorted);
        let q3 = quantile_sorted(&sorted, three_quarters);

        let reach = T::from(Self::WHISKER_IQR).unwrap_or(T::one()) * (q3 - q1);
        let low_fence = q1 - reach;
        let high_fence = q3 + reach;

        // Sorted, so the first/last in-fence values are the whisker ends.
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);

        let outliers: Vec<T> = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Ok(Self {
            n,
            mean,
            std_dev,
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[n - 1],
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Interquartile range `q3 - q1`.
    #[inline]
    pub fn iqr(&self) -> T {
        self.q3 - self.q1
    }
}

impl<T: Float + Display> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "n={}, mean={:.1}, std={:.1}",
            self.n, self.mean, self.std_dev
        )?;
        write!(
            f,
            ", box=[{:.1} | {:.1} {:.1} {:.1} | {:.1}]",
            self.whisker_low, self.q1, self.median, self.q3, self.whisker_high
        )?;
        if !self.outliers.is_empty() {
            write!(f, ", outliers={}", self.outliers.len())?;
        }
        Ok(())
    }
}

// ============================================================================
// Grouped Summary
// ============================================================================

/// Per-group summaries keyed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummary<T, L> {
    /// `(label, summary)` pairs in ascending label order.
    pub groups: Vec<(L, Summary<T>)>,
}

impl<T: Float, L: Ord + Copy> GroupedSummary<T, L> {
    /// Partition `values` by the parallel `labels` and summarise each group.
    pub fn by_label(values: &[T], labels: &[L]) -> core::result::Result<Self, RegressionError> {
        if values.is_empty() || labels.is_empty() {
            return Err(RegressionError::EmptyInput);
        }
        if values.len() != labels.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: labels.len(),
                y_len: values.len(),
            });
        }

        let mut buckets: BTreeMap<L, Vec<T>> = BTreeMap::new();
        for (&label, &v) in labels.iter().zip(values.iter()) {
            buckets.entry(label).or_default().push(v);
        }

        let groups = buckets
            .into_iter()
            .map(|(label, vals)| Summary::compute(&vals).map(|s| (label, s)))
            .collect::<core::result::Result<Vec<_>, _>>()?;

        debug!(
            points = values.len(),
            groups = groups.len(),
            "summarised sample by label"
        );

        Ok(Self { groups })
    }

    /// Summary for one label, if that label occurred.
    pub fn get(&self, label: &L) -> Option<&Summary<T>> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| s)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<T: Float + Display, L: Display> Display for GroupedSummary<T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (label, summary) in &self.groups {
            writeln!(f, "  {}: {}", label, summary)?;
        }
        Ok(())
    }
}
