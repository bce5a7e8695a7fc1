//! Output type for a regression run.
//!
//! ## Purpose
//!
//! This module defines [`RegressionResult`], which bundles the fitted line,
//! the fitted values and whatever optional outputs were requested
//! (residuals, diagnostics, standard errors, interval bands).
//!
//! ## Design notes
//!
//! * **Optional outputs**: Everything not always computed is an `Option`.
//! * **Input order**: Rows keep the order of the input data.
//! * **Ergonomics**: Implements `Display` for a human-readable report.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the input data.
//! * Lower bounds are less than or equal to upper bounds for all intervals.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond trivial accessors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LinearFit;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::intervals::CoefficientErrors;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of a least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult<T> {
    /// Input x-values.
    pub x: Vec<T>,

    /// Input y-values.
    pub y: Vec<T>,

    /// Fitted values `slope * x_i + intercept`.
    pub fitted: Vec<T>,

    /// The estimated line, including the means and centered sums.
    pub fit: LinearFit<T>,

    /// Residuals `y_i - fitted_i`.
    pub residuals: Option<Vec<T>>,

    /// Goodness-of-fit metrics.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Standard errors of slope and intercept.
    pub coefficient_errors: Option<CoefficientErrors<T>>,

    /// Standard error of the mean response at each point.
    pub standard_errors: Option<Vec<T>>,

    /// Lower bounds of the confidence intervals for the mean response.
    pub confidence_lower: Option<Vec<T>>,

    /// Upper bounds of the confidence intervals for the mean response.
    pub confidence_upper: Option<Vec<T>>,

    /// Lower bounds of the prediction intervals for new observations.
    pub prediction_lower: Option<Vec<T>>,

    /// Upper bounds of the prediction intervals for new observations.
    pub prediction_upper: Option<Vec<T>>,
}

impl<T: Float> RegressionResult<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Estimated slope.
    #[inline]
    pub fn slope(&self) -> T {
        self.fit.slope
    }

    /// Estimated intercept.
    #[inline]
    pub fn intercept(&self) -> T {
        self.fit.intercept
    }

    /// Mean of the x-values.
    #[inline]
    pub fn x_mean(&self) -> T {
        self.fit.x_mean
    }

    /// Mean of the y-values.
    #[inline]
    pub fn y_mean(&self) -> T {
        self.fit.y_mean
    }

    /// `Σ(x - x̄)(y - ȳ)`.
    #[inline]
    pub fn numerator(&self) -> T {
        self.fit.sxy
    }

    /// `Σ(x - x̄)²`.
    #[inline]
    pub fn denominator(&self) -> T {
        self.fit.sxx
    }

    /// Predict at a new x-value with the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.fit.predict(x)
    }

    /// Check if confidence intervals were computed.
    pub fn has_confidence_intervals(&self) -> bool {
        self.confidence_lower.is_some() && self.confidence_upper.is_some()
    }

    /// Check if prediction intervals were computed.
    pub fn has_prediction_intervals(&self) -> bool {
        self.prediction_lower.is_some() && self.prediction_upper.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Line:        {}", self.fit)?;
        writeln!(f, "  x̄ = {:.4}, ȳ = {:.4}", self.fit.x_mean, self.fit.y_mean)?;

        if let Some(ce) = &self.coefficient_errors {
            writeln!(
                f,
                "  SE(slope) = {:.6}, SE(intercept) = {:.6}",
                ce.slope, ce.intercept
            )?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Fitted Data:")?;

        let has_std_err = self.standard_errors.is_some();
        let has_conf = self.has_confidence_intervals();
        let has_pred = self.has_prediction_intervals();
        let has_resid = self.residuals.is_some();

        // Header
        write!(f, "{:>8} {:>12} {:>12}", "X", "Y", "Y_fit")?;
        if has_std_err {
            write!(f, " {:>12}", "Std_Err")?;
        }
        if has_conf {
            write!(f, " {:>12} {:>12}", "Conf_Lower", "Conf_Upper")?;
        }
        if has_pred {
            write!(f, " {:>12} {:>12}", "Pred_Lower", "Pred_Upper")?;
        }
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 34
            + if has_std_err { 13 } else { 0 }
            + if has_conf { 26 } else { 0 }
            + if has_pred { 26 } else { 0 }
            + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.x.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8.2} {:>12.4} {:>12.4}",
                self.x[idx], self.y[idx], self.fitted[idx]
            )?;

            if let Some(se) = &self.standard_errors {
                write!(f, " {:>12.6}", se[idx])?;
            }
            if let (Some(lo), Some(hi)) = (&self.confidence_lower, &self.confidence_upper) {
                write!(f, " {:>12.4} {:>12.4}", lo[idx], hi[idx])?;
            }
            if let (Some(lo), Some(hi)) = (&self.prediction_lower, &self.prediction_upper) {
                write!(f, " {:>12.4} {:>12.4}", lo[idx], hi[idx])?;
            }
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.4}", resid[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
