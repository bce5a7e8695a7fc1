//! Goodness-of-fit metrics for a least-squares line.
//!
//! ## Purpose
//!
//! This module evaluates how well a fitted line explains the observations:
//! residual error metrics, the coefficient of determination, the residual
//! standard error and the Pearson correlation of the inputs.
//!
//! ## Design notes
//!
//! * **Residual-based**: Error metrics are computed from `y - ŷ`.
//! * **Reuses the fit**: Correlation is taken from the centered sums already
//!   stored in [`LinearFit`], so no extra pass over `x` is needed.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RSS, RMSE and MAE are non-negative.
//! * R^2 <= 1; for simple OLS it equals the squared correlation.
//! * The residual standard error is only defined when `n > 2`.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit.
//! * This module does not provide p-values or hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LinearFit;
use crate::math::moments::mean;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Residual sum of squares.
    pub rss: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Residual standard error `sqrt(RSS / (n - 2))`; `None` for two points.
    pub residual_se: Option<T>,

    /// Pearson correlation of `x` and `y`; `None` when `y` is constant.
    pub correlation: Option<T>,
}

impl<T: Float> Diagnostics<T> {
    /// Number of estimated parameters (intercept + slope).
    const LINEAR_PARAMS: usize = 2;

    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostics from observations, fitted values and the fit.
    pub fn compute(y: &[T], fitted: &[T], fit: &LinearFit<T>) -> Self {
        let rss = Self::calculate_rss(y, fitted);
        let rmse = Self::calculate_rmse(y, fitted);
        let mae = Self::calculate_mae(y, fitted);
        let r_squared = Self::calculate_r_squared(y, fitted);
        let residual_se = Self::calculate_residual_se(rss, y.len());
        let correlation = Self::calculate_correlation(fit);

        Self {
            rss,
            rmse,
            mae,
            r_squared,
            residual_se,
            correlation,
        }
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// RSS = sum (y_i - y_hat_i)^2.
    pub fn calculate_rss(y: &[T], fitted: &[T]) -> T {
        y.iter()
            .zip(fitted.iter())
            .fold(T::zero(), |acc, (&yi, &fi)| {
                let r = yi - fi;
                acc + r * r
            })
    }

    /// RMSE = sqrt(RSS / n).
    pub fn calculate_rmse(y: &[T], fitted: &[T]) -> T {
        if y.is_empty() {
            return T::zero();
        }
        let n_t = T::from(y.len()).unwrap_or(T::one());
        (Self::calculate_rss(y, fitted) / n_t).sqrt()
    }

    /// MAE = (1/n) * sum |y_i - y_hat_i|.
    pub fn calculate_mae(y: &[T], fitted: &[T]) -> T {
        if y.is_empty() {
            return T::zero();
        }
        let n_t = T::from(y.len()).unwrap_or(T::one());
        let sum = y
            .iter()
            .zip(fitted.iter())
            .fold(T::zero(), |acc, (&yi, &fi)| acc + (yi - fi).abs());
        sum / n_t
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// R^2 = 1 - SS_res / SS_tot.
    pub fn calculate_r_squared(y: &[T], fitted: &[T]) -> T {
        let y_mean = mean(y);

        let (ss_tot, ss_res) =
            y.iter()
                .zip(fitted.iter())
                .fold((T::zero(), T::zero()), |(tot, res), (&yi, &fi)| {
                    let deviation = yi - y_mean;
                    let residual = yi - fi;
                    (tot + deviation * deviation, res + residual * residual)
                });

        if ss_tot == T::zero() {
            // Constant y: a perfect fit explains everything there is to explain.
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }

    /// s = sqrt(RSS / (n - 2)).
    pub fn calculate_residual_se(rss: T, n: usize) -> Option<T> {
        if n <= Self::LINEAR_PARAMS {
            return None;
        }
        let df = T::from(n - Self::LINEAR_PARAMS)?;
        Some((rss.max(T::zero()) / df).sqrt())
    }

    /// r = sxy / sqrt(sxx * syy).
    pub fn calculate_correlation(fit: &LinearFit<T>) -> Option<T> {
        let denom = (fit.sxx * fit.syy).sqrt();
        if denom <= T::zero() || !denom.is_finite() {
            return None;
        }
        Some((fit.sxy / denom).max(-T::one()).min(T::one()))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Regression Diagnostics:")?;
        writeln!(f, "  RSS:          {:.6}", self.rss)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;

        if let Some(se) = self.residual_se {
            writeln!(f, "  Residual SE:  {:.6}", se)?;
        }
        if let Some(r) = self.correlation {
            writeln!(f, "  Correlation:  {:.6}", r)?;
        }

        Ok(())
    }
}
