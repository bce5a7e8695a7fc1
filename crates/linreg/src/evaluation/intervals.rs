//! Standard errors, confidence intervals and prediction intervals.
//!
//! ## Purpose
//!
//! This module quantifies the uncertainty of a least-squares line: the
//! standard errors of its coefficients, the confidence band of the mean
//! response and the (wider) prediction band for new observations.
//!
//! ## Design notes
//!
//! * **Classical OLS formulas**: With residual standard error `s`,
//!   `SE(mean at x0) = s * sqrt(1/n + (x0 - x̄)² / sxx)` and
//!   `SE(new obs at x0) = s * sqrt(1 + 1/n + (x0 - x̄)² / sxx)`.
//! * **Critical value**: Normal quantile via Acklam's rational approximation,
//!   with exact table values for 90/95/99 % coverage.
//!
//! ## Invariants
//!
//! * Coverage levels satisfy 0 < level < 1.
//! * Prediction intervals contain the confidence intervals at every point.
//! * Standard errors are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not use Student-t quantiles; for very small samples
//!   the bands are optimistic.
//! * This module does not compute simultaneous (Working-Hotelling) bands.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LinearFit;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Interval Configuration
// ============================================================================

/// Which uncertainty bands to compute, and at what coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalMethod<T> {
    /// Desired probability coverage (e.g., 0.95 for 95% intervals).
    pub level: T,

    /// Whether to compute confidence intervals for the mean response.
    pub confidence: bool,

    /// Whether to compute prediction intervals for new observations.
    pub prediction: bool,
}

impl<T: Float> IntervalMethod<T> {
    /// Confidence intervals only at the specified level.
    pub fn confidence(level: T) -> Self {
        Self {
            level,
            confidence: true,
            prediction: false,
        }
    }

    /// Prediction intervals only at the specified level.
    pub fn prediction(level: T) -> Self {
        Self {
            level,
            confidence: false,
            prediction: true,
        }
    }

    /// Both bands at the specified level.
    pub fn both(level: T) -> Self {
        Self {
            level,
            confidence: true,
            prediction: true,
        }
    }
}

// ============================================================================
// Coefficient Standard Errors
// ============================================================================

/// Standard errors of the fitted coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientErrors<T> {
    /// SE(slope) = s / sqrt(sxx).
    pub slope: T,

    /// SE(intercept) = s * sqrt(1/n + x̄² / sxx).
    pub intercept: T,
}

impl<T: Float> CoefficientErrors<T> {
    /// Compute coefficient standard errors for a fit with residual SE `s`.
    pub fn compute(fit: &LinearFit<T>, residual_se: T) -> Self {
        let n_t = T::from(fit.n).unwrap_or(T::one());
        let slope = residual_se / fit.sxx.sqrt();
        let intercept =
            residual_se * (T::one() / n_t + fit.x_mean * fit.x_mean / fit.sxx).sqrt();
        Self { slope, intercept }
    }
}

// ============================================================================
// Interval Bands
// ============================================================================

/// Bounds of the requested bands, one entry per input point.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBands<T> {
    /// Standard error of the mean response at each point.
    pub standard_errors: Vec<T>,

    /// Lower confidence bounds.
    pub confidence_lower: Option<Vec<T>>,

    /// Upper confidence bounds.
    pub confidence_upper: Option<Vec<T>>,

    /// Lower prediction bounds.
    pub prediction_lower: Option<Vec<T>>,

    /// Upper prediction bounds.
    pub prediction_upper: Option<Vec<T>>,
}

impl<T> Default for IntervalBands<T> {
    fn default() -> Self {
        Self {
            standard_errors: Vec::new(),
            confidence_lower: None,
            confidence_upper: None,
            prediction_lower: None,
            prediction_upper: None,
        }
    }
}

impl<T: Float> IntervalMethod<T> {
    // ========================================================================
    // Standard Error Computation
    // ========================================================================

    /// Standard error of the mean response at `x0`.
    pub fn mean_response_se(fit: &LinearFit<T>, residual_se: T, x0: T) -> T {
        let n_t = T::from(fit.n).unwrap_or(T::one());
        let d = x0 - fit.x_mean;
        residual_se * (T::one() / n_t + d * d / fit.sxx).sqrt()
    }

    /// Standard error for a new observation at `x0`.
    pub fn prediction_se(fit: &LinearFit<T>, residual_se: T, x0: T) -> T {
        let se_mean = Self::mean_response_se(fit, residual_se, x0);
        (residual_se * residual_se + se_mean * se_mean).sqrt()
    }

    // ========================================================================
    // Interval Computation
    // ========================================================================

    /// Compute the requested bands around `fitted` at the points `x`.
    pub fn compute_intervals(
        &self,
        fit: &LinearFit<T>,
        x: &[T],
        fitted: &[T],
        residual_se: T,
    ) -> Result<IntervalBands<T>, RegressionError> {
        let z = Self::approximate_z_score(self.level)
            .ok_or_else(|| RegressionError::InvalidIntervals(self.level.to_f64().unwrap_or(0.0)))?;

        let standard_errors: Vec<T> = x
            .iter()
            .map(|&xi| Self::mean_response_se(fit, residual_se, xi))
            .collect();

        let (confidence_lower, confidence_upper) = if self.confidence {
            let (lo, hi) = band(fitted, &standard_errors, z);
            (Some(lo), Some(hi))
        } else {
            (None, None)
        };

        let (prediction_lower, prediction_upper) = if self.prediction {
            let pred_se: Vec<T> = standard_errors
                .iter()
                .map(|&se| (se * se + residual_se * residual_se).sqrt())
                .collect();
            let (lo, hi) = band(fitted, &pred_se, z);
            (Some(lo), Some(hi))
        } else {
            (None, None)
        };

        Ok(IntervalBands {
            standard_errors,
            confidence_lower,
            confidence_upper,
            prediction_lower,
            prediction_upper,
        })
    }

    // ========================================================================
    // Z-Score Approximation
    // ========================================================================

    /// Two-sided normal critical value `Phi^-1((1 + level) / 2)`.
    ///
    /// Returns `None` when `level` is not strictly inside (0, 1).
    pub fn approximate_z_score(level: T) -> Option<T> {
        let cl = level.to_f64()?;
        if !(cl > 0.0 && cl < 1.0) {
            return None;
        }

        let z = if (cl - 0.99).abs() < 1e-6 {
            2.576
        } else if (cl - 0.95).abs() < 1e-6 {
            1.960
        } else if (cl - 0.90).abs() < 1e-6 {
            1.645
        } else {
            inverse_normal_cdf((1.0 + cl) / 2.0)
        };

        T::from(z)
    }
}

fn band<T: Float>(center: &[T], se: &[T], z: T) -> (Vec<T>, Vec<T>) {
    center
        .iter()
        .zip(se.iter())
        .map(|(&c, &s)| (c - z * s, c + z * s))
        .unzip()
}

fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * t + c)
}

/// Acklam's rational approximation of the standard normal quantile.
fn inverse_normal_cdf(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 6] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
        1.0,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 5] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
        1.0,
    ];
    const P_LOW: f64 = 0.02425;

    let tail = |q: f64| horner(&C, q) / horner(&D, q);

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > 1.0 - P_LOW {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        horner(&A, r) * q / horner(&B, r)
    }
}
