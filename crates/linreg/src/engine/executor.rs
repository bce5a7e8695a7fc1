//! Execution engine for a regression run.
//!
//! ## Purpose
//!
//! This module drives one fit from raw slices to a [`RegressionResult`]:
//! validate, estimate the line, derive fitted values, then compute whatever
//! optional outputs the configuration asks for.
//!
//! ## Design notes
//!
//! * **Single pass pipeline**: validate → fit → fitted → residuals →
//!   diagnostics → coefficient errors → interval bands.
//! * **Lazy extras**: Residuals are only materialised when something needs them.
//! * **Two points**: With `n == 2` the line interpolates both points and the
//!   residual variance is undefined, so uncertainty outputs stay `None`.
//!
//! ## Non-goals
//!
//! * This module does not parse or load data.
//! * This module does not retry or recover from errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::LinearFit;
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::intervals::{CoefficientErrors, IntervalBands, IntervalMethod};
use crate::primitives::errors::RegressionError;

// ============================================================================
// Configuration
// ============================================================================

/// Which optional outputs a run should produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionConfig<T> {
    /// Return residuals `y - ŷ`.
    pub compute_residuals: bool,

    /// Return goodness-of-fit diagnostics.
    pub return_diagnostics: bool,

    /// Confidence/prediction band configuration.
    pub interval_type: Option<IntervalMethod<T>>,
}

impl<T> Default for RegressionConfig<T> {
    fn default() -> Self {
        Self {
            compute_residuals: false,
            return_diagnostics: false,
            interval_type: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the regression pipeline for a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct RegressionExecutor<T> {
    config: RegressionConfig<T>,
}

impl<T: Float> RegressionExecutor<T> {
    /// Create an executor for the given configuration.
    pub fn new(config: RegressionConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &RegressionConfig<T> {
        &self.config
    }

    /// Fit `y` against `x` and assemble the requested outputs.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<RegressionResult<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;

        let fit = LinearFit::fit_ols(x, y)?;
        let fitted = fit.predict_all(x);

        debug!(
            points = fit.n,
            slope = fit.slope.to_f64().unwrap_or(f64::NAN),
            intercept = fit.intercept.to_f64().unwrap_or(f64::NAN),
            "fitted least-squares line"
        );

        let cfg = &self.config;
        let needs_uncertainty = cfg.return_diagnostics || cfg.interval_type.is_some();

        let rss = Diagnostics::calculate_rss(y, &fitted);
        let residual_se = Diagnostics::calculate_residual_se(rss, fit.n);

        let diagnostics = if cfg.return_diagnostics {
            Some(Diagnostics::compute(y, &fitted, &fit))
        } else {
            None
        };

        let coefficient_errors = match residual_se {
            Some(s) if needs_uncertainty => Some(CoefficientErrors::compute(&fit, s)),
            _ => None,
        };

        let bands = match (cfg.interval_type, residual_se) {
            (Some(method), Some(s)) => Some(method.compute_intervals(&fit, x, &fitted, s)?),
            (Some(_), None) => {
                debug!(points = fit.n, "interval bands skipped: residual variance undefined");
                None
            }
            (None, _) => None,
        };

        let residuals: Option<Vec<T>> = if cfg.compute_residuals {
            Some(fit.residuals(x, y))
        } else {
            None
        };

        let IntervalBands {
            standard_errors,
            confidence_lower,
            confidence_upper,
            prediction_lower,
            prediction_upper,
        } = bands.unwrap_or_default();

        Ok(RegressionResult {
            x: x.to_vec(),
            y: y.to_vec(),
            fitted,
            fit,
            residuals,
            diagnostics,
            coefficient_errors,
            standard_errors: if cfg.interval_type.is_some() && !standard_errors.is_empty() {
                Some(standard_errors)
            } else {
                None
            },
            confidence_lower,
            confidence_upper,
            prediction_lower,
            prediction_upper,
        })
    }
}
