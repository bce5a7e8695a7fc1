//! High-level API for least-squares regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the bare [`fit`] and
//! [`predict`] functions, and a fluent builder for runs that also want
//! residuals, diagnostics or interval bands.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; every option defaults to off.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinearRegressionBuilder`] via `LinearRegression::new()`.
//! 2. Chain configuration methods (`.return_residuals()`, `.confidence_intervals(0.95)`, ...).
//! 3. Call `.build()` to get a [`LinearRegression`] model, then `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::RegressionExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::{Deviations, LinearFit};
pub use crate::engine::executor::RegressionConfig;
pub use crate::engine::output::RegressionResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::intervals::{CoefficientErrors, IntervalMethod};
pub use crate::evaluation::summary::{GroupedSummary, Summary};
pub use crate::primitives::errors::{ErrorKind, RegressionError};

// ============================================================================
// Bare Functions
// ============================================================================

/// Fit a least-squares line and return `(slope, intercept)`.
///
/// Fails with [`ErrorKind::InvalidInput`] for empty, mismatched, too short or
/// non-finite input, and with [`ErrorKind::DegenerateFit`] when every `x` is
/// the same.
pub fn fit<T: Float>(x: &[T], y: &[T]) -> Result<(T, T), RegressionError> {
    Validator::validate_inputs(x, y)?;
    let line = LinearFit::fit_ols(x, y)?;
    Ok((line.slope, line.intercept))
}

/// Evaluate `slope * x_i + intercept` for every `x_i`.
pub fn predict<T: Float>(slope: T, intercept: T, x: &[T]) -> Vec<T> {
    x.iter().map(|&xi| slope * xi + intercept).collect()
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a regression run.
#[derive(Debug, Clone)]
pub struct LinearRegressionBuilder<T> {
    /// Return residuals `y - ŷ`.
    pub compute_residuals: Option<bool>,

    /// Return goodness-of-fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Interval band configuration.
    pub interval_type: Option<IntervalMethod<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LinearRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearRegressionBuilder<T> {
    /// Create a new builder with every optional output disabled.
    pub fn new() -> Self {
        Self {
            compute_residuals: None,
            return_diagnostics: None,
            interval_type: None,
            duplicate_param: None,
        }
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        if self.compute_residuals.is_some() {
            self.duplicate_param = Some("return_residuals");
        }
        self.compute_residuals = Some(true);
        self
    }

    /// Include goodness-of-fit diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Enable confidence intervals for the mean response at `level` (e.g., 0.95).
    ///
    /// Both bands share one level. Requesting prediction intervals at a
    /// different level is reported by `build()` as a duplicate `interval_level`.
    pub fn confidence_intervals(mut self, level: T) -> Self {
        if self.interval_type.as_ref().is_some_and(|it| it.confidence) {
            self.duplicate_param = Some("confidence_intervals");
        } else if self
            .interval_type
            .as_ref()
            .is_some_and(|it| it.prediction && it.level != level)
        {
            self.duplicate_param = Some("interval_level");
        }
        self.interval_type = Some(match self.interval_type {
            Some(existing) if existing.prediction => IntervalMethod::both(level),
            _ => IntervalMethod::confidence(level),
        });
        self
    }

    /// Enable prediction intervals for new observations at `level`.
    ///
    /// Must match the confidence level when both bands are requested.
    pub fn prediction_intervals(mut self, level: T) -> Self {
        if self.interval_type.as_ref().is_some_and(|it| it.prediction) {
            self.duplicate_param = Some("prediction_intervals");
        } else if self
            .interval_type
            .as_ref()
            .is_some_and(|it| it.confidence && it.level != level)
        {
            self.duplicate_param = Some("interval_level");
        }
        self.interval_type = Some(match self.interval_type {
            Some(existing) if existing.confidence => IntervalMethod::both(level),
            _ => IntervalMethod::prediction(level),
        });
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LinearRegression<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(method) = &self.interval_type {
            Validator::validate_interval_level(method.level)?;
        }

        let config = RegressionConfig {
            compute_residuals: self.compute_residuals.unwrap_or(false),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
            interval_type: self.interval_type,
        };

        Ok(LinearRegression {
            executor: RegressionExecutor::new(config),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured least-squares model, ready to fit data.
#[derive(Debug, Clone, Copy)]
pub struct LinearRegression<T> {
    executor: RegressionExecutor<T>,
}

impl<T: Float> LinearRegression<T> {
    /// Start configuring a model.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> LinearRegressionBuilder<T> {
        LinearRegressionBuilder::new()
    }

    /// The resolved configuration.
    pub fn config(&self) -> &RegressionConfig<T> {
        self.executor.config()
    }

    /// Fit `y` against `x`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<RegressionResult<T>, RegressionError> {
        self.executor.run(x, y)
    }
}
