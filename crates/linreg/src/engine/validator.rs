//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module checks the preconditions of a fit before any arithmetic is
//! done: non-empty inputs, matching lengths, at least two points, finite
//! values, and sane builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not detect a degenerate (zero-variance) design; that
//!   falls out of the fit itself.
//! * This module does not correct or filter invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression inputs and configuration.
pub struct Validator;

impl Validator {
    /// Minimum number of points that determines a line.
    pub const MIN_POINTS: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired input arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), RegressionError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Enough points to determine a line
        if n < Self::MIN_POINTS {
            return Err(RegressionError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        // Check 4: All values finite
        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            Self::validate_scalar(xi, "x", i)?;
            Self::validate_scalar(yi, "y", i)?;
        }

        trace!(points = n, "inputs validated");
        Ok(())
    }

    /// Validate a single element of a named array for finiteness.
    pub fn validate_scalar<T: Float>(
        val: T,
        name: &str,
        idx: usize,
    ) -> Result<(), RegressionError> {
        if !val.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                idx,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the confidence/prediction interval level.
    pub fn validate_interval_level<T: Float>(level: T) -> Result<(), RegressionError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(RegressionError::InvalidIntervals(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
