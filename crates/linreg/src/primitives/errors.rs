//! Error types for regression and summary operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! least-squares line or summarising a sample: malformed input, a degenerate
//! design (no variance in `x`), and invalid builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, levels, names).
//! * **Two kinds**: Every variant maps onto [`ErrorKind::InvalidInput`] or
//!   [`ErrorKind::DegenerateFit`] through [`RegressionError::kind`].
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; every error is terminal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`RegressionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input or configuration violates a precondition.
    InvalidInput,

    /// The inputs are well-formed but `x` has no variance, so the slope is undefined.
    DegenerateFit,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` (or values and labels) must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Fewer points than the operation requires.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Every `x` value is the same, so `Σ(x - x̄)²` is zero.
    DegenerateFit {
        /// The common x-value.
        x_value: f64,
    },

    /// Interval coverage level must be strictly between 0 and 1.
    InvalidIntervals(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl RegressionError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateFit { .. } => ErrorKind::DegenerateFit,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Whether the error reports a zero-variance design.
    pub fn is_degenerate(&self) -> bool {
        self.kind() == ErrorKind::DegenerateFit
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::DegenerateFit => write!(f, "degenerate fit"),
        }
    }
}

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DegenerateFit { x_value } => {
                write!(
                    f,
                    "Degenerate fit: every x equals {x_value}, slope is undefined"
                )
            }
            Self::InvalidIntervals(level) => {
                write!(f, "Invalid interval level: {level} (must be > 0 and < 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
