#![cfg(feature = "dev")]
//! Tests for input and parameter validation.
//!
//! These tests verify the fail-fast validator used before every fit:
//! - Empty and mismatched inputs
//! - Minimum number of points
//! - Non-finite values
//! - Interval levels and duplicate parameters
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Structural checks
//! 2. **Finite Checks** - NaN and infinity
//! 3. **Parameter Validation** - Interval level, duplicates
//! 4. **Check Order** - Which error wins when several apply

use linreg::internals::engine::validator::Validator;
use linreg::internals::primitives::errors::{ErrorKind, RegressionError};

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test valid input passes.
#[test]
fn test_validate_inputs_ok() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![2.0f64, 4.0, 6.0];
    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test exactly two points pass.
#[test]
fn test_validate_inputs_two_points() {
    assert!(Validator::validate_inputs(&[0.0f64, 1.0], &[0.0, 1.0]).is_ok());
}

/// Test empty input.
#[test]
fn test_validate_inputs_empty() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(
        Validator::validate_inputs(&empty, &empty),
        Err(RegressionError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_inputs(&[1.0f64], &empty),
        Err(RegressionError::EmptyInput)
    );
}

/// Test mismatched lengths.
#[test]
fn test_validate_inputs_mismatched() {
    let err = Validator::validate_inputs(&[1.0f64, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, RegressionError::MismatchedInputs { x_len: 3, y_len: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Test a single point.
#[test]
fn test_validate_inputs_single_point() {
    let err = Validator::validate_inputs(&[1.0f64], &[1.0]).unwrap_err();
    assert_eq!(err, RegressionError::TooFewPoints { got: 1, min: 2 });
}

// ============================================================================
// Finite Check Tests
// ============================================================================

/// Test NaN in x is rejected with its position.
#[test]
fn test_validate_inputs_nan_x() {
    let err = Validator::validate_inputs(&[1.0f64, f64::NAN, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();
    match err {
        RegressionError::InvalidNumericValue(msg) => assert!(msg.starts_with("x[1]")),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Test infinity in y is rejected with its position.
#[test]
fn test_validate_inputs_inf_y() {
    let err =
        Validator::validate_inputs(&[1.0f64, 2.0, 3.0], &[1.0, 2.0, f64::INFINITY]).unwrap_err();
    match err {
        RegressionError::InvalidNumericValue(msg) => assert_eq!(msg, "y[2]=inf"),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Test scalar validation.
#[test]
fn test_validate_scalar() {
    assert!(Validator::validate_scalar(1.5f64, "v", 0).is_ok());
    assert!(Validator::validate_scalar(f64::NEG_INFINITY, "v", 4).is_err());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test interval level bounds.
#[test]
fn test_validate_interval_level() {
    assert!(Validator::validate_interval_level(0.95f64).is_ok());
    assert!(Validator::validate_interval_level(0.5f64).is_ok());

    for bad in [0.0f64, 1.0, -0.1, 1.5, f64::NAN] {
        let err = Validator::validate_interval_level(bad).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidIntervals(_)));
    }
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("return_residuals")),
        Err(RegressionError::DuplicateParameter {
            parameter: "return_residuals"
        })
    );
}

// ============================================================================
// Check Order Tests
// ============================================================================

/// Test length mismatch is reported before non-finite values.
#[test]
fn test_validate_order_mismatch_before_nan() {
    let err = Validator::validate_inputs(&[f64::NAN, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, RegressionError::MismatchedInputs { .. }));
}

/// Test the validator does not judge variance.
#[test]
fn test_validate_allows_constant_x() {
    assert!(Validator::validate_inputs(&[5.0f64, 5.0, 5.0], &[1.0, 2.0, 3.0]).is_ok());
}
