//! Tests for the public API.
//!
//! These tests verify the user-facing entry points:
//! - `fit` and `predict` on the bare slices
//! - The fluent builder and its validation
//! - Error classification as seen by callers
//!
//! ## Test Organization
//!
//! 1. **Bare Functions** - `fit`, `predict`
//! 2. **Builder** - Defaults, options, merging of interval kinds
//! 3. **Builder Validation** - Duplicates, interval levels
//! 4. **Errors** - Kinds and messages

use approx::assert_relative_eq;

use linreg::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn blood_pressure() -> (Vec<f64>, Vec<f64>) {
    let x = vec![25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0];
    let y = vec![
        110.0, 115.0, 118.0, 122.0, 128.0, 135.0, 140.0, 145.0, 150.0, 155.0, 160.0,
    ];
    (x, y)
}

// ============================================================================
// Bare Function Tests
// ============================================================================

/// Test `fit` on the blood-pressure data.
#[test]
fn test_fit_blood_pressure() {
    let (x, y) = blood_pressure();
    let (slope, intercept) = fit(&x, &y).unwrap();

    assert_relative_eq!(slope, 1.025_454_545_454_545_4, epsilon = 1e-12);
    assert_relative_eq!(intercept, 83.090_909_090_909_1, epsilon = 1e-9);
    // Rounded figures quoted for this data set
    assert!((slope - 1.0).abs() < 0.05);
    assert!((intercept - 85.0).abs() < 2.0);
}

/// Test a perfect line is recovered exactly.
#[test]
fn test_fit_exact_line() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![3.0, 5.0, 7.0, 9.0];
    let (slope, intercept) = fit(&x, &y).unwrap();

    assert_relative_eq!(slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(intercept, 1.0, epsilon = 1e-12);
}

/// Test `predict` evaluates the line elementwise and keeps order.
#[test]
fn test_predict_elementwise() {
    let out = predict(2.0, 1.0, &[0.0, 3.0, -1.0]);
    assert_eq!(out, vec![1.0, 7.0, -1.0]);
}

/// Test `predict` on empty input.
#[test]
fn test_predict_empty() {
    let out: Vec<f64> = predict(2.0, 1.0, &[]);
    assert!(out.is_empty());
}

/// Test predictions from `fit` pass through the centroid.
#[test]
fn test_fit_then_predict_centroid() {
    let (x, y) = blood_pressure();
    let (slope, intercept) = fit(&x, &y).unwrap();
    let at_mean = predict(slope, intercept, &[50.0]);

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;
    assert_relative_eq!(at_mean[0], y_mean, epsilon = 1e-10);
}

/// Test `fit` agrees with the builder.
#[test]
fn test_fit_matches_builder() {
    let (x, y) = blood_pressure();
    let (slope, intercept) = fit(&x, &y).unwrap();
    let result = LinearRegression::new().build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(slope, result.slope());
    assert_eq!(intercept, result.intercept());
}

/// Test `f32` inputs.
#[test]
fn test_fit_f32() {
    let x = vec![0.0f32, 1.0, 2.0, 3.0];
    let y = vec![1.0f32, 3.0, 5.0, 7.0];
    let (slope, intercept) = fit(&x, &y).unwrap();

    assert_relative_eq!(slope, 2.0f32, epsilon = 1e-5);
    assert_relative_eq!(intercept, 1.0f32, epsilon = 1e-5);
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_builder_defaults() {
    let model = LinearRegression::<f64>::new().build().unwrap();
    let config = model.config();

    assert!(!config.compute_residuals);
    assert!(!config.return_diagnostics);
    assert!(config.interval_type.is_none());
    assert_eq!(*config, RegressionConfig::default());
}

/// Test `Default` on the builder matches `new`.
#[test]
fn test_builder_default_trait() {
    let builder = LinearRegressionBuilder::<f64>::default();
    assert!(builder.compute_residuals.is_none());
    assert!(builder.return_diagnostics.is_none());
    assert!(builder.interval_type.is_none());
}

/// Test each option flows into the configuration.
#[test]
fn test_builder_options() {
    let model = LinearRegression::new()
        .return_residuals()
        .return_diagnostics()
        .confidence_intervals(0.9)
        .build()
        .unwrap();
    let config = model.config();

    assert!(config.compute_residuals);
    assert!(config.return_diagnostics);
    let method = config.interval_type.unwrap();
    assert!(method.confidence);
    assert!(!method.prediction);
    assert_relative_eq!(method.level, 0.9, epsilon = 1e-12);
}

/// Test confidence then prediction merges into both bands.
#[test]
fn test_builder_merges_interval_kinds() {
    let a = LinearRegression::new()
        .confidence_intervals(0.95)
        .prediction_intervals(0.95)
        .build()
        .unwrap();
    let b = LinearRegression::new()
        .prediction_intervals(0.95)
        .confidence_intervals(0.95)
        .build()
        .unwrap();

    assert_eq!(a.config().interval_type, Some(IntervalMethod::both(0.95)));
    assert_eq!(b.config().interval_type, Some(IntervalMethod::both(0.95)));
}

/// Test a model can be reused across data sets.
#[test]
fn test_model_reuse() {
    let model = LinearRegression::new().return_residuals().build().unwrap();

    let first = model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    let second = model.fit(&[0.0, 1.0, 2.0], &[1.0, 0.0, -1.0]).unwrap();

    assert_relative_eq!(first.slope(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(second.slope(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(second.intercept(), 1.0, epsilon = 1e-12);
}

/// Test residuals from the builder are `y - fitted`.
#[test]
fn test_builder_residuals() {
    let (x, y) = blood_pressure();
    let result = LinearRegression::new()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let residuals = result.residuals.as_ref().unwrap();

    for i in 0..x.len() {
        assert_relative_eq!(residuals[i], y[i] - result.fitted[i], epsilon = 1e-12);
    }
    assert_relative_eq!(residuals.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
}

/// Test diagnostics from the builder.
#[test]
fn test_builder_diagnostics() {
    let (x, y) = blood_pressure();
    let result = LinearRegression::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let diag = result.diagnostics.unwrap();
    let errors = result.coefficient_errors.unwrap();

    assert_relative_eq!(diag.rss, 10.763_636_363_636_365, epsilon = 1e-9);
    assert_relative_eq!(diag.r_squared, 0.996_291_656_226_509_6, epsilon = 1e-12);
    assert_relative_eq!(errors.slope, 0.020_854_121_859_497_275, epsilon = 1e-12);
    // Diagnostics alone do not produce bands
    assert!(result.standard_errors.is_none());
}

/// Test interval bands from the builder at the mean of x.
#[test]
fn test_builder_intervals_at_centroid() {
    let (x, y) = blood_pressure();
    let result = LinearRegression::new()
        .confidence_intervals(0.95)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    // x[5] == x̄, so the standard error is s / sqrt(n)
    let se = result.standard_errors.as_ref().unwrap();
    assert_relative_eq!(se[5], 0.329_732_618_393_586_53, epsilon = 1e-12);

    let lo = result.confidence_lower.as_ref().unwrap();
    let hi = result.confidence_upper.as_ref().unwrap();
    assert_relative_eq!(hi[5] - lo[5], 2.0 * 1.96 * se[5], epsilon = 1e-12);
    assert!(!result.has_prediction_intervals());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate options are rejected at build time.
#[test]
fn test_builder_duplicates() {
    let err = LinearRegression::<f64>::new()
        .return_residuals()
        .return_residuals()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "return_residuals"
        }
    );

    let err = LinearRegression::<f64>::new()
        .return_diagnostics()
        .return_diagnostics()
        .build()
        .unwrap_err();
    assert!(matches!(err, RegressionError::DuplicateParameter { .. }));

    let err = LinearRegression::new()
        .confidence_intervals(0.9)
        .confidence_intervals(0.95)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "confidence_intervals"
        }
    );

    let err = LinearRegression::new()
        .prediction_intervals(0.9)
        .prediction_intervals(0.95)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "prediction_intervals"
        }
    );
}

/// Test both bands must share one level.
#[test]
fn test_builder_conflicting_levels() {
    let err = LinearRegression::new()
        .confidence_intervals(0.90)
        .prediction_intervals(0.99)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegressionError::DuplicateParameter {
            parameter: "interval_level"
        }
    );

    let err = LinearRegression::new()
        .prediction_intervals(0.99)
        .confidence_intervals(0.90)
        .build()
        .unwrap_err();
    assert!(matches!(err, RegressionError::DuplicateParameter { .. }));

    // Matching levels are fine
    assert!(LinearRegression::new()
        .confidence_intervals(0.99)
        .prediction_intervals(0.99)
        .build()
        .is_ok());
}

/// Test interval levels outside (0, 1) are rejected.
#[test]
fn test_builder_invalid_level() {
    for level in [0.0, 1.0, 1.5, -0.5] {
        let err = LinearRegression::new()
            .confidence_intervals(level)
            .build()
            .unwrap_err();
        assert_eq!(err, RegressionError::InvalidIntervals(level));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test every structural input error is classified as invalid input.
#[test]
fn test_fit_invalid_input_kinds() {
    let cases: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![], vec![]),
        (vec![1.0], vec![1.0]),
        (vec![1.0, 2.0, 3.0], vec![1.0, 2.0]),
        (vec![1.0, f64::NAN], vec![1.0, 2.0]),
        (vec![1.0, 2.0], vec![f64::INFINITY, 2.0]),
    ];

    for (x, y) in cases {
        let err = fit(&x, &y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{err}");
        assert!(!err.is_degenerate());
    }
}

/// Test zero-variance x is a degenerate fit, never NaN or infinity.
#[test]
fn test_fit_degenerate() {
    let err = fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateFit);
    assert!(err.is_degenerate());
    assert_eq!(err, RegressionError::DegenerateFit { x_value: 5.0 });

    let err = LinearRegression::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&[2.0, 2.0], &[0.0, 1.0])
        .unwrap_err();
    assert!(err.is_degenerate());
}

/// Test error messages are readable.
#[test]
fn test_error_messages() {
    let err = fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Length mismatch: x has 3 points, y has 2"
    );

    let err = fit(&[1.0], &[1.0]).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Too few points: got 1, need at least 2"
    );

    assert_eq!(format!("{}", ErrorKind::DegenerateFit), "degenerate fit");
    assert_eq!(format!("{}", ErrorKind::InvalidInput), "invalid input");
}

/// Test the error type works behind `Box<dyn Error>`.
#[test]
fn test_error_is_std_error() {
    fn run() -> Result<(f64, f64), Box<dyn std::error::Error>> {
        Ok(fit(&[1.0, 1.0], &[1.0, 2.0])?)
    }
    assert!(run().is_err());
}
