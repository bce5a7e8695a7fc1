//! # linreg — closed-form simple linear regression for Rust
//!
//! Ordinary least squares for one predictor, computed the way it is taught:
//! take the means, take the deviations from the means, divide the summed
//! cross-products by the summed squared x-deviations.
//!
//! ## What does it compute?
//!
//! For paired samples `(x_i, y_i)` with means `x̄`, `ȳ`:
//!
//! ```text
//! slope     = Σ(x_i - x̄)(y_i - ȳ) / Σ(x_i - x̄)²
//! intercept = ȳ - slope · x̄
//! ŷ_i       = slope · x_i + intercept
//! ```
//!
//! ## Quick Start
//!
//! ### Just the line
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let x = vec![25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0];
//! let y = vec![110.0, 115.0, 118.0, 122.0, 128.0, 135.0, 140.0, 145.0, 150.0, 155.0, 160.0];
//!
//! let (slope, intercept) = fit::<f64>(&x, &y)?;
//! assert!((slope - 1.0254545).abs() < 1e-6);
//! assert!((intercept - 83.090909).abs() < 1e-5);
//!
//! let y_pred = predict(slope, intercept, &x);
//! assert_eq!(y_pred.len(), x.len());
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! let model = LinearRegression::new()
//!     .return_residuals()          // Include y - ŷ
//!     .return_diagnostics()        // RMSE, MAE, R², residual SE, correlation
//!     .confidence_intervals(0.95)  // 95% band for the mean response
//!     .prediction_intervals(0.95)  // 95% band for new observations
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible call returns `Result<_, RegressionError>`. Each error has
//! a [`kind`](prelude::RegressionError::kind):
//!
//! - **`ErrorKind::InvalidInput`**: empty, mismatched, too short (< 2 points)
//!   or non-finite input, and invalid builder configuration.
//! - **`ErrorKind::DegenerateFit`**: all x-values are identical, so the slope
//!   is undefined. The fit never returns `inf` or `NaN` for this case.
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let err = fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DegenerateFit);
//!
//! let err = fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```
//!
//! ### Descriptive statistics
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let heart_rate = vec![118.0, 96.5, 131.2, 104.0, 88.9, 122.4];
//! let gender = vec![0, 1, 0, 1, 1, 0];
//!
//! let groups = GroupedSummary::by_label(&heart_rate, &gender)?;
//! let female = groups.get(&0).unwrap();
//! assert_eq!(female.n, 3);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library; `alloc` is still
//! required.
//!
//! ```toml
//! [dependencies]
//! linreg = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the least-squares estimator.
mod algorithms;

// Layer 4: Evaluation - diagnostics, intervals and summaries.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
mod engine;

// High-level API.
mod api;

pub use api::{fit, predict};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        fit, predict, CoefficientErrors, Deviations, Diagnostics, ErrorKind, GroupedSummary,
        IntervalMethod, LinearFit, LinearRegression, LinearRegressionBuilder, RegressionConfig,
        RegressionError, RegressionResult, Summary,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
