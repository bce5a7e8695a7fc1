//! Closed-form ordinary least squares.
//!
//! ## Purpose
//!
//! This module provides the core estimator: the slope and intercept of the
//! line minimising the squared vertical distance to paired samples `(x, y)`.
//!
//! ## Design notes
//!
//! * **Closed form**: `slope = Σ(dx·dy) / Σ(dx²)`, `intercept = ȳ - slope·x̄`,
//!   with `dx = x - x̄` and `dy = y - ȳ`.
//! * **Centered sums**: Deviations are taken from the means before the
//!   products are accumulated, which keeps large offsets in `x` from
//!   cancelling catastrophically.
//! * **Stateless**: A [`LinearFit`] is a plain value; fitting has no side effects.
//!
//! ## Invariants
//!
//! * `len(x) == len(y) >= 2`.
//! * A fitted line always passes through the centroid `(x̄, ȳ)`.
//! * A zero-variance `x` yields [`RegressionError::DegenerateFit`], never `inf` or `NaN`.
//! * Means or sums that overflow yield [`RegressionError::InvalidNumericValue`].
//!
//! ## Non-goals
//!
//! * This module does not check for non-finite values (see the validator).
//! * This module does not handle weighted or multivariate regression.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{centered_sums, max_abs, mean};
use crate::primitives::errors::RegressionError;

// ============================================================================
// LinearFit
// ============================================================================

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0).
    pub intercept: T,

    /// Mean of the x-values.
    pub x_mean: T,

    /// Mean of the y-values.
    pub y_mean: T,

    /// Numerator `Σ(x - x̄)(y - ȳ)`.
    pub sxy: T,

    /// Denominator `Σ(x - x̄)²`.
    pub sxx: T,

    /// `Σ(y - ȳ)²`.
    pub syy: T,

    /// Number of points the line was fitted to.
    pub n: usize,
}

impl<T: Float> LinearFit<T> {
    /// Fit ordinary least squares to paired samples.
    ///
    /// Only the structural preconditions are checked here. Finite-ness of
    /// the values is the validator's job.
    pub fn fit_ols(x: &[T], y: &[T]) -> core::result::Result<Self, RegressionError> {
        let n = x.len();
        if n != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }
        if n < 2 {
            return Err(RegressionError::TooFewPoints { got: n, min: 2 });
        }

        let x_mean = mean(x);
        let y_mean = mean(y);
        let (sxx, sxy, syy) = centered_sums(x, y, x_mean, y_mean);

        // Finite inputs can still overflow the sums; that is not zero variance.
        let moments = [("x_mean", x_mean), ("y_mean", y_mean), ("sxx", sxx), ("sxy", sxy)];
        if let Some((name, _)) = moments.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RegressionError::InvalidNumericValue(format!(
                "overflow in {}",
                name
            )));
        }

        if sxx <= Self::degenerate_threshold(x) {
            return Err(RegressionError::DegenerateFit {
                x_value: x_mean.to_f64().unwrap_or(f64::NAN),
            });
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        Ok(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
            sxy,
            sxx,
            syy,
            n,
        })
    }

    // Summing n equal values can leave the mean off by up to n * eps * max|x|,
    // so an sxx below n * (n * eps * max|x|)^2 is rounding noise, not spread.
    fn degenerate_threshold(x: &[T]) -> T {
        let n_t = T::from(x.len()).unwrap_or(T::one());
        let noise = n_t * T::epsilon() * max_abs(x);
        n_t * noise * noise
    }

    /// Predict the y-value at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Predict the y-value at every point of `xs`.
    pub fn predict_all(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&xi| self.predict(xi)).collect()
    }

    /// Residuals `y_i - predict(x_i)`.
    pub fn residuals(&self, x: &[T], y: &[T]) -> Vec<T> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }

    /// The centroid `(x̄, ȳ)` the line passes through.
    #[inline]
    pub fn centroid(&self) -> (T, T) {
        (self.x_mean, self.y_mean)
    }
}

impl<T: Float + Display> Display for LinearFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision();
        let (slope_p, intercept_p) = match precision {
            Some(p) => (p, p),
            None => (4, 2),
        };

        write!(f, "y = {:.*}x", slope_p, self.slope)?;
        if self.intercept < T::zero() {
            write!(f, " - {:.*}", intercept_p, self.intercept.abs())
        } else {
            write!(f, " + {:.*}", intercept_p, self.intercept)
        }
    }
}

// ============================================================================
// Deviations
// ============================================================================

/// Per-point deviations from the means, the intermediate step of the fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Deviations<T> {
    /// `x_i - x̄`.
    pub dx: Vec<T>,

    /// `y_i - ȳ`.
    pub dy: Vec<T>,
}

impl<T: Float> Deviations<T> {
    /// Compute deviations from the given means.
    pub fn new(x: &[T], y: &[T], x_mean: T, y_mean: T) -> Self {
        Self {
            dx: x.iter().map(|&xi| xi - x_mean).collect(),
            dy: y.iter().map(|&yi| yi - y_mean).collect(),
        }
    }

    /// Compute deviations from the means stored in a fit.
    pub fn from_fit(fit: &LinearFit<T>, x: &[T], y: &[T]) -> Self {
        Self::new(x, y, fit.x_mean, fit.y_mean)
    }

    /// `Σ(dx·dy)`.
    pub fn numerator(&self) -> T {
        self.dx
            .iter()
            .zip(self.dy.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// `Σ(dx²)`.
    pub fn denominator(&self) -> T {
        self.dx.iter().fold(T::zero(), |acc, &a| acc + a * a)
    }
}
