//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the estimator and
//! the descriptive summaries:
//! - Sums, means and centered second moments
//! - Order statistics (quantiles, median)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sums, means and centered moments.
pub mod moments;

/// Quantiles and medians.
pub mod quantile;
