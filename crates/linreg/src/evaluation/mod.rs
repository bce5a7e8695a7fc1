//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates statistics on top of a fit or a raw sample:
//! - Diagnostic metrics for fit quality
//! - Coefficient standard errors, confidence and prediction intervals
//! - Descriptive and grouped box-plot summaries
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Standard errors and interval bands.
pub mod intervals;

/// Descriptive statistics.
pub mod summary;
