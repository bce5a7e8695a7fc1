//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the closed-form least-squares estimator.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least squares.
pub mod regression;
