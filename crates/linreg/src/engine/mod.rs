//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a regression run:
//! - Input and parameter validation
//! - The execution pipeline from slices to a result
//! - The result type and its report
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Result type.
pub mod output;

/// Input validation.
pub mod validator;
