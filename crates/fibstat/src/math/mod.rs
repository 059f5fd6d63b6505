//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric routines:
//! - Naive doubly recursive Fibonacci
//! - Two-pass standard deviation
//!
//! Nothing here validates input; callers go through the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recursive Fibonacci over primitive integers.
pub mod fibonacci;

/// Mean and standard deviation over floating-point slices.
pub mod deviation;
