//! Layer 3: Engine
//!
//! # Purpose
//!
//! Input validation sitting between the public API and the math routines.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation logic.
pub mod validator;
