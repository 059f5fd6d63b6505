//! # fibstat — naive Fibonacci and two-pass standard deviation
//!
//! Two small, independent numeric routines, generic over the primitive
//! numeric types and usable from Rust, Python (`cFibo`) and C.
//!
//! * [`fib`](prelude::fib): the n-th Fibonacci number by direct double
//!   recursion, with no memoization. It is the reference workload for
//!   comparing call overhead across language boundaries.
//! * [`std_dev`](prelude::std_dev): population standard deviation computed in
//!   two passes (mean first, then squared deviations).
//!
//! ## Quick Start
//!
//! ```rust
//! use fibstat::prelude::*;
//!
//! assert_eq!(fib(12_u32)?, 144);
//!
//! let sd = std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
//! assert!((sd - 2.0).abs() < 1e-12);
//! # Result::<(), FibstatError>::Ok(())
//! ```
//!
//! ### Configured estimator
//!
//! ```rust
//! use fibstat::prelude::*;
//!
//! let estimator = StdDev::new()
//!     .method(Sample)       // divide by n - 1
//!     .check_finite(true)   // reject NaN / Inf samples
//!     .build()?;
//!
//! let sd = estimator.compute(&[1.0_f32, 2.0, 3.0, 4.0])?;
//! assert!((sd - 1.2909944).abs() < 1e-6);
//! # Result::<(), FibstatError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, FibstatError>`:
//!
//! ```rust
//! use fibstat::prelude::*;
//!
//! assert_eq!(fib(-1_i32), Err(FibstatError::NegativeOrdinal(-1)));
//! assert_eq!(std_dev::<f64>(&[]), Err(FibstatError::DivisionByZero));
//! assert!(matches!(fib(12_i8), Err(FibstatError::Overflow { ordinal: 12 })));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! fibstat = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure numeric routines.
mod math;

// Layer 3: Engine - input validation.
mod engine;

// High-level API.
mod api;

// Standard fibstat prelude.
pub mod prelude {
    pub use crate::api::{
        DeviationMethod, DeviationMethod::Population, DeviationMethod::Sample, FibstatError,
        StdDevBuilder as StdDev, StdDevEstimator, fib, std_dev,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
