//! High-level API for fibstat.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: [`fib`] and
//! [`std_dev`] for the common case, and [`StdDevBuilder`] for configuring
//! the deviation method and finiteness checks.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Free functions with sensible defaults; a fluent builder for the rest.
//! * **Validated**: Inputs are validated before any computation runs.
//! * **Type-Safe**: Generic over `PrimInt` ordinals and `Float` samples.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`StdDevBuilder`] via `StdDev::new()`.
//! 2. Chain configuration methods (`.method()`, `.check_finite()`).
//! 3. Call `.build()` to validate the configuration and get a [`StdDevEstimator`].

// External dependencies
use core::marker::PhantomData;
use num_traits::{Float, PrimInt};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::fibonacci::fib_recursive;

// Publicly re-exported types
pub use crate::math::deviation::DeviationMethod;
pub use crate::primitives::errors::FibstatError;

// ============================================================================
// Fibonacci
// ============================================================================

/// Compute the Fibonacci number of `ord` by naive double recursion.
///
/// The result has the same integer type as the ordinal.
///
/// # Errors
///
/// * [`FibstatError::NegativeOrdinal`] if `ord < 0`.
/// * [`FibstatError::Overflow`] if the result does not fit in `T`.
///
/// # Example
///
/// ```rust
/// use fibstat::prelude::*;
///
/// assert_eq!(fib(10_i64)?, 55);
/// # Result::<(), FibstatError>::Ok(())
/// ```
pub fn fib<T: PrimInt>(ord: T) -> Result<T, FibstatError> {
    Validator::validate_ordinal(ord)?;

    fib_recursive(ord).ok_or_else(|| FibstatError::Overflow {
        ordinal: ord.to_u128().unwrap_or(u128::MAX),
    })
}

// ============================================================================
// Standard Deviation
// ============================================================================

/// Compute the population standard deviation of `samples`.
///
/// Equivalent to `StdDev::new().build()?.compute(samples)`.
///
/// # Errors
///
/// * [`FibstatError::DivisionByZero`] if `samples` is empty.
/// * [`FibstatError::InvalidNumericValue`] if a sample is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use fibstat::prelude::*;
///
/// let sd = std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
/// assert!((sd - 2.0).abs() < 1e-12);
/// # Result::<(), FibstatError>::Ok(())
/// ```
pub fn std_dev<T: Float>(samples: &[T]) -> Result<T, FibstatError> {
    StdDevEstimator::default().compute(samples)
}

/// Fluent builder for a standard-deviation estimator.
#[derive(Debug, Clone)]
pub struct StdDevBuilder<T: Float> {
    /// Divisor convention (population or sample).
    pub method: Option<DeviationMethod>,

    /// Reject NaN and infinite samples.
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for StdDevBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StdDevBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            check_finite: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the divisor convention.
    pub fn method(mut self, method: DeviationMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Enable or disable rejection of non-finite samples.
    ///
    /// When disabled, NaN and infinities propagate into the result.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(enabled);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<StdDevEstimator<T>, FibstatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(StdDevEstimator {
            method: self.method.unwrap_or_default(),
            check_finite: self.check_finite.unwrap_or(true),
            _marker: PhantomData,
        })
    }
}

/// Configured standard-deviation estimator.
#[derive(Debug, Clone, Copy)]
pub struct StdDevEstimator<T: Float> {
    method: DeviationMethod,
    check_finite: bool,
    _marker: PhantomData<T>,
}

impl<T: Float> Default for StdDevEstimator<T> {
    fn default() -> Self {
        Self {
            method: DeviationMethod::Population,
            check_finite: true,
            _marker: PhantomData,
        }
    }
}

impl<T: Float> StdDevEstimator<T> {
    /// Divisor convention in use.
    pub fn method(&self) -> DeviationMethod {
        self.method
    }

    /// Compute the standard deviation of `samples`.
    pub fn compute(&self, samples: &[T]) -> Result<T, FibstatError> {
        Validator::validate_samples(samples, self.check_finite)?;
        Validator::validate_sample_count(samples.len(), self.method)?;

        Ok(self.method.compute(samples))
    }
}
