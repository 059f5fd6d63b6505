//! Input validation for Fibonacci ordinals and sample sequences.
//!
//! ## Purpose
//!
//! This module checks the preconditions the math layer does not: ordinal
//! sign, sample count, and sample finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `PrimInt` and `Float` types.
//!
//! ## Invariants
//!
//! * A sample sequence that passes `validate_samples` is non-empty.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the computation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::{Float, PrimInt};

// Internal dependencies
use crate::math::deviation::DeviationMethod;
use crate::primitives::errors::FibstatError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fibstat inputs.
///
/// All methods return `Result<(), FibstatError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a Fibonacci ordinal.
    pub fn validate_ordinal<T: PrimInt>(ord: T) -> Result<(), FibstatError> {
        if ord < T::zero() {
            return Err(FibstatError::NegativeOrdinal(ord.to_i128().unwrap_or(i128::MIN)));
        }
        Ok(())
    }

    /// Validate a sample sequence.
    ///
    /// # Notes
    ///
    /// * Emptiness is reported as `DivisionByZero`, the failure an unchecked
    ///   mean would hit.
    /// * Finiteness is only checked when `check_finite` is set.
    pub fn validate_samples<T: Float>(samples: &[T], check_finite: bool) -> Result<(), FibstatError> {
        // Check 1: Non-empty
        if samples.is_empty() {
            return Err(FibstatError::DivisionByZero);
        }

        // Check 2: All values finite
        if check_finite {
            if let Some((i, val)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(FibstatError::InvalidNumericValue(format!(
                    "samples[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that there are enough samples for `method`.
    pub fn validate_sample_count(n: usize, method: DeviationMethod) -> Result<(), FibstatError> {
        let min = method.min_samples();
        if n < min {
            return Err(FibstatError::TooFewSamples { got: n, min });
        }
        Ok(())
    }

    /// Report a parameter that was set more than once on a builder.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), FibstatError> {
        if let Some(parameter) = duplicate {
            return Err(FibstatError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
