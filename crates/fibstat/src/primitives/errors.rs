//! Error types for fibstat operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while computing a
//! Fibonacci number or a standard deviation, including the argument errors
//! raised by the foreign-function bindings.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (ordinal, sample index, counts).
//! * **Deferred**: Builder misconfiguration is recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Argument errors**: Wrong kind of value handed across a binding boundary.
//! 2. **Domain errors**: Negative ordinals, empty or too-short sample sequences.
//! 3. **Range errors**: Fibonacci results that do not fit the ordinal's type.
//! 4. **Numeric errors**: NaN or infinite samples.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fibstat operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FibstatError {
    /// A binding received a value of the wrong kind; the message is shown verbatim.
    InvalidArgument(String),

    /// Fibonacci ordinals must be non-negative.
    NegativeOrdinal(i128),

    /// The Fibonacci number does not fit in the ordinal's integer type.
    Overflow {
        /// Ordinal whose Fibonacci number overflowed.
        ordinal: u128,
    },

    /// The sample sequence is empty, so its mean is undefined.
    DivisionByZero,

    /// Not enough samples for the selected deviation method.
    TooFewSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// A sample is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FibstatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "{msg}"),
            Self::NegativeOrdinal(ord) => {
                write!(f, "Invalid ordinal: {ord} (must be >= 0)")
            }
            Self::Overflow { ordinal } => {
                write!(f, "Fibonacci number {ordinal} overflows the ordinal's integer type")
            }
            Self::DivisionByZero => {
                write!(f, "Sample sequence is empty (mean would divide by zero)")
            }
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FibstatError {}
