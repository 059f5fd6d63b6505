//! Tests for the public fibstat API.
//!
//! ## Test Organization
//!
//! 1. **Fibonacci** - Known values, recurrence, rejected ordinals
//! 2. **Standard Deviation** - Known values, edge cases, error reporting
//! 3. **Builder** - Method selection, finiteness checks, duplicate parameters

use approx::assert_relative_eq;

use fibstat::prelude::*;

// ============================================================================
// Fibonacci Tests
// ============================================================================

/// Test the first thirteen Fibonacci numbers.
#[test]
fn test_fib_first_thirteen() {
    let expected: Vec<i64> = vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
    let result: Vec<i64> = (0..13).map(|i| fib(i).unwrap()).collect();

    assert_eq!(result, expected);
}

/// Test base cases and a mid-range value.
#[test]
fn test_fib_known_values() {
    assert_eq!(fib(0_i64), Ok(0));
    assert_eq!(fib(1_i64), Ok(1));
    assert_eq!(fib(2_i64), Ok(1));
    assert_eq!(fib(10_i64), Ok(55));
    assert_eq!(fib(25_i64), Ok(75_025));
}

/// Test that every value satisfies the defining recurrence.
#[test]
fn test_fib_recurrence() {
    for n in 2..24_u64 {
        let lhs = fib(n).unwrap();
        let rhs = fib(n - 1).unwrap() + fib(n - 2).unwrap();
        assert_eq!(lhs, rhs, "recurrence broken at n={}", n);
    }
}

/// Test that the result keeps the ordinal's integer type.
#[test]
fn test_fib_preserves_width() {
    let small: u8 = fib(13_u8).unwrap();
    assert_eq!(small, 233);

    let wide: i128 = fib(20_i128).unwrap();
    assert_eq!(wide, 6_765);
}

/// Test that negative ordinals are rejected instead of recursed.
#[test]
fn test_fib_negative_ordinal() {
    assert_eq!(fib(-1_i64), Err(FibstatError::NegativeOrdinal(-1)));
    assert_eq!(fib(i32::MIN), Err(FibstatError::NegativeOrdinal(i32::MIN as i128)));
}

/// Test overflow detection on narrow integer types.
#[test]
fn test_fib_overflow() {
    // fib(11) = 89 fits in i8, fib(12) = 144 does not.
    assert_eq!(fib(11_i8), Ok(89));
    assert_eq!(fib(12_i8), Err(FibstatError::Overflow { ordinal: 12 }));

    // fib(13) = 233 fits in u8, fib(14) = 377 does not.
    assert_eq!(fib(13_u8), Ok(233));
    assert_eq!(fib(14_u8), Err(FibstatError::Overflow { ordinal: 14 }));
}

// ============================================================================
// Standard Deviation Tests
// ============================================================================

/// Test the canonical population standard deviation example.
#[test]
fn test_std_dev_canonical() {
    let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sd = std_dev(&samples).unwrap();

    assert_relative_eq!(sd, 2.0, epsilon = 1e-12);
}

/// Test that a single sample has exactly zero deviation.
#[test]
fn test_std_dev_single_sample() {
    assert_eq!(std_dev(&[5.0]), Ok(0.0));
    assert_eq!(std_dev(&[-1.0e300]), Ok(0.0));
}

/// Test identical samples.
#[test]
fn test_std_dev_constant() {
    let samples = vec![3.25_f64; 17];
    assert_relative_eq!(std_dev(&samples).unwrap(), 0.0, epsilon = 1e-15);
}

/// Test single precision input.
#[test]
fn test_std_dev_f32() {
    let samples = [2.0_f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(std_dev(&samples).unwrap(), 2.0_f32, epsilon = 1e-6);
}

/// Test that an empty sequence is reported rather than dividing by zero.
#[test]
fn test_std_dev_empty() {
    assert_eq!(std_dev::<f64>(&[]), Err(FibstatError::DivisionByZero));
}

/// Test that non-finite samples are rejected by default.
#[test]
fn test_std_dev_non_finite() {
    let result = std_dev(&[1.0, f64::NAN, 3.0]);
    assert!(matches!(result, Err(FibstatError::InvalidNumericValue(ref s)) if s.starts_with("samples[1]")));

    let result = std_dev(&[1.0, 2.0, f64::INFINITY]);
    assert!(matches!(result, Err(FibstatError::InvalidNumericValue(_))));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the default estimator matches `std_dev`.
#[test]
fn test_builder_defaults() {
    let samples = [1.5, 2.5, 9.0, -4.0];
    let estimator = StdDev::new().build().unwrap();

    assert_eq!(estimator.method(), Population);
    assert_eq!(estimator.compute(&samples), std_dev(&samples));
}

/// Test sample (n - 1) standard deviation.
#[test]
fn test_builder_sample_method() {
    let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sd = StdDev::new().method(Sample).build().unwrap().compute(&samples).unwrap();

    // sum of squares = 32, 32 / 7
    assert_relative_eq!(sd, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
}

/// Test that sample method needs at least two samples.
#[test]
fn test_builder_sample_method_too_few() {
    let estimator = StdDev::new().method(Sample).build().unwrap();

    assert_eq!(
        estimator.compute(&[1.0]),
        Err(FibstatError::TooFewSamples { got: 1, min: 2 })
    );
    assert_eq!(estimator.compute(&[]), Err(FibstatError::DivisionByZero));
}

/// Test that disabling finiteness checks lets NaN propagate.
#[test]
fn test_builder_check_finite_disabled() {
    let estimator = StdDev::new().check_finite(false).build().unwrap();

    assert!(estimator.compute(&[1.0, f64::NAN]).unwrap().is_nan());
    assert!(estimator.compute(&[1.0, f64::INFINITY]).unwrap().is_nan());
}

/// Test that setting a parameter twice is an error at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let result = StdDev::<f64>::new().method(Sample).method(Population).build();
    assert!(matches!(
        result,
        Err(FibstatError::DuplicateParameter { parameter: "method" })
    ));

    let result = StdDev::<f64>::new().check_finite(true).check_finite(false).build();
    assert!(matches!(
        result,
        Err(FibstatError::DuplicateParameter {
            parameter: "check_finite"
        })
    ));
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        FibstatError::InvalidArgument("Argument is not an integer.".to_string()).to_string(),
        "Argument is not an integer."
    );
    assert_eq!(
        FibstatError::NegativeOrdinal(-3).to_string(),
        "Invalid ordinal: -3 (must be >= 0)"
    );
    assert_eq!(
        FibstatError::TooFewSamples { got: 1, min: 2 }.to_string(),
        "Too few samples: got 1, need at least 2"
    );
}
