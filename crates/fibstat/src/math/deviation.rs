//! Two-pass mean and standard deviation.
//!
//! The first pass computes the arithmetic mean, the second accumulates the
//! squared deviations from it. No Welford-style single-pass update is used.

// External dependencies
use num_traits::Float;

/// Divisor convention for the mean of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviationMethod {
    /// Divide by `n`.
    #[default]
    Population,

    /// Divide by `n - 1` (Bessel's correction).
    Sample,
}

impl DeviationMethod {
    /// Smallest sample count for which the method is defined.
    #[inline]
    pub fn min_samples(&self) -> usize {
        match self {
            Self::Population => 1,
            Self::Sample => 2,
        }
    }

    /// Degrees of freedom subtracted from `n` in the divisor.
    #[inline]
    pub fn ddof(&self) -> usize {
        self.min_samples() - 1
    }

    /// Compute the variance of `vals`.
    ///
    /// Returns NaN when `vals` holds fewer than [`Self::min_samples`] values.
    pub fn variance<T: Float>(&self, vals: &[T]) -> T {
        let n = vals.len();
        if n < self.min_samples() {
            return T::nan();
        }

        let mean = mean(vals);
        let sum_sq = sum_squared_deviations(vals, mean);
        let divisor = T::from(n - self.ddof()).unwrap_or(T::one());
        sum_sq / divisor
    }

    /// Compute the standard deviation of `vals`.
    #[inline]
    pub fn compute<T: Float>(&self, vals: &[T]) -> T {
        self.variance(vals).sqrt()
    }
}

/// Arithmetic mean of `vals` (NaN when empty).
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::nan();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    let mut sum = T::zero();
    for &val in vals {
        sum = sum + val;
    }
    sum / n
}

/// Sum of `(x - mean)^2` over `vals`.
#[inline]
pub fn sum_squared_deviations<T: Float>(vals: &[T], mean: T) -> T {
    let mut sum_sq = T::zero();
    for &val in vals {
        let diff = val - mean;
        sum_sq = sum_sq + diff * diff;
    }
    sum_sq
}
