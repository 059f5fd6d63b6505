//! Naive doubly recursive Fibonacci.
//!
//! `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 2) + fib(n - 1)`.
//!
//! The recursion is exponential in `n` and is kept that way on purpose: this
//! routine is the reference workload the benchmarks time against.

// External dependencies
use num_traits::PrimInt;

/// Compute the Fibonacci number of `ord` by direct double recursion.
///
/// Returns `None` if any partial sum overflows `T`.
///
/// Ordinals below 2 are returned unchanged, so a negative signed ordinal
/// yields itself. Range checks belong to the caller.
#[inline]
pub fn fib_recursive<T: PrimInt>(ord: T) -> Option<T> {
    let two = T::one() + T::one();
    if ord < two {
        return Some(ord);
    }

    let lower = fib_recursive(ord - two)?;
    let upper = fib_recursive(ord - T::one())?;
    lower.checked_add(&upper)
}
