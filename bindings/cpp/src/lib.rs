//! C bindings for fibstat.
//!
//! Exposes the Fibonacci and standard-deviation routines over the C ABI.
//! The header `include/cfibo.h` is generated by the build script.
//!
//! Error strings are allocated by Rust and must be released with
//! [`cfibo_free_error`].

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::CString;
use std::fmt::Display;
use std::os::raw::{c_char, c_double, c_long};
use std::ptr;

use fibstat::prelude::{StdDev, fib};

/// Fibonacci result passed across the FFI boundary.
#[repr(C)]
pub struct CFiboLongResult {
    /// Fibonacci value (0 on error)
    pub value: c_long,
    /// Error message (NULL if no error)
    pub error: *mut c_char,
}

/// Floating-point result passed across the FFI boundary.
#[repr(C)]
pub struct CFiboDoubleResult {
    /// Computed value (NaN on error)
    pub value: c_double,
    /// Error message (NULL if no error)
    pub error: *mut c_char,
}

/// Allocate a C copy of an error message.
fn error_message(e: impl Display) -> *mut c_char {
    CString::new(e.to_string()).unwrap_or_default().into_raw()
}

/// Borrow `siz` doubles starting at `arr`, or `None` for a null or empty buffer.
unsafe fn samples<'a>(arr: *const c_double, siz: usize) -> Option<&'a [f64]> {
    if arr.is_null() || siz == 0 {
        return None;
    }
    Some(std::slice::from_raw_parts(arr, siz))
}

/// Fibonacci value of `ord`.
///
/// Negative ordinals and results that overflow `long` set `error`.
#[unsafe(no_mangle)]
pub extern "C" fn cfibo_fib(ord: c_long) -> CFiboLongResult {
    match fib(ord) {
        Ok(value) => CFiboLongResult {
            value,
            error: ptr::null_mut(),
        },
        Err(e) => {
            tracing::warn!(ordinal = ord, error = %e, "cfibo_fib failed");
            CFiboLongResult {
                value: 0,
                error: error_message(e),
            }
        }
    }
}

/// Population standard deviation of `siz` doubles at `arr`.
///
/// Returns NaN for a null pointer or `siz == 0`. NaN and infinite samples
/// propagate into the result.
///
/// # Safety
///
/// `arr` must point to at least `siz` readable, initialized doubles.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn std_dev(arr: *const c_double, siz: usize) -> c_double {
    let Some(slice) = samples(arr, siz) else {
        tracing::debug!(siz, "std_dev called with an empty or null buffer");
        return f64::NAN;
    };

    StdDev::new()
        .check_finite(false)
        .build()
        .and_then(|estimator| estimator.compute(slice))
        .unwrap_or(f64::NAN)
}

/// Population standard deviation with error reporting.
///
/// Empty input and non-finite samples set `error`.
///
/// # Safety
///
/// `arr` must be NULL or point to at least `siz` readable, initialized doubles.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfibo_std_dev(arr: *const c_double, siz: usize) -> CFiboDoubleResult {
    let slice = samples(arr, siz).unwrap_or(&[]);

    match StdDev::new().build().and_then(|estimator| estimator.compute(slice)) {
        Ok(value) => CFiboDoubleResult {
            value,
            error: ptr::null_mut(),
        },
        Err(e) => {
            tracing::warn!(siz, error = %e, "cfibo_std_dev failed");
            CFiboDoubleResult {
                value: f64::NAN,
                error: error_message(e),
            }
        }
    }
}

/// Free an error string returned in a result struct.
///
/// # Safety
///
/// `error` must be NULL or a pointer previously returned by this library,
/// and must not be freed twice.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfibo_free_error(error: *mut c_char) {
    if !error.is_null() {
        let _ = CString::from_raw(error);
    }
}
