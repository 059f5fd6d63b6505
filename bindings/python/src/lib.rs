//! Python bindings for fibstat.
//!
//! Builds the extension module `cFibo`:
//!
//! ```python
//! >>> import cFibo
//! >>> cFibo.fib(10)
//! 55
//! >>> cFibo.fib(10.0)
//! ValueError: Argument is not an integer.
//! >>> cFibo.std_dev([2, 4, 4, 4, 5, 5, 7, 9])
//! 2.0
//! ```

#![allow(non_snake_case)]

use numpy::PyReadonlyArray1;
use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyInt;
use std::fmt::Display;

use ::fibstat::prelude::{DeviationMethod, FibstatError, Population, Sample, StdDev};

const NOT_AN_INTEGER: &str = "Argument is not an integer.";

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert any displayable error to a `ValueError`.
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Convert a FibstatError to the matching Python exception.
fn fibstat_to_py_error(e: FibstatError) -> PyErr {
    match e {
        FibstatError::Overflow { .. } => PyOverflowError::new_err(e.to_string()),
        _ => to_py_error(e),
    }
}

/// Map numpy's `ddof` convention to a deviation method.
fn parse_ddof(ddof: usize) -> PyResult<DeviationMethod> {
    match ddof {
        0 => Ok(Population),
        1 => Ok(Sample),
        _ => Err(PyValueError::new_err(format!(
            "Unsupported ddof: {}. Valid options: 0 (population), 1 (sample)",
            ddof
        ))),
    }
}

/// An ndarray can only exist once numpy has been imported.
fn numpy_loaded(py: Python<'_>) -> PyResult<bool> {
    py.import("sys")?.getattr("modules")?.contains("numpy")
}

/// Run `f` over `samples` as a contiguous slice.
///
/// Contiguous float64 arrays are borrowed. Strided arrays, other dtypes and
/// plain Python sequences are copied into a `Vec<f64>` first.
fn with_samples<'py, R>(
    samples: &Bound<'py, PyAny>,
    f: impl FnOnce(&[f64]) -> PyResult<R>,
) -> PyResult<R> {
    if numpy_loaded(samples.py())? {
        if let Ok(array) = samples.extract::<PyReadonlyArray1<'py, f64>>() {
            return match array.as_slice() {
                Ok(slice) => f(slice),
                Err(_) => {
                    let owned: Vec<f64> = array.as_array().iter().copied().collect();
                    f(&owned)
                }
            };
        }
    }

    let owned: Vec<f64> = samples.extract()?;
    f(&owned)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Fibonacci value.
///
/// Only exact `int` objects are accepted; `bool`, `int` subclasses and
/// floats are rejected before any computation.
#[pyfunction]
#[pyo3(signature = (arg, /))]
fn fib(arg: &Bound<'_, PyAny>) -> PyResult<i64> {
    if !arg.is_exact_instance_of::<PyInt>() {
        tracing::warn!(argument = %arg, "cFibo.fib rejected a non-integer argument");
        return Err(fibstat_to_py_error(FibstatError::InvalidArgument(
            NOT_AN_INTEGER.to_string(),
        )));
    }

    let ordinal: i64 = arg.extract()?;
    tracing::debug!(ordinal, "cFibo.fib");

    ::fibstat::prelude::fib(ordinal).map_err(fibstat_to_py_error)
}

/// Standard deviation of a 1-D sequence of numbers.
///
/// Accepts numpy arrays (any stride or numeric dtype), lists and tuples.
/// `ddof=0` (default) divides by `n`; `ddof=1` divides by `n - 1`.
#[pyfunction]
#[pyo3(signature = (samples, ddof = 0))]
fn std_dev(samples: &Bound<'_, PyAny>, ddof: usize) -> PyResult<f64> {
    let estimator = StdDev::new()
        .method(parse_ddof(ddof)?)
        .build()
        .map_err(fibstat_to_py_error)?;

    with_samples(samples, |slice| {
        tracing::debug!(n = slice.len(), ddof, "cFibo.std_dev");
        estimator.compute(slice).map_err(|e| {
            tracing::warn!(error = %e, "cFibo.std_dev rejected its input");
            fibstat_to_py_error(e)
        })
    })
}

// ============================================================================
// Module Registration
// ============================================================================

/// Fibonacci in Rust.
#[pymodule]
fn cFibo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fib, m)?)?;
    m.add_function(wrap_pyfunction!(std_dev, m)?)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
