//! Python bindings for the forward and inverse transforms

use crate::spectrum::fft;
use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Forward FFT of a real signal, zero-padded to a power of two
///
/// Args:
///     samples: Real signal as numpy array
///
/// Returns:
///     Complex spectrum as numpy array
#[pyfunction]
pub fn forward_transform<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let spectrum = fft::forward_transform(samples.as_slice()?);
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Inverse FFT back to a real signal
///
/// Args:
///     spectrum: Complex spectrum, length must be a power of two
///
/// Returns:
///     Real signal as numpy array (still padded)
///
/// Raises:
///     ValueError: if the length is not a power of two
#[pyfunction]
pub fn inverse_transform<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<f64>> {
    let samples = fft::inverse_transform(spectrum.as_slice()?.to_vec())?;
    Ok(PyArray1::from_vec(py, samples))
}
