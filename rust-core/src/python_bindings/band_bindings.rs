//! Python bindings for band requests and band cutting

use crate::filters::{self, Band, Curve};
use crate::pipeline;
use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::prelude::*;

/// Band request exposed to Python
#[pyclass(name = "Band")]
#[derive(Clone)]
pub struct PyBand {
    band: Band,
}

#[pymethods]
impl PyBand {
    /// Create a band request
    ///
    /// Args:
    ///     freq1: Low edge in Hz
    ///     freq2: High edge in Hz
    ///     gain1: Gain at the low edge (0 to 1)
    ///     gain2: Gain at the high edge (0 to 1)
    ///     linear: Interpolate linearly instead of logarithmically
    #[new]
    #[pyo3(signature = (freq1, freq2, gain1, gain2, linear=false))]
    fn new(freq1: u32, freq2: u32, gain1: f64, gain2: f64, linear: bool) -> Self {
        let curve = if linear { Curve::Linear } else { Curve::Logarithmic };
        Self {
            band: Band::new(freq1, freq2, gain1, gain2).with_curve(curve),
        }
    }

    #[getter]
    fn freq1(&self) -> u32 {
        self.band.freq1
    }

    #[getter]
    fn freq2(&self) -> u32 {
        self.band.freq2
    }

    #[getter]
    fn gain1(&self) -> f64 {
        self.band.gain1
    }

    #[getter]
    fn gain2(&self) -> f64 {
        self.band.gain2
    }

    fn __repr__(&self) -> String {
        format!("Band({})", self.band)
    }
}

/// Cut a band out of a spectrum in place
///
/// Args:
///     spectrum: Complex spectrum (modified in place)
///     sample_rate: Sample rate in Hz
///     band: Band to cut
///     roll: Roll-off width in Hz (default: 0)
///
/// Raises:
///     ValueError: if the band or roll-off is out of range
#[pyfunction]
#[pyo3(signature = (spectrum, sample_rate, band, roll=0))]
pub fn band_cut(
    mut spectrum: PyReadwriteArray1<Complex64>,
    sample_rate: u32,
    band: PyBand,
    roll: i64,
) -> PyResult<()> {
    filters::band_cut(spectrum.as_slice_mut()?, sample_rate, &band.band, roll)?;
    Ok(())
}

/// Filter a whole signal through a list of bands
///
/// Args:
///     samples: Real signal as numpy array
///     sample_rate: Sample rate in Hz
///     bands: Bands to cut, applied in order
///     roll: Roll-off width in Hz (default: 0)
///
/// Returns:
///     Filtered signal, same length as the input
#[pyfunction]
#[pyo3(signature = (samples, sample_rate, bands, roll=0))]
pub fn filter_samples<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    sample_rate: u32,
    bands: Vec<PyBand>,
    roll: i64,
) -> PyResult<&'py PyArray1<f64>> {
    let bands: Vec<Band> = bands.into_iter().map(|b| b.band).collect();
    let output = pipeline::filter_samples(samples.as_slice()?, sample_rate, &bands, roll)?;
    Ok(PyArray1::from_vec(py, output))
}
