//! PyO3 bindings for Python integration

use crate::error::FilterError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod band_bindings;
mod transform_bindings;

impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
#[pyo3(name = "band_cut")]
fn band_cut_module(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<band_bindings::PyBand>()?;

    m.add_function(wrap_pyfunction!(transform_bindings::forward_transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::inverse_transform, m)?)?;
    m.add_function(wrap_pyfunction!(band_bindings::band_cut, m)?)?;
    m.add_function(wrap_pyfunction!(band_bindings::filter_samples, m)?)?;

    Ok(())
}
