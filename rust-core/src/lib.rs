//! Band Cut - FFT Band Filter Core
//!
//! Removes or attenuates frequency bands from a mono signal: radix-2 FFT,
//! per-bin band gains with mirrored bins and roll-off, and the pipeline
//! tying them together. Optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod audio;
pub mod cli;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{BandViolation, FilterError};
pub use filters::{band_cut, Band, Curve};
pub use pipeline::{filter_samples, FilterPipeline, PipelineConfig};
pub use spectrum::{forward_transform, inverse_transform};
