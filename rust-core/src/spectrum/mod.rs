//! Spectral transforms and measurements

pub mod fft;
pub mod analysis;

pub use fft::{forward_transform, inverse_transform, padded_len};
pub use analysis::{attenuation_db, band_energy};
