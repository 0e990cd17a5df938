//! Band requests and the frequency-domain band cut

pub mod band;
pub mod band_cut;

pub use band::{validate_request, Band, Curve};
pub use band_cut::{band_cut, bin_of, interpolate, remove_band, roll_off};
