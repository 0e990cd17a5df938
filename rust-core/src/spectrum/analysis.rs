//! Spectrum measurements
//!
//! Energy in a frequency range and the attenuation a filter achieved there,
//! used for reporting what a band cut did

use crate::filters::band_cut::bin_of;
use num_complex::Complex64;

/// Centre frequency of a bin in Hz
pub fn bin_to_hz(bin: usize, sample_rate: u32, size: usize) -> f64 {
    bin as f64 * f64::from(sample_rate) / size as f64
}

/// Energy (sum of |X[k]|^2) of the positive-frequency bins in
/// `[freq1, freq2]`
pub fn band_energy(spectrum: &[Complex64], sample_rate: u32, freq1: u32, freq2: u32) -> f64 {
    if spectrum.is_empty() {
        return 0.0;
    }

    let size = spectrum.len();
    let bin1 = bin_of(freq1, sample_rate, size).min(size - 1);
    let bin2 = bin_of(freq2, sample_rate, size).min(size - 1);

    spectrum[bin1..=bin2.max(bin1)]
        .iter()
        .map(|c| c.norm_sqr())
        .sum()
}

/// Change in band energy from `before` to `after`, in dB
///
/// Negative when the band lost energy. Silent bands are clamped so the
/// result stays finite.
pub fn attenuation_db(
    before: &[Complex64],
    after: &[Complex64],
    sample_rate: u32,
    freq1: u32,
    freq2: u32,
) -> f64 {
    let e_before = band_energy(before, sample_rate, freq1, freq2).max(1e-20);
    let e_after = band_energy(after, sample_rate, freq1, freq2).max(1e-20);
    10.0 * (e_after / e_before).log10()
}
