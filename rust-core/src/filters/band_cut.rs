//! Frequency-domain band cut
//!
//! Scales the bins of a spectrum that fall inside a band, together with
//! their conjugate mirrors above Nyquist, so a spectrum of a real signal
//! stays conjugate-symmetric.

use super::band::{validate_request, Band, Curve};
use crate::error::FilterError;
use num_complex::Complex64;
use std::f64::consts::E;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Bin index of a frequency: floor(freq * N / sample_rate)
pub fn bin_of(freq: u32, sample_rate: u32, size: usize) -> usize {
    (u64::from(freq) * size as u64 / u64::from(sample_rate)) as usize
}

/// Gain at `pos` on a curve from (`start`, `gain1`) to (`end`, `gain2`)
///
/// Positions may be bins or frequencies. A zero-width span returns `gain1`;
/// callers skip degenerate bands before getting here.
pub fn interpolate(pos: f64, start: f64, end: f64, gain1: f64, gain2: f64, curve: Curve) -> f64 {
    if end == start {
        return gain1;
    }

    let ratio = (pos - start) / (end - start);
    let shaped = match curve {
        Curve::Linear => ratio,
        Curve::Logarithmic => (1.0 + ratio * (E - 1.0)).ln(),
    };

    gain1 + (gain2 - gain1) * shaped
}

/// Gain curve between two bins
#[derive(Debug, Clone, Copy)]
struct Ramp {
    start: usize,
    end: usize,
    gain1: f64,
    gain2: f64,
    curve: Curve,
}

impl Ramp {
    fn gain_at(&self, bin: usize) -> f64 {
        interpolate(
            bin as f64,
            self.start as f64,
            self.end as f64,
            self.gain1,
            self.gain2,
            self.curve,
        )
    }
}

/// Scale `bins` and their mirrors along `ramp`
///
/// Each bin and its mirror get the same gain in one step. Bins that are
/// their own mirror (DC, and Nyquist for even N) are scaled once.
fn apply_ramp(spectrum: &mut [Complex64], ramp: &Ramp, bins: RangeInclusive<usize>) {
    let size = spectrum.len();

    for bin in bins {
        let gain = ramp.gain_at(bin);
        spectrum[bin] *= gain;

        let mirror = (size - bin) % size;
        if mirror != bin {
            spectrum[mirror] *= gain;
        }
    }
}

/// Scale a band of the spectrum along `curve`
///
/// Does not validate the band. Degenerate bands, where both edges land on
/// the same bin, are skipped.
pub fn remove_band(spectrum: &mut [Complex64], sample_rate: u32, band: &Band, curve: Curve) {
    if band.freq1 == band.freq2 || spectrum.is_empty() {
        return;
    }

    let size = spectrum.len();
    let bin1 = bin_of(band.freq1, sample_rate, size);
    let bin2 = bin_of(band.freq2, sample_rate, size);

    if bin1 == bin2 {
        warn!(%band, bin = bin1, "band narrower than one bin, skipping");
        return;
    }

    debug!(%band, bin1, bin2, ?curve, "scaling band");

    let ramp = Ramp {
        start: bin1,
        end: bin2,
        gain1: band.gain1,
        gain2: band.gain2,
        curve,
    };
    apply_ramp(spectrum, &ramp, bin1..=bin2);
}

/// Linear gain ramps just outside both edges of a band
///
/// Below the band the gain goes from 1 at `freq1 - roll_amount` to `gain1`;
/// above it from `gain2` to 1 at `freq2 + roll_amount`. A ramp that would
/// cross 0 Hz or Nyquist is cut there, keeping its slope. The band's own
/// bins are left alone.
pub fn roll_off(spectrum: &mut [Complex64], sample_rate: u32, band: &Band, roll_amount: u32) {
    if roll_amount == 0 || spectrum.is_empty() || band.freq1 >= band.freq2 {
        return;
    }

    let size = spectrum.len();
    let nyquist = sample_rate / 2;
    let bin1 = bin_of(band.freq1, sample_rate, size);
    let bin2 = bin_of(band.freq2, sample_rate, size);

    let low_start = i64::from(band.freq1) - i64::from(roll_amount);
    let (low_freq, low_gain) = if low_start < 0 {
        let gain = interpolate(
            0.0,
            low_start as f64,
            f64::from(band.freq1),
            1.0,
            band.gain1,
            Curve::Linear,
        );
        (0, gain)
    } else {
        (low_start as u32, 1.0)
    };

    let low_bin = bin_of(low_freq, sample_rate, size);
    if low_bin < bin1 {
        let ramp = Ramp {
            start: low_bin,
            end: bin1,
            gain1: low_gain,
            gain2: band.gain1,
            curve: Curve::Linear,
        };
        debug!(from = low_bin, to = bin1 - 1, start_gain = low_gain, "low roll-off");
        apply_ramp(spectrum, &ramp, low_bin..=bin1 - 1);
    }

    let high_end = u64::from(band.freq2) + u64::from(roll_amount);
    let (high_freq, high_gain) = if high_end > u64::from(nyquist) {
        let gain = interpolate(
            f64::from(nyquist),
            f64::from(band.freq2),
            high_end as f64,
            band.gain2,
            1.0,
            Curve::Linear,
        );
        (nyquist, gain)
    } else {
        (high_end as u32, 1.0)
    };

    let high_bin = bin_of(high_freq, sample_rate, size);
    if high_bin > bin2 {
        let ramp = Ramp {
            start: bin2,
            end: high_bin,
            gain1: band.gain2,
            gain2: high_gain,
            curve: Curve::Linear,
        };
        debug!(from = bin2 + 1, to = high_bin, end_gain = high_gain, "high roll-off");
        apply_ramp(spectrum, &ramp, bin2 + 1..=high_bin);
    }
}

/// Scale a band and smooth its edges, without validation
pub(crate) fn apply_band_cut(spectrum: &mut [Complex64], sample_rate: u32, band: &Band, roll_amount: u32) {
    remove_band(spectrum, sample_rate, band, band.curve);
    roll_off(spectrum, sample_rate, band, roll_amount);
}

/// Cut a band out of a spectrum in place
///
/// Applies the band along its curve, then linear roll-off ramps of
/// `roll_amount` Hz on each side.
///
/// # Errors
/// A validation error if the band or the roll-off amount is out of range;
/// the spectrum is untouched in that case
pub fn band_cut(
    spectrum: &mut [Complex64],
    sample_rate: u32,
    band: &Band,
    roll_amount: i64,
) -> Result<(), FilterError> {
    let roll_amount = validate_request(std::slice::from_ref(band), sample_rate, roll_amount)?;
    apply_band_cut(spectrum, sample_rate, band, roll_amount);
    Ok(())
}
