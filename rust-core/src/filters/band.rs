//! Band requests and their validation

use crate::error::{BandViolation, FilterError};
use std::fmt;

/// Gain interpolation curve across a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// gain1 + (gain2 - gain1) * ratio
    Linear,

    /// gain1 + (gain2 - gain1) * ln(1 + ratio * (e - 1))
    /// Same endpoints as linear, rises faster near the low edge
    #[default]
    Logarithmic,
}

/// A request to scale a frequency band
///
/// `gain1` applies at `freq1`, `gain2` at `freq2`, and bins in between
/// follow `curve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Low edge in Hz
    pub freq1: u32,

    /// High edge in Hz
    pub freq2: u32,

    /// Gain at the low edge (0 to 1)
    pub gain1: f64,

    /// Gain at the high edge (0 to 1)
    pub gain2: f64,

    /// Interpolation curve between the edges
    pub curve: Curve,
}

impl Band {
    /// Create a band with the default logarithmic curve
    pub fn new(freq1: u32, freq2: u32, gain1: f64, gain2: f64) -> Self {
        Self {
            freq1,
            freq2,
            gain1,
            gain2,
            curve: Curve::default(),
        }
    }

    /// Same band with a different curve
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Check this band against a sample rate
    pub fn validate(&self, sample_rate: u32) -> Result<(), BandViolation> {
        let nyquist = sample_rate / 2;

        for freq in [self.freq1, self.freq2] {
            if freq > nyquist {
                return Err(BandViolation::FrequencyAboveNyquist { freq, nyquist });
            }
        }

        if self.freq1 >= self.freq2 {
            return Err(BandViolation::FrequencyOrder);
        }

        for gain in [self.gain1, self.gain2] {
            if !(0.0..=1.0).contains(&gain) {
                return Err(BandViolation::GainOutOfRange { gain });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz @ {} .. {} Hz @ {}",
            self.freq1, self.gain1, self.freq2, self.gain2
        )
    }
}

/// Validate a whole batch of bands plus the roll-off amount
///
/// Fails on the first violation so nothing is applied from a batch that
/// holds an invalid band. Returns the roll-off amount as an unsigned count.
pub fn validate_request(bands: &[Band], sample_rate: u32, roll_off: i64) -> Result<u32, FilterError> {
    for (index, band) in bands.iter().enumerate() {
        band.validate(sample_rate)
            .map_err(|reason| FilterError::InvalidBand {
                index,
                band: *band,
                reason,
            })?;
    }

    if roll_off < 0 {
        return Err(FilterError::NegativeRollOff(roll_off));
    }

    Ok(u32::try_from(roll_off).unwrap_or(u32::MAX))
}
