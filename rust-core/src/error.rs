//! Error types for the transform engine and spectral filter

use crate::filters::band::Band;
use thiserror::Error;

/// Errors raised by the spectral core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Spectrum length must be a power of two (found: {0})")]
    Length(usize),

    #[error("Band #{index} ({band}) rejected: {reason}")]
    InvalidBand {
        index: usize,
        band: Band,
        reason: BandViolation,
    },

    #[error("Roll-off amount must be non-negative (found: {0})")]
    NegativeRollOff(i64),
}

impl FilterError {
    /// True for band or roll-off constraint violations
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidBand { .. } | FilterError::NegativeRollOff(_)
        )
    }
}

/// The constraint a band failed
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BandViolation {
    #[error("frequency {freq} Hz is above the Nyquist frequency ({nyquist} Hz)")]
    FrequencyAboveNyquist { freq: u32, nyquist: u32 },

    #[error("low frequency must be below high frequency")]
    FrequencyOrder,

    #[error("gain {gain} is outside [0, 1]")]
    GainOutOfRange { gain: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_grouping() {
        assert!(!FilterError::Length(1000).is_validation());
        assert!(FilterError::NegativeRollOff(-3).is_validation());

        let err = FilterError::InvalidBand {
            index: 2,
            band: Band::new(500, 400, 0.0, 0.0),
            reason: BandViolation::FrequencyOrder,
        };
        assert!(err.is_validation());
    }

    #[test]
    fn test_messages_name_the_band() {
        let err = FilterError::InvalidBand {
            index: 0,
            band: Band::new(100, 30000, 0.5, 0.5),
            reason: BandViolation::FrequencyAboveNyquist {
                freq: 30000,
                nyquist: 22050,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("#0"));
        assert!(msg.contains("30000"));
        assert!(msg.contains("22050"));
    }
}
