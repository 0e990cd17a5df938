//! Whole-signal filter pipeline
//!
//! samples -> padded spectrum -> band cuts in order -> inverse -> samples,
//! truncated back to the input length

use crate::error::FilterError;
use crate::filters::band::{validate_request, Band};
use crate::filters::band_cut::apply_band_cut;
use crate::spectrum::analysis::attenuation_db;
use crate::spectrum::fft::{forward_transform, inverse_transform};
use tracing::{debug, info, Level};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Bands to cut, applied in order
    pub bands: Vec<Band>,

    /// Roll-off width in Hz on each side of every band
    pub roll_off: i64,
}

impl PipelineConfig {
    /// Configuration with the given bands and no roll-off
    pub fn with_bands(bands: Vec<Band>) -> Self {
        Self { bands, roll_off: 0 }
    }
}

/// A validated set of band cuts for one sample rate
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    sample_rate: u32,
    bands: Vec<Band>,
    roll_off: u32,
}

impl FilterPipeline {
    /// Validate a configuration against a sample rate
    ///
    /// # Errors
    /// The first band or roll-off violation; nothing is built from a
    /// batch that holds an invalid band
    pub fn new(config: PipelineConfig, sample_rate: u32) -> Result<Self, FilterError> {
        let roll_off = validate_request(&config.bands, sample_rate, config.roll_off)?;

        Ok(Self {
            sample_rate,
            bands: config.bands,
            roll_off,
        })
    }

    /// Filter a whole signal
    ///
    /// Later bands multiply onto the result of earlier ones. The output has
    /// the same length as `samples`; an empty input gives an empty output.
    pub fn process(&self, samples: &[f64]) -> Result<Vec<f64>, FilterError> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let mut spectrum = forward_transform(samples);
        info!(
            samples = samples.len(),
            padded = spectrum.len(),
            bands = self.bands.len(),
            roll_off = self.roll_off,
            "filtering"
        );

        let original = tracing::enabled!(Level::DEBUG).then(|| spectrum.clone());

        for band in &self.bands {
            apply_band_cut(&mut spectrum, self.sample_rate, band, self.roll_off);

            if let Some(original) = &original {
                let db = attenuation_db(original, &spectrum, self.sample_rate, band.freq1, band.freq2);
                debug!(%band, attenuation_db = db, "band applied");
            }
        }

        let mut output = inverse_transform(spectrum)?;
        output.truncate(samples.len());

        Ok(output)
    }

    /// Sample rate the bands were validated against
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bands in application order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Roll-off width in Hz
    pub fn roll_off(&self) -> u32 {
        self.roll_off
    }
}

/// Validate and run a band cut over a whole signal in one call
pub fn filter_samples(
    samples: &[f64],
    sample_rate: u32,
    bands: &[Band],
    roll_off: i64,
) -> Result<Vec<f64>, FilterError> {
    let config = PipelineConfig {
        bands: bands.to_vec(),
        roll_off,
    };
    FilterPipeline::new(config, sample_rate)?.process(samples)
}
