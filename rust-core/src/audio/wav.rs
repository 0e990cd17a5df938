//! Mono WAV reading and writing using hound
//!
//! Samples are normalised to [-1, 1] on read and converted back to the
//! file's own format on write, so a filtered clip keeps its bit depth.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Read, Seek, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to open audio file: {0}")]
    Open(String),

    #[error("Failed to read audio data: {0}")]
    Read(String),

    #[error("Failed to write audio data: {0}")]
    Write(String),

    #[error("Only mono audio is supported (found: {0} channels)")]
    NotMono(u16),

    #[error("Audio file contains no samples")]
    Empty,

    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// A mono signal and the WAV format it came from
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Samples in [-1, 1]
    pub samples: Vec<f64>,

    /// Format of the source file, reused when writing
    pub spec: WavSpec,
}

impl AudioClip {
    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    /// Same format with different samples
    pub fn with_samples(&self, samples: Vec<f64>) -> Self {
        Self {
            samples,
            spec: self.spec,
        }
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.spec.sample_rate)
    }
}

/// Full-scale value of a signed integer sample of `bits` bits
fn int_scale(bits: u16) -> f64 {
    (1i64 << (bits - 1)) as f64
}

fn decode<R: Read>(reader: WavReader<R>) -> Result<AudioClip, AudioError> {
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(AudioError::NotMono(spec.channels));
    }

    let samples: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::Read(e.to_string()))?,
        (SampleFormat::Int, bits @ 8..=32) => {
            let scale = int_scale(bits);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::Read(e.to_string()))?
        }
        (format, bits) => {
            return Err(AudioError::UnsupportedFormat(format!("{:?} {}-bit", format, bits)));
        }
    };

    if samples.is_empty() {
        return Err(AudioError::Empty);
    }

    Ok(AudioClip { samples, spec })
}

fn encode<W: Write + Seek>(mut writer: WavWriter<W>, clip: &AudioClip) -> Result<(), AudioError> {
    let write_err = |e: hound::Error| AudioError::Write(e.to_string());

    match (clip.spec.sample_format, clip.spec.bits_per_sample) {
        (SampleFormat::Float, 32) => {
            for &sample in &clip.samples {
                writer.write_sample(sample as f32).map_err(write_err)?;
            }
        }
        (SampleFormat::Int, bits @ 8..=32) => {
            let scale = int_scale(bits);
            for &sample in &clip.samples {
                let value = (sample.clamp(-1.0, 1.0) * scale).round().clamp(-scale, scale - 1.0);
                writer.write_sample(value as i32).map_err(write_err)?;
            }
        }
        (format, bits) => {
            return Err(AudioError::UnsupportedFormat(format!("{:?} {}-bit", format, bits)));
        }
    }

    writer.finalize().map_err(write_err)
}

/// Read a mono WAV file
///
/// # Errors
/// `NotMono` for multi-channel files, `Empty` when there is no sample data,
/// `UnsupportedFormat` for float formats other than 32-bit
pub fn read_mono(path: impl AsRef<Path>) -> Result<AudioClip, AudioError> {
    let reader = WavReader::open(path).map_err(|e| AudioError::Open(e.to_string()))?;
    decode(reader)
}

/// Read a mono WAV stream
pub fn read_mono_from<R: Read>(source: R) -> Result<AudioClip, AudioError> {
    let reader = WavReader::new(source).map_err(|e| AudioError::Open(e.to_string()))?;
    decode(reader)
}

/// Write a clip as a WAV file in the clip's own format
///
/// Samples outside [-1, 1] are clipped for integer formats.
pub fn write_mono(path: impl AsRef<Path>, clip: &AudioClip) -> Result<(), AudioError> {
    let writer = WavWriter::create(path, clip.spec).map_err(|e| AudioError::Open(e.to_string()))?;
    encode(writer, clip)
}

/// Write a clip to any seekable sink
pub fn write_mono_to<W: Write + Seek>(sink: W, clip: &AudioClip) -> Result<(), AudioError> {
    let writer = WavWriter::new(sink, clip.spec).map_err(|e| AudioError::Open(e.to_string()))?;
    encode(writer, clip)
}
