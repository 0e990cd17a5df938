//! Command-line arguments

use crate::filters::band::{Band, Curve};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Remove or attenuate frequency bands from a mono WAV file
#[derive(Parser, Debug)]
#[command(name = "bandcut", version, long_about = None)]
pub struct Cli {
    /// Input file (mono .wav)
    #[arg(value_parser = parse_wav_path)]
    pub input: PathBuf,

    /// Output file (.wav)
    #[arg(short, long, default_value = "out.wav", value_parser = parse_wav_path)]
    pub output: PathBuf,

    /// Band to cut as LOW_FREQ:LOW_GAIN:HIGH_FREQ:HIGH_GAIN, repeatable.
    /// Prompts interactively when omitted
    #[arg(short, long = "band", value_parser = parse_band)]
    pub bands: Vec<Band>,

    /// Roll-off width in Hz on each side of every band
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub roll: i64,

    /// Interpolate band gains linearly instead of logarithmically
    #[arg(long, default_value_t = false)]
    pub linear: bool,

    /// Log transform sizes, bin ranges and per-band attenuation
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Curve selected by the flags
    pub fn curve(&self) -> Curve {
        if self.linear {
            Curve::Linear
        } else {
            Curve::Logarithmic
        }
    }
}

/// Parse `LOW_FREQ:LOW_GAIN:HIGH_FREQ:HIGH_GAIN`
pub fn parse_band(s: &str) -> Result<Band, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let [freq1, gain1, freq2, gain2] = parts[..] else {
        return Err(format!(
            "Invalid band '{}'. Use LOW_FREQ:LOW_GAIN:HIGH_FREQ:HIGH_GAIN, e.g. 1000:0:2000:0.5",
            s
        ));
    };

    let freq = |v: &str| {
        v.parse::<u32>()
            .map_err(|_| format!("Invalid frequency '{}' in band '{}'", v, s))
    };
    let gain = |v: &str| {
        v.parse::<f64>()
            .map_err(|_| format!("Invalid gain '{}' in band '{}'", v, s))
    };

    Ok(Band::new(freq(freq1)?, freq(freq2)?, gain(gain1)?, gain(gain2)?))
}

/// Accept only paths with a `.wav` extension
fn parse_wav_path(s: &str) -> Result<PathBuf, String> {
    let is_wav = Path::new(s)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));

    if is_wav {
        Ok(PathBuf::from(s))
    } else {
        Err(format!("'{}' is not a .wav file", s))
    }
}
