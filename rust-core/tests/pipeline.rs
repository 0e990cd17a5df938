//! Band cuts over whole signals, including the WAV round trip

use band_cut::audio::{read_mono, write_mono, AudioClip};
use band_cut::spectrum::{attenuation_db, forward_transform};
use band_cut::{filter_samples, Band, FilterError, FilterPipeline, PipelineConfig};
use hound::{SampleFormat, WavSpec};
use std::f64::consts::PI;

const SAMPLE_RATE: u32 = 8192;

fn tone(freq: f64, amplitude: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| amplitude * (2.0 * PI * freq * n as f64 / f64::from(SAMPLE_RATE)).sin())
        .collect()
}

fn mix(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

#[test]
fn wav_file_band_removed() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.wav");
    let output_path = dir.path().join("out.wav");

    let keep = tone(440.0, 0.4, 8192);
    let hum = tone(3000.0, 0.4, 8192);
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    write_mono(&input_path, &AudioClip { samples: mix(&keep, &hum), spec }).unwrap();

    let clip = read_mono(&input_path).unwrap();
    let pipeline = FilterPipeline::new(
        PipelineConfig::with_bands(vec![Band::new(2500, 3500, 0.0, 0.0)]),
        clip.sample_rate(),
    )
    .unwrap();
    let filtered = pipeline.process(&clip.samples).unwrap();
    write_mono(&output_path, &clip.with_samples(filtered)).unwrap();

    let result = read_mono(&output_path).unwrap();
    assert_eq!(result.samples.len(), 8192);
    assert_eq!(result.spec, spec);

    // Two rounds of 16-bit quantisation
    for (x, y) in result.samples.iter().zip(keep.iter()) {
        assert!((x - y).abs() < 3.0 / 32768.0);
    }
}

#[test]
fn full_cut_silences_band() {
    let signal = mix(&tone(500.0, 0.5, 10000), &tone(2000.0, 0.5, 10000));
    let filtered = filter_samples(&signal, SAMPLE_RATE, &[Band::new(1000, 3000, 0.0, 0.0)], 200).unwrap();

    let before = forward_transform(&signal);
    let after = forward_transform(&filtered);

    // Padding to 16384 spreads the tone, but the band itself is emptied
    assert!(attenuation_db(&before, &after, SAMPLE_RATE, 1800, 2200) < -30.0);
    assert!(attenuation_db(&before, &after, SAMPLE_RATE, 450, 550).abs() < 1.0);
}

#[test]
fn bands_apply_in_order_and_compound() {
    let signal = tone(1000.0, 1.0, 8192);
    let bands = [
        Band::new(900, 1100, 0.5, 0.5),
        Band::new(950, 1050, 0.5, 0.5),
    ];
    let filtered = filter_samples(&signal, SAMPLE_RATE, &bands, 0).unwrap();

    for (x, y) in filtered.iter().zip(signal.iter()) {
        assert!((x - 0.25 * y).abs() < 1e-9);
    }
}

#[test]
fn one_invalid_band_rejects_batch() {
    let bands = [
        Band::new(100, 200, 0.0, 0.0),
        Band::new(100, 200, 0.0, 1.5),
    ];
    let err = filter_samples(&[0.0; 16], SAMPLE_RATE, &bands, 0).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, FilterError::InvalidBand { index: 1, .. }));
}
