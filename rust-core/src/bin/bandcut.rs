//! bandcut - remove frequency bands from a mono WAV file

use anyhow::Context;
use band_cut::audio::{read_mono, write_mono};
use band_cut::cli::{Cli, Prompt};
use band_cut::pipeline::{FilterPipeline, PipelineConfig};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "bandcut=debug,band_cut=debug"
    } else {
        "bandcut=info,band_cut=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let clip = read_mono(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    info!(
        path = %cli.input.display(),
        sample_rate = clip.sample_rate(),
        bits = clip.spec.bits_per_sample,
        seconds = clip.duration_secs(),
        "loaded"
    );

    let bands = if cli.bands.is_empty() {
        let stdin = io::stdin();
        Prompt::new(stdin.lock(), io::stdout())
            .collect_bands(clip.sample_rate())
            .context("failed to read bands")?
    } else {
        cli.bands.clone()
    };

    let curve = cli.curve();
    let config = PipelineConfig {
        bands: bands.into_iter().map(|b| b.with_curve(curve)).collect(),
        roll_off: cli.roll,
    };

    let pipeline = FilterPipeline::new(config, clip.sample_rate()).context("invalid band request")?;
    if pipeline.bands().is_empty() {
        info!("no bands given, writing the input unchanged");
    }

    let filtered = pipeline.process(&clip.samples)?;
    write_mono(&cli.output, &clip.with_samples(filtered))
        .with_context(|| format!("cannot write {}", cli.output.display()))?;

    info!(path = %cli.output.display(), "written");
    Ok(())
}
