use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photofx::{codec, Padding, Pipeline, PipelineConfig, UnknownFilterPolicy};

#[derive(Parser)]
#[command(name = "photofx", version, about = "Apply a photo filter to an image file")]
struct Cli {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Where to write the result
    output: PathBuf,

    /// grayscale, sepia, invert, blur, sharpen, brightness, edges or emboss
    #[arg(short, long, default_value = "grayscale")]
    filter: String,

    /// Brightness factor for the brightness filter, clamped to 0-2
    #[arg(long)]
    brightness: Option<f32>,

    /// Contrast factor for the brightness filter, clamped to 0-2
    #[arg(long)]
    contrast: Option<f32>,

    /// Fail on unknown filters instead of copying the input
    #[arg(long)]
    strict: bool,

    /// Zero-pad the edge detector's convolution instead of replicating borders
    #[arg(long)]
    zero_padding: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photofx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let config = PipelineConfig {
        unknown_filter: if cli.strict {
            UnknownFilterPolicy::Reject
        } else {
            UnknownFilterPolicy::Passthrough
        },
        edge_padding: if cli.zero_padding { Padding::Zero } else { Padding::Replicate },
    };

    let input = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let output = Pipeline::new(config)
        .run(&input, &cli.filter, cli.brightness, cli.contrast)
        .with_context(|| format!("filter '{}' failed on {}", cli.filter, cli.input.display()))?;

    std::fs::write(&cli.output, &output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        filter = %cli.filter,
        output = %cli.output.display(),
        bytes = output.len(),
        content_type = codec::content_type(&output),
        "Wrote filtered image"
    );

    Ok(())
}
