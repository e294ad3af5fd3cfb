mod cli;
mod logging;
mod preview;

use cerbicon_data::{SPLASH, ScreenImage, render};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};

use crate::{
    cli::Cli,
    logging::{LoggingConfig, init_logging},
    preview::{describe_mismatch, render_preview},
};

/// Upper bound on mismatching cells listed before the report is cut short.
const MAX_REPORTED_MISMATCHES: usize = 20;

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config).wrap_err("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "cerbicon-logo starting up"
    );

    let cli = Cli::parse();
    cli.validate()?;
    cli.print_summary(SPLASH.len());

    let canvas = render(SPLASH).wrap_err("Failed to render splash screen")?;
    let image = ScreenImage::from_canvas(&canvas);
    tracing::debug!(ops = SPLASH.len(), bytes = image.as_bytes().len(), "splash rendered");

    if cli.preview {
        print!("\n{}", render_preview(&image));
    }

    if let Some(reference) = &cli.verify {
        verify_against(&image, reference)?;
    }

    if cli.dry_run {
        tracing::info!("dry run, skipping image output");
        return Ok(());
    }

    image
        .save(&cli.output)
        .wrap_err_with(|| format!("Failed to write splash image to '{}'", cli.output.display()))?;

    tracing::info!(
        path = %cli.output.display(),
        bytes = ScreenImage::LEN,
        "splash image written"
    );
    println!(
        "\nSplash image written: {} ({} bytes)",
        cli.output.display(),
        ScreenImage::LEN
    );

    Ok(())
}

fn verify_against(image: &ScreenImage, reference_path: &std::path::Path) -> Result<()> {
    println!("\n🔍 Verifying against {}...", reference_path.display());

    let reference = ScreenImage::load(reference_path)
        .wrap_err_with(|| format!("Failed to load reference image '{}'", reference_path.display()))?;

    let mismatches = reference.diff(image);
    if mismatches.is_empty() {
        tracing::info!(reference = %reference_path.display(), "verification passed");
        println!("✅ All {} cells match", ScreenImage::LEN);
        return Ok(());
    }

    tracing::warn!(
        reference = %reference_path.display(),
        mismatches = mismatches.len(),
        "verification failed"
    );
    println!(
        "⚠️  {} of {} cells differ:",
        mismatches.len(),
        ScreenImage::LEN
    );
    for mismatch in mismatches.iter().take(MAX_REPORTED_MISMATCHES) {
        println!("    {}", describe_mismatch(mismatch));
    }
    if mismatches.len() > MAX_REPORTED_MISMATCHES {
        println!(
            "    ... and {} more",
            mismatches.len() - MAX_REPORTED_MISMATCHES
        );
    }

    Err(eyre!(
        "Rendered splash differs from '{}' in {} cells",
        reference_path.display(),
        mismatches.len()
    ))
}
