use std::path::PathBuf;

use clap::Parser;
use color_eyre::{Report, eyre::eyre};

#[derive(Parser, Debug)]
#[command(
    name = "cerbicon-logo",
    version,
    about = "Boot splash image generator for the Cerberus 2100",
    long_about = "Renders the Cerberus 2100 start-up logo into the raw 38-column character image displayed by the BIOS"
)]
pub struct Cli {
    /// Output image path
    #[arg(short = 'o', long, default_value = "cerbicon.img", value_name = "PATH")]
    pub output: PathBuf,

    /// Print the rendered screen to the terminal
    #[arg(short = 'p', long)]
    pub preview: bool,

    /// Compare the rendered screen against an existing image and fail on any difference
    #[arg(long, value_name = "PATH", value_parser = validate_file_exists)]
    pub verify: Option<PathBuf>,

    /// Render (and preview or verify) without writing the output image
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Validates the CLI arguments
    pub fn validate(&self) -> Result<(), Report> {
        if self.dry_run {
            return Ok(());
        }

        if self.output.as_os_str().is_empty() {
            return Err(eyre!("Output path must not be empty"));
        }

        if self.output.is_dir() {
            return Err(eyre!(
                "Output path '{}' is a directory",
                self.output.display()
            ));
        }

        Ok(())
    }

    /// Prints a summary of the configuration
    pub fn print_summary(&self, op_count: usize) {
        println!("Rendering Cerberus 2100 splash screen:");
        println!("  Draw operations: {op_count}");

        if self.dry_run {
            println!("  Output: (dry run, nothing written)");
        } else {
            println!("  Output: {}", self.output.display());
        }

        if let Some(reference) = &self.verify {
            println!("  Verify against: {}", reference.display());
        }
    }
}

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    match () {
        _ if !path.exists() => Err(format!("Input file does not exist: {s}")),
        _ if !path.is_file() => Err(format!("Path is not a file: {s}")),
        _ => Ok(path),
    }
}
