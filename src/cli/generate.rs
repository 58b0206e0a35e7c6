//! Generate command implementation.
//!
//! Renders every catalog asset and writes the PNGs to the output directory.

use std::path::PathBuf;

use clap::Args;

use crate::assets::{generate_all, GenerationReport, CATALOG};
use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};

/// Generate all game art
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(long, short, default_value = "assets")]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();
    let report = execute(&args, &printer)?;

    println!(
        "Generated {} to {}",
        plural(report.written.len(), "asset", "assets"),
        args.output.display()
    );

    if report.is_success() {
        return Ok(());
    }

    let names: Vec<&str> = report.failures.iter().map(|f| f.name).collect();
    Err(AssetError::Build {
        message: format!("{} failed", plural(report.failures.len(), "asset", "assets")),
        help: Some(format!(
            "Check that {} is writable: {}",
            display_path(&args.output),
            names.join(", ")
        )),
    })
}

fn execute(args: &GenerateArgs, printer: &Printer) -> Result<GenerationReport> {
    printer.info(
        "Generating",
        &format!(
            "{} into {}",
            plural(CATALOG.len(), "asset", "assets"),
            display_path(&args.output)
        ),
    );
    generate_all(&args.output, printer)
}
