use clap::Parser;
use miette::Result;
use duck_assets::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    duck_assets::cli::generate::run(cli.args)?;

    Ok(())
}
