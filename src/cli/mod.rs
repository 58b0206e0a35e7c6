pub mod generate;

use clap::Parser;

/// duck-assets - Procedural art for the Darkwing Duck game
#[derive(Parser, Debug)]
#[command(name = "duck-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: generate::GenerateArgs,
}
