use anyhow::Result;
use clap::Parser;

use pargz::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
