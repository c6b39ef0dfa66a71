use anyhow::Result;
use clap::Parser;

use outcode::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
