use aqi_synth::cli::{run, Cli};
use aqi_synth::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
