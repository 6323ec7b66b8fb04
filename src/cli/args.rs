use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_HOURS;

#[derive(Parser)]
#[command(name = "aqi-synth")]
#[command(about = "Synthetic hourly air-quality dataset generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress the progress spinner")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic dataset and write it to disk
    Generate {
        #[arg(
            short = 'n',
            long,
            default_value_t = DEFAULT_HOURS,
            help = "Hours to generate per location (the dashboard uses 24-168)"
        )]
        hours: u32,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/aqi-synth-{YYMMDD}.{format}]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, default_value = "csv", help = "Output format: csv, parquet or json")]
        format: String,

        #[arg(short, long, default_value = "snappy", help = "Parquet compression codec")]
        compression: String,

        #[arg(short, long, help = "Seed the random source for reproducible output")]
        seed: Option<u64>,
    },

    /// Generate a dataset in memory and print its statistics
    Summary {
        #[arg(short = 'n', long, default_value_t = DEFAULT_HOURS)]
        hours: u32,

        #[arg(short, long)]
        seed: Option<u64>,
    },
}
