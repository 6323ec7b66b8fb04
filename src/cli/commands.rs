use tracing::Level;

use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{Result, SynthError};
use crate::generator::SeriesGenerator;
use crate::models::AqiRecord;
use crate::utils::constants::DEFAULT_CHUNK_SIZE;
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, JsonWriter, ParquetWriter};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            hours,
            output,
            format,
            compression,
            seed,
        } => {
            let records = generate_series(hours, seed, cli.quiet)?;

            let output_path =
                output.unwrap_or_else(|| generate_default_output_filename(&format));
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            match format.as_str() {
                "csv" => CsvWriter::new().write_records(&records, &output_path)?,
                "json" => JsonWriter::new().write_records(&records, &output_path)?,
                "parquet" => {
                    let writer = ParquetWriter::new().with_compression(&compression)?;
                    writer.write_records_batched(&records, &output_path, DEFAULT_CHUNK_SIZE)?;

                    let file_info = writer.get_file_info(&output_path)?;
                    println!("\n{}", file_info.summary());
                }
                other => {
                    return Err(SynthError::Config(format!(
                        "Unsupported output format: {}",
                        other
                    )))
                }
            }

            print_statistics(&records)?;
            println!("\nDataset written to {}", output_path.display());
        }

        Commands::Summary { hours, seed } => {
            let records = generate_series(hours, seed, cli.quiet)?;
            print_statistics(&records)?;
        }
    }

    Ok(())
}

fn generate_series(hours: u32, seed: Option<u64>, quiet: bool) -> Result<Vec<AqiRecord>> {
    let mut generator = match seed {
        Some(seed) => SeriesGenerator::seeded(seed),
        None => SeriesGenerator::new(),
    };

    let progress = if quiet {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::spinner("Generating synthetic series...")
    };
    let records = generator.generate(hours)?;
    progress.finish_with_message(&format!("Generated {} records", records.len()));

    Ok(records)
}

fn print_statistics(records: &[AqiRecord]) -> Result<()> {
    let stats = DatasetAnalyzer::new().summarize(records)?;
    println!("\n{}", stats.detailed_summary());
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
