use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: aqi-synth-{YYMMDD}.{ext}
pub fn generate_default_output_filename(extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "aqi-synth-{:02}{:02}{:02}.{}",
        year, month, day, extension
    );
    PathBuf::from("output").join(filename)
}
