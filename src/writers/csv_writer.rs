use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{AqiRecord, Pollutant};

/// Writes the generated table as CSV with the column labels the dashboard
/// expects. Null AQI values become empty fields.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_records(&self, records: &[AqiRecord], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec![
            "timestamp".to_string(),
            "city".to_string(),
            "latitude".to_string(),
            "longitude".to_string(),
        ];
        for pollutant in Pollutant::ALL {
            header.push(pollutant.column_label().to_string());
        }
        for pollutant in Pollutant::ALL {
            header.push(pollutant.aqi_column_label().to_string());
        }
        writer.write_record(&header)?;

        for record in records {
            let mut row = vec![
                record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                record.city.clone(),
                record.latitude.to_string(),
                record.longitude.to_string(),
            ];
            for pollutant in Pollutant::ALL {
                row.push(format_concentration(
                    record.concentration(pollutant),
                    pollutant,
                ));
            }
            for pollutant in Pollutant::ALL {
                row.push(
                    record
                        .aqi(pollutant)
                        .map(|aqi| aqi.to_string())
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&row)?;
        }

        writer.flush()?;
        debug!(rows = records.len(), path = %path.display(), "wrote CSV dataset");
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a concentration with its pollutant's fixed precision, so 12.0
/// stays "12.0" rather than "12".
fn format_concentration(value: f64, pollutant: Pollutant) -> String {
    format!("{:.*}", pollutant.decimals() as usize, value)
}
