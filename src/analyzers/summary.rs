use chrono::NaiveDateTime;

use crate::error::Result;
use crate::models::{AqiRecord, Pollutant};

#[derive(Debug)]
pub struct DatasetStatistics {
    pub total_records: usize,
    pub time_range: (NaiveDateTime, NaiveDateTime),
    pub locations: Vec<LocationSummary>,
    pub pollutants: Vec<PollutantStatistics>,
}

/// Per-location aggregate feeding the dashboard's geo-scatter: the mean of
/// each row's worst AQI across the six pollutants.
#[derive(Debug)]
pub struct LocationSummary {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub records: usize,
    pub mean_max_aqi: f64,
}

#[derive(Debug)]
pub struct PollutantStatistics {
    pub pollutant: Pollutant,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, records: &[AqiRecord]) -> Result<DatasetStatistics> {
        if records.is_empty() {
            return Err(crate::error::SynthError::Config(
                "No records to summarize".to_string(),
            ));
        }

        let mut min_time = records[0].timestamp;
        let mut max_time = records[0].timestamp;
        let mut locations: Vec<LocationSummary> = Vec::new();

        for record in records {
            min_time = min_time.min(record.timestamp);
            max_time = max_time.max(record.timestamp);

            // Records arrive grouped by location, so first-seen order matches
            // the generator's declaration order.
            match locations.iter_mut().find(|l| l.city == record.city) {
                Some(summary) => {
                    summary.records += 1;
                    summary.mean_max_aqi += f64::from(record.max_aqi());
                }
                None => locations.push(LocationSummary {
                    city: record.city.clone(),
                    latitude: record.latitude,
                    longitude: record.longitude,
                    records: 1,
                    mean_max_aqi: f64::from(record.max_aqi()),
                }),
            }
        }

        for summary in &mut locations {
            summary.mean_max_aqi /= summary.records as f64;
        }

        let pollutants = Pollutant::ALL
            .iter()
            .map(|&pollutant| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                let mut sum = 0.0;
                for record in records {
                    let value = record.concentration(pollutant);
                    min = min.min(value);
                    max = max.max(value);
                    sum += value;
                }
                PollutantStatistics {
                    pollutant,
                    min,
                    mean: sum / records.len() as f64,
                    max,
                }
            })
            .collect();

        Ok(DatasetStatistics {
            total_records: records.len(),
            time_range: (min_time, max_time),
            locations,
            pollutants,
        })
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStatistics {
    pub fn detailed_summary(&self) -> String {
        let mut lines = vec![
            "Synthetic AQI Dataset Summary:".to_string(),
            format!("- Total records: {}", self.total_records),
            format!(
                "- Time range: {} to {}",
                self.time_range.0.format("%Y-%m-%d %H:%M"),
                self.time_range.1.format("%Y-%m-%d %H:%M")
            ),
            String::new(),
            "Mean peak AQI by location:".to_string(),
        ];

        for location in &self.locations {
            lines.push(format!(
                "  {:<12} ({:>8.4}, {:>9.4}): {:>6.1}",
                location.city, location.latitude, location.longitude, location.mean_max_aqi
            ));
        }

        lines.push(String::new());
        lines.push("Concentrations:".to_string());
        for stats in &self.pollutants {
            lines.push(format!(
                "  {:<14} min {:>8.3}, mean {:>8.3}, max {:>8.3}",
                stats.pollutant.column_label(),
                stats.min,
                stats.mean,
                stats.max
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::{Duration, NaiveDate};

    fn record(city: &str, hour_offset: i64, aqis: [Option<u16>; 6]) -> AqiRecord {
        let location = Location::new(city, 10.0, 20.0);
        let timestamp = NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::hours(hour_offset);
        AqiRecord::from_samples(&location, timestamp, [10.0, 20.0, 1.0, 30.0, 0.04, 15.0], aqis)
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let analyzer = DatasetAnalyzer::new();
        assert!(analyzer.summarize(&[]).is_err());
    }

    #[test]
    fn test_mean_max_aqi_per_location() {
        let records = vec![
            record("A", 0, [Some(100), Some(20), None, None, None, None]),
            record("A", 1, [Some(50), Some(200), None, None, None, None]),
            record("B", 0, [Some(10), None, None, None, None, None]),
        ];

        let stats = DatasetAnalyzer::new().summarize(&records).unwrap();
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.locations.len(), 2);

        // A: rows peak at 100 and 200, mean 150. B: single row peaking at 10.
        assert_eq!(stats.locations[0].city, "A");
        assert_eq!(stats.locations[0].records, 2);
        assert!((stats.locations[0].mean_max_aqi - 150.0).abs() < 1e-9);
        assert_eq!(stats.locations[1].city, "B");
        assert!((stats.locations[1].mean_max_aqi - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_null_rows_aggregate_to_zero() {
        let records = vec![record("A", 0, [None; 6])];
        let stats = DatasetAnalyzer::new().summarize(&records).unwrap();
        assert_eq!(stats.locations[0].mean_max_aqi, 0.0);
    }

    #[test]
    fn test_time_range_spans_all_records() {
        let records = vec![
            record("A", 3, [None; 6]),
            record("A", 0, [None; 6]),
            record("A", 7, [None; 6]),
        ];
        let stats = DatasetAnalyzer::new().summarize(&records).unwrap();
        assert_eq!(
            stats.time_range.1 - stats.time_range.0,
            Duration::hours(7)
        );
    }

    #[test]
    fn test_pollutant_statistics_cover_all_columns() {
        let records = vec![record("A", 0, [None; 6])];
        let stats = DatasetAnalyzer::new().summarize(&records).unwrap();
        assert_eq!(stats.pollutants.len(), 6);
        let pm25 = &stats.pollutants[0];
        assert_eq!(pm25.pollutant, Pollutant::Pm25);
        assert_eq!(pm25.min, 10.0);
        assert_eq!(pm25.max, 10.0);
    }
}
