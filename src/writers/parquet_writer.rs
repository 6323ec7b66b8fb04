use crate::error::Result;
use crate::models::{AqiRecord, Pollutant};
use crate::utils::constants::DEFAULT_ROW_GROUP_SIZE;
use arrow::array::{ArrayRef, Float64Array, StringArray, TimestampMillisecondArray, UInt16Array};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel};
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct ParquetWriter {
    compression: Compression,
    row_group_size: usize,
}

impl ParquetWriter {
    pub fn new() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }

    pub fn with_compression(mut self, compression: &str) -> Result<Self> {
        self.compression = match compression.to_lowercase().as_str() {
            "snappy" => Compression::SNAPPY,
            "gzip" => Compression::GZIP(GzipLevel::default()),
            "lz4" => Compression::LZ4,
            "zstd" => Compression::ZSTD(parquet::basic::ZstdLevel::default()),
            "none" => Compression::UNCOMPRESSED,
            _ => {
                return Err(crate::error::SynthError::Config(format!(
                    "Unsupported compression: {}",
                    compression
                )))
            }
        };
        Ok(self)
    }

    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Write the full table to a Parquet file.
    pub fn write_records(&self, records: &[AqiRecord], path: &Path) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let schema = self.create_schema();
        let batch = self.records_to_batch(records, schema.clone())?;

        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
        writer.write(&batch)?;
        writer.close()?;

        debug!(rows = records.len(), path = %path.display(), "wrote Parquet dataset");
        Ok(())
    }

    /// Write the table in batches for memory efficiency.
    pub fn write_records_batched(
        &self,
        records: &[AqiRecord],
        path: &Path,
        batch_size: usize,
    ) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let schema = self.create_schema();
        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

        for chunk in records.chunks(batch_size) {
            let batch = self.records_to_batch(chunk, schema.clone())?;
            writer.write(&batch)?;
        }

        writer.close()?;
        Ok(())
    }

    /// Arrow schema for the generated table. AQI columns are nullable since
    /// off-scale concentrations carry no AQI.
    fn create_schema(&self) -> Arc<Schema> {
        let mut fields = vec![
            Field::new(
                "timestamp",
                DataType::Timestamp(TimeUnit::Millisecond, None),
                false,
            ),
            Field::new("city", DataType::Utf8, false),
            Field::new("latitude", DataType::Float64, false),
            Field::new("longitude", DataType::Float64, false),
        ];

        for pollutant in Pollutant::ALL {
            fields.push(Field::new(pollutant.key(), DataType::Float64, false));
        }
        for pollutant in Pollutant::ALL {
            fields.push(Field::new(
                format!("aqi_{}", pollutant.key()),
                DataType::UInt16,
                true,
            ));
        }

        Arc::new(Schema::new(fields))
    }

    fn records_to_batch(&self, records: &[AqiRecord], schema: Arc<Schema>) -> Result<RecordBatch> {
        let timestamps: Vec<i64> = records
            .iter()
            .map(|r| r.timestamp.and_utc().timestamp_millis())
            .collect();
        let cities: Vec<String> = records.iter().map(|r| r.city.clone()).collect();
        let latitudes: Vec<f64> = records.iter().map(|r| r.latitude).collect();
        let longitudes: Vec<f64> = records.iter().map(|r| r.longitude).collect();

        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(TimestampMillisecondArray::from(timestamps)),
            Arc::new(StringArray::from(cities)),
            Arc::new(Float64Array::from(latitudes)),
            Arc::new(Float64Array::from(longitudes)),
        ];

        for pollutant in Pollutant::ALL {
            let values: Vec<f64> = records
                .iter()
                .map(|r| r.concentration(pollutant))
                .collect();
            columns.push(Arc::new(Float64Array::from(values)));
        }
        for pollutant in Pollutant::ALL {
            let values: Vec<Option<u16>> = records.iter().map(|r| r.aqi(pollutant)).collect();
            columns.push(Arc::new(UInt16Array::from(values)));
        }

        let batch = RecordBatch::try_new(schema, columns)?;
        Ok(batch)
    }

    /// Get file statistics
    pub fn get_file_info(&self, path: &Path) -> Result<ParquetFileInfo> {
        use parquet::file::reader::{FileReader, SerializedFileReader};

        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        let metadata = reader.metadata();

        let file_metadata = metadata.file_metadata();
        let row_groups = metadata.num_row_groups();
        let total_rows = file_metadata.num_rows();
        let file_size = std::fs::metadata(path)?.len();

        let mut row_group_sizes = Vec::new();
        for i in 0..row_groups {
            let rg_metadata = metadata.row_group(i);
            row_group_sizes.push(rg_metadata.num_rows());
        }

        Ok(ParquetFileInfo {
            total_rows,
            row_groups: row_groups as i32,
            row_group_sizes,
            file_size,
            compression: self.compression,
        })
    }
}

impl Default for ParquetWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct ParquetFileInfo {
    pub total_rows: i64,
    pub row_groups: i32,
    pub row_group_sizes: Vec<i64>,
    pub file_size: u64,
    pub compression: Compression,
}

impl ParquetFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Parquet File Summary:\n\
            - Total rows: {}\n\
            - Row groups: {}\n\
            - File size: {:.2} KB\n\
            - Compression: {:?}",
            self.total_rows,
            self.row_groups,
            self.file_size as f64 / 1024.0,
            self.compression,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn sample_record(aqi_o3: Option<u16>) -> AqiRecord {
        let location = Location::new("Testville", 50.0, 1.0);
        let timestamp = NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        AqiRecord::from_samples(
            &location,
            timestamp,
            [12.0, 54.0, 4.4, 53.0, 0.25, 35.0],
            [Some(50), Some(50), Some(50), Some(50), aqi_o3, Some(50)],
        )
    }

    #[test]
    fn test_write_empty_records() {
        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();

        let result = writer.write_records(&[], temp_file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_write_single_record() -> Result<()> {
        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();

        writer.write_records(&[sample_record(None)], temp_file.path())?;

        let metadata = std::fs::metadata(temp_file.path())?;
        assert!(metadata.len() > 0);

        Ok(())
    }

    #[test]
    fn test_different_compressions() -> Result<()> {
        let compressions = ["snappy", "gzip", "lz4", "zstd", "none"];

        for compression in &compressions {
            let writer = ParquetWriter::new().with_compression(compression)?;
            let temp_file = NamedTempFile::new().unwrap();

            let result = writer.write_records(&[sample_record(Some(300))], temp_file.path());
            assert!(result.is_ok(), "Failed with compression: {}", compression);
        }

        Ok(())
    }

    #[test]
    fn test_unsupported_compression_is_rejected() {
        assert!(ParquetWriter::new().with_compression("brotli9000").is_err());
    }

    #[test]
    fn test_batched_write_row_count() -> Result<()> {
        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();

        let records: Vec<AqiRecord> = (0..25).map(|_| sample_record(Some(300))).collect();
        writer.write_records_batched(&records, temp_file.path(), 10)?;

        let info = writer.get_file_info(temp_file.path())?;
        assert_eq!(info.total_rows, 25);

        Ok(())
    }

    #[test]
    fn test_null_aqi_survives_round_trip() -> Result<()> {
        use arrow::array::Array;
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

        let writer = ParquetWriter::new();
        let temp_file = NamedTempFile::new().unwrap();
        writer.write_records(&[sample_record(None)], temp_file.path())?;

        let file = File::open(temp_file.path())?;
        let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        let batch = reader.next().unwrap()?;

        assert_eq!(batch.num_rows(), 1);
        // Columns: 4 metadata + 6 concentrations, then AQI columns; aqi_o3 is
        // the fifth AQI column.
        assert_eq!(batch.column(14).null_count(), 1);
        assert_eq!(batch.column(10).null_count(), 0);

        Ok(())
    }
}
