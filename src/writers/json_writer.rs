use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::AqiRecord;

/// Writes the generated table as a JSON array of records.
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_records(&self, records: &[AqiRecord], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)?;
        debug!(rows = records.len(), path = %path.display(), "wrote JSON dataset");
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
