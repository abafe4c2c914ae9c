//! CsvFileCodec - Comma-separated file with a header row.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::TabularCodec;
use crate::error::{Result, StoreError};
use crate::production::{Production, FIELD_NAMES};

/// Reads and rewrites a UTF-8 CSV file whose header is [`FIELD_NAMES`].
///
/// Header names and field values are trimmed on read, so files written
/// with `", "` separators load the same as tightly packed ones.
#[derive(Debug, Clone)]
pub struct CsvFileCodec {
    path: PathBuf,
}

impl CsvFileCodec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn codec_error(&self, message: impl Into<String>) -> StoreError {
        StoreError::Codec {
            location: self.location(),
            message: message.into(),
        }
    }
}

impl TabularCodec for CsvFileCodec {
    fn read(&self) -> Result<Option<Vec<Production>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<Production>().enumerate() {
            // Line 1 is the header.
            let record = row.map_err(|e| self.codec_error(format!("line {}: {}", idx + 2, e)))?;
            records.push(record);
        }

        debug!("read {} records from {}", records.len(), self.location());
        Ok(Some(records))
    }

    fn write(&self, records: &[Production]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // The header is written by hand so an empty collection still
        // produces a well-formed file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.codec_error(e.to_string()))?;

        writer
            .write_record(FIELD_NAMES)
            .map_err(|e| self.codec_error(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| self.codec_error(format!("record {}: {}", record.id, e)))?;
        }
        writer.flush()?;

        debug!("wrote {} records to {}", records.len(), self.location());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::production::ProductionFields;
    use tempfile::TempDir;

    fn record(id: u64, region: &str) -> Production {
        Production::with_id(
            id,
            ProductionFields {
                year: 2020,
                unit_type: "Private".into(),
                extraction_type: "Continuous three phases".into(),
                region_name: region.into(),
                olive_quant_ton: 1800.5,
                oil_press_num: 8,
                oil_prod_hl: 3000.0,
            },
        )
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let codec = CsvFileCodec::new(dir.path().join("absent.csv"));
        assert!(codec.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let codec = CsvFileCodec::new(dir.path().join("census.csv"));
        let records = vec![record(2, "Norte"), record(1, "Alentejo")];

        codec.write(&records).unwrap();
        let loaded = codec.read().unwrap().unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn empty_collection_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("census.csv");
        let codec = CsvFileCodec::new(&path);

        codec.write(&[]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), FIELD_NAMES.join(","));
        assert_eq!(codec.read().unwrap(), Some(vec![]));
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let codec = CsvFileCodec::new(dir.path().join("nested").join("census.csv"));

        codec.write(&[record(1, "Centro")]).unwrap();
        assert_eq!(codec.read().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn reads_padded_header_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("census.csv");
        fs::write(
            &path,
            "prod_ID, year, unit_type, extraction_type, region_name, olive_quant_ton, oil_press_num, oil_prod_hl\n\
             1, 2015, Industrial, Continuous three phases, Alentejo, 103, 3, 65\n",
        )
        .unwrap();

        let loaded = CsvFileCodec::new(&path).read().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].extraction_type, "Continuous three phases");
        assert_eq!(loaded[0].olive_quant_ton, 103.0);
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("census.csv");
        fs::write(
            &path,
            format!(
                "{}\n1,2015,Industrial,Traditional,Norte,10,1,5\n2,not-a-year,Private,Traditional,Norte,10,1,5\n",
                FIELD_NAMES.join(",")
            ),
        )
        .unwrap();

        let err = CsvFileCodec::new(&path).read().unwrap_err();
        match err {
            StoreError::Codec { message, .. } => assert!(message.starts_with("line 3"), "{}", message),
            other => panic!("unexpected error: {}", other),
        }
    }
}
