//! Export and import of the record collection.
//!
//! JSON export writes the collection exactly as it is persisted, pretty-printed
//! with two-space indentation, so an exported file can be imported back
//! without loss. CSV export is a flat, one-row-per-record view for
//! spreadsheets and is not importable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reclog::libs::transfer::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Json, None);
//! let path = exporter.export(&[])?;
//! println!("written to {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::RecordResult;
use super::record::{parse_records, Record};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array, importable with `reclog import`
    Json,
    /// Comma-separated values for spreadsheet tools
    Csv,
}

impl ExportFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "records.json",
            ExportFormat::Csv => "records.csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Writes the collection to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// `output_path` defaults to the format's file name in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }

    /// Writes `records` and returns the path that was written.
    pub fn export(&self, records: &[Record]) -> RecordResult<PathBuf> {
        let path = self.output_path();
        match self.format {
            ExportFormat::Json => {
                let mut file = File::create(&path)?;
                file.write_all(to_json_string(records)?.as_bytes())?;
            }
            ExportFormat::Csv => write_csv(&path, records)?,
        }
        tracing::debug!(path = %path.display(), count = records.len(), "records exported");

        Ok(path)
    }
}

/// Serializes records as a JSON array with two-space indentation.
pub fn to_json_string(records: &[Record]) -> RecordResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn write_csv(path: &Path, records: &[Record]) -> RecordResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads an exported JSON file back into records.
///
/// Fails with `InvalidJson` when the file does not parse and with
/// `ImportFormat` when the top-level value is not an array.
pub fn import_file(path: &Path) -> RecordResult<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    parse_records(&text)
}
