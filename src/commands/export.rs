//! Export of the full record collection.
//!
//! JSON exports can be loaded back with `reclog import`; CSV exports are a
//! flat view for spreadsheet tools.

use crate::{
    libs::{
        messages::Message,
        store::RecordStore,
        transfer::{ExportFormat, Exporter},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `records.json` (or `records.csv`) in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Writes every record to the output file.
///
/// ```bash
/// reclog export
/// reclog export --format csv --output ~/backup/records.csv
/// ```
pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = RecordStore::open()?;

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(store.list())?;

    msg_success!(Message::DataExported(path.display().to_string(), exporter.format().mime_type().to_string()));
    Ok(())
}
