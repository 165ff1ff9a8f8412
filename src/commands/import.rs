use super::report_record_error;
use crate::{
    libs::{messages::Message, store::RecordStore, transfer::import_file},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file containing an array of records, as written by `reclog export`
    file: PathBuf,
}

/// Replaces the whole collection with the file's records. Nothing is merged;
/// on any format error the existing records stay as they are.
pub fn cmd(args: ImportArgs) -> Result<()> {
    msg_info!(Message::ImportingFile(args.file.display().to_string()));

    let records = match import_file(&args.file) {
        Ok(records) => records,
        Err(e) => return report_record_error(e),
    };

    let mut store = RecordStore::open()?;
    let count = records.len();
    store.replace_all(records)?;

    msg_success!(Message::DataImported(count));
    Ok(())
}
