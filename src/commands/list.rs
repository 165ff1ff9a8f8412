use super::report_record_error;
use crate::{
    libs::{
        messages::Message,
        query::{filter_records, sort_records, SortKey},
        store::RecordStore,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive regex matched against title, tag and date
    #[arg(short, long)]
    search: Option<String>,
    /// Sort the listing; the stored order is not changed
    #[arg(long, value_enum)]
    sort: Option<SortKey>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = RecordStore::open()?;

    // Searches always run over the full collection.
    let mut records = match &args.search {
        Some(pattern) => match filter_records(store.list(), pattern) {
            Ok(found) => found,
            Err(e) => return report_record_error(e),
        },
        None => store.list().to_vec(),
    };

    if let Some(key) = args.sort {
        records = sort_records(&records, key);
    }

    if records.is_empty() {
        msg_info!(Message::NoRecordsFound);
    } else {
        msg_print!(Message::RecordsHeader);
        View::records(&records);
    }

    if args.search.is_some() {
        msg_info!(Message::ResultsFound(records.len()));
    }

    Ok(())
}
