use super::report_record_error;
use crate::{
    libs::{messages::Message, record::RecordInput, store::RecordStore, view::View},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Fields that are not given keep their current value.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the record to edit
    id: String,
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    date: Option<String>,
    #[arg(short = 'u', long)]
    duration: Option<String>,
    #[arg(short = 'g', long)]
    tag: Option<String>,
    #[arg(short, long)]
    status: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut store = RecordStore::open()?;

    let Some(current) = store.get(&args.id) else {
        msg_error!(Message::RecordNotFound(args.id));
        return Ok(());
    };
    msg_print!(Message::EditingRecord(current.title.clone()));

    let mut input = RecordInput::from_record(current);
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(date) = args.date {
        input.date = date;
    }
    if let Some(duration) = args.duration {
        input.duration = Some(duration);
    }
    if let Some(tag) = args.tag {
        input.tag = tag;
    }
    if let Some(status) = args.status {
        input.status = status;
    }

    match store.update(&args.id, &input) {
        Ok(record) => {
            msg_success!(Message::RecordUpdated(record.id.clone()));
            View::records(&[record]);
            Ok(())
        }
        Err(e) => report_record_error(e),
    }
}
