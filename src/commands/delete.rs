use crate::{
    libs::{messages::Message, record::Record, store::RecordStore},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the record to delete
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    NotFound,
    Cancelled,
    Deleted(Record),
}

/// Deletes record `id` only if `confirm` approves it.
///
/// `confirm` is not asked about records that do not exist, and a refusal
/// leaves the store untouched.
pub fn delete_confirmed<F>(store: &mut RecordStore, id: &str, confirm: F) -> Result<DeleteOutcome>
where
    F: FnOnce(&Record) -> Result<bool>,
{
    let Some(record) = store.get(id) else {
        return Ok(DeleteOutcome::NotFound);
    };
    if !confirm(record)? {
        return Ok(DeleteOutcome::Cancelled);
    }

    Ok(match store.delete(id)? {
        Some(removed) => DeleteOutcome::Deleted(removed),
        None => DeleteOutcome::NotFound,
    })
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = RecordStore::open()?;

    let outcome = delete_confirmed(&mut store, &args.id, |record| {
        if args.yes {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteRecord(record.title.clone()).to_string())
            .default(false)
            .interact()?)
    })?;

    match outcome {
        DeleteOutcome::NotFound => msg_error!(Message::RecordNotFound(args.id)),
        DeleteOutcome::Cancelled => msg_info!(Message::OperationCancelled),
        DeleteOutcome::Deleted(_) => msg_success!(Message::RecordDeleted),
    }

    Ok(())
}
