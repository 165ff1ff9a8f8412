use super::report_record_error;
use crate::{
    libs::{config::Config, messages::Message, record::RecordInput, store::RecordStore, view::View},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{stdin, IsTerminal};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Record title (prompted for when omitted on a terminal)
    #[arg(short, long)]
    title: Option<String>,
    /// Date in YYYY-MM-DD format (prompted for when omitted on a terminal)
    #[arg(short, long)]
    date: Option<String>,
    /// Hours spent; anything that is not a number counts as 0
    #[arg(short = 'u', long)]
    duration: Option<String>,
    #[arg(short = 'g', long, default_value = "")]
    tag: String,
    /// Defaults to the configured default status
    #[arg(short, long)]
    status: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let interactive = stdin().is_terminal();

    let title = match args.title {
        Some(title) => title,
        None if interactive => prompt(Message::PromptRecordTitle, None)?,
        None => String::new(),
    };
    let date = match args.date {
        Some(date) => date,
        None if interactive => prompt(Message::PromptRecordDate, Some(Local::now().date_naive().to_string()))?,
        None => String::new(),
    };

    let input = RecordInput {
        title,
        date,
        duration: args.duration,
        tag: args.tag,
        status: args.status.unwrap_or(config.default_status),
    };

    let mut store = RecordStore::open()?;
    match store.create(&input) {
        Ok(record) => {
            msg_success!(Message::RecordCreated(record.id.clone()));
            View::records(&[record]);
            Ok(())
        }
        Err(e) => report_record_error(e),
    }
}

fn prompt(message: Message, default: Option<String>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(message.to_string()).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}
