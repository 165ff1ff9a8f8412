//! Command-line surface of reclog.
//!
//! Each subcommand is one logical section of the application. Commands only
//! translate arguments into [`RecordStore`](crate::libs::store::RecordStore)
//! calls and render the results; expected user errors (missing fields, bad
//! patterns, malformed imports) are reported and the command still succeeds.

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;

use crate::libs::error::RecordError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a record")]
    Add(add::AddArgs),
    #[command(about = "Edit a record", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a record", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "List, search and sort records")]
    List(list::ListArgs),
    #[command(about = "Show totals and weekly target status")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Export all records to a file")]
    Export(export::ExportArgs),
    #[command(about = "Replace all records with the contents of a JSON file", arg_required_else_help = true)]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}

/// Reports recoverable record errors to the user; anything else is returned.
pub(crate) fn report_record_error(err: RecordError) -> Result<()> {
    match err {
        RecordError::MissingRequiredFields => msg_error!(Message::TitleAndDateRequired),
        RecordError::InvalidDate(raw) => msg_error!(Message::InvalidDate(raw)),
        RecordError::NotFound(id) => msg_error!(Message::RecordNotFound(id)),
        RecordError::InvalidPattern(e) => {
            msg_debug!(e);
            msg_error!(Message::InvalidRegexPattern);
        }
        RecordError::ImportFormat => msg_error!(Message::InvalidJsonFormat),
        RecordError::InvalidJson(e) => {
            msg_debug!(e);
            msg_error!(Message::InvalidJsonFile);
        }
        other => return Err(other.into()),
    }
    Ok(())
}
