//! Display implementation for reclog application messages.
//!
//! All user-facing text is defined here, in one place. Commands and library
//! code refer to `Message` variants and let this module turn them into the
//! wording shown in the terminal.
//!
//! ```rust
//! use reclog::libs::messages::Message;
//!
//! assert_eq!(Message::HoursRemaining(2.5).to_string(), "2.5 hours remaining.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === RECORD MESSAGES ===
            Message::RecordCreated(id) => format!("Record {} created", id),
            Message::RecordUpdated(id) => format!("Record {} updated", id),
            Message::RecordDeleted => "Record deleted.".to_string(),
            Message::RecordNotFound(id) => format!("Record with ID {} not found.", id),
            Message::TitleAndDateRequired => "Title and Date are required.".to_string(),
            Message::InvalidDate(raw) => format!("Invalid date '{}', expected YYYY-MM-DD", raw),
            Message::RecordsHeader => "Records:".to_string(),
            Message::NoRecordsFound => "No records found.".to_string(),
            Message::ConfirmDeleteRecord(title) => format!("Are you sure you want to delete '{}'? This cannot be undone.", title),
            Message::EditingRecord(title) => format!("Editing record: {}", title),

            // === SEARCH MESSAGES ===
            Message::ResultsFound(count) => format!("{} result(s) found.", count),
            Message::InvalidRegexPattern => "Invalid regex pattern.".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader => "Dashboard".to_string(),
            Message::HoursRemaining(hours) => format!("{} hours remaining.", hours),
            Message::TargetExceeded(hours) => format!("Target exceeded by {} hours.", hours),

            // === IMPORT / EXPORT MESSAGES ===
            Message::DataExported(path, mime) => format!("Data exported to {} ({})", path, mime),
            Message::ImportingFile(path) => format!("Importing records from {}", path),
            Message::DataImported(count) => format!("Data imported successfully! {} record(s) loaded.", count),
            Message::InvalidJsonFile => "Invalid JSON file.".to_string(),
            Message::InvalidJsonFormat => "Invalid JSON format.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::InvalidWeeklyCap(raw) => format!("Invalid weekly target '{}', expected a number of hours", raw),

            // === PROMPTS ===
            Message::PromptRecordTitle => "Title".to_string(),
            Message::PromptRecordDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptWeeklyCap => "Weekly target in hours (empty to disable)".to_string(),
            Message::PromptDefaultStatus => "Default status for new records".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
