//! # Reclog - Record Log
//!
//! A command-line utility for keeping a personal log of time-tracked records.
//!
//! ## Features
//!
//! - **Record Management**: Add, edit and delete records with title, date,
//!   duration, tag and status
//! - **Search**: Case-insensitive regex search over title, tag and date
//! - **Sorting**: Stable ordering by date, title or duration
//! - **Dashboard**: Totals, top tag, completion rate and a weekly target check
//! - **Import/Export**: Pretty-printed JSON round trips, plus CSV export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reclog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
