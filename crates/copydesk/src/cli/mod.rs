//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the copydesk binary.

mod check_sheet;
mod commands;
mod console;
mod generate;
mod history;
mod studio;

pub use check_sheet::handle_check_sheet;
pub use commands::{Cli, Commands, GenerateArgs};
pub use console::ConsoleNotifier;
pub use generate::handle_generate;
pub use history::handle_history;
pub use studio::launch_studio;

use copydesk::{CopydeskResult, GoogleSheetsStore, Settings};

/// Open the history spreadsheet named by `SHEET_ID`.
pub fn open_sheet(settings: &Settings) -> CopydeskResult<GoogleSheetsStore> {
    let sheet_id = settings.require_sheet_id()?;
    tracing::debug!(
        sheet_id,
        credentials = %settings.credentials_path.display(),
        "Opening history sheet"
    );
    GoogleSheetsStore::from_credentials_file(sheet_id, &settings.credentials_path)
}
