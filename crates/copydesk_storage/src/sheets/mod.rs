//! Google Sheets backend.

mod auth;
mod client;
mod credentials;

pub use auth::SHEETS_SCOPE;
pub use client::GoogleSheetsStore;
pub use credentials::ServiceAccountKey;
