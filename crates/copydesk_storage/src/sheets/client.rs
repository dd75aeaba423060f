//! Spreadsheet access through the Sheets v4 REST API.

use super::ServiceAccountKey;
use super::auth::TokenSource;
use crate::cell_text;
use async_trait::async_trait;
use copydesk_error::{CopydeskResult, HttpError, StorageError, StorageErrorKind};
use copydesk_interface::TabularStore;
use reqwest::Url;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// First worksheet of a Google spreadsheet, used as a tabular store.
///
/// The worksheet title is resolved once and reused. Access tokens are cached
/// and refreshed shortly before they expire.
#[derive(Debug)]
pub struct GoogleSheetsStore {
    spreadsheet_id: String,
    base_url: String,
    http: reqwest::Client,
    auth: TokenSource,
    worksheet: OnceCell<String>,
}

impl GoogleSheetsStore {
    /// Create a store for a spreadsheet using a service account key.
    ///
    /// # Errors
    ///
    /// Fails if the key's private key is not valid RSA PEM or the HTTP client
    /// cannot be built. No network request is made.
    pub fn new(spreadsheet_id: impl Into<String>, key: ServiceAccountKey) -> CopydeskResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        let auth = TokenSource::new(key, http.clone())?;

        Ok(Self {
            spreadsheet_id: spreadsheet_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
            auth,
            worksheet: OnceCell::new(),
        })
    }

    /// Create a store reading the service account key from a file.
    pub fn from_credentials_file(
        spreadsheet_id: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> CopydeskResult<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        Self::new(spreadsheet_id, key)
    }

    /// Point the store at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The spreadsheet identifier.
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// The service account the store authenticates as.
    pub fn service_account_email(&self) -> &str {
        self.auth.key().client_email()
    }

    /// Title of the first worksheet, fetched on first use.
    #[instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id))]
    pub async fn worksheet_title(&self) -> CopydeskResult<String> {
        let title = self
            .worksheet
            .get_or_try_init(|| async {
                let url = self.url(&["spreadsheets", self.spreadsheet_id.as_str()])?;
                let body = self
                    .send(self.http.get(url).query(&[("fields", "sheets.properties.title")]))
                    .await?;
                let title = first_sheet_title(&body)?;
                info!(worksheet = %title, "Opened spreadsheet");
                Ok::<_, copydesk_error::CopydeskError>(title)
            })
            .await?;
        Ok(title.clone())
    }

    fn url(&self, segments: &[&str]) -> CopydeskResult<Url> {
        let invalid =
            |detail: String| StorageError::new(StorageErrorKind::Unavailable(detail));
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn values_url(&self, suffix: &str) -> CopydeskResult<Url> {
        let range = format!("{}{}", quote_sheet_title(&self.worksheet_title().await?), suffix);
        self.url(&["spreadsheets", self.spreadsheet_id.as_str(), "values", range.as_str()])
    }

    /// Attach credentials, send, and decode a JSON body.
    async fn send(&self, request: reqwest::RequestBuilder) -> CopydeskResult<Value> {
        let token = self.auth.access_token().await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::new(StorageErrorKind::Request {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        Ok(response.json().await.map_err(|e| {
            StorageError::new(StorageErrorKind::MalformedResponse(e.to_string()))
        })?)
    }
}

#[async_trait]
impl TabularStore for GoogleSheetsStore {
    #[instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id))]
    async fn read_all(&self) -> CopydeskResult<Vec<Vec<String>>> {
        let url = self.values_url("").await?;
        let body = self.send(self.http.get(url)).await?;
        let rows = value_rows(&body)?;
        debug!(rows = rows.len(), "Read worksheet");
        Ok(rows)
    }

    #[instrument(skip(self, values), fields(spreadsheet = %self.spreadsheet_id, cells = values.len()))]
    async fn append_row(&self, values: &[Value]) -> CopydeskResult<()> {
        let url = self.values_url(":append").await?;
        let request = self
            .http
            .post(url)
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .json(&json!({ "values": [values] }));
        self.send(request).await?;
        debug!("Appended row");
        Ok(())
    }
}

/// Quote a worksheet title for use in A1 notation.
fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Title of the first sheet in a `spreadsheets.get` response.
fn first_sheet_title(body: &Value) -> Result<String, StorageError> {
    let sheets = body
        .get("sheets")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            StorageError::new(StorageErrorKind::NoWorksheet(
                "response lists no sheets".to_string(),
            ))
        })?;

    sheets
        .first()
        .and_then(|sheet| sheet.pointer("/properties/title"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            StorageError::new(StorageErrorKind::NoWorksheet(
                "first sheet has no title".to_string(),
            ))
        })
}

/// Rows of a `values.get` response as display strings.
///
/// An empty worksheet comes back without a `values` field.
fn value_rows(body: &Value) -> Result<Vec<Vec<String>>, StorageError> {
    let Some(values) = body.get("values") else {
        return Ok(Vec::new());
    };
    let rows = values.as_array().ok_or_else(|| {
        StorageError::new(StorageErrorKind::MalformedResponse(
            "values is not an array".to_string(),
        ))
    })?;

    rows.iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_text).collect())
                .ok_or_else(|| {
                    StorageError::new(StorageErrorKind::MalformedResponse(
                        "row is not an array".to_string(),
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_titles_with_apostrophes() {
        assert_eq!(quote_sheet_title("Sheet1"), "'Sheet1'");
        assert_eq!(quote_sheet_title("Bob's copy"), "'Bob''s copy'");
    }

    #[test]
    fn picks_first_sheet() {
        let body = json!({
            "sheets": [
                { "properties": { "title": "History" } },
                { "properties": { "title": "Archive" } }
            ]
        });
        assert_eq!(first_sheet_title(&body).unwrap(), "History");
    }

    #[test]
    fn no_sheets_is_an_error() {
        let err = first_sheet_title(&json!({ "sheets": [] })).unwrap_err();
        assert!(matches!(err.kind, StorageErrorKind::NoWorksheet(_)));
        assert!(first_sheet_title(&json!({})).is_err());
    }

    #[test]
    fn missing_values_means_empty_sheet() {
        let body = json!({ "range": "'Sheet1'!A1:Z1000", "majorDimension": "ROWS" });
        assert!(value_rows(&body).unwrap().is_empty());
    }

    #[test]
    fn ragged_rows_are_kept_as_returned() {
        let body = json!({
            "values": [
                ["Timestamp", "Model", "Temperature"],
                ["2024-05-01T10:00:00", "gemini-2.5-flash", 0.5],
                ["2024-05-01T10:00:00"]
            ]
        });
        let rows = value_rows(&body).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["2024-05-01T10:00:00", "gemini-2.5-flash", "0.5"]);
        assert_eq!(rows[2].len(), 1);
    }

    #[test]
    fn non_array_row_is_malformed() {
        let err = value_rows(&json!({ "values": ["oops"] })).unwrap_err();
        assert!(matches!(err.kind, StorageErrorKind::MalformedResponse(_)));
    }
}
