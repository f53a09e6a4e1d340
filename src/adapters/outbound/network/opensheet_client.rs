use crate::catalog::domain::RawRow;
use crate::ports::outbound::SheetSource;
use crate::shared::error::CatalogError;
use crate::shared::security::{validate_path_component, validate_url_segment};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Public sheet-to-JSON endpoint
pub const DEFAULT_BASE_URL: &str = "https://opensheet.elk.sh";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OpenSheetClient adapter for fetching sheet rows over HTTP
///
/// Issues `GET {base_url}/{spreadsheet_id}/{sheet}` and expects a JSON
/// array of row objects keyed by header. A failed request affects only
/// the sheet it was made for; there are no retries.
#[derive(Debug)]
pub struct OpenSheetClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl OpenSheetClient {
    /// Creates a client with its own reqwest connection pool
    ///
    /// # Arguments
    /// * `spreadsheet_id` - ID of the published spreadsheet
    /// * `base_url` - API root, e.g. `https://opensheet.elk.sh`
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    /// Returns an error if the ID or base URL is invalid or the HTTP
    /// client cannot be built
    pub fn new(spreadsheet_id: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let user_agent = format!("driver-catalog/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Self::with_client(client, spreadsheet_id, base_url)
    }

    /// Creates a client around an existing reqwest client
    pub fn with_client(client: reqwest::Client, spreadsheet_id: &str, base_url: &str) -> Result<Self> {
        validate_path_component(spreadsheet_id, "Spreadsheet ID")?;

        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::InvalidConfig {
                message: format!("base_url must start with http:// or https:// (got '{}')", base_url),
            }
            .into());
        }

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    }

    /// Builds the request URL for one sheet
    ///
    /// The sheet name is percent-encoded, so tab names may contain `/`,
    /// `?` or `#`.
    pub fn sheet_url(&self, sheet_name: &str) -> Result<String> {
        validate_url_segment(sheet_name, "Sheet name")?;

        Ok(format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(sheet_name)
        ))
    }

    fn unavailable(sheet_name: &str, details: impl ToString) -> anyhow::Error {
        CatalogError::SheetUnavailable {
            sheet: sheet_name.to_string(),
            details: details.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl SheetSource for OpenSheetClient {
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRow>> {
        let url = self.sheet_url(sheet_name)?;

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unavailable(sheet_name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unavailable(
                sheet_name,
                format!("HTTP status {} from {}", status, url),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidSheetPayload {
                sheet: sheet_name.to_string(),
                details: e.to_string(),
            })?;

        RawRow::rows_from_value(sheet_name, payload)
    }
}
