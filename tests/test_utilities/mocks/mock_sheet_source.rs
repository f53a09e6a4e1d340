use async_trait::async_trait;
use driver_catalog::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SheetSource serving canned JSON payloads per sheet
///
/// Sheets without a payload fail like an unreachable endpoint.
#[derive(Default, Clone)]
pub struct MockSheetSource {
    payloads: HashMap<String, Value>,
    failures: HashMap<String, String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `payload` (normally a JSON array of row objects) for `sheet`
    pub fn with_sheet(mut self, sheet: &str, payload: Value) -> Self {
        self.payloads.insert(sheet.to_string(), payload);
        self
    }

    pub fn with_failure(mut self, sheet: &str, message: &str) -> Self {
        self.failures.insert(sheet.to_string(), message.to_string());
        self
    }

    pub fn requested_sheets(&self) -> Vec<String> {
        let mut sheets = self.requested.lock().unwrap().clone();
        sheets.sort();
        sheets
    }
}

#[async_trait]
impl SheetSource for MockSheetSource {
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRow>> {
        self.requested.lock().unwrap().push(sheet_name.to_string());

        if let Some(message) = self.failures.get(sheet_name) {
            anyhow::bail!("{}", message);
        }

        match self.payloads.get(sheet_name) {
            Some(payload) => RawRow::rows_from_value(sheet_name, payload.clone()),
            None => anyhow::bail!("HTTP status 404 Not Found for sheet {}", sheet_name),
        }
    }
}
