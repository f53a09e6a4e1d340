use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One spreadsheet row as delivered by the sheet API
///
/// Header names are kept verbatim (case-sensitive). Cell values are
/// scalars rendered as strings; `null`, arrays and nested objects are
/// treated as absent cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(header, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a row from one JSON object of the sheet payload
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let cells = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key.clone(), text))
            })
            .collect();

        Self { cells }
    }

    /// Converts a whole sheet payload into rows
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidSheetPayload` when the payload is not a
    /// JSON array. Array elements that are not objects are skipped.
    pub fn rows_from_value(sheet: &str, payload: Value) -> Result<Vec<RawRow>> {
        match payload {
            Value::Array(items) => Ok(items
                .iter()
                .filter_map(Value::as_object)
                .map(RawRow::from_json_object)
                .collect()),
            other => Err(CatalogError::InvalidSheetPayload {
                sheet: sheet.to_string(),
                details: format!("expected an array, found {}", json_kind(&other)),
            }
            .into()),
        }
    }

    /// Parses a sheet payload from JSON text
    pub fn rows_from_json(sheet: &str, body: &str) -> Result<Vec<RawRow>> {
        let payload: Value =
            serde_json::from_str(body).map_err(|e| CatalogError::InvalidSheetPayload {
                sheet: sheet.to_string(),
                details: e.to_string(),
            })?;
        Self::rows_from_value(sheet, payload)
    }

    /// Returns the raw cell for an exact header name
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(header.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
