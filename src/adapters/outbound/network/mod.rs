/// Network adapters for the sheet JSON API
mod opensheet_client;

pub use opensheet_client::{OpenSheetClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
