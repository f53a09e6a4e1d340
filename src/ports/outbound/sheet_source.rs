use crate::catalog::domain::RawRow;
use crate::shared::Result;
use async_trait::async_trait;

/// SheetSource port for fetching the rows of one named sheet
///
/// This port abstracts where spreadsheet rows come from (the sheet
/// JSON API, a directory of exported files, a test double).
///
/// # Async Support
/// Fetching is async so every configured sheet can be requested at once.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetches every row of a sheet, in sheet order
    ///
    /// # Arguments
    /// * `sheet_name` - Name of the sheet (tab) to fetch
    ///
    /// # Returns
    /// The sheet's rows as header → cell maps
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be reached or returns a non-success status
    /// - The payload is not JSON or not an array of row objects
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRow>>;
}
