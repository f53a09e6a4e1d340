use crate::catalog::domain::RawRow;
use crate::ports::outbound::SheetSource;
use crate::shared::error::CatalogError;
use crate::shared::security::{read_regular_file, validate_path_component};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// DirectorySheetSource adapter for reading exported sheets from disk
///
/// Each sheet is expected at `{dir}/{sheet}.json` holding the same JSON
/// array the sheet API returns. Useful offline and for reproducible runs.
pub struct DirectorySheetSource {
    dir: PathBuf,
}

impl DirectorySheetSource {
    /// Creates a source rooted at `dir`
    ///
    /// # Errors
    /// Returns an error if `dir` is not an existing directory
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(CatalogError::FileReadError {
                path: dir,
                details: "Sheet directory does not exist or is not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn sheet_path(&self, sheet_name: &str) -> Result<PathBuf> {
        validate_path_component(sheet_name, "Sheet name")?;
        Ok(self.dir.join(format!("{}.json", sheet_name)))
    }
}

#[async_trait]
impl SheetSource for DirectorySheetSource {
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<RawRow>> {
        let path = self.sheet_path(sheet_name)?;
        let body = read_regular_file(&path, "sheet export").map_err(|e| {
            CatalogError::SheetUnavailable {
                sheet: sheet_name.to_string(),
                details: e.to_string(),
            }
        })?;
        RawRow::rows_from_json(sheet_name, &body)
    }
}
