use crate::catalog::domain::{Catalog, Product};
use crate::catalog::services::SidebarTree;

/// Load outcome of one configured sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub name: String,
    /// Rows received (zero when the fetch failed)
    pub rows: usize,
    /// Failure description, if the fetch failed
    pub error: Option<String>,
}

impl SheetReport {
    pub fn loaded(name: impl Into<String>, rows: usize) -> Self {
        Self {
            name: name.into(),
            rows,
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// CatalogResponse - Internal response DTO from the build-catalog use case
///
/// Holds the full catalog plus the view the request asked for, so
/// adapters can render without re-running any domain logic.
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    /// Every product, in aggregation order
    pub catalog: Catalog,
    /// Products matching the search, drivers sorted by OS
    pub products: Vec<Product>,
    /// Sidebar tree over `products`, when requested
    pub sidebar: Option<SidebarTree>,
    /// Per-sheet load outcome, in configured order
    pub sheets: Vec<SheetReport>,
    /// Human-readable load status
    pub status_message: String,
    /// True when every sheet failed and the sample dataset was used
    pub used_sample_data: bool,
    pub search: String,
}

impl CatalogResponse {
    pub fn failed_sheets(&self) -> impl Iterator<Item = &SheetReport> {
        self.sheets.iter().filter(|s| s.is_failed())
    }
}
