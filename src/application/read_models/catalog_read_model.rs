//! Catalog read model for rendering
//!
//! The main read model aggregates everything a formatter needs so that
//! formatters never touch domain objects directly.

use super::product_view::ProductView;

/// Main read model for one rendered catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReadModel {
    pub metadata: CatalogMetadataView,
    /// Products matching the active search, in catalog order
    pub products: Vec<ProductView>,
    /// Navigation tree, present when requested
    pub sidebar: Option<Vec<SidebarNodeView>>,
}

/// Load and generation metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMetadataView {
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Human-readable load status
    pub status_message: String,
    pub used_sample_data: bool,
    pub search_query: Option<String>,
    /// Products in the catalog before filtering
    pub total_products: usize,
    pub sheets: Vec<SheetReportView>,
}

/// Load outcome of one configured sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReportView {
    pub name: String,
    pub rows: usize,
    pub error: Option<String>,
}

/// One node of the rendered sidebar tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarNodeView {
    pub label: String,
    pub is_product: bool,
    pub children: Vec<SidebarNodeView>,
}
