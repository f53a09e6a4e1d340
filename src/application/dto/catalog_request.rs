use crate::catalog::domain::{validate_sheet_set, SheetSpec};
use crate::catalog::policies::FieldAliases;
use crate::shared::Result;

/// CatalogRequest - Internal request DTO for the build-catalog use case
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    /// Sheets to load, in normalization order
    pub sheets: Vec<SheetSpec>,
    /// Header spellings per logical field
    pub aliases: FieldAliases,
    /// Free-text search; empty matches everything
    pub search: String,
    /// Whether to build the sidebar tree
    pub include_tree: bool,
    /// Whether total load failure falls back to the sample dataset
    pub sample_fallback: bool,
}

impl CatalogRequest {
    pub fn builder() -> CatalogRequestBuilder {
        CatalogRequestBuilder::default()
    }
}

/// Builder for [`CatalogRequest`]
///
/// Defaults: the standard sheet set, default aliases, no search, no tree,
/// sample fallback enabled.
#[derive(Debug, Clone, Default)]
pub struct CatalogRequestBuilder {
    sheets: Option<Vec<SheetSpec>>,
    aliases: Option<FieldAliases>,
    search: Option<String>,
    include_tree: bool,
    no_sample_fallback: bool,
}

impl CatalogRequestBuilder {
    pub fn sheets(mut self, sheets: Vec<SheetSpec>) -> Self {
        self.sheets = Some(sheets);
        self
    }

    pub fn aliases(mut self, aliases: FieldAliases) -> Self {
        self.aliases = Some(aliases);
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn include_tree(mut self, include_tree: bool) -> Self {
        self.include_tree = include_tree;
        self
    }

    pub fn sample_fallback(mut self, enabled: bool) -> Self {
        self.no_sample_fallback = !enabled;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns an error if the sheet list is empty or names a sheet twice
    pub fn build(self) -> Result<CatalogRequest> {
        let sheets = self.sheets.unwrap_or_else(SheetSpec::default_set);
        validate_sheet_set(&sheets)?;

        Ok(CatalogRequest {
            sheets,
            aliases: self.aliases.unwrap_or_default(),
            search: self.search.unwrap_or_default(),
            include_tree: self.include_tree,
            sample_fallback: !self.no_sample_fallback,
        })
    }
}
