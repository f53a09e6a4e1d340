use crate::catalog::domain::{Catalog, Product};
use crate::shared::Result;

/// Maximum length of a search query to prevent pathological input
const MAX_QUERY_LENGTH: usize = 255;

/// CatalogFilter - Free-text search over the built catalog
///
/// Matching is a case-insensitive substring test against the product
/// name, brand, category, form factor, every driver's OS/model/version
/// and the joined OS list. An empty query matches every product.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    needle: String,
}

impl CatalogFilter {
    /// Creates a filter from a raw query string
    ///
    /// # Errors
    /// Returns an error if the query exceeds `MAX_QUERY_LENGTH`
    pub fn new(query: &str) -> Result<Self> {
        let trimmed = query.trim();
        if trimmed.len() > MAX_QUERY_LENGTH {
            anyhow::bail!(
                "Search query is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_QUERY_LENGTH
            );
        }

        Ok(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Checks whether a product matches the query
    pub fn matches(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        let hit = |text: &str| text.to_lowercase().contains(&self.needle);

        hit(product.display_name())
            || hit(product.brand())
            || hit(product.category())
            || hit(product.form_factor())
            || product.drivers().iter().any(|d| {
                hit(d.os()) || d.model().is_some_and(|m| hit(m)) || hit(d.version())
            })
            || hit(&product.joined_os_list())
    }

    /// Returns matching products in catalog order, drivers sorted by OS
    pub fn filter(&self, catalog: &Catalog) -> Vec<Product> {
        catalog
            .to_ordered_list()
            .into_iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}
