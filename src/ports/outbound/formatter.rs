use crate::application::read_models::CatalogReadModel;
use crate::shared::Result;

/// CatalogFormatter port for rendering the catalog
///
/// This port abstracts the output representation (JSON, Markdown).
pub trait CatalogFormatter {
    /// Formats the catalog read model
    ///
    /// # Arguments
    /// * `model` - Products, optional sidebar tree and load metadata
    ///
    /// # Returns
    /// Formatted catalog content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CatalogReadModel) -> Result<String>;
}
