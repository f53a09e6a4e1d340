//! Builder for constructing CatalogReadModel from a use-case response

use super::catalog_read_model::{
    CatalogMetadataView, CatalogReadModel, SheetReportView, SidebarNodeView,
};
use super::product_view::ProductView;
use crate::application::dto::CatalogResponse;
use crate::catalog::services::{SidebarNode, SidebarTree};

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing CatalogReadModel
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    /// Builds the read model stamped with the current UTC time
    pub fn build(response: &CatalogResponse) -> CatalogReadModel {
        let generated_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        Self::build_at(response, generated_at)
    }

    /// Builds the read model with an explicit timestamp
    ///
    /// # Arguments
    /// * `response` - Output of the build-catalog use case
    /// * `generated_at` - Timestamp recorded in the metadata
    pub fn build_at(response: &CatalogResponse, generated_at: String) -> CatalogReadModel {
        CatalogReadModel {
            metadata: Self::build_metadata(response, generated_at),
            products: response
                .products
                .iter()
                .map(ProductView::from_product)
                .collect(),
            sidebar: response.sidebar.as_ref().map(Self::build_sidebar),
        }
    }

    fn build_metadata(response: &CatalogResponse, generated_at: String) -> CatalogMetadataView {
        let search = response.search.trim();
        CatalogMetadataView {
            generated_at,
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            status_message: response.status_message.clone(),
            used_sample_data: response.used_sample_data,
            search_query: (!search.is_empty()).then(|| search.to_string()),
            total_products: response.catalog.len(),
            sheets: response
                .sheets
                .iter()
                .map(|s| SheetReportView {
                    name: s.name.clone(),
                    rows: s.rows,
                    error: s.error.clone(),
                })
                .collect(),
        }
    }

    fn build_sidebar(tree: &SidebarTree) -> Vec<SidebarNodeView> {
        fn convert(node: &SidebarNode) -> SidebarNodeView {
            SidebarNodeView {
                label: node.label().to_string(),
                is_product: node.is_product(),
                children: node.children().iter().map(convert).collect(),
            }
        }
        tree.roots().iter().map(convert).collect()
    }
}
