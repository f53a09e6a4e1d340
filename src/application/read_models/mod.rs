//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that flatten the domain catalog into what the
//! formatters render: products with display helpers precomputed, the
//! optional sidebar tree and load metadata.

mod catalog_read_model;
mod catalog_read_model_builder;
mod product_view;

pub use catalog_read_model::{CatalogMetadataView, CatalogReadModel, SheetReportView, SidebarNodeView};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use product_view::{brand_color, short_os_label, DriverView, ProductView, DEFAULT_BRAND_COLOR};
