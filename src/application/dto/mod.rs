/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the catalog domain isolated.
mod catalog_request;
mod catalog_response;
mod output_format;

pub use catalog_request::{CatalogRequest, CatalogRequestBuilder};
pub use catalog_response::{CatalogResponse, SheetReport};
pub use output_format::OutputFormat;
