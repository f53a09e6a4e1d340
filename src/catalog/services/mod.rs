mod aggregator;
mod catalog_filter;
mod field_resolver;
mod fill_down;
mod row_classifier;
mod sample_data;
mod sidebar_tree;

pub use aggregator::Aggregator;
pub use catalog_filter::CatalogFilter;
pub use field_resolver::FieldResolver;
pub use fill_down::{FillDownState, StickyField};
pub use row_classifier::{is_valid_version, RowClassifier, MISSING_VERSION};
pub use sample_data::SampleData;
pub use sidebar_tree::{SidebarNode, SidebarTree, DEFAULT_FORM_FACTOR, NETWORK_GROUP_LABEL};
