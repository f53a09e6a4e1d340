/// Catalog normalization domain
///
/// Pure business logic: turning raw spreadsheet rows into an ordered,
/// deduplicated product catalog. Nothing in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
