pub mod catalog;
pub mod observation;
pub mod product;
pub mod raw_row;
pub mod sheet;

pub use catalog::Catalog;
pub use observation::{FirmwareUpdate, ObservationPayload, RowObservation, ScalarSnapshot};
pub use product::{DriverEntry, IdentityKey, Product};
pub use raw_row::RawRow;
pub use sheet::{validate_sheet_set, SheetBatch, SheetLayout, SheetSpec};
