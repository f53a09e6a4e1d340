use super::product::{DriverEntry, IdentityKey};

/// Scalar fields resolved for one row
///
/// `None` means the row carried no value (after fill-down) for the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarSnapshot {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub form_factor: Option<String>,
    pub firmware_version: Option<String>,
    pub spec: Option<String>,
    pub identifier: Option<String>,
}

/// Scalar overrides carried by a firmware-sheet row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirmwareUpdate {
    pub firmware_version: Option<String>,
    pub identifier: Option<String>,
    pub status: Option<String>,
}

/// What a classified row contributes to its product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationPayload {
    /// Zero or more driver entries (tall rows yield one, wide rows fan out)
    Drivers(Vec<DriverEntry>),
    /// Firmware metadata only
    Firmware(FirmwareUpdate),
}

/// One normalized row, ready for aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowObservation {
    pub identity_key: IdentityKey,
    pub snapshot: ScalarSnapshot,
    pub payload: ObservationPayload,
}

impl RowObservation {
    /// Driver entries carried by the observation (empty for firmware rows)
    pub fn drivers(&self) -> &[DriverEntry] {
        match &self.payload {
            ObservationPayload::Drivers(entries) => entries,
            ObservationPayload::Firmware(_) => &[],
        }
    }
}
