use super::observation::{FirmwareUpdate, ScalarSnapshot};
use crate::shared::Result;

/// Brand used when no vendor was ever resolved for a product
pub const DEFAULT_BRAND: &str = "Generic";

/// Category used when no component was ever resolved for a product
pub const DEFAULT_CATEGORY: &str = "N/A";

/// Firmware version shown until a firmware value is observed
pub const DEFAULT_FIRMWARE: &str = "N/A";

/// NewType wrapper for the product merge identity (trimmed description)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(description: &str) -> Result<Self> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Product description cannot be empty");
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observed (OS, driver version) pairing
///
/// `model` is only set for rows read from wide sheets, where each
/// model column carries its own version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverEntry {
    os: String,
    model: Option<String>,
    version: String,
}

impl DriverEntry {
    pub fn new(os: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            model: None,
            version: version.into(),
        }
    }

    pub fn for_model(
        os: impl Into<String>,
        model: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            os: os.into(),
            model: Some(model.into()),
            version: version.into(),
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Product aggregate root
///
/// Created on the first observation of its identity key and mutated by
/// later observations of the same key. Scalar fields follow
/// last-write-wins among observed (non-empty) values; `drivers` is
/// append-only in row encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    identity_key: IdentityKey,
    display_name: String,
    brand: String,
    category: String,
    status: String,
    form_factor: String,
    firmware_version: String,
    spec: String,
    identifier: String,
    drivers: Vec<DriverEntry>,
}

impl Product {
    /// Creates a product from the scalar snapshot of its first observation
    pub fn new(identity_key: IdentityKey, snapshot: &ScalarSnapshot) -> Self {
        let display_name = identity_key.as_str().to_string();
        let or_default =
            |value: &Option<String>, default: &str| value.clone().unwrap_or_else(|| default.into());

        Self {
            identity_key,
            display_name,
            brand: or_default(&snapshot.brand, DEFAULT_BRAND),
            category: or_default(&snapshot.category, DEFAULT_CATEGORY),
            status: or_default(&snapshot.status, ""),
            form_factor: or_default(&snapshot.form_factor, ""),
            firmware_version: or_default(&snapshot.firmware_version, DEFAULT_FIRMWARE),
            spec: or_default(&snapshot.spec, ""),
            identifier: or_default(&snapshot.identifier, ""),
            drivers: Vec::new(),
        }
    }

    /// Overwrites every scalar the snapshot carries a value for
    pub fn apply_snapshot(&mut self, snapshot: &ScalarSnapshot) {
        overwrite(&mut self.brand, &snapshot.brand);
        overwrite(&mut self.category, &snapshot.category);
        overwrite(&mut self.status, &snapshot.status);
        overwrite(&mut self.form_factor, &snapshot.form_factor);
        overwrite(&mut self.firmware_version, &snapshot.firmware_version);
        overwrite(&mut self.spec, &snapshot.spec);
        overwrite(&mut self.identifier, &snapshot.identifier);
    }

    /// Applies a firmware-sheet update; never touches `drivers`
    pub fn apply_firmware_update(&mut self, update: &FirmwareUpdate) {
        overwrite(&mut self.firmware_version, &update.firmware_version);
        overwrite(&mut self.identifier, &update.identifier);
        overwrite(&mut self.status, &update.status);
    }

    pub fn push_driver(&mut self, entry: DriverEntry) {
        self.drivers.push(entry);
    }

    /// Returns a copy whose drivers are sorted by OS name
    ///
    /// The sort is stable and case-sensitive, so entries sharing an OS
    /// keep their encounter order.
    pub fn with_sorted_drivers(&self) -> Self {
        let mut sorted = self.clone();
        sorted.drivers.sort_by(|a, b| a.os.cmp(&b.os));
        sorted
    }

    /// OS names of every driver entry joined with ", "
    pub fn joined_os_list(&self) -> String {
        self.drivers
            .iter()
            .map(DriverEntry::os)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the product belongs under the network branch of the sidebar
    pub fn is_network(&self) -> bool {
        self.category.eq_ignore_ascii_case("network")
    }

    pub fn identity_key(&self) -> &IdentityKey {
        &self.identity_key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn form_factor(&self) -> &str {
        &self.form_factor
    }

    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn drivers(&self) -> &[DriverEntry] {
        &self.drivers
    }
}

fn overwrite(slot: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            *slot = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> IdentityKey {
        IdentityKey::new(s).unwrap()
    }

    #[test]
    fn test_identity_key_trims() {
        assert_eq!(key("  QAT \n").as_str(), "QAT");
    }

    #[test]
    fn test_identity_key_empty() {
        assert!(IdentityKey::new("   ").is_err());
        assert!(IdentityKey::new("").is_err());
    }

    #[test]
    fn test_identity_key_has_no_length_limit() {
        let long = "x".repeat(2048);
        assert_eq!(key(&long).as_str().len(), 2048);
    }

    #[test]
    fn test_new_product_applies_defaults() {
        let product = Product::new(key("X710"), &ScalarSnapshot::default());
        assert_eq!(product.display_name(), "X710");
        assert_eq!(product.brand(), DEFAULT_BRAND);
        assert_eq!(product.category(), DEFAULT_CATEGORY);
        assert_eq!(product.firmware_version(), DEFAULT_FIRMWARE);
        assert_eq!(product.status(), "");
        assert!(product.drivers().is_empty());
    }

    #[test]
    fn test_apply_snapshot_keeps_observed_values() {
        let mut product = Product::new(
            key("X710"),
            &ScalarSnapshot {
                brand: Some("Intel".into()),
                ..Default::default()
            },
        );

        product.apply_snapshot(&ScalarSnapshot::default());
        assert_eq!(product.brand(), "Intel");

        product.apply_snapshot(&ScalarSnapshot {
            brand: Some("Broadcom".into()),
            category: Some("Network".into()),
            ..Default::default()
        });
        assert_eq!(product.brand(), "Broadcom");
        assert_eq!(product.category(), "Network");
    }

    #[test]
    fn test_firmware_update_does_not_touch_drivers() {
        let mut product = Product::new(key("X710"), &ScalarSnapshot::default());
        product.push_driver(DriverEntry::new("RHEL 9", "2.20"));

        product.apply_firmware_update(&FirmwareUpdate {
            firmware_version: Some("9.40".into()),
            identifier: Some("SW-1".into()),
            status: None,
        });

        assert_eq!(product.firmware_version(), "9.40");
        assert_eq!(product.identifier(), "SW-1");
        assert_eq!(product.status(), "");
        assert_eq!(product.drivers().len(), 1);
    }

    #[test]
    fn test_with_sorted_drivers_is_stable() {
        let mut product = Product::new(key("X710"), &ScalarSnapshot::default());
        product.push_driver(DriverEntry::new("Windows", "1"));
        product.push_driver(DriverEntry::new("RHEL", "a"));
        product.push_driver(DriverEntry::new("RHEL", "b"));
        product.push_driver(DriverEntry::new("ESXi", "c"));

        let sorted = product.with_sorted_drivers();
        let order: Vec<_> = sorted
            .drivers()
            .iter()
            .map(|d| (d.os(), d.version()))
            .collect();
        assert_eq!(
            order,
            vec![("ESXi", "c"), ("RHEL", "a"), ("RHEL", "b"), ("Windows", "1")]
        );
        // original stays in encounter order
        assert_eq!(product.drivers()[0].os(), "Windows");
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let mut product = Product::new(key("X710"), &ScalarSnapshot::default());
        product.push_driver(DriverEntry::new("esxi", "1"));
        product.push_driver(DriverEntry::new("Windows", "2"));

        let sorted = product.with_sorted_drivers();
        assert_eq!(sorted.drivers()[0].os(), "Windows");
    }

    #[test]
    fn test_joined_os_list_and_network() {
        let mut product = Product::new(
            key("BCM57414"),
            &ScalarSnapshot {
                category: Some("NETWORK".into()),
                ..Default::default()
            },
        );
        product.push_driver(DriverEntry::new("RHEL 9", "1"));
        product.push_driver(DriverEntry::for_model("Windows Server 2022", "RX2530 M7", "2"));

        assert_eq!(product.joined_os_list(), "RHEL 9, Windows Server 2022");
        assert!(product.is_network());
        assert_eq!(product.drivers()[1].model(), Some("RX2530 M7"));
    }
}
