use super::field_resolver::FieldResolver;
use super::fill_down::{FillDownState, StickyField};
use crate::catalog::domain::{
    DriverEntry, FirmwareUpdate, IdentityKey, ObservationPayload, RawRow, RowObservation,
    ScalarSnapshot, SheetLayout, SheetSpec,
};
use crate::catalog::policies::{FieldAliases, LogicalField};

/// Driver version recorded when a tall row has no version cell
pub const MISSING_VERSION: &str = "N/A";

/// Header read for firmware when none of the firmware aliases match
const FIRMWARE_FALLBACK_HEADERS: &[&str] = &["Version"];

/// RowClassifier - Turns one raw row into at most one observation
///
/// The strategy (tall or wide) is chosen by the sheet's layout. Dropped
/// rows leave the fill-down state untouched.
pub struct RowClassifier<'a> {
    sheet: &'a SheetSpec,
    resolver: FieldResolver<'a>,
}

impl<'a> RowClassifier<'a> {
    pub fn new(sheet: &'a SheetSpec, aliases: &'a FieldAliases) -> Self {
        Self {
            sheet,
            resolver: FieldResolver::new(aliases),
        }
    }

    /// Classifies a row, updating `fill_down` for accepted rows
    pub fn classify(&self, row: &RawRow, fill_down: &mut FillDownState) -> Option<RowObservation> {
        match self.sheet.layout() {
            SheetLayout::Tall => self.classify_tall(row, fill_down),
            SheetLayout::Wide { model_columns } => {
                self.classify_wide(row, model_columns, fill_down)
            }
        }
    }

    fn classify_tall(&self, row: &RawRow, fill_down: &mut FillDownState) -> Option<RowObservation> {
        let description = self.resolver.field(row, LogicalField::Description)?;
        let identity_key = IdentityKey::new(description).ok()?;

        let vendor = fill_down.update(StickyField::Vendor, self.field(row, LogicalField::Vendor));
        let component = fill_down.update(
            StickyField::Component,
            self.field(row, LogicalField::Component),
        );
        let form_factor = fill_down.update(
            StickyField::FormFactor,
            self.field(row, LogicalField::FormFactor),
        );
        let spec = fill_down.update(StickyField::Spec, self.field(row, LogicalField::Spec));

        let identifier = self.field(row, LogicalField::Identifier).map(String::from);
        let status = self.field(row, LogicalField::Status).map(String::from);

        let snapshot = ScalarSnapshot {
            brand: non_empty(vendor),
            category: non_empty(component),
            status: status.clone(),
            form_factor: non_empty(form_factor),
            firmware_version: None,
            spec: non_empty(spec),
            identifier: identifier.clone(),
        };

        let payload = if self.sheet.is_firmware() {
            let firmware = self
                .field(row, LogicalField::Firmware)
                .or_else(|| FieldResolver::resolve_opt(row, FIRMWARE_FALLBACK_HEADERS))
                .map(String::from);
            ObservationPayload::Firmware(FirmwareUpdate {
                firmware_version: firmware,
                identifier,
                status,
            })
        } else {
            let os = self
                .field(row, LogicalField::Os)
                .unwrap_or(self.sheet.name());
            let version = self
                .field(row, LogicalField::DriverVersion)
                .unwrap_or(MISSING_VERSION);
            ObservationPayload::Drivers(vec![DriverEntry::new(os, version)])
        };

        Some(RowObservation {
            identity_key,
            snapshot,
            payload,
        })
    }

    fn classify_wide(
        &self,
        row: &RawRow,
        model_columns: &[String],
        fill_down: &mut FillDownState,
    ) -> Option<RowObservation> {
        let raw_description = self.field(row, LogicalField::Description);
        let raw_vendor = self.field(row, LogicalField::Vendor);
        let raw_component = self.field(row, LogicalField::Component);

        // Decide on the filled values first so a dropped row records nothing.
        let description = fill_down.peek(StickyField::Description, raw_description);
        let vendor = fill_down.peek(StickyField::Vendor, raw_vendor);
        let component = fill_down.peek(StickyField::Component, raw_component);
        if description.is_empty() || (vendor.is_empty() && component.is_empty()) {
            return None;
        }
        let identity_key = IdentityKey::new(&description).ok()?;

        fill_down.update(StickyField::Description, raw_description);
        fill_down.update(StickyField::Vendor, raw_vendor);
        fill_down.update(StickyField::Component, raw_component);
        let form_factor = fill_down.update(
            StickyField::FormFactor,
            self.field(row, LogicalField::FormFactor),
        );
        let firmware = fill_down.update(
            StickyField::Firmware,
            self.field(row, LogicalField::Firmware),
        );
        let spec = fill_down.update(StickyField::Spec, self.field(row, LogicalField::Spec));

        let os = self
            .field(row, LogicalField::Os)
            .unwrap_or(self.sheet.name());

        let drivers = model_columns
            .iter()
            .filter_map(|column| {
                let version = row.get(column).map(str::trim)?;
                is_valid_version(version)
                    .then(|| DriverEntry::for_model(os, column.replace('_', " "), version))
            })
            .collect();

        Some(RowObservation {
            identity_key,
            snapshot: ScalarSnapshot {
                brand: non_empty(vendor),
                category: non_empty(component),
                status: self.field(row, LogicalField::Status).map(String::from),
                form_factor: non_empty(form_factor),
                firmware_version: non_empty(firmware),
                spec: non_empty(spec),
                identifier: self.field(row, LogicalField::Identifier).map(String::from),
            },
            payload: ObservationPayload::Drivers(drivers),
        })
    }

    fn field<'r>(&self, row: &'r RawRow, field: LogicalField) -> Option<&'r str> {
        self.resolver.field(row, field)
    }
}

/// A model cell holds a version iff it is non-blank and not "n/a"
pub fn is_valid_version(cell: &str) -> bool {
    let trimmed = cell.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("n/a")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe(sheet: &SheetSpec, rows: &[RawRow]) -> Vec<Option<RowObservation>> {
        let aliases = FieldAliases::default();
        let classifier = RowClassifier::new(sheet, &aliases);
        let mut state = FillDownState::new();
        rows.iter()
            .map(|row| classifier.classify(row, &mut state))
            .collect()
    }

    #[test]
    fn test_is_valid_version() {
        assert!(is_valid_version("1.0"));
        assert!(!is_valid_version(""));
        assert!(!is_valid_version("   "));
        assert!(!is_valid_version("n/a"));
        assert!(!is_valid_version("N/A"));
        assert!(!is_valid_version(" N/a "));
    }

    #[test]
    fn test_tall_fill_down_component_and_vendor() {
        let sheet = SheetSpec::tall("Windows").unwrap();
        let rows = vec![
            RawRow::from_pairs([("component", "Network"), ("vendor", "A"), ("description", "X")]),
            RawRow::from_pairs([("component", ""), ("vendor", ""), ("description", "Y")]),
        ];

        let results = observe(&sheet, &rows);
        let y = results[1].as_ref().unwrap();
        assert_eq!(y.identity_key.as_str(), "Y");
        assert_eq!(y.snapshot.category.as_deref(), Some("Network"));
        assert_eq!(y.snapshot.brand.as_deref(), Some("A"));
    }

    #[test]
    fn test_tall_os_defaults_to_sheet_name() {
        let sheet = SheetSpec::tall("RHEL").unwrap();
        let rows = vec![RawRow::from_pairs([("Description", "X710"), ("Driver", "2.20")])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        assert_eq!(obs.drivers(), &[DriverEntry::new("RHEL", "2.20")]);
    }

    #[test]
    fn test_tall_os_column_wins_and_missing_version() {
        let sheet = SheetSpec::tall("Windows").unwrap();
        let rows = vec![RawRow::from_pairs([("Description", "X710"), ("OS", "Windows Server 2022")])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        assert_eq!(
            obs.drivers(),
            &[DriverEntry::new("Windows Server 2022", MISSING_VERSION)]
        );
    }

    #[test]
    fn test_tall_row_without_description_is_dropped_and_does_not_fill() {
        let sheet = SheetSpec::tall("Windows").unwrap();
        let rows = vec![
            RawRow::from_pairs([("Vendor", "Ghost"), ("Description", "")]),
            RawRow::from_pairs([("Description", "X")]),
        ];

        let results = observe(&sheet, &rows);
        assert!(results[0].is_none());
        let x = results[1].as_ref().unwrap();
        assert_eq!(x.snapshot.brand, None);
    }

    #[test]
    fn test_firmware_sheet_emits_no_drivers() {
        let sheet = SheetSpec::firmware("FW").unwrap();
        let rows = vec![RawRow::from_pairs([
            ("Description", "X710"),
            ("FW Version", "9.40"),
            ("Driver", "ignored"),
            ("SWID", "SW-42"),
        ])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        assert!(obs.drivers().is_empty());
        assert_eq!(
            obs.payload,
            ObservationPayload::Firmware(FirmwareUpdate {
                firmware_version: Some("9.40".to_string()),
                identifier: Some("SW-42".to_string()),
                status: None,
            })
        );
    }

    #[test]
    fn test_firmware_sheet_falls_back_to_version_column() {
        let sheet = SheetSpec::firmware("FW").unwrap();
        let rows = vec![RawRow::from_pairs([("Description", "X710"), ("Version", "1.2.3")])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        match obs.payload {
            ObservationPayload::Firmware(update) => {
                assert_eq!(update.firmware_version.as_deref(), Some("1.2.3"))
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_wide_fan_out_skips_blank_and_na() {
        let sheet = SheetSpec::wide("Matrix", ["M1", "M2", "M3", "M4"]).unwrap();
        let rows = vec![RawRow::from_pairs([
            ("Description", "QAT"),
            ("Vendor", "Intel"),
            ("OS", "RHEL 9"),
            ("M1", "1.0"),
            ("M2", "n/a"),
            ("M3", ""),
            ("M4", "N/A"),
        ])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        assert_eq!(obs.drivers(), &[DriverEntry::for_model("RHEL 9", "M1", "1.0")]);
    }

    #[test]
    fn test_wide_model_name_replaces_underscores() {
        let sheet = SheetSpec::wide("Matrix", ["RX2530_M7", "TX_1330_M5"]).unwrap();
        let rows = vec![RawRow::from_pairs([
            ("Description", "QAT"),
            ("Component", "Chipset"),
            ("Operating_System", "Windows Server 2022"),
            ("RX2530_M7", "2.5.0"),
            ("TX_1330_M5", "2.4.1"),
        ])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        let models: Vec<_> = obs.drivers().iter().filter_map(DriverEntry::model).collect();
        assert_eq!(models, vec!["RX2530 M7", "TX 1330 M5"]);
    }

    #[test]
    fn test_wide_fills_description_and_sticky_metadata() {
        let sheet = SheetSpec::wide("Matrix", ["M1"]).unwrap();
        let rows = vec![
            RawRow::from_pairs([
                ("Description", "QAT"),
                ("Vendor", "Intel"),
                ("FW", "4.1"),
                ("Spec", "PCIe Gen4"),
                ("OS", "RHEL 9"),
                ("M1", "1.0"),
            ]),
            RawRow::from_pairs([("OS", "SLES 15"), ("M1", "1.1")]),
        ];

        let results = observe(&sheet, &rows);
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.identity_key.as_str(), "QAT");
        assert_eq!(second.snapshot.brand.as_deref(), Some("Intel"));
        assert_eq!(second.snapshot.firmware_version.as_deref(), Some("4.1"));
        assert_eq!(second.snapshot.spec.as_deref(), Some("PCIe Gen4"));
        assert_eq!(second.drivers(), &[DriverEntry::for_model("SLES 15", "M1", "1.1")]);
    }

    #[test]
    fn test_wide_row_without_vendor_or_component_is_dropped() {
        let sheet = SheetSpec::wide("Matrix", ["M1"]).unwrap();
        let rows = vec![
            RawRow::from_pairs([("Description", "Orphan"), ("M1", "1.0")]),
            RawRow::from_pairs([("Vendor", "Intel"), ("M1", "1.0")]),
        ];

        let results = observe(&sheet, &rows);
        assert!(results[0].is_none());
        // the dropped row's description was not recorded
        assert!(results[1].is_none());
    }

    #[test]
    fn test_wide_row_with_no_valid_cells_still_observed() {
        let sheet = SheetSpec::wide("Matrix", ["M1"]).unwrap();
        let rows = vec![RawRow::from_pairs([
            ("Description", "QAT"),
            ("Vendor", "Intel"),
            ("M1", "n/a"),
        ])];

        let obs = observe(&sheet, &rows).remove(0).unwrap();
        assert!(obs.drivers().is_empty());
        assert_eq!(obs.payload, ObservationPayload::Drivers(vec![]));
    }
}
