use super::fill_down::FillDownState;
use super::row_classifier::RowClassifier;
use crate::catalog::domain::{Catalog, ObservationPayload, Product, RowObservation, SheetBatch};
use crate::catalog::policies::FieldAliases;
use std::collections::HashMap;

/// Aggregator - Folds row observations into products keyed by identity
///
/// Products keep the order in which their identity key was first seen.
/// Identical driver entries are not deduplicated.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    products: Vec<Product>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes every sheet, in the given order, into a catalog
    ///
    /// Fill-down memory is reset at the start of each sheet.
    pub fn normalize(batches: &[SheetBatch], aliases: &FieldAliases) -> Catalog {
        let mut aggregator = Self::new();
        let mut fill_down = FillDownState::new();

        for batch in batches {
            fill_down.reset();
            let classifier = RowClassifier::new(&batch.sheet, aliases);
            for row in &batch.rows {
                if let Some(observation) = classifier.classify(row, &mut fill_down) {
                    aggregator.observe(observation);
                }
            }
        }

        aggregator.finish()
    }

    /// Aggregates an already-classified observation stream
    pub fn aggregate<I>(observations: I) -> Catalog
    where
        I: IntoIterator<Item = RowObservation>,
    {
        let mut aggregator = Self::new();
        for observation in observations {
            aggregator.observe(observation);
        }
        aggregator.finish()
    }

    /// Applies one observation to its product, creating the product on first sight
    ///
    /// Firmware observations only seed scalars on a new product; on an
    /// existing one they change firmware, identifier and status alone.
    pub fn observe(&mut self, observation: RowObservation) {
        let RowObservation {
            identity_key,
            snapshot,
            payload,
        } = observation;
        let is_firmware = matches!(payload, ObservationPayload::Firmware(_));

        let product = match self.index.get(identity_key.as_str()) {
            Some(&position) => {
                let product = &mut self.products[position];
                if !is_firmware {
                    product.apply_snapshot(&snapshot);
                }
                product
            }
            None => {
                self.index
                    .insert(identity_key.as_str().to_string(), self.products.len());
                self.products.push(Product::new(identity_key, &snapshot));
                let last = self.products.len() - 1;
                &mut self.products[last]
            }
        };

        match payload {
            ObservationPayload::Drivers(entries) => {
                for entry in entries {
                    product.push_driver(entry);
                }
            }
            ObservationPayload::Firmware(update) => product.apply_firmware_update(&update),
        }
    }

    pub fn finish(self) -> Catalog {
        Catalog::new(self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{DriverEntry, RawRow, SheetSpec};

    fn batch(sheet: SheetSpec, rows: Vec<RawRow>) -> SheetBatch {
        SheetBatch::new(sheet, rows)
    }

    #[test]
    fn test_merge_by_identity_across_os() {
        let batches = vec![batch(
            SheetSpec::tall("Windows").unwrap(),
            vec![
                RawRow::from_pairs([("Description", "X710"), ("OS", "Windows 2019"), ("Driver", "1")]),
                RawRow::from_pairs([("Description", " X710 "), ("OS", "Windows 2022"), ("Driver", "2")]),
            ],
        )];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].drivers().len(), 2);
    }

    #[test]
    fn test_merge_across_sheets_in_sheet_order() {
        let batches = vec![
            batch(
                SheetSpec::tall("Windows").unwrap(),
                vec![
                    RawRow::from_pairs([("Description", "A"), ("Driver", "1")]),
                    RawRow::from_pairs([("Description", "B"), ("Driver", "1")]),
                ],
            ),
            batch(
                SheetSpec::tall("RHEL").unwrap(),
                vec![
                    RawRow::from_pairs([("Description", "C"), ("Driver", "2")]),
                    RawRow::from_pairs([("Description", "A"), ("Driver", "2")]),
                ],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let names: Vec<_> = catalog.products().iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(
            catalog.get("A").unwrap().drivers(),
            &[DriverEntry::new("Windows", "1"), DriverEntry::new("RHEL", "2")]
        );
    }

    #[test]
    fn test_fill_down_resets_between_sheets() {
        let batches = vec![
            batch(
                SheetSpec::tall("Windows").unwrap(),
                vec![RawRow::from_pairs([
                    ("Description", "X"),
                    ("Vendor", "Intel"),
                    ("Component", "Network"),
                ])],
            ),
            batch(
                SheetSpec::tall("RHEL").unwrap(),
                vec![RawRow::from_pairs([("Description", "Y"), ("Vendor", ""), ("Component", "")])],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let y = catalog.get("Y").unwrap();
        assert_eq!(y.brand(), "Generic");
        assert_eq!(y.category(), "N/A");
    }

    #[test]
    fn test_firmware_sheet_updates_scalars_only() {
        let batches = vec![
            batch(
                SheetSpec::tall("Windows").unwrap(),
                vec![RawRow::from_pairs([("Description", "X710"), ("Driver", "1.0")])],
            ),
            batch(
                SheetSpec::firmware("FW").unwrap(),
                vec![RawRow::from_pairs([
                    ("Description", "X710"),
                    ("FW", "9.40"),
                    ("Status", "GA"),
                ])],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let product = catalog.get("X710").unwrap();
        assert_eq!(product.drivers().len(), 1);
        assert_eq!(product.firmware_version(), "9.40");
        assert_eq!(product.status(), "GA");
    }

    #[test]
    fn test_firmware_row_keeps_existing_scalars() {
        let batches = vec![
            batch(
                SheetSpec::tall("Windows").unwrap(),
                vec![RawRow::from_pairs([
                    ("Description", "X710"),
                    ("Vendor", "Intel"),
                    ("Component", "Network"),
                    ("Form Factor", "OCP"),
                    ("Driver", "1.0"),
                ])],
            ),
            batch(
                SheetSpec::firmware("FW").unwrap(),
                vec![
                    RawRow::from_pairs([
                        ("Description", "BCM57414"),
                        ("Vendor", "Broadcom"),
                        ("Component", "Storage"),
                        ("Form Factor", "PCIE"),
                        ("FW", "228.1"),
                    ]),
                    // blank vendor and component fill down from BCM57414
                    RawRow::from_pairs([
                        ("Description", "X710"),
                        ("Vendor", ""),
                        ("Component", ""),
                        ("FW", "9.40"),
                        ("SWID", "SW-X710"),
                    ]),
                ],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let x710 = catalog.get("X710").unwrap();
        assert_eq!(x710.brand(), "Intel");
        assert_eq!(x710.category(), "Network");
        assert_eq!(x710.form_factor(), "OCP");
        assert_eq!(x710.firmware_version(), "9.40");
        assert_eq!(x710.identifier(), "SW-X710");

        // a product first seen on the firmware sheet takes its scalars from there
        let bcm = catalog.get("BCM57414").unwrap();
        assert_eq!(bcm.brand(), "Broadcom");
        assert_eq!(bcm.category(), "Storage");
        assert!(bcm.drivers().is_empty());
    }

    #[test]
    fn test_long_description_is_kept() {
        let description = "X".repeat(600);
        let batches = vec![batch(
            SheetSpec::tall("RHEL").unwrap(),
            vec![RawRow::from_pairs([
                ("Description", description.as_str()),
                ("Driver", "1.0"),
            ])],
        )];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].display_name(), description);
    }

    #[test]
    fn test_firmware_before_drivers_is_kept() {
        let batches = vec![
            batch(
                SheetSpec::firmware("FW").unwrap(),
                vec![RawRow::from_pairs([("Description", "X710"), ("FW", "9.40")])],
            ),
            batch(
                SheetSpec::tall("RHEL").unwrap(),
                vec![RawRow::from_pairs([("Description", "X710"), ("Driver", "2.2")])],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let product = catalog.get("X710").unwrap();
        assert_eq!(product.firmware_version(), "9.40");
        assert_eq!(product.drivers(), &[DriverEntry::new("RHEL", "2.2")]);
    }

    #[test]
    fn test_duplicate_observations_are_not_deduplicated() {
        let row = RawRow::from_pairs([("Description", "X710"), ("Driver", "1.0")]);
        let batches = vec![
            batch(SheetSpec::tall("RHEL").unwrap(), vec![row.clone()]),
            batch(SheetSpec::tall("Oracle").unwrap(), vec![row.clone(), row]),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        assert_eq!(catalog.get("X710").unwrap().drivers().len(), 3);
    }

    #[test]
    fn test_scalar_last_write_wins() {
        let batches = vec![batch(
            SheetSpec::tall("Windows").unwrap(),
            vec![
                RawRow::from_pairs([("Description", "X"), ("Vendor", "Intel"), ("SWID", "1")]),
                RawRow::from_pairs([("Description", "X"), ("Vendor", "Broadcom"), ("SWID", "2")]),
            ],
        )];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let product = catalog.get("X").unwrap();
        assert_eq!(product.brand(), "Broadcom");
        assert_eq!(product.identifier(), "2");
    }

    #[test]
    fn test_end_to_end_wide_row() {
        let batches = vec![batch(
            SheetSpec::wide("Matrix", ["RX2530_M7", "RX2540_M7"]).unwrap(),
            vec![RawRow::from_pairs([
                ("Description", "QAT"),
                ("Vendor", "Intel"),
                ("Component", "Chipset"),
                ("Operating_System", "Windows Server 2022"),
                ("RX2530_M7", "2.5.0"),
                ("RX2540_M7", "n/a"),
            ])],
        )];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        assert_eq!(catalog.len(), 1);
        let product = &catalog.to_ordered_list()[0];
        assert_eq!(product.display_name(), "QAT");
        assert_eq!(product.brand(), "Intel");
        assert_eq!(product.category(), "Chipset");
        assert_eq!(
            product.drivers(),
            &[DriverEntry::for_model("Windows Server 2022", "RX2530 M7", "2.5.0")]
        );
    }

    #[test]
    fn test_mixed_tall_and_wide_sources() {
        let batches = vec![
            batch(
                SheetSpec::tall("ESXi").unwrap(),
                vec![RawRow::from_pairs([("Description", "QAT"), ("Driver", "1.9")])],
            ),
            batch(
                SheetSpec::wide("Matrix", ["RX2530_M7"]).unwrap(),
                vec![RawRow::from_pairs([
                    ("Description", "QAT"),
                    ("Vendor", "Intel"),
                    ("OS", "RHEL 9"),
                    ("RX2530_M7", "2.0"),
                ])],
            ),
        ];

        let catalog = Aggregator::normalize(&batches, &FieldAliases::default());
        let product = catalog.get("QAT").unwrap();
        assert_eq!(product.brand(), "Intel");
        assert_eq!(
            product.drivers(),
            &[
                DriverEntry::new("ESXi", "1.9"),
                DriverEntry::for_model("RHEL 9", "RX2530 M7", "2.0"),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty_stream() {
        let catalog = Aggregator::aggregate(Vec::<RowObservation>::new());
        assert!(catalog.is_empty());
    }
}
