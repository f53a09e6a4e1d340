use super::aggregator::Aggregator;
use crate::catalog::domain::{Catalog, RawRow, SheetBatch, SheetSpec};
use crate::catalog::policies::FieldAliases;
use crate::shared::Result;
use serde_json::{json, Value};

/// SampleData - Built-in dataset used when no sheet could be loaded
///
/// The rows go through the same classification and aggregation as live
/// data, so the fallback exercises every rendering path.
pub struct SampleData;

impl SampleData {
    /// Sample sheets in load order
    pub fn sheets() -> Vec<SheetBatch> {
        vec![
            batch(
                SheetSpec::tall("Windows"),
                json!([
                    {
                        "Component": "Network",
                        "Vendor": "Intel",
                        "Form Factor": "OCP",
                        "Description": "Intel Ethernet Network Adapter X710-DA2",
                        "Spec": "10GbE SFP+",
                        "SWID": "SW-X710",
                        "OS": "Microsoft Windows Server 2022",
                        "Driver": "1.12.140.0"
                    },
                    {
                        "Description": "Intel Ethernet Network Adapter E810-XXVDA2",
                        "Spec": "25GbE SFP28",
                        "SWID": "SW-E810",
                        "OS": "Microsoft Windows Server 2022",
                        "Driver": "1.13.236.0"
                    },
                    {
                        "Component": "GPU",
                        "Vendor": "NVIDIA",
                        "Form Factor": "PCIE",
                        "Description": "NVIDIA A100 80GB",
                        "Spec": "PCIe Gen4",
                        "OS": "Microsoft Windows Server 2022",
                        "Driver": "538.15"
                    }
                ]),
            ),
            batch(
                SheetSpec::tall("RHEL"),
                json!([
                    {
                        "Component": "Network",
                        "Vendor": "Broadcom",
                        "Description": "Broadcom BCM57414 10/25GbE",
                        "OS": "RHEL 9.2",
                        "Driver": "228.0.130.0"
                    },
                    {
                        "Component": "Network",
                        "Vendor": "Intel",
                        "Form Factor": "OCP",
                        "Description": "Intel Ethernet Network Adapter X710-DA2",
                        "OS": "RHEL 9.2",
                        "Driver": "2.22.18"
                    },
                    {
                        "Component": "GPU",
                        "Vendor": "NVIDIA",
                        "Form Factor": "PCIE",
                        "Description": "NVIDIA A100 80GB",
                        "OS": "RHEL 9.2",
                        "Driver": "535.129.03"
                    }
                ]),
            ),
            batch(
                SheetSpec::firmware("FW"),
                json!([
                    {
                        "Description": "Intel Ethernet Network Adapter X710-DA2",
                        "FW Version": "9.40",
                        "Status": "Certified"
                    },
                    {
                        "Description": "Broadcom BCM57414 10/25GbE",
                        "FW Version": "228.1.111.0",
                        "SWID": "SW-BCM57414",
                        "Status": "Certified"
                    }
                ]),
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Sample catalog normalized with the given aliases
    pub fn catalog(aliases: &FieldAliases) -> Catalog {
        Aggregator::normalize(&Self::sheets(), aliases)
    }
}

fn batch(sheet: Result<SheetSpec>, payload: Value) -> Option<SheetBatch> {
    let sheet = sheet.ok()?;
    let rows = RawRow::rows_from_value(sheet.name(), payload).ok()?;
    Some(SheetBatch::new(sheet, rows))
}
