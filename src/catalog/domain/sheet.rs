use super::raw_row::RawRow;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Row shape of a source sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLayout {
    /// One row per (product, OS); OS from a column or the sheet name
    Tall,
    /// One row per (product, OS) fanned out across model-version columns
    Wide { model_columns: Vec<String> },
}

/// A configured source sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpec {
    name: String,
    layout: SheetLayout,
    firmware: bool,
}

impl SheetSpec {
    /// Creates a validated sheet definition
    ///
    /// # Errors
    /// - Empty sheet name
    /// - Wide layout without model columns, or with a blank column name
    /// - Firmware designation on a wide sheet
    pub fn new(name: impl Into<String>, layout: SheetLayout, firmware: bool) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(invalid("sheet name must not be empty"));
        }

        if let SheetLayout::Wide { model_columns } = &layout {
            if model_columns.is_empty() {
                return Err(invalid(&format!(
                    "wide sheet '{}' needs at least one model column",
                    name
                )));
            }
            if model_columns.iter().any(|c| c.trim().is_empty()) {
                return Err(invalid(&format!(
                    "wide sheet '{}' has a blank model column name",
                    name
                )));
            }
            if firmware {
                return Err(invalid(&format!(
                    "sheet '{}' cannot be both wide and a firmware sheet",
                    name
                )));
            }
        }

        Ok(Self {
            name,
            layout,
            firmware,
        })
    }

    pub fn tall(name: impl Into<String>) -> Result<Self> {
        Self::new(name, SheetLayout::Tall, false)
    }

    pub fn firmware(name: impl Into<String>) -> Result<Self> {
        Self::new(name, SheetLayout::Tall, true)
    }

    pub fn wide<S: Into<String>>(
        name: impl Into<String>,
        model_columns: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let model_columns = model_columns.into_iter().map(Into::into).collect();
        Self::new(name, SheetLayout::Wide { model_columns }, false)
    }

    /// The sheet set used when nothing else is configured
    pub fn default_set() -> Vec<SheetSpec> {
        ["Windows", "RHEL", "Oracle", "ESXi"]
            .into_iter()
            .map(|name| SheetSpec {
                name: name.to_string(),
                layout: SheetLayout::Tall,
                firmware: false,
            })
            .chain(std::iter::once(SheetSpec {
                name: "FW".to_string(),
                layout: SheetLayout::Tall,
                firmware: true,
            }))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    pub fn is_firmware(&self) -> bool {
        self.firmware
    }
}

/// Rows fetched for one sheet, in sheet order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetBatch {
    pub sheet: SheetSpec,
    pub rows: Vec<RawRow>,
}

impl SheetBatch {
    pub fn new(sheet: SheetSpec, rows: Vec<RawRow>) -> Self {
        Self { sheet, rows }
    }
}

/// Ensures sheet names are unique across a configured sheet list
pub fn validate_sheet_set(sheets: &[SheetSpec]) -> Result<()> {
    if sheets.is_empty() {
        return Err(invalid("at least one sheet must be configured"));
    }

    let mut seen = std::collections::HashSet::new();
    for sheet in sheets {
        if !seen.insert(sheet.name()) {
            return Err(invalid(&format!(
                "sheet '{}' is configured more than once",
                sheet.name()
            )));
        }
    }
    Ok(())
}

fn invalid(message: &str) -> anyhow::Error {
    CatalogError::InvalidConfig {
        message: message.to_string(),
    }
    .into()
}
