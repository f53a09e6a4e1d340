use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::collections::HashMap;

/// Logical columns the normalizer knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Description,
    Vendor,
    Component,
    Os,
    DriverVersion,
    Firmware,
    FormFactor,
    Spec,
    Identifier,
    Status,
}

impl LogicalField {
    pub const ALL: [LogicalField; 10] = [
        LogicalField::Description,
        LogicalField::Vendor,
        LogicalField::Component,
        LogicalField::Os,
        LogicalField::DriverVersion,
        LogicalField::Firmware,
        LogicalField::FormFactor,
        LogicalField::Spec,
        LogicalField::Identifier,
        LogicalField::Status,
    ];

    /// Key used for this field in the config file
    pub fn config_key(self) -> &'static str {
        match self {
            LogicalField::Description => "description",
            LogicalField::Vendor => "vendor",
            LogicalField::Component => "component",
            LogicalField::Os => "os",
            LogicalField::DriverVersion => "driver_version",
            LogicalField::Firmware => "firmware",
            LogicalField::FormFactor => "form_factor",
            LogicalField::Spec => "spec",
            LogicalField::Identifier => "identifier",
            LogicalField::Status => "status",
        }
    }

    fn default_candidates(self) -> &'static [&'static str] {
        match self {
            LogicalField::Description => &["description", "Description", "Model Name", "Model_Name"],
            LogicalField::Vendor => &["vendor", "Vendor", "Brand"],
            LogicalField::Component => &["component", "Component", "Category", "Type"],
            LogicalField::Os => &["os", "OS", "Operating_System", "Operating System"],
            LogicalField::DriverVersion => &["driver", "Driver", "Version"],
            LogicalField::Firmware => &["FW Version", "FW", "Firmware", "FW_Version"],
            LogicalField::FormFactor => &["FormFactor", "Form Factor", "form_factor"],
            LogicalField::Spec => &["Spec", "Specifications", "spec"],
            LogicalField::Identifier => &["swid", "SWID"],
            LogicalField::Status => &["status", "Status"],
        }
    }
}

impl std::str::FromStr for LogicalField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LogicalField::ALL
            .into_iter()
            .find(|f| f.config_key() == s)
            .ok_or_else(|| {
                let known: Vec<_> = LogicalField::ALL.iter().map(|f| f.config_key()).collect();
                format!("Unknown field '{}'. Expected one of: {}", s, known.join(", "))
            })
    }
}

/// FieldAliases policy: the accepted header spellings per logical field
///
/// Candidates are tried in order and matched case-sensitively; case and
/// synonym variation across sheets is absorbed by listing every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    candidates: HashMap<LogicalField, Vec<String>>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        let candidates = LogicalField::ALL
            .into_iter()
            .map(|field| {
                let list = field
                    .default_candidates()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                (field, list)
            })
            .collect();
        Self { candidates }
    }
}

impl FieldAliases {
    /// Replaces the candidate list of one field
    ///
    /// # Errors
    /// Returns an error if the list is empty or contains a blank header
    pub fn with_override(mut self, field: LogicalField, headers: Vec<String>) -> Result<Self> {
        if headers.is_empty() || headers.iter().any(|h| h.trim().is_empty()) {
            return Err(CatalogError::InvalidConfig {
                message: format!(
                    "field_aliases.{} must list at least one non-blank header",
                    field.config_key()
                ),
            }
            .into());
        }
        self.candidates.insert(field, headers);
        Ok(self)
    }

    /// Applies config-file overrides keyed by `LogicalField::config_key`
    pub fn from_overrides(overrides: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut keys: Vec<_> = overrides.keys().collect();
        keys.sort();

        let mut aliases = Self::default();
        for key in keys {
            let field: LogicalField = key.parse().map_err(|message| CatalogError::InvalidConfig {
                message: format!("field_aliases: {}", message),
            })?;
            aliases = aliases.with_override(field, overrides[key].clone())?;
        }
        Ok(aliases)
    }

    pub fn candidates(&self, field: LogicalField) -> &[String] {
        self.candidates
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
