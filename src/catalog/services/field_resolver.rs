use crate::catalog::domain::RawRow;
use crate::catalog::policies::{FieldAliases, LogicalField};

/// FieldResolver - Reads logical values out of irregular rows
///
/// Tries each candidate header in priority order and returns the first
/// value that is present and non-empty after trimming. Returned values
/// are trimmed.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    aliases: &'a FieldAliases,
}

impl<'a> FieldResolver<'a> {
    pub fn new(aliases: &'a FieldAliases) -> Self {
        Self { aliases }
    }

    /// Returns the first non-empty candidate value, if any
    pub fn resolve_opt<'r, S: AsRef<str>>(row: &'r RawRow, candidates: &[S]) -> Option<&'r str> {
        candidates
            .iter()
            .filter_map(|key| row.get(key.as_ref()))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Returns the first non-empty candidate value, or `default`
    pub fn resolve<S: AsRef<str>>(row: &RawRow, candidates: &[S], default: &str) -> String {
        Self::resolve_opt(row, candidates)
            .unwrap_or(default)
            .to_string()
    }

    /// Resolves a logical field through the configured aliases
    pub fn field<'r>(&self, row: &'r RawRow, field: LogicalField) -> Option<&'r str> {
        Self::resolve_opt(row, self.aliases.candidates(field))
    }
}
