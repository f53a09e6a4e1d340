/// Columns forward-filled across rows (spreadsheet merged-cell semantics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyField {
    Description,
    Component,
    Vendor,
    FormFactor,
    Firmware,
    Spec,
}

impl StickyField {
    fn index(self) -> usize {
        match self {
            StickyField::Description => 0,
            StickyField::Component => 1,
            StickyField::Vendor => 2,
            StickyField::FormFactor => 3,
            StickyField::Firmware => 4,
            StickyField::Spec => 5,
        }
    }
}

/// FillDownState - Last non-empty value per sticky column
///
/// Scoped to a single sheet pass: call [`FillDownState::reset`] before the
/// first row of every sheet so a trailing value from one sheet never leaks
/// into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillDownState {
    slots: [String; 6],
}

impl FillDownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `raw` if it is non-empty and returns the effective value
    ///
    /// An empty return means the column has not been seen yet in this sheet.
    pub fn update(&mut self, field: StickyField, raw: Option<&str>) -> String {
        let slot = &mut self.slots[field.index()];
        if let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) {
            *slot = value.to_string();
        }
        slot.clone()
    }

    /// Effective value `update` would return, without recording anything
    pub fn peek(&self, field: StickyField, raw: Option<&str>) -> String {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value.to_string(),
            None => self.slots[field.index()].clone(),
        }
    }

    /// Current value of a slot (empty when never seen)
    pub fn current(&self, field: StickyField) -> &str {
        &self.slots[field.index()]
    }

    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}
