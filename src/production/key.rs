use std::fmt;

use super::Production;

/// The (year, unit type, extraction type, region) tuple used for lookups
/// that do not go through the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub year: i32,
    pub unit_type: String,
    pub extraction_type: String,
    pub region_name: String,
}

impl CompositeKey {
    pub fn new(
        year: i32,
        unit_type: impl Into<String>,
        extraction_type: impl Into<String>,
        region_name: impl Into<String>,
    ) -> Self {
        Self {
            year,
            unit_type: unit_type.into(),
            extraction_type: extraction_type.into(),
            region_name: region_name.into(),
        }
    }

    /// The same key with surrounding whitespace trimmed from the text
    /// attributes. Persisted records are always trimmed.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.year,
            self.unit_type.trim(),
            self.extraction_type.trim(),
            self.region_name.trim(),
        )
    }

    /// Exact, case-sensitive comparison on all four attributes.
    pub fn matches(&self, record: &Production) -> bool {
        record.year == self.year
            && record.unit_type == self.unit_type
            && record.extraction_type == self.extraction_type
            && record.region_name == self.region_name
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year={} unit_type={:?} extraction_type={:?} region_name={:?}",
            self.year, self.unit_type, self.extraction_type, self.region_name
        )
    }
}
