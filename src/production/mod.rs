//! Production records - one reporting unit's annual olive-oil output.
//!
//! A [`Production`] is the persisted row. [`ProductionFields`] carries every
//! field except the identifier and is what callers hand to the store when
//! creating a record. [`CompositeKey`] is the descriptive lookup key and
//! [`Measurements`] the three numeric fields an update may overwrite.
//!
//! ## Example
//!
//! ```
//! use olive_census::{CompositeKey, Measurements, Production, ProductionFields};
//!
//! let fields = ProductionFields {
//!     year: 2020,
//!     unit_type: "Private".into(),
//!     extraction_type: "Traditional".into(),
//!     region_name: "Alentejo".into(),
//!     olive_quant_ton: 120.5,
//!     oil_press_num: 3,
//!     oil_prod_hl: 210.0,
//! };
//! let record = Production::with_id(1, fields);
//!
//! let key = CompositeKey::new(2020, "Private", "Traditional", "Alentejo");
//! assert!(key.matches(&record));
//! assert_eq!(record.measurements(), Measurements::new(120.5, 3, 210.0));
//! ```

mod key;
mod measurements;

use serde::{Deserialize, Serialize};

pub use key::CompositeKey;
pub use measurements::Measurements;

use crate::error::{Result, StoreError};

/// Column names of the backing file, in persisted order.
pub const FIELD_NAMES: [&str; 8] = [
    "prod_ID",
    "year",
    "unit_type",
    "extraction_type",
    "region_name",
    "olive_quant_ton",
    "oil_press_num",
    "oil_prod_hl",
];

/// One olive-oil production entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    #[serde(rename = "prod_ID")]
    pub id: u64,
    pub year: i32,
    pub unit_type: String,
    pub extraction_type: String,
    pub region_name: String,
    pub olive_quant_ton: f64,
    pub oil_press_num: u32,
    pub oil_prod_hl: f64,
}

/// Every field of a [`Production`] except its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionFields {
    pub year: i32,
    pub unit_type: String,
    pub extraction_type: String,
    pub region_name: String,
    pub olive_quant_ton: f64,
    pub oil_press_num: u32,
    pub oil_prod_hl: f64,
}

impl ProductionFields {
    /// Assemble fields from a lookup key and its measurements.
    pub fn from_parts(key: CompositeKey, measurements: Measurements) -> Self {
        Self {
            year: key.year,
            unit_type: key.unit_type,
            extraction_type: key.extraction_type,
            region_name: key.region_name,
            olive_quant_ton: measurements.olive_quant_ton,
            oil_press_num: measurements.oil_press_num,
            oil_prod_hl: measurements.oil_prod_hl,
        }
    }

    /// Trim surrounding whitespace from the text fields, matching what the
    /// CSV codec does on read.
    pub fn normalize(mut self) -> Self {
        self.unit_type = self.unit_type.trim().to_string();
        self.extraction_type = self.extraction_type.trim().to_string();
        self.region_name = self.region_name.trim().to_string();
        self
    }

    /// Check value ranges. Strings are accepted as given.
    pub fn validate(&self) -> Result<()> {
        if self.year <= 0 {
            return Err(StoreError::invalid(
                "year",
                format!("must be positive, got {}", self.year),
            ));
        }
        Measurements::new(self.olive_quant_ton, self.oil_press_num, self.oil_prod_hl).validate()
    }
}

impl Production {
    pub fn with_id(id: u64, fields: ProductionFields) -> Self {
        Self {
            id,
            year: fields.year,
            unit_type: fields.unit_type,
            extraction_type: fields.extraction_type,
            region_name: fields.region_name,
            olive_quant_ton: fields.olive_quant_ton,
            oil_press_num: fields.oil_press_num,
            oil_prod_hl: fields.oil_prod_hl,
        }
    }

    /// The descriptive lookup key of this record.
    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(
            self.year,
            self.unit_type.as_str(),
            self.extraction_type.as_str(),
            self.region_name.as_str(),
        )
    }

    pub fn measurements(&self) -> Measurements {
        Measurements::new(self.olive_quant_ton, self.oil_press_num, self.oil_prod_hl)
    }

    /// Overwrite the three mutable numeric fields.
    pub fn apply(&mut self, measurements: &Measurements) {
        self.olive_quant_ton = measurements.olive_quant_ton;
        self.oil_press_num = measurements.oil_press_num;
        self.oil_prod_hl = measurements.oil_prod_hl;
    }
}
