use std::fs;
use std::path::PathBuf;

use olive_census::{CsvFileCodec, CsvProductionStore, ProductionFields, ProductionStore, FIELD_NAMES};
use tempfile::TempDir;

/// Rows of a small census, in the shape the file format uses.
pub const SAMPLE_ROWS: &[&str] = &[
    "1,2015,Industrial,Continuous three phases,Alentejo,5120.5,12,8400",
    "2,2015,Private,Traditional,Norte,310,4,520.25",
    "3,2020,Private,Continuous three phases,Alentejo,1700,7,2900",
    "4,2020,Industrial,Continuous three phases,Alentejo,6400,14,10150.5",
    "5,2020,Private,Traditional,Alentejo,95,1,140",
    "6,2017,Industrial,Traditional,Madeira,12,1,20",
];

/// A census file living in its own temporary directory.
pub struct CensusFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl CensusFixture {
    /// A fixture with the sample rows written to disk.
    pub fn sample() -> Self {
        Self::with_rows(SAMPLE_ROWS)
    }

    pub fn with_rows(rows: &[&str]) -> Self {
        let fixture = Self::absent();
        let mut text = FIELD_NAMES.join(",");
        text.push('\n');
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        fs::write(&fixture.path, text).unwrap();
        fixture
    }

    /// A fixture whose census file has not been created.
    pub fn absent() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olive_oil_census2020.csv");
        Self { dir, path }
    }

    pub fn store(&self) -> CsvProductionStore {
        ProductionStore::new(CsvFileCodec::new(&self.path))
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

pub fn fields(year: i32, unit_type: &str, extraction_type: &str, region: &str) -> ProductionFields {
    ProductionFields {
        year,
        unit_type: unit_type.into(),
        extraction_type: extraction_type.into(),
        region_name: region.into(),
        olive_quant_ton: 103.0,
        oil_press_num: 3,
        oil_prod_hl: 65.0,
    }
}
