//! Production store - CRUD over the persisted record collection.
//!
//! Every operation loads the whole collection through a [`TabularCodec`],
//! works on it in memory and, for mutations only, writes the whole
//! collection back. Lookups by identifier or by [`CompositeKey`] succeed
//! only on exactly one match: zero matches is `NotFound`, more than one is
//! `AmbiguousMatch`. Delete is the exception and removes every match.
//!
//! ## Example
//!
//! ```
//! use olive_census::{
//!     CompositeKey, InMemoryCodec, Measurements, ProductionFields, ProductionStore,
//! };
//!
//! let store = ProductionStore::new(InMemoryCodec::new());
//! let created = store.add(ProductionFields {
//!     year: 2020,
//!     unit_type: "Private".into(),
//!     extraction_type: "Traditional".into(),
//!     region_name: "Alentejo".into(),
//!     olive_quant_ton: 120.0,
//!     oil_press_num: 2,
//!     oil_prod_hl: 180.0,
//! })?;
//! assert_eq!(created.id, 1);
//!
//! let key = CompositeKey::new(2020, "Private", "Traditional", "Alentejo");
//! let updated = store.update(&key, Measurements::new(150.0, 3, 220.0))?;
//! assert_eq!(updated.oil_press_num, 3);
//!
//! assert_eq!(store.delete(&key)?, 1);
//! assert_eq!(store.count()?, 0);
//! # Ok::<(), olive_census::StoreError>(())
//! ```

mod options;

use log::{debug, info, warn};

pub use options::{MissingFile, StoreOptions};

use crate::codec::TabularCodec;
use crate::error::{Result, StoreError};
use crate::production::{CompositeKey, Measurements, Production, ProductionFields};

/// CRUD operations over a full-rewrite tabular backing store.
pub struct ProductionStore<C> {
    codec: C,
    options: StoreOptions,
}

impl<C: TabularCodec> ProductionStore<C> {
    pub fn new(codec: C) -> Self {
        Self::with_options(codec, StoreOptions::default())
    }

    pub fn with_options(codec: C, options: StoreOptions) -> Self {
        Self { codec, options }
    }

    /// The codec this store reads and rewrites through.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Number of records currently persisted.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// The whole collection in persisted order.
    pub fn list(&self) -> Result<Vec<Production>> {
        self.load()
    }

    /// Create a record from `fields`, append it and persist the collection.
    ///
    /// The new identifier is one past the highest identifier in use, so ids
    /// freed by a delete are never handed out again. Text fields are trimmed
    /// before they are stored.
    pub fn add(&self, fields: ProductionFields) -> Result<Production> {
        let fields = fields.normalize();
        fields.validate()?;

        let mut records = self.load()?;
        let record = Production::with_id(next_id(&records)?, fields);
        records.push(record.clone());
        self.persist(&records)?;

        info!("added production {} ({})", record.id, record.key());
        Ok(record)
    }

    /// The single record carrying `id`. Never writes.
    pub fn find_by_id(&self, id: u64) -> Result<Production> {
        let matches: Vec<Production> = self
            .load()?
            .into_iter()
            .filter(|record| record.id == id)
            .collect();
        exactly_one(matches, || format!("prod_ID={}", id))
    }

    /// The single record matching `key`. Never writes.
    pub fn find_by_attributes(&self, key: &CompositeKey) -> Result<Production> {
        let matches = self.find_all(key)?;
        exactly_one(matches, || key.to_string())
    }

    /// Every record matching `key`, in persisted order. Never writes.
    pub fn find_all(&self, key: &CompositeKey) -> Result<Vec<Production>> {
        let key = key.normalized();
        Ok(self
            .load()?
            .into_iter()
            .filter(|record| key.matches(record))
            .collect())
    }

    /// Overwrite the measurements of the single record matching `key`.
    ///
    /// Other records and the non-numeric fields of the match are left as
    /// they were. Nothing is written unless exactly one record matches.
    pub fn update(&self, key: &CompositeKey, measurements: Measurements) -> Result<Production> {
        measurements.validate()?;
        let key = &key.normalized();

        let mut records = self.load()?;
        let positions: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| key.matches(record))
            .map(|(idx, _)| idx)
            .collect();

        let idx = match positions.as_slice() {
            [idx] => *idx,
            [] => return Err(not_found(key.to_string())),
            many => return Err(ambiguous(key.to_string(), many.len())),
        };

        records[idx].apply(&measurements);
        let updated = records[idx].clone();
        self.persist(&records)?;

        info!("updated production {} ({})", updated.id, key);
        Ok(updated)
    }

    /// Remove every record matching `key` and persist what remains.
    ///
    /// Returns how many records were removed. Nothing is written when no
    /// record matches.
    pub fn delete(&self, key: &CompositeKey) -> Result<usize> {
        let key = &key.normalized();
        let records = self.load()?;
        let before = records.len();
        let kept: Vec<Production> = records
            .into_iter()
            .filter(|record| !key.matches(record))
            .collect();

        let removed = before - kept.len();
        if removed == 0 {
            return Err(not_found(key.to_string()));
        }

        self.persist(&kept)?;
        info!("deleted {} production(s) ({})", removed, key);
        Ok(removed)
    }

    fn load(&self) -> Result<Vec<Production>> {
        match self.codec.read()? {
            Some(records) => Ok(records),
            None => match self.options.missing_file {
                MissingFile::Empty => {
                    warn!(
                        "{} not found, treating as empty collection",
                        self.codec.location()
                    );
                    Ok(Vec::new())
                }
                MissingFile::Error => Err(StoreError::StorageUnavailable {
                    location: self.codec.location(),
                }),
            },
        }
    }

    fn persist(&self, records: &[Production]) -> Result<()> {
        debug!(
            "rewriting {} with {} records",
            self.codec.location(),
            records.len()
        );
        self.codec.write(records)
    }
}

fn next_id(records: &[Production]) -> Result<u64> {
    let highest = records.iter().map(|record| record.id).max().unwrap_or(0);
    highest.checked_add(1).ok_or_else(|| {
        StoreError::invalid("prod_ID", format!("no identifier left after {}", highest))
    })
}

fn exactly_one(
    mut matches: Vec<Production>,
    criteria: impl FnOnce() -> String,
) -> Result<Production> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(not_found(criteria())),
        n => Err(ambiguous(criteria(), n)),
    }
}

fn not_found(criteria: String) -> StoreError {
    debug!("no record matches {}", criteria);
    StoreError::NotFound { criteria }
}

fn ambiguous(criteria: String, matches: usize) -> StoreError {
    warn!("{} records match {}", matches, criteria);
    StoreError::AmbiguousMatch { criteria, matches }
}
