mod codec;
mod error;
mod production;
mod prompt;
mod store;

pub use codec::{CsvFileCodec, InMemoryCodec, TabularCodec};
pub use error::{Result, StoreError};
pub use production::{CompositeKey, Measurements, Production, ProductionFields, FIELD_NAMES};
pub use prompt::{PartialKey, PartialMeasurements, Prompter};
pub use store::{MissingFile, ProductionStore, StoreOptions};

/// A store backed by a CSV file on disk.
pub type CsvProductionStore = ProductionStore<CsvFileCodec>;
