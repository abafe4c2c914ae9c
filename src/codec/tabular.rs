//! TabularCodec - Abstract full-collection persistence.

use crate::error::Result;
use crate::production::Production;

/// Parses and serializes the full record collection.
pub trait TabularCodec {
    /// Load every record in persisted order.
    ///
    /// Returns `Ok(None)` when the backing store does not exist, which is
    /// distinct from an existing store that holds no rows.
    fn read(&self) -> Result<Option<Vec<Production>>>;

    /// Replace the backing store with exactly these records.
    fn write(&self, records: &[Production]) -> Result<()>;

    /// Human-readable description of the backing store, for logs and errors.
    fn location(&self) -> String;
}

