//! InMemoryCodec - Vec-backed codec for testing and embedding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::TabularCodec;
use crate::error::{Result, StoreError};
use crate::production::Production;

/// In-memory stand-in for a backing file.
///
/// `None` models an absent file. Clone-friendly via Arc; clones share both
/// the collection and the write counter.
#[derive(Clone, Default)]
pub struct InMemoryCodec {
    rows: Arc<RwLock<Option<Vec<Production>>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryCodec {
    /// A codec whose backing store does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec pre-loaded with these records.
    pub fn with_records(records: Vec<Production>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(Some(records))),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `write` has been called.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn poisoned() -> StoreError {
        StoreError::Codec {
            location: "memory".into(),
            message: "lock poisoned".into(),
        }
    }
}

impl TabularCodec for InMemoryCodec {
    fn read(&self) -> Result<Option<Vec<Production>>> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.clone())
    }

    fn write(&self, records: &[Production]) -> Result<()> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        *rows = Some(records.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}
