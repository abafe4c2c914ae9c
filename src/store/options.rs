/// How the store treats a backing file that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFile {
    /// Read as an empty collection. The first mutation creates the file.
    #[default]
    Empty,
    /// Fail every operation with `StorageUnavailable`.
    Error,
}

/// Construction-time settings for a [`ProductionStore`](super::ProductionStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub missing_file: MissingFile,
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the backing file to exist.
    pub fn require_file(mut self) -> Self {
        self.missing_file = MissingFile::Error;
        self
    }
}
