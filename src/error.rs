use thiserror::Error;

/// Error type for production store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store does not exist and the store was told not to
    /// treat absence as an empty collection.
    #[error("backing store unavailable: {location}")]
    StorageUnavailable { location: String },

    /// The lookup criteria matched no record.
    #[error("no matching record found for {criteria}")]
    NotFound { criteria: String },

    /// The lookup criteria matched more than one record.
    #[error("{matches} records match {criteria}, expected exactly one")]
    AmbiguousMatch { criteria: String, matches: usize },

    /// A field value is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The tabular file could not be parsed or serialized.
    #[error("codec error in {location}: {message}")]
    Codec { location: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive prompt ran out of input.
    #[error("prompt aborted: {0}")]
    Prompt(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, StoreError::AmbiguousMatch { .. })
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
