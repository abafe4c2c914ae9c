//! Codecs - Load and persist the whole production collection.
//!
//! The store never edits its backing file in place. Every read parses the
//! full collection and every mutation serializes the full collection back,
//! so a codec only has to answer two questions: "what is in there now" and
//! "replace it with this".
//!
//! ## Example
//!
//! ```no_run
//! use olive_census::{CsvFileCodec, TabularCodec};
//!
//! let codec = CsvFileCodec::new("olive_oil_census2020.csv");
//! match codec.read()? {
//!     Some(records) => println!("{} records", records.len()),
//!     None => println!("{} does not exist yet", codec.location()),
//! }
//! # Ok::<(), olive_census::StoreError>(())
//! ```

mod csv_file;
mod in_memory;
mod tabular;

pub use csv_file::CsvFileCodec;
pub use in_memory::InMemoryCodec;
pub use tabular::TabularCodec;
