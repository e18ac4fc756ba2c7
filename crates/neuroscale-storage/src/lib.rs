//! neuroscale-storage
//!
//! Local record store. One pretty-printed JSON file per assessment under the
//! data directory; reads also cover the legacy directory and normalize every
//! schema older builds wrote.

pub mod error;
pub mod normalize;
pub mod stats;
pub mod store;

pub use store::{RecordStore, StoredRecord};
