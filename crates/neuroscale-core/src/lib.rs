//! neuroscale-core
//!
//! Pure domain types and record file-name conventions.
//! No scoring rules and no filesystem access; this is the shared vocabulary
//! of the scorer, the record store and the desktop shell.

pub mod error;
pub mod models;
pub mod record_keys;
pub mod scale;
