//! Configuration persistence for the banked-curve lab.
//!
//! Loading never fails: any problem (missing file, foreign payload, newer
//! schema) falls back to the default configuration with a logged
//! diagnostic. Saving is atomic (temp file + rename) and returns a
//! structured error the caller may absorb.

pub mod envelope;
pub mod error;
pub mod store;

pub use envelope::{CURRENT_SCHEMA_VERSION, Envelope, SCHEMA_NAME};
pub use error::{Result, StoreError};
pub use store::{ConfigStore, DEFAULT_CONFIG_KEY, JsonFileStore, MemoryStore};
