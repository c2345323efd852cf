//! Loadout persistence
//!
//! Serializes generated loadouts into versioned JSON records.

pub mod record;
pub mod store;

pub use record::{content_hash, CardData, LoadoutRecord, RECORD_VERSION};
pub use store::{store_directory, LoadoutStore, LoadoutSummary, SaveError};
