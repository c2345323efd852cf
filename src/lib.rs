//! STS Arena - loadout generation for isolated practice fights
//!
//! Builds plausible decks, relics and potions for any Slay the Spire
//! character by simulating a short, synergy-aware pseudo-run.

pub mod data;
pub mod loadout;
pub mod resolve;
pub mod save;

// Re-export commonly used types
pub use data::{LoadoutTables, DataError};
pub use loadout::{BuiltLoadout, CardEntry, LoadoutBuilder, LoadoutError, PlayerClass};
pub use loadout::{generate_for_class, generate_random, generate_with_event_count};
pub use resolve::{resolve_loadout, ContentRegistry, ResolveReport};
pub use save::{LoadoutRecord, LoadoutStore, SaveError};
