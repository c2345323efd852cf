//! Loadout configuration data
//!
//! Static lookup tables for classes, cards, relics, potions and encounters,
//! optionally overridden from an external RON file.

pub mod tables;
pub mod cards;
pub mod relics;
pub mod potions;
pub mod encounters;
pub mod loader;

pub use tables::{CardTables, ClassTable, LoadoutTables, RelicTables, DEFAULT_MAX_COPIES, DEFAULT_PRIORITY};
pub use encounters::{Encounter, EncounterCatalog, EncounterKind};
pub use loader::{
    default_tables, export_default_tables, load_from, load_or_default, tables, DataError,
    DEFAULT_DATA_DIR, TABLES_FILE,
};
