//! Loadout construction
//!
//! Simulates a pseudo-run of weighted "edit events" over a starter deck to
//! produce a plausible deck, relic, potion, HP and ascension bundle.

pub mod class;
pub mod card;
pub mod error;
pub mod builder;
pub mod generate;

pub use class::{PlayerClass, CardColor};
pub use card::{CardEntry, CardType, Synergy, SynergyCounters};
pub use error::LoadoutError;
pub use builder::{BuiltLoadout, LoadoutBuilder, MAX_DECK_SIZE, MAX_RELICS, MIN_DECK_SIZE};
pub use generate::{
    generate_for_class, generate_for_class_name, generate_random, generate_with_event_count,
    generate_for_class_with_tables, generate_random_with_tables, generate_with_event_count_and_tables,
};
