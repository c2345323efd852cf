//! Generation entry points
//!
//! Thin orchestration over [`LoadoutBuilder`]: pick a class, pick an event
//! count, run the events, freeze the result.

use rand::Rng;

use crate::data::{self, LoadoutTables};
use super::builder::{BuiltLoadout, LoadoutBuilder};
use super::class::PlayerClass;
use super::error::LoadoutError;

/// Fewest edit events a generated run goes through
pub const MIN_EVENTS: usize = 10;
/// Most edit events a generated run goes through
pub const MAX_EVENTS: usize = 50;

/// Generate a loadout for `class` using the built-in tables
pub fn generate_for_class<R: Rng>(class: PlayerClass, rng: &mut R) -> Result<BuiltLoadout, LoadoutError> {
    generate_for_class_with_tables(class, data::tables(), rng)
}

/// Generate a loadout from a class token such as `"THE_SILENT"`
pub fn generate_for_class_name<R: Rng>(class_name: &str, rng: &mut R) -> Result<BuiltLoadout, LoadoutError> {
    let class: PlayerClass = class_name.parse()?;
    generate_for_class(class, rng)
}

/// Generate a loadout for a uniformly random class
pub fn generate_random<R: Rng>(rng: &mut R) -> Result<BuiltLoadout, LoadoutError> {
    generate_random_with_tables(data::tables(), rng)
}

/// Generate with a fixed number of edit events
pub fn generate_with_event_count<R: Rng>(
    class: PlayerClass,
    num_events: usize,
    rng: &mut R,
) -> Result<BuiltLoadout, LoadoutError> {
    generate_with_event_count_and_tables(class, num_events, data::tables(), rng)
}

pub fn generate_for_class_with_tables<R: Rng>(
    class: PlayerClass,
    tables: &LoadoutTables,
    rng: &mut R,
) -> Result<BuiltLoadout, LoadoutError> {
    let num_events = rng.gen_range(MIN_EVENTS..=MAX_EVENTS);
    generate_with_event_count_and_tables(class, num_events, tables, rng)
}

pub fn generate_random_with_tables<R: Rng>(
    tables: &LoadoutTables,
    rng: &mut R,
) -> Result<BuiltLoadout, LoadoutError> {
    let class = PlayerClass::ALL[rng.gen_range(0..PlayerClass::ALL.len())];
    generate_for_class_with_tables(class, tables, rng)
}

pub fn generate_with_event_count_and_tables<R: Rng>(
    class: PlayerClass,
    num_events: usize,
    tables: &LoadoutTables,
    rng: &mut R,
) -> Result<BuiltLoadout, LoadoutError> {
    let mut builder = LoadoutBuilder::with_tables(class, tables, rng)?;
    builder.apply_random_events(num_events);
    let loadout = builder.build();
    log::info!("Generated {} after {} events", loadout, num_events);
    Ok(loadout)
}
