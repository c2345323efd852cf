//! Loadout construction errors

use thiserror::Error;

use super::class::PlayerClass;

/// Errors raised while setting up a loadout builder.
///
/// Exhausted candidate pools are never errors; those events are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadoutError {
    /// Class token is not one of the four recognized classes
    #[error("unrecognized player class: {0:?}")]
    InvalidClass(String),
    /// The table set has no entry for this class
    #[error("no class table configured for {0}")]
    MissingClassTable(PlayerClass),
}
