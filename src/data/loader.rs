//! RON data loader
//!
//! Loads the loadout tables from an external RON file, with fallback to the
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

use super::cards::{default_card_tables, default_class_tables};
use super::encounters::default_encounter_catalog;
use super::potions::default_common_potions;
use super::relics::default_relic_tables;
use super::tables::LoadoutTables;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";
/// File name of the table override inside a data directory
pub const TABLES_FILE: &str = "loadout_tables.ron";

static DEFAULT_TABLES: Lazy<LoadoutTables> = Lazy::new(default_tables);

/// Errors raised while reading or writing table files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to serialize tables: {0}")]
    Serialize(String),
}

/// Shared, immutable built-in tables
pub fn tables() -> &'static LoadoutTables {
    &DEFAULT_TABLES
}

/// Build the hardcoded default tables
pub fn default_tables() -> LoadoutTables {
    LoadoutTables {
        classes: default_class_tables(),
        cards: default_card_tables(),
        relics: default_relic_tables(),
        common_potions: default_common_potions(),
        encounters: default_encounter_catalog(),
    }
}

/// Load tables from a RON file
pub fn load_from(path: &Path) -> Result<LoadoutTables, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load tables from `dir`, falling back to defaults if the file is missing
/// or broken
pub fn load_or_default(dir: &Path) -> LoadoutTables {
    let path = dir.join(TABLES_FILE);
    if !path.exists() {
        log::debug!("No {} in {:?}, using built-in tables", TABLES_FILE, dir);
        return default_tables();
    }

    match load_from(&path) {
        Ok(tables) => {
            log::info!("Loaded loadout tables from {:?}", path);
            tables
        }
        Err(e) => {
            log::warn!("{}. Using built-in tables.", e);
            default_tables()
        }
    }
}

/// Export the default tables to `dir` for easy editing
pub fn export_default_tables(dir: &Path) -> Result<PathBuf, DataError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| DataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let ron_text = ron::ser::to_string_pretty(&default_tables(), ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Serialize(e.to_string()))?;

    let path = dir.join(TABLES_FILE);
    fs::write(&path, ron_text).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Exported default loadout tables to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::PlayerClass;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stsarena-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        let path = export_default_tables(&dir).expect("export failed");
        assert!(path.exists(), "{} not created", TABLES_FILE);

        let loaded = load_from(&path).expect("load failed");
        assert_eq!(loaded.classes.len(), 4);
        assert_eq!(loaded.base_max_hp(PlayerClass::Defect), Some(75));
        assert_eq!(loaded.relics.pool, tables().relics.pool);
        assert_eq!(loaded.cards.colorless, tables().cards.colorless);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = scratch_dir("missing");
        let tables = load_or_default(&dir);
        assert_eq!(tables.classes.len(), 4);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = scratch_dir("broken");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TABLES_FILE), "this is not ron (").unwrap();

        assert!(matches!(load_from(&dir.join(TABLES_FILE)), Err(DataError::Parse { .. })));
        assert_eq!(load_or_default(&dir).classes.len(), 4);

        let _ = fs::remove_dir_all(&dir);
    }
}
