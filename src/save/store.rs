//! On-disk loadout store
//!
//! One pretty-printed JSON file per loadout, named by UUID.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::loadout::BuiltLoadout;
use super::record::{LoadoutRecord, RECORD_VERSION};

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("No saved loadout with id {0}")]
    NotFound(String),
}

/// Brief summary of a saved loadout for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadoutSummary {
    pub uuid: String,
    pub name: String,
    pub created_at: i64,
    pub description: String,
}

/// Get the default store directory
pub fn store_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "stsarena", "STSArena") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("loadouts");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./loadouts")
    }
}

/// Directory of saved loadout records
pub struct LoadoutStore {
    dir: PathBuf,
}

impl LoadoutStore {
    /// Store in the platform data directory
    pub fn open_default() -> Result<Self, SaveError> {
        Self::open(store_directory())
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, uuid: &str) -> PathBuf {
        self.dir.join(format!("{}.json", uuid))
    }

    /// Name for the next generated loadout, `"Random #N"`
    pub fn next_name(&self) -> Result<String, SaveError> {
        Ok(format!("Random #{}", self.record_paths()?.len() + 1))
    }

    /// Persist a freshly generated loadout and return its record
    pub fn save_generated(&self, loadout: &BuiltLoadout) -> Result<LoadoutRecord, SaveError> {
        let name = self.next_name()?;
        let record = LoadoutRecord::from_built(loadout, name, Utc::now().timestamp_millis());
        self.save(&record)?;
        Ok(record)
    }

    pub fn save(&self, record: &LoadoutRecord) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.uuid), json)?;
        log::info!(
            "Saved loadout '{}' ({}), content hash {}",
            record.name,
            record.uuid,
            record.content_hash
        );
        Ok(())
    }

    pub fn load(&self, uuid: &str) -> Result<LoadoutRecord, SaveError> {
        let path = self.record_path(uuid);
        if !path.exists() {
            return Err(SaveError::NotFound(uuid.to_string()));
        }
        let record = read_record(&path)?;
        if !record.hash_matches() {
            log::warn!("Loadout '{}' was edited after it was saved", record.name);
        }
        Ok(record)
    }

    /// Summaries of every readable record, oldest first
    pub fn list(&self) -> Result<Vec<LoadoutSummary>, SaveError> {
        let mut summaries = Vec::new();
        for path in self.record_paths()? {
            match read_record(&path) {
                Ok(record) => summaries.push(LoadoutSummary {
                    description: record.to_built().to_string(),
                    uuid: record.uuid,
                    name: record.name,
                    created_at: record.created_at,
                }),
                Err(e) => log::warn!("Skipping unreadable loadout {:?}: {}", path, e),
            }
        }
        summaries.sort_by_key(|s| s.created_at);
        Ok(summaries)
    }

    /// Delete a record; missing records are not an error
    pub fn delete(&self, uuid: &str) -> Result<(), SaveError> {
        let path = self.record_path(uuid);
        if path.exists() {
            fs::remove_file(&path)?;
            log::info!("Deleted loadout {}", uuid);
        }
        Ok(())
    }

    fn record_paths(&self) -> Result<Vec<PathBuf>, SaveError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

fn read_record(path: &Path) -> Result<LoadoutRecord, SaveError> {
    let data = fs::read_to_string(path)?;
    let record: LoadoutRecord = serde_json::from_str(&data)?;
    if record.version != RECORD_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: RECORD_VERSION,
            found: record.version,
        });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::{generate_for_class, PlayerClass};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scratch_store(name: &str) -> LoadoutStore {
        let dir = std::env::temp_dir().join(format!("stsarena-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        LoadoutStore::open(dir).unwrap()
    }

    #[test]
    fn test_save_load_list_delete() {
        let store = scratch_store("cycle");
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let built = generate_for_class(PlayerClass::Watcher, &mut rng).unwrap();

        let first = store.save_generated(&built).unwrap();
        assert_eq!(first.name, "Random #1");
        let second = store.save_generated(&built).unwrap();
        assert_eq!(second.name, "Random #2");

        let loaded = store.load(&first.uuid).unwrap();
        assert_eq!(loaded, first);
        assert_eq!(loaded.to_built(), built);

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().any(|s| s.uuid == second.uuid));
        assert_eq!(listed[0].description, built.to_string());

        store.delete(&first.uuid).unwrap();
        assert!(matches!(store.load(&first.uuid), Err(SaveError::NotFound(_))));
        store.delete(&first.uuid).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_version_mismatch() {
        let store = scratch_store("version");
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let built = generate_for_class(PlayerClass::Silent, &mut rng).unwrap();
        let mut record = LoadoutRecord::from_built(&built, "old", 0);
        record.version = RECORD_VERSION + 1;
        store.save(&record).unwrap();

        match store.load(&record.uuid) {
            Err(SaveError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, RECORD_VERSION);
                assert_eq!(found, RECORD_VERSION + 1);
            }
            other => panic!("expected version mismatch, got {:?}", other),
        }
        assert!(store.list().unwrap().is_empty());

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let store = scratch_store("corrupt");
        fs::write(store.dir().join("broken.json"), "{ not json").unwrap();
        assert!(matches!(store.load("broken"), Err(SaveError::Parse(_))));
        assert!(store.list().unwrap().is_empty());

        let _ = fs::remove_dir_all(store.dir());
    }
}
