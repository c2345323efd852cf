//! Encounter catalog
//!
//! Internal encounter IDs the host game uses to spawn a fight.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Encounter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    Normal,
    Elite,
    Boss,
}

/// A single fight the arena can start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: String,
    /// Act the encounter belongs to (1-4)
    pub act: u8,
    pub kind: EncounterKind,
}

/// Collection of encounters, in act order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterCatalog {
    pub encounters: Vec<Encounter>,
}

impl EncounterCatalog {
    /// Find an encounter by ID
    pub fn find(&self, id: &str) -> Option<&Encounter> {
        self.encounters.iter().find(|e| e.id == id)
    }

    /// Flat list of IDs
    pub fn ids(&self) -> Vec<&str> {
        self.encounters.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn for_act(&self, act: u8) -> Vec<&Encounter> {
        self.encounters.iter().filter(|e| e.act == act).collect()
    }

    pub fn of_kind(&self, kind: EncounterKind) -> Vec<&Encounter> {
        self.encounters.iter().filter(|e| e.kind == kind).collect()
    }

    pub fn is_elite(&self, id: &str) -> bool {
        self.find(id).is_some_and(|e| e.kind == EncounterKind::Elite)
    }

    pub fn is_boss(&self, id: &str) -> bool {
        self.find(id).is_some_and(|e| e.kind == EncounterKind::Boss)
    }

    /// Uniformly random encounter from any act
    pub fn random(&self, rng: &mut impl Rng) -> Option<&Encounter> {
        if self.encounters.is_empty() {
            return None;
        }
        Some(&self.encounters[rng.gen_range(0..self.encounters.len())])
    }
}

fn group<'a>(act: u8, kind: EncounterKind, ids: &'a [&'a str]) -> impl Iterator<Item = Encounter> + 'a {
    ids.iter().map(move |id| Encounter { id: id.to_string(), act, kind })
}

/// Create the default catalog (hardcoded fallback)
pub fn default_encounter_catalog() -> EncounterCatalog {
    use EncounterKind::*;

    let mut encounters = Vec::new();

    // === ACT 1 ===
    encounters.extend(group(1, Normal, &[
        "Cultist", "Jaw Worm", "2 Louse", "Small Slimes", "Blue Slaver", "Gremlin Gang",
        "Looter", "Large Slime", "Lots of Slimes", "Exordium Thugs", "Exordium Wildlife",
        "Red Slaver", "3 Louse", "2 Fungi Beasts",
    ]));
    encounters.extend(group(1, Elite, &["Gremlin Nob", "Lagavulin", "3 Sentries"]));
    encounters.extend(group(1, Boss, &["The Guardian", "Hexaghost", "Slime Boss"]));

    // === ACT 2 ===
    encounters.extend(group(2, Normal, &[
        "Chosen", "Shell Parasite", "Spheric Guardian", "3 Byrds", "2 Thieves",
        "Chosen and Byrds", "Sentry and Sphere", "Snake Plant", "Snecko",
        "Centurion and Healer", "Cultist and Chosen", "3 Cultists",
        "Shelled Parasite and Fungi",
    ]));
    encounters.extend(group(2, Elite, &["Gremlin Leader", "Slavers", "Book of Stabbing"]));
    encounters.extend(group(2, Boss, &["Automaton", "Collector", "Champ"]));

    // === ACT 3 ===
    encounters.extend(group(3, Normal, &[
        "3 Darklings", "Orb Walker", "3 Shapes", "Spire Growth", "Transient", "4 Shapes",
        "Maw", "Jaw Worm Horde", "Sphere and 2 Shapes", "Writhing Mass",
    ]));
    encounters.extend(group(3, Elite, &["Giant Head", "Nemesis", "Reptomancer"]));
    encounters.extend(group(3, Boss, &["Awakened One", "Time Eater", "Donu and Deca"]));

    // === ACT 4 ===
    encounters.extend(group(4, Elite, &["Shield and Spear"]));
    encounters.extend(group(4, Boss, &["The Heart"]));

    EncounterCatalog { encounters }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_catalog_contents() {
        let catalog = default_encounter_catalog();
        assert_eq!(catalog.encounters.len(), 57);
        assert!(catalog.find("Cultist").is_some());
        assert!(catalog.find("Jaw Worm").is_some());
        assert!(catalog.is_elite("Gremlin Nob"));
        assert!(catalog.is_boss("The Heart"));
        assert!(!catalog.is_boss("Cultist"));
        assert!(catalog.for_act(1).len() >= 10);
        assert_eq!(catalog.of_kind(EncounterKind::Boss).len(), 10);
    }

    #[test]
    fn test_random_encounter() {
        let catalog = default_encounter_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let encounter = catalog.random(&mut rng).unwrap();
            assert!(catalog.find(&encounter.id).is_some());
        }
        assert!(EncounterCatalog::default().random(&mut rng).is_none());
    }
}
