//! Persisted loadout record

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::loadout::{BuiltLoadout, CardEntry, PlayerClass};

/// Record format version for compatibility checking
pub const RECORD_VERSION: u32 = 1;

/// Relic that grants two extra potion slots
const POTION_BELT: &str = "Potion Belt";

/// A card as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub id: String,
    pub upgrades: u32,
}

impl From<&CardEntry> for CardData {
    fn from(entry: &CardEntry) -> Self {
        Self { id: entry.card_id.clone(), upgrades: u32::from(entry.upgraded) }
    }
}

/// A saved loadout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutRecord {
    pub version: u32,
    pub uuid: String,
    pub name: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    pub character_class: PlayerClass,
    pub max_hp: i32,
    pub current_hp: i32,
    /// 0 in records written before slots were stored
    #[serde(default)]
    pub potion_slots: u32,
    pub ascension_level: u32,
    pub deck: Vec<CardData>,
    pub relics: Vec<String>,
    pub potions: Vec<String>,
    pub content_hash: String,
}

impl LoadoutRecord {
    /// Wrap a generated loadout under a fresh UUID
    pub fn from_built(loadout: &BuiltLoadout, name: impl Into<String>, created_at: i64) -> Self {
        let deck: Vec<CardData> = loadout.deck.iter().map(CardData::from).collect();
        let content_hash = content_hash(&deck, &loadout.relics, &loadout.potions);

        Self {
            version: RECORD_VERSION,
            uuid: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at,
            character_class: loadout.player_class,
            max_hp: loadout.max_hp,
            current_hp: loadout.current_hp,
            potion_slots: loadout.potion_slots,
            ascension_level: loadout.ascension,
            deck,
            relics: loadout.relics.clone(),
            potions: loadout.potions.clone(),
            content_hash,
        }
    }

    /// Stored slot count, or the count implied by ascension and relics for
    /// legacy records
    pub fn effective_potion_slots(&self) -> u32 {
        if self.potion_slots > 0 {
            return self.potion_slots;
        }
        let base = if self.ascension_level >= 11 { 2 } else { 3 };
        if self.relics.iter().any(|r| r == POTION_BELT) {
            base + 2
        } else {
            base
        }
    }

    /// Whether the stored hash still matches the contents
    pub fn hash_matches(&self) -> bool {
        self.content_hash == content_hash(&self.deck, &self.relics, &self.potions)
    }

    pub fn to_built(&self) -> BuiltLoadout {
        BuiltLoadout {
            player_class: self.character_class,
            deck: self
                .deck
                .iter()
                .map(|c| CardEntry::new(c.id.as_str(), c.upgrades > 0))
                .collect(),
            relics: self.relics.clone(),
            potions: self.potions.clone(),
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            potion_slots: self.effective_potion_slots(),
            ascension: self.ascension_level,
        }
    }
}

/// SHA-256 hex of `deck_json|relics_json|potions_json`
pub fn content_hash(deck: &[CardData], relics: &[String], potions: &[String]) -> String {
    // Serializing plain strings and integers cannot fail
    let deck_json = serde_json::to_string(deck).unwrap_or_default();
    let relics_json = serde_json::to_string(relics).unwrap_or_default();
    let potions_json = serde_json::to_string(potions).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(deck_json.as_bytes());
    hasher.update(b"|");
    hasher.update(relics_json.as_bytes());
    hasher.update(b"|");
    hasher.update(potions_json.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
