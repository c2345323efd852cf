//! Loadout configuration tables
//!
//! Immutable struct-of-maps holding every lookup the builder consults.
//! Keys are the host game's IDs, spelled exactly as the game spells them.
//! Lookups never fail: unknown IDs get the defaults below.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::loadout::{CardColor, CardType, PlayerClass, Synergy};
use super::encounters::EncounterCatalog;

/// Priority for cards missing from a class priority table (lower is better)
pub const DEFAULT_PRIORITY: i32 = 100;
/// Copy cap for cards missing from the max-copies table
pub const DEFAULT_MAX_COPIES: u32 = 3;

/// Per-class configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTable {
    pub class: PlayerClass,
    pub color: CardColor,
    pub base_max_hp: i32,
    pub starter_relic: Option<String>,
    pub starter_deck: Vec<String>,
    /// Every card this class can draft, rares included
    pub cards: Vec<String>,
    /// Subset used by the rare-card event
    pub rare_cards: Vec<String>,
    /// Card priority; lower means the card is considered better
    pub priorities: HashMap<String, i32>,
    /// Class-only potions, drawn alongside the common pool
    pub potions: Vec<String>,
}

/// Card metadata shared across classes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardTables {
    pub colorless: Vec<String>,
    pub skills: HashSet<String>,
    pub powers: HashSet<String>,
    /// Payoff cards and the synergy they depend on
    pub requirements: HashMap<String, Synergy>,
    /// Cards that produce each synergy
    pub generators: HashMap<Synergy, HashSet<String>>,
    pub max_copies: HashMap<String, u32>,
    /// Cards never offered in the arena
    pub excluded: HashSet<String>,
}

/// Relic metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelicTables {
    /// Every relic the builder may offer, in a fixed order
    pub pool: Vec<String>,
    /// Class-exclusive relics
    pub owners: HashMap<String, PlayerClass>,
    /// Relics with no effect in a single isolated fight
    pub useless: HashSet<String>,
    /// Relics that replace a starter or need run state
    pub excluded: HashSet<String>,
    /// Relics that grant extra potion slots when picked
    pub potion_slot_bonus: HashMap<String, u32>,
}

/// The complete configuration set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutTables {
    pub classes: Vec<ClassTable>,
    pub cards: CardTables,
    pub relics: RelicTables,
    pub common_potions: Vec<String>,
    pub encounters: EncounterCatalog,
}

impl LoadoutTables {
    /// Table for a class, if configured
    pub fn class(&self, class: PlayerClass) -> Option<&ClassTable> {
        self.classes.iter().find(|t| t.class == class)
    }

    /// Classes this table set can build for
    pub fn configured_classes(&self) -> Vec<PlayerClass> {
        PlayerClass::ALL
            .iter()
            .copied()
            .filter(|&c| self.class(c).is_some())
            .collect()
    }

    pub fn base_max_hp(&self, class: PlayerClass) -> Option<i32> {
        self.class(class).map(|t| t.base_max_hp)
    }

    pub fn starter_relic(&self, class: PlayerClass) -> Option<&str> {
        self.class(class).and_then(|t| t.starter_relic.as_deref())
    }

    pub fn starter_deck(&self, class: PlayerClass) -> &[String] {
        self.class(class).map(|t| t.starter_deck.as_slice()).unwrap_or(&[])
    }

    // -------------------------------------------------------------------------
    // Cards
    // -------------------------------------------------------------------------

    /// Card type; anything not listed as a skill or power is an attack
    pub fn card_type(&self, card_id: &str) -> CardType {
        if self.cards.powers.contains(card_id) {
            CardType::Power
        } else if self.cards.skills.contains(card_id) {
            CardType::Skill
        } else {
            CardType::Attack
        }
    }

    pub fn synergy_requirement(&self, card_id: &str) -> Option<Synergy> {
        self.cards.requirements.get(card_id).copied()
    }

    /// Whether this card produces the given synergy
    pub fn generates(&self, card_id: &str, synergy: Synergy) -> bool {
        self.cards
            .generators
            .get(&synergy)
            .is_some_and(|set| set.contains(card_id))
    }

    /// Every synergy this card produces, in a stable order
    pub fn generated_synergies<'a>(&'a self, card_id: &'a str) -> impl Iterator<Item = Synergy> + 'a {
        Synergy::ALL.into_iter().filter(move |&s| self.generates(card_id, s))
    }

    pub fn card_priority(&self, card_id: &str, class: PlayerClass) -> i32 {
        self.class(class)
            .and_then(|t| t.priorities.get(card_id).copied())
            .unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn max_copies(&self, card_id: &str) -> u32 {
        self.cards.max_copies.get(card_id).copied().unwrap_or(DEFAULT_MAX_COPIES)
    }

    /// Cards that need state carried across fights
    pub fn is_excluded_card(&self, card_id: &str) -> bool {
        (card_id.contains("Ritual") && card_id.contains("Dagger"))
            || self.cards.excluded.contains(card_id)
    }

    /// Draftable class cards, exclusions removed
    pub fn class_cards(&self, class: PlayerClass) -> Vec<&str> {
        self.class(class)
            .map(|t| {
                t.cards
                    .iter()
                    .map(String::as_str)
                    .filter(|id| !self.is_excluded_card(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn rare_cards(&self, class: PlayerClass) -> Vec<&str> {
        self.class(class)
            .map(|t| {
                t.rare_cards
                    .iter()
                    .map(String::as_str)
                    .filter(|id| !self.is_excluded_card(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn colorless_cards(&self) -> Vec<&str> {
        self.cards
            .colorless
            .iter()
            .map(String::as_str)
            .filter(|id| !self.is_excluded_card(id))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Relics
    // -------------------------------------------------------------------------

    /// Owning class of a class-exclusive relic
    pub fn relic_owner(&self, relic_id: &str) -> Option<PlayerClass> {
        self.relics.owners.get(relic_id).copied()
    }

    pub fn is_useless_relic(&self, relic_id: &str) -> bool {
        self.relics.useless.contains(relic_id)
    }

    pub fn is_excluded_relic(&self, relic_id: &str) -> bool {
        self.relics.excluded.contains(relic_id)
    }

    /// Whether `class` may be offered this relic at all
    pub fn relic_allowed_for(&self, relic_id: &str, class: PlayerClass) -> bool {
        if self.is_useless_relic(relic_id) || self.is_excluded_relic(relic_id) {
            return false;
        }
        match self.relic_owner(relic_id) {
            Some(owner) => owner == class,
            None => true,
        }
    }

    /// Relic pool filtered for `class`, in pool order
    pub fn available_relics(&self, class: PlayerClass) -> Vec<&str> {
        self.relics
            .pool
            .iter()
            .map(String::as_str)
            .filter(|id| self.relic_allowed_for(id, class))
            .collect()
    }

    pub fn potion_slot_bonus(&self, relic_id: &str) -> u32 {
        self.relics.potion_slot_bonus.get(relic_id).copied().unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Potions
    // -------------------------------------------------------------------------

    /// Common potions followed by the class's own
    pub fn available_potions(&self, class: PlayerClass) -> Vec<&str> {
        let mut potions: Vec<&str> = self.common_potions.iter().map(String::as_str).collect();
        if let Some(t) = self.class(class) {
            potions.extend(t.potions.iter().map(String::as_str));
        }
        potions
    }
}

#[cfg(test)]
mod tests {
    use crate::data::default_tables;
    use crate::loadout::{CardType, PlayerClass, Synergy};
    use super::*;

    #[test]
    fn test_unknown_ids_get_defaults() {
        let tables = default_tables();
        let unknown = "Definitely Not A Card";

        assert_eq!(tables.card_type(unknown), CardType::Attack);
        assert_eq!(tables.card_priority(unknown, PlayerClass::Ironclad), DEFAULT_PRIORITY);
        assert_eq!(tables.max_copies(unknown), DEFAULT_MAX_COPIES);
        assert_eq!(tables.synergy_requirement(unknown), None);
        assert_eq!(tables.generated_synergies(unknown).count(), 0);
        assert_eq!(tables.relic_owner("Not A Relic"), None);
    }

    #[test]
    fn test_base_hp_and_starter_relics() {
        let tables = default_tables();
        assert_eq!(tables.base_max_hp(PlayerClass::Ironclad), Some(80));
        assert_eq!(tables.base_max_hp(PlayerClass::Silent), Some(70));
        assert_eq!(tables.base_max_hp(PlayerClass::Defect), Some(75));
        assert_eq!(tables.base_max_hp(PlayerClass::Watcher), Some(72));

        assert_eq!(tables.starter_relic(PlayerClass::Ironclad), Some("Burning Blood"));
        assert_eq!(tables.starter_relic(PlayerClass::Silent), Some("Ring of the Snake"));
        assert_eq!(tables.starter_relic(PlayerClass::Defect), Some("Cracked Core"));
        assert_eq!(tables.starter_relic(PlayerClass::Watcher), Some("PureWater"));
    }

    #[test]
    fn test_card_types() {
        let tables = default_tables();
        assert_eq!(tables.card_type("Bash"), CardType::Attack);
        assert_eq!(tables.card_type("Shrug It Off"), CardType::Skill);
        assert_eq!(tables.card_type("Demon Form"), CardType::Power);
        assert_eq!(tables.card_type("TalkToTheHand"), CardType::Attack);
        assert_eq!(tables.card_type("MentalFortress"), CardType::Power);
    }

    #[test]
    fn test_excluded_relics() {
        let tables = default_tables();
        for id in ["Black Blood", "Ring of the Serpent", "FrozenCore", "HolyWater",
                   "Circlet", "Red Circlet", "NeowsBlessing"] {
            assert!(tables.is_excluded_relic(id), "{} should be excluded", id);
        }
        for id in ["Vajra", "Bag of Preparation", "Snecko Eye"] {
            assert!(!tables.is_excluded_relic(id), "{} should not be excluded", id);
        }
    }

    #[test]
    fn test_excluded_cards() {
        let tables = default_tables();
        assert!(tables.is_excluded_card("Ritual Dagger"));
        assert!(!tables.is_excluded_card("LessonLearned"));
        assert!(!tables.is_excluded_card("Inflame"));
        assert!(!tables.class_cards(PlayerClass::Ironclad).contains(&"Ritual Dagger"));
    }

    #[test]
    fn test_available_relics_respect_class_and_filters() {
        let tables = default_tables();
        for class in PlayerClass::ALL {
            for relic in tables.available_relics(class) {
                assert!(!tables.is_useless_relic(relic));
                assert!(!tables.is_excluded_relic(relic));
                if let Some(owner) = tables.relic_owner(relic) {
                    assert_eq!(owner, class, "{} offered to {}", relic, class);
                }
            }
        }
        assert!(tables.available_relics(PlayerClass::Silent).contains(&"Ninja Scroll"));
        assert!(!tables.available_relics(PlayerClass::Ironclad).contains(&"Ninja Scroll"));
    }

    #[test]
    fn test_poison_payoffs_are_not_poison_generators() {
        let tables = default_tables();
        for (card, synergy) in &tables.cards.requirements {
            if *synergy == Synergy::Poison {
                assert!(!tables.generates(card, Synergy::Poison), "{}", card);
            }
        }
    }

    #[test]
    fn test_starter_decks_fit_copy_caps() {
        let tables = default_tables();
        for class in PlayerClass::ALL {
            let deck = tables.starter_deck(class);
            assert!(!deck.is_empty());
            for id in deck {
                let copies = deck.iter().filter(|c| *c == id).count() as u32;
                assert!(copies <= tables.max_copies(id), "{} x{}", id, copies);
            }
        }
    }

    #[test]
    fn test_class_potions_follow_common_pool() {
        let tables = default_tables();
        let potions = tables.available_potions(PlayerClass::Silent);
        assert_eq!(potions.len(), tables.common_potions.len() + 3);
        assert!(potions.contains(&"Poison Potion"));
        assert!(!potions.contains(&"BloodPotion"));
    }
}
