//! Card entries, card types, and synergy tracking

use std::fmt;

use serde::{Deserialize, Serialize};

/// A card in a deck, identified by its opaque host-game ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    pub card_id: String,
    pub upgraded: bool,
}

impl CardEntry {
    pub fn new(card_id: impl Into<String>, upgraded: bool) -> Self {
        Self { card_id: card_id.into(), upgraded }
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upgraded {
            write!(f, "{}+", self.card_id)
        } else {
            f.write_str(&self.card_id)
        }
    }
}

/// Card type, as far as deck composition scoring cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

impl CardType {
    pub fn name(&self) -> &'static str {
        match self {
            CardType::Attack => "ATTACK",
            CardType::Skill => "SKILL",
            CardType::Power => "POWER",
        }
    }
}

/// Deck archetypes a card can generate or depend on.
///
/// A card whose requirement is `Poison` is a poison payoff; a card in the
/// `Poison` generator set applies poison itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Synergy {
    Orbs,
    Shivs,
    Poison,
    Block,
    Strength,
    Focus,
    Mantra,
    Retain,
}

impl Synergy {
    pub const ALL: [Synergy; 8] = [
        Synergy::Orbs,
        Synergy::Shivs,
        Synergy::Poison,
        Synergy::Block,
        Synergy::Strength,
        Synergy::Focus,
        Synergy::Mantra,
        Synergy::Retain,
    ];

    /// Generator count a payoff needs before it may be added
    pub fn payoff_threshold(&self) -> u32 {
        match self {
            Synergy::Block => 3,
            _ => 1,
        }
    }
}

/// Running tallies of synergy generators added during construction.
///
/// Counters only ever go up; starter cards are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynergyCounters {
    pub orb_gen: u32,
    pub shiv_gen: u32,
    pub poison: u32,
    pub block_gen: u32,
    pub strength_gen: u32,
    pub focus_gen: u32,
    pub mantra: u32,
    pub retain: u32,
}

impl SynergyCounters {
    pub fn get(&self, synergy: Synergy) -> u32 {
        match synergy {
            Synergy::Orbs => self.orb_gen,
            Synergy::Shivs => self.shiv_gen,
            Synergy::Poison => self.poison,
            Synergy::Block => self.block_gen,
            Synergy::Strength => self.strength_gen,
            Synergy::Focus => self.focus_gen,
            Synergy::Mantra => self.mantra,
            Synergy::Retain => self.retain,
        }
    }

    pub fn increment(&mut self, synergy: Synergy) {
        let counter = match synergy {
            Synergy::Orbs => &mut self.orb_gen,
            Synergy::Shivs => &mut self.shiv_gen,
            Synergy::Poison => &mut self.poison,
            Synergy::Block => &mut self.block_gen,
            Synergy::Strength => &mut self.strength_gen,
            Synergy::Focus => &mut self.focus_gen,
            Synergy::Mantra => &mut self.mantra,
            Synergy::Retain => &mut self.retain,
        };
        *counter += 1;
    }

    /// True if no counter in `self` is below the same counter in `earlier`
    pub fn dominates(&self, earlier: &SynergyCounters) -> bool {
        Synergy::ALL.iter().all(|&s| self.get(s) >= earlier.get(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_entry_display() {
        assert_eq!(CardEntry::new("Bash", false).to_string(), "Bash");
        assert_eq!(CardEntry::new("Bash", true).to_string(), "Bash+");
    }

    #[test]
    fn test_counters_increment_and_dominate() {
        let before = SynergyCounters::default();
        let mut after = before;
        after.increment(Synergy::Poison);
        after.increment(Synergy::Poison);

        assert_eq!(after.get(Synergy::Poison), 2);
        assert_eq!(after.get(Synergy::Orbs), 0);
        assert!(after.dominates(&before));
        assert!(!before.dominates(&after));
    }

    #[test]
    fn test_payoff_thresholds() {
        assert_eq!(Synergy::Block.payoff_threshold(), 3);
        assert_eq!(Synergy::Poison.payoff_threshold(), 1);
    }
}
