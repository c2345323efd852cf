//! Loadout builder
//!
//! Seeds a starter loadout for a class, then runs a pseudo-run of weighted
//! random edit events over it. Synergy counters gate and score every card
//! addition so the result looks like a deck a player might have drafted.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{self, LoadoutTables};
use super::card::{CardEntry, CardType, Synergy, SynergyCounters};
use super::class::PlayerClass;
use super::error::LoadoutError;

/// Finalized decks never hold fewer cards than this
pub const MIN_DECK_SIZE: usize = 10;
/// Finalized decks never hold more cards than this
pub const MAX_DECK_SIZE: usize = 35;
/// Relic cap, starter relic included
pub const MAX_RELICS: usize = 5;

const BASE_POTION_SLOTS: u32 = 3;
const HIGH_ASCENSION_POTION_SLOTS: u32 = 2;
const MAX_ASCENSION: u32 = 20;
/// First ascension level that costs a potion slot
const POTION_SLOT_PENALTY_ASCENSION: u32 = 11;

/// Remove-worst never shrinks the deck to or below this
const REMOVAL_FLOOR: usize = 5;
const CANDIDATES_PER_DRAFT: usize = 3;
/// Finalization gives up filling the deck after this many draft attempts
const FILL_ATTEMPT_LIMIT: usize = 200;

const STARTER_REMOVAL_CHANCE: f64 = 0.10;
const COLORLESS_CHANCE: f64 = 0.20;
const UPGRADE_CHANCE: f64 = 0.30;
const RARE_UPGRADE_CHANCE: f64 = 0.50;
const POTION_TOP_UP_CHANCE: f64 = 0.60;

// Cumulative event thresholds; the remainder (5%) is the rare-card event
const ADD_CARD_BELOW: f64 = 0.35;
const ADD_RELIC_BELOW: f64 = 0.50;
const GAIN_POTION_BELOW: f64 = 0.60;
const REMOVE_CARD_BELOW: f64 = 0.70;
const UPGRADE_CARD_BELOW: f64 = 0.80;
const GAIN_HP_BELOW: f64 = 0.88;
const TRANSFORM_CARD_BELOW: f64 = 0.95;

/// Basic Strike of any class (`Strike_R`, `Strike_G`, ...)
fn is_basic_strike(card_id: &str) -> bool {
    card_id == "Strike" || card_id.starts_with("Strike_")
}

/// Basic Defend of any class
fn is_basic_defend(card_id: &str) -> bool {
    card_id == "Defend" || card_id.starts_with("Defend_")
}

/// Remove-worst score; any Strike or Defend by name goes before other cards
fn removal_score(tables: &LoadoutTables, class: PlayerClass, card_id: &str) -> i32 {
    if card_id.contains("Strike") {
        100
    } else if card_id.contains("Defend") {
        80
    } else {
        tables.card_priority(card_id, class) - 50
    }
}

/// A finished loadout, plain data for the conversion and persistence layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltLoadout {
    pub player_class: PlayerClass,
    pub deck: Vec<CardEntry>,
    pub relics: Vec<String>,
    pub potions: Vec<String>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub potion_slots: u32,
    pub ascension: u32,
}

impl BuiltLoadout {
    /// Number of copies of a card ID in the deck
    pub fn copies_of(&self, card_id: &str) -> usize {
        self.deck.iter().filter(|c| c.card_id == card_id).count()
    }

    pub fn upgraded_count(&self) -> usize {
        self.deck.iter().filter(|c| c.upgraded).count()
    }

    /// Cards of the given type, according to `tables`
    pub fn count_type(&self, tables: &LoadoutTables, card_type: CardType) -> usize {
        self.deck
            .iter()
            .filter(|c| tables.card_type(&c.card_id) == card_type)
            .count()
    }
}

impl fmt::Display for BuiltLoadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} cards, {} relics, {} potions, {}/{} HP, A{}",
            self.player_class,
            self.deck.len(),
            self.relics.len(),
            self.potions.len(),
            self.current_hp,
            self.max_hp,
            self.ascension
        )
    }
}

/// Single-owner working state for one loadout.
///
/// Created per request, mutated by the event methods, and consumed by
/// [`LoadoutBuilder::build`].
pub struct LoadoutBuilder<'a, R: Rng> {
    tables: &'a LoadoutTables,
    rng: &'a mut R,
    class: PlayerClass,
    deck: Vec<CardEntry>,
    relics: Vec<String>,
    potions: Vec<String>,
    max_hp: i32,
    current_hp: i32,
    potion_slots: u32,
    ascension: u32,
    counters: SynergyCounters,
}

impl<'a, R: Rng> LoadoutBuilder<'a, R> {
    /// Seed a builder from the built-in tables
    pub fn new(class: PlayerClass, rng: &'a mut R) -> Result<Self, LoadoutError> {
        Self::with_tables(class, data::tables(), rng)
    }

    /// Seed a builder from a class token such as `"IRONCLAD"`
    pub fn from_class_name(class_name: &str, rng: &'a mut R) -> Result<Self, LoadoutError> {
        let class: PlayerClass = class_name.parse()?;
        Self::new(class, rng)
    }

    /// Seed a builder from an explicit table set
    pub fn with_tables(
        class: PlayerClass,
        tables: &'a LoadoutTables,
        rng: &'a mut R,
    ) -> Result<Self, LoadoutError> {
        let table = tables
            .class(class)
            .ok_or(LoadoutError::MissingClassTable(class))?;

        let relics = table.starter_relic.iter().cloned().collect();
        let deck = table
            .starter_deck
            .iter()
            .map(|id| CardEntry::new(id.as_str(), false))
            .collect();

        Ok(Self {
            tables,
            rng,
            class,
            deck,
            relics,
            potions: Vec::new(),
            max_hp: table.base_max_hp,
            current_hp: table.base_max_hp,
            potion_slots: BASE_POTION_SLOTS,
            ascension: 0,
            counters: SynergyCounters::default(),
        })
    }

    pub fn class(&self) -> PlayerClass {
        self.class
    }

    pub fn deck(&self) -> &[CardEntry] {
        &self.deck
    }

    pub fn relics(&self) -> &[String] {
        &self.relics
    }

    pub fn potions(&self) -> &[String] {
        &self.potions
    }

    pub fn potion_slots(&self) -> u32 {
        self.potion_slots
    }

    pub fn ascension(&self) -> u32 {
        self.ascension
    }

    /// Snapshot of the synergy counters
    pub fn counters(&self) -> SynergyCounters {
        self.counters
    }

    /// Roll ascension, thin the starter deck, run `num_events` edit events
    /// and finalize
    pub fn apply_random_events(&mut self, num_events: usize) {
        self.roll_ascension();
        self.thin_starter_deck();

        for _ in 0..num_events {
            self.apply_one_event();
        }

        self.finalize();
    }

    /// Freeze the working state
    pub fn build(self) -> BuiltLoadout {
        BuiltLoadout {
            player_class: self.class,
            deck: self.deck,
            relics: self.relics,
            potions: self.potions,
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            potion_slots: self.potion_slots,
            ascension: self.ascension,
        }
    }

    fn roll_ascension(&mut self) {
        self.ascension = self.rng.gen_range(0..=MAX_ASCENSION);
        if self.ascension >= POTION_SLOT_PENALTY_ASCENSION {
            self.potion_slots = HIGH_ASCENSION_POTION_SLOTS;
            self.potions.truncate(self.potion_slots as usize);
        }
    }

    fn thin_starter_deck(&mut self) {
        let strikes = self.deck.iter().filter(|c| is_basic_strike(&c.card_id)).count();
        if strikes > 0 {
            let to_remove = self.rng.gen_range(0..strikes);
            for _ in 0..to_remove {
                self.remove_last_matching(is_basic_strike);
            }
        }

        let defends = self.deck.iter().filter(|c| is_basic_defend(&c.card_id)).count();
        if defends > 0 {
            let to_remove = self.rng.gen_range(0..defends);
            for _ in 0..to_remove {
                self.remove_last_matching(is_basic_defend);
            }
        }

        let rng = &mut *self.rng;
        self.deck.retain(|card| {
            is_basic_strike(&card.card_id)
                || is_basic_defend(&card.card_id)
                || !rng.gen_bool(STARTER_REMOVAL_CHANCE)
        });

        log::debug!("Thinned {} starter deck to {} cards", self.class, self.deck.len());
    }

    fn remove_last_matching(&mut self, matches: fn(&str) -> bool) {
        if let Some(idx) = self.deck.iter().rposition(|c| matches(&c.card_id)) {
            self.deck.remove(idx);
        }
    }

    fn apply_one_event(&mut self) {
        let roll: f64 = self.rng.gen();

        if roll < ADD_CARD_BELOW {
            self.add_random_card();
        } else if roll < ADD_RELIC_BELOW {
            self.add_random_relic();
        } else if roll < GAIN_POTION_BELOW {
            self.gain_potion();
        } else if roll < REMOVE_CARD_BELOW {
            self.remove_worst_card();
        } else if roll < UPGRADE_CARD_BELOW {
            self.upgrade_random_card();
        } else if roll < GAIN_HP_BELOW {
            self.gain_max_hp();
        } else if roll < TRANSFORM_CARD_BELOW {
            self.transform_card();
        } else {
            self.add_rare_card();
        }
    }

    // -------------------------------------------------------------------------
    // Cards
    // -------------------------------------------------------------------------

    fn copies_of(&self, card_id: &str) -> u32 {
        self.deck.iter().filter(|c| c.card_id == card_id).count() as u32
    }

    /// Whether a card may be added right now
    pub fn should_add_card(&self, card_id: &str) -> bool {
        let tables = self.tables;
        if self.copies_of(card_id) >= tables.max_copies(card_id) {
            return false;
        }

        match tables.synergy_requirement(card_id) {
            Some(synergy) => {
                self.counters.get(synergy) >= synergy.payoff_threshold()
                    || tables.generates(card_id, synergy)
            }
            None => true,
        }
    }

    /// Desirability of adding a card; higher is better
    pub fn score_card(&self, card_id: &str) -> i32 {
        let tables = self.tables;
        let mut score = 100 - tables.card_priority(card_id, self.class);

        if tables.generates(card_id, Synergy::Orbs) && self.counters.orb_gen < 3 {
            score += 20;
        }
        if tables.generates(card_id, Synergy::Shivs) && self.counters.shiv_gen < 2 {
            score += 15;
        }
        if tables.generates(card_id, Synergy::Poison) && self.counters.poison > 0 {
            score += 10;
        }
        if tables.generates(card_id, Synergy::Block) && self.counters.block_gen < 5 {
            score += 5;
        }

        let deck_len = self.deck.len() as f64;
        let count = |t: CardType| {
            self.deck
                .iter()
                .filter(|c| tables.card_type(&c.card_id) == t)
                .count()
        };
        match tables.card_type(card_id) {
            CardType::Attack if count(CardType::Attack) as f64 > deck_len * 0.55 => score -= 10,
            CardType::Skill if count(CardType::Skill) as f64 > deck_len * 0.5 => score -= 5,
            CardType::Power if count(CardType::Power) > 5 => score -= 15,
            _ => {}
        }

        score
    }

    /// Draft up to three eligible candidates and keep the best one.
    ///
    /// Returns false when nothing eligible was found.
    pub fn add_random_card(&mut self) -> bool {
        let tables = self.tables;
        let mut pool = tables.class_cards(self.class);
        if self.rng.gen_bool(COLORLESS_CHANCE) {
            pool.extend(tables.colorless_cards());
        }
        pool.retain(|id| self.should_add_card(id));

        let mut candidates = Vec::with_capacity(CANDIDATES_PER_DRAFT);
        while candidates.len() < CANDIDATES_PER_DRAFT && !pool.is_empty() {
            let idx = self.rng.gen_range(0..pool.len());
            candidates.push(pool.remove(idx));
        }

        let mut best: Option<(&str, i32)> = None;
        for id in candidates {
            let score = self.score_card(id);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((id, score));
            }
        }

        match best {
            Some((id, score)) => {
                let upgraded = self.rng.gen_bool(UPGRADE_CHANCE);
                log::debug!("Adding {} (score {}, upgraded: {})", id, score, upgraded);
                self.push_card(id, upgraded);
                true
            }
            None => {
                log::debug!("No eligible card to add");
                false
            }
        }
    }

    fn push_card(&mut self, card_id: &str, upgraded: bool) {
        self.deck.push(CardEntry::new(card_id, upgraded));
        for synergy in self.tables.generated_synergies(card_id) {
            self.counters.increment(synergy);
        }
    }

    /// Remove the card most worth cutting: basics first, then weak cards
    pub fn remove_worst_card(&mut self) {
        if self.deck.len() <= REMOVAL_FLOOR {
            return;
        }

        let mut worst: Option<(usize, i32)> = None;
        for (idx, card) in self.deck.iter().enumerate() {
            let score = removal_score(self.tables, self.class, &card.card_id);
            if worst.map_or(true, |(_, worst_score)| score > worst_score) {
                worst = Some((idx, score));
            }
        }

        if let Some((idx, _)) = worst {
            let removed = self.deck.remove(idx);
            log::debug!("Removed {}", removed);
        }
    }

    /// Upgrade one random card that is not upgraded yet
    pub fn upgrade_random_card(&mut self) {
        let candidates: Vec<usize> = self
            .deck
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.upgraded)
            .map(|(i, _)| i)
            .collect();

        if let Some(&idx) = candidates.choose(&mut *self.rng) {
            self.deck[idx].upgraded = true;
            log::debug!("Upgraded {}", self.deck[idx].card_id);
        }
    }

    /// Remove the worst card and draft a replacement
    pub fn transform_card(&mut self) {
        if self.deck.len() > REMOVAL_FLOOR {
            self.remove_worst_card();
            self.add_random_card();
        }
    }

    /// Add one random rare if it is currently eligible
    pub fn add_rare_card(&mut self) {
        let tables = self.tables;
        let rares = tables.rare_cards(self.class);
        let Some(&id) = rares.choose(&mut *self.rng) else {
            return;
        };

        if self.should_add_card(id) {
            let upgraded = self.rng.gen_bool(RARE_UPGRADE_CHANCE);
            log::debug!("Adding rare {} (upgraded: {})", id, upgraded);
            self.push_card(id, upgraded);
        }
    }

    // -------------------------------------------------------------------------
    // Relics, potions, HP
    // -------------------------------------------------------------------------

    /// Add one uniformly random eligible relic
    pub fn add_random_relic(&mut self) {
        if self.relics.len() >= MAX_RELICS {
            return;
        }

        let tables = self.tables;
        let candidates: Vec<&str> = tables
            .available_relics(self.class)
            .into_iter()
            .filter(|id| !self.relics.iter().any(|held| held == id))
            .collect();

        if let Some(&relic) = candidates.choose(&mut *self.rng) {
            self.relics.push(relic.to_string());
            let bonus = tables.potion_slot_bonus(relic);
            self.potion_slots += bonus;
            log::debug!("Added relic {} (+{} potion slots)", relic, bonus);
        }
    }

    /// Gain a random potion, evicting one first when full
    pub fn gain_potion(&mut self) {
        let slots = self.potion_slots as usize;
        if self.potions.len() >= slots && !self.potions.is_empty() {
            let idx = self.rng.gen_range(0..self.potions.len());
            self.potions.remove(idx);
        }
        if self.potions.len() >= slots {
            return;
        }

        let tables = self.tables;
        let pool = tables.available_potions(self.class);
        if let Some(&potion) = pool.choose(&mut *self.rng) {
            self.potions.push(potion.to_string());
        }
    }

    pub fn gain_max_hp(&mut self) {
        let amount = self.rng.gen_range(5..=14);
        self.max_hp += amount;
        self.current_hp += amount;
    }

    fn finalize(&mut self) {
        let mut attempts = 0;
        while self.deck.len() < MIN_DECK_SIZE {
            if attempts >= FILL_ATTEMPT_LIMIT {
                log::warn!(
                    "Could not fill {} deck to {} cards (stuck at {})",
                    self.class,
                    MIN_DECK_SIZE,
                    self.deck.len()
                );
                break;
            }
            self.add_random_card();
            attempts += 1;
        }

        while self.deck.len() > MAX_DECK_SIZE {
            self.remove_worst_card();
        }

        if self.ascension > 0 {
            let damage_percent = self.rng.gen_range(5..=29);
            self.current_hp = self.max_hp * (100 - damage_percent) / 100;
        }
        self.current_hp = self.current_hp.clamp(1, self.max_hp.max(1));

        while self.potions.len() < self.potion_slots as usize
            && self.rng.gen_bool(POTION_TOP_UP_CHANCE)
        {
            self.gain_potion();
        }
    }
}
