//! Loadout resolution
//!
//! Turns a [`BuiltLoadout`] into host objects. Unknown IDs are logged and
//! skipped; they never invalidate the loadout.

pub mod registry;

pub use registry::{lookup_card, suggest_card_id, to_camel_case, ContentRegistry, COLOR_SUFFIXES};

use rand::Rng;

use crate::data::LoadoutTables;
use crate::loadout::{BuiltLoadout, CardType};

/// Relic that opens every card color to the player
pub const PRISMATIC_SHARD: &str = "PrismaticShard";

/// Resolved decks smaller than this are padded from the starter deck
pub const RESOLVED_MIN_DECK_SIZE: usize = 15;

/// IDs the registry did not recognize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub missing_cards: Vec<String>,
    /// `(failed_id, suggested_id)` for missing cards with a likely fix
    pub suggestions: Vec<(String, String)>,
    pub missing_relics: Vec<String>,
    pub missing_potions: Vec<String>,
    /// Starter cards added because too few cards resolved
    pub padded_cards: usize,
    /// Strikes added because no attacks resolved
    pub added_strikes: usize,
}

impl ResolveReport {
    pub fn is_clean(&self) -> bool {
        self.missing_cards.is_empty() && self.missing_relics.is_empty() && self.missing_potions.is_empty()
    }
}

/// A loadout made of host objects
#[derive(Debug, Clone)]
pub struct ResolvedLoadout<C, Re, P> {
    pub cards: Vec<C>,
    pub relics: Vec<Re>,
    pub potions: Vec<P>,
    pub has_prismatic_shard: bool,
    pub report: ResolveReport,
}

pub type RegistryLoadout<Reg> = ResolvedLoadout<
    <Reg as ContentRegistry>::Card,
    <Reg as ContentRegistry>::Relic,
    <Reg as ContentRegistry>::Potion,
>;

/// Resolve every ID in `loadout` through `registry`.
///
/// A deck that ends up under [`RESOLVED_MIN_DECK_SIZE`] gets one pass over
/// the starter deck, and a deck with no attacks gets 3-5 basic Strikes.
pub fn resolve_loadout<Reg, R>(
    loadout: &BuiltLoadout,
    tables: &LoadoutTables,
    registry: &Reg,
    rng: &mut R,
) -> RegistryLoadout<Reg>
where
    Reg: ContentRegistry,
    R: Rng,
{
    let class = loadout.player_class;
    let mut report = ResolveReport::default();

    let mut cards = Vec::with_capacity(loadout.deck.len());
    for entry in &loadout.deck {
        match lookup_card(registry, &entry.card_id) {
            Some(mut card) => {
                if entry.upgraded {
                    registry.upgrade(&mut card);
                }
                cards.push(card);
            }
            None => report.missing_cards.push(entry.card_id.clone()),
        }
    }

    if !report.missing_cards.is_empty() {
        log::error!("Failed to find {} cards for {}:", report.missing_cards.len(), class);
        for failed in &report.missing_cards {
            log::error!("  card ID not found: {:?}", failed);
            if let Some(suggestion) = suggest_card_id(registry, failed) {
                log::error!("    possible correct ID: {:?}", suggestion);
                report.suggestions.push((failed.clone(), suggestion));
            }
        }
    }

    if cards.len() < RESOLVED_MIN_DECK_SIZE {
        log::warn!("Deck too small ({} cards), adding starter cards", cards.len());
        for id in tables.starter_deck(class) {
            if cards.len() >= RESOLVED_MIN_DECK_SIZE {
                break;
            }
            if let Some(card) = lookup_card(registry, id) {
                cards.push(card);
                report.padded_cards += 1;
            }
        }
        if cards.len() < RESOLVED_MIN_DECK_SIZE {
            log::error!(
                "Could not build minimum deck: {} cards, needed {}",
                cards.len(),
                RESOLVED_MIN_DECK_SIZE
            );
        }
    }

    if !cards.iter().any(|c| registry.card_type(c) == CardType::Attack) {
        log::warn!("Deck has no attacks, adding Strikes");
        let strike_id = class.strike_id();
        for _ in 0..rng.gen_range(3..=5) {
            if let Some(strike) = lookup_card(registry, &strike_id) {
                cards.push(strike);
                report.added_strikes += 1;
            }
        }
    }

    let mut relics = Vec::with_capacity(loadout.relics.len());
    for id in &loadout.relics {
        match registry.relic(id) {
            Some(relic) => relics.push(relic),
            None => {
                log::error!("Relic ID not found: {:?}", id);
                report.missing_relics.push(id.clone());
            }
        }
    }
    let has_prismatic_shard = loadout.relics.iter().any(|r| r == PRISMATIC_SHARD)
        && !report.missing_relics.iter().any(|r| r == PRISMATIC_SHARD);

    let mut potions = Vec::with_capacity(loadout.potions.len());
    for id in &loadout.potions {
        match registry.potion(id) {
            Some(potion) => potions.push(potion),
            None => {
                log::error!("Potion ID not found: {:?}", id);
                report.missing_potions.push(id.clone());
            }
        }
    }

    log::info!(
        "Resolved {}: {} cards, {} relics, {} potions",
        class,
        cards.len(),
        relics.len(),
        potions.len()
    );

    ResolvedLoadout { cards, relics, potions, has_prismatic_shard, report }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::tables;
    use crate::loadout::{generate_for_class, CardEntry, PlayerClass};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug, Clone, PartialEq)]
    struct TestCard {
        id: String,
        upgraded: bool,
    }

    /// Registry that knows exactly the IDs it was given
    struct TestRegistry {
        cards: HashSet<String>,
        relics: HashSet<String>,
        potions: HashSet<String>,
    }

    impl TestRegistry {
        /// Everything the built-in tables mention
        fn from_tables() -> Self {
            let t = tables();
            let mut cards: HashSet<String> = t.cards.colorless.iter().cloned().collect();
            for class in &t.classes {
                cards.extend(class.cards.iter().cloned());
                cards.extend(class.starter_deck.iter().cloned());
            }
            let mut relics: HashSet<String> = t.relics.pool.iter().cloned().collect();
            relics.extend(t.relics.owners.keys().cloned());
            let mut potions: HashSet<String> = t.common_potions.iter().cloned().collect();
            for class in &t.classes {
                potions.extend(class.potions.iter().cloned());
            }
            Self { cards, relics, potions }
        }
    }

    impl ContentRegistry for TestRegistry {
        type Card = TestCard;
        type Relic = String;
        type Potion = String;

        fn card(&self, id: &str) -> Option<TestCard> {
            self.cards.get(id).map(|id| TestCard { id: id.clone(), upgraded: false })
        }

        fn upgrade(&self, card: &mut TestCard) -> bool {
            card.upgraded = true;
            true
        }

        fn card_type(&self, card: &TestCard) -> CardType {
            tables().card_type(&card.id)
        }

        fn relic(&self, id: &str) -> Option<String> {
            self.relics.get(id).cloned()
        }

        fn potion(&self, id: &str) -> Option<String> {
            self.potions.get(id).cloned()
        }
    }

    fn loadout(class: PlayerClass, deck: &[(&str, bool)]) -> BuiltLoadout {
        BuiltLoadout {
            player_class: class,
            deck: deck.iter().map(|(id, up)| CardEntry::new(*id, *up)).collect(),
            relics: vec![],
            potions: vec![],
            max_hp: 70,
            current_hp: 70,
            potion_slots: 3,
            ascension: 0,
        }
    }

    #[test]
    fn test_generated_loadouts_resolve_cleanly() {
        let registry = TestRegistry::from_tables();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let built = crate::loadout::generate_random(&mut rng).unwrap();
            let resolved = resolve_loadout(&built, tables(), &registry, &mut rng);

            let report = &resolved.report;
            assert!(report.is_clean(), "seed {}: {:?}", seed, report);
            assert_eq!(
                resolved.cards.len(),
                built.deck.len() + report.padded_cards + report.added_strikes,
                "seed {}",
                seed
            );
            assert!(resolved.cards.len() >= RESOLVED_MIN_DECK_SIZE);
            assert_eq!(resolved.relics.len(), built.relics.len());
            assert_eq!(resolved.potions.len(), built.potions.len());
            assert_eq!(
                resolved.cards.iter().filter(|c| c.upgraded).count(),
                built.upgraded_count()
            );
        }
    }

    #[test]
    fn test_unknown_ids_are_skipped_and_reported() {
        let registry = TestRegistry::from_tables();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut built = generate_for_class(PlayerClass::Watcher, &mut rng).unwrap();
        let original_len = built.deck.len();
        built.deck.push(CardEntry::new("Talk To The Hand", false));
        built.relics.push("Not A Relic".to_string());
        built.potions.push("Not A Potion".to_string());

        let resolved = resolve_loadout(&built, tables(), &registry, &mut rng);
        assert_eq!(resolved.report.missing_cards, vec!["Talk To The Hand".to_string()]);
        assert_eq!(
            resolved.report.suggestions,
            vec![("Talk To The Hand".to_string(), "TalkToTheHand".to_string())]
        );
        assert_eq!(resolved.report.missing_relics, vec!["Not A Relic".to_string()]);
        assert_eq!(resolved.report.missing_potions, vec!["Not A Potion".to_string()]);
        assert_eq!(
            resolved.cards.len(),
            original_len + resolved.report.padded_cards + resolved.report.added_strikes
        );
        assert!(!resolved.report.is_clean());
    }

    #[test]
    fn test_legacy_basic_ids() {
        let registry = TestRegistry::from_tables();
        let card = lookup_card(&registry, "Strike").unwrap();
        assert!(card.id.starts_with("Strike_"));
        assert!(lookup_card(&registry, "Defend").is_some());
        assert!(lookup_card(&registry, "Bash_X").is_none());

        assert_eq!(suggest_card_id(&registry, "Strike"), Some("Strike_R".to_string()));
        assert_eq!(suggest_card_id(&registry, "Nonsense"), None);
    }

    #[test]
    fn test_small_deck_is_padded() {
        let registry = TestRegistry::from_tables();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        // One starter pass is not enough to reach the minimum
        let built = loadout(PlayerClass::Silent, &[("Neutralize", false), ("Bogus", false)]);
        let resolved = resolve_loadout(&built, tables(), &registry, &mut rng);
        let starter = tables().starter_deck(PlayerClass::Silent).len();
        assert_eq!(resolved.report.padded_cards, starter);
        assert_eq!(resolved.cards.len(), 1 + starter);
        assert_eq!(resolved.report.added_strikes, 0);

        let deck: Vec<(&str, bool)> = std::iter::repeat(("Neutralize", false)).take(10).collect();
        let built = loadout(PlayerClass::Silent, &deck);
        let resolved = resolve_loadout(&built, tables(), &registry, &mut rng);
        assert_eq!(resolved.cards.len(), RESOLVED_MIN_DECK_SIZE);
        assert_eq!(resolved.report.padded_cards, RESOLVED_MIN_DECK_SIZE - 10);
    }

    #[test]
    fn test_attackless_deck_gets_strikes() {
        let registry = TestRegistry::from_tables();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck: Vec<(&str, bool)> = std::iter::repeat(("Defend_B", true)).take(5)
            .chain(std::iter::repeat(("Coolheaded", false)).take(5))
            .chain(std::iter::repeat(("Zap", false)).take(5))
            .collect();
        let built = loadout(PlayerClass::Defect, &deck);

        let resolved = resolve_loadout(&built, tables(), &registry, &mut rng);
        assert_eq!(resolved.report.padded_cards, 0);
        assert!((3..=5).contains(&resolved.report.added_strikes));
        let strikes = resolved.cards.iter().filter(|c| c.id == "Strike_B").count();
        assert_eq!(strikes, resolved.report.added_strikes);
    }

    #[test]
    fn test_prismatic_shard_flag() {
        let registry = TestRegistry::from_tables();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut built = generate_for_class(PlayerClass::Ironclad, &mut rng).unwrap();
        built.relics.retain(|r| r != PRISMATIC_SHARD);
        assert!(!resolve_loadout(&built, tables(), &registry, &mut rng).has_prismatic_shard);

        built.relics.push(PRISMATIC_SHARD.to_string());
        assert!(resolve_loadout(&built, tables(), &registry, &mut rng).has_prismatic_shard);
    }
}
