//! Built-in relic data

use std::collections::{HashMap, HashSet};

use crate::loadout::PlayerClass;
use super::cards::ids;
use super::tables::RelicTables;

/// Relics any class can pick, grouped by host-game tier
const UNIVERSAL_RELICS: &[&str] = &[
    // Common
    "Akabeko", "Anchor", "Ancient Tea Set", "Art of War", "Bag of Marbles",
    "Bag of Preparation", "Blood Vial", "Bronze Scales", "Centennial Puzzle", "CeramicFish",
    "Dream Catcher", "Happy Flower", "Juzu Bracelet", "Lantern", "MawBank", "MealTicket",
    "Nunchaku", "Oddly Smooth Stone", "Omamori", "Orichalcum", "Pen Nib", "Potion Belt",
    "PreservedInsect", "Regal Pillow", "Smiling Mask", "Strawberry", "Boot", "Tiny Chest",
    "Toy Ornithopter", "Vajra", "War Paint", "Whetstone",
    // Uncommon
    "Blue Candle", "Bottled Flame", "Bottled Lightning", "Bottled Tornado",
    "Darkstone Periapt", "Eternal Feather", "Frozen Egg 2", "Gremlin Horn", "HornCleat",
    "InkBottle", "Kunai", "Letter Opener", "Matryoshka", "Meat on the Bone",
    "Mercury Hourglass", "Molten Egg 2", "Mummified Hand", "Ornamental Fan", "Pantograph",
    "Pear", "Question Card", "Shuriken", "Singing Bowl", "StrikeDummy", "Sundial",
    "The Courier", "Toxic Egg 2", "White Beast Statue",
    // Rare
    "Bird Faced Urn", "Calipers", "CaptainsWheel", "Dead Branch", "Du-Vu Doll", "Ginger",
    "Girya", "Ice Cream", "Incense Burner", "Lizard Tail", "Mango", "Old Coin", "Peace Pipe",
    "Pocketwatch", "Prayer Wheel", "Shovel", "StoneCalendar", "Thread and Needle", "Torii",
    "Tungsten Rod", "Turnip", "Unceasing Top", "WingedGreaves",
    // Boss
    "Astrolabe", "Black Star", "Busted Crown", "Calling Bell", "Coffee Dripper",
    "Cursed Key", "Ectoplasm", "Empty Cage", "Fusion Hammer", "Pandora's Box",
    "Philosopher's Stone", "Runic Dome", "Runic Pyramid", "SacredBark", "SlaversCollar",
    "Snecko Eye", "Sozu", "Tiny House", "Velvet Choker",
    // Shop
    "Cauldron", "Chemical X", "ClockworkSouvenir", "DollysMirror", "Frozen Eye", "HandDrill",
    "Lee's Waffle", "Medical Kit", "Membership Card", "Orange Pellets", "Orrery",
    "PrismaticShard", "Sling", "Strange Spoon", "TheAbacus", "Toolbox",
];

/// Class-exclusive relics; starters are listed so other classes never see them
const CLASS_RELICS: &[(&str, PlayerClass)] = &[
    // Ironclad
    ("Burning Blood", PlayerClass::Ironclad),
    ("Red Skull", PlayerClass::Ironclad),
    ("Paper Frog", PlayerClass::Ironclad),
    ("Self Forming Clay", PlayerClass::Ironclad),
    ("Champion Belt", PlayerClass::Ironclad),
    ("Charon's Ashes", PlayerClass::Ironclad),
    ("Magic Flower", PlayerClass::Ironclad),
    ("Black Blood", PlayerClass::Ironclad),
    ("Mark of Pain", PlayerClass::Ironclad),
    ("Runic Cube", PlayerClass::Ironclad),
    ("Brimstone", PlayerClass::Ironclad),
    // Silent
    ("Ring of the Snake", PlayerClass::Silent),
    ("Snecko Skull", PlayerClass::Silent),
    ("Ninja Scroll", PlayerClass::Silent),
    ("Paper Crane", PlayerClass::Silent),
    ("The Specimen", PlayerClass::Silent),
    ("Tingsha", PlayerClass::Silent),
    ("Tough Bandages", PlayerClass::Silent),
    ("Ring of the Serpent", PlayerClass::Silent),
    ("WristBlade", PlayerClass::Silent),
    ("HoveringKite", PlayerClass::Silent),
    ("Twisted Funnel", PlayerClass::Silent),
    // Defect
    ("Cracked Core", PlayerClass::Defect),
    ("Data Disk", PlayerClass::Defect),
    ("Symbiotic Virus", PlayerClass::Defect),
    ("Gold-Plated Cables", PlayerClass::Defect),
    ("Emotion Chip", PlayerClass::Defect),
    ("FrozenCore", PlayerClass::Defect),
    ("Inserter", PlayerClass::Defect),
    ("Nuclear Battery", PlayerClass::Defect),
    ("Runic Capacitor", PlayerClass::Defect),
    // Watcher
    ("PureWater", PlayerClass::Watcher),
    ("Damaru", PlayerClass::Watcher),
    ("TeardropLocket", PlayerClass::Watcher),
    ("Duality", PlayerClass::Watcher),
    ("CloakClasp", PlayerClass::Watcher),
    ("GoldenEye", PlayerClass::Watcher),
    ("HolyWater", PlayerClass::Watcher),
    ("VioletLotus", PlayerClass::Watcher),
    ("Melange", PlayerClass::Watcher),
];

/// Relics whose effects only matter across a run, never in one fight
const USELESS_RELICS: &[&str] = &[
    "CeramicFish", "Dream Catcher", "Juzu Bracelet", "MawBank", "MealTicket", "Omamori",
    "Regal Pillow", "Smiling Mask", "Strawberry", "Tiny Chest", "Darkstone Periapt",
    "Eternal Feather", "Frozen Egg 2", "Matryoshka", "Molten Egg 2", "Pear", "Question Card",
    "Singing Bowl", "The Courier", "Toxic Egg 2", "Mango", "Old Coin", "Peace Pipe",
    "Prayer Wheel", "Shovel", "Girya", "Black Star", "Busted Crown", "Cursed Key",
    "Empty Cage", "Tiny House", "Cauldron", "DollysMirror", "Lee's Waffle",
    "Membership Card", "Orrery", "WingedGreaves", "Calling Bell", "Pandora's Box",
    "Astrolabe", "Du-Vu Doll",
];

/// Relics that replace a starter relic or need run state
const EXCLUDED_RELICS: &[&str] = &[
    "Black Blood", "Ring of the Serpent", "FrozenCore", "HolyWater", "Circlet", "Red Circlet",
    "NeowsBlessing",
];

pub fn default_relic_tables() -> RelicTables {
    let mut pool = ids(UNIVERSAL_RELICS);
    let starters = ["Burning Blood", "Ring of the Snake", "Cracked Core", "PureWater"];
    pool.extend(
        CLASS_RELICS
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !starters.contains(id))
            .map(str::to_string),
    );

    let owners: HashMap<String, PlayerClass> = CLASS_RELICS
        .iter()
        .map(|(id, class)| (id.to_string(), *class))
        .collect();

    let useless: HashSet<String> = USELESS_RELICS.iter().map(|s| s.to_string()).collect();
    let excluded: HashSet<String> = EXCLUDED_RELICS.iter().map(|s| s.to_string()).collect();

    let mut potion_slot_bonus = HashMap::new();
    potion_slot_bonus.insert("Potion Belt".to_string(), 2);

    RelicTables { pool, owners, useless, excluded, potion_slot_bonus }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_has_no_duplicates() {
        let tables = default_relic_tables();
        let unique: HashSet<&String> = tables.pool.iter().collect();
        assert_eq!(unique.len(), tables.pool.len());
    }

    #[test]
    fn test_starters_stay_out_of_pool() {
        let tables = default_relic_tables();
        for starter in ["Burning Blood", "Ring of the Snake", "Cracked Core", "PureWater"] {
            assert!(!tables.pool.iter().any(|r| r == starter), "{}", starter);
            assert!(tables.owners.contains_key(starter));
        }
    }

    #[test]
    fn test_potion_belt_grants_slots() {
        let tables = default_relic_tables();
        assert_eq!(tables.potion_slot_bonus.get("Potion Belt"), Some(&2));
        assert!(!tables.useless.contains("Potion Belt"));
    }
}
