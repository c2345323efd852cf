//! Built-in potion data

use crate::loadout::PlayerClass;
use super::cards::ids;

/// Potions every class can brew. Smoke Bomb is left out since fleeing an
/// arena fight makes no sense.
const COMMON_POTIONS: &[&str] = &[
    "Block Potion", "Dexterity Potion", "Energy Potion", "Explosive Potion", "Fire Potion",
    "Strength Potion", "Swift Potion", "Weak Potion", "FearPotion", "AttackPotion",
    "SkillPotion", "PowerPotion", "ColorlessPotion", "SpeedPotion", "SteroidPotion",
    "BlessingOfTheForge", "Regen Potion", "Ancient Potion", "LiquidBronze", "GamblersBrew",
    "EssenceOfSteel", "DuplicationPotion", "DistilledChaos", "LiquidMemories",
    "CultistPotion", "Fruit Juice", "SneckoOil", "FairyPotion", "EntropicBrew",
];

pub fn default_common_potions() -> Vec<String> {
    ids(COMMON_POTIONS)
}

pub fn class_potions(class: PlayerClass) -> Vec<String> {
    let list: &[&str] = match class {
        PlayerClass::Ironclad => &["BloodPotion", "ElixirPotion", "HeartOfIron"],
        PlayerClass::Silent => &["Poison Potion", "CunningPotion", "GhostInAJar"],
        PlayerClass::Defect => &["FocusPotion", "PotionOfCapacity", "EssenceOfDarkness"],
        PlayerClass::Watcher => &["BottledMiracle", "StancePotion", "Ambrosia"],
    };
    ids(list)
}
