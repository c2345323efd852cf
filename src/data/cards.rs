//! Built-in card data
//!
//! Card IDs are the host game's internal IDs. Ironclad, Silent and Defect
//! mostly use spaced names, Watcher uses CamelCase, and several cards carry
//! legacy IDs that differ from their display name
//! (e.g. Sneaky Strike is "Underhanded Strike", Rushdown is "Adaptation").
//! Do not normalize them.

use std::collections::{HashMap, HashSet};

use crate::loadout::{CardColor, PlayerClass, Synergy};
use super::tables::{CardTables, ClassTable};
use super::potions::class_potions;

pub(super) fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn id_set(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn priorities(list: &[(&str, i32)]) -> HashMap<String, i32> {
    list.iter().map(|(id, p)| (id.to_string(), *p)).collect()
}

fn starter(basics: &[(&str, usize)], extras: &[&str]) -> Vec<String> {
    let mut deck = Vec::new();
    for (id, count) in basics {
        deck.extend(std::iter::repeat(id.to_string()).take(*count));
    }
    deck.extend(extras.iter().map(|s| s.to_string()));
    deck
}

#[allow(clippy::too_many_arguments)]
fn class_table(
    class: PlayerClass,
    color: CardColor,
    base_max_hp: i32,
    starter_relic: &str,
    starter_deck: Vec<String>,
    cards: &[&str],
    rares: &[&str],
    priority_list: &[(&str, i32)],
) -> ClassTable {
    let mut all_cards = ids(cards);
    all_cards.extend(ids(rares));
    ClassTable {
        class,
        color,
        base_max_hp,
        starter_relic: Some(starter_relic.to_string()),
        starter_deck,
        cards: all_cards,
        rare_cards: ids(rares),
        priorities: priorities(priority_list),
        potions: class_potions(class),
    }
}

// =============================================================================
// Class pools
// =============================================================================

pub fn ironclad_table() -> ClassTable {
    class_table(
        PlayerClass::Ironclad,
        CardColor::Red,
        80,
        "Burning Blood",
        starter(&[("Strike_R", 5), ("Defend_R", 4)], &["Bash"]),
        &[
            // Common
            "Anger", "Armaments", "Body Slam", "Clash", "Cleave", "Clothesline", "Flex",
            "Havoc", "Headbutt", "Heavy Blade", "Iron Wave", "Perfected Strike",
            "Pommel Strike", "Shrug It Off", "Sword Boomerang", "Thunderclap", "True Grit",
            "Twin Strike", "Warcry", "Wild Strike",
            // Uncommon
            "Battle Trance", "Blood for Blood", "Bloodletting", "Burning Pact", "Carnage",
            "Combust", "Dark Embrace", "Disarm", "Dropkick", "Dual Wield", "Entrench",
            "Evolve", "Feel No Pain", "Fire Breathing", "Flame Barrier", "Ghostly Armor",
            "Hemokinesis", "Infernal Blade", "Inflame", "Intimidate", "Metallicize",
            "Power Through", "Pummel", "Rage", "Rampage", "Reckless Charge", "Rupture",
            "Searing Blow", "Second Wind", "Seeing Red", "Sentinel", "Sever Soul",
            "Shockwave", "Spot Weakness", "Uppercut", "Whirlwind",
        ],
        &[
            "Barricade", "Berserk", "Bludgeon", "Brutality", "Corruption", "Demon Form",
            "Double Tap", "Exhume", "Feed", "Fiend Fire", "Immolate", "Impervious",
            "Juggernaut", "Limit Break", "Offering", "Reaper",
        ],
        &[
            ("Offering", 10), ("Shrug It Off", 20), ("Demon Form", 20), ("Impervious", 20),
            ("Feed", 25), ("Battle Trance", 25), ("Shockwave", 25), ("Pommel Strike", 30),
            ("Inflame", 30), ("Uppercut", 30), ("Feel No Pain", 30), ("Corruption", 30),
            ("Reaper", 30), ("Immolate", 35), ("Dark Embrace", 35), ("Whirlwind", 35),
            ("Disarm", 35), ("Flame Barrier", 35), ("Headbutt", 40), ("Armaments", 40),
            ("Carnage", 40), ("Bludgeon", 40), ("Spot Weakness", 40), ("Heavy Blade", 45),
            ("Limit Break", 45), ("Barricade", 45), ("Body Slam", 45), ("Fiend Fire", 45),
            ("Burning Pact", 45), ("Thunderclap", 50), ("True Grit", 50), ("Seeing Red", 50),
            ("Metallicize", 50), ("Bloodletting", 50), ("Juggernaut", 50), ("Double Tap", 50),
            ("Iron Wave", 55), ("Anger", 55), ("Power Through", 55), ("Ghostly Armor", 55),
            ("Second Wind", 55), ("Pummel", 55), ("Hemokinesis", 55), ("Dropkick", 55),
            ("Berserk", 55), ("Exhume", 55), ("Entrench", 55), ("Twin Strike", 60),
            ("Cleave", 60), ("Sword Boomerang", 60), ("Perfected Strike", 60),
            ("Sentinel", 60), ("Intimidate", 60), ("Combust", 60), ("Rage", 60),
            ("Brutality", 60), ("Clothesline", 65), ("Blood for Blood", 65),
            ("Sever Soul", 65), ("Dual Wield", 65), ("Warcry", 70), ("Rampage", 70),
            ("Rupture", 70), ("Infernal Blade", 70), ("Havoc", 75), ("Evolve", 75),
            ("Fire Breathing", 75), ("Wild Strike", 80), ("Reckless Charge", 80),
            ("Clash", 85), ("Searing Blow", 85),
        ],
    )
}

pub fn silent_table() -> ClassTable {
    class_table(
        PlayerClass::Silent,
        CardColor::Green,
        70,
        "Ring of the Snake",
        starter(&[("Strike_G", 5), ("Defend_G", 5)], &["Neutralize", "Survivor"]),
        &[
            // Common
            "Acrobatics", "Backflip", "Bane", "Blade Dance", "Cloak And Dagger",
            "Dagger Spray", "Dagger Throw", "Deadly Poison", "Deflect", "Dodge and Roll",
            "Flying Knee", "Outmaneuver", "Piercing Wail", "Poisoned Stab", "Prepared",
            "Quick Slash", "Slice", "Underhanded Strike", "Sucker Punch",
            // Uncommon
            "Accuracy", "All Out Attack", "Backstab", "Blur", "Bouncing Flask",
            "Calculated Gamble", "Caltrops", "Catalyst", "Choke", "Concentrate",
            "Crippling Poison", "Dash", "Distraction", "Endless Agony", "Escape Plan",
            "Eviscerate", "Expertise", "Finisher", "Flechettes", "Footwork", "Heel Hook",
            "Infinite Blades", "Leg Sweep", "Masterful Stab", "Noxious Fumes", "Predator",
            "Reflex", "Riddle With Holes", "Setup", "Skewer", "Tactician", "Terror",
            "Well Laid Plans",
        ],
        &[
            "A Thousand Cuts", "Adrenaline", "After Image", "Alchemize", "Bullet Time",
            "Burst", "Corpse Explosion", "Die Die Die", "Doppelganger", "Envenom",
            "Glass Knife", "Grand Finale", "Malaise", "Nightmare", "Phantasmal Killer",
            "Storm of Steel", "Tools of the Trade", "Unload", "Wraith Form v2",
        ],
        &[
            ("Wraith Form v2", 15), ("Adrenaline", 15), ("Footwork", 20),
            ("After Image", 20), ("Noxious Fumes", 25), ("Backflip", 25),
            ("Acrobatics", 25), ("Blade Dance", 25), ("Catalyst", 30), ("Malaise", 30),
            ("Leg Sweep", 30), ("Piercing Wail", 30), ("Dash", 35), ("Bouncing Flask", 35),
            ("Deadly Poison", 35), ("Cloak And Dagger", 35), ("Burst", 35),
            ("Infinite Blades", 40), ("Accuracy", 40), ("Terror", 40), ("Escape Plan", 40),
            ("Predator", 40), ("Tools of the Trade", 40), ("Corpse Explosion", 40),
            ("Die Die Die", 40), ("Glass Knife", 40), ("Well Laid Plans", 45),
            ("Calculated Gamble", 45), ("Dodge and Roll", 45), ("Blur", 45),
            ("Poisoned Stab", 45), ("Crippling Poison", 45), ("Bane", 50),
            ("Dagger Spray", 50), ("Dagger Throw", 50), ("Prepared", 50), ("Caltrops", 50),
            ("Envenom", 50), ("Storm of Steel", 50), ("Bullet Time", 50), ("Unload", 55),
            ("Deflect", 55), ("Outmaneuver", 55), ("Backstab", 55), ("Concentrate", 55),
            ("Riddle With Holes", 55), ("Heel Hook", 55), ("Skewer", 55), ("Finisher", 60),
            ("Quick Slash", 60), ("Sucker Punch", 60), ("Flying Knee", 60), ("Choke", 60),
            ("Endless Agony", 60), ("A Thousand Cuts", 60), ("Phantasmal Killer", 60),
            ("Nightmare", 60), ("Doppelganger", 65), ("Alchemize", 65), ("Expertise", 65),
            ("Reflex", 65), ("Tactician", 65), ("Eviscerate", 65), ("Setup", 70),
            ("Masterful Stab", 70), ("Distraction", 70), ("Flechettes", 70),
            ("All Out Attack", 70), ("Slice", 75), ("Underhanded Strike", 75),
            ("Grand Finale", 85),
        ],
    )
}

pub fn defect_table() -> ClassTable {
    class_table(
        PlayerClass::Defect,
        CardColor::Blue,
        75,
        "Cracked Core",
        starter(&[("Strike_B", 4), ("Defend_B", 4)], &["Zap", "Dualcast"]),
        &[
            // Common
            "Ball Lightning", "Barrage", "Beam Cell", "Cold Snap", "Compile Driver",
            "Conserve Battery", "Coolheaded", "Go for the Eyes", "Hologram", "Leap",
            "Rebound", "Redo", "Stack", "Steam", "Streamline", "Sweeping Beam", "Turbo",
            "Gash",
            // Uncommon
            "Aggregate", "Auto Shields", "Blizzard", "BootSequence", "Capacitor", "Chaos",
            "Chill", "Consume", "Darkness", "Defragment", "Doom and Gloom", "Double Energy",
            "Undo", "FTL", "Force Field", "Fusion", "Genetic Algorithm", "Glacier",
            "Heatsinks", "Hello World", "Lockon", "Loop", "Melter", "Steam Power",
            "Recycle", "Reinforced Body", "Reprogram", "Rip and Tear", "Scrape",
            "Self Repair", "Skim", "Static Discharge", "Storm", "Sunder", "Tempest",
            "White Noise",
        ],
        &[
            "All For One", "Amplify", "Biased Cognition", "Buffer", "Core Surge",
            "Creative AI", "Echo Form", "Electrodynamics", "Fission", "Hyperbeam",
            "Machine Learning", "Meteor Strike", "Multi-Cast", "Rainbow", "Reboot", "Seek",
            "Thunder Strike",
        ],
        &[
            ("Defragment", 15), ("Biased Cognition", 15), ("Echo Form", 20),
            ("Glacier", 20), ("Coolheaded", 25), ("Ball Lightning", 25), ("Buffer", 25),
            ("Seek", 25), ("Cold Snap", 30), ("Loop", 30), ("Electrodynamics", 30),
            ("Capacitor", 30), ("Machine Learning", 30), ("Skim", 30), ("Consume", 35),
            ("Chaos", 35), ("Rainbow", 35), ("Hologram", 35), ("Fusion", 35),
            ("Self Repair", 40), ("Darkness", 40), ("Genetic Algorithm", 40),
            ("Double Energy", 40), ("Amplify", 40), ("Multi-Cast", 40), ("Core Surge", 40),
            ("Tempest", 45), ("Chill", 45), ("Compile Driver", 45), ("Sunder", 45),
            ("Reinforced Body", 45), ("Storm", 45), ("Static Discharge", 45),
            ("Hyperbeam", 45), ("Meteor Strike", 45), ("Thunder Strike", 45),
            ("Rip and Tear", 50), ("Doom and Gloom", 50), ("Leap", 50), ("Turbo", 50),
            ("Aggregate", 50), ("Force Field", 50), ("Heatsinks", 50), ("Fission", 50),
            ("Reboot", 50), ("All For One", 50), ("Go for the Eyes", 55), ("Beam Cell", 55),
            ("Sweeping Beam", 55), ("Barrage", 55), ("Auto Shields", 55), ("Blizzard", 55),
            ("Melter", 55), ("Creative AI", 55), ("Redo", 60), ("Steam", 60),
            ("Conserve Battery", 60), ("Streamline", 60), ("Stack", 60), ("Undo", 60),
            ("FTL", 60), ("Scrape", 60), ("Hello World", 60), ("Gash", 65), ("Rebound", 65),
            ("Recycle", 65), ("Lockon", 65), ("BootSequence", 65), ("White Noise", 65),
            ("Steam Power", 70), ("Reprogram", 70),
        ],
    )
}

pub fn watcher_table() -> ClassTable {
    class_table(
        PlayerClass::Watcher,
        CardColor::Purple,
        72,
        "PureWater",
        starter(&[("Strike_P", 4), ("Defend_P", 4)], &["Eruption", "Vigilance"]),
        &[
            // Common
            "BowlingBash", "Consecrate", "Crescendo", "CrushJoints", "CutThroughFate",
            "EmptyBody", "EmptyFist", "Evaluate", "FlurryOfBlows", "FlyingSleeves",
            "FollowUp", "Halt", "JustLucky", "PathToVictory", "Prostrate", "Protect",
            "SashWhip", "ClearTheMind", "ThirdEye",
            // Uncommon
            "BattleHymn", "CarveReality", "Conclude", "DeceiveReality", "EmptyMind",
            "Fasting2", "FearNoEvil", "ForeignInfluence", "Indignation", "InnerPeace",
            "LikeWater", "Meditate", "MentalFortress", "Nirvana", "Perseverance", "Pray",
            "ReachHeaven", "Adaptation", "Sanctity", "SandsOfTime", "SignatureMove",
            "Study", "Swivel", "TalkToTheHand", "Tantrum", "Wallop", "WaveOfTheHand",
            "Weave", "WheelKick", "WindmillStrike", "Worship", "WreathOfFlame",
        ],
        &[
            "Alpha", "Blasphemy", "Brilliance", "ConjureBlade", "DeusExMachina", "DevaForm",
            "Devotion", "Establishment", "Judgement", "LessonLearned", "MasterReality",
            "Omniscience", "Ragnarok", "Scrawl", "SpiritShield", "Vault", "Wish",
        ],
        &[
            ("MentalFortress", 15), ("Adaptation", 15), ("TalkToTheHand", 20),
            ("Tantrum", 20), ("InnerPeace", 25), ("CutThroughFate", 25), ("Scrawl", 25),
            ("Vault", 25), ("EmptyMind", 30), ("FearNoEvil", 30), ("Wallop", 30),
            ("Ragnarok", 30), ("LikeWater", 30), ("Crescendo", 35), ("ThirdEye", 35),
            ("WheelKick", 35), ("Conclude", 35), ("Omniscience", 35), ("Brilliance", 35),
            ("Devotion", 35), ("DeceiveReality", 40), ("CarveReality", 40),
            ("Indignation", 40), ("Fasting2", 40), ("Establishment", 40), ("Judgement", 40),
            ("SpiritShield", 40), ("Blasphemy", 40), ("BowlingBash", 45),
            ("FlurryOfBlows", 45), ("EmptyBody", 45), ("EmptyFist", 45),
            ("SandsOfTime", 45), ("Perseverance", 45), ("WaveOfTheHand", 45),
            ("Wish", 45), ("DevaForm", 45), ("ConjureBlade", 50), ("Halt", 50),
            ("Prostrate", 50), ("Protect", 50), ("Evaluate", 50), ("FollowUp", 50),
            ("Sanctity", 50), ("Swivel", 50), ("Worship", 50), ("Pray", 50), ("Study", 50),
            ("Weave", 50), ("Alpha", 50), ("MasterReality", 50), ("DeusExMachina", 55),
            ("ClearTheMind", 55), ("JustLucky", 55), ("SashWhip", 55), ("Consecrate", 55),
            ("ReachHeaven", 55), ("WindmillStrike", 55), ("Nirvana", 55), ("Meditate", 55),
            ("ForeignInfluence", 60), ("BattleHymn", 60), ("WreathOfFlame", 60),
            ("FlyingSleeves", 60), ("CrushJoints", 60), ("PathToVictory", 65),
            ("SignatureMove", 65), ("LessonLearned", 70),
        ],
    )
}

// =============================================================================
// Shared card metadata
// =============================================================================

const COLORLESS: &[&str] = &[
    // Uncommon
    "Bandage Up", "Blind", "Dark Shackles", "Deep Breath", "Discovery", "Dramatic Entrance",
    "Enlightenment", "Finesse", "Flash of Steel", "Forethought", "Good Instincts",
    "Impatience", "Jack Of All Trades", "Madness", "Mind Blast", "Panacea", "PanicButton",
    "Purity", "Swift Strike", "Trip",
    // Rare
    "Apotheosis", "Chrysalis", "HandOfGreed", "Magnetism", "Master of Strategy", "Mayhem",
    "Metamorphosis", "Panache", "Sadistic Nature", "Secret Technique", "Secret Weapon",
    "The Bomb", "Thinking Ahead", "Transmutation", "Violence",
];

const SKILLS: &[&str] = &[
    // Ironclad
    "Defend_R", "Armaments", "Flex", "Havoc", "Shrug It Off", "True Grit", "Warcry",
    "Battle Trance", "Bloodletting", "Burning Pact", "Disarm", "Dual Wield", "Entrench",
    "Flame Barrier", "Ghostly Armor", "Infernal Blade", "Intimidate", "Power Through", "Rage",
    "Second Wind", "Seeing Red", "Sentinel", "Shockwave", "Spot Weakness", "Double Tap",
    "Exhume", "Impervious", "Limit Break", "Offering",
    // Silent
    "Defend_G", "Survivor", "Acrobatics", "Backflip", "Blade Dance", "Cloak And Dagger",
    "Deadly Poison", "Deflect", "Dodge and Roll", "Outmaneuver", "Piercing Wail", "Prepared",
    "Blur", "Bouncing Flask", "Calculated Gamble", "Catalyst", "Concentrate",
    "Crippling Poison", "Distraction", "Escape Plan", "Expertise", "Leg Sweep", "Reflex",
    "Setup", "Tactician", "Terror", "Adrenaline", "Alchemize", "Bullet Time", "Burst",
    "Corpse Explosion", "Doppelganger", "Malaise", "Nightmare", "Phantasmal Killer",
    "Storm of Steel",
    // Defect
    "Defend_B", "Zap", "Dualcast", "Conserve Battery", "Coolheaded", "Hologram", "Leap",
    "Redo", "Stack", "Steam", "Turbo", "Aggregate", "Auto Shields", "BootSequence", "Chaos",
    "Chill", "Consume", "Darkness", "Double Energy", "Undo", "Force Field", "Fusion",
    "Genetic Algorithm", "Glacier", "Recycle", "Reinforced Body", "Reprogram", "Skim",
    "Steam Power", "Tempest", "White Noise", "Amplify", "Fission", "Multi-Cast", "Rainbow",
    "Reboot", "Seek",
    // Watcher
    "Defend_P", "Vigilance", "Crescendo", "EmptyBody", "Evaluate", "Halt", "Prostrate",
    "Protect", "ClearTheMind", "ThirdEye", "DeceiveReality", "EmptyMind", "ForeignInfluence",
    "Indignation", "InnerPeace", "Meditate", "Perseverance", "Pray", "Sanctity", "Swivel",
    "WaveOfTheHand", "Worship", "WreathOfFlame", "Alpha", "Blasphemy", "ConjureBlade",
    "DeusExMachina", "Judgement", "Omniscience", "Scrawl", "SpiritShield", "Vault", "Wish",
    // Colorless
    "Bandage Up", "Blind", "Dark Shackles", "Deep Breath", "Discovery", "Enlightenment",
    "Finesse", "Forethought", "Good Instincts", "Impatience", "Jack Of All Trades", "Madness",
    "Panacea", "PanicButton", "Purity", "Trip", "Apotheosis", "Chrysalis",
    "Master of Strategy", "Metamorphosis", "Secret Technique", "Secret Weapon", "The Bomb",
    "Thinking Ahead", "Transmutation", "Violence",
];

const POWERS: &[&str] = &[
    // Ironclad
    "Combust", "Dark Embrace", "Evolve", "Feel No Pain", "Fire Breathing", "Inflame",
    "Metallicize", "Rupture", "Barricade", "Berserk", "Brutality", "Corruption", "Demon Form",
    "Juggernaut",
    // Silent
    "Accuracy", "Caltrops", "Footwork", "Infinite Blades", "Noxious Fumes",
    "Well Laid Plans", "A Thousand Cuts", "After Image", "Envenom", "Tools of the Trade",
    "Wraith Form v2",
    // Defect
    "Capacitor", "Defragment", "Heatsinks", "Hello World", "Loop", "Self Repair",
    "Static Discharge", "Storm", "Biased Cognition", "Buffer", "Creative AI", "Echo Form",
    "Electrodynamics", "Machine Learning",
    // Watcher
    "BattleHymn", "Fasting2", "LikeWater", "MentalFortress", "Nirvana", "Adaptation", "Study",
    "Establishment", "DevaForm", "Devotion", "MasterReality",
    // Colorless
    "Magnetism", "Mayhem", "Panache", "Sadistic Nature",
];

const ORB_GENERATORS: &[&str] = &[
    "Ball Lightning", "Cold Snap", "Coolheaded", "Chill", "Darkness", "Doom and Gloom",
    "Glacier", "Fusion", "Chaos", "Rainbow", "Tempest", "Static Discharge", "Storm",
    "Electrodynamics", "Meteor Strike",
];

const SHIV_GENERATORS: &[&str] = &[
    "Blade Dance", "Cloak And Dagger", "Infinite Blades", "Storm of Steel",
];

const POISON_CARDS: &[&str] = &[
    "Deadly Poison", "Poisoned Stab", "Bouncing Flask", "Crippling Poison", "Noxious Fumes",
    "Envenom", "Corpse Explosion",
];

const BLOCK_CARDS: &[&str] = &[
    "Shrug It Off", "True Grit", "Flame Barrier", "Ghostly Armor", "Impervious", "Metallicize",
    "Power Through", "Sentinel", "Iron Wave", "Backflip", "Deflect", "Dodge and Roll",
    "Cloak And Dagger", "Leg Sweep", "Blur", "Escape Plan", "Footwork", "After Image",
    "Glacier", "Leap", "Auto Shields", "Force Field", "Reinforced Body", "Genetic Algorithm",
    "Steam", "Conserve Battery", "Protect", "Halt", "Prostrate", "EmptyBody", "Perseverance",
    "SpiritShield", "Sanctity", "Swivel", "LikeWater", "MentalFortress",
];

const STRENGTH_GENERATORS: &[&str] = &[
    "Inflame", "Flex", "Spot Weakness", "Demon Form", "Rupture", "Fasting2",
];

const FOCUS_GENERATORS: &[&str] = &[
    "Defragment", "Consume", "Biased Cognition",
];

const MANTRA_GENERATORS: &[&str] = &[
    "Prostrate", "Pray", "Worship", "Devotion",
];

const RETAIN_CARDS: &[&str] = &[
    "SandsOfTime", "Perseverance", "WindmillStrike", "FlyingSleeves", "Protect", "Meditate",
    "Undo", "Well Laid Plans",
];

const REQUIREMENTS: &[(&str, Synergy)] = &[
    // Orb payoffs
    ("Capacitor", Synergy::Orbs),
    ("Multi-Cast", Synergy::Orbs),
    ("Redo", Synergy::Orbs),
    ("Barrage", Synergy::Orbs),
    ("Compile Driver", Synergy::Orbs),
    ("Blizzard", Synergy::Orbs),
    ("Thunder Strike", Synergy::Orbs),
    ("Fission", Synergy::Orbs),
    // Shiv payoffs
    ("Accuracy", Synergy::Shivs),
    ("Finisher", Synergy::Shivs),
    // Poison payoffs
    ("Bane", Synergy::Poison),
    ("Catalyst", Synergy::Poison),
    // Block payoffs
    ("Body Slam", Synergy::Block),
    ("Entrench", Synergy::Block),
    ("Juggernaut", Synergy::Block),
    ("Barricade", Synergy::Block),
    ("WaveOfTheHand", Synergy::Block),
    // Strength payoffs
    ("Heavy Blade", Synergy::Strength),
    ("Limit Break", Synergy::Strength),
    ("Sword Boomerang", Synergy::Strength),
    ("Pummel", Synergy::Strength),
    // Focus payoffs
    ("Loop", Synergy::Focus),
    ("Reprogram", Synergy::Focus),
    ("Biased Cognition", Synergy::Focus),
    // Mantra payoffs
    ("Brilliance", Synergy::Mantra),
    // Retain payoffs
    ("Establishment", Synergy::Retain),
];

const MAX_COPIES: &[(&str, u32)] = &[
    // Starter basics
    ("Strike_R", 5), ("Strike_G", 5), ("Strike_B", 5), ("Strike_P", 5),
    ("Defend_R", 5), ("Defend_G", 5), ("Defend_B", 5), ("Defend_P", 5),
    // Ironclad
    ("Demon Form", 1), ("Barricade", 1), ("Corruption", 1), ("Juggernaut", 1),
    ("Berserk", 1), ("Brutality", 1), ("Evolve", 1), ("Fire Breathing", 1), ("Rupture", 1),
    ("Offering", 1), ("Feed", 1), ("Limit Break", 1), ("Reaper", 1), ("Feel No Pain", 2),
    ("Dark Embrace", 2), ("Inflame", 2), ("Metallicize", 2), ("Impervious", 2),
    ("Double Tap", 2), ("Combust", 2),
    // Silent
    ("Wraith Form v2", 1), ("A Thousand Cuts", 1), ("Envenom", 1),
    ("Tools of the Trade", 1), ("Infinite Blades", 1), ("After Image", 2),
    ("Noxious Fumes", 2), ("Caltrops", 2), ("Footwork", 2), ("Accuracy", 2),
    ("Well Laid Plans", 1), ("Adrenaline", 2), ("Alchemize", 1), ("Grand Finale", 1),
    // Defect
    ("Echo Form", 1), ("Creative AI", 1), ("Electrodynamics", 1), ("Biased Cognition", 1),
    ("Storm", 1), ("Hello World", 1), ("Heatsinks", 1), ("Self Repair", 1),
    ("Machine Learning", 1), ("Meteor Strike", 1), ("Buffer", 2), ("Defragment", 2),
    ("Capacitor", 2), ("Loop", 2), ("Static Discharge", 2),
    // Watcher
    ("DevaForm", 1), ("MasterReality", 1), ("Omniscience", 1), ("Establishment", 1),
    ("LikeWater", 1), ("Nirvana", 1), ("Study", 1), ("Adaptation", 1), ("BattleHymn", 1),
    ("Devotion", 1), ("Fasting2", 1), ("Alpha", 1), ("Scrawl", 1), ("Vault", 1), ("Wish", 1),
    ("MentalFortress", 2),
    // Colorless
    ("Apotheosis", 1), ("Magnetism", 1), ("Mayhem", 1), ("Panache", 1),
    ("Sadistic Nature", 1),
];

/// Default shared card tables
pub fn default_card_tables() -> CardTables {
    let generators = [
        (Synergy::Orbs, ORB_GENERATORS),
        (Synergy::Shivs, SHIV_GENERATORS),
        (Synergy::Poison, POISON_CARDS),
        (Synergy::Block, BLOCK_CARDS),
        (Synergy::Strength, STRENGTH_GENERATORS),
        (Synergy::Focus, FOCUS_GENERATORS),
        (Synergy::Mantra, MANTRA_GENERATORS),
        (Synergy::Retain, RETAIN_CARDS),
    ]
    .into_iter()
    .map(|(synergy, cards)| (synergy, id_set(cards)))
    .collect();

    CardTables {
        colorless: ids(COLORLESS),
        skills: id_set(SKILLS),
        powers: id_set(POWERS),
        requirements: REQUIREMENTS.iter().map(|(id, s)| (id.to_string(), *s)).collect(),
        generators,
        max_copies: MAX_COPIES.iter().map(|(id, n)| (id.to_string(), *n)).collect(),
        excluded: id_set(&["Ritual Dagger"]),
    }
}

/// Default per-class tables
pub fn default_class_tables() -> Vec<ClassTable> {
    vec![ironclad_table(), silent_table(), defect_table(), watcher_table()]
}
