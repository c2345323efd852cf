//! STS Arena - Entry Point
//!
//! Standalone runner that generates loadouts outside the game and prints
//! them with distribution statistics, to sanity check the generator.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use stsarena::data::{self, LoadoutTables};
use stsarena::loadout::{
    generate_for_class_with_tables, generate_random_with_tables,
    generate_with_event_count_and_tables, BuiltLoadout, CardType, PlayerClass, MAX_DECK_SIZE,
    MIN_DECK_SIZE,
};
use stsarena::save::LoadoutStore;

/// Generate random arena loadouts and report on them
#[derive(Parser)]
#[command(name = "stsarena")]
#[command(about = "Sanity check the arena loadout generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of loadouts to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Restrict to one class (IRONCLAD, THE_SILENT, DEFECT, WATCHER)
    #[arg(short, long)]
    class: Option<String>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fixed number of edit events instead of a random 10-50
    #[arg(short, long)]
    events: Option<usize>,

    /// Directory containing a loadout_tables.ron override
    #[arg(long)]
    data: Option<PathBuf>,

    /// Persist every generated loadout to the local store
    #[arg(long)]
    save: bool,

    /// Write the built-in tables as RON to this directory and exit
    #[arg(long, value_name = "DIR")]
    export_data: Option<PathBuf>,
}

/// Running tallies over every generated loadout
#[derive(Default)]
struct Stats {
    classes: HashMap<PlayerClass, usize>,
    relics: HashMap<String, usize>,
    cards: HashMap<String, usize>,
    deck_sizes: Vec<usize>,
    relic_counts: Vec<usize>,
    potion_counts: Vec<usize>,
    relic_violations: Vec<String>,
}

impl Stats {
    fn record(&mut self, loadout: &BuiltLoadout, tables: &LoadoutTables) {
        *self.classes.entry(loadout.player_class).or_default() += 1;
        self.deck_sizes.push(loadout.deck.len());
        self.relic_counts.push(loadout.relics.len());
        self.potion_counts.push(loadout.potions.len());

        for relic in &loadout.relics {
            *self.relics.entry(relic.clone()).or_default() += 1;
            if let Some(owner) = tables.relic_owner(relic) {
                if owner != loadout.player_class {
                    self.relic_violations.push(format!(
                        "{} has {} (belongs to {})",
                        loadout.player_class, relic, owner
                    ));
                }
            }
        }
        for card in &loadout.deck {
            *self.cards.entry(card.card_id.clone()).or_default() += 1;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting STS Arena v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    if let Some(dir) = &cli.export_data {
        let path = data::export_default_tables(dir)
            .with_context(|| format!("exporting tables to {}", dir.display()))?;
        println!("Exported tables to {}", path.display());
        return Ok(());
    }

    let tables = match &cli.data {
        Some(dir) => data::load_or_default(dir),
        None => data::load_or_default(&PathBuf::from(data::DEFAULT_DATA_DIR)),
    };

    let class = cli
        .class
        .as_deref()
        .map(str::parse::<PlayerClass>)
        .transpose()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = if cli.save {
        Some(LoadoutStore::open_default().context("opening loadout store")?)
    } else {
        None
    };

    println!("=== Loadout Generator ===\n");

    let mut stats = Stats::default();
    for i in 0..cli.count {
        let loadout = match (class, cli.events) {
            (Some(class), Some(events)) => {
                generate_with_event_count_and_tables(class, events, &tables, &mut rng)?
            }
            (Some(class), None) => generate_for_class_with_tables(class, &tables, &mut rng)?,
            (None, Some(events)) => {
                let class = PlayerClass::ALL[i % PlayerClass::ALL.len()];
                generate_with_event_count_and_tables(class, events, &tables, &mut rng)?
            }
            (None, None) => generate_random_with_tables(&tables, &mut rng)?,
        };

        print_loadout(i + 1, &loadout, &tables);
        stats.record(&loadout, &tables);

        if let Some(store) = &store {
            let record = store.save_generated(&loadout)?;
            println!("  Saved as '{}' ({})\n", record.name, record.uuid);
        }
    }

    if cli.count > 0 {
        print_statistics(&stats);
        print_sanity_checks(&stats);
    }

    log::info!("STS Arena finished");
    Ok(())
}

fn print_loadout(index: usize, loadout: &BuiltLoadout, tables: &LoadoutTables) {
    println!("--- Loadout {} ---", index);
    println!("{}", loadout);
    println!("  Relics: {}", loadout.relics.join(", "));
    println!("  Potions: {}", loadout.potions.join(", "));
    println!(
        "  Deck: {} attacks, {} skills, {} powers, {} upgraded",
        loadout.count_type(tables, CardType::Attack),
        loadout.count_type(tables, CardType::Skill),
        loadout.count_type(tables, CardType::Power),
        loadout.upgraded_count()
    );

    let mut names: Vec<String> = loadout.deck.iter().map(|c| c.to_string()).collect();
    names.sort();
    println!("  Cards: {}\n", names.join(", "));
}

fn summarize(values: &[usize]) -> String {
    let min = values.iter().min().copied().unwrap_or(0);
    let max = values.iter().max().copied().unwrap_or(0);
    let avg = if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    };
    format!("min={}, max={}, avg={:.1}", min, max, avg)
}

fn top_entries(counts: &HashMap<String, usize>, limit: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries.truncate(limit);
    entries
}

fn print_statistics(stats: &Stats) {
    println!("=== Statistics ===");
    println!("Class distribution:");
    for class in PlayerClass::ALL {
        println!("  {}: {}", class, stats.classes.get(&class).copied().unwrap_or(0));
    }

    println!("\nDeck size: {}", summarize(&stats.deck_sizes));
    println!("Relic count: {}", summarize(&stats.relic_counts));
    println!("Potion count: {}", summarize(&stats.potion_counts));

    println!("\nMost common relics:");
    for (relic, count) in top_entries(&stats.relics, 10) {
        println!("  {}: {}", relic, count);
    }

    println!("\nMost common cards:");
    for (card, count) in top_entries(&stats.cards, 15) {
        println!("  {}: {}", card, count);
    }
}

fn print_sanity_checks(stats: &Stats) {
    println!("\n=== Sanity Checks ===");
    let mut passed = true;

    let out_of_range = stats
        .deck_sizes
        .iter()
        .filter(|&&size| !(MIN_DECK_SIZE..=MAX_DECK_SIZE).contains(&size))
        .count();
    if out_of_range > 0 {
        println!(
            "WARNING: {} decks outside {}-{} cards",
            out_of_range, MIN_DECK_SIZE, MAX_DECK_SIZE
        );
        passed = false;
    }

    for violation in &stats.relic_violations {
        println!("ERROR: Wrong class relic: {}", violation);
        passed = false;
    }

    if passed {
        println!("All sanity checks passed!");
    }
}
