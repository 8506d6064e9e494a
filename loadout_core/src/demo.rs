use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use prettytable::{row, Table};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::BackpackError;
use crate::search;
use crate::{Backpack, Criterion, Item};

// (name, type) pairs the demo draws from.
const POOL: [(&str, &str); 16] = [
    ("Water", "Cure"),
    ("Bandage", "Cure"),
    ("Medkit", "Cure"),
    ("Knife", "Weapon"),
    ("Pistol", "Weapon"),
    ("Crossbow", "Weapon"),
    ("Ammo", "Weapon"),
    ("Vest", "Armor"),
    ("Helmet", "Armor"),
    ("Shield", "Armor"),
    ("Map", "Tool"),
    ("Radio", "Tool"),
    ("Rope", "Tool"),
    ("Flashlight", "Tool"),
    ("Compass", "Tool"),
    ("Grenade", "Explosive"),
];

/// Fills a backpack with up to `size` distinct random items.
///
/// Items that do not fit are dropped and the backpack is returned full. The same `seed` always
/// produces the same backpack.
pub fn random_backpack(size: usize, capacity: usize, seed: Option<u64>) -> Result<Backpack> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut backpack = Backpack::with_capacity(capacity);
    for &(name, category) in POOL.choose_multiple(&mut rng, size) {
        let item = Item::new(name, category, rng.gen_range(1..=10), rng.gen_range(1..=5))?;
        match backpack.insert(item) {
            Ok(()) => {}
            Err(BackpackError::Full { capacity }) => {
                info!(capacity, requested = size, "demo backpack is full");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(backpack)
}

/// Sorts copies of `backpack` by each of `criteria` and searches a name-sorted copy for every
/// item, printing the comparisons each step needed.
pub fn run_demo<W: Write>(backpack: &Backpack, criteria: &[Criterion], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{} {} of {}",
        "Backpack Size -> ".bold().underline().blue(),
        backpack.len().to_string().bold(),
        backpack.capacity()
    )?;

    let mut table = Table::new();
    table.add_row(row![
        "Name".bold(),
        "Type".bold(),
        "Count".bold(),
        "Priority".bold()
    ]);
    for item in backpack {
        table.add_row(row![
            item.name(),
            item.category(),
            item.count(),
            item.priority()
        ]);
    }
    table.print(out)?;
    writeln!(out)?;

    let mut table = Table::new();
    table.add_row(row![
        "Criterion".bold(),
        "Comparisons Made".bold(),
        "Resulting Order".bold()
    ]);
    for &criterion in criteria {
        let mut sorted = backpack.clone();
        let comparisons = sorted.sort(criterion);
        let order = sorted
            .iter()
            .map(Item::name)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row![criterion, comparisons, order]);
    }
    table.print(out)?;
    writeln!(out)?;

    if backpack.is_empty() {
        writeln!(out, "{}", "Nothing to search in an empty backpack".dimmed())?;
        return Ok(());
    }

    let mut by_name = backpack.clone();
    by_name.sort(Criterion::Name);

    let mut table = Table::new();
    table.add_row(row![
        "Item".bold(),
        "Linear Search".bold(),
        "Binary Search".bold()
    ]);
    for item in &by_name {
        let linear = search::linear_search_by_name(backpack, item.name());
        let binary = search::binary_search_by_name(&by_name, item.name())?;
        table.add_row(row![item.name(), linear.comparisons, binary.comparisons]);
    }
    table.print(out)?;
    writeln!(out)?;

    Ok(())
}
