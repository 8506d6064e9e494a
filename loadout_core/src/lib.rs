//! # Introduction
//!
//! A small backpack of survival items. Items can be added and removed, sorted by name, type or
//! priority with an insertion sort, and looked up by name either with a linear scan or, once the
//! backpack is sorted by name, with a binary search. Sorting and searching both report how many
//! comparisons they made.
//!
//! # Example
//!
//! ```
//! use loadout_core::{search, Backpack, Criterion, Item};
//!
//! let mut backpack = Backpack::new();
//! for (name, category, priority) in [("Faca", "Arma", 2), ("Escudo", "Defesa", 5), ("Agua", "Cura", 4)] {
//!     backpack.insert(Item::new(name, category, 1, priority)?)?;
//! }
//!
//! backpack.sort(Criterion::Name);
//! let probe = search::binary_search_by_name(&backpack, "Escudo")?;
//! assert_eq!(probe.item.map(|i| i.priority()), Some(5));
//! # Ok::<(), loadout_core::BackpackError>(())
//! ```

pub mod backpack;
pub mod demo;
pub mod error;
pub mod item;
pub mod orst;
pub mod search;
pub mod session;

pub use backpack::{Backpack, DEFAULT_CAPACITY};
pub use error::BackpackError;
pub use item::Item;
pub use orst::Criterion;
pub use session::Session;

use std::io;

use clap::{Args, Subcommand};

/// Manage a backpack on the commandline. Install the `loadout` crate and run
/// `loadout backpack --help` to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct BackpackArgs {
    #[command(subcommand)]
    command: BackpackCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum BackpackCommands {
    /// Open the interactive backpack menu.
    Interactive {
        /// Most items the backpack can hold.
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
        capacity: usize,
    },

    /// Fill a backpack with random items and print how many comparisons sorting and searching
    /// it takes.
    Demo {
        /// Number of items to put in the backpack.
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
        size: usize,

        /// Most items the backpack can hold.
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
        capacity: usize,

        /// Seed for the random items. Runs with the same seed pick the same items.
        #[arg(long)]
        seed: Option<u64>,

        /// Only sort by this criterion.
        #[arg(long, value_enum)]
        criterion: Option<Criterion>,
    },
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl BackpackArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            BackpackCommands::Interactive { capacity } => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                Session::new(Backpack::with_capacity(capacity), stdin.lock(), stdout.lock())
                    .run()?;
            }
            BackpackCommands::Demo {
                size,
                capacity,
                seed,
                criterion,
            } => {
                let backpack = demo::random_backpack(size, capacity, seed)?;
                let criteria = match criterion {
                    Some(criterion) => vec![criterion],
                    None => Criterion::ALL.to_vec(),
                };
                demo::run_demo(&backpack, &criteria, &mut io::stdout().lock())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn capacity_parsing() {
        assert_eq!(parse_capacity("10"), Ok(10));
        assert_eq!(parse_capacity("1"), Ok(1));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-3").is_err());
        assert!(parse_capacity("ten").is_err());
    }
}
