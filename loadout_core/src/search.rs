//! Looking items up by name.
//!
//! [`linear_search_by_name`] works on any backpack. [`binary_search_by_name`] is faster but only
//! answers for a backpack that is currently sorted by name, see
//! [`Backpack::is_sorted_by_name`].

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{BackpackError, Result};
use crate::{Backpack, Item};

/// What a search came back with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe<'a> {
    /// The matching item, if there was one.
    pub item: Option<&'a Item>,

    /// Name comparisons made on the way.
    pub comparisons: usize,
}

impl Probe<'_> {
    pub fn is_found(&self) -> bool {
        self.item.is_some()
    }
}

/// Scans from the front and stops at the first item named exactly `name`.
///
/// # Usage
///```
/// use loadout_core::{search, Backpack, Item};
///
/// let mut backpack = Backpack::new();
/// backpack.insert(Item::new("Faca", "Arma", 1, 2)?)?;
/// backpack.insert(Item::new("Agua", "Cura", 3, 4)?)?;
///
/// let probe = search::linear_search_by_name(&backpack, "Agua");
/// assert_eq!(probe.item.map(|i| i.count()), Some(3));
/// assert_eq!(probe.comparisons, 2);
/// # Ok::<(), loadout_core::BackpackError>(())
///```
pub fn linear_search_by_name<'a>(backpack: &'a Backpack, name: &str) -> Probe<'a> {
    let mut comparisons = 0;
    let item = backpack.iter().find(|item| {
        comparisons += 1;
        item.name() == name
    });

    debug!(query = name, found = item.is_some(), comparisons, "linear search");
    Probe { item, comparisons }
}

/// Classic iterative binary search over a name-sorted backpack.
///
/// Every step makes one three-way comparison between the middle item's name and `name`. A
/// greater middle continues in the left half, a lesser one in the right half.
///
/// Fails with [`BackpackError::PreconditionViolation`] when the backpack is not sorted by name.
/// It never falls back to scanning.
///
/// # Usage
///```
/// use loadout_core::{search, Backpack, BackpackError, Criterion, Item};
///
/// let mut backpack = Backpack::new();
/// backpack.insert(Item::new("Faca", "Arma", 1, 2)?)?;
/// backpack.insert(Item::new("Escudo", "Defesa", 1, 5)?)?;
/// backpack.insert(Item::new("Agua", "Cura", 3, 4)?)?;
///
/// assert_eq!(
///     search::binary_search_by_name(&backpack, "Escudo"),
///     Err(BackpackError::PreconditionViolation)
/// );
///
/// backpack.sort(Criterion::Name);
/// let probe = search::binary_search_by_name(&backpack, "Escudo")?;
/// assert!(probe.is_found());
/// assert!(probe.comparisons <= 2);
/// # Ok::<(), loadout_core::BackpackError>(())
///```
pub fn binary_search_by_name<'a>(backpack: &'a Backpack, name: &str) -> Result<Probe<'a>> {
    if !backpack.is_sorted_by_name() {
        return Err(BackpackError::PreconditionViolation);
    }

    let items = backpack.items();
    let mut comparisons = 0;
    let mut item = None;

    // `high` is exclusive
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        comparisons += 1;

        match items[mid].name().cmp(name) {
            Ordering::Equal => {
                item = Some(&items[mid]);
                break;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    debug!(query = name, found = item.is_some(), comparisons, "binary search");
    Ok(Probe { item, comparisons })
}
