use tracing::debug;

use crate::error::{BackpackError, Result};
use crate::orst::{Criterion, InsertionSorter, Sorter};
use crate::Item;

/// How many items a backpack holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// A bounded, ordered collection of [`Item`]s.
///
/// The backpack remembers whether it is currently sorted by name. Only [`Backpack::sort`] with
/// [`Criterion::Name`] sets that flag, and every other mutation clears it. Binary search
/// ([`binary_search_by_name`](crate::search::binary_search_by_name)) refuses to run unless it is
/// set.
///
/// # Usage
///```
/// use loadout_core::{Backpack, Criterion, Item};
///
/// let mut backpack = Backpack::new();
/// backpack.insert(Item::new("Faca", "Arma", 1, 2)?)?;
/// backpack.insert(Item::new("Agua", "Cura", 3, 4)?)?;
/// assert!(!backpack.is_sorted_by_name());
///
/// backpack.sort(Criterion::Name);
/// assert!(backpack.is_sorted_by_name());
/// assert_eq!(backpack.items()[0].name(), "Agua");
/// # Ok::<(), loadout_core::BackpackError>(())
///```
#[derive(Debug, Clone)]
pub struct Backpack {
    items: Vec<Item>,
    capacity: usize,
    sorted_by_name: bool,
}

impl Default for Backpack {
    fn default() -> Self {
        Self::new()
    }
}

impl Backpack {
    /// An empty backpack holding up to [`DEFAULT_CAPACITY`] items.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty backpack holding up to `capacity` items. The bound never changes afterwards.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            sorted_by_name: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// The items in their current order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Appends `item` at the end.
    ///
    /// Fails with [`BackpackError::Full`] when there is no room, in which case nothing changes.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(BackpackError::Full {
                capacity: self.capacity,
            });
        }

        debug!(item = item.name(), len = self.items.len() + 1, "inserted item");
        self.items.push(item);
        self.sorted_by_name = false;
        Ok(())
    }

    /// Removes the first item called `name`, shifting everything after it one place left.
    ///
    /// The name-sorted flag is cleared on success even though the remaining order is kept.
    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| BackpackError::NotFound(name.to_string()))?;

        let item = self.items.remove(index);
        self.sorted_by_name = false;
        debug!(item = name, index, len = self.items.len(), "removed item");
        Ok(item)
    }

    /// The first item called `name`, scanning from the front.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Reorders the items by `criterion` with an insertion sort and returns the number of
    /// comparisons it made.
    ///
    /// Afterwards the backpack counts as sorted by name exactly when `criterion` is
    /// [`Criterion::Name`]. Fewer than two items means no comparisons at all.
    pub fn sort(&mut self, criterion: Criterion) -> usize {
        let comparisons = InsertionSorter
            .sort_by(self.items.as_mut_slice(), |a, b| criterion.must_follow(a, b));
        self.sorted_by_name = criterion == Criterion::Name;

        debug!(%criterion, comparisons, len = self.items.len(), "sorted backpack");
        comparisons
    }
}

impl<'a> IntoIterator for &'a Backpack {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
