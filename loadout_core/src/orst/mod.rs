//! Criterion driven sorting of backpack items.
//!
//! A single insertion sort routine ([`InsertionSorter`]) does the shifting. What changes between
//! criteria is only the predicate that decides whether an element has to move to the right of
//! the element being inserted, which is what [`Criterion::must_follow`] provides.
//!
//! # Example
//!
//! ```
//! use loadout_core::orst::{InsertionSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! let comparisons = InsertionSorter.sort_by(&mut slice, |a, b| a > b);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! assert_eq!(comparisons, 6);
//! ```

mod sorters;

pub use sorters::insertion_sorter::InsertionSorter;

use std::fmt::Display;

use clap::ValueEnum;

use crate::Item;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `must_follow(a, b)` returns `true` when `a` has to end up to the right of `b`. The return
/// value is the number of times `must_follow` was called.
pub trait Sorter<T> {
    fn sort_by<F>(&self, slice: &mut [T], must_follow: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

/// The attribute and direction a backpack is ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Criterion {
    /// Alphabetical by name
    Name,

    /// Alphabetical by type
    Type,

    /// Highest priority first
    Priority,
}

impl Criterion {
    /// All criteria in menu order.
    pub const ALL: [Criterion; 3] = [Criterion::Name, Criterion::Type, Criterion::Priority];

    /// Returns `true` when `a` must be placed after `b` under this criterion.
    ///
    /// Names and types compare bytewise, so uppercase sorts before lowercase.
    pub fn must_follow(self, a: &Item, b: &Item) -> bool {
        match self {
            Criterion::Name => a.name() > b.name(),
            Criterion::Type => a.category() > b.category(),
            Criterion::Priority => a.priority() < b.priority(),
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Name => write!(f, "name"),
            Criterion::Type => write!(f, "type"),
            Criterion::Priority => write!(f, "priority"),
        }
    }
}
