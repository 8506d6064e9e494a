use crate::orst::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time.
///
/// For every position after the first, the element there is walked backwards through the sorted
/// prefix behind it. Each step asks the predicate whether the element in front has to follow the
/// one being inserted. If it does, the two trade places and the walk continues. The first `false`
/// ends the walk, so elements that compare equal never overtake each other and the sort is
/// stable.
///
/// Every call to the predicate is counted, and the total is returned.
///
/// # Usage
///```
/// use loadout_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort_by(&mut slice, |a, b| a > b);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Default, Debug, Clone, Copy)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], mut must_follow: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut comparisons = 0;

        for unsorted in 1..slice.len() {
            let mut i = unsorted;
            while i > 0 {
                comparisons += 1;
                if !must_follow(&slice[i - 1], &slice[i]) {
                    break;
                }
                slice.swap(i - 1, i);
                i -= 1;
            }
        }

        comparisons
    }
}
