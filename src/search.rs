//! Searching a slice that is already sorted in ascending order.
//!
//! [`binary_search`] halves the candidate range on every probe. [`index_of`] checks every
//! element in turn and is kept as the baseline the binary search is measured against.
//!
//! # Examples
//!
//! ```
//! use bst_search::search::{binary_search, binary_search_traced, index_of};
//!
//! let sorted = [3, 5, 6, 8, 11, 12, 14, 15, 17, 18];
//!
//! assert_eq!(binary_search(&sorted, &8), Some(3));
//! assert_eq!(binary_search(&sorted, &16), None);
//! assert_eq!(index_of(&sorted, &8), Some(3));
//!
//! let trace = binary_search_traced(&sorted, &8);
//! let probed: Vec<_> = trace.probes().iter().map(|&i| sorted[i]).collect();
//! assert_eq!(probed, [11, 5, 6, 8]);
//! ```

use std::cmp::Ordering;

/// Returns the index of an element equal to `target` in `sorted`, or `None` if there is none.
///
/// `sorted` must be in ascending order; otherwise the result is unspecified (but it never
/// panics). When several elements equal `target`, any one of their indices may be returned.
pub fn binary_search<T>(sorted: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    search_range(sorted, target, 0, sorted.len().checked_sub(1)?, &mut |_: usize| {})
}

/// Like [`binary_search`] but also records every index that was probed along the way.
pub fn binary_search_traced<T>(sorted: &[T], target: &T) -> SearchTrace
where
    T: Ord,
{
    let mut probes = Vec::new();
    let index = sorted.len().checked_sub(1).and_then(|end| {
        search_range(sorted, target, 0, end, &mut |index: usize| probes.push(index))
    });

    SearchTrace { index, probes }
}

/// Looks at the elements of `items` one at a time and returns the index of the first one equal
/// to `target`. `items` doesn't need to be sorted.
pub fn index_of<T>(items: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    items.iter().position(|item| item == target)
}

/// The outcome of [`binary_search_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    index: Option<usize>,
    probes: Vec<usize>,
}

impl SearchTrace {
    /// Where the target was found, if anywhere.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The indices compared against the target, in the order they were compared.
    pub fn probes(&self) -> &[usize] {
        &self.probes
    }

    /// How many comparisons the search took.
    pub fn steps(&self) -> usize {
        self.probes.len()
    }
}

/// Searches the inclusive range `start..=end`, narrowing it around the midpoint on each call.
fn search_range<T>(
    sorted: &[T],
    target: &T,
    start: usize,
    end: usize,
    on_probe: &mut dyn FnMut(usize),
) -> Option<usize>
where
    T: Ord,
{
    if start > end {
        return None;
    }

    // Can't overflow: both bounds are valid indices into a slice.
    let index = start + (end - start) / 2;
    on_probe(index);

    match sorted[index].cmp(target) {
        Ordering::Equal => Some(index),
        Ordering::Less => search_range(sorted, target, index + 1, end, on_probe),
        // Nothing left of index 0.
        Ordering::Greater => search_range(sorted, target, start, index.checked_sub(1)?, on_probe),
    }
}
