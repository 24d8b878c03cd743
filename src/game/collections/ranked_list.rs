//! Ranked List: a small ordered container kept sorted by a comparable rank.
//!
//! # Purpose
//!
//! Hold a variable number of entries (pursuit targets, typically a handful to a
//! few hundred) in non-decreasing rank order, so that "nearest" and "farthest"
//! are always at the two ends and can be read in O(1).
//!
//! # Ordering Contract
//!
//! After every `add`, `remove_at` or `sort` the list is fully sorted by
//! [`Ranked::rank_cmp`]. Entries may change their rank in place through
//! `get_mut`/`iter_mut`; the list is then unsorted until the caller runs `sort`.
//!
//! Insertion is stable: an entry whose rank ties existing entries lands after
//! them.
//!
//! # Lookup Caveat
//!
//! [`RankedList::index_of`] searches by rank equality, not identity. When
//! several entries share the searched rank it may return any of them. Callers
//! that need identity should confirm the hit and fall back to
//! [`RankedList::position`].

use std::cmp::Ordering;

use thiserror::Error;

/// Total-order comparison by rank.
///
/// Implementors decide what "rank" means. For floats use `total_cmp` so the
/// order stays total even with NaN.
pub trait Ranked {
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

/// Errors returned by indexed access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("index {index} out of range for list of {count} entries")]
    OutOfRange { index: usize, count: usize },
}

/// Vec-backed list kept in non-decreasing rank order.
#[derive(Debug, Clone)]
pub struct RankedList<T: Ranked> {
    items: Vec<T>,
}

impl<T: Ranked> Default for RankedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ranked> RankedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries. O(1).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entry at `index`, or `OutOfRange`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let count = self.items.len();
        self.items
            .get(index)
            .ok_or(CollectionError::OutOfRange { index, count })
    }

    /// Mutable entry at `index`. Changing its rank unsorts the list until `sort`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let count = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CollectionError::OutOfRange { index, count })
    }

    /// Entry with the greatest rank.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Insert keeping sort order. Returns the index the entry landed at.
    ///
    /// Scans from the front for the first entry that ranks strictly above the
    /// new one, so ties keep insertion order. O(n).
    pub fn add(&mut self, entry: T) -> usize {
        let index = self
            .items
            .iter()
            .position(|item| entry.rank_cmp(item) == Ordering::Less)
            .unwrap_or(self.items.len());

        self.items.insert(index, entry);
        index
    }

    /// Remove and return the entry at `index`. Survivors keep their order. O(n).
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let count = self.items.len();
        if index >= count {
            return Err(CollectionError::OutOfRange { index, count });
        }
        Ok(self.items.remove(index))
    }

    /// Find an entry of equal rank. `None` means not found.
    ///
    /// Checks the tail first since the farthest entry is the one most often
    /// looked up, then binary searches the whole list.
    pub fn index_of(&self, entry: &T) -> Option<usize> {
        let upper = self.items.len().checked_sub(1)?;

        if self.items[upper].rank_cmp(entry) == Ordering::Equal {
            return Some(upper);
        }

        // Half-open [lower, upper) so the bounds never underflow.
        let mut lower = 0;
        let mut upper = upper + 1;
        while lower < upper {
            let middle = lower + (upper - lower) / 2;
            match self.items[middle].rank_cmp(entry) {
                Ordering::Equal => return Some(middle),
                Ordering::Greater => upper = middle,
                Ordering::Less => lower = middle + 1,
            }
        }

        None
    }

    /// Index of the first entry matching `predicate`. Linear scan.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// Re-establish order after ranks were changed in place. Stable.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.rank_cmp(b));
    }

    /// Keep only entries matching `predicate`. Order is preserved.
    pub fn retain(&mut self, predicate: impl FnMut(&T) -> bool) {
        self.items.retain(predicate);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iteration. Changing ranks unsorts the list until `sort`.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// True when every adjacent pair is in non-decreasing rank order.
    pub fn is_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0].rank_cmp(&pair[1]) != Ordering::Greater)
    }
}

impl<'a, T: Ranked> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
