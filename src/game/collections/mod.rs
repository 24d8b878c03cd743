//! Generic collections used by the game systems.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use collector::game::collections::{Ranked, RankedList};
//!
//! struct Dist(f32);
//!
//! impl Ranked for Dist {
//!     fn rank_cmp(&self, other: &Self) -> Ordering {
//!         self.0.total_cmp(&other.0)
//!     }
//! }
//!
//! let mut list = RankedList::new();
//! list.add(Dist(5.0));
//! list.add(Dist(1.0));
//! assert_eq!(list.get(0).unwrap().0, 1.0);
//! assert_eq!(list.last().unwrap().0, 5.0);
//! ```

pub mod ranked_list;

#[cfg(test)]
mod tests;

pub use ranked_list::{CollectionError, Ranked, RankedList};
