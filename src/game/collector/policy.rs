//! Pursuit policies.
//!
//! Kept apart from the controller so either rule can be swapped without
//! touching the registry or the event handling.
//!
//! Both rules reproduce the collector's long-standing behaviour, which is not
//! what "chase the nearest pickup" would suggest:
//! - after a collection the *farthest* remaining target is chosen;
//! - a new arrival pre-empts only when it beats the closest distance ever
//!   seen, a bound that is never relaxed, even after that target is gone.

use bevy::prelude::*;

use crate::game::collections::RankedList;

use super::target::Target;

/// Target to chase after a collection: the last (highest-ranked) entry.
pub fn select_next_pursuit_target(targets: &RankedList<Target>) -> Option<Target> {
    targets.last().copied()
}

/// Whether a newly arrived target should replace the current pursuit.
///
/// Compares against the running minimum, not the pursued target's rank. With
/// nothing pursued, any arrival is taken.
pub fn should_preempt_current_pursuit(
    candidate_rank: f32,
    closest_rank_seen: f32,
    pursued: Option<&Target>,
) -> bool {
    pursued.is_none() || candidate_rank < closest_rank_seen
}

/// Impulse that sends the collector at `target_pos`.
///
/// Scaled by the number of collectibles in the scene, so crowded scenes make
/// for a faster collector. Coincident positions yield zero.
pub fn pursuit_impulse(
    owner_pos: Vec2,
    target_pos: Vec2,
    base_magnitude: f32,
    collectible_count: usize,
) -> Vec2 {
    (target_pos - owner_pos).normalize_or_zero() * base_magnitude * collectible_count as f32
}
