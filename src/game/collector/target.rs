use std::cmp::Ordering;

use bevy::prelude::*;

use crate::game::collections::Ranked;

/// A tracked pickup and its distance from the collector at last measurement.
///
/// `rank` goes stale as soon as either side moves; it is refreshed for every
/// surviving target whenever a pickup is collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub pickup: Entity,
    pub rank: f32,
}

impl Target {
    pub fn measure(pickup: Entity, pickup_pos: Vec2, owner_pos: Vec2) -> Self {
        Self {
            pickup,
            rank: owner_pos.distance(pickup_pos),
        }
    }

    pub fn remeasure(&mut self, pickup_pos: Vec2, owner_pos: Vec2) {
        self.rank = owner_pos.distance(pickup_pos);
    }
}

impl Ranked for Target {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rank.total_cmp(&other.rank)
    }
}
