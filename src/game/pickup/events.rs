//! Arrival notifications for new pickups.

use bevy::prelude::*;

/// Broadcast once per pickup, right after it is spawned.
#[derive(Event, Message, Debug, Clone)]
pub struct PickupSpawned {
    pub pickup: Entity,
    pub position: Vec2,
}
