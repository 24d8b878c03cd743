/// Commands and events crossing the simulation boundary.

use bevy::prelude::*;

/// Request to spawn a pickup at a world position.
#[derive(Event, Message, Debug, Clone)]
pub struct SpawnPickupCommand {
    pub position: Vec2,
}
