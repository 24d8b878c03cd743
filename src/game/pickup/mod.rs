//! Pickups: the collectible entities and the spawner that announces them.

mod components;
mod events;
mod resources;
mod systems;

use bevy::prelude::*;
use crate::game::config::CollectorConfig;
use crate::game::simulation::SimSet;

pub use components::Pickup;
pub use events::PickupSpawned;
pub use resources::PickupSpawner;
pub use systems::{pickup_bundle, random_spawn_position, spawn_pickups_on_timer, process_spawn_commands};

/// Spawns pickups on a timer or on request and broadcasts [`PickupSpawned`].
pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectorConfig>()
           .add_message::<PickupSpawned>()
           .init_resource::<PickupSpawner>()
           .add_systems(Startup, systems::init_spawner)
           .add_systems(FixedUpdate, (
               spawn_pickups_on_timer,
               process_spawn_commands,
           ).chain().in_set(SimSet::Input));
    }
}
