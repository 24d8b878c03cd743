/// Simulation layer: the minimal 2D physics the collector runs on.
///
/// This module is organized into:
/// - **components**: Position, velocity, mass, colliders
/// - **resources**: Tick counter
/// - **events**: Commands entering the simulation
/// - **collision**: Overlap detection
/// - **physics**: Integration and the movement sink (impulse, halt)
/// - **systems**: Tick management and transform sync

use bevy::prelude::*;
use crate::game::config::CollectorConfig;

// Module declarations
pub mod components;
pub mod resources;
pub mod events;
pub mod collision;
pub mod physics;
pub mod systems;

// Re-export commonly used items
pub use components::*;
pub use resources::*;
pub use events::*;
pub use collision::CollisionEvent;
pub use physics::{apply_impulse, halt};

// System sets for organizing execution order
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimSet {
    Input,      // Spawns and arrivals
    Steering,   // Pursuit decisions, impulses
    Integration,// Applying velocity to position
    Physics,    // Overlap detection, idle bookkeeping
}

/// Main simulation plugin
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectorConfig>();
        app.init_resource::<SimTick>();

        // Register events
        app.add_message::<SpawnPickupCommand>();
        app.add_message::<CollisionEvent>();

        // Configure System Sets
        app.configure_sets(FixedUpdate, (
            SimSet::Input,
            SimSet::Steering,
            SimSet::Integration,
            SimSet::Physics,
        ).chain());

        app.add_systems(FixedUpdate, (
            systems::increment_sim_tick.before(SimSet::Input),
            physics::apply_velocity.in_set(SimSet::Integration),
            collision::detect_collisions.in_set(SimSet::Physics),
        ));

        app.add_systems(PostUpdate, systems::sync_transforms);
    }
}
