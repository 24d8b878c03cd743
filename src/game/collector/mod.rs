//! The collector: tracks spawned pickups in a distance-ordered registry,
//! chases them one at a time, and orbits in place when none are left.
//!
//! - **target**: registry entries (pickup handle + distance rank)
//! - **policy**: which target to chase, when to switch, how hard to push
//! - **controller**: the registry and the Pursuing/Idling state machine
//! - **systems**: ECS glue feeding messages in and applying decisions

mod components;
mod events;
mod systems;

pub mod controller;
pub mod policy;
pub mod target;

use bevy::prelude::*;
use crate::game::config::CollectorConfig;
use crate::game::simulation::SimSet;

pub use components::Collector;
pub use controller::{ContactOutcome, IdleOrbit, PursuitController, PursuitMode};
pub use events::PickupCollected;
pub use policy::{pursuit_impulse, select_next_pursuit_target, should_preempt_current_pursuit};
pub use systems::{
    advance_idle_orbit, collector_bundle, grow_idle_radius, handle_pickup_arrivals,
    handle_pickup_contacts,
};
pub use target::Target;


/// Pursuit behaviour for every entity carrying [`Collector`] + [`PursuitController`].
pub struct CollectorPlugin;

impl Plugin for CollectorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectorConfig>()
           .add_message::<PickupCollected>()
           .add_systems(FixedUpdate, (
               (handle_pickup_arrivals, handle_pickup_contacts)
                   .chain()
                   .in_set(SimSet::Steering),
               grow_idle_radius.in_set(SimSet::Physics),
               systems::log_pursuit_status.after(SimSet::Physics),
           ))
           .add_systems(Update, advance_idle_orbit);
    }
}
