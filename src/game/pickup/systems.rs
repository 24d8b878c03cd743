use std::time::Duration;

use bevy::prelude::*;
use rand::{rng, Rng};

use crate::game::config::CollectorConfig;
use crate::game::simulation::{Collider, SimPosition, SpawnPickupCommand};

use super::components::Pickup;
use super::events::PickupSpawned;
use super::resources::PickupSpawner;

/// Components every pickup carries.
pub fn pickup_bundle(config: &CollectorConfig, position: Vec2) -> impl Bundle {
    (
        Pickup,
        SimPosition(position),
        Collider::pickup(config.pickup_radius),
        Transform::from_xyz(
            position.x * config.pixels_per_unit,
            position.y * config.pixels_per_unit,
            0.0,
        ),
    )
}

/// Random point inside the configured spawn area.
pub fn random_spawn_position(config: &CollectorConfig) -> Vec2 {
    let mut rng = rng();
    let half = config.spawn_half_extents.abs();
    Vec2::new(
        rng.random_range(-half.x..=half.x),
        rng.random_range(-half.y..=half.y),
    )
}

pub(super) fn init_spawner(mut commands: Commands, config: Res<CollectorConfig>) {
    commands.insert_resource(PickupSpawner::new(config.spawn_interval_secs));
}

/// Queue a spawn each time the spawner timer elapses, up to `max_pickups`.
pub fn spawn_pickups_on_timer(
    config: Res<CollectorConfig>,
    mut spawner: ResMut<PickupSpawner>,
    pickups: Query<(), With<Pickup>>,
    mut spawn_commands: MessageWriter<SpawnPickupCommand>,
) {
    if !config.spawner_enabled {
        return;
    }

    spawner
        .timer
        .tick(Duration::from_secs_f32(config.fixed_delta_secs()));
    if !spawner.timer.just_finished() {
        return;
    }

    let live = pickups.iter().count();
    if live >= config.max_pickups {
        debug!("Spawner idle: {} pickups live (cap {})", live, config.max_pickups);
        return;
    }

    spawn_commands.write(SpawnPickupCommand {
        position: random_spawn_position(&config),
    });
}

/// Spawn requested pickups and announce each one.
pub fn process_spawn_commands(
    mut commands: Commands,
    config: Res<CollectorConfig>,
    mut spawn_commands: MessageReader<SpawnPickupCommand>,
    mut arrivals: MessageWriter<PickupSpawned>,
) {
    for command in spawn_commands.read() {
        let pickup = commands.spawn(pickup_bundle(&config, command.position)).id();
        debug!("Spawned pickup {:?} at {:?}", pickup, command.position);
        arrivals.write(PickupSpawned {
            pickup,
            position: command.position,
        });
    }
}
