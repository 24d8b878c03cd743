//! Systems bridging the pursuit controller and the ECS world.
//!
//! Arrival and contact messages are fed to each collector's
//! [`PursuitController`]; its decisions are applied to the movement sink
//! (halt + impulse, or orbit positions while idling).

use bevy::prelude::*;
use collector_macros::profile;

use crate::game::config::CollectorConfig;
use crate::game::pickup::{Pickup, PickupSpawned};
use crate::game::simulation::{
    apply_impulse, halt, Collider, CollisionEvent, SimMass, SimPosition, SimTick, SimVelocity,
};

use super::components::Collector;
use super::controller::{ContactOutcome, PursuitController};
use super::events::PickupCollected;
use super::policy::pursuit_impulse;
use super::target::Target;

/// Components every collector carries.
pub fn collector_bundle(config: &CollectorConfig) -> impl Bundle {
    let start = config.collector_start;
    (
        Collector,
        PursuitController::new(start, config.idle_start_radius),
        SimPosition(start),
        SimVelocity::default(),
        SimMass(config.collector_mass),
        Collider::collector(config.collector_radius),
        Transform::from_xyz(
            start.x * config.pixels_per_unit,
            start.y * config.pixels_per_unit,
            1.0,
        ),
    )
}

/// Stop the collector, then push it toward `target`.
fn launch_toward(
    target: &Target,
    target_pos: Vec2,
    owner_pos: Vec2,
    velocity: &mut SimVelocity,
    mass: SimMass,
    config: &CollectorConfig,
    collectible_count: usize,
) {
    halt(velocity);
    let impulse = pursuit_impulse(
        owner_pos,
        target_pos,
        config.base_impulse_magnitude,
        collectible_count,
    );
    apply_impulse(velocity, mass, impulse);
    debug!(
        "Pursuing {:?} (rank {:.3}) with impulse {:?}, {} collectibles in scene",
        target.pickup, target.rank, impulse, collectible_count
    );
}

/// Register new pickups with every collector; launch if one takes over.
pub fn handle_pickup_arrivals(
    config: Res<CollectorConfig>,
    mut arrivals: MessageReader<PickupSpawned>,
    mut collectors: Query<
        (&SimPosition, &mut SimVelocity, &SimMass, &mut PursuitController),
        (With<Collector>, Without<Pickup>),
    >,
    pickups: Query<(), With<Pickup>>,
) {
    let arrivals: Vec<&PickupSpawned> = arrivals.read().collect();
    if arrivals.is_empty() {
        return;
    }

    for (pos, mut vel, mass, mut controller) in collectors.iter_mut() {
        for arrival in arrivals.iter() {
            let Some(target) = controller.on_pickup_arrived(arrival.pickup, arrival.position, pos.0)
            else {
                continue;
            };
            launch_toward(
                &target,
                arrival.position,
                pos.0,
                &mut vel,
                *mass,
                &config,
                pickups.iter().count(),
            );
        }
    }
}

/// Collect the pursued pickup when a collector overlaps it.
#[profile]
pub fn handle_pickup_contacts(
    mut commands: Commands,
    config: Res<CollectorConfig>,
    mut collisions: MessageReader<CollisionEvent>,
    mut collected: MessageWriter<PickupCollected>,
    mut collectors: Query<
        (Entity, &SimPosition, &mut SimVelocity, &SimMass, &mut PursuitController),
        (With<Collector>, Without<Pickup>),
    >,
    pickups: Query<&SimPosition, With<Pickup>>,
    #[allow(unused_variables)] tick: Res<SimTick>,
) {
    for contact in collisions.read() {
        let Ok((collector, pos, mut vel, mass, mut controller)) = collectors.get_mut(contact.entity1)
        else {
            continue;
        };
        if !pickups.contains(contact.entity2) {
            continue;
        }

        let was_idling = controller.is_idling();
        let outcome = controller.on_contact(contact.entity2, pos.0, |pickup| {
            pickups.get(pickup).ok().map(|p| p.0)
        });

        match outcome {
            ContactOutcome::Ignored => {
                if !was_idling && controller.is_idling() {
                    halt(&mut vel);
                }
            }
            ContactOutcome::Collected { pickup, next } => {
                commands.entity(pickup).despawn();
                collected.write(PickupCollected {
                    collector,
                    pickup,
                    total: controller.collected(),
                });

                let Some(target) = next else {
                    halt(&mut vel);
                    info!(
                        "Collector {:?} collected {:?}, nothing left, orbiting {:?}",
                        collector,
                        pickup,
                        controller.orbit().center
                    );
                    continue;
                };

                info!(
                    "Collector {:?} collected {:?}, {} targets remain",
                    collector,
                    pickup,
                    controller.targets().count()
                );
                let Ok(target_pos) = pickups.get(target.pickup) else {
                    warn!("Next target {:?} has no position, not launching", target.pickup);
                    continue;
                };
                launch_toward(
                    &target,
                    target_pos.0,
                    pos.0,
                    &mut vel,
                    *mass,
                    &config,
                    pickups.iter().count(),
                );
            }
        }
    }
}

/// Widen every idle orbit by one step per physics tick.
pub fn grow_idle_radius(
    config: Res<CollectorConfig>,
    mut collectors: Query<&mut PursuitController, With<Collector>>,
) {
    for mut controller in collectors.iter_mut() {
        if controller.is_idling() {
            controller
                .orbit_mut()
                .grow(config.idle_radius_step, config.idle_max_radius);
        }
    }
}

/// Move idling collectors along their orbit. Runs every frame.
pub fn advance_idle_orbit(
    time: Res<Time>,
    config: Res<CollectorConfig>,
    mut collectors: Query<(&mut PursuitController, &mut SimPosition), With<Collector>>,
) {
    let dt = time.delta_secs();
    for (mut controller, mut pos) in collectors.iter_mut() {
        if !controller.is_idling() {
            continue;
        }
        pos.0 = controller.orbit_mut().advance(config.rotate_speed, dt);
    }
}

/// Log pursuit status periodically
pub fn log_pursuit_status(
    #[allow(unused_variables)] tick: Res<SimTick>,
    #[allow(unused_variables)] collectors: Query<&PursuitController, With<Collector>>,
) {
    use crate::profile_log;

    profile_log!(tick, "[PURSUIT] Tick: {} | Collectors: {} | Idling: {} | Targets: {} | Collected: {}",
        tick.0,
        collectors.iter().count(),
        collectors.iter().filter(|c| c.is_idling()).count(),
        collectors.iter().map(|c| c.targets().count()).sum::<usize>(),
        collectors.iter().map(|c| c.collected()).sum::<u32>());
}
