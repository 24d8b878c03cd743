/// Overlap detection.
///
/// Colliders here are triggers: nothing is pushed apart. Every physics step,
/// each overlapping pair where one side senses the other produces a
/// [`CollisionEvent`], for as long as the overlap persists.

use bevy::prelude::*;
use collector_macros::profile;
use super::components::*;
use super::resources::SimTick;

// ============================================================================
// Events
// ============================================================================

/// Fired every step while `entity1` overlaps something it senses (`entity2`).
#[derive(Event, Message, Debug, Clone)]
pub struct CollisionEvent {
    pub entity1: Entity,
    pub entity2: Entity,
    pub overlap: f32,
}

// ============================================================================
// Detection
// ============================================================================

/// Brute-force pairwise overlap test between sensing colliders and everything
/// else. Sensors are few (one collector), so this is O(sensors * colliders).
#[profile]
pub fn detect_collisions(
    query: Query<(Entity, &SimPosition, &Collider)>,
    mut collisions: MessageWriter<CollisionEvent>,
    #[allow(unused_variables)] tick: Res<SimTick>,
) {
    // Sort for determinism
    let mut colliders: Vec<(Entity, Vec2, Collider)> =
        query.iter().map(|(e, p, c)| (e, p.0, *c)).collect();
    colliders.sort_by_key(|(e, _, _)| *e);

    for (sensor, sensor_pos, sensor_collider) in colliders.iter() {
        if sensor_collider.mask == layers::NONE {
            continue;
        }

        for (other, other_pos, other_collider) in colliders.iter() {
            if other == sensor || !sensor_collider.senses(other_collider) {
                continue;
            }

            let reach = sensor_collider.radius + other_collider.radius;
            let dist_sq = sensor_pos.distance_squared(*other_pos);
            if dist_sq < reach * reach {
                collisions.write(CollisionEvent {
                    entity1: *sensor,
                    entity2: *other,
                    overlap: reach - dist_sq.sqrt(),
                });
            }
        }
    }
}
