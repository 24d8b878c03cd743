/// Physics integration and the movement sink.
///
/// This module handles:
/// - Velocity integration
/// - Instantaneous impulses
/// - Halting

use bevy::prelude::*;
use crate::game::config::CollectorConfig;
use super::components::*;

// ============================================================================
// Physics Integration
// ============================================================================

/// Apply velocity to position
pub fn apply_velocity(
    config: Res<CollectorConfig>,
    mut query: Query<(&mut SimPosition, &SimVelocity)>,
) {
    let delta = config.fixed_delta_secs();

    for (mut pos, vel) in query.iter_mut() {
        if vel.0.length_squared() > 0.0 {
            pos.0 += vel.0 * delta;
        }
    }
}

// ============================================================================
// Movement Sink
// ============================================================================

/// Apply an instantaneous impulse: velocity changes by `impulse / mass`.
pub fn apply_impulse(velocity: &mut SimVelocity, mass: SimMass, impulse: Vec2) {
    if mass.0 <= 0.0 {
        warn!("apply_impulse: non-positive mass {}, impulse ignored", mass.0);
        return;
    }
    velocity.0 += impulse / mass.0;
}

/// Stop dead.
pub fn halt(velocity: &mut SimVelocity) {
    velocity.0 = Vec2::ZERO;
}
