/// Core simulation systems.
///
/// This module contains systems for:
/// - Tick management
/// - Syncing logical positions to render transforms

use bevy::prelude::*;
use crate::game::config::CollectorConfig;

use super::components::*;
use super::resources::*;

// ============================================================================
// Tick Management
// ============================================================================

/// Increment the global simulation tick counter.
///
/// Runs before every other fixed-step system.
pub fn increment_sim_tick(mut tick: ResMut<SimTick>) {
    tick.increment();
}

// ============================================================================
// Presentation Sync
// ============================================================================

/// Copy logical positions into `Transform` so renderers see them.
pub fn sync_transforms(
    config: Res<CollectorConfig>,
    mut query: Query<(&SimPosition, &mut Transform), Changed<SimPosition>>,
) {
    let scale = config.pixels_per_unit;
    for (pos, mut transform) in query.iter_mut() {
        transform.translation.x = pos.0.x * scale;
        transform.translation.y = pos.0.y * scale;
    }
}
