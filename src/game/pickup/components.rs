use bevy::prelude::*;

/// Tags an entity as collectible.
///
/// The number of live `Pickup` entities is what scales pursuit impulses, so
/// anything carrying this marker counts even if no collector tracks it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Pickup;
