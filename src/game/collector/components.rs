use bevy::prelude::*;

/// Marks the entity that hunts pickups.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Collector;
