/// Component definitions for the simulation layer.
///
/// Position, velocity, mass and collider components. The simulation is 2D,
/// so everything is a `Vec2` in world units.

use bevy::prelude::*;

// ============================================================================
// Position & Physics Components
// ============================================================================

/// Logical position of an entity in the simulation world.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimPosition(pub Vec2);

/// Logical velocity of an entity, in world units per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimVelocity(pub Vec2);

/// Mass used to turn impulses into velocity changes.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SimMass(pub f32);

impl Default for SimMass {
    fn default() -> Self {
        Self(1.0)
    }
}

// ============================================================================
// Collision Components
// ============================================================================

/// Collision layers for filtering
pub mod layers {
    pub const NONE: u32 = 0;
    pub const COLLECTOR: u32 = 1 << 0;
    pub const PICKUP: u32 = 1 << 1;
}

/// Circular trigger collider.
///
/// An entity reports overlaps with every collider whose `layer` intersects its
/// own `mask`. Overlaps never push anything apart.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub radius: f32,
    pub layer: u32,
    pub mask: u32,
}

impl Collider {
    pub fn collector(radius: f32) -> Self {
        Self {
            radius,
            layer: layers::COLLECTOR,
            mask: layers::PICKUP,
        }
    }

    pub fn pickup(radius: f32) -> Self {
        Self {
            radius,
            layer: layers::PICKUP,
            mask: layers::NONE,
        }
    }

    /// True if this collider wants overlap reports about `other`.
    pub fn senses(&self, other: &Collider) -> bool {
        self.mask & other.layer != 0
    }
}
