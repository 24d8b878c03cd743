/// Resource definitions for the simulation.

use bevy::prelude::*;

/// Number of fixed simulation steps run so far.
///
/// Incremented first thing in every `FixedUpdate`, so systems can use it for
/// tick-cadenced logging.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimTick(pub u64);

impl SimTick {
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
