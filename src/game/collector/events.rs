//! Events emitted by the collector.

use bevy::prelude::*;

/// A collector picked up (and destroyed) a pickup.
#[derive(Event, Message, Debug, Clone)]
pub struct PickupCollected {
    pub collector: Entity,
    pub pickup: Entity,
    /// Collector's lifetime total, including this one.
    pub total: u32,
}
