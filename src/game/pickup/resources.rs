use bevy::prelude::*;

/// Timer driving automatic pickup spawns.
#[derive(Resource, Debug)]
pub struct PickupSpawner {
    pub timer: Timer,
}

impl PickupSpawner {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs.max(f32::EPSILON), TimerMode::Repeating),
        }
    }
}

impl Default for PickupSpawner {
    fn default() -> Self {
        Self::new(2.0)
    }
}
