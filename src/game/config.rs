use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "assets/collector_config.ron";

/// Tuning loaded once at startup. Values missing from the RON file fall back
/// to [`CollectorConfig::default`].
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CollectorConfig {
    // Simulation
    pub tick_rate: f64,

    // Collector body
    pub collector_start: Vec2,
    pub collector_radius: f32,
    pub collector_mass: f32,

    // Pursuit
    pub base_impulse_magnitude: f32,

    // Idle orbit
    pub rotate_speed: f32,
    pub idle_start_radius: f32,
    pub idle_radius_step: f32,
    pub idle_max_radius: f32,

    // Pickups
    pub pickup_radius: f32,
    pub spawner_enabled: bool,
    pub spawn_interval_secs: f32,
    pub spawn_half_extents: Vec2,
    pub max_pickups: usize,

    // Presentation
    pub pixels_per_unit: f32,
}

impl CollectorConfig {
    /// Length of one fixed step in seconds.
    pub fn fixed_delta_secs(&self) -> f32 {
        (1.0 / self.tick_rate) as f32
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            tick_rate: 50.0,
            collector_start: Vec2::ZERO,
            collector_radius: 0.5,
            collector_mass: 1.0,
            base_impulse_magnitude: 2.0,
            rotate_speed: 5.0,
            idle_start_radius: 0.01,
            idle_radius_step: 0.001,
            idle_max_radius: 0.5,
            pickup_radius: 0.25,
            spawner_enabled: true,
            spawn_interval_secs: 2.0,
            spawn_half_extents: Vec2::new(8.0, 4.5),
            max_pickups: 20,
            pixels_per_unit: 60.0,
        }
    }
}

/// Loads [`CollectorConfig`] from disk at startup and applies the tick rate.
///
/// Plugins that only need defaults (tests, tools) can skip this and rely on
/// `init_resource::<CollectorConfig>()`.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectorConfig>()
           .add_systems(PreStartup, (load_collector_config, apply_tick_rate).chain());
    }
}

/// Parse a config from RON text.
pub fn parse_config(contents: &str) -> Result<CollectorConfig, ron::error::SpannedError> {
    ron::from_str::<CollectorConfig>(contents)
}

/// Load configuration synchronously so everything spawned at `Startup` sees it.
fn load_collector_config(mut commands: Commands) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                info!("Loaded collector config from {}", CONFIG_PATH);
                commands.insert_resource(config);
            }
            Err(e) => {
                error!("Failed to parse collector config: {}", e);
                error!("Using default CollectorConfig");
                commands.insert_resource(CollectorConfig::default());
            }
        },
        Err(e) => {
            error!("Failed to read {}: {}", CONFIG_PATH, e);
            error!("Using default CollectorConfig");
            commands.insert_resource(CollectorConfig::default());
        }
    }
}

fn apply_tick_rate(config: Res<CollectorConfig>, mut fixed_time: ResMut<Time<Fixed>>) {
    fixed_time.set_timestep_hz(config.tick_rate);
    info!("Fixed tick rate set to {} Hz", config.tick_rate);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config = parse_config("(tick_rate: 30.0, max_pickups: 5)").unwrap();

        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.max_pickups, 5);
        assert_eq!(config.idle_start_radius, CollectorConfig::default().idle_start_radius);
    }

    #[test]
    fn test_config_round_trips_through_ron() {
        let config = CollectorConfig {
            spawn_half_extents: Vec2::new(3.0, 2.0),
            ..Default::default()
        };

        let text = ron::to_string(&config).unwrap();

        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("(tick_rate: \"fast\")").is_err());
    }
}
