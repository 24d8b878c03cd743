use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub mod collections;
pub mod collector;
pub mod config;
pub mod pickup;
pub mod simulation;

use collector::{collector_bundle, CollectorPlugin, PickupCollected};
use config::{CollectorConfig, ConfigPlugin};
use pickup::{random_spawn_position, Pickup, PickupPlugin};
use simulation::{SimulationPlugin, SpawnPickupCommand};

const COLLECTOR_COLOR: Color = Color::srgb(0.85, 0.55, 0.25);
const PICKUP_COLOR: Color = Color::srgb(0.3, 0.8, 0.9);

/// Everything the windowed game needs: config, simulation, pickups, the
/// collector, and the thin presentation layer on top.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ConfigPlugin,
            SimulationPlugin,
            PickupPlugin,
            CollectorPlugin,
        ))
        .add_systems(Startup, setup_game)
        .add_systems(Update, (
            decorate_new_pickups,
            spawn_pickups_from_input,
            log_collections,
        ));
    }
}

fn setup_game(mut commands: Commands, config: Res<CollectorConfig>) {
    info!("Game setup started");

    commands.spawn(Camera2d);

    let size = Vec2::splat(config.collector_radius * 2.0 * config.pixels_per_unit);
    let collector = commands
        .spawn((collector_bundle(&config), Sprite::from_color(COLLECTOR_COLOR, size)))
        .id();

    info!("Collector {:?} ready at {:?}", collector, config.collector_start);
}

fn decorate_new_pickups(
    mut commands: Commands,
    config: Res<CollectorConfig>,
    new_pickups: Query<Entity, Added<Pickup>>,
) {
    let size = Vec2::splat(config.pickup_radius * 2.0 * config.pixels_per_unit);
    for entity in new_pickups.iter() {
        commands
            .entity(entity)
            .insert(Sprite::from_color(PICKUP_COLOR, size));
    }
}

/// Space spawns a pickup somewhere random; left click spawns one at the cursor.
fn spawn_pickups_from_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    config: Res<CollectorConfig>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut spawn_commands: MessageWriter<SpawnPickupCommand>,
) {
    if keys.just_pressed(KeyCode::Space) {
        spawn_commands.write(SpawnPickupCommand {
            position: random_spawn_position(&config),
        });
    }

    if buttons.just_pressed(MouseButton::Left) {
        let Some((camera, camera_transform)) = q_camera.iter().next() else { return };
        let Some(window) = q_window.iter().next() else { return };
        let Some(cursor_position) = window.cursor_position() else { return };
        let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_position) else { return };

        spawn_commands.write(SpawnPickupCommand {
            position: world_pos / config.pixels_per_unit,
        });
    }
}

fn log_collections(mut collected: MessageReader<PickupCollected>) {
    for event in collected.read() {
        info!("Collector {:?} has collected {} pickups", event.collector, event.total);
    }
}
