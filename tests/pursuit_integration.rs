use bevy::prelude::*;
use collector::game::collector::{collector_bundle, CollectorPlugin, PursuitController};
use collector::game::config::CollectorConfig;
use collector::game::pickup::{Pickup, PickupPlugin};
use collector::game::simulation::{SimVelocity, SimPosition, SimulationPlugin, SpawnPickupCommand};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(CollectorConfig {
        spawner_enabled: false,
        ..Default::default()
    });
    app.add_plugins((SimulationPlugin, PickupPlugin, CollectorPlugin));
    app
}

fn spawn_collector(app: &mut App) -> Entity {
    let config = app.world().resource::<CollectorConfig>().clone();
    app.world_mut().spawn(collector_bundle(&config)).id()
}

fn request_pickup(app: &mut App, position: Vec2) {
    app.world_mut().write_message(SpawnPickupCommand { position });
}

fn step(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn pickups(app: &mut App) -> Vec<(Entity, Vec2)> {
    let mut query = app.world_mut().query_filtered::<(Entity, &SimPosition), With<Pickup>>();
    query.iter(app.world()).map(|(e, p)| (e, p.0)).collect()
}

#[test]
fn test_first_pickup_launches_collector() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    request_pickup(&mut app, Vec2::new(3.0, 0.0));
    step(&mut app, 1);

    let controller = app.world().get::<PursuitController>(collector).unwrap();
    assert!(!controller.is_idling());
    assert_eq!(controller.targets().count(), 1);

    // base 2.0 * one collectible / mass 1.0
    let velocity = app.world().get::<SimVelocity>(collector).unwrap().0;
    assert!((velocity - Vec2::new(2.0, 0.0)).length() < 1e-5, "velocity {:?}", velocity);

    let position = app.world().get::<SimPosition>(collector).unwrap().0;
    assert!(position.x > 0.0, "collector should have moved toward the pickup");
}

#[test]
fn test_impulse_scales_with_collectible_count() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    request_pickup(&mut app, Vec2::new(4.0, 0.0));
    step(&mut app, 1);

    request_pickup(&mut app, Vec2::new(0.0, -1.0));
    step(&mut app, 1);

    let controller = app.world().get::<PursuitController>(collector).unwrap();
    let pursued = controller.pursued().copied().expect("closer arrival should take over");
    let near = pickups(&mut app)
        .into_iter()
        .find(|(_, p)| *p == Vec2::new(0.0, -1.0))
        .map(|(e, _)| e)
        .unwrap();
    assert_eq!(pursued.pickup, near);

    // Halted first, then pushed with two collectibles in the scene
    let velocity = app.world().get::<SimVelocity>(collector).unwrap().0;
    assert!((velocity.length() - 4.0).abs() < 1e-4, "velocity {:?}", velocity);
    assert!(velocity.y < 0.0);
}

#[test]
fn test_farther_arrival_keeps_current_pursuit() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    request_pickup(&mut app, Vec2::new(2.0, 0.0));
    step(&mut app, 1);
    let first = app.world().get::<PursuitController>(collector).unwrap().pursued().copied();

    request_pickup(&mut app, Vec2::new(-6.0, 0.0));
    step(&mut app, 1);

    let controller = app.world().get::<PursuitController>(collector).unwrap();
    assert_eq!(controller.pursued().map(|t| t.pickup), first.map(|t| t.pickup));
    assert_eq!(controller.targets().count(), 2);
}

#[test]
fn test_overlapping_pickup_is_collected() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    request_pickup(&mut app, Vec2::new(0.5, 0.0));
    step(&mut app, 1);
    let pickup = pickups(&mut app)[0].0;

    // Overlap detected this step, handled at the start of the next
    step(&mut app, 1);

    assert!(app.world().get_entity(pickup).is_err(), "collected pickup should be despawned");

    let controller = app.world().get::<PursuitController>(collector).unwrap();
    assert_eq!(controller.collected(), 1);
    assert!(controller.is_idling());
    assert!(controller.targets().is_empty());

    let velocity = app.world().get::<SimVelocity>(collector).unwrap().0;
    assert_eq!(velocity, Vec2::ZERO);
}

#[test]
fn test_collector_chases_down_every_pickup() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    request_pickup(&mut app, Vec2::new(1.5, 0.0));
    request_pickup(&mut app, Vec2::new(-1.5, 0.0));
    request_pickup(&mut app, Vec2::new(0.0, 2.0));

    for _ in 0..2000 {
        step(&mut app, 1);
        if pickups(&mut app).is_empty() {
            break;
        }
    }

    assert!(pickups(&mut app).is_empty(), "pickups left: {:?}", pickups(&mut app));
    let controller = app.world().get::<PursuitController>(collector).unwrap();
    assert_eq!(controller.collected(), 3);
    assert!(controller.is_idling());
}

#[test]
fn test_idle_radius_grows_to_cap() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    step(&mut app, 10);
    let radius = app.world().get::<PursuitController>(collector).unwrap().orbit().radius;
    assert!((radius - 0.02).abs() < 1e-5, "radius {}", radius);

    step(&mut app, 600);
    let radius = app.world().get::<PursuitController>(collector).unwrap().orbit().radius;
    assert_eq!(radius, 0.5);
}

#[test]
fn test_idle_radius_frozen_while_pursuing() {
    let mut app = test_app();
    let collector = spawn_collector(&mut app);

    step(&mut app, 5);
    let before = app.world().get::<PursuitController>(collector).unwrap().orbit().radius;

    request_pickup(&mut app, Vec2::new(8.0, 0.0));
    step(&mut app, 20);

    let controller = app.world().get::<PursuitController>(collector).unwrap();
    assert!(!controller.is_idling());
    assert_eq!(controller.orbit().radius, before);
}
