use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use panther_locomotion::{
    KinematicBody, LocomotionConfig, LocomotionEvent, WallRunEndReason, WallSide,
};
use panther_physics::{BodyConfig, Character, CollisionWorld, ContentFlags};

const DT: f32 = 1.0 / 60.0;

type RecordingCharacter = Character<Vec<LocomotionEvent>>;

fn character_at(position: Vec3) -> RecordingCharacter {
    Character::with_sink(
        BodyConfig::default(),
        LocomotionConfig::default(),
        position,
        Vec::new(),
    )
}

fn events(character: &RecordingCharacter) -> &[LocomotionEvent] {
    character.locomotion.sink()
}

fn count(character: &RecordingCharacter, wanted: fn(&LocomotionEvent) -> bool) -> usize {
    events(character).iter().filter(|e| wanted(e)).count()
}

/// Flat floor with its top face at z=0.
fn floor_world() -> CollisionWorld {
    let mut world = CollisionWorld::new();
    world.add_box(
        Vec3::new(0.0, 0.0, -50.0),
        Vec3::new(20_000.0, 20_000.0, 50.0),
        ContentFlags::SOLID,
    );
    world
}

fn tick_until_landed(character: &mut RecordingCharacter, world: &CollisionWorld, max_ticks: usize) {
    for _ in 0..max_ticks {
        character.move_input(0.0, 1.0);
        if character.tick(world, DT).landed {
            return;
        }
    }
    panic!("character never landed at {:?}", character.body.position());
}

#[test]
fn ground_jump_then_double_jump_then_land() {
    let world = floor_world();
    let mut character = character_at(Vec3::new(0.0, 0.0, 150.0));

    tick_until_landed(&mut character, &world, 120);
    assert!(character.body.is_grounded());
    assert_eq!(count(&character, |e| matches!(e, LocomotionEvent::Landed)), 1);

    for _ in 0..30 {
        character.move_input(0.0, 1.0);
        character.tick(&world, DT);
    }
    let run_speed = character.body.velocity().x;
    assert!(run_speed > 200.0, "run speed {run_speed}");
    assert!(character.body.rotation().yaw.abs() < 1e-3, "faces +X");

    character.jump_pressed();
    assert!(character.body.is_airborne());
    assert_eq!(character.body.velocity().z, 700.0);
    assert_eq!(count(&character, |e| matches!(e, LocomotionEvent::GroundJump)), 1);

    for _ in 0..5 {
        character.move_input(0.0, 1.0);
        character.tick(&world, DT);
    }
    character.jump_released(&world);
    for _ in 0..5 {
        character.move_input(0.0, 1.0);
        character.tick(&world, DT);
    }

    let before = character.body.velocity();
    character.jump_pressed();

    let after = character.body.velocity();
    assert_eq!(after.z, 1000.0);
    // Straight ahead costs no speed
    assert!((after.x - before.x.hypot(before.y)).abs() < 1.0);
    assert!(!character.locomotion.state().can_double_jump);
    assert_eq!(count(&character, |e| matches!(e, LocomotionEvent::DoubleJump { .. })), 1);

    // A second press in the same flight does nothing
    character.jump_pressed();
    assert_eq!(character.body.velocity(), after);

    character.jump_released(&world);
    tick_until_landed(&mut character, &world, 600);

    assert!(character.locomotion.state().can_double_jump);
    assert_eq!(count(&character, |e| matches!(e, LocomotionEvent::Landed)), 2);
}

#[test]
fn wall_run_then_wall_jump() {
    let mut world = CollisionWorld::new();
    // Long wall along Y with its near face at x=80
    world.add_box(
        Vec3::new(130.0, 0.0, 200.0),
        Vec3::new(50.0, 1000.0, 200.0),
        ContentFlags::SOLID,
    );

    let mut character = character_at(Vec3::new(0.0, 0.0, 300.0));
    character.face(FRAC_PI_2);
    character.body.set_velocity(Vec3::new(0.0, 400.0, 0.0));

    // No input recorded yet, so the double jump is not spent
    character.jump_pressed();
    assert!(character.locomotion.state().can_double_jump);

    for _ in 0..10 {
        character.tick(&world, DT);
    }

    let state = character.locomotion.state();
    assert!(state.is_wall_running);
    assert!(state.wall_run_elapsed_time > 0.0);
    assert!(events(&character).contains(&LocomotionEvent::WallRunStarted {
        side: WallSide::Left,
    }));

    let position = character.body.position();
    assert!(position.x > 0.0 && position.x < 30.5, "eased toward standoff: {position:?}");
    assert!(position.y > 50.0, "ran along the wall: {position:?}");
    assert!((character.body.velocity().y - 400.0).abs() < 1.0);

    character.jump_released(&world);

    let velocity = character.body.velocity();
    assert!(velocity.x < -500.0, "pushed off the wall: {velocity:?}");
    assert_eq!(velocity.z, 800.0);
    assert!(!character.locomotion.state().is_wall_running);
    assert!(events(&character).contains(&LocomotionEvent::WallRunEnded {
        reason: WallRunEndReason::JumpReleased,
    }));
    assert!(events(&character).contains(&LocomotionEvent::WallJump {
        side: WallSide::Left,
    }));
}

#[test]
fn wall_run_ends_when_wall_runs_out() {
    let mut world = CollisionWorld::new();
    // Short wall ending at y=100
    world.add_box(
        Vec3::new(130.0, 0.0, 200.0),
        Vec3::new(50.0, 100.0, 200.0),
        ContentFlags::SOLID,
    );

    let mut character = character_at(Vec3::new(0.0, 0.0, 300.0));
    character.face(FRAC_PI_2);
    character.body.set_velocity(Vec3::new(0.0, 600.0, 0.0));
    character.jump_pressed();

    for _ in 0..30 {
        character.tick(&world, DT);
    }

    assert!(!character.locomotion.state().is_wall_running);
    assert!(events(&character).contains(&LocomotionEvent::WallRunEnded {
        reason: WallRunEndReason::LostWall,
    }));
}
