//! Integration tests for grid movement: cooldown gating, per-axis
//! obstruction, rotation, and spawn alignment.

use bevy_ecs::prelude::*;
use glam::Vec3;

use gridstep::components::cooldown::Cooldown;
use gridstep::components::gridmover::GridMover;
use gridstep::components::heading::Heading;
use gridstep::components::playermover::PlayerMover;
use gridstep::components::worldposition::WorldPosition;
use gridstep::events::blocked::MoveBlocked;
use gridstep::events::hub;
use gridstep::events::intent::{MoveIntent, RotateIntent};
use gridstep::resources::physics::{MASK_ALL, PhysicsWorld, StaticColliders};
use gridstep::resources::worldtime::WorldTime;
use gridstep::systems::cooldown::tick_cooldowns;
use gridstep::systems::movement::{grid_move_handler, grid_rotate_handler};
use gridstep::systems::player::{player_move_handler, player_rotate_handler, try_move};
use gridstep::systems::spawn::snap_spawned_movers;
use gridstep::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;
const CELL: f32 = 2.0;
const COOLDOWN: f32 = 1.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn make_world(colliders: StaticColliders) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PhysicsWorld::new(colliders));
    world.init_resource::<Messages<MoveBlocked>>();
    hub::subscribe(&mut world, grid_move_handler);
    hub::subscribe(&mut world, grid_rotate_handler);
    world
}

fn spawn_grid_mover(world: &mut World) -> Entity {
    world
        .spawn((
            WorldPosition::new(0.0, 0.0, 0.0),
            Heading::new(0.0),
            GridMover::new(CELL),
            Cooldown::new(COOLDOWN),
        ))
        .id()
}

/// Advance simulation time and run the cooldown system.
fn elapse(world: &mut World, seconds: f32) {
    update_world_time(world, seconds);
    let mut schedule = Schedule::default();
    schedule.add_systems(tick_cooldowns);
    schedule.run(world);
}

fn pos(world: &World, entity: Entity) -> Vec3 {
    world.get::<WorldPosition>(entity).unwrap().pos
}

fn drain_blocked(world: &mut World) -> Vec<MoveBlocked> {
    world
        .resource_mut::<Messages<MoveBlocked>>()
        .drain()
        .collect()
}

#[test]
fn move_forward_translates_one_cell_north() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::forward());

    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, CELL)));
    let heading = world.get::<Heading>(actor).unwrap();
    assert!(approx_eq(heading.degrees, 0.0));
}

#[test]
fn rotate_then_move_follows_new_forward() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, RotateIntent::right());
    assert!(approx_eq(world.get::<Heading>(actor).unwrap().degrees, 90.0));

    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, MoveIntent::forward());

    // Facing east now: forward is world +X.
    assert!(approx_vec(pos(&world, actor), Vec3::new(CELL, 0.0, 0.0)));
}

#[test]
fn rotate_left_subtracts_quarter_turn() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, RotateIntent::left());

    let heading = world.get::<Heading>(actor).unwrap();
    assert!(approx_eq(heading.degrees, -90.0));
    assert_eq!(heading.cardinal_index(), 3);
}

#[test]
fn blocked_forward_still_strafes() {
    // The whole row one cell north is walled; the intent asks for forward +
    // strafe right. Only the strafe axis can commit.
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, MASK_ALL);
    colliders.block_cell(1, 1, CELL, MASK_ALL);
    let mut world = make_world(colliders);
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::new(1.0, 1.0));

    assert!(approx_vec(pos(&world, actor), Vec3::new(CELL, 0.0, 0.0)));
}

#[test]
fn diagonal_cannot_cut_into_walled_cell() {
    // Only the diagonal target cell (1, 1) is walled. The strafe axis
    // commits first; the forward probe then runs from the strafed position
    // and must see the wall, so the actor never ends up inside it.
    let mut colliders = StaticColliders::new();
    colliders.block_cell(1, 1, CELL, MASK_ALL);
    let mut world = make_world(colliders);
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::new(1.0, 1.0));

    assert!(approx_vec(pos(&world, actor), Vec3::new(CELL, 0.0, 0.0)));
    let blocked = drain_blocked(&mut world);
    assert_eq!(blocked.len(), 1);
    assert!(approx_vec(blocked[0].direction, Vec3::Z));
}

#[test]
fn fully_blocked_move_stays_put_and_reports() {
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, MASK_ALL);
    colliders.block_cell(1, 0, CELL, MASK_ALL);
    let mut world = make_world(colliders);
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::new(1.0, 1.0));

    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));
    let blocked = drain_blocked(&mut world);
    assert_eq!(blocked.len(), 2);
    assert!(blocked.iter().all(|b| b.entity == actor));
}

#[test]
fn blocked_move_still_consumes_cooldown() {
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, MASK_ALL);
    let mut world = make_world(colliders);
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::forward());
    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));

    // A follow-up intent on a clear axis is dropped: the window is armed.
    hub::publish(&mut world, MoveIntent::strafe_right());
    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));

    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, MoveIntent::strafe_right());
    assert!(approx_vec(pos(&world, actor), Vec3::new(CELL, 0.0, 0.0)));
}

#[test]
fn intent_within_cooldown_is_dropped_not_queued() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::forward());
    elapse(&mut world, COOLDOWN * 0.5);
    hub::publish(&mut world, MoveIntent::forward());

    // Second intent fell inside the window: exactly one cell moved, and the
    // dropped intent is not replayed once the window elapses.
    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, CELL)));
    elapse(&mut world, COOLDOWN);
    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, CELL)));
}

#[test]
fn intent_after_cooldown_is_accepted() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::forward());
    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, MoveIntent::forward());

    assert!(approx_vec(
        pos(&world, actor),
        Vec3::new(0.0, 0.0, 2.0 * CELL)
    ));
}

#[test]
fn zero_turn_rotate_still_consumes_cooldown() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, RotateIntent::new(0.0));
    assert!(approx_eq(world.get::<Heading>(actor).unwrap().degrees, 0.0));

    hub::publish(&mut world, MoveIntent::forward());
    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));
}

#[test]
fn backward_and_strafe_left_use_negative_axes() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    hub::publish(&mut world, MoveIntent::backward());
    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, -CELL)));

    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, MoveIntent::strafe_left());
    assert!(approx_vec(pos(&world, actor), Vec3::new(-CELL, 0.0, -CELL)));
}

#[test]
fn facing_south_keeps_positions_on_lattice() {
    let mut world = make_world(StaticColliders::new());
    let actor = spawn_grid_mover(&mut world);

    // Two right turns: facing south (180°). Rotation trig is inexact there;
    // committed positions must still be exact lattice points.
    hub::publish(&mut world, RotateIntent::right());
    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, RotateIntent::right());
    elapse(&mut world, COOLDOWN);
    hub::publish(&mut world, MoveIntent::forward());

    let p = pos(&world, actor);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.z, -CELL);
}

#[test]
fn publish_without_listeners_is_noop() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PhysicsWorld::new(StaticColliders::new()));
    let actor = world
        .spawn((
            WorldPosition::new(0.0, 0.0, 0.0),
            Heading::new(0.0),
            GridMover::new(CELL),
            Cooldown::new(COOLDOWN),
        ))
        .id();

    // Nobody subscribed: fan-out is silently empty.
    hub::publish(&mut world, MoveIntent::forward());
    hub::publish(&mut world, RotateIntent::right());

    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));
    assert!(approx_eq(world.get::<Heading>(actor).unwrap().degrees, 0.0));
}

#[test]
fn spawn_snaps_position_and_heading() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    let actor = world
        .spawn((
            WorldPosition::new(2.3, 0.5, -1.8),
            Heading::new(84.0),
            GridMover::new(CELL),
            Cooldown::new(COOLDOWN),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(snap_spawned_movers);
    schedule.run(&mut world);

    assert!(approx_vec(pos(&world, actor), Vec3::new(2.0, 0.5, -2.0)));
    assert!(approx_eq(world.get::<Heading>(actor).unwrap().degrees, 90.0));

    // Running again without new movers changes nothing.
    world.clear_trackers();
    world.get_mut::<WorldPosition>(actor).unwrap().pos.x = 2.4;
    schedule.run(&mut world);
    assert!(approx_eq(pos(&world, actor).x, 2.4));
}

// ---------------------------------------------------------------------------
// Coarse controller
// ---------------------------------------------------------------------------

fn make_player_world(colliders: StaticColliders) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PhysicsWorld::new(colliders));
    world.init_resource::<Messages<MoveBlocked>>();
    hub::subscribe(&mut world, player_move_handler);
    hub::subscribe(&mut world, player_rotate_handler);
    world
}

fn spawn_player(world: &mut World) -> Entity {
    world
        .spawn((
            WorldPosition::new(0.0, 0.0, 0.0),
            Heading::new(0.0),
            PlayerMover::new(CELL),
        ))
        .id()
}

#[test]
fn player_moves_full_cell_when_clear() {
    let mut world = make_player_world(StaticColliders::new());
    let actor = spawn_player(&mut world);

    hub::publish(&mut world, MoveIntent::forward());
    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, CELL)));
}

#[test]
fn player_blocked_by_wall_in_target_cell() {
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, MASK_ALL);
    let mut world = make_player_world(colliders);
    let actor = spawn_player(&mut world);

    hub::publish(&mut world, MoveIntent::forward());

    assert!(approx_vec(pos(&world, actor), Vec3::ZERO));
    assert_eq!(drain_blocked(&mut world).len(), 1);
}

#[test]
fn player_mask_ignores_other_layers() {
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, 0b0010);
    let mut world = make_player_world(colliders);
    let actor = world
        .spawn((
            WorldPosition::new(0.0, 0.0, 0.0),
            Heading::new(0.0),
            PlayerMover::new(CELL).with_mask(0b0001),
        ))
        .id();

    // The wall lives on a layer the player does not collide with.
    hub::publish(&mut world, MoveIntent::forward());
    assert!(approx_vec(pos(&world, actor), Vec3::new(0.0, 0.0, CELL)));
}

#[test]
fn player_rotate_adds_angle_directly() {
    let mut world = make_player_world(StaticColliders::new());
    let actor = spawn_player(&mut world);

    hub::publish(&mut world, RotateIntent::right());
    hub::publish(&mut world, RotateIntent::right());
    hub::publish(&mut world, RotateIntent::left());

    // No cooldown on the coarse variant: all three turns apply.
    assert!(approx_eq(world.get::<Heading>(actor).unwrap().degrees, 90.0));
}

#[test]
fn try_move_reports_commit() {
    let mut colliders = StaticColliders::new();
    colliders.block_cell(0, 1, CELL, MASK_ALL);
    let physics = PhysicsWorld::new(colliders);
    let mut position = WorldPosition::new(0.0, 0.0, 0.0);
    let heading = Heading::new(0.0);
    let mover = PlayerMover::new(CELL);

    assert!(!try_move(&mut position, &heading, &mover, &physics, Vec3::Z));
    assert!(approx_vec(position.pos, Vec3::ZERO));

    assert!(try_move(&mut position, &heading, &mover, &physics, Vec3::X));
    assert!(approx_vec(position.pos, Vec3::new(CELL, 0.0, 0.0)));
}
