//! Gridstep headless demo entry point.
//!
//! A grid-snapped character controller core built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for vector math
//!
//! This executable runs the full intent pipeline without a host engine: it
//! loads configuration, scatters wall colliders on random grid cells, spawns
//! one actor, and drives a seeded random key script through the input
//! translator for a fixed number of ticks, logging the actor's grid position
//! and heading.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, heading, cooldown, movers)
//! - [`events`] – intent events and blocked-movement messages
//! - [`grid`] – pure grid/cardinal math
//! - [`resources`] – ECS resources (config, input state, physics, time)
//! - [`systems`] – ECS systems and intent handlers (input, movement, spawn, time)
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 120 --seed 7
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

use gridstep::components::cooldown::Cooldown;
use gridstep::components::gridmover::GridMover;
use gridstep::components::heading::Heading;
use gridstep::components::playermover::PlayerMover;
use gridstep::components::worldposition::WorldPosition;
use gridstep::events::blocked::{MoveBlocked, update_blocked_messages};
use gridstep::events::hub;
use gridstep::grid;
use gridstep::resources::config::GridConfig;
use gridstep::resources::input::{InputState, KeyCode};
use gridstep::resources::physics::{MASK_ALL, PhysicsWorld, StaticColliders};
use gridstep::resources::worldtime::WorldTime;
use gridstep::systems::cooldown::tick_cooldowns;
use gridstep::systems::input::translate_input;
use gridstep::systems::movement::{grid_move_handler, grid_rotate_handler};
use gridstep::systems::player::{player_move_handler, player_rotate_handler};
use gridstep::systems::spawn::snap_spawned_movers;
use gridstep::systems::time::update_world_time;

/// Fixed simulation step in seconds.
const TICK_SECONDS: f32 = 1.0 / 60.0;

/// Gridstep headless demo
#[derive(Parser)]
#[command(version, about = "Grid-snapped character controller demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for the obstacle scatter and the key script.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of wall cells to scatter around the origin.
    #[arg(long, default_value_t = 12)]
    walls: u32,

    /// Drive the coarse full-cell controller instead of the fine stepper.
    #[arg(long)]
    coarse: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Missing config file falls back to defaults; a present-but-invalid one
    // is a hard error.
    let mut config = GridConfig::with_path(&cli.config);
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            log::error!("Bad configuration {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    } else {
        log::info!(
            "No config file at {}, using defaults",
            cli.config.display()
        );
    }

    fastrand::seed(cli.seed);

    // --------------- Obstacles ---------------
    let mut colliders = StaticColliders::new();
    let mut occupied: FxHashSet<(i32, i32)> = FxHashSet::default();
    occupied.insert((0, 0)); // keep the spawn cell clear
    while (colliders.len() as u32) < cli.walls {
        let cell = (fastrand::i32(-6..=6), fastrand::i32(-6..=6));
        if occupied.insert(cell) {
            colliders.block_cell(cell.0, cell.1, config.cell_size, MASK_ALL);
        }
    }
    log::info!("Scattered {} wall cells (seed {})", colliders.len(), cli.seed);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(PhysicsWorld::new(colliders));
    world.insert_resource(
        InputState::with_bindings(&config.bindings).with_cooldown(config.input_cooldown),
    );
    world.init_resource::<Messages<MoveBlocked>>();

    let actor = if cli.coarse {
        world
            .spawn((
                WorldPosition::new(0.3, 0.0, -0.4), // snapped on first tick
                Heading::new(12.0),
                PlayerMover::new(config.cell_size).with_probe_height(config.probe_height),
            ))
            .id()
    } else {
        world
            .spawn((
                WorldPosition::new(0.3, 0.0, -0.4), // snapped on first tick
                Heading::new(12.0),
                GridMover::new(config.cell_size),
                Cooldown::new(config.move_cooldown),
            ))
            .id()
    };

    world.insert_resource(config);

    if cli.coarse {
        hub::subscribe(&mut world, player_move_handler);
        hub::subscribe(&mut world, player_rotate_handler);
    } else {
        hub::subscribe(&mut world, grid_move_handler);
        hub::subscribe(&mut world, grid_rotate_handler);
    }

    let mut update = Schedule::default();
    update.add_systems(snap_spawned_movers);
    update.add_systems(translate_input.after(snap_spawned_movers));
    update.add_systems(tick_cooldowns.after(translate_input));
    update.add_systems(update_blocked_messages.after(translate_input));

    // --------------- Main loop ---------------
    let script = [
        KeyCode::W,
        KeyCode::W,
        KeyCode::E,
        KeyCode::W,
        KeyCode::Q,
        KeyCode::A,
        KeyCode::D,
        KeyCode::S,
    ];
    for tick in 0..cli.ticks {
        update_world_time(&mut world, TICK_SECONDS);

        {
            let mut input = world.resource_mut::<InputState>();
            input.begin_frame();
            // Tap a scripted or random key every few ticks; the translator
            // and the actor cooldown decide what gets through.
            if tick % 5 == 0 {
                let key = if fastrand::bool() {
                    script[fastrand::usize(..script.len())]
                } else {
                    script[(tick as usize / 5) % script.len()]
                };
                input.key_down(key);
            } else if tick % 5 == 1 {
                for key in script {
                    input.key_up(key);
                }
            }
        }

        update.run(&mut world);
        world.clear_trackers();

        if tick % 30 == 0 {
            let position = world.get::<WorldPosition>(actor).expect("actor exists");
            let heading = world.get::<Heading>(actor).expect("actor exists");
            let cell_size = world.resource::<GridConfig>().cell_size;
            let (ix, iz) = grid::world_to_grid(position.pos, cell_size);
            log::info!(
                "tick {:4}: cell ({:3}, {:3}) facing {}",
                tick,
                ix,
                iz,
                ["north", "east", "south", "west"][heading.cardinal_index()]
            );
        }
    }
}
