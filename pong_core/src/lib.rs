//! Deterministic Pong simulation core.
//!
//! Paddles and the ball live in a `hecs::World`; systems advance them one
//! fixed step at a time and report what happened through [`Events`].
//! [`Game`] owns all of it and runs the serve/score flow on top.

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod playfield;
pub mod presenter;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::{CoreError, Result};
pub use game::*;
pub use params::*;
pub use playfield::*;
pub use presenter::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one simulation step: input and AI drive the paddles, then the ball
/// moves, bounces and possibly scores.
pub fn step(
    world: &mut World,
    time: &Time,
    playfield: &Rect,
    config: &Config,
    input: &TickInput,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Ingest inputs (apply to human paddle intents)
    ingest_inputs(world, input);

    // 2. AI picks velocities for its paddles
    drive_ai_paddles(world, config, rng);

    // 3. Move paddles based on intents
    move_paddles(world, time, playfield);

    // 4. Move ball
    move_ball(world, time);

    // 5. Check collisions (ball vs walls, paddles)
    check_collisions(world, playfield, config, events);

    // 6. Check scoring (ball exited court)
    check_scoring(world, playfield, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    pos: Vec2,
    size: Vec2,
    speed: f32,
    human: bool,
) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, pos, size, speed, human),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
