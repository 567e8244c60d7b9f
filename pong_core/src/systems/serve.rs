use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, GameRng, Paddle, Rect};

/// Countdown between a point and the next serve
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeTimer {
    remaining: Option<f32>,
}

impl ServeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the countdown, replacing any countdown in progress
    pub fn start(&mut self, delay: f32) {
        self.remaining = Some(delay.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Advance the countdown. Returns true exactly once, on the tick it expires.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - dt.max(0.0);
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }
}

/// Move paddles back to their resting spots
pub fn reset_paddles(world: &mut World, playfield: &Rect, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.place(config.paddle_rest(paddle.side, playfield));
    }
}

/// Keep paddles anchored to their side after the playfield changes
pub fn anchor_paddles(world: &mut World, playfield: &Rect, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.x = config.paddle_x(paddle.side, playfield);
        paddle.pos.y = playfield.clamp_center_y(paddle.pos.y, paddle.half_height());
    }
}

/// Hold a scored ball at rest in the middle of the court until the next serve
pub fn park_ball(world: &mut World, playfield: &Rect) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.scored {
            ball.pos = playfield.center();
            ball.vel = Vec2::ZERO;
        }
    }
}

/// Pull a live ball back inside a playfield that shrank around it.
/// A parked ball follows the new center instead.
pub fn contain_ball(world: &mut World, playfield: &Rect) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.scored {
            ball.pos = playfield.center();
            continue;
        }
        let inset = Vec2::splat(ball.radius).min(playfield.size() * 0.5);
        ball.pos = ball.pos.clamp(playfield.min + inset, playfield.max - inset);
    }
}

/// Launch the ball from the center of the playfield
pub fn serve_ball(
    world: &mut World,
    playfield: &Rect,
    config: &Config,
    kick_to_right: bool,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(
            playfield.center(),
            kick_to_right,
            config.ball_speed_initial,
            rng,
        );
    }
}
