use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::playfield::Rect;
use crate::resources::GameRng;

/// Side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// X direction pointing away from this side's wall into the court
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// What drives a paddle this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleCommand {
    /// Analog axis in [-1, 1], down minus up
    Axis(f32),
    /// Velocity chosen by a controller (AI)
    Velocity(Vec2),
}

impl Default for PaddleCommand {
    fn default() -> Self {
        PaddleCommand::Axis(0.0)
    }
}

/// Paddle component - a vertical actuator kept inside the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // center
    pub size: Vec2,
    pub vel: Vec2,
    pub speed: f32, // full-deflection speed for axis input
    pub human: bool,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32, human: bool) -> Self {
        Self {
            side,
            pos,
            size,
            vel: Vec2::ZERO,
            speed,
            human,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y * 0.5
    }

    /// Bounding rectangle centered on the paddle position
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }

    /// Apply a command, integrate, then clamp into the playfield.
    /// Returns the new position.
    pub fn update(&mut self, dt: f32, command: PaddleCommand, playfield: &Rect) -> Vec2 {
        self.vel = match command {
            PaddleCommand::Axis(axis) => {
                let axis = if axis.is_finite() { axis.clamp(-1.0, 1.0) } else { 0.0 };
                Vec2::new(0.0, axis * self.speed)
            }
            PaddleCommand::Velocity(vel) if vel.is_finite() => vel,
            PaddleCommand::Velocity(_) => Vec2::ZERO,
        };

        self.pos += self.vel * dt;
        self.pos.y = playfield.clamp_center_y(self.pos.y, self.half_height());
        self.pos
    }

    /// Put the paddle back at a resting position and stop it
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

/// Movement intent for paddle, filled by input or AI before movement runs
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub command: PaddleCommand,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Set between a point and the next serve; freezes the ball
    pub scored: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            scored: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Recenter and launch within a narrow cone toward the requested side
    pub fn reset(&mut self, center: Vec2, kick_to_right: bool, speed: f32, rng: &mut GameRng) {
        self.scored = false;
        self.pos = center;

        let angle: f32 = rng.0.gen_range(-Params::SERVE_CONE..=Params::SERVE_CONE);
        let dir_x = if kick_to_right { 1.0 } else { -1.0 };
        self.vel = Vec2::new(angle.cos() * dir_x, angle.sin()).normalize() * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playfield() -> Rect {
        Rect::playfield(Vec2::new(800.0, 600.0)).unwrap()
    }

    fn paddle(human: bool) -> Paddle {
        Paddle::new(
            Side::Left,
            Vec2::new(40.0, 300.0),
            Vec2::new(16.0, 100.0),
            400.0,
            human,
        )
    }

    #[test]
    fn test_side_opposite_and_sign() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.sign(), 1.0);
        assert_eq!(Side::Right.sign(), -1.0);
        assert_eq!(Side::Right.as_str(), "right");
    }

    #[test]
    fn test_axis_moves_paddle_down() {
        let mut p = paddle(true);
        let pos = p.update(0.1, PaddleCommand::Axis(1.0), &playfield());
        assert_eq!(p.vel, Vec2::new(0.0, 400.0));
        assert!((pos.y - 340.0).abs() < 1e-4, "Expected 340, got {}", pos.y);
    }

    #[test]
    fn test_axis_is_clamped_to_unit_range() {
        let mut p = paddle(true);
        p.update(0.1, PaddleCommand::Axis(-3.0), &playfield());
        assert_eq!(p.vel.y, -400.0, "Axis beyond -1 should act as -1");
    }

    #[test]
    fn test_velocity_command_assigned_directly() {
        let mut p = paddle(false);
        p.update(0.5, PaddleCommand::Velocity(Vec2::new(0.0, -220.0)), &playfield());
        assert_eq!(p.vel, Vec2::new(0.0, -220.0));
        assert!((p.pos.y - 190.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_clamped_to_top_and_bottom() {
        let field = playfield();
        let mut p = paddle(true);
        p.update(10.0, PaddleCommand::Axis(-1.0), &field);
        assert_eq!(p.pos.y, 50.0, "Paddle top edge should rest on the top wall");
        p.update(10.0, PaddleCommand::Axis(1.0), &field);
        assert_eq!(p.pos.y, 550.0, "Paddle bottom edge should rest on the bottom wall");
    }

    #[test]
    fn test_nan_command_stops_paddle() {
        let mut p = paddle(false);
        p.update(0.1, PaddleCommand::Velocity(Vec2::new(0.0, f32::NAN)), &playfield());
        assert_eq!(p.pos, Vec2::new(40.0, 300.0));
    }

    #[test]
    fn test_paddle_rect() {
        let rect = paddle(true).rect();
        assert_eq!(rect.min, Vec2::new(32.0, 250.0));
        assert_eq!(rect.max, Vec2::new(48.0, 350.0));
    }

    #[test]
    fn test_ball_reset_directions() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0);
        ball.scored = true;

        ball.reset(Vec2::new(400.0, 300.0), true, 350.0, &mut rng);
        assert!(!ball.scored, "Reset should clear the scored flag");
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert!(ball.vel.x > 0.0);
        assert!((ball.speed() - 350.0).abs() < 0.01);

        ball.reset(Vec2::new(400.0, 300.0), false, 350.0, &mut rng);
        assert!(ball.vel.x < 0.0);
        assert!((ball.speed() - 350.0).abs() < 0.01);
    }

    #[test]
    fn test_ball_reset_stays_in_serve_cone() {
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0);
        for _ in 0..200 {
            ball.reset(Vec2::ZERO, true, 350.0, &mut rng);
            let angle = ball.vel.y.atan2(ball.vel.x);
            assert!(angle.abs() <= Params::SERVE_CONE + 1e-5);
        }
    }
}
