use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSurface {
    Wall,
    Paddle(Side),
}

/// Notifications produced by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Hit(HitSurface),
    /// The ball left the court past the opposite side's paddle
    Scored { scorer: Side },
}

/// Events that occurred during this frame, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.queue.iter()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.queue.drain(..)
    }

    pub fn hit_count(&self, surface: HitSurface) -> usize {
        self.queue
            .iter()
            .filter(|e| **e == GameEvent::Hit(surface))
            .count()
    }

    /// Scorer of the first point registered this frame, if any
    pub fn scored(&self) -> Option<Side> {
        self.queue.iter().find_map(|e| match e {
            GameEvent::Scored { scorer } => Some(*scorer),
            _ => None,
        })
    }
}

/// Host input for one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Axis for the left paddle in [-1, 1] (down minus up); ignored if AI-driven
    pub left_axis: f32,
    /// Axis for the right paddle in [-1, 1]; ignored if AI-driven
    pub right_axis: f32,
    /// Restart pressed this tick (edge, not level)
    pub restart: bool,
    /// Current viewport size; zero while the host does not know it yet
    pub viewport: Vec2,
}

impl TickInput {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn axis(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_axis,
            Side::Right => self.right_axis,
        }
    }
}
