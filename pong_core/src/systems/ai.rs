use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::*;
use crate::config::Config;
use crate::resources::GameRng;

/// Knobs for the rule-based opponent
#[derive(Debug, Clone, Copy)]
pub struct AiTuning {
    /// Vertical distance treated as "already aligned"
    pub deadzone: f32,
    /// Maximum relative speed wobble, drawn from [-jitter, jitter]
    pub jitter: f32,
}

impl AiTuning {
    pub fn from_config(config: &Config) -> Self {
        Self {
            deadzone: config.ai_deadzone,
            jitter: config.ai_jitter,
        }
    }
}

/// Choose a paddle velocity that chases the ball vertically.
///
/// Returns zero inside the deadzone and when the reaction roll misses
/// (a roll in 0..100 at or above `reaction_chance`). Otherwise moves
/// toward the ball at `speed`, scaled by a random jitter.
pub fn decide(
    ball_pos: Vec2,
    paddle_pos: Vec2,
    reaction_chance: f32,
    speed: f32,
    tuning: &AiTuning,
    rng: &mut GameRng,
) -> Vec2 {
    let diff = ball_pos.y - paddle_pos.y;
    if !diff.is_finite() || diff.abs() <= tuning.deadzone {
        return Vec2::ZERO;
    }

    let roll = rng.0.gen_range(0u32..100) as f32;
    if roll >= reaction_chance {
        return Vec2::ZERO;
    }

    let jitter = if tuning.jitter.is_finite() && tuning.jitter > 0.0 {
        rng.0.gen_range(-tuning.jitter..=tuning.jitter)
    } else {
        0.0
    };
    Vec2::new(0.0, diff.signum() * speed * (1.0 + jitter))
}

/// Set velocity intents for every AI paddle from the current ball position
pub fn drive_ai_paddles(world: &mut World, config: &Config, rng: &mut GameRng) {
    let ball_pos = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos);

    let tuning = AiTuning::from_config(config);
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.human {
            continue;
        }
        let vel = match ball_pos {
            Some(ball_pos) => decide(
                ball_pos,
                paddle.pos,
                config.ai_reaction_chance,
                config.ai_speed,
                &tuning,
                rng,
            ),
            None => Vec2::ZERO,
        };
        intent.command = PaddleCommand::Velocity(vel);
    }
}
