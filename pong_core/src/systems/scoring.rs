use crate::{Ball, Events, GameEvent, Rect, Side};
use hecs::World;

/// Check if ball left the court past a paddle.
///
/// Leaving on the left is a point for the right side and vice versa. The
/// ball is frozen with `scored` set until the next serve, so a point is
/// registered at most once.
pub fn check_scoring(world: &mut World, playfield: &Rect, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.scored {
            continue;
        }

        let scorer = if ball.pos.x < playfield.left() - ball.radius {
            Side::Right
        } else if ball.pos.x > playfield.right() + ball.radius {
            Side::Left
        } else {
            continue;
        };

        ball.scored = true;
        ball.vel = glam::Vec2::ZERO;
        events.push(GameEvent::Scored { scorer });
    }
}
