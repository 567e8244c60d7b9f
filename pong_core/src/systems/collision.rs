use crate::{Ball, Config, Events, GameEvent, HitSurface, Paddle, Rect, Side};
use glam::Vec2;
use hecs::World;

/// Outgoing ball velocity after striking a paddle.
///
/// The angle depends only on where the ball met the paddle: center gives a
/// flat return, the tips give `max_bounce_angle`. Speed grows by
/// `speed_increase` on every paddle hit.
pub fn bounce_velocity(
    ball_pos: Vec2,
    ball_vel: Vec2,
    paddle: &Paddle,
    max_bounce_angle: f32,
    speed_increase: f32,
) -> Vec2 {
    let half_height = paddle.half_height();
    let relative_y = if half_height > 0.0 {
        ((ball_pos.y - paddle.pos.y) / half_height).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let angle = relative_y * max_bounce_angle;
    let dir = Vec2::new(angle.cos() * paddle.side.sign(), angle.sin()).normalize();
    dir * (ball_vel.length() + speed_increase)
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, playfield: &Rect, config: &Config, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    let max_bounce_angle = config.max_bounce_angle();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.scored {
            continue;
        }

        // Top/bottom walls
        if ball.pos.y - ball.radius <= playfield.top() {
            ball.pos.y = playfield.top() + ball.radius;
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::Hit(HitSurface::Wall));
        } else if ball.pos.y + ball.radius >= playfield.bottom() {
            ball.pos.y = playfield.bottom() - ball.radius;
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::Hit(HitSurface::Wall));
        }

        for paddle in &paddles {
            let rect = paddle.rect();
            if !rect.intersects_circle(ball.pos, ball.radius) {
                continue;
            }

            // Sit the ball flush against the face pointing into the court
            ball.pos.x = match paddle.side {
                Side::Left => rect.right() + ball.radius,
                Side::Right => rect.left() - ball.radius,
            };
            ball.vel = bounce_velocity(
                ball.pos,
                ball.vel,
                paddle,
                max_bounce_angle,
                config.ball_speed_increase,
            );
            events.push(GameEvent::Hit(HitSurface::Paddle(paddle.side)));
        }
    }
}
