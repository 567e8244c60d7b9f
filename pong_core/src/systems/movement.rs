use crate::{Ball, Paddle, PaddleIntent, Rect, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, playfield: &Rect) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.update(time.dt, intent.command, playfield);
    }
}

/// Move ball based on velocity; a scored ball stays frozen until served
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.scored {
            continue;
        }
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, PaddleCommand, Side};
    use glam::Vec2;

    fn playfield() -> Rect {
        Rect::playfield(Vec2::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(100.0, -50.0), 8.0);

        move_ball(&mut world, &Time::new(0.5, 0.0));

        let pos = world.get::<&Ball>(ball).unwrap().pos;
        assert_eq!(pos, Vec2::new(450.0, 275.0));
    }

    #[test]
    fn test_scored_ball_does_not_move() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(-20.0, 300.0), Vec2::new(-350.0, 0.0), 8.0);
        world.get::<&mut Ball>(entity).unwrap().scored = true;

        move_ball(&mut world, &Time::new(0.1, 0.0));

        assert_eq!(world.get::<&Ball>(entity).unwrap().pos, Vec2::new(-20.0, 300.0));
    }

    #[test]
    fn test_move_paddles_applies_intent_and_clamps() {
        let mut world = World::new();
        let entity = create_paddle(
            &mut world,
            Side::Left,
            Vec2::new(40.0, 300.0),
            Vec2::new(16.0, 100.0),
            400.0,
            true,
        );
        world.get::<&mut PaddleIntent>(entity).unwrap().command = PaddleCommand::Axis(1.0);

        let field = playfield();
        for _ in 0..100 {
            move_paddles(&mut world, &Time::new(0.1, 0.0), &field);
        }

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.pos.y, 550.0, "Paddle should stop at the bottom wall");
        assert_eq!(paddle.pos.x, 40.0, "Paddle never moves horizontally");
    }
}
