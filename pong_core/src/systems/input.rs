use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn host input into paddle intents for human-controlled paddles
pub fn ingest_inputs(world: &mut World, input: &TickInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.human {
            intent.command = PaddleCommand::Axis(input.axis(paddle.side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;
    use glam::Vec2;

    #[test]
    fn test_human_paddle_receives_its_axis() {
        let mut world = World::new();
        let size = Vec2::new(16.0, 100.0);
        let left = create_paddle(&mut world, Side::Left, Vec2::new(40.0, 300.0), size, 400.0, true);
        let right =
            create_paddle(&mut world, Side::Right, Vec2::new(760.0, 300.0), size, 400.0, true);

        let input = TickInput {
            left_axis: -1.0,
            right_axis: 0.25,
            ..TickInput::default()
        };
        ingest_inputs(&mut world, &input);

        let left_intent = *world.get::<&PaddleIntent>(left).unwrap();
        let right_intent = *world.get::<&PaddleIntent>(right).unwrap();
        assert_eq!(left_intent.command, PaddleCommand::Axis(-1.0));
        assert_eq!(right_intent.command, PaddleCommand::Axis(0.25));
    }

    #[test]
    fn test_ai_paddle_ignores_host_axis() {
        let mut world = World::new();
        let ai = create_paddle(
            &mut world,
            Side::Right,
            Vec2::new(760.0, 300.0),
            Vec2::new(16.0, 100.0),
            400.0,
            false,
        );
        world
            .insert_one(
                ai,
                PaddleIntent {
                    command: PaddleCommand::Velocity(Vec2::new(0.0, 220.0)),
                },
            )
            .unwrap();

        let input = TickInput {
            right_axis: -1.0,
            ..TickInput::default()
        };
        ingest_inputs(&mut world, &input);

        let intent = *world.get::<&PaddleIntent>(ai).unwrap();
        assert_eq!(intent.command, PaddleCommand::Velocity(Vec2::new(0.0, 220.0)));
    }
}
