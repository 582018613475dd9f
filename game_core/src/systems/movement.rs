use crate::{Ball, Field, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, field: &Field) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.move_within(intent.dir, field);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, Paddle::spawn(Side::Left, &config));
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = -1;

        move_paddles(&mut world, &config.field());

        assert_eq!(world.get::<&Paddle>(entity).unwrap().y, 145.0);
    }

    #[test]
    fn test_paddle_held_at_bottom_edge() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Right, Paddle::spawn(Side::Right, &config));
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        for _ in 0..100 {
            move_paddles(&mut world, &config.field());
        }

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, config.field_height - config.paddle_height);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        let entity = create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 200.0), Vec2::new(-5.0, 2.5), 5.0, 5.0),
        );

        move_ball(&mut world);
        move_ball(&mut world);

        assert_eq!(world.get::<&Ball>(entity).unwrap().pos, Vec2::new(290.0, 205.0));
    }
}
