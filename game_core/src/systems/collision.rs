use crate::{Ball, Events, Field, Paddle, Side};
use hecs::World;
use tracing::debug;

/// Vertical exit speed after a paddle hit.
///
/// Linear in the distance from the paddle centre: a centre hit leaves flat,
/// a hit on either end leaves at `max_speed`.
pub fn rebound_velocity(paddle: &Paddle, ball: &Ball) -> f32 {
    let half_height = paddle.height() / 2.0;
    let displacement = ball.pos.y - (paddle.y + half_height);
    let reduction = half_height / ball.max_speed();
    displacement / reduction
}

/// Ball touching the face of the paddle defending `side`, boundaries included
pub fn hits_paddle(side: Side, paddle: &Paddle, ball: &Ball) -> bool {
    if !paddle.spans(ball.pos.y) {
        return false;
    }
    match side {
        Side::Left => ball.pos.x - ball.radius() <= paddle.right_edge(),
        Side::Right => ball.pos.x + ball.radius() >= paddle.x,
    }
}

/// Check ball collisions with walls and paddles
///
/// Wall, left paddle and right paddle are tested in that order and none of
/// them short-circuits the others. The tests are inclusive and ignore the
/// direction of travel, so a ball sitting on a boundary flips again on the
/// next pass.
pub fn check_collisions(world: &mut World, field: &Field, events: &mut Events) {
    let mut paddles: Vec<(Side, Paddle)> = world
        .query::<(&Side, &Paddle)>()
        .iter()
        .map(|(_e, (side, paddle))| (*side, *paddle))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        resolve_ball(ball, &paddles, field, events);
    }
}

fn resolve_ball(ball: &mut Ball, paddles: &[(Side, Paddle)], field: &Field, events: &mut Events) {
    if field.touches_wall(ball.pos.y, ball.radius()) {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    for (side, paddle) in paddles {
        if hits_paddle(*side, paddle, ball) {
            ball.vel.x = -ball.vel.x;
            ball.vel.y = rebound_velocity(paddle, ball);
            events.ball_hit_paddle = true;
            debug!(%side, vx = ball.vel.x, vy = ball.vel.y, "Ball hit paddle");
        }
    }
}
