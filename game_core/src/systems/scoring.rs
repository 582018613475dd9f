use crate::{Ball, Events, Field, MatchResult, Paddle, Players, Side};
use hecs::World;
use tracing::info;

/// Check if ball left the field (scoring)
///
/// Returns the side that scored. A goal resets the round.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    players: &mut Players,
    events: &mut Events,
) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if field.past_left(ball.pos.x) {
            scorer = Some(Side::Right);
        } else if field.past_right(ball.pos.x) {
            scorer = Some(Side::Left);
        }
    }

    let side = scorer?;
    let score = players.increment(side);
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    info!(
        player = %players.get(side).name,
        score,
        "Player has scored"
    );

    reset_round(world);
    Some(side)
}

/// Put the ball and both paddles back where they started
pub fn reset_round(world: &mut World) {
    info!("Resetting ball and paddles to their spawn positions");
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset();
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset();
    }
}

/// Decide the match once a player reaches `win_score`.
///
/// The result is captured before both scores are cleared so the
/// announcement still names the winner and the final score.
pub fn check_match_end(
    players: &mut Players,
    win_score: u32,
    events: &mut Events,
) -> Option<MatchResult> {
    let winner = players.has_winner(win_score)?;
    let result = MatchResult {
        winner,
        winner_name: players.get(winner).name.clone(),
        left_score: players.left.score,
        right_score: players.right.score,
    };
    info!(
        player = %result.winner_name,
        left = result.left_score,
        right = result.right_score,
        "Player has won the game"
    );

    info!("Resetting player scores");
    players.reset_scores();
    events.match_won = Some(result.clone());
    Some(result)
}
