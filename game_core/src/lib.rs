pub mod colour;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use colour::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    players: &mut Players,
    controls: &Controls,
    events: &mut Events,
) {
    let field = config.field();

    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, controls);

    // 2. Move paddles based on intents
    move_paddles(world, &field);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, &field, events);

    // 5. Check scoring (ball exited field), then whether that decided the match
    if check_scoring(world, &field, players, events).is_some() {
        check_match_end(players, config.win_score, events);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, paddle: Paddle) -> hecs::Entity {
    world.spawn((side, paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
