use crate::{
    create_ball, create_paddle, step, Ball, BallView, Colour, Config, ConfigError, Controls,
    Events, MatchAction, MatchFsm, MatchResult, Paddle, PaddleView, Phase, PlayerView, Players,
    Side, Snapshot,
};
use hecs::World;
use tracing::{debug, info};

/// A local two-player match: owns the world, both players and the match phase
pub struct Game {
    pub world: World,
    pub players: Players,
    pub events: Events,
    config: Config,
    fsm: MatchFsm,
    tick: u64,
    match_result: Option<MatchResult>,
}

impl Game {
    pub fn new(
        config: Config,
        left_name: impl Into<String>,
        right_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!("Initializing Pong game");

        let mut world = World::new();

        // Create paddles
        for side in Side::ALL {
            create_paddle(&mut world, side, Paddle::spawn(side, &config));
        }

        // Create ball
        create_ball(&mut world, Ball::spawn(&config));

        let players = Players::new(left_name, right_name);
        info!(
            left = %players.left.name,
            right = %players.right.name,
            width = config.field_width,
            height = config.field_height,
            "Game ready"
        );

        Ok(Self {
            world,
            players,
            events: Events::new(),
            config,
            fsm: MatchFsm::new(),
            tick: 0,
            match_result: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    /// Number of simulated ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Result of the match currently being announced
    pub fn match_result(&self) -> Option<&MatchResult> {
        self.match_result.as_ref()
    }

    /// Advance one tick. Outside [`Phase::Playing`] nothing moves and the
    /// returned events are empty.
    pub fn step(&mut self, controls: &Controls) -> &Events {
        if !self.fsm.is_playing() {
            self.events.clear();
            return &self.events;
        }

        self.tick += 1;
        step(
            &mut self.world,
            &self.config,
            &mut self.players,
            controls,
            &mut self.events,
        );

        if let Some(result) = &self.events.match_won {
            self.match_result = Some(result.clone());
            self.fsm.transition(MatchAction::MatchPoint);
        } else if self.events.scored().is_some() {
            self.fsm.transition(MatchAction::Goal);
        }

        &self.events
    }

    /// Put the ball back in play after a goal
    pub fn serve(&mut self) -> bool {
        let result = self.fsm.transition(MatchAction::Serve);
        if result.success {
            debug!(tick = self.tick, "Ball served");
        }
        result.success
    }

    /// Start a fresh match once the winner has been announced
    pub fn rematch(&mut self) -> bool {
        let result = self.fsm.transition(MatchAction::Rematch);
        if result.success {
            self.match_result = None;
            info!("Starting a new match");
        }
        result.success
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<(&Side, &Paddle)>()
            .iter()
            .find(|(_e, (paddle_side, _))| **paddle_side == side)
            .map(|(_e, (_, paddle))| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Read-only view of the current tick for a renderer
    pub fn snapshot(&self) -> Snapshot {
        let paddle_view = |side: Side| {
            let paddle = self
                .paddle(side)
                .unwrap_or_else(|| Paddle::spawn(side, &self.config));
            PaddleView {
                side,
                rect: paddle.rect(),
                colour: paddle.colour,
            }
        };
        let ball = self.ball().unwrap_or_else(|| Ball::spawn(&self.config));
        let player_view = |side: Side| {
            let player = self.players.get(side);
            PlayerView {
                name: player.name.clone(),
                score: player.score,
            }
        };

        Snapshot {
            tick: self.tick,
            field: self.config.field(),
            background: Colour::Black,
            left_paddle: paddle_view(Side::Left),
            right_paddle: paddle_view(Side::Right),
            ball: BallView {
                pos: ball.pos,
                radius: ball.radius(),
                colour: ball.colour,
            },
            left_player: player_view(Side::Left),
            right_player: player_view(Side::Right),
            phase: self.phase(),
            match_result: self.match_result.clone(),
        }
    }
}
