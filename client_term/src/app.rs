//! Fixed-rate game loop
//!
//! Each frame: wait for the frame boundary, drain input, advance the match
//! and draw. Pauses after a goal and during the winner announcement are timed
//! here so quit input is still handled while the simulation is idle.

use crate::input::{is_quit, KeyTracker};
use crate::renderer::RenderContext;
use crossterm::event::{self, Event};
use game_core::{Game, Phase};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

pub const FPS_LIMIT: u32 = 60;
/// Pause between a goal and the next serve
pub const SERVE_DELAY: Duration = Duration::from_millis(500);
/// How long the winner stays on screen before a new match starts
pub const ANNOUNCE_DURATION: Duration = Duration::from_secs(5);

/// Caps the loop at a fixed frame rate
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: None,
        }
    }

    /// Time to wait at `now` before the next frame may start. A late frame
    /// starts immediately and does not try to catch up.
    pub fn delay(&mut self, now: Instant) -> Duration {
        let start = self.next.map_or(now, |next| next.max(now));
        self.next = Some(start + self.period);
        start - now
    }

    pub fn wait(&mut self) {
        let delay = self.delay(Instant::now());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Deadline for leaving a paused phase
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimer {
    deadline: Option<Instant>,
}

impl PhaseTimer {
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// An unarmed timer counts as expired
    pub fn expired(&self, now: Instant) -> bool {
        self.deadline.map_or(true, |deadline| now >= deadline)
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }
}

pub struct App {
    game: Game,
    keys: KeyTracker,
    timer: PhaseTimer,
    running: bool,
}

impl App {
    pub fn new(game: Game, reports_key_release: bool) -> Self {
        Self {
            game,
            keys: KeyTracker::new(reports_key_release),
            timer: PhaseTimer::default(),
            running: true,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if is_quit(&key) => {
                info!("Quit requested, game closing");
                self.running = false;
            }
            Event::Key(key) => self.keys.handle(&key, now),
            Event::FocusLost => self.keys.clear(),
            _ => {}
        }
    }

    /// Advance the match by one frame
    pub fn update(&mut self, now: Instant) {
        match self.game.phase() {
            Phase::Playing => {
                let controls = self.keys.controls(now);
                let events = self.game.step(&controls);
                if let Some(result) = &events.match_won {
                    info!(winner = %result.winner_name, "Announcing winner");
                    self.timer.start(now, ANNOUNCE_DURATION);
                } else if events.scored().is_some() {
                    self.timer.start(now, SERVE_DELAY);
                }
            }
            Phase::RoundOver => {
                if self.timer.expired(now) {
                    self.timer.clear();
                    self.game.serve();
                }
            }
            Phase::MatchOver => {
                if self.timer.expired(now) {
                    self.timer.clear();
                    self.keys.clear();
                    self.game.rematch();
                }
            }
        }
    }

    fn poll_input(&mut self) -> anyhow::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        Ok(())
    }

    pub fn run(&mut self, ctx: &mut RenderContext) -> anyhow::Result<()> {
        let mut clock = FrameClock::new(FPS_LIMIT);
        info!(running = self.running, fps = FPS_LIMIT, "Entering game loop");

        while self.running {
            clock.wait();
            self.poll_input()?;
            if !self.running {
                break;
            }
            self.update(Instant::now());
            ctx.draw(&self.game.snapshot())?;
        }

        Ok(())
    }
}
