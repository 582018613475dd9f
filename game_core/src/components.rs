use crate::{Aabb, Colour, Config, Field};
use glam::Vec2;
use std::fmt;

/// Which end of the field a paddle (and its player) defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Paddle component - a player's vertical bat
///
/// `x`/`y` locate the top-left corner. Width and height never change after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
    pub speed: f32,
    origin_y: f32,
    pub colour: Colour,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
            origin_y: y,
            colour: Colour::White,
        }
    }

    /// Paddle for `side` at its spawn position
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(
            config.paddle_x(side),
            config.paddle_spawn_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Right-hand edge (the face a left paddle presents to the ball)
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Ball centre inside the paddle's vertical span, ends included
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }

    /// Move by one step: -1 = up, 1 = down, 0 = stay. No bounds checking.
    pub fn shift(&mut self, dir: i8) {
        self.y += dir as f32 * self.speed;
    }

    /// Move by one step and keep the paddle on the field
    pub fn move_within(&mut self, dir: i8, field: &Field) {
        if dir == 0 {
            return;
        }
        self.shift(dir);
        self.y = field.clamp_top(self.y, self.height);
    }

    pub fn reset(&mut self) {
        self.y = self.origin_y;
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    max_speed: f32,
    origin: Vec2,
    pub colour: Colour,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, max_speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            max_speed,
            origin: pos,
            colour: Colour::White,
        }
    }

    /// Ball at the centre of the field with the configured serve velocity
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.ball_spawn(),
            config.ball_velocity,
            config.ball_radius,
            config.ball_speed_max,
        )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Euler step, one tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to the origin with no vertical speed; horizontal velocity is kept
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel.y = 0.0;
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The ball has an x position of {}, y position of {}.",
            self.pos.x, self.pos.y
        )
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
