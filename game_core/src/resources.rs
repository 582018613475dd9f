use crate::Side;
use std::fmt;

/// A named player and their score in the current match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player \"{}\" has a score of {}", self.name, self.score)
    }
}

/// Both players, indexed by the side they defend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    pub left: Player,
    pub right: Player,
}

impl Players {
    pub fn new(left_name: impl Into<String>, right_name: impl Into<String>) -> Self {
        Self {
            left: Player::new(left_name),
            right: Player::new(right_name),
        }
    }

    pub fn get(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Award a point and return the new score
    pub fn increment(&mut self, side: Side) -> u32 {
        let player = self.get_mut(side);
        player.score += 1;
        player.score
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left.score >= win_score {
            Some(Side::Left)
        } else if self.right.score >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset_scores(&mut self) {
        self.left.score = 0;
        self.right.score = 0;
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    fn index(self) -> usize {
        match self {
            Key::LeftUp => 0,
            Key::LeftDown => 1,
            Key::RightUp => 2,
            Key::RightDown => 3,
        }
    }
}

/// Snapshot of which keys are held for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pressed: [bool; 4],
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Controls::press`]
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.pressed[key.index()] = false;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Net direction for a paddle: -1 = up, 1 = down, 0 when neither or both
    pub fn direction(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (Key::LeftUp, Key::LeftDown),
            Side::Right => (Key::RightUp, Key::RightDown),
        };
        self.is_pressed(down) as i8 - self.is_pressed(up) as i8
    }
}

/// Outcome of a decided match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub winner_name: String,
    pub left_score: u32,
    pub right_score: u32,
}

impl MatchResult {
    pub fn announcement(&self) -> String {
        format!("{} has won!", self.winner_name)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_won: Option<MatchResult>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.match_won = None;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}
