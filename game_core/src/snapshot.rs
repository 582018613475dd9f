use crate::{Aabb, Colour, Field, MatchResult, Phase, Side};
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Aabb,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub score: u32,
}

/// Everything a renderer needs to draw one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub field: Field,
    pub background: Colour,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    pub ball: BallView,
    pub left_player: PlayerView,
    pub right_player: PlayerView,
    pub phase: Phase,
    /// Set while the winner is being announced
    pub match_result: Option<MatchResult>,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> &PaddleView {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerView {
        match side {
            Side::Left => &self.left_player,
            Side::Right => &self.right_player,
        }
    }

    /// Winner text to show instead of the field, if any
    pub fn announcement(&self) -> Option<String> {
        match (self.phase, &self.match_result) {
            (Phase::MatchOver, Some(result)) => Some(result.announcement()),
            _ => None,
        }
    }
}
