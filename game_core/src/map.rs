use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its top-left corner and size (y grows downwards)
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Playfield bounds. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of an object of `extent` height so it stays on the field
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }

    /// Ball touching the top or bottom wall, boundaries included
    pub fn touches_wall(&self, y: f32, radius: f32) -> bool {
        y <= radius || y >= self.height - radius
    }

    /// Ball passed beyond the left edge
    pub fn past_left(&self, x: f32) -> bool {
        x < 0.0
    }

    /// Ball passed beyond the right edge
    pub fn past_right(&self, x: f32) -> bool {
        x > self.width
    }
}
