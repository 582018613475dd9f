/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_X: f32 = 5.0; // units per tick
    pub const BALL_SPEED_Y: f32 = 0.0;
    pub const BALL_SPEED_MAX: f32 = 5.0; // cap on rebound vertical speed

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins
}
