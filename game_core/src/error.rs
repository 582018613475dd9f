use thiserror::Error;

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field must have a positive size, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("paddle must have a positive size, got {width}x{height}")]
    InvalidPaddle { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit a field of height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("paddle margin must be zero or more, got {0}")]
    InvalidPaddleMargin(f32),

    #[error("paddles overlap on a field of width {field}")]
    PaddlesOverlap { field: f32 },

    #[error("paddle speed must be positive, got {0}")]
    InvalidPaddleSpeed(f32),

    #[error("ball radius must be positive, got {0}")]
    InvalidBallRadius(f32),

    #[error("ball velocity must be finite, got ({x}, {y})")]
    InvalidBallVelocity { x: f32, y: f32 },

    #[error("ball max speed must be positive, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("winning score must be at least 1")]
    InvalidWinScore,
}
