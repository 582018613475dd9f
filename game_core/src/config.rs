use crate::{ConfigError, Field, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_velocity: Vec2,
    pub ball_speed_max: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Get X position of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Top edge of a paddle centred vertically on the field
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.field().center()
    }

    /// Reject dimensions that would break the simulation, most notably a zero
    /// or infinite paddle height or max speed feeding the rebound division.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(positive(self.field_width) && positive(self.field_height)) {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(positive(self.paddle_width) && positive(self.paddle_height)) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            return Err(ConfigError::InvalidPaddleMargin(self.paddle_margin));
        }
        if self.paddle_x(Side::Left) + self.paddle_width >= self.paddle_x(Side::Right) {
            return Err(ConfigError::PaddlesOverlap {
                field: self.field_width,
            });
        }
        if !positive(self.paddle_speed) {
            return Err(ConfigError::InvalidPaddleSpeed(self.paddle_speed));
        }
        if !positive(self.ball_radius) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if !self.ball_velocity.is_finite() {
            return Err(ConfigError::InvalidBallVelocity {
                x: self.ball_velocity.x,
                y: self.ball_velocity.y,
            });
        }
        if !positive(self.ball_speed_max) {
            return Err(ConfigError::InvalidMaxSpeed(self.ball_speed_max));
        }
        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore);
        }
        Ok(())
    }
}

/// Finite and strictly above zero; NaN fails both
fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 570.0, "Right paddle X position");
    }

    #[test]
    fn test_config_spawn_points() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 150.0);
        assert_eq!(config.ball_spawn(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_zero_paddle_height_rejected() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPaddle {
                width: 20.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_zero_max_speed_rejected() {
        let config = Config {
            ball_speed_max: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxSpeed(0.0)));
    }

    #[test]
    fn test_nan_field_rejected() {
        let config = Config {
            field_width: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_paddle_taller_than_field_rejected() {
        let config = Config {
            paddle_height: 500.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleTooTall {
                paddle: 500.0,
                field: 400.0
            })
        );
    }

    #[test]
    fn test_overlapping_paddles_rejected() {
        let config = Config {
            field_width: 50.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddlesOverlap { field: 50.0 })
        );
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWinScore));
    }

    #[test]
    fn test_infinite_max_speed_rejected() {
        let config = Config {
            ball_speed_max: f32::INFINITY,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMaxSpeed(f32::INFINITY))
        );
    }

    #[test]
    fn test_nan_paddle_speed_rejected() {
        let config = Config {
            paddle_speed: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPaddleSpeed(speed)) if speed.is_nan()
        ));
    }

    #[test]
    fn test_negative_paddle_speed_rejected() {
        let config = Config {
            paddle_speed: -5.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPaddleSpeed(-5.0))
        );
    }

    #[test]
    fn test_non_finite_ball_velocity_rejected() {
        for velocity in [
            Vec2::new(f32::NAN, 0.0),
            Vec2::new(5.0, f32::INFINITY),
        ] {
            let config = Config {
                ball_velocity: velocity,
                ..Config::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidBallVelocity { .. })
                ),
                "Velocity {velocity} must be rejected"
            );
        }
    }

    #[test]
    fn test_negative_margin_rejected() {
        let config = Config {
            paddle_margin: -1.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPaddleMargin(-1.0))
        );
    }
}
