use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_x_padding: i32,
    pub paddle_y_padding: i32,
    pub ball_width: i32,
    pub ball_height: i32,
    pub ball_speed: i32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_x_padding: Params::PADDLE_X_PADDING,
            paddle_y_padding: Params::PADDLE_Y_PADDING,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_x_padding,
            Side::Right => self.arena_width - self.paddle_width - self.paddle_x_padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.arena_width, 800);
        assert_eq!(config.arena_height, 600);
        assert_eq!(config.paddle_speed, 6);
        assert_eq!(config.ball_speed, 4);
        assert_eq!(config.win_score, 10);
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 780, "Right paddle X position");
    }
}
