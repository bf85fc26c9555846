use glam::IVec2;

use crate::Rect;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Player number shown to humans: 1 = left, 2 = right
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect, // y is not clamped to the arena
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// Keys currently held for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    /// Sign-only direction, each axis is always +1 or -1
    pub dir: IVec2,
}

impl Ball {
    pub const START_DIR: IVec2 = IVec2::new(-1, -1);

    pub fn new(rect: Rect, dir: IVec2) -> Self {
        Self { rect, dir }
    }

    /// Put the ball back on its spawn rectangle heading up-left
    pub fn reset(&mut self, spawn: Rect) {
        self.rect = spawn;
        self.dir = Self::START_DIR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_player_number() {
        assert_eq!(Side::Left.player_number(), 1);
        assert_eq!(Side::Right.player_number(), 2);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::new(Rect::new(-3, 700, 20, 20), IVec2::new(1, 1));
        let spawn = Rect::new(380, 280, 20, 20);
        ball.reset(spawn);
        assert_eq!(ball.rect, spawn);
        assert_eq!(ball.dir, IVec2::new(-1, -1));
    }
}
