use glam::IVec2;

use crate::{Config, Side};

/// Axis-aligned rectangle in window pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when the two rectangles share a region of positive area.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Arena geometry and spawn points
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// X coordinate of the vertical divider
    pub fn center_x(&self) -> i32 {
        self.width / 2
    }

    /// Starting rectangle for a paddle. Both paddles share the same y.
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Rect {
        Rect::new(
            config.paddle_x(side),
            config.paddle_height + config.paddle_y_padding,
            config.paddle_width,
            config.paddle_height,
        )
    }

    /// Starting rectangle for the ball: the arena centre shifted up-left by one
    /// full ball size
    pub fn ball_spawn(&self, config: &Config) -> Rect {
        Rect::new(
            self.width / 2 - config.ball_width,
            self.height / 2 - config.ball_height,
            config.ball_width,
            config.ball_height,
        )
    }
}
