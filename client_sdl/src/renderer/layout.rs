//! Where text goes on screen, given the size of the rendered text

use game_core::{GameMap, Params, Rect, Side};

/// Scores hang from the top edge on either side of the divider
pub fn score_rect(side: Side, w: i32, h: i32, map: &GameMap) -> Rect {
    let x = match side {
        Side::Left => map.center_x() - w - Params::SCORE_MARGIN,
        Side::Right => map.center_x() + Params::SCORE_MARGIN,
    };
    Rect::new(x, 0, w, h)
}

/// Centred in the window
pub fn banner_rect(w: i32, h: i32, map: &GameMap) -> Rect {
    Rect::new(map.width / 2 - w / 2, map.height / 2 - h / 2, w, h)
}

/// Horizontally centred, resting on the bottom edge
pub fn tip_rect(w: i32, h: i32, map: &GameMap) -> Rect {
    Rect::new(map.width / 2 - w / 2, map.height - h, w, h)
}
