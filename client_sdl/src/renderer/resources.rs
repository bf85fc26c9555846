use sdl2::pixels::Color;
use sdl2::ttf::Font;

/// The three font instances, alive as long as the TTF context
pub struct Fonts<'ttf> {
    pub score: Font<'ttf, 'static>,
    pub title: Font<'ttf, 'static>,
    pub tip: Font<'ttf, 'static>,
}

pub fn color(rgba: [u8; 4]) -> Color {
    let [r, g, b, a] = rgba;
    Color::RGBA(r, g, b, a)
}

/// Convert an arena rectangle to an SDL one
pub fn to_sdl_rect(rect: game_core::Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.w.max(0) as u32, rect.h.max(0) as u32)
}
