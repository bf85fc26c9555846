pub mod draw;
pub mod init;
pub mod layout;
pub mod resources;

use game_core::{GameMap, Snapshot};
use resources::Fonts;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

pub struct Renderer<'ttf> {
    pub canvas: Canvas<Window>,
    pub texture_creator: TextureCreator<WindowContext>,
    pub fonts: Fonts<'ttf>,
}

impl<'ttf> Renderer<'ttf> {
    pub fn new(canvas: Canvas<Window>, fonts: Fonts<'ttf>) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            fonts,
        }
    }

    pub fn draw(&mut self, snapshot: &Snapshot, map: &GameMap) -> Result<(), String> {
        draw::draw_frame(self, snapshot, map)
    }
}
