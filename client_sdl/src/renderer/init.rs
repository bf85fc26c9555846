use game_core::{Config, Params};
use sdl2::render::Canvas;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use sdl2::Sdl;

use super::resources::Fonts;
use crate::error::InitError;

pub const WINDOW_TITLE: &str = "Ping Pong";

/// Process-lifetime SDL handles
pub struct SdlContext {
    pub sdl: Sdl,
    pub canvas: Canvas<Window>,
    pub ttf: Sdl2TtfContext,
}

/// Bring up video, the window, an accelerated renderer and the TTF subsystem,
/// in that order. The first failure wins.
pub fn init_sdl(config: &Config) -> Result<SdlContext, InitError> {
    let sdl = sdl2::init().map_err(InitError::Video)?;
    let video = sdl.video().map_err(InitError::Video)?;

    let window = video
        .window(
            WINDOW_TITLE,
            config.arena_width as u32,
            config.arena_height as u32,
        )
        .position(0, 0)
        .build()
        .map_err(|e| InitError::Window(e.to_string()))?;
    log::info!(
        "Created {}x{} window",
        config.arena_width,
        config.arena_height
    );

    // No vsync: the loop runs as fast as presenting allows
    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| InitError::Renderer(e.to_string()))?;

    let ttf = sdl2::ttf::init().map_err(|e| InitError::Ttf(e.to_string()))?;

    Ok(SdlContext { sdl, canvas, ttf })
}

/// Open the score, title and tip fonts from the fixed font path
pub fn load_fonts(ttf: &Sdl2TtfContext) -> Result<Fonts<'_>, InitError> {
    let path = Params::FONT_PATH;
    let open = move |size: u16| {
        ttf.load_font(path, size)
            .map_err(|reason| InitError::font(path, reason))
    };

    let fonts = Fonts {
        score: open(Params::SCORE_FONT_SIZE)?,
        title: open(Params::TITLE_FONT_SIZE)?,
        tip: open(Params::TIP_FONT_SIZE)?,
    };
    log::info!("Loaded fonts from {}", path);
    Ok(fonts)
}
