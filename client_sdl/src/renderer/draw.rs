use game_core::{GameMap, GameState, Params, Rect, Side, Snapshot};
use sdl2::pixels::Color;
use sdl2::ttf::Font;

use super::layout::{banner_rect, score_rect, tip_rect};
use super::resources::{color, to_sdl_rect};
use super::Renderer;

const RESTART_TIP: &str = "Press Space to play again!";

/// Clear, draw the scene for the current state, present.
///
/// The frame is presented even if one of the draw calls failed; the first
/// error is returned.
pub fn draw_frame(
    renderer: &mut Renderer,
    snapshot: &Snapshot,
    map: &GameMap,
) -> Result<(), String> {
    renderer
        .canvas
        .set_draw_color(color(Params::BACKGROUND_COLOR));
    renderer.canvas.clear();

    let result = match snapshot.state {
        GameState::Playing => draw_playing(renderer, snapshot, map),
        GameState::Win { winner } => draw_win(renderer, winner, map),
    };

    renderer.canvas.present();
    result
}

/// Record `next` unless an earlier call already failed
fn keep_first(first: &mut Result<(), String>, next: Result<(), String>) {
    if first.is_ok() {
        *first = next;
    }
}

fn draw_playing(renderer: &mut Renderer, snapshot: &Snapshot, map: &GameMap) -> Result<(), String> {
    let mut result = Ok(());
    let canvas = &mut renderer.canvas;

    // Divider
    canvas.set_draw_color(color(Params::DIVIDER_COLOR));
    keep_first(
        &mut result,
        canvas.draw_line((map.center_x(), 0), (map.center_x(), map.height)),
    );

    canvas.set_draw_color(color(Params::PADDLE_COLOR));
    for paddle in [snapshot.left_paddle, snapshot.right_paddle] {
        keep_first(&mut result, canvas.fill_rect(to_sdl_rect(paddle)));
    }

    canvas.set_draw_color(color(Params::BALL_COLOR));
    keep_first(&mut result, canvas.fill_rect(to_sdl_rect(snapshot.ball)));

    // Scores last so they stay on top
    for side in [Side::Left, Side::Right] {
        let text = snapshot.score.get(side).to_string();
        let drawn = draw_text(
            renderer,
            TextFont::Score,
            &text,
            color(Params::TEXT_COLOR),
            |w, h| score_rect(side, w, h, map),
        );
        keep_first(&mut result, drawn);
    }
    result
}

fn draw_win(renderer: &mut Renderer, winner: Side, map: &GameMap) -> Result<(), String> {
    let banner = format!("Player {} won!", winner.player_number());
    let mut result = draw_text(
        renderer,
        TextFont::Title,
        &banner,
        color(Params::TEXT_COLOR),
        |w, h| banner_rect(w, h, map),
    );
    let tip = draw_text(
        renderer,
        TextFont::Tip,
        RESTART_TIP,
        color(Params::TIP_COLOR),
        |w, h| tip_rect(w, h, map),
    );
    keep_first(&mut result, tip);
    result
}

#[derive(Debug, Clone, Copy)]
enum TextFont {
    Score,
    Title,
    Tip,
}

/// Rasterize `text`, blit it where `place` puts it and outline that rectangle
/// in the background colour. The surface and texture are dropped on return.
fn draw_text<F>(
    renderer: &mut Renderer,
    font: TextFont,
    text: &str,
    text_color: Color,
    place: F,
) -> Result<(), String>
where
    F: FnOnce(i32, i32) -> Rect,
{
    let font: &Font = match font {
        TextFont::Score => &renderer.fonts.score,
        TextFont::Title => &renderer.fonts.title,
        TextFont::Tip => &renderer.fonts.tip,
    };
    let surface = font
        .render(text)
        .solid(text_color)
        .map_err(|e| e.to_string())?;
    let texture = renderer
        .texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let target = to_sdl_rect(place(surface.width() as i32, surface.height() as i32));
    let mut result = renderer.canvas.copy(&texture, None, Some(target));
    renderer
        .canvas
        .set_draw_color(color(Params::BACKGROUND_COLOR));
    keep_first(&mut result, renderer.canvas.draw_rect(target));
    result
}
