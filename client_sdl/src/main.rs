//! Two-player Pong on an SDL2 window
//!
//! Left paddle: W / S. Right paddle: Up / Down. Space restarts after a win.

mod error;
mod input;
mod renderer;

use error::InitError;
use game_core::{Config, Events, Game, Score};
use log::Level;
use renderer::{init, Renderer};
use sdl2::event::Event;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), InitError> {
    let config = Config::default();
    let ctx = init::init_sdl(&config)?;
    let fonts = init::load_fonts(&ctx.ttf)?;
    let mut event_pump = ctx.sdl.event_pump().map_err(InitError::EventPump)?;
    let mut renderer = Renderer::new(ctx.canvas, fonts);

    let mut game = Game::new(config);
    let mut is_running = true;
    log::info!("Game started");

    while is_running {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                log::info!("Quit requested");
                is_running = false;
                continue;
            }
            if let Some(input) = input::input_from_event(&event) {
                if game.handle_input(input) {
                    log::info!("Game restarted");
                }
            }
        }

        game.update();
        log_events(&game);

        // The last frame is still drawn after a quit request
        if let Err(err) = renderer.draw(&game.snapshot(), &game.map) {
            log::warn!("Failed to draw frame: {}", err);
        }
    }

    Ok(())
}

fn log_events(game: &Game) {
    for (level, message) in describe_events(&game.events, &game.score) {
        log::log!(level, "{}", message);
    }
}

/// One log line per event raised during the last frame
fn describe_events(events: &Events, score: &Score) -> Vec<(Level, String)> {
    let mut lines = Vec::new();

    if events.ball_hit_paddle {
        lines.push((Level::Debug, "Ball hit paddle".to_string()));
    }
    if events.ball_hit_wall {
        lines.push((Level::Debug, "Ball hit wall".to_string()));
    }
    if events.left_scored || events.right_scored {
        let text = format!("Score {} - {}", score.left, score.right);
        lines.push((Level::Debug, text));
    }
    if let Some(winner) = events.winner {
        let text = format!("Player {} won", winner.player_number());
        lines.push((Level::Info, text));
    }
    lines
}
