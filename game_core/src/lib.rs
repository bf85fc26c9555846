pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use systems::{Control, InputEvent};

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Nothing moves unless the game is Playing at the start of the frame. A frame
/// that ends the game still finishes every stage.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    if !fsm.is_playing() {
        return;
    }

    // 1. Move paddles based on held keys
    move_paddles(world, config);

    // 2. Ball vs paddles
    check_paddle_collisions(world, events);

    // 3. Ball vs left/right edges (scoring)
    check_scoring(world, map, config, score, fsm, events);

    // 4. Ball vs top/bottom walls
    check_wall_collisions(world, map, events);

    // 5. Move ball
    move_ball(world, config);
}

/// Apply one input event, restarting the game when it asks for a restart.
/// Returns true if the game was restarted.
pub fn handle_input(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    input: InputEvent,
) -> bool {
    let restart = apply_input(world, fsm, input);
    if restart {
        reset_game(world, map, config, score, fsm);
    }
    restart
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side, rect), HeldKeys::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, dir: glam::IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, dir),))
}
