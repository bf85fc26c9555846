use hecs::World;

use crate::{Ball, Config, GameFsm, GameMap, HeldKeys, Paddle, Score};

/// Put every entity back on its spawn point and start a fresh game.
///
/// Entities are repositioned in place, never despawned. Running it twice in a
/// row gives the same result as running it once.
pub fn reset_game(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
) {
    for (_entity, (paddle, keys)) in world.query_mut::<(&mut Paddle, &mut HeldKeys)>() {
        paddle.rect = map.paddle_spawn(paddle.side, config);
        *keys = HeldKeys::new();
    }

    let spawn = map.ball_spawn(config);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(spawn);
    }

    score.clear();
    fsm.reset();
}
