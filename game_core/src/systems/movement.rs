use crate::{Ball, Config, HeldKeys, Paddle};
use glam::IVec2;
use hecs::World;

/// Apply paddle movement based on held keys.
///
/// Up is applied first, then down, so holding both cancels out. Paddles are
/// free to leave the arena.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, keys)) in world.query_mut::<(&mut Paddle, &HeldKeys)>() {
        if keys.up {
            paddle.rect.y -= config.paddle_speed;
        }
        if keys.down {
            paddle.rect.y += config.paddle_speed;
        }
    }
}

/// Move ball one frame along its direction
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.translate(ball.dir * IVec2::splat(config.ball_speed));
    }
}
