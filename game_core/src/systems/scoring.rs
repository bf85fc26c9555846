use crate::{Ball, Config, Events, GameAction, GameFsm, GameMap, Score, Side};
use hecs::World;

/// Check if ball crossed the left or right edge (scoring).
///
/// The ball is not re-centred: it bounces back into play and the rally goes on.
/// Reaching the win score moves the state machine to Win.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
) {
    let mut scorers = Vec::new();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() < 0 {
            // Ball got past the left paddle: right player scores
            ball.dir.x = 1;
            scorers.push(Side::Right);
        }
        if ball.rect.right() > map.width {
            ball.dir.x = -1;
            scorers.push(Side::Left);
        }
    }

    for side in scorers {
        events.scored(side);
        if score.increment(side) == config.win_score {
            if fsm.transition(GameAction::ScoreReached(side)).is_some() {
                events.winner = Some(side);
            }
        }
    }
}
