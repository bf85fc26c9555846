use crate::{Ball, Events, GameMap, Paddle, Rect, Side};
use hecs::World;

/// Check ball collisions with paddles.
///
/// Only the x direction is flipped; the ball is not pushed out of the paddle,
/// so it can stay overlapping for several frames.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle) in &paddles {
            if !ball.rect.intersects(&paddle) {
                continue;
            }
            match side {
                Side::Left if ball.rect.x > paddle.x => {
                    ball.dir.x = 1;
                    events.ball_hit_paddle = true;
                }
                Side::Right if ball.rect.x < paddle.x => {
                    ball.dir.x = -1;
                    events.ball_hit_paddle = true;
                }
                _ => {}
            }
        }
    }
}

/// Check ball bounces off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.top() < 0 {
            ball.dir.y = 1;
            events.ball_hit_wall = true;
        }
        if ball.rect.bottom() > map.height {
            ball.dir.y = -1;
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};
    use glam::IVec2;

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new(&config);
        let events = Events::new();
        (world, config, map, events)
    }

    fn ball(world: &hecs::World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle = map.paddle_spawn(Side::Left, &config);
        create_paddle(&mut world, Side::Left, paddle);
        create_ball(
            &mut world,
            Rect::new(paddle.right() - 2, paddle.y + 10, 20, 20),
            IVec2::new(-1, 1),
        );

        check_paddle_collisions(&mut world, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.dir, IVec2::new(1, 1), "Only x direction flips");
        assert_eq!(
            ball.rect.x,
            paddle.right() - 2,
            "Ball is not pushed out of the paddle"
        );
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle = map.paddle_spawn(Side::Right, &config);
        create_paddle(&mut world, Side::Right, paddle);
        create_ball(
            &mut world,
            Rect::new(paddle.x - 18, paddle.y, 20, 20),
            IVec2::new(1, -1),
        );

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(ball(&world).dir, IVec2::new(-1, -1));
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_behind_left_paddle_does_not_bounce() {
        let (mut world, _config, _map, mut events) = setup_world();
        let paddle = Rect::new(10, 130, 10, 120);
        create_paddle(&mut world, Side::Left, paddle);
        // Overlapping, but the ball's left edge is left of the paddle's
        create_ball(&mut world, Rect::new(5, 150, 20, 20), IVec2::new(-1, 1));

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(ball(&world).dir, IVec2::new(-1, 1));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_touching_paddle_edge_does_not_bounce() {
        let (mut world, _config, _map, mut events) = setup_world();
        let paddle = Rect::new(10, 130, 10, 120);
        create_paddle(&mut world, Side::Left, paddle);
        create_ball(&mut world, Rect::new(20, 150, 20, 20), IVec2::new(-1, 1));

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(ball(&world).dir.x, -1);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(&mut world, Rect::new(400, -2, 20, 20), IVec2::new(1, -1));

        check_wall_collisions(&mut world, &map, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.dir, IVec2::new(1, 1));
        assert_eq!(ball.rect.y, -2, "No hard clamp on the wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Rect::new(400, map.height - 18, 20, 20),
            IVec2::new(-1, 1),
        );

        check_wall_collisions(&mut world, &map, &mut events);

        assert_eq!(ball(&world).dir, IVec2::new(-1, -1));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_resting_on_wall_does_not_bounce() {
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(&mut world, Rect::new(400, 0, 20, 20), IVec2::new(1, -1));

        check_wall_collisions(&mut world, &map, &mut events);

        assert_eq!(ball(&world).dir, IVec2::new(1, -1));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));

        check_paddle_collisions(&mut world, &mut events);
        check_wall_collisions(&mut world, &map, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
