use crate::systems::reset_game;
use crate::{
    create_ball, create_paddle, handle_input, step, Ball, Config, Events, GameFsm, GameMap,
    GameState, InputEvent, Paddle, Rect, Score, Side,
};
use hecs::World;

/// Everything the draw stage needs for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: Score,
    pub state: GameState,
}

/// A local two-player game: the world plus every resource the systems use
pub struct Game {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub fsm: GameFsm,
    pub events: Events,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        // Create paddles
        for side in [Side::Left, Side::Right] {
            create_paddle(&mut world, side, map.paddle_spawn(side, &config));
        }

        // Create ball
        create_ball(&mut world, map.ball_spawn(&config), Ball::START_DIR);

        Self {
            world,
            map,
            config,
            score: Score::new(),
            fsm: GameFsm::new(),
            events: Events::new(),
        }
    }

    /// Back to the opening position with zero scores
    pub fn reset(&mut self) {
        reset_game(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.fsm,
        );
    }

    /// Feed one key event. Returns true if it restarted the game.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        handle_input(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            input,
        )
    }

    /// Advance one frame. Events from the frame are left in `self.events`.
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            &mut self.events,
        );
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    /// 0 while playing, 1 or 2 once somebody has won
    pub fn winning_player(&self) -> u8 {
        self.fsm.winning_player()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Mutate the ball in place (used to script rallies)
    pub fn with_ball<F: FnOnce(&mut Ball)>(&mut self, f: F) {
        if let Some((_e, ball)) = self.world.query_mut::<&mut Ball>().into_iter().next() {
            f(ball);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let rect_of = |side: Side| self.paddle(side).map(|p| p.rect).unwrap_or_default();
        Snapshot {
            left_paddle: rect_of(Side::Left),
            right_paddle: rect_of(Side::Right),
            ball: self.ball().map(|b| b.rect).unwrap_or_default(),
            score: self.score,
            state: self.state(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Control, HeldKeys};
    use glam::IVec2;

    #[test]
    fn test_new_game_layout() {
        let game = Game::default();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.left_paddle, Rect::new(10, 130, 10, 120));
        assert_eq!(snapshot.right_paddle, Rect::new(780, 130, 10, 120));
        assert_eq!(snapshot.ball, Rect::new(380, 280, 20, 20));
        assert_eq!(snapshot.score, Score::new());
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(game.ball().map(|b| b.dir), Some(IVec2::new(-1, -1)));
        assert_eq!(game.winning_player(), 0);
    }

    #[test]
    fn test_update_moves_ball_and_paddle() {
        let mut game = Game::default();
        game.handle_input(InputEvent::press(Control::RightUp));

        game.update();

        assert_eq!(game.ball().map(|b| b.rect.pos()), Some(IVec2::new(376, 276)));
        assert_eq!(game.paddle(Side::Right).map(|p| p.rect.y), Some(124));
        assert_eq!(game.paddle(Side::Left).map(|p| p.rect.y), Some(130));
    }

    #[test]
    fn test_nothing_moves_in_win_state() {
        let mut game = Game::default();
        game.score.right = game.config.win_score - 1;
        game.with_ball(|ball| ball.rect.x = -1);
        game.update();
        assert!(game.fsm.is_game_over());

        game.handle_input(InputEvent::press(Control::LeftUp));
        let before = game.snapshot();
        for _ in 0..10 {
            game.update();
        }
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_restart_key_resets_game_in_win_state() {
        let mut game = Game::default();
        game.score.left = game.config.win_score - 1;
        // Right edge one pixel past the arena
        game.with_ball(|ball| ball.rect.x = crate::Params::ARENA_WIDTH - 19);
        game.update();
        assert_eq!(game.winning_player(), 1);

        assert!(!game.handle_input(InputEvent::release(Control::Restart)));
        assert!(game.handle_input(InputEvent::press(Control::Restart)));

        assert_eq!(game.snapshot(), Game::default().snapshot());
        assert_eq!(game.winning_player(), 0);
        for (_e, keys) in game.world.query::<&HeldKeys>().iter() {
            assert_eq!(*keys, HeldKeys::new());
        }
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        let mut game = Game::default();
        game.update();
        let before = game.snapshot();

        assert!(!game.handle_input(InputEvent::press(Control::Restart)));
        assert_eq!(game.snapshot(), before);
    }
}
