//! Game State Machine
//!
//! Two states: a rally in progress, or a finished game waiting for a restart.

use crate::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Win { winner: Side },
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// `side` reached the win score
    ScoreReached(Side),
    /// Restart key pressed
    Restart,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition. Returns the new state, or `None` if `action` is
    /// not valid here (the state is left unchanged).
    pub fn transition(&mut self, action: GameAction) -> Option<GameState> {
        let next_state = self.get_next_state(action)?;
        self.state = next_state;
        Some(next_state)
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Playing, GameAction::ScoreReached(winner)) => {
                Some(GameState::Win { winner })
            }
            (GameState::Win { .. }, GameAction::Restart) => Some(GameState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    /// Force back to Playing without going through a transition
    pub fn reset(&mut self) {
        self.state = GameState::Playing;
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, GameState::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Win { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::Win { winner } => Some(winner),
            GameState::Playing => None,
        }
    }

    /// 0 while playing, otherwise 1 (left) or 2 (right)
    pub fn winning_player(&self) -> u8 {
        self.winner().map_or(0, Side::player_number)
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
