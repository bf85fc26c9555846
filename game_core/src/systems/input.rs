use hecs::World;

use crate::{GameAction, GameFsm, HeldKeys, Paddle, Side};

/// Logical game controls, independent of the windowing backend's key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Restart,
}

/// A key-down (`pressed = true`) or key-up for one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub control: Control,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(control: Control) -> Self {
        Self {
            control,
            pressed: true,
        }
    }

    pub fn release(control: Control) -> Self {
        Self {
            control,
            pressed: false,
        }
    }
}

/// Apply one input event to the held-key flags.
///
/// Flags are updated in every state. Returns true when the event asks for a
/// restart that the state machine currently accepts (a press while in Win).
pub fn apply_input(world: &mut World, fsm: &GameFsm, input: InputEvent) -> bool {
    let (side, up) = match input.control {
        Control::LeftUp => (Side::Left, true),
        Control::LeftDown => (Side::Left, false),
        Control::RightUp => (Side::Right, true),
        Control::RightDown => (Side::Right, false),
        Control::Restart => {
            return input.pressed && fsm.can_transition(GameAction::Restart);
        }
    };

    for (_entity, (paddle, keys)) in world.query_mut::<(&Paddle, &mut HeldKeys)>() {
        if paddle.side == side {
            if up {
                keys.up = input.pressed;
            } else {
                keys.down = input.pressed;
            }
        }
    }

    false
}
