//! Keyboard input handling

use game_core::{Control, InputEvent};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Map a key to the control it drives, if any
pub fn control_for_key(key: Keycode) -> Option<Control> {
    match key {
        Keycode::W => Some(Control::LeftUp),
        Keycode::S => Some(Control::LeftDown),
        Keycode::Up => Some(Control::RightUp),
        Keycode::Down => Some(Control::RightDown),
        Keycode::Space => Some(Control::Restart),
        _ => None,
    }
}

/// Translate a key-down or key-up event into a game input
pub fn input_from_event(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::KeyDown {
            keycode: Some(key), ..
        } => control_for_key(key).map(InputEvent::press),
        Event::KeyUp {
            keycode: Some(key), ..
        } => control_for_key(key).map(InputEvent::release),
        _ => None,
    }
}
