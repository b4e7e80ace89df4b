use eframe::egui::{InputState, Key};
use model::Side;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Swipe(Side),
    Reset,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft | Key::A => Some(Command::Swipe(Side::Left)),
            Key::ArrowRight | Key::D => Some(Command::Swipe(Side::Right)),
            Key::ArrowUp | Key::W => Some(Command::Swipe(Side::Up)),
            Key::ArrowDown | Key::S => Some(Command::Swipe(Side::Down)),
            Key::R => Some(Command::Reset),
            Key::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}

const KEYS: [Key; 10] = [
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::A,
    Key::D,
    Key::W,
    Key::S,
    Key::R,
    Key::Escape,
];

/// Commands for the keys pressed this frame, in a fixed key order.
pub fn pressed_commands(input: &InputState) -> Vec<Command> {
    KEYS.iter()
        .filter(|&&key| input.key_pressed(key))
        .filter_map(|&key| Command::from_key(key))
        .collect()
}
