//! Logical navigation commands and the decoding of raw input into them.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Command {
    AdvanceItem,
    RetreatItem,
    AdvanceSlide,
    RetreatSlide,
    /// First slide, nothing revealed.
    Home,
    /// Last slide; pressed again on the last slide, reveal all of its items.
    End,
}

pub mod key {
    pub const PAGE_UP: u32 = 33;
    pub const PAGE_DOWN: u32 = 34;
    pub const END: u32 = 35;
    pub const HOME: u32 = 36;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

impl Command {
    /// Map a DOM `keyCode`. Unhandled keys return `None` so the host keeps
    /// their default action.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            key::PAGE_UP => Some(Self::RetreatSlide),
            key::PAGE_DOWN => Some(Self::AdvanceSlide),
            key::LEFT | key::UP => Some(Self::RetreatItem),
            key::RIGHT | key::DOWN => Some(Self::AdvanceItem),
            key::HOME => Some(Self::Home),
            key::END => Some(Self::End),
            _ => None,
        }
    }

    /// Scrolling down (negative wheel delta) reveals the next item.
    pub fn from_wheel_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Self::AdvanceItem
        } else {
            Self::RetreatItem
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes() {
        assert_eq!(Command::from_key_code(33), Some(Command::RetreatSlide));
        assert_eq!(Command::from_key_code(34), Some(Command::AdvanceSlide));
        assert_eq!(Command::from_key_code(38), Some(Command::RetreatItem));
        assert_eq!(Command::from_key_code(40), Some(Command::AdvanceItem));
        assert_eq!(Command::from_key_code(36), Some(Command::Home));
        assert_eq!(Command::from_key_code(35), Some(Command::End));
        assert_eq!(Command::from_key_code(13), None);
    }

    #[test]
    fn wheel() {
        assert_eq!(Command::from_wheel_delta(-1.0), Command::AdvanceItem);
        assert_eq!(Command::from_wheel_delta(3.0), Command::RetreatItem);
    }

    #[test]
    fn serde_names() {
        let cmd: Command = serde_json::from_str(r#""End""#).unwrap();
        assert_eq!(cmd, Command::End);
    }
}
