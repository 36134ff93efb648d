//! Mouse event types.

use super::keyboard::Modifiers;

/// Scroll wheel step, in lines.
pub const WHEEL_SCROLL: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
    pub modifiers: Modifiers,
    /// Only for scroll events
    pub scroll: Option<ScrollDirection>,
}

impl MouseEvent {
    pub fn click(x: u16, y: u16) -> Self {
        Self {
            action: MouseAction::Down,
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::none(),
            scroll: None,
        }
    }

    pub fn wheel(direction: ScrollDirection) -> Self {
        Self {
            action: MouseAction::Scroll,
            button: MouseButton::None,
            x: 0,
            y: 0,
            modifiers: Modifiers::none(),
            scroll: Some(direction),
        }
    }
}
