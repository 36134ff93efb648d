//! Actions - what input asks the view to do
//!
//! Keys and mouse events are mapped to [`Action`]s here; the app applies them.
//!
//! | Keys                          | Action            |
//! |-------------------------------|-------------------|
//! | `q`, `Escape`, `Ctrl+C`       | quit              |
//! | `j`/`k`, `↓`/`↑`              | scroll one line   |
//! | `PageDown`/space, `PageUp`    | scroll one page   |
//! | `g`/`Home`, `G`/`End`         | top / bottom      |
//! | `1`..`7`                      | jump to section   |
//! | `Tab`, `Shift+Tab`            | focus next / prev card |
//! | `h`/`←`/`[`, `l`/`→`/`]`      | carousel prev / next on focused card |

use super::input::InputEvent;
use super::keyboard::KeyboardEvent;
use super::mouse::{MouseAction, MouseButton, MouseEvent, ScrollDirection, WHEEL_SCROLL};
use crate::view::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollBy(i32),
    PageDown,
    PageUp,
    Top,
    Bottom,
    JumpTo(SectionId),
    FocusNext,
    FocusPrev,
    CarouselPrev,
    CarouselNext,
    /// Left click at a screen cell.
    Click { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
}

pub fn action_for_key(event: &KeyboardEvent) -> Option<Action> {
    if !event.is_down() {
        return None;
    }
    if event.modifiers.ctrl {
        return match event.key.as_str() {
            "c" => Some(Action::Quit),
            "d" => Some(Action::PageDown),
            "u" => Some(Action::PageUp),
            _ => None,
        };
    }

    let action = match event.key.as_str() {
        "q" | "Escape" => Action::Quit,
        "j" | "ArrowDown" => Action::ScrollBy(1),
        "k" | "ArrowUp" => Action::ScrollBy(-1),
        "PageDown" | " " => Action::PageDown,
        "PageUp" => Action::PageUp,
        "g" | "Home" => Action::Top,
        "G" | "End" => Action::Bottom,
        "Tab" if event.modifiers.shift => Action::FocusPrev,
        "Tab" => Action::FocusNext,
        "h" | "ArrowLeft" | "[" => Action::CarouselPrev,
        "l" | "ArrowRight" | "]" => Action::CarouselNext,
        key => {
            let digit = key.parse::<usize>().ok()?;
            let section = SectionId::ALL.get(digit.checked_sub(1)?)?;
            Action::JumpTo(*section)
        }
    };
    Some(action)
}

pub fn action_for_mouse(event: &MouseEvent) -> Option<Action> {
    match (event.action, event.scroll) {
        (MouseAction::Scroll, Some(ScrollDirection::Up)) => Some(Action::ScrollBy(-WHEEL_SCROLL)),
        (MouseAction::Scroll, Some(ScrollDirection::Down)) => Some(Action::ScrollBy(WHEEL_SCROLL)),
        (MouseAction::Down, _) if event.button == MouseButton::Left => Some(Action::Click {
            x: event.x,
            y: event.y,
        }),
        _ => None,
    }
}

pub fn action_for_input(event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::Key(key) => action_for_key(key),
        InputEvent::Mouse(mouse) => action_for_mouse(mouse),
        InputEvent::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        InputEvent::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::{KeyState, Modifiers};

    fn press(key: &str) -> Option<Action> {
        action_for_key(&KeyboardEvent::new(key))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press("q"), Some(Action::Quit));
        assert_eq!(press("Escape"), Some(Action::Quit));
        let ctrl_c = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        assert_eq!(action_for_key(&ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(press("j"), Some(Action::ScrollBy(1)));
        assert_eq!(press("ArrowUp"), Some(Action::ScrollBy(-1)));
        assert_eq!(press(" "), Some(Action::PageDown));
        assert_eq!(press("G"), Some(Action::Bottom));
        assert_eq!(press("Home"), Some(Action::Top));
    }

    #[test]
    fn test_tab_and_shift_tab() {
        assert_eq!(press("Tab"), Some(Action::FocusNext));
        let back = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert_eq!(action_for_key(&back), Some(Action::FocusPrev));
    }

    #[test]
    fn test_carousel_keys() {
        assert_eq!(press("h"), Some(Action::CarouselPrev));
        assert_eq!(press("ArrowRight"), Some(Action::CarouselNext));
        assert_eq!(press("]"), Some(Action::CarouselNext));
    }

    #[test]
    fn test_digit_jumps() {
        assert_eq!(press("1"), Some(Action::JumpTo(SectionId::Hero)));
        assert_eq!(press("3"), Some(Action::JumpTo(SectionId::Projects)));
        assert_eq!(press("7"), Some(Action::JumpTo(SectionId::Contact)));
        assert_eq!(press("0"), None);
        assert_eq!(press("8"), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = KeyboardEvent::new("q");
        event.state = KeyState::Release;
        assert_eq!(action_for_key(&event), None);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press("z"), None);
        assert_eq!(press(""), None);
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            action_for_mouse(&MouseEvent::wheel(ScrollDirection::Down)),
            Some(Action::ScrollBy(WHEEL_SCROLL))
        );
        assert_eq!(
            action_for_mouse(&MouseEvent::click(4, 9)),
            Some(Action::Click { x: 4, y: 9 })
        );
        assert_eq!(action_for_mouse(&MouseEvent::wheel(ScrollDirection::Left)), None);
    }

    #[test]
    fn test_resize_input() {
        assert_eq!(
            action_for_input(&InputEvent::Resize(80, 24)),
            Some(Action::Resize { width: 80, height: 24 })
        );
        assert_eq!(action_for_input(&InputEvent::None), None);
    }
}
