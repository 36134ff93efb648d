//! State Module - view state and input
//!
//! - **Carousel** - per-card current-image index, tick and manual stepping
//! - **Visibility** - intersection observer + reactive section map
//! - **Ticker** - repeating rotation timer
//! - **Keyboard / Mouse / Input** - event types and crossterm conversion
//! - **Action** - key and mouse mapping to view actions

pub mod action;
pub mod carousel;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod ticker;
pub mod visibility;

pub use action::{Action, action_for_input, action_for_key, action_for_mouse};
pub use carousel::{CarouselRotator, Slides};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use mouse::{MouseEvent, ScrollDirection};
pub use ticker::RotationTicker;
pub use visibility::{IntersectionEntry, IntersectionObserver, Span, VisibilityTracker, intersection_ratio};
