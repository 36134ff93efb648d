//! Pipeline - state to terminal
//!
//! ```text
//! App signals → document derived → FrameBuffer → DiffRenderer
//!      ↑                                              │
//!      └──────── actions ← input / ticks ←────────────┘
//! ```
//!
//! - **App** - owns all view state and applies actions
//! - **Mount** - terminal lifecycle and the event loop

pub mod app;
pub mod mount;

pub use app::{App, PageInputs, content_width};
pub use mount::{MountHandle, mount, run, unmount};
