//! Renderer - frames to the terminal
//!
//! - [`FrameBuffer`] / [`paint_frame`] - one screen of cells from a document
//! - [`DiffRenderer`] - changed-cell output for the fullscreen view
//! - [`print_document`] - whole-document output for `--print`

mod buffer;
mod diff;
mod print;

pub use buffer::{CONTINUATION, FrameBuffer, StatusBar, content_rows, paint_frame};
pub use diff::DiffRenderer;
pub use print::print_document;
