//! # folio-tui
//!
//! A single-page personal portfolio for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! view state and crossterm for terminal I/O.
//!
//! ## Architecture
//!
//! ```text
//! content (static) ─┐
//! rotators, visibility, focus (signals) ─→ document derived → FrameBuffer → DiffRenderer
//! ```
//!
//! Two pieces of behavior drive the page:
//!
//! - a **visibility tracker** that marks sections visible once at least 10%
//!   of them is on screen, switching them from pre-entrance to entrance styling
//! - two **carousel rotators** (projects, achievements) that advance every
//!   card with more than one image on a shared 5 second tick, with manual
//!   prev/next that wrap at both ends
//!
//! ## Modules
//!
//! - [`types`] - Colors, attributes, styles, cells
//! - [`content`] - The compiled-in portfolio records
//! - [`state`] - Carousels, visibility, ticker, input and actions
//! - [`media`] - Image resolution with placeholder fallback
//! - [`view`] - Page layout into a styled [`view::Document`]
//! - [`renderer`] - Frame painting, diff output, plain printing
//! - [`pipeline`] - The [`App`] state owner, mount and event loop
//! - [`config`], [`logging`], [`error`] - The ambient stack

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod media;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use config::Config;
pub use content::{CardItem, CardKind, Portfolio, portfolio};
pub use error::{FolioError, Result};
pub use logging::{LogTarget, init_logger};
pub use media::{FsImageLoader, ImageLoader, ImageResolver, Placeholders, ResolvedImage};
pub use pipeline::{App, MountHandle, mount, run, unmount};
pub use renderer::{DiffRenderer, FrameBuffer, print_document};
pub use state::{Action, CarouselRotator, IntersectionObserver, RotationTicker, Slides, VisibilityTracker};
pub use theme::Palette;
pub use view::{CardRef, Document, SectionId, render_page};
