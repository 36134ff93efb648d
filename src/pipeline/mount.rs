//! Mount API - terminal lifecycle and the event loop.
//!
//! [`mount`] acquires everything the interactive view needs: raw mode, the
//! alternate screen with a hidden cursor, mouse capture and the rotation
//! ticker. The returned [`MountHandle`] releases all of it on
//! [`MountHandle::unmount`] or on drop, so the terminal is restored on every
//! exit path including errors and panics.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::pipeline::{App, mount, run};
//!
//! let mut app = App::new(portfolio, resolver, &config, size);
//! let mut handle = mount(config.rotation_interval())?;
//! run(&mut app, &mut handle)?;
//! handle.unmount();
//! ```

use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::terminal;
use spark_signals::derived;

use super::app::App;
use crate::error::Result;
use crate::renderer::DiffRenderer;
use crate::state::{RotationTicker, action_for_input, input};
use crate::view::Document;

/// Input poll timeout per loop iteration.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

// =============================================================================
// Mount Handle
// =============================================================================

/// Holds every resource acquired by [`mount`].
pub struct MountHandle {
    renderer: DiffRenderer<Stdout>,
    ticker: Option<RotationTicker>,
    raw_mode: bool,
    fullscreen: bool,
    mouse: bool,
}

impl MountHandle {
    /// Release everything and restore the terminal.
    pub fn unmount(mut self) {
        self.release();
    }

    /// Ticks elapsed since the last call. Always 0 once unmounted.
    pub fn take_ticks(&self) -> u64 {
        self.ticker.as_ref().map_or(0, RotationTicker::take_pending)
    }

    pub fn renderer(&mut self) -> &mut DiffRenderer<Stdout> {
        &mut self.renderer
    }

    /// Idempotent; each step is best effort.
    fn release(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
        if self.mouse {
            let _ = input::disable_mouse();
            self.mouse = false;
        }
        if self.fullscreen {
            let _ = self.renderer.exit_fullscreen();
            self.fullscreen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
            tracing::info!("unmounted");
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Take over the terminal and start the rotation ticker.
///
/// On error, whatever was already acquired is released before returning.
pub fn mount(interval: Duration) -> Result<MountHandle> {
    let mut handle = MountHandle {
        renderer: DiffRenderer::new(io::stdout()),
        ticker: None,
        raw_mode: false,
        fullscreen: false,
        mouse: false,
    };

    terminal::enable_raw_mode()?;
    handle.raw_mode = true;

    handle.renderer.enter_fullscreen()?;
    handle.fullscreen = true;

    input::enable_mouse()?;
    handle.mouse = true;

    handle.ticker = Some(RotationTicker::start(interval));

    tracing::info!(interval_ms = interval.as_millis() as u64, "mounted");
    Ok(handle)
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run until a quit action. Disconnects the visibility observer on return.
///
/// Each iteration: apply pending ticks, sync visibility, render, then wait up
/// to [`POLL_TIMEOUT`] for one input event.
pub fn run(app: &mut App, handle: &mut MountHandle) -> Result<()> {
    let page = app.page();
    let document = derived(move || page.build());

    let result = event_loop(app, handle, || document.get());
    app.disconnect();
    result
}

fn event_loop(
    app: &mut App,
    handle: &mut MountHandle,
    document: impl Fn() -> Rc<Document>,
) -> Result<()> {
    loop {
        let ticks = handle.take_ticks();
        if ticks > 0 {
            app.on_tick(ticks);
        }

        let mut doc = document();
        if app.sync_visibility(&doc) > 0 {
            // Entrance styling changed
            doc = document();
        }
        handle.renderer().render(&app.frame(&doc))?;

        let Some(event) = input::poll_event(POLL_TIMEOUT)? else {
            continue;
        };
        let Some(action) = action_for_input(&event) else {
            continue;
        };

        tracing::trace!(?action, "input");
        let doc = document();
        if !app.apply(action, &doc) {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}
