//! App - the single owner of view state.
//!
//! Content, both carousel rotators, the visibility tracker and its observer,
//! scroll offset, viewport size, focused card and the image resolver all live
//! here. The page renderer only ever sees read-only [`PageProps`]; everything
//! that changes state goes through [`App::apply`] or [`App::on_tick`].
//!
//! Scroll, viewport and focus are signals, so a `derived` over [`PageInputs`]
//! only rebuilds the document when something it reads has changed.

use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::config::Config;
use crate::content::{CardKind, Portfolio};
use crate::media::ImageResolver;
use crate::renderer::{FrameBuffer, StatusBar, content_rows, paint_frame};
use crate::state::{Action, CarouselRotator, IntersectionObserver, Span, VisibilityTracker};
use crate::theme::Palette;
use crate::view::{CardRef, Document, HitTarget, PageProps, SectionId, active_section, render_page};

/// Narrowest column the page is laid out at, however small the terminal.
const MIN_CONTENT_WIDTH: u16 = 20;

/// Content column width for a terminal width.
pub fn content_width(terminal_width: u16, max_width: u16) -> u16 {
    terminal_width
        .saturating_sub(2)
        .min(max_width)
        .max(MIN_CONTENT_WIDTH)
}

// =============================================================================
// PAGE INPUTS
// =============================================================================

/// Shared handles to everything the page renderer reads.
#[derive(Clone)]
pub struct PageInputs {
    portfolio: Portfolio,
    visibility: VisibilityTracker,
    projects: CarouselRotator,
    achievements: CarouselRotator,
    resolver: Rc<ImageResolver>,
    palette: Palette,
    max_width: u16,
    viewport: Signal<(u16, u16)>,
    focus: Signal<Option<CardRef>>,
}

impl PageInputs {
    pub fn build(&self) -> Rc<Document> {
        let (width, _) = self.viewport.get();
        let props = PageProps {
            portfolio: &self.portfolio,
            visibility: &self.visibility,
            projects: &self.projects,
            achievements: &self.achievements,
            resolver: &self.resolver,
            palette: &self.palette,
            focus: self.focus.get(),
        };
        Rc::new(render_page(&props, content_width(width, self.max_width)))
    }
}

// =============================================================================
// APP
// =============================================================================

pub struct App {
    page: PageInputs,
    observer: IntersectionObserver,
    scroll: Signal<usize>,
}

impl App {
    pub fn new(portfolio: Portfolio, resolver: ImageResolver, config: &Config, viewport: (u16, u16)) -> Self {
        let visibility = VisibilityTracker::new();
        let observer = visibility.connect(config.visibility.threshold);

        let page = PageInputs {
            projects: CarouselRotator::from_cards("projects", portfolio.projects),
            achievements: CarouselRotator::from_cards("achievements", portfolio.achievements),
            portfolio,
            visibility,
            resolver: Rc::new(resolver),
            palette: Palette::for_color(config.display.color),
            max_width: config.display.max_width,
            viewport: signal(viewport),
            focus: signal(None),
        };

        tracing::debug!(
            width = viewport.0,
            height = viewport.1,
            rotating_projects = page.projects.rotating_cards().len(),
            rotating_achievements = page.achievements.rotating_cards().len(),
            "app created"
        );

        Self {
            page,
            observer,
            scroll: signal(0),
        }
    }

    /// Handles for a document `derived`.
    pub fn page(&self) -> PageInputs {
        self.page.clone()
    }

    /// Build the document now, without memoization.
    pub fn document(&self) -> Rc<Document> {
        self.page.build()
    }

    pub fn projects(&self) -> &CarouselRotator {
        &self.page.projects
    }

    pub fn achievements(&self) -> &CarouselRotator {
        &self.page.achievements
    }

    pub fn rotator(&self, kind: CardKind) -> &CarouselRotator {
        match kind {
            CardKind::Project => &self.page.projects,
            CardKind::Achievement => &self.page.achievements,
        }
    }

    pub fn visibility(&self) -> &VisibilityTracker {
        &self.page.visibility
    }

    pub fn scroll(&self) -> usize {
        self.scroll.get()
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.page.viewport.get()
    }

    pub fn focus(&self) -> Option<CardRef> {
        self.page.focus.get()
    }

    fn rows(&self) -> usize {
        content_rows(self.viewport().1) as usize
    }

    pub fn max_scroll(&self, doc: &Document) -> usize {
        doc.len().saturating_sub(self.rows())
    }

    fn scroll_to(&self, doc: &Document, line: i64) {
        let clamped = line.clamp(0, self.max_scroll(doc) as i64) as usize;
        if clamped != self.scroll.get() {
            self.scroll.set(clamped);
        }
    }

    // =========================================================================
    // Ticks and visibility
    // =========================================================================

    /// Apply `ticks` rotation ticks to both carousels. Returns cards advanced.
    pub fn on_tick(&self, ticks: u64) -> usize {
        let advanced = self.page.projects.tick_n(ticks) + self.page.achievements.tick_n(ticks);
        if advanced > 0 {
            tracing::trace!(ticks, advanced, "carousels rotated");
        }
        advanced
    }

    /// Re-observe section spans and check them against the viewport.
    pub fn sync_visibility(&mut self, doc: &Document) -> usize {
        self.scroll_to(doc, self.scroll() as i64);
        for (id, span) in &doc.sections {
            self.observer.observe(id.as_str(), *span);
        }
        let viewport = Span::new(self.scroll(), self.rows());
        let changed = self.observer.check(viewport);
        if changed > 0 {
            tracing::debug!(changed, scroll = viewport.start, "section visibility changed");
        }
        changed
    }

    /// Stop observing. Later `sync_visibility` calls change nothing.
    pub fn disconnect(&mut self) {
        self.observer.disconnect();
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply one action. Returns false when the app should exit.
    pub fn apply(&mut self, action: Action, doc: &Document) -> bool {
        let scroll = self.scroll() as i64;
        let page = self.rows().saturating_sub(1).max(1) as i64;

        match action {
            Action::Quit => return false,
            Action::ScrollBy(lines) => self.scroll_to(doc, scroll + lines as i64),
            Action::PageDown => self.scroll_to(doc, scroll + page),
            Action::PageUp => self.scroll_to(doc, scroll - page),
            Action::Top => self.scroll_to(doc, 0),
            Action::Bottom => self.scroll_to(doc, self.max_scroll(doc) as i64),
            Action::JumpTo(section) => {
                if let Some(span) = doc.section_span(section) {
                    self.scroll_to(doc, span.start as i64);
                }
            }
            Action::FocusNext => self.cycle_focus(doc, true),
            Action::FocusPrev => self.cycle_focus(doc, false),
            Action::CarouselPrev => self.step_focused(false),
            Action::CarouselNext => self.step_focused(true),
            Action::Click { x, y } => {
                if let Some(target) = self.frame(doc).hit_at(x, y) {
                    self.hit(target);
                }
            }
            Action::Resize { width, height } => {
                self.page.viewport.set((width, height));
                tracing::debug!(width, height, "viewport resized");
            }
        }
        true
    }

    fn cycle_focus(&self, doc: &Document, forward: bool) {
        let cards = doc.interactive_cards();
        if cards.is_empty() {
            return;
        }

        let current = self.focus().and_then(|card| cards.iter().position(|c| *c == card));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % cards.len(),
            (Some(i), false) => (i + cards.len() - 1) % cards.len(),
            (None, true) => 0,
            (None, false) => cards.len() - 1,
        };

        let card = cards[next];
        self.page.focus.set(Some(card));
        if let Some(anchor) = doc.card(card) {
            self.reveal(doc, anchor.span);
        }
    }

    /// Scroll the least amount that brings `span` into view, top first.
    fn reveal(&self, doc: &Document, span: Span) {
        let rows = self.rows();
        let scroll = self.scroll();
        if span.start < scroll {
            self.scroll_to(doc, span.start as i64);
        } else if span.end() > scroll + rows {
            let target = span.end().saturating_sub(rows).min(span.start);
            self.scroll_to(doc, target as i64);
        }
    }

    fn step_focused(&self, forward: bool) {
        let Some(card) = self.focus() else {
            return;
        };
        let rotator = self.rotator(card.kind);
        if forward {
            rotator.next(card.index);
        } else {
            rotator.prev(card.index);
        }
    }

    fn hit(&self, target: HitTarget) {
        let (card, forward) = match target {
            HitTarget::CarouselPrev(card) => (card, false),
            HitTarget::CarouselNext(card) => (card, true),
        };
        self.page.focus.set(Some(card));
        self.step_focused(forward);
    }

    // =========================================================================
    // Frame
    // =========================================================================

    pub fn active_section(&self, doc: &Document) -> SectionId {
        active_section(doc, &self.page.visibility)
    }

    pub fn status(&self, doc: &Document) -> StatusBar {
        let max = self.max_scroll(doc);
        let percent = if max == 0 { 100 } else { self.scroll() * 100 / max };
        StatusBar {
            left: format!(
                " {} · {}",
                self.page.portfolio.profile.name,
                self.active_section(doc).heading()
            ),
            right: format!("{percent:>3}% · tab focus · ←/→ slide · q quit "),
            style: self.page.palette.status_style(),
        }
    }

    /// Paint the current viewport.
    pub fn frame(&self, doc: &Document) -> FrameBuffer {
        let (width, height) = self.viewport();
        paint_frame(doc, self.scroll(), width, height, &self.status(doc))
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("scroll", &self.scroll())
            .field("viewport", &self.viewport())
            .field("focus", &self.focus())
            .field("observer", &self.observer)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
