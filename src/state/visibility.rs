//! Visibility - which sections are on screen
//!
//! Two pieces:
//!
//! - [`IntersectionObserver`] watches named line spans against a viewport and
//!   dispatches entries to one registered callback whenever a target's
//!   visible/hidden state changes (every target on the first check).
//! - [`VisibilityTracker`] owns the reactive `section -> visible` map that the
//!   view reads to pick between entrance and pre-entrance styling.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::state::visibility::{Span, VisibilityTracker};
//!
//! let tracker = VisibilityTracker::new();
//! let mut observer = tracker.connect(0.1);
//! observer.observe("hero", Span::new(0, 20));
//! observer.check(Span::new(0, 24));
//! assert!(tracker.is_visible("hero"));
//!
//! observer.disconnect(); // no callbacks after this
//! ```

use std::collections::HashMap;

use spark_signals::{Signal, signal};

// =============================================================================
// GEOMETRY
// =============================================================================

/// A vertical run of document lines: `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }
}

/// Fraction of `target` that lies inside `viewport` (0.0..=1.0).
///
/// A zero-height target has ratio 0.
pub fn intersection_ratio(target: Span, viewport: Span) -> f32 {
    if target.len == 0 {
        return 0.0;
    }
    let start = target.start.max(viewport.start);
    let end = target.end().min(viewport.end());
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / target.len as f32
}

// =============================================================================
// OBSERVER
// =============================================================================

/// One observer notification for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f32,
    pub is_intersecting: bool,
}

pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

pub struct IntersectionObserver {
    threshold: f32,
    targets: Vec<(String, Span)>,
    last: HashMap<String, bool>,
    callback: Option<IntersectionCallback>,
}

impl IntersectionObserver {
    /// Create an observer. `threshold` is clamped to `0.0..=1.0`; 0 means any
    /// overlap counts.
    pub fn new(threshold: f32, callback: impl FnMut(&[IntersectionEntry]) + 'static) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            targets: Vec::new(),
            last: HashMap::new(),
            callback: Some(Box::new(callback)),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_connected(&self) -> bool {
        self.callback.is_some()
    }

    /// Start watching a target, or move an already watched one.
    ///
    /// Ignored after [`disconnect`](Self::disconnect).
    pub fn observe(&mut self, id: impl Into<String>, span: Span) {
        if !self.is_connected() {
            return;
        }
        let id = id.into();
        match self.targets.iter_mut().find(|(target, _)| *target == id) {
            Some((_, existing)) => *existing = span,
            None => self.targets.push((id, span)),
        }
    }

    pub fn unobserve(&mut self, id: &str) {
        self.targets.retain(|(target, _)| target != id);
        self.last.remove(id);
    }

    pub fn targets(&self) -> impl Iterator<Item = (&str, Span)> {
        self.targets.iter().map(|(id, span)| (id.as_str(), *span))
    }

    /// Compare every target against the viewport and dispatch changes.
    ///
    /// Returns the number of entries dispatched.
    pub fn check(&mut self, viewport: Span) -> usize {
        let Some(callback) = self.callback.as_mut() else {
            return 0;
        };

        let mut entries = Vec::new();
        for (id, span) in &self.targets {
            let ratio = intersection_ratio(*span, viewport);
            let visible = ratio > 0.0 && ratio >= self.threshold;
            if self.last.get(id) != Some(&visible) {
                self.last.insert(id.clone(), visible);
                entries.push(IntersectionEntry {
                    target: id.clone(),
                    ratio,
                    is_intersecting: visible,
                });
            }
        }

        if !entries.is_empty() {
            callback(&entries);
        }
        entries.len()
    }

    /// Stop observing everything and drop the callback.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.last.clear();
        self.callback = None;
    }
}

impl std::fmt::Debug for IntersectionObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntersectionObserver")
            .field("threshold", &self.threshold)
            .field("targets", &self.targets)
            .field("connected", &self.is_connected())
            .finish()
    }
}

// =============================================================================
// TRACKER
// =============================================================================

/// Reactive `section id -> visible` map.
#[derive(Clone)]
pub struct VisibilityTracker {
    visible: Signal<HashMap<String, bool>>,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self {
            visible: signal(HashMap::new()),
        }
    }

    /// Create an observer whose callback writes into this tracker.
    pub fn connect(&self, threshold: f32) -> IntersectionObserver {
        let visible = self.visible.clone();
        IntersectionObserver::new(threshold, move |entries| {
            let mut next = visible.get();
            for entry in entries {
                next.insert(entry.target.clone(), entry.is_intersecting);
            }
            visible.set(next);
        })
    }

    /// Unknown sections are not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get().get(id).copied().unwrap_or(false)
    }

    /// Ids currently visible, sorted.
    pub fn visible_sections(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .visible
            .get()
            .into_iter()
            .filter_map(|(id, visible)| visible.then_some(id))
            .collect();
        ids.sort();
        ids
    }

    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.visible.get()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.get().is_empty()
    }

    /// Drop every section (view discarded).
    pub fn clear(&self) {
        self.visible.set(HashMap::new());
    }
}

// =============================================================================
// TESTS
// =============================================================================
