//! Carousel Rotator - per-card current-image index
//!
//! One rotator per card list (projects, achievements). Each card is a tiny
//! state machine over `0..images`; transitions are tick-advance,
//! manual-advance and manual-retreat. There is no terminal state.
//!
//! # Pattern
//!
//! - Indexes live in one reactive map, initialized lazily to 0 on first read
//! - `tick()` advances every card that has more than one image and no video
//! - `prev()` / `next()` move a single card, wrapping at both ends
//! - Cloning a rotator shares its state (the clone is a callback handle)
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::state::carousel::{CarouselRotator, Slides};
//!
//! let rotator = CarouselRotator::new("projects", vec![Slides::images(3)]);
//! rotator.prev(0);
//! assert_eq!(rotator.index(0), 2);
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::content::CardItem;

// =============================================================================
// SLIDES
// =============================================================================

/// What the rotator needs to know about one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slides {
    pub images: usize,
    pub has_video: bool,
}

impl Slides {
    pub fn images(images: usize) -> Self {
        Self {
            images,
            has_video: false,
        }
    }

    pub fn with_video(images: usize) -> Self {
        Self {
            images,
            has_video: true,
        }
    }

    pub fn of<C: CardItem>(card: &C) -> Self {
        Self {
            images: card.images().len(),
            has_video: card.video().is_some(),
        }
    }

    /// True when the card has a live carousel (timer and manual controls).
    pub fn rotates(&self) -> bool {
        self.images > 1 && !self.has_video
    }
}

// =============================================================================
// ROTATOR
// =============================================================================

#[derive(Clone)]
pub struct CarouselRotator {
    name: &'static str,
    cards: Rc<[Slides]>,
    indexes: Signal<HashMap<usize, usize>>,
}

impl std::fmt::Debug for CarouselRotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRotator")
            .field("name", &self.name)
            .field("cards", &self.cards)
            .field("indexes", &self.indexes.get())
            .finish()
    }
}

impl CarouselRotator {
    pub fn new(name: &'static str, cards: Vec<Slides>) -> Self {
        for (card, slides) in cards.iter().enumerate() {
            if slides.images == 0 {
                tracing::warn!(carousel = name, card, "card has no images; carousel disabled");
            }
        }
        Self {
            name,
            cards: cards.into(),
            indexes: signal(HashMap::new()),
        }
    }

    /// Build a rotator over a content list.
    pub fn from_cards<C: CardItem>(name: &'static str, cards: &[C]) -> Self {
        Self::new(name, cards.iter().map(Slides::of).collect())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn slides(&self, card: usize) -> Option<Slides> {
        self.cards.get(card).copied()
    }

    /// Card ids that participate in rotation.
    pub fn rotating_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, slides)| slides.rotates())
            .map(|(card, _)| card)
            .collect()
    }

    /// Current image index for a card. Unknown or untouched cards read as 0.
    pub fn index(&self, card: usize) -> usize {
        self.indexes.get().get(&card).copied().unwrap_or(0)
    }

    /// Copy of the whole index map.
    pub fn snapshot(&self) -> HashMap<usize, usize> {
        self.indexes.get()
    }

    /// One timer tick. Returns how many cards advanced.
    pub fn tick(&self) -> usize {
        self.tick_n(1)
    }

    /// Apply `ticks` timer ticks at once. Returns how many cards advanced.
    pub fn tick_n(&self, ticks: u64) -> usize {
        if ticks == 0 {
            return 0;
        }

        let mut next = self.indexes.get();
        let mut advanced = 0;

        for (card, slides) in self.cards.iter().enumerate() {
            if !slides.rotates() {
                continue;
            }
            let step = (ticks % slides.images as u64) as usize;
            let entry = next.entry(card).or_insert(0);
            *entry = (*entry + step) % slides.images;
            advanced += 1;
        }

        if advanced > 0 {
            self.indexes.set(next);
        }
        advanced
    }

    /// Manual retreat. Returns false if the card has no carousel.
    pub fn prev(&self, card: usize) -> bool {
        self.step(card, false)
    }

    /// Manual advance. Returns false if the card has no carousel.
    pub fn next(&self, card: usize) -> bool {
        self.step(card, true)
    }

    fn step(&self, card: usize, forward: bool) -> bool {
        let Some(slides) = self.slides(card) else {
            return false;
        };
        if slides.has_video || slides.images == 0 {
            return false;
        }

        let len = slides.images;
        let mut next = self.indexes.get();
        let current = next.get(&card).copied().unwrap_or(0) % len;
        let updated = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        next.insert(card, updated);
        self.indexes.set(next);

        tracing::trace!(carousel = self.name, card, index = updated, "manual step");
        true
    }

    /// Forget all indexes (every card reads 0 again).
    pub fn reset(&self) {
        self.indexes.set(HashMap::new());
    }
}

// =============================================================================
// TESTS
// =============================================================================
