//! Document - the laid-out page
//!
//! A [`Document`] is a column of styled [`Line`]s at a fixed content width,
//! plus the metadata the rest of the app needs:
//!
//! - section spans (what the visibility observer watches)
//! - card spans (what focus scrolls into view)
//! - hit regions on lines (clickable carousel controls)
//!
//! Layout never depends on visibility or focus, only styles do, so section
//! spans are stable while scrolling.

use crate::content::CardKind;
use crate::state::Span;
use crate::types::Style;

use super::section::SectionId;
use super::text::{display_width, wrap_text};

// =============================================================================
// TYPES
// =============================================================================

/// A card identified by list and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRef {
    pub kind: CardKind,
    pub index: usize,
}

impl CardRef {
    pub const fn project(index: usize) -> Self {
        Self {
            kind: CardKind::Project,
            index,
        }
    }

    pub const fn achievement(index: usize) -> Self {
        Self {
            kind: CardKind::Achievement,
            index,
        }
    }
}

/// What a click on a hit region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    CarouselPrev(CardRef),
    CarouselNext(CardRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

/// Clickable columns `start..start + width` on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHit {
    pub start: u16,
    pub width: u16,
    pub target: HitTarget,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<StyledSpan>,
    pub hits: Vec<LineHit>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut line = Self::new();
        line.push(text, style);
        line
    }

    /// Append text; returns the column where it starts.
    pub fn push(&mut self, text: impl Into<String>, style: Style) -> u16 {
        let start = self.width();
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(StyledSpan { text, style });
        }
        start
    }

    /// Append text that triggers `target` when clicked.
    pub fn push_hit(&mut self, text: impl Into<String>, style: Style, target: HitTarget) {
        let text = text.into();
        let width = display_width(&text);
        let start = self.push(text, style);
        self.hits.push(LineHit {
            start,
            width,
            target,
        });
    }

    pub fn width(&self) -> u16 {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn hit_at(&self, column: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .find(|hit| column >= hit.start && column < hit.start + hit.width)
            .map(|hit| hit.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAnchor {
    pub card: CardRef,
    pub span: Span,
    /// Has live carousel controls (more than one image, no video).
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub width: u16,
    pub lines: Vec<Line>,
    pub sections: Vec<(SectionId, Span)>,
    pub cards: Vec<CardAnchor>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn section_span(&self, id: SectionId) -> Option<Span> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, span)| *span)
    }

    pub fn card(&self, card: CardRef) -> Option<&CardAnchor> {
        self.cards.iter().find(|anchor| anchor.card == card)
    }

    /// Interactive cards in page order.
    pub fn interactive_cards(&self) -> Vec<CardRef> {
        self.cards
            .iter()
            .filter(|anchor| anchor.interactive)
            .map(|anchor| anchor.card)
            .collect()
    }

    pub fn hit_at(&self, line: usize, column: u16) -> Option<HitTarget> {
        self.lines.get(line)?.hit_at(column)
    }

    /// Unstyled text, one line per row.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text().trim_end());
            out.push('\n');
        }
        out
    }
}

// =============================================================================
// BUILDER
// =============================================================================

pub struct DocumentBuilder {
    doc: Document,
    open_section: Option<(SectionId, usize)>,
    open_card: Option<(CardRef, bool, usize)>,
}

impl DocumentBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            doc: Document {
                width,
                ..Document::default()
            },
            open_section: None,
            open_card: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.doc.width
    }

    pub fn line_count(&self) -> usize {
        self.doc.lines.len()
    }

    pub fn begin_section(&mut self, id: SectionId) {
        self.end_section();
        self.open_section = Some((id, self.line_count()));
    }

    pub fn end_section(&mut self) {
        if let Some((id, start)) = self.open_section.take() {
            let span = Span::new(start, self.line_count() - start);
            self.doc.sections.push((id, span));
        }
    }

    pub fn begin_card(&mut self, card: CardRef, interactive: bool) {
        self.end_card();
        self.open_card = Some((card, interactive, self.line_count()));
    }

    pub fn end_card(&mut self) {
        if let Some((card, interactive, start)) = self.open_card.take() {
            self.doc.cards.push(CardAnchor {
                card,
                span: Span::new(start, self.line_count() - start),
                interactive,
            });
        }
    }

    pub fn line(&mut self, line: Line) {
        self.doc.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.doc.lines.push(Line::new());
    }

    /// Wrapped paragraph. Each row is `prefix` + text.
    pub fn paragraph(&mut self, prefix: &Line, text: &str, style: Style) {
        let avail = self.doc.width.saturating_sub(prefix.width()).max(1);
        for row in wrap_text(text, avail) {
            let mut line = prefix.clone();
            line.push(row, style);
            self.line(line);
        }
    }

    /// Wrapped paragraph with a bullet on the first row and a hanging indent.
    pub fn bullet(&mut self, prefix: &Line, marker: &str, marker_style: Style, text: &str, style: Style) {
        let marker = format!("{marker} ");
        let indent = " ".repeat(display_width(&marker) as usize);
        let avail = self
            .doc
            .width
            .saturating_sub(prefix.width() + display_width(&marker))
            .max(1);

        for (i, row) in wrap_text(text, avail).into_iter().enumerate() {
            let mut line = prefix.clone();
            if i == 0 {
                line.push(marker.clone(), marker_style);
            } else {
                line.push(indent.clone(), Style::default());
            }
            line.push(row, style);
            self.line(line);
        }
    }

    /// Wrapped text, each row centered in the content width.
    pub fn centered(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.doc.width) {
            let pad = self.doc.width.saturating_sub(display_width(&row)) / 2;
            let mut line = Line::new();
            line.push(" ".repeat(pad as usize), Style::default());
            line.push(row, style);
            self.line(line);
        }
    }

    /// Center an already built line.
    pub fn center_line(&mut self, mut line: Line) {
        let pad = self.doc.width.saturating_sub(line.width()) / 2;
        if pad > 0 {
            line.spans.insert(
                0,
                StyledSpan {
                    text: " ".repeat(pad as usize),
                    style: Style::default(),
                },
            );
            for hit in &mut line.hits {
                hit.start += pad;
            }
        }
        self.line(line);
    }

    pub fn finish(mut self) -> Document {
        self.end_card();
        self.end_section();
        self.doc
    }
}
