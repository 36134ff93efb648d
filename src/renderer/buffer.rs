//! FrameBuffer - one screen of cells.
//!
//! The FrameBuffer is a 2D grid of [`Cell`]s plus the clickable regions that
//! were painted into it. [`paint_frame`] fills one from a [`Document`] at a
//! scroll offset; the diff renderer outputs it.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: every write outside the buffer is dropped.
//! - **Wide characters**: the cell after a 2-wide glyph holds `'\0'`.

use crate::types::{Cell, Rect, Style};
use crate::view::{Document, HitTarget, display_width, truncate_text};
use crate::view::text::char_width;

/// Marks the right half of a wide character.
pub const CONTINUATION: char = '\0';

// =============================================================================
// FrameBuffer
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    hits: Vec<(Rect, HitTarget)>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            hits: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set one cell. Returns false if out of bounds.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Fill a whole row with one style.
    pub fn fill_row(&mut self, y: u16, style: Style) {
        for x in 0..self.width {
            self.set_cell(x, y, Cell::styled(' ', style));
        }
    }

    /// Draw text starting at `(x, y)`, clipped to the buffer.
    ///
    /// Returns the column after the last drawn cell.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            self.set_cell(col, y, Cell::styled(ch, style));
            if w == 2 {
                self.set_cell(col + 1, y, Cell::styled(CONTINUATION, style));
            }
            col += w;
        }
        col
    }

    pub fn add_hit(&mut self, rect: Rect, target: HitTarget) {
        self.hits.push((rect, target));
    }

    pub fn hits(&self) -> &[(Rect, HitTarget)] {
        &self.hits
    }

    /// Topmost hit region containing the point.
    pub fn hit_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    /// Row contents as text, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .filter(|ch| *ch != CONTINUATION)
            .collect()
    }
}

// =============================================================================
// Painting
// =============================================================================

/// Bottom row content.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub left: String,
    pub right: String,
    pub style: Style,
}

/// Paint the visible slice of `doc` into a `width x height` frame.
///
/// The document column is centered horizontally. The last row holds the
/// status bar when there is room for at least one content row above it.
pub fn paint_frame(doc: &Document, scroll: usize, width: u16, height: u16, status: &StatusBar) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    if width == 0 || height == 0 {
        return frame;
    }

    let rows = content_rows(height);
    let left = width.saturating_sub(doc.width) / 2;

    for row in 0..rows {
        let Some(line) = doc.lines.get(scroll + row as usize) else {
            break;
        };

        let mut col = left;
        for span in &line.spans {
            col = frame.draw_text(col, row, &span.text, span.style);
        }
        for hit in &line.hits {
            let x = left + hit.start;
            if x < width {
                let w = hit.width.min(width - x);
                frame.add_hit(Rect::new(x, row, w, 1), hit.target);
            }
        }
    }

    if rows < height {
        let y = height - 1;
        frame.fill_row(y, status.style);
        let right_width = display_width(&status.right);
        let left_room = width.saturating_sub(right_width + 1);
        let left_text = truncate_text(&status.left, left_room);
        frame.draw_text(0, y, &left_text, status.style);
        if right_width < width {
            frame.draw_text(width - right_width, y, &status.right, status.style);
        }
    }

    frame
}

/// Document rows that fit above the status bar.
pub fn content_rows(height: u16) -> u16 {
    if height > 1 { height - 1 } else { height }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CardRef, DocumentBuilder, Line};

    fn status() -> StatusBar {
        StatusBar {
            left: " folio · hero".to_string(),
            right: "q quit ".to_string(),
            style: Style::default().inverse(),
        }
    }

    fn setup() -> Document {
        let mut b = DocumentBuilder::new(10);
        for i in 0..20 {
            b.line(Line::styled(format!("line {i}"), Style::default()));
        }
        b.finish()
    }

    #[test]
    fn test_draw_text_clips() {
        let mut frame = FrameBuffer::new(5, 1);
        let end = frame.draw_text(2, 0, "abcdef", Style::default());
        assert_eq!(end, 5);
        assert_eq!(frame.row_text(0), "  abc");
        assert_eq!(frame.draw_text(0, 3, "x", Style::default()), 1);
    }

    #[test]
    fn test_wide_char_uses_continuation() {
        let mut frame = FrameBuffer::new(4, 1);
        frame.draw_text(0, 0, "日x", Style::default());
        assert_eq!(frame.get(0, 0).unwrap().ch, '日');
        assert_eq!(frame.get(1, 0).unwrap().ch, CONTINUATION);
        assert_eq!(frame.get(2, 0).unwrap().ch, 'x');
        assert_eq!(frame.row_text(0), "日x ");
    }

    #[test]
    fn test_paint_scrolls_and_centers() {
        let doc = setup();
        let frame = paint_frame(&doc, 5, 30, 4, &status());

        assert_eq!(frame.row_text(0).trim(), "line 5");
        assert!(frame.row_text(0).starts_with(&format!("{}line 5", " ".repeat(10))));
        assert_eq!(frame.row_text(2).trim(), "line 7");
        assert!(frame.row_text(3).starts_with(" folio · hero"));
        assert!(frame.row_text(3).ends_with("q quit "));
    }

    #[test]
    fn test_paint_past_end_leaves_blank_rows() {
        let doc = setup();
        let frame = paint_frame(&doc, 19, 12, 4, &status());
        assert_eq!(frame.row_text(0).trim(), "line 19");
        assert_eq!(frame.row_text(1).trim(), "");
    }

    #[test]
    fn test_hits_are_translated_to_screen() {
        let card = CardRef::project(0);
        let mut b = DocumentBuilder::new(10);
        b.blank();
        let mut line = Line::styled("│ ", Style::default());
        line.push_hit("[‹]", Style::default(), HitTarget::CarouselPrev(card));
        b.line(line);
        let doc = b.finish();

        // Centered in 20 columns: offset 5. Scrolled by 1: row 0.
        let frame = paint_frame(&doc, 1, 20, 3, &status());
        assert_eq!(frame.hit_at(6, 0), None);
        assert_eq!(frame.hit_at(7, 0), Some(HitTarget::CarouselPrev(card)));
        assert_eq!(frame.hit_at(9, 0), Some(HitTarget::CarouselPrev(card)));
        assert_eq!(frame.hit_at(10, 0), None);
        assert_eq!(frame.hit_at(7, 1), None);
    }

    #[test]
    fn test_zero_size_frame() {
        let frame = paint_frame(&setup(), 0, 0, 0, &status());
        assert_eq!(frame.width(), 0);
        assert!(frame.hits().is_empty());
    }
}
