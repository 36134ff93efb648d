//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If the previous frame has the same size and the cell is unchanged: skip
//!    - Otherwise: move (if not sequential), restyle (if changed), print
//! 3. Flush once
//! 4. Store the current frame as previous for the next comparison

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use super::buffer::{CONTINUATION, FrameBuffer};
use crate::types::{Attr, Cell, Rgba};

/// Map a cell color to a crossterm color.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

/// Queue attribute commands for a set of attrs. Call after a reset.
pub fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    const MAP: [(Attr, Attribute); 5] = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ];
    for (flag, attribute) in MAP {
        if attrs.contains(flag) {
            out.queue(SetAttribute(attribute))?;
        }
    }
    Ok(())
}

// =============================================================================
// Cell writer
// =============================================================================

/// Tracks cursor and style so only changed state is emitted.
#[derive(Debug, Default)]
struct CellWriter {
    last_pos: Option<(u16, u16)>,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl CellWriter {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn write<W: Write>(&mut self, out: &mut W, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if cell.ch == CONTINUATION {
            self.last_pos = Some((x, y));
            return Ok(());
        }

        let sequential = matches!(self.last_pos, Some((lx, ly)) if ly == y && lx + 1 == x);
        if !sequential {
            out.queue(cursor::MoveTo(x, y))?;
        }

        if cell.attrs != self.last_attrs {
            out.queue(SetAttribute(Attribute::Reset))?;
            queue_attrs(out, cell.attrs)?;
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }
        if self.last_fg != Some(cell.fg) {
            out.queue(SetForegroundColor(to_color(cell.fg)))?;
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            out.queue(SetBackgroundColor(to_color(cell.bg)))?;
            self.last_bg = Some(cell.bg);
        }

        out.queue(Print(cell.ch))?;
        // Wide glyphs advance two columns; the continuation cell is skipped.
        self.last_pos = Some((x, y));
        Ok(())
    }
}

// =============================================================================
// DiffRenderer
// =============================================================================

pub struct DiffRenderer<W: Write> {
    out: W,
    writer: CellWriter,
    previous: Option<FrameBuffer>,
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            writer: CellWriter::default(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<bool> {
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == frame.width() && prev.height() == frame.height());

        self.out.queue(terminal::BeginSynchronizedUpdate)?;
        if !same_size {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        self.writer.reset();

        let mut changed = 0usize;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let Some(cell) = frame.get(x, y) else {
                    continue;
                };
                let unchanged = same_size
                    && self
                        .previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_some_and(|prev| prev == cell);
                if unchanged {
                    continue;
                }
                self.writer.write(&mut self.out, x, y, cell)?;
                changed += 1;
            }
        }

        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EndSynchronizedUpdate)?;
        self.out.flush()?;

        tracing::trace!(changed, full = !same_size, "frame rendered");
        self.previous = Some(frame.clone());
        Ok(changed > 0)
    }

    /// Next render redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter the alternate screen with the cursor hidden.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the main screen and the cursor.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    fn setup() -> DiffRenderer<Vec<u8>> {
        DiffRenderer::new(Vec::new())
    }

    fn frame_with(text: &str) -> FrameBuffer {
        let mut frame = FrameBuffer::new(10, 2);
        frame.draw_text(0, 0, text, Style::default());
        frame
    }

    fn output(renderer: &DiffRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.get_ref()).into_owned()
    }

    #[test]
    fn test_first_render_is_full() {
        let mut renderer = setup();
        assert!(!renderer.has_previous());

        assert!(renderer.render(&frame_with("hello")).unwrap());
        assert!(renderer.has_previous());
        assert!(output(&renderer).contains("hello"));
    }

    #[test]
    fn test_unchanged_frame_writes_no_cells() {
        let mut renderer = setup();
        let frame = frame_with("hello");
        renderer.render(&frame).unwrap();
        assert!(!renderer.render(&frame).unwrap());
    }

    #[test]
    fn test_only_changed_cells_are_written() {
        let mut renderer = setup();
        renderer.render(&frame_with("hello")).unwrap();
        let before = renderer.get_ref().len();

        renderer.render(&frame_with("hellX")).unwrap();
        let delta = String::from_utf8_lossy(&renderer.get_ref()[before..]).into_owned();
        assert!(delta.contains('X'));
        assert!(!delta.contains("hell"));
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut renderer = setup();
        renderer.render(&frame_with("hello")).unwrap();
        let before = renderer.get_ref().len();

        let mut bigger = FrameBuffer::new(12, 2);
        bigger.draw_text(0, 0, "hello", Style::default());
        renderer.render(&bigger).unwrap();
        let delta = String::from_utf8_lossy(&renderer.get_ref()[before..]).into_owned();
        assert!(delta.contains("hello"));
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = setup();
        renderer.render(&frame_with("a")).unwrap();
        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_color(Rgba::rgb(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
