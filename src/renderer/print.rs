//! Whole-document output for non-interactive use.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use super::diff::{queue_attrs, to_color};
use crate::view::Document;

/// Write every line of `doc`. With `color` off only the text is written.
pub fn print_document<W: Write>(out: &mut W, doc: &Document, color: bool) -> io::Result<()> {
    for line in &doc.lines {
        if color {
            for span in &line.spans {
                out.queue(SetAttribute(Attribute::Reset))?;
                queue_attrs(out, span.style.attrs)?;
                out.queue(SetForegroundColor(to_color(span.style.fg)))?;
                out.queue(SetBackgroundColor(to_color(span.style.bg)))?;
                out.queue(Print(&span.text))?;
            }
            out.queue(SetAttribute(Attribute::Reset))?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", line.text().trim_end())?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgba, Style};
    use crate::view::{DocumentBuilder, Line};

    fn setup() -> Document {
        let mut b = DocumentBuilder::new(20);
        b.line(Line::styled("Projects", Style::fg(Rgba::rgb(0xc0, 0x84, 0xfc)).bold()));
        b.blank();
        b.line(Line::styled("tail   ", Style::default()));
        b.finish()
    }

    #[test]
    fn test_plain_output_is_text_only() {
        let mut out = Vec::new();
        print_document(&mut out, &setup(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Projects\n\ntail\n");
    }

    #[test]
    fn test_color_output_has_escapes() {
        let mut out = Vec::new();
        print_document(&mut out, &setup(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Projects"));
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.matches('\n').count(), 3);
    }
}
