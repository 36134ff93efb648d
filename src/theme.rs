//! Color palette.
//!
//! Two palettes: `night` (truecolor, one accent per section) and `plain`
//! (terminal default colors everywhere, attributes only).

use crate::types::{Attr, Rgba, Style};
use crate::view::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: Rgba,
    pub text: Rgba,
    pub muted: Rgba,
    pub faint: Rgba,
    pub border: Rgba,
    pub blue: Rgba,
    pub purple: Rgba,
    pub yellow: Rgba,
    pub green: Rgba,
    pub orange: Rgba,
    pub link: Rgba,
}

impl Palette {
    pub fn night() -> Self {
        Self {
            heading: Rgba::WHITE,
            text: Rgba::rgb(0xd1, 0xd5, 0xdb),
            muted: Rgba::rgb(0x9c, 0xa3, 0xaf),
            faint: Rgba::rgb(0x6b, 0x72, 0x80),
            border: Rgba::rgb(0x47, 0x55, 0x69),
            blue: Rgba::rgb(0x60, 0xa5, 0xfa),
            purple: Rgba::rgb(0xc0, 0x84, 0xfc),
            yellow: Rgba::rgb(0xfa, 0xcc, 0x15),
            green: Rgba::rgb(0x4a, 0xde, 0x80),
            orange: Rgba::rgb(0xfb, 0x92, 0x3c),
            link: Rgba::rgb(0x93, 0xc5, 0xfd),
        }
    }

    pub fn plain() -> Self {
        let d = Rgba::TERMINAL_DEFAULT;
        Self {
            heading: d,
            text: d,
            muted: d,
            faint: d,
            border: d,
            blue: d,
            purple: d,
            yellow: d,
            green: d,
            orange: d,
            link: d,
        }
    }

    pub fn for_color(color: bool) -> Self {
        if color { Self::night() } else { Self::plain() }
    }

    /// Section accent color.
    pub fn accent(&self, section: SectionId) -> Rgba {
        match section {
            SectionId::Hero | SectionId::Experience | SectionId::Contact => self.blue,
            SectionId::Projects => self.purple,
            SectionId::Achievements => self.yellow,
            SectionId::Skills => self.green,
            SectionId::Education => self.orange,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::fg(self.muted)
    }

    pub fn faint_style(&self) -> Style {
        Style::fg(self.faint)
    }

    pub fn heading_style(&self) -> Style {
        Style::fg(self.heading).bold()
    }

    pub fn accent_style(&self, section: SectionId) -> Style {
        Style::fg(self.accent(section)).bold()
    }

    pub fn link_style(&self) -> Style {
        Style::fg(self.link).underline()
    }

    /// Status bar: inverse when there are no colors to pick from.
    pub fn status_style(&self) -> Style {
        if self.border.is_terminal_default() {
            return Style::default().inverse();
        }
        Style {
            fg: self.heading,
            bg: self.border,
            attrs: Attr::NONE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_per_section() {
        let palette = Palette::night();
        assert_eq!(palette.accent(SectionId::Projects), palette.purple);
        assert_eq!(palette.accent(SectionId::Achievements), palette.yellow);
        assert_eq!(palette.accent(SectionId::Skills), palette.green);
        assert_eq!(palette.accent(SectionId::Education), palette.orange);
    }

    #[test]
    fn test_plain_status_is_inverse() {
        assert!(Palette::plain().status_style().attrs.contains(Attr::INVERSE));
        assert_eq!(Palette::night().status_style().bg, Palette::night().border);
    }

    #[test]
    fn test_plain_uses_terminal_default() {
        let palette = Palette::for_color(false);
        assert!(palette.accent(SectionId::Hero).is_terminal_default());
        assert!(palette.text.is_terminal_default());
    }
}
