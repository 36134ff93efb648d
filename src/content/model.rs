//! Content records.
//!
//! All fields borrow `'static` data: the whole portfolio is compiled in.

use serde::Serialize;

use crate::error::{FolioError, Result};

// =============================================================================
// Cards
// =============================================================================

/// Which list a card belongs to. Selects the placeholder image on load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Project,
    Achievement,
}

/// A project or achievement entry with its own image carousel.
///
/// `images()` must be non-empty. When `video()` is present the carousel is not
/// shown and the card never rotates.
pub trait CardItem {
    const KIND: CardKind;

    fn title(&self) -> &'static str;
    fn images(&self) -> &'static [&'static str];

    fn video(&self) -> Option<&'static str> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub highlights: &'static [&'static str],
    pub images: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<&'static str>,
}

impl CardItem for Project {
    const KIND: CardKind = CardKind::Project;

    fn title(&self) -> &'static str {
        self.title
    }

    fn images(&self) -> &'static [&'static str] {
        self.images
    }

    fn video(&self) -> Option<&'static str> {
        self.video
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub award: &'static str,
    pub detail: &'static str,
    pub images: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

impl CardItem for Achievement {
    const KIND: CardKind = CardKind::Achievement;

    fn title(&self) -> &'static str {
        self.title
    }

    fn images(&self) -> &'static [&'static str] {
        self.images
    }
}

// =============================================================================
// Other records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub links: &'static [Link],
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<&'static str>,
}

/// One skills group. Categories render in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<&'static str>,
    pub period: &'static str,
    pub gpa: &'static str,
    pub location: &'static str,
    pub courses: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub heading: &'static str,
    pub pitch: &'static str,
    pub links: &'static [Link],
    pub footer: &'static str,
}

// =============================================================================
// Portfolio
// =============================================================================

/// Everything the page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub profile: &'static Profile,
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub achievements: &'static [Achievement],
    pub skills: &'static [SkillCategory],
    pub education: &'static [Education],
    pub contact: &'static Contact,
}

impl Portfolio {
    /// Check the non-empty image precondition on every card.
    pub fn validate(&self) -> Result<()> {
        check_cards(self.projects)?;
        check_cards(self.achievements)
    }

    /// JSON export of the full content.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_cards<C: CardItem>(cards: &[C]) -> Result<()> {
    for (idx, card) in cards.iter().enumerate() {
        if card.images().is_empty() {
            return Err(FolioError::invalid_content(format!(
                "{:?} card #{idx} ({:?}) has no images",
                C::KIND,
                card.title()
            )));
        }
    }
    Ok(())
}
