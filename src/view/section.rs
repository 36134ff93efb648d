//! Page sections.

use serde::Serialize;

/// A named region of the page tracked for viewport visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Experience,
    Projects,
    Achievements,
    Skills,
    Education,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Identifier used as the visibility map key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Experience => "Work Experience",
            SectionId::Projects => "Projects",
            SectionId::Achievements => "Achievements & Recognition",
            SectionId::Skills => "Technical Skills",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    /// Sections that fade in on entrance. Contact is always fully styled.
    pub const fn has_entrance(&self) -> bool {
        !matches!(self, SectionId::Contact)
    }

    pub fn parse(id: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
