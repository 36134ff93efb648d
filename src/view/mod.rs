//! View - content + state to styled lines
//!
//! - **Section** - page section ids, headings and entrance rules
//! - **Text** - display width, wrapping, truncation, chip flow
//! - **Document** - laid-out lines with section/card spans and hit regions
//! - **Page** - the portfolio page renderer

pub mod document;
pub mod page;
pub mod section;
pub mod text;

pub use document::{CardAnchor, CardRef, Document, DocumentBuilder, HitTarget, Line, StyledSpan};
pub use page::{PageProps, active_section, render_page};
pub use section::SectionId;
pub use text::{display_width, truncate_text, wrap_text};
