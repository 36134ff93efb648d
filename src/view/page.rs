//! Page rendering.
//!
//! [`render_page`] turns the content plus current view state into a
//! [`Document`]. It only reads: visibility, carousel indexes and focus come in
//! through [`PageProps`], and every change goes back through app actions.

use crate::content::{Achievement, CardItem, CardKind, Portfolio, Project};
use crate::media::ImageResolver;
use crate::state::{CarouselRotator, Slides, VisibilityTracker};
use crate::theme::Palette;
use crate::types::Style;

use super::document::{CardRef, Document, DocumentBuilder, HitTarget, Line};
use super::section::SectionId;
use super::text::{display_width, flow_tokens, truncate_text};

/// Read-only inputs for one page render.
#[derive(Clone, Copy)]
pub struct PageProps<'a> {
    pub portfolio: &'a Portfolio,
    pub visibility: &'a VisibilityTracker,
    pub projects: &'a CarouselRotator,
    pub achievements: &'a CarouselRotator,
    pub resolver: &'a ImageResolver,
    pub palette: &'a Palette,
    pub focus: Option<CardRef>,
}

impl PageProps<'_> {
    fn rotator(&self, kind: CardKind) -> &CarouselRotator {
        match kind {
            CardKind::Project => self.projects,
            CardKind::Achievement => self.achievements,
        }
    }

    fn entered(&self, section: SectionId) -> bool {
        !section.has_entrance() || self.visibility.is_visible(section.as_str())
    }
}

/// The first section in page order that is currently visible.
pub fn active_section(doc: &Document, visibility: &VisibilityTracker) -> SectionId {
    doc.sections
        .iter()
        .map(|(id, _)| *id)
        .find(|id| visibility.is_visible(id.as_str()))
        .unwrap_or(SectionId::Hero)
}

// =============================================================================
// PEN - section-scoped styles
// =============================================================================

/// Palette styles for one section, faded until the section has entered.
#[derive(Clone, Copy)]
struct Pen<'a> {
    palette: &'a Palette,
    section: SectionId,
    entered: bool,
}

impl Pen<'_> {
    fn tone(&self, style: Style) -> Style {
        if self.entered { style } else { style.faded() }
    }

    fn text(&self) -> Style {
        self.tone(self.palette.text_style())
    }

    fn muted(&self) -> Style {
        self.tone(self.palette.muted_style())
    }

    fn faint(&self) -> Style {
        self.tone(self.palette.faint_style())
    }

    fn heading(&self) -> Style {
        self.tone(self.palette.heading_style())
    }

    fn accent(&self) -> Style {
        self.tone(self.palette.accent_style(self.section))
    }

    fn accent_plain(&self) -> Style {
        self.tone(Style::fg(self.palette.accent(self.section)))
    }

    fn link(&self) -> Style {
        self.tone(self.palette.link_style())
    }

    fn border(&self) -> Style {
        self.tone(Style::fg(self.palette.border))
    }
}

// =============================================================================
// PAGE
// =============================================================================

pub fn render_page(props: &PageProps<'_>, width: u16) -> Document {
    let mut b = DocumentBuilder::new(width);

    hero(&mut b, props);
    experience(&mut b, props);
    projects(&mut b, props);
    achievements(&mut b, props);
    skills(&mut b, props);
    education(&mut b, props);
    contact(&mut b, props);
    b.end_section();

    footer(&mut b, props);
    b.finish()
}

fn pen<'a>(props: &PageProps<'a>, section: SectionId) -> Pen<'a> {
    Pen {
        palette: props.palette,
        section,
        entered: props.entered(section),
    }
}

fn section_heading(b: &mut DocumentBuilder, pen: &Pen<'_>, title: &str) {
    b.blank();
    b.centered(&format!("◆ {title}"), pen.accent());
    let rule = "─".repeat(display_width(title) as usize + 2);
    b.centered(&rule, pen.border());
    b.blank();
}

fn chips(b: &mut DocumentBuilder, prefix: &Line, items: &[&str], style: Style) {
    let tokens: Vec<String> = items.iter().map(|item| format!("[{item}]")).collect();
    let avail = b.width().saturating_sub(prefix.width()).max(1);
    for row in flow_tokens(&tokens, avail) {
        let mut line = prefix.clone();
        for (i, idx) in row.into_iter().enumerate() {
            if i > 0 {
                line.push(" ", Style::default());
            }
            line.push(tokens[idx].clone(), style);
        }
        b.line(line);
    }
}

fn hero(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let profile = props.portfolio.profile;
    let pen = pen(props, SectionId::Hero);

    b.begin_section(SectionId::Hero);
    b.blank();
    b.blank();
    b.centered(profile.name, pen.heading());
    b.centered(&"━".repeat(display_width(profile.name) as usize), pen.accent_plain());
    b.blank();
    b.centered(profile.headline, pen.text());
    b.centered(profile.subtitle, pen.muted());
    b.blank();
    b.centered(profile.tagline, pen.muted());
    b.blank();

    let mut links = Line::new();
    for (i, link) in profile.links.iter().enumerate() {
        if i > 0 {
            links.push("  ·  ", pen.faint());
        }
        links.push(link.label, pen.link());
    }
    b.center_line(links);
    b.blank();

    for stat in profile.stats {
        let mut line = Line::new();
        line.push(format!("{}: ", stat.label), pen.muted());
        line.push(stat.value, pen.heading());
        if let Some(note) = stat.note {
            line.push(format!(" ({note})"), pen.faint());
        }
        b.center_line(line);
    }
    b.blank();
}

fn experience(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let pen = pen(props, SectionId::Experience);

    b.begin_section(SectionId::Experience);
    section_heading(b, &pen, SectionId::Experience.heading());

    let prefix = Line::styled("│ ", pen.border());
    for job in props.portfolio.experience {
        let mut title = prefix.clone();
        title.push(job.role, pen.accent());
        b.line(title);

        let mut company = prefix.clone();
        company.push(job.company, pen.text());
        company.push("  ·  ", pen.faint());
        company.push(job.period, pen.muted());
        b.line(company);

        let mut location = prefix.clone();
        location.push(job.location, pen.faint());
        b.line(location);

        if let Some(url) = job.certificate_link {
            let mut cert = prefix.clone();
            cert.push("Certificate: ", pen.muted());
            let avail = b.width().saturating_sub(cert.width());
            cert.push(truncate_text(url, avail), pen.link());
            b.line(cert);
        }

        b.line(prefix.clone());
        for item in job.achievements {
            b.bullet(&prefix, "▹", pen.accent_plain(), item, pen.text());
        }
        b.line(prefix.clone());
        chips(b, &prefix, job.tech, pen.accent_plain());
        b.blank();
    }
}

fn card_prefix(pen: &Pen<'_>, focused: bool) -> Line {
    if focused {
        Line::styled("┃ ", pen.accent())
    } else {
        Line::styled("│ ", pen.border())
    }
}

/// Media block for one card: video, or the current image with its controls.
fn media<C: CardItem>(
    b: &mut DocumentBuilder,
    props: &PageProps<'_>,
    pen: &Pen<'_>,
    prefix: &Line,
    card: CardRef,
    item: &C,
) {
    if let Some(video) = item.video() {
        let mut line = prefix.clone();
        line.push("▶ Video: ", pen.accent_plain());
        line.push(video, pen.muted());
        b.line(line);
        return;
    }

    let images = item.images();
    if images.is_empty() {
        return;
    }
    let index = props.rotator(card.kind).index(card.index) % images.len();
    let resolved = props.resolver.resolve(images[index], card.kind);

    let mut alt = prefix.clone();
    alt.push("▣ ", pen.accent_plain());
    let avail = b.width().saturating_sub(alt.width());
    let label = format!("{} - Image {}", item.title(), index + 1);
    alt.push(truncate_text(&label, avail), pen.text());
    b.line(alt);

    let mut src = prefix.clone();
    src.push("  ", Style::default());
    let avail = b.width().saturating_sub(src.width());
    src.push(truncate_text(resolved.src(), avail), pen.faint());
    b.line(src);

    if images.len() > 1 {
        let control = if props.focus == Some(card) {
            pen.accent()
        } else {
            pen.muted()
        };
        let mut line = prefix.clone();
        line.push_hit("[‹]", control, HitTarget::CarouselPrev(card));
        line.push(" ", Style::default());
        for i in 0..images.len() {
            if i > 0 {
                line.push(" ", Style::default());
            }
            if i == index {
                line.push("━━", pen.heading());
            } else {
                line.push("•", pen.faint());
            }
        }
        line.push(" ", Style::default());
        line.push_hit("[›]", control, HitTarget::CarouselNext(card));
        line.push(format!("  {}/{}", index + 1, images.len()), pen.faint());
        b.line(line);
    }
}

fn project_card(b: &mut DocumentBuilder, props: &PageProps<'_>, pen: &Pen<'_>, index: usize, project: &Project) {
    let card = CardRef::project(index);
    let focused = props.focus == Some(card);
    let prefix = card_prefix(pen, focused);

    b.begin_card(card, Slides::of(project).rotates());

    let mut title = prefix.clone();
    let avail = b.width().saturating_sub(title.width());
    title.push(truncate_text(project.title, avail), pen.accent());
    b.line(title);

    let mut github = prefix.clone();
    github.push("↗ ", pen.faint());
    let avail = b.width().saturating_sub(github.width());
    github.push(truncate_text(project.github, avail), pen.link());
    b.line(github);
    b.line(prefix.clone());

    media(b, props, pen, &prefix, card, project);
    b.line(prefix.clone());

    b.paragraph(&prefix, project.description, pen.text());
    b.line(prefix.clone());

    let mut label = prefix.clone();
    label.push("Key Highlights:", pen.muted());
    b.line(label);
    for highlight in project.highlights {
        b.bullet(&prefix, "•", pen.accent_plain(), highlight, pen.muted());
    }
    b.line(prefix.clone());
    chips(b, &prefix, project.tech, pen.accent_plain());

    b.end_card();
    b.blank();
}

fn projects(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let pen = pen(props, SectionId::Projects);

    b.begin_section(SectionId::Projects);
    section_heading(b, &pen, SectionId::Projects.heading());
    for (index, project) in props.portfolio.projects.iter().enumerate() {
        project_card(b, props, &pen, index, project);
    }
}

fn achievement_card(
    b: &mut DocumentBuilder,
    props: &PageProps<'_>,
    pen: &Pen<'_>,
    index: usize,
    achievement: &Achievement,
) {
    let card = CardRef::achievement(index);
    let focused = props.focus == Some(card);
    let prefix = card_prefix(pen, focused);

    b.begin_card(card, Slides::of(achievement).rotates());

    media(b, props, pen, &prefix, card, achievement);
    b.line(prefix.clone());

    b.bullet(&prefix, "★", pen.accent_plain(), achievement.title, pen.heading());
    b.paragraph(&prefix, achievement.award, pen.accent());
    b.paragraph(&prefix, achievement.detail, pen.muted());

    if let Some(url) = achievement.link {
        let mut link = prefix.clone();
        link.push("View Publication ↗ ", pen.muted());
        let avail = b.width().saturating_sub(link.width());
        link.push(truncate_text(url, avail), pen.link());
        b.line(link);
    }

    b.end_card();
    b.blank();
}

fn achievements(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let pen = pen(props, SectionId::Achievements);

    b.begin_section(SectionId::Achievements);
    section_heading(b, &pen, SectionId::Achievements.heading());
    for (index, achievement) in props.portfolio.achievements.iter().enumerate() {
        achievement_card(b, props, &pen, index, achievement);
    }
}

fn skills(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let pen = pen(props, SectionId::Skills);

    b.begin_section(SectionId::Skills);
    section_heading(b, &pen, SectionId::Skills.heading());

    let prefix = Line::styled("  ", Style::default());
    for category in props.portfolio.skills {
        b.line(Line::styled(category.name, pen.accent()));
        chips(b, &prefix, category.skills, pen.text());
        b.blank();
    }
}

fn education(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let pen = pen(props, SectionId::Education);

    b.begin_section(SectionId::Education);
    section_heading(b, &pen, SectionId::Education.heading());

    let prefix = Line::styled("│ ", pen.border());
    for school in props.portfolio.education {
        let mut name = prefix.clone();
        name.push(school.school, pen.accent());
        b.line(name);
        b.paragraph(&prefix, school.degree, pen.text());
        if let Some(specialization) = school.specialization {
            b.paragraph(&prefix, specialization, pen.muted());
        }

        let mut meta = prefix.clone();
        meta.push(school.period, pen.muted());
        meta.push("  ·  ", pen.faint());
        meta.push(format!("GPA: {}", school.gpa), pen.accent_plain());
        b.line(meta);

        b.paragraph(&prefix, school.location, pen.muted());
        b.paragraph(&prefix, school.courses, pen.faint());
        b.blank();
    }
}

fn contact(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let contact = props.portfolio.contact;
    let pen = pen(props, SectionId::Contact);

    b.begin_section(SectionId::Contact);
    b.blank();
    b.centered(contact.heading, pen.heading());
    b.blank();
    b.centered(contact.pitch, pen.text());
    b.blank();

    for link in contact.links {
        let mut line = Line::new();
        line.push(format!("{}: ", link.label), pen.muted());
        let avail = b.width().saturating_sub(line.width());
        line.push(truncate_text(link.url, avail), pen.link());
        b.center_line(line);
    }
    b.blank();
}

fn footer(b: &mut DocumentBuilder, props: &PageProps<'_>) {
    let palette = props.palette;
    b.line(Line::styled("─".repeat(b.width() as usize), Style::fg(palette.border)));
    b.centered(props.portfolio.contact.footer, palette.muted_style());
    b.blank();
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, portfolio};
    use crate::media::{ImageLoader, PROJECT_PLACEHOLDER, Placeholders};
    use crate::state::Span;
    use std::io;

    struct NoImages;

    impl ImageLoader for NoImages {
        fn load(&self, _path: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    struct AllImages;

    impl ImageLoader for AllImages {
        fn load(&self, _path: &str) -> io::Result<()> {
            Ok(())
        }
    }

    struct Fixture {
        portfolio: Portfolio,
        visibility: VisibilityTracker,
        projects: CarouselRotator,
        achievements: CarouselRotator,
        resolver: ImageResolver,
        palette: Palette,
    }

    impl Fixture {
        fn props(&self, focus: Option<CardRef>) -> PageProps<'_> {
            PageProps {
                portfolio: &self.portfolio,
                visibility: &self.visibility,
                projects: &self.projects,
                achievements: &self.achievements,
                resolver: &self.resolver,
                palette: &self.palette,
                focus,
            }
        }
    }

    fn setup(loader: impl ImageLoader + 'static) -> Fixture {
        let portfolio = portfolio();
        Fixture {
            projects: CarouselRotator::from_cards("projects", portfolio.projects),
            achievements: CarouselRotator::from_cards("achievements", portfolio.achievements),
            portfolio,
            visibility: VisibilityTracker::new(),
            resolver: ImageResolver::new(loader, Placeholders::default()),
            palette: Palette::night(),
        }
    }

    #[test]
    fn test_sections_in_page_order() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);

        let order: Vec<SectionId> = doc.sections.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, SectionId::ALL.to_vec());

        let mut previous_end = 0;
        for (_, span) in &doc.sections {
            assert_eq!(span.start, previous_end);
            assert!(span.len > 0);
            previous_end = span.end();
        }
        assert!(doc.len() > previous_end, "footer follows the last section");
    }

    #[test]
    fn test_lines_fit_width() {
        let fx = setup(NoImages);
        let doc = render_page(&fx.props(None), 60);
        for line in &doc.lines {
            assert!(line.width() <= 60, "too wide: {:?}", line.text());
        }
    }

    #[test]
    fn test_alt_text_follows_rotator() {
        let fx = setup(AllImages);
        fx.projects.next(0);
        fx.projects.next(0);

        let text = render_page(&fx.props(None), 80).text();
        let title = PROJECTS[0].title;
        assert!(text.contains(&format!("{title} - Image 3")));
        assert!(text.contains(PROJECTS[0].images[2]));
    }

    #[test]
    fn test_failed_image_shows_placeholder() {
        let fx = setup(NoImages);
        let doc = render_page(&fx.props(None), 120);
        assert!(doc.text().contains(PROJECT_PLACEHOLDER));
        assert!(!doc.text().contains(PROJECTS[0].images[0]));
    }

    #[test]
    fn test_video_card_has_no_controls() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);

        let video = PROJECTS.iter().position(|p| p.video.is_some()).unwrap();
        let anchor = doc.card(CardRef::project(video)).unwrap();
        assert!(!anchor.interactive);

        let has_hits = (anchor.span.start..anchor.span.end()).any(|line| !doc.lines[line].hits.is_empty());
        assert!(!has_hits);
        assert!(doc.text().contains("▶ Video: /videos/neuronify-demo.mp4"));
    }

    #[test]
    fn test_single_image_card_has_no_controls() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);

        let single = fx.portfolio.achievements.iter().position(|a| a.images.len() == 1).unwrap();
        let anchor = doc.card(CardRef::achievement(single)).unwrap();
        assert!(!anchor.interactive);
        let has_hits = (anchor.span.start..anchor.span.end()).any(|line| !doc.lines[line].hits.is_empty());
        assert!(!has_hits);
    }

    #[test]
    fn test_controls_are_hit_regions() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);
        let card = CardRef::project(0);
        let anchor = doc.card(card).unwrap();

        let line = (anchor.span.start..anchor.span.end())
            .find(|line| !doc.lines[*line].hits.is_empty())
            .unwrap();
        let hits = &doc.lines[line].hits;
        assert_eq!(hits[0].target, HitTarget::CarouselPrev(card));
        assert_eq!(hits[1].target, HitTarget::CarouselNext(card));
        assert_eq!(doc.hit_at(line, hits[1].start), Some(HitTarget::CarouselNext(card)));
    }

    #[test]
    fn test_sections_fade_until_visible() {
        let fx = setup(AllImages);
        let hidden = render_page(&fx.props(None), 80);

        let mut observer = fx.visibility.connect(0.1);
        let span = hidden.section_span(SectionId::Projects).unwrap();
        observer.observe("projects", span);
        observer.check(Span::new(span.start, 20));
        let shown = render_page(&fx.props(None), 80);

        // Same layout, different styling
        assert_eq!(hidden.text(), shown.text());
        assert_eq!(hidden.sections, shown.sections);

        let heading_line = span.start + 1;
        let faded = &hidden.lines[heading_line].spans.last().unwrap().style;
        let full = &shown.lines[heading_line].spans.last().unwrap().style;
        assert_ne!(faded, full);
        assert_eq!(*faded, full.faded());
    }

    #[test]
    fn test_contact_is_never_faded() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);
        let span = doc.section_span(SectionId::Contact).unwrap();
        let heading = (span.start..span.end())
            .find(|line| doc.lines[*line].text().contains(fx.portfolio.contact.heading))
            .unwrap();
        let style = doc.lines[heading].spans.last().unwrap().style;
        assert_eq!(style, fx.palette.heading_style());
    }

    #[test]
    fn test_focus_changes_border_only() {
        let fx = setup(AllImages);
        let card = CardRef::project(1);
        let plain = render_page(&fx.props(None), 80);
        let focused = render_page(&fx.props(Some(card)), 80);

        assert_eq!(plain.cards, focused.cards);
        let start = focused.card(card).unwrap().span.start;
        assert!(focused.lines[start].text().starts_with("┃ "));
        assert!(plain.lines[start].text().starts_with("│ "));
    }

    #[test]
    fn test_active_section_defaults_to_hero() {
        let fx = setup(AllImages);
        let doc = render_page(&fx.props(None), 80);
        assert_eq!(active_section(&doc, &fx.visibility), SectionId::Hero);

        let mut observer = fx.visibility.connect(0.1);
        let span = doc.section_span(SectionId::Skills).unwrap();
        observer.observe("skills", span);
        observer.check(span);
        assert_eq!(active_section(&doc, &fx.visibility), SectionId::Skills);
    }
}
