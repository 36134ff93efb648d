//! End-to-end flow without a terminal.
//!
//! Drives the same loop the binary runs (ticks → visibility → document →
//! frame → actions) against the compiled-in portfolio, with a temp asset
//! directory standing in for `public/`.

use std::fs;
use std::path::Path;

use spark_signals::derived;

use folio_tui::config::Config;
use folio_tui::media::{ACHIEVEMENT_PLACEHOLDER, PROJECT_PLACEHOLDER};
use folio_tui::state::{Action, RotationTicker};
use folio_tui::view::{CardRef, HitTarget};
use folio_tui::{App, CardItem, ImageResolver, SectionId, portfolio};

// =============================================================================
// HELPERS
// =============================================================================

fn write_asset(root: &Path, path: &str) {
    let full = root.join(path.trim_start_matches('/'));
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, b"image").unwrap();
}

fn setup(root: &Path) -> App {
    let mut config = Config::default();
    config.media.asset_root = root.to_path_buf();
    let resolver = ImageResolver::from_config(&config.media);
    App::new(portfolio(), resolver, &config, (100, 40))
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn test_ticks_rotate_only_multi_image_cards() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup(dir.path());
    let content = portfolio();

    for _ in 0..7 {
        app.on_tick(1);
    }

    for (i, project) in content.projects.iter().enumerate() {
        let expected = if project.video().is_none() && project.images.len() > 1 {
            7 % project.images.len()
        } else {
            0
        };
        assert_eq!(app.projects().index(i), expected, "project {}", project.title);
    }
    for (i, achievement) in content.achievements.iter().enumerate() {
        let expected = if achievement.images.len() > 1 {
            7 % achievement.images.len()
        } else {
            0
        };
        assert_eq!(app.achievements().index(i), expected, "achievement {}", achievement.title);
    }
}

#[test]
fn test_rotators_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = setup(dir.path());
    let doc = app.document();

    let first_achievement = doc
        .interactive_cards()
        .into_iter()
        .find(|card| card.kind == folio_tui::CardKind::Achievement)
        .unwrap();

    while app.focus() != Some(first_achievement) {
        app.apply(Action::FocusNext, &doc);
    }
    app.apply(Action::CarouselNext, &doc);

    assert_eq!(app.achievements().index(first_achievement.index), 1);
    assert!(app.projects().snapshot().values().all(|i| *i == 0));
}

#[test]
fn test_missing_images_fall_back_per_kind() {
    let dir = tempfile::tempdir().unwrap();
    let content = portfolio();
    write_asset(dir.path(), content.projects[1].images[0]);

    let app = setup(dir.path());
    let text = app.document().text();

    assert!(text.contains(content.projects[1].images[0]));
    assert!(text.contains(PROJECT_PLACEHOLDER));
    assert!(text.contains(ACHIEVEMENT_PLACEHOLDER));
}

#[test]
fn test_scrolling_reveals_sections_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = setup(dir.path());
    let doc = app.document();

    app.sync_visibility(&doc);
    assert!(app.visibility().is_visible("hero"));
    assert!(!app.visibility().is_visible("skills"));

    let mut seen = vec![];
    while app.scroll() < app.max_scroll(&doc) {
        app.apply(Action::PageDown, &doc);
        app.sync_visibility(&doc);
        for id in SectionId::ALL {
            if app.visibility().is_visible(id.as_str()) && !seen.contains(&id) {
                seen.push(id);
            }
        }
    }

    assert!(seen.contains(&SectionId::Skills));
    assert!(seen.contains(&SectionId::Contact));
    assert_ne!(app.active_section(&doc), SectionId::Hero);
    assert!(!app.visibility().is_visible("hero"));
}

#[test]
fn test_click_prev_wraps() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = setup(dir.path());
    let doc = app.document();

    app.apply(Action::JumpTo(SectionId::Projects), &doc);
    let frame = app.frame(&doc);
    let (rect, target) = frame
        .hits()
        .iter()
        .copied()
        .find(|(_, target)| matches!(target, HitTarget::CarouselPrev(_)))
        .unwrap();
    let HitTarget::CarouselPrev(card) = target else {
        unreachable!()
    };

    app.apply(Action::Click { x: rect.x, y: rect.y }, &doc);

    let len = app.rotator(card.kind).slides(card.index).unwrap().images;
    assert_eq!(app.rotator(card.kind).index(card.index), len - 1);
    assert_eq!(app.focus(), Some(card));
}

#[test]
fn test_document_derived_follows_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let app = setup(dir.path());
    let page = app.page();
    let document = derived(move || page.build());

    let title = portfolio().projects[0].title;
    assert!(document.get().text().contains(&format!("{title} - Image 1")));

    app.on_tick(1);
    assert!(document.get().text().contains(&format!("{title} - Image 2")));

    app.projects().prev(0);
    assert!(document.get().text().contains(&format!("{title} - Image 1")));
}

#[test]
fn test_focus_highlight_in_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = setup(dir.path());
    let doc = app.document();

    app.apply(Action::FocusNext, &doc);
    let card = app.focus().unwrap();
    assert_eq!(card, CardRef::project(0));

    let focused = app.document();
    let start = focused.card(card).unwrap().span.start;
    assert!(focused.lines[start].text().starts_with("┃ "));
}

#[test]
fn test_ticker_stop_then_no_ticks() {
    let mut ticker = RotationTicker::start(std::time::Duration::from_millis(5));
    std::thread::sleep(std::time::Duration::from_millis(30));
    ticker.stop();
    assert_eq!(ticker.take_pending(), 0);

    let dir = tempfile::tempdir().unwrap();
    let app = setup(dir.path());
    assert_eq!(app.on_tick(ticker.take_pending()), 0);
    assert!(app.projects().snapshot().is_empty());
}
