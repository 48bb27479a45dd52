//! End-to-end runs of the site generator against stub collaborators.
//!
//! No network: the content source and thumbnail downloader are closures.

use casino_gen::content::{ContentError, ContentOrigin, RawResponse, fallback_games};
use casino_gen::generate::{self, GenerateOptions, SiteDraw, Streams, render_site};
use casino_gen::render::RenderContext;
use casino_gen::select::select_home_games;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

const PAGES: &[&str] = &[
    "index.html",
    "games.html",
    "game.html",
    "about.html",
    "contact.html",
    "terms.html",
    "privacy.html",
    "cookies.html",
    "responsible-gaming.html",
];

fn options(output_dir: &Path, seed: u64) -> GenerateOptions {
    GenerateOptions {
        domain: "example.com".to_string(),
        output_dir: output_dir.to_path_buf(),
        seed,
        site_name: None,
        embed_base: "https://embed.example/iframe".to_string(),
        generated_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

fn failing_source(_: &str) -> Result<RawResponse, ContentError> {
    Err(ContentError::Shape("connection refused".into()))
}

/// Every regular file under `root`, relative, with `/` separators.
fn files_under(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            let parts: Vec<_> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            parts.join("/")
        })
        .collect()
}

/// Value of `name="..."` on the `<body>` tag.
fn body_attr(html: &str, name: &str) -> String {
    let body_start = html.find("<body").expect("document has a body");
    let body_tag = &html[body_start..body_start + html[body_start..].find('>').unwrap()];
    let needle = format!("{name}=\"");
    let start = body_tag
        .find(&needle)
        .unwrap_or_else(|| panic!("body has no {name}"))
        + needle.len();
    let end = start + body_tag[start..].find('"').unwrap();
    body_tag[start..end].to_string()
}

#[test]
fn failed_source_produces_complete_fallback_site() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("site");
    let report = generate::generate(Some(&failing_source), None, &options(&out, 11)).unwrap();

    assert!(matches!(report.origin, ContentOrigin::Fallback { .. }));
    assert_eq!(report.game_count, 10);
    assert!(report.thumbnails.is_none());

    let mut expected: BTreeSet<String> = PAGES.iter().map(|p| p.to_string()).collect();
    expected.insert("js/main.js".to_string());
    if !report.config.inline_css {
        expected.insert("css/style.css".to_string());
    }
    assert_eq!(files_under(&out), expected);
    assert_eq!(report.files.iter().cloned().collect::<BTreeSet<_>>(), expected);

    for dir in ["css", "js", "images", "images/games"] {
        assert!(out.join(dir).is_dir(), "{dir} missing");
    }
}

#[test]
fn file_set_covers_both_stylesheet_modes() {
    let mut saw_inline = false;
    let mut saw_linked = false;
    for seed in 0..40 {
        let tmp = TempDir::new().unwrap();
        let report = generate::generate(None, None, &options(tmp.path(), seed)).unwrap();
        let has_css = tmp.path().join("css/style.css").exists();
        assert_eq!(has_css, !report.config.inline_css);
        assert_eq!(report.files.len(), if report.config.inline_css { 10 } else { 11 });
        saw_inline |= report.config.inline_css;
        saw_linked |= !report.config.inline_css;
        if saw_inline && saw_linked {
            return;
        }
    }
    panic!("40 seeds never produced both stylesheet modes");
}

#[test]
fn game_page_references_fallback_slug() {
    let tmp = TempDir::new().unwrap();
    generate::generate(Some(&failing_source), None, &options(tmp.path(), 3)).unwrap();
    let game = fs::read_to_string(tmp.path().join("game.html")).unwrap();
    assert!(game.contains("data-game-slug=\"starburst\""));
    assert!(game.contains("https://embed.example/iframe/1"));
    assert!(game.contains("\"slug\":\"thunderstruck-ii\""));
}

#[test]
fn layout_markers_identical_across_pages() {
    let tmp = TempDir::new().unwrap();
    generate::generate(None, None, &options(tmp.path(), 21)).unwrap();

    let markers: Vec<(String, String, String)> = PAGES
        .iter()
        .map(|page| {
            let html = fs::read_to_string(tmp.path().join(page)).unwrap();
            (
                body_attr(&html, "data-navigation"),
                body_attr(&html, "data-hero"),
                body_attr(&html, "data-footer"),
            )
        })
        .collect();
    assert!(markers.windows(2).all(|w| w[0] == w[1]), "{markers:?}");
}

#[test]
fn same_seed_same_site() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    generate::generate(None, None, &options(a.path(), 99)).unwrap();
    generate::generate(None, None, &options(b.path(), 99)).unwrap();
    for page in PAGES {
        assert_eq!(
            fs::read_to_string(a.path().join(page)).unwrap(),
            fs::read_to_string(b.path().join(page)).unwrap(),
            "{page} differs"
        );
    }
}

#[test]
fn live_content_is_rendered() {
    let tmp = TempDir::new().unwrap();
    let source = |domain: &str| -> Result<RawResponse, ContentError> {
        assert_eq!(domain, "example.com");
        Ok(RawResponse::ok(
            r#"{"data": [
                {"id": 501, "name": "Neon Reels", "provider": "Pragmatic Play", "published": 1},
                {"id": 502, "name": "Hidden Draft", "provider": "Pragmatic Play", "published": 0}
            ]}"#,
        ))
    };
    let report = generate::generate(Some(&source), None, &options(tmp.path(), 5)).unwrap();

    assert_eq!(report.origin, ContentOrigin::Live);
    assert_eq!(report.game_count, 1);
    let games = fs::read_to_string(tmp.path().join("games.html")).unwrap();
    assert!(games.contains("Neon Reels"));
    assert!(!games.contains("Hidden Draft"));
}

#[test]
fn thumbnails_land_under_images_games() {
    let tmp = TempDir::new().unwrap();
    let downloads = |url: &str| -> Result<Vec<u8>, ContentError> {
        if url.contains("Roulette") {
            Err(ContentError::Shape("404".into()))
        } else {
            Ok(b"jpeg".to_vec())
        }
    };
    let report = generate::generate(None, Some(&downloads), &options(tmp.path(), 8)).unwrap();

    let thumbs = report.thumbnails.expect("downloads enabled");
    assert_eq!(thumbs.downloaded, 9);
    assert_eq!(thumbs.failed, 1);
    assert!(tmp.path().join("images/games/starburst-1.jpg").exists());
    assert!(!tmp.path().join("images/games/european-roulette-8.jpg").exists());
    // pages still reference the missing file
    let games = fs::read_to_string(tmp.path().join("games.html")).unwrap();
    assert!(games.contains("images/games/european-roulette-8.jpg"));
}

#[test]
fn styling_approach_has_no_effect() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), 17);
    let draw = SiteDraw::sample(&mut Streams::from_seed(opts.seed), &opts);
    let games = fallback_games();
    let selection = select_home_games(&games, &mut StdRng::seed_from_u64(1));

    let mut outputs = Vec::new();
    for approach in 1..=5 {
        let mut config = draw.config.clone();
        config.styling_approach = approach;
        let ctx = RenderContext::new(&config, &draw.identity, &opts.embed_base);
        let mut meta = StdRng::seed_from_u64(2);
        outputs.push(render_site(&ctx, &games, &draw.hero, &selection, &mut meta));
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn scheme_in_domain_is_dropped_from_pages() {
    let tmp = TempDir::new().unwrap();
    let mut opts = options(tmp.path(), 4);
    opts.domain = "https://example.com/".to_string();
    generate::generate(None, None, &opts).unwrap();

    let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert!(index.contains("\"url\":\"https://example.com\""));
    assert!(!index.contains("https://https://"));
    let contact = fs::read_to_string(tmp.path().join("contact.html")).unwrap();
    assert!(contact.contains("support@example.com"));
    assert!(!contact.contains("@https"));
}
