//! CLI output formatting for a finished run.
//!
//! Diagnostics go to stderr through `tracing`; this module owns the
//! user-facing summary on stdout.
//!
//! # Output Format
//!
//! ```text
//! Site
//!     Golden Jackpot Arena (example.com)
//!     Seed: 1234567890
//!
//! Content
//!     10 games from fallback dataset (HTTP status 503)
//!
//! Theme
//!     framework         custom
//!     color scheme      neon
//!     ...
//!     class naming      prefixed (sc)
//!
//! Files → casino-site-example-com/
//!     001 index.html
//!     002 games.html
//!     ...
//!
//! Thumbnails
//!     8 downloaded, 1 failed, 1 without URL
//! ```
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability, and [`print_site_report`] writes all of them to stdout.
//! Format functions are pure: no I/O, no side effects.

use crate::generate::SiteReport;
use crate::thumbnails::ThumbnailReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Four spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Label column width for the theme table.
fn label_width(rows: &[(&'static str, String)]) -> usize {
    rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0)
}

/// Site identity and the seed that reproduces the run.
pub fn format_site(report: &SiteReport) -> Vec<String> {
    vec![
        "Site".to_string(),
        format!(
            "{}{} ({})",
            indent(1),
            report.identity.site_name,
            report.identity.domain
        ),
        format!("{}Seed: {}", indent(1), report.seed),
    ]
}

/// Game count and where the games came from.
pub fn format_content(report: &SiteReport) -> Vec<String> {
    let noun = if report.game_count == 1 { "game" } else { "games" };
    vec![
        "Content".to_string(),
        format!(
            "{}{} {} from {}",
            indent(1),
            report.game_count,
            noun,
            report.origin
        ),
    ]
}

/// Every sampled axis, one aligned row each.
pub fn format_theme(report: &SiteReport) -> Vec<String> {
    let rows = report.config.axes();
    let width = label_width(&rows);
    let mut lines = vec!["Theme".to_string()];
    for (label, value) in &rows {
        lines.push(format!("{}{:<width$}  {}", indent(1), label, value));
    }
    lines
}

/// Files in write order, relative to the output directory.
pub fn format_files(report: &SiteReport) -> Vec<String> {
    let mut lines = vec![format!("Files → {}/", report.output_dir.display())];
    for (i, path) in report.files.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), path));
    }
    lines
}

/// Thumbnail counts, or a note that downloads were off.
pub fn format_thumbnails(thumbnails: Option<&ThumbnailReport>) -> Vec<String> {
    let detail = match thumbnails {
        Some(t) => format!(
            "{} downloaded, {} failed, {} without URL",
            t.downloaded, t.failed, t.skipped
        ),
        None => "skipped".to_string(),
    };
    vec!["Thumbnails".to_string(), format!("{}{}", indent(1), detail)]
}

/// The whole summary, sections separated by blank lines.
pub fn format_site_report(report: &SiteReport) -> Vec<String> {
    let sections = [
        format_site(report),
        format_content(report),
        format_theme(report),
        format_files(report),
        format_thumbnails(report.thumbnails.as_ref()),
    ];
    let mut lines = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(section);
    }
    lines
}

pub fn print_site_report(report: &SiteReport) {
    for line in format_site_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentOrigin;
    use crate::test_helpers::{fixture_config, fixture_identity};
    use std::path::PathBuf;

    fn report() -> SiteReport {
        SiteReport {
            output_dir: PathBuf::from("casino-site-example-com"),
            seed: 42,
            identity: fixture_identity(),
            config: fixture_config(),
            origin: ContentOrigin::Fallback {
                reason: "HTTP status 503".to_string(),
            },
            game_count: 10,
            files: vec!["index.html".to_string(), "js/main.js".to_string()],
            thumbnails: Some(ThumbnailReport {
                downloaded: 8,
                failed: 1,
                skipped: 1,
            }),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn site_section_shows_name_domain_and_seed() {
        let lines = format_site(&report());
        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    Lucky Spin Casino (example.com)");
        assert_eq!(lines[2], "    Seed: 42");
    }

    #[test]
    fn content_section_reports_fallback_reason() {
        let lines = format_content(&report());
        assert_eq!(lines[1], "    10 games from fallback dataset (HTTP status 503)");

        let mut live = report();
        live.origin = ContentOrigin::Live;
        live.game_count = 1;
        assert_eq!(format_content(&live)[1], "    1 game from live API");
    }

    #[test]
    fn theme_lists_every_axis_aligned() {
        let report = report();
        let lines = format_theme(&report);
        assert_eq!(lines.len(), report.config.axes().len() + 1);
        assert!(lines.iter().any(|l| l.starts_with("    framework ") && l.ends_with("  custom")));
        assert!(lines.iter().any(|l| l.contains("class naming") && l.ends_with("semantic")));
        // every row pads its label to the longest one
        let widths: std::collections::HashSet<usize> = lines[1..]
            .iter()
            .zip(report.config.axes())
            .map(|(line, (_, value))| line.len() - value.len())
            .collect();
        assert_eq!(widths.len(), 1);
    }

    #[test]
    fn files_are_indexed_under_output_dir() {
        let lines = format_files(&report());
        assert_eq!(lines[0], "Files → casino-site-example-com/");
        assert_eq!(lines[1], "    001 index.html");
        assert_eq!(lines[2], "    002 js/main.js");
    }

    #[test]
    fn thumbnails_counts_or_skipped() {
        let lines = format_thumbnails(report().thumbnails.as_ref());
        assert_eq!(lines[1], "    8 downloaded, 1 failed, 1 without URL");
        assert_eq!(format_thumbnails(None)[1], "    skipped");
    }

    #[test]
    fn full_report_separates_sections() {
        let lines = format_site_report(&report());
        let headers: Vec<&String> = lines
            .iter()
            .filter(|l| !l.is_empty() && !l.starts_with(' '))
            .collect();
        assert_eq!(headers.len(), 5);
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 4);
    }
}
