//! Shared static assets: the generated stylesheet and the site script.
//!
//! The stylesheet has three layers:
//!
//! 1. Palette custom properties from the run's color scheme (always).
//! 2. `static/base.css`: element defaults and `data-*` hook states (always).
//! 3. Component rules (only when `framework = custom`). Every selector is
//!    produced by the run's [`NamingConvention`](crate::naming::NamingConvention),
//!    with the same `(base, modifier)` tokens the renderers use.
//!
//! Sites on a CDN framework get layers 1 and 2 only; the framework supplies
//! the component styling.

use crate::naming::NamingConvention;
use crate::theme::{Framework, Palette, SiteConfiguration};

/// Site script, written to `js/main.js`.
pub const SCRIPT: &str = include_str!("../static/main.js");

const BASE_CSS: &str = include_str!("../static/base.css");

/// Build the complete stylesheet for a configuration.
pub fn generate_stylesheet(config: &SiteConfiguration) -> String {
    let mut css = format!("{}\n\n{}", generate_palette_css(&config.palette()), BASE_CSS);
    if config.framework == Framework::Custom {
        css.push('\n');
        css.push_str(&generate_component_css(&config.naming));
    }
    css
}

/// `:root` custom properties for a palette.
pub fn generate_palette_css(palette: &Palette) -> String {
    format!(
        r#":root {{
    --primary: {primary};
    --secondary: {secondary};
    --accent: {accent};
    --text: #1f2937;
    --background: #ffffff;
    --radius: 12px;
    --shadow: 0 4px 16px rgba(0, 0, 0, 0.12);
}}"#,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
    )
}

// ============================================================================
// Component rules
// ============================================================================

/// `(base, modifier, selector suffix, declarations)`.
type Rule = (&'static str, Option<&'static str>, &'static str, &'static str);

const COMPONENTS: &[Rule] = &[
    // Layout
    ("container", None, "", "max-width: 1200px; margin: 0 auto; padding: 0 1.25rem;"),
    ("section", None, "", "padding: 4rem 0;"),
    ("section", Some("title"), "", "font-size: 2rem; margin-bottom: 2rem;"),
    ("page", Some("title"), "", "font-size: 2.5rem; margin: 2rem 0 1rem;"),
    ("text", Some("center"), "", "text-align: center;"),
    (
        "flex",
        Some("between"),
        "",
        "display: flex; justify-content: space-between; align-items: center; gap: 1rem;",
    ),
    ("flex", Some("wrap"), "", "flex-wrap: wrap;"),
    ("grid", None, "", "display: grid; gap: 1.5rem;"),
    ("grid", Some("2"), "", "grid-template-columns: repeat(2, 1fr);"),
    ("grid", Some("3"), "", "grid-template-columns: repeat(3, 1fr);"),
    ("grid", Some("4"), "", "grid-template-columns: repeat(4, 1fr);"),
    ("grid", Some("5"), "", "grid-template-columns: repeat(5, 1fr);"),
    // Buttons
    (
        "btn",
        None,
        "",
        "display: inline-block; padding: 0.75rem 1.5rem; border: 0; border-radius: 999px; font-weight: 600; text-decoration: none; cursor: pointer; transition: transform 0.2s ease;",
    ),
    ("btn", None, ":hover", "transform: translateY(-2px);"),
    ("btn", Some("primary"), "", "background: var(--primary); color: #fff;"),
    ("btn", Some("secondary"), "", "background: var(--secondary); color: #fff;"),
    ("btn", Some("accent"), "", "background: var(--accent); color: var(--secondary);"),
    // Cards
    (
        "card",
        None,
        "",
        "background: #fff; border-radius: var(--radius); box-shadow: var(--shadow); padding: 1.25rem; overflow: hidden;",
    ),
    ("game", Some("card"), "", "padding: 0; transition: transform 0.2s ease;"),
    ("game", Some("card"), ":hover", "transform: translateY(-4px);"),
    ("game", Some("image"), "", "width: 100%; aspect-ratio: 3 / 2; object-fit: cover;"),
    ("game", Some("info"), "", "padding: 1rem;"),
    ("game", Some("title"), "", "font-size: 1.1rem; margin: 0 0 0.25rem;"),
    ("game", Some("provider"), "", "color: #6b7280; font-size: 0.9rem; margin: 0 0 0.75rem;"),
    (
        "game",
        Some("date"),
        "",
        "display: block; font-size: 0.8rem; color: var(--primary); margin-bottom: 0.5rem;",
    ),
    // Navigation
    ("nav", None, "", "background: var(--secondary); color: #fff; padding: 1rem 0;"),
    (
        "nav",
        Some("list"),
        "",
        "display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0;",
    ),
    ("nav", Some("link"), "", "color: #fff; text-decoration: none; font-weight: 500;"),
    ("nav", Some("link"), ":hover", "color: var(--accent);"),
    ("nav", Some("sticky"), "", "position: sticky; top: 0; z-index: 100;"),
    (
        "nav",
        Some("sidebar"),
        "",
        "position: fixed; top: 0; left: 0; bottom: 0; width: 260px; padding: 1.5rem; transform: translateX(-100%); z-index: 200;",
    ),
    ("sidebar", Some("mobile"), "", "position: fixed; top: 1rem; left: 1rem; z-index: 150;"),
    (
        "logo",
        None,
        "",
        "font-size: 1.5rem; font-weight: 800; color: var(--accent); text-decoration: none;",
    ),
    (
        "dropdown",
        Some("content"),
        "",
        "display: none; position: absolute; background: #fff; color: var(--text); padding: 1.5rem; border-radius: var(--radius); box-shadow: var(--shadow);",
    ),
    ("dropdown", None, ":hover > *:last-child", "display: grid;"),
    // Hero
    (
        "hero",
        None,
        "",
        "padding: 6rem 0; color: #fff; background: linear-gradient(135deg, var(--primary), var(--secondary));",
    ),
    ("hero", Some("fullscreen"), "", "min-height: 100vh; display: flex; align-items: center;"),
    ("hero", Some("title"), "", "font-size: 3rem; margin: 0 0 1rem;"),
    ("hero", Some("text"), "", "font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.9;"),
    ("casino", Some("chip"), "", "display: inline-block; font-size: 3rem; margin: 0.5rem;"),
    ("animate", Some("fade-in"), "", "animation: fade-in 0.8s ease both;"),
    ("animate", Some("spin"), "", "animation: spin 4s linear infinite;"),
    // Home sections
    (
        "ribbon",
        None,
        "",
        "display: inline-block; background: var(--accent); color: var(--secondary); font-size: 0.75rem; font-weight: 700; padding: 0.2rem 0.6rem; border-radius: 4px;",
    ),
    (
        "ticker",
        None,
        "",
        "overflow: hidden; white-space: nowrap; background: var(--secondary); color: #fff; padding: 0.75rem 0; margin-bottom: 2rem;",
    ),
    (
        "ticker",
        Some("track"),
        "",
        "display: inline-flex; gap: 3rem; animation: ticker 30s linear infinite;",
    ),
    ("masonry", None, "", "columns: 4 220px; column-gap: 1.5rem;"),
    ("masonry", Some("item"), "", "break-inside: avoid; margin-bottom: 1.5rem;"),
    ("hex-grid", None, "", "display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem;"),
    (
        "hex",
        Some("item"),
        "",
        "width: 180px; aspect-ratio: 1; clip-path: polygon(25% 0, 75% 0, 100% 50%, 75% 100%, 25% 100%, 0 50%); position: relative;",
    ),
    (
        "timeline",
        None,
        "",
        "list-style: none; border-left: 3px solid var(--primary); padding-left: 1.5rem;",
    ),
    ("timeline", Some("item"), "", "position: relative; margin-bottom: 2rem;"),
    ("spotlight", None, "", "display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem;"),
    // Games and game pages
    (
        "games",
        Some("filters"),
        "",
        "display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 2rem;",
    ),
    (
        "search",
        Some("input"),
        "",
        "flex: 1 1 240px; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 999px;",
    ),
    (
        "filter",
        Some("select"),
        "",
        "padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 999px;",
    ),
    (
        "list",
        Some("item"),
        "",
        "display: flex; align-items: center; gap: 1rem; padding: 1rem 0; border-bottom: 1px solid #e5e7eb;",
    ),
    ("list", Some("thumb"), "", "width: 120px; border-radius: 8px;"),
    ("flip", Some("card"), "", "perspective: 1000px;"),
    (
        "flip",
        Some("inner"),
        "",
        "position: relative; transition: transform 0.6s; transform-style: preserve-3d;",
    ),
    ("flip", Some("card"), ":hover > *", "transform: rotateY(180deg);"),
    (
        "flip",
        Some("back"),
        "",
        "position: absolute; inset: 0; transform: rotateY(180deg); backface-visibility: hidden; background: var(--secondary); color: #fff; padding: 1rem;",
    ),
    ("magazine", None, "", "display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem;"),
    ("magazine", Some("feature"), "", "grid-column: span 2;"),
    (
        "pagination",
        None,
        "",
        "display: flex; justify-content: center; gap: 0.5rem; margin: 2rem 0;",
    ),
    ("game", Some("player"), "", "margin: 2rem 0;"),
    (
        "game",
        Some("layout-sidebar"),
        "",
        "display: grid; grid-template-columns: 3fr 1fr; gap: 2rem;",
    ),
    (
        "tabs",
        Some("nav"),
        "",
        "display: flex; gap: 0.5rem; border-bottom: 1px solid #e5e7eb; margin-bottom: 1.5rem;",
    ),
    (
        "tabs",
        Some("button"),
        "",
        "background: none; border: 0; padding: 0.75rem 1rem; cursor: pointer;",
    ),
    // About, contact, legal
    ("feature", Some("icon"), "", "font-size: 2.5rem;"),
    ("stat", Some("number"), "", "font-size: 2.5rem; font-weight: 800; color: var(--primary);"),
    ("testimonial", None, "", "font-style: italic;"),
    ("team", Some("avatar"), "", "font-size: 3rem;"),
    (
        "form",
        Some("input"),
        "",
        "display: block; width: 100%; padding: 0.75rem; margin: 0.25rem 0 1rem; border: 1px solid #d1d5db; border-radius: 8px;",
    ),
    ("faq", Some("item"), "", "border-bottom: 1px solid #e5e7eb; padding: 1rem 0;"),
    (
        "map",
        Some("placeholder"),
        "",
        "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 240px; border-radius: var(--radius); background: #e5e7eb; font-size: 3rem;",
    ),
    (
        "legal",
        Some("with-sidebar"),
        "",
        "display: grid; grid-template-columns: 240px 1fr; gap: 2rem;",
    ),
    ("legal", Some("sidebar"), "", "position: sticky; top: 1rem; align-self: start;"),
    (
        "legal",
        Some("floating"),
        "",
        "position: fixed; right: 1rem; top: 50%; transform: translateY(-50%); max-width: 220px; background: #fff; box-shadow: var(--shadow); border-radius: var(--radius); padding: 1rem;",
    ),
    ("legal", Some("updated"), "", "color: #6b7280; font-size: 0.9rem;"),
    ("accordion", Some("header"), "", "cursor: pointer; font-weight: 600; padding: 1rem 0;"),
    // Footer
    (
        "footer",
        None,
        "",
        "background: var(--secondary); color: #fff; padding: 3rem 0 1.5rem; margin-top: 4rem;",
    ),
    (
        "footer",
        Some("grid"),
        "",
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 2rem;",
    ),
    (
        "footer",
        Some("links"),
        "",
        "list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.75rem 1.25rem;",
    ),
    ("footer", Some("link"), "", "color: rgba(255, 255, 255, 0.8); text-decoration: none;"),
    ("footer", Some("link"), ":hover", "color: var(--accent);"),
    ("footer", Some("dark"), "", "background: #0b0b0f;"),
    (
        "footer",
        Some("bottom"),
        "",
        "border-top: 1px solid rgba(255, 255, 255, 0.15); margin-top: 2rem; padding-top: 1rem; font-size: 0.85rem; opacity: 0.8;",
    ),
];

/// Overrides inside `@media (max-width: 768px)`.
const RESPONSIVE: &[Rule] = &[
    ("grid", Some("2"), "", "grid-template-columns: 1fr;"),
    ("grid", Some("3"), "", "grid-template-columns: 1fr;"),
    ("grid", Some("4"), "", "grid-template-columns: repeat(2, 1fr);"),
    ("grid", Some("5"), "", "grid-template-columns: repeat(2, 1fr);"),
    ("hero", Some("title"), "", "font-size: 2rem;"),
    ("nav", Some("list"), "", "flex-wrap: wrap; gap: 0.75rem;"),
    ("spotlight", None, "", "grid-template-columns: 1fr;"),
    ("magazine", None, "", "grid-template-columns: 1fr;"),
    ("magazine", Some("feature"), "", "grid-column: auto;"),
    ("game", Some("layout-sidebar"), "", "grid-template-columns: 1fr;"),
    ("legal", Some("with-sidebar"), "", "grid-template-columns: 1fr;"),
    ("legal", Some("floating"), "", "position: static; transform: none; max-width: none;"),
];

/// Component rules with every selector resolved through `naming`.
pub fn generate_component_css(naming: &NamingConvention) -> String {
    let mut css = String::new();
    write_rules(&mut css, naming, COMPONENTS, "");
    css.push_str("\n@media (max-width: 768px) {\n");
    write_rules(&mut css, naming, RESPONSIVE, "    ");
    css.push_str("}\n");
    css
}

fn write_rules(css: &mut String, naming: &NamingConvention, rules: &[Rule], indent: &str) {
    for (base, modifier, suffix, declarations) in rules {
        let class = naming.resolve(base, *modifier);
        css.push_str(&format!("{indent}.{class}{suffix} {{ {declarations} }}\n"));
    }
}
