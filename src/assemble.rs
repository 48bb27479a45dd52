//! Page assembly: wraps one page body in a complete HTML document.
//!
//! Every page of a run gets the same skeleton:
//!
//! ```text
//! <!DOCTYPE html>
//! <html>
//!   <head>  charset, viewport, title + description (one of three
//!           templates), framework CDN reference, stylesheet (inline or
//!           linked), JSON-LD WebSite + Organization
//!   <body data-navigation data-hero data-footer>
//!     navigation
//!     <main> or <div>    page content
//!     footer
//!     <script src="js/main.js">
//! ```
//!
//! The title/description template is drawn from the assembler's own random
//! stream, so it never perturbs the configuration draw.

use crate::assets;
use crate::render::{RenderContext, footer, nav};
use crate::theme::Framework;
use crate::types::PageSpec;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rand::Rng;
use serde_json::json;

/// Output path of the stylesheet when it isn't inlined.
pub const STYLESHEET_PATH: &str = "css/style.css";

/// Output path of the site script.
pub const SCRIPT_PATH: &str = "js/main.js";

/// How a framework is pulled in from its CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkReference {
    Stylesheet(&'static str),
    Script(&'static str),
}

const FRAMEWORK_CDN: &[(Framework, FrameworkReference)] = &[
    (Framework::Tailwind, FrameworkReference::Script("https://cdn.tailwindcss.com")),
    (
        Framework::Bootstrap,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css",
        ),
    ),
    (
        Framework::Bulma,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css",
        ),
    ),
    (
        Framework::Foundation,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/foundation-sites@6.7.5/dist/css/foundation-float.min.css",
        ),
    ),
    (
        Framework::Materialize,
        FrameworkReference::Stylesheet(
            "https://cdnjs.cloudflare.com/ajax/libs/materialize/1.0.0/css/materialize.min.css",
        ),
    ),
    (
        Framework::Pure,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/purecss@3.0.0/build/pure-min.css",
        ),
    ),
    (
        Framework::Semantic,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/semantic-ui@2.5.0/dist/semantic.min.css",
        ),
    ),
    (
        Framework::Uikit,
        FrameworkReference::Stylesheet(
            "https://cdn.jsdelivr.net/npm/uikit@3.17.11/dist/css/uikit.min.css",
        ),
    ),
    (
        Framework::Skeleton,
        FrameworkReference::Stylesheet(
            "https://cdnjs.cloudflare.com/ajax/libs/skeleton/2.0.4/skeleton.min.css",
        ),
    ),
];

/// CDN reference for a framework. `custom` and unrecognized values have none.
pub fn framework_reference(framework: Framework) -> Option<FrameworkReference> {
    FRAMEWORK_CDN
        .iter()
        .find(|(f, _)| *f == framework)
        .map(|(_, reference)| *reference)
}

/// Title and meta description for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Pick one of the three templates.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, page_title: &str, site_name: &str) -> Self {
        match rng.random_range(0..3) {
            0 => Self {
                title: format!("{page_title} | {site_name}"),
                description: format!(
                    "Play free casino games at {site_name}. No download required!"
                ),
            },
            1 => Self {
                title: format!("Free Casino Games | {site_name}"),
                description: format!(
                    "Enjoy 100+ casino games at {site_name}. Play slots, table games and more!"
                ),
            },
            _ => Self {
                title: format!("{site_name} - {page_title}"),
                description: format!(
                    "Experience premium casino entertainment at {site_name}. Free to play!"
                ),
            },
        }
    }
}

/// Assemble a full document around `page.content`.
pub fn assemble<R: Rng + ?Sized>(ctx: &RenderContext, page: &PageSpec, rng: &mut R) -> Markup {
    let meta = PageMeta::sample(rng, &page.title, ctx.site_name());
    let config = ctx.config;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @match framework_reference(config.framework) {
                    Some(FrameworkReference::Stylesheet(href)) => {
                        link rel="stylesheet" href=(href);
                    }
                    Some(FrameworkReference::Script(src)) => {
                        script src=(src) {}
                    }
                    None => {}
                }
                @if config.inline_css {
                    style { (PreEscaped(assets::generate_stylesheet(config))) }
                } @else {
                    link rel="stylesheet" href=(STYLESHEET_PATH);
                }
                (structured_data(ctx))
            }
            body
                data-page=(page.route)
                data-navigation=(config.navigation.as_str())
                data-hero=(config.hero.as_str())
                data-footer=(config.footer.as_str()) {
                (nav::render(ctx))
                @if ctx.semantic() {
                    main id="main-content" { (page.content) }
                } @else {
                    div class=(ctx.class_of("content", "wrapper")) id="main-content" role="main" { (page.content) }
                }
                (footer::render(ctx))
                script src=(SCRIPT_PATH) {}
            }
        }
    }
}

/// JSON-LD `WebSite` and `Organization` blocks.
fn structured_data(ctx: &RenderContext) -> Markup {
    let url = format!("https://{}", ctx.identity.domain);
    let website = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": ctx.site_name(),
        "url": url,
        "description": "Social casino games for entertainment",
    });
    let organization = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": ctx.site_name(),
        "url": url,
    });
    html! {
        @for schema in [website, organization] {
            script type="application/ld+json" {
                (PreEscaped(schema.to_string().replace('<', "\\u003c")))
            }
        }
    }
}
