//! Legal pages: terms, privacy, cookies and responsible gaming.
//!
//! Each document is embedded Markdown with `{site}` and `{domain}`
//! placeholders. A document is split into sections at its `## ` headings,
//! each section body goes through pulldown-cmark, and the selected
//! `legal_page_layout` arranges the sections.

use super::{RenderContext, dispatch};
use crate::theme::LegalPageLayout;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// The four legal documents every site carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDocument {
    Terms,
    Privacy,
    Cookies,
    ResponsibleGaming,
}

impl LegalDocument {
    pub const ALL: [LegalDocument; 4] = [
        Self::Terms,
        Self::Privacy,
        Self::Cookies,
        Self::ResponsibleGaming,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Self::Terms => "terms.html",
            Self::Privacy => "privacy.html",
            Self::Cookies => "cookies.html",
            Self::ResponsibleGaming => "responsible-gaming.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Terms => "Terms & Conditions",
            Self::Privacy => "Privacy Policy",
            Self::Cookies => "Cookie Policy",
            Self::ResponsibleGaming => "Responsible Social Gaming",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Terms => TERMS,
            Self::Privacy => PRIVACY,
            Self::Cookies => COOKIES,
            Self::ResponsibleGaming => RESPONSIBLE_GAMING,
        }
    }

    /// Terms always show a table of contents, whatever the layout.
    fn always_toc(self) -> bool {
        self == Self::Terms
    }
}

/// One `## ` section of a document, body already rendered.
#[derive(Debug, Clone)]
pub struct LegalSection {
    pub id: String,
    pub heading: String,
    pub body: Markup,
}

/// A document after placeholder substitution and Markdown rendering.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub intro: Markup,
    pub sections: Vec<LegalSection>,
}

type LegalRenderer = fn(&RenderContext<'_>, LegalDocument, &RenderedDocument) -> Markup;

const RENDERERS: &[(LegalPageLayout, LegalRenderer)] = &[
    (LegalPageLayout::SidebarToc, sidebar_toc),
    (LegalPageLayout::Accordion, accordion),
    (LegalPageLayout::SingleColumn, single_column),
    (LegalPageLayout::TabNavigation, tab_navigation),
    (LegalPageLayout::FloatingToc, floating_toc),
];

/// Body of one legal page.
pub fn render_legal_page(ctx: &RenderContext, doc: LegalDocument) -> Markup {
    let rendered = render_document(ctx, doc);
    dispatch(RENDERERS, ctx.config.legal_page_layout, single_column)(ctx, doc, &rendered)
}

/// Substitute placeholders and split the document into rendered sections.
///
/// Substituted values are HTML-escaped first, so a site name can never
/// inject markup through the Markdown renderer's raw-HTML passthrough.
pub fn render_document(ctx: &RenderContext, doc: LegalDocument) -> RenderedDocument {
    let site = html! { (ctx.site_name()) }.into_string();
    let domain = html! { (ctx.identity.domain) }.into_string();
    let source = doc.source().replace("{site}", &site).replace("{domain}", &domain);

    let mut intro = String::new();
    let mut parts: Vec<(String, String)> = Vec::new();
    for line in source.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            parts.push((heading.trim().to_string(), String::new()));
        } else if let Some((_, body)) = parts.last_mut() {
            body.push_str(line);
            body.push('\n');
        } else {
            intro.push_str(line);
            intro.push('\n');
        }
    }

    let sections = parts
        .into_iter()
        .enumerate()
        .map(|(idx, (heading, body))| LegalSection {
            id: format!("section-{}", idx + 1),
            heading,
            body: markdown(&body),
        })
        .collect();

    RenderedDocument {
        intro: markdown(&intro),
        sections,
    }
}

fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}

// ============================================================================
// Shared fragments
// ============================================================================

fn page_header(ctx: &RenderContext, doc: LegalDocument) -> Markup {
    html! {
        header class=(ctx.class_of("legal", "header")) {
            h1 class=(ctx.class_of("page", "title")) { (doc.title()) }
            p class=(ctx.class_of("legal", "updated")) {
                "Last updated: "
                time datetime=(ctx.identity.generated_on.format("%Y-%m-%d").to_string()) {
                    (ctx.identity.generated_on.format("%B %-d, %Y").to_string())
                }
            }
        }
    }
}

fn toc(ctx: &RenderContext, doc: &RenderedDocument) -> Markup {
    html! {
        nav class=(ctx.class_of("legal", "toc")) aria-label="Table of contents" {
            h2 class=(ctx.class_of("toc", "title")) { "Contents" }
            ol {
                @for section in &doc.sections {
                    li { a class=(ctx.class_of("toc", "link")) href={ "#" (section.id) } { (section.heading) } }
                }
            }
        }
    }
}

fn section_block(ctx: &RenderContext, section: &LegalSection) -> Markup {
    html! {
        section class=(ctx.class_of("legal", "section")) id=(section.id) {
            h2 { (section.heading) }
            (section.body)
        }
    }
}

fn contents(ctx: &RenderContext, doc: &RenderedDocument) -> Markup {
    html! {
        div class=(ctx.class_of("legal", "intro")) { (doc.intro) }
        @for section in &doc.sections { (section_block(ctx, section)) }
    }
}

// ============================================================================
// Layouts
// ============================================================================

fn sidebar_toc(ctx: &RenderContext, doc: LegalDocument, rendered: &RenderedDocument) -> Markup {
    html! {
        div class=(ctx.classes(&[("container", None), ("legal", Some("with-sidebar"))])) {
            aside class=(ctx.class_of("legal", "sidebar")) { (toc(ctx, rendered)) }
            article class=(ctx.class_of("legal", "content")) {
                (page_header(ctx, doc))
                (contents(ctx, rendered))
            }
        }
    }
}

fn accordion(ctx: &RenderContext, doc: LegalDocument, rendered: &RenderedDocument) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (page_header(ctx, doc))
            @if doc.always_toc() { (toc(ctx, rendered)) }
            div class=(ctx.class_of("legal", "intro")) { (rendered.intro) }
            @for (idx, section) in rendered.sections.iter().enumerate() {
                details class=(ctx.class_of("accordion", "item")) id=(section.id) open[idx == 0] {
                    summary class=(ctx.class_of("accordion", "header")) { (section.heading) }
                    div class=(ctx.class_of("accordion", "body")) { (section.body) }
                }
            }
        }
    }
}

fn single_column(ctx: &RenderContext, doc: LegalDocument, rendered: &RenderedDocument) -> Markup {
    html! {
        article class=(ctx.classes(&[("container", None), ("legal", Some("single"))])) {
            (page_header(ctx, doc))
            @if doc.always_toc() { (toc(ctx, rendered)) }
            (contents(ctx, rendered))
        }
    }
}

fn tab_navigation(ctx: &RenderContext, doc: LegalDocument, rendered: &RenderedDocument) -> Markup {
    html! {
        div class=(ctx.class("container")) data-tabs {
            (page_header(ctx, doc))
            @if doc.always_toc() { (toc(ctx, rendered)) }
            div class=(ctx.class_of("legal", "intro")) { (rendered.intro) }
            div class=(ctx.class_of("tabs", "nav")) role="tablist" {
                @for (idx, section) in rendered.sections.iter().enumerate() {
                    button class=(ctx.class_of("tabs", "button")) type="button" role="tab"
                        data-tab=(section.id)
                        aria-selected=(if idx == 0 { "true" } else { "false" }) {
                        (section.heading)
                    }
                }
            }
            @for (idx, section) in rendered.sections.iter().enumerate() {
                div class=(ctx.class_of("tabs", "panel")) role="tabpanel" data-tab-panel=(section.id) hidden[idx > 0] {
                    (section_block(ctx, section))
                }
            }
        }
    }
}

fn floating_toc(ctx: &RenderContext, doc: LegalDocument, rendered: &RenderedDocument) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (page_header(ctx, doc))
            div class=(ctx.class_of("legal", "floating")) data-floating-toc { (toc(ctx, rendered)) }
            article class=(ctx.class_of("legal", "content")) { (contents(ctx, rendered)) }
            a class=(ctx.class_of("back", "top")) href="#" { "Back to top" }
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

const TERMS: &str = "\
Welcome to {site}. By accessing {domain} you agree to these terms.

## 1. Acceptance of Terms

By using {site} you confirm that you are at least 18 years old and that you
accept these Terms & Conditions in full. If you do not agree, please do not
use the site.

## 2. Social Gaming Only

All games on {site} are provided for **entertainment only**. No real money
can be wagered or won, and virtual credits have no cash value. Success in
social casino games does not imply future success at real money gambling.

## 3. Use of the Service

You agree not to:

- use the site for any unlawful purpose
- attempt to disrupt or reverse engineer the games
- misrepresent your age or identity

## 4. Intellectual Property

Games are supplied by their respective providers and remain their property.
The {site} name, design and content are protected and may not be copied
without permission.

## 5. Changes and Contact

We may update these terms at any time; the date above shows the latest
revision. Questions can be sent to legal@{domain}.
";

const PRIVACY: &str = "\
{site} respects your privacy. This policy explains what we collect on
{domain} and why.

## Information We Collect

We collect only what you choose to send us, such as your name and email
address when you use the contact form, plus anonymous usage statistics.

## How We Use Information

- to answer your messages
- to improve our games and pages
- to keep the site secure

We never sell personal information.

## Your Rights

You may request a copy of your data or ask us to delete it at any time.

## Contact

For privacy questions write to privacy@{domain}.
";

const COOKIES: &str = "\
This policy explains how {site} uses cookies on {domain}.

## What Are Cookies

Cookies are small text files stored by your browser. They help the site
remember preferences between visits.

## Cookies We Use

- **Essential cookies** keep the site working
- **Preference cookies** remember settings such as filters
- **Analytics cookies** help us understand which games are popular

## Managing Cookies

You can block or delete cookies in your browser settings. Some features may
not work without essential cookies.
";

const RESPONSIBLE_GAMING: &str = "\
{site} is a social casino: games are free and played with virtual credits
only. Even so, we want play to stay fun.

## Play for Fun

Set yourself time limits and take regular breaks. Games should never get in
the way of work, school or relationships.

## Warning Signs

- spending more time playing than intended
- feeling anxious or irritable when not playing
- thinking about moving on to real money gambling to chase wins

## Getting Help

If gaming stops being fun, organizations such as GamCare, Gamblers
Anonymous and the National Council on Problem Gambling offer free and
confidential support.

## Age Restriction

{site} is intended for adults aged 18 and over.
";
