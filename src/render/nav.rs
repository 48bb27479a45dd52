//! Site navigation, one variant per `navigation` axis value.

use super::{LEGAL_LINKS, MAIN_LINKS, RenderContext, dispatch};
use crate::theme::NavigationStyle;
use maud::{Markup, html};

type NavRenderer = fn(&RenderContext<'_>) -> Markup;

const RENDERERS: &[(NavigationStyle, NavRenderer)] = &[
    (NavigationStyle::Traditional, traditional),
    (NavigationStyle::Centered, centered),
    (NavigationStyle::Sidebar, sidebar),
    (NavigationStyle::Sticky, sticky),
    (NavigationStyle::Mega, mega),
];

/// Render the navigation for the run's configured style.
pub fn render(ctx: &RenderContext) -> Markup {
    dispatch(RENDERERS, ctx.config.navigation, traditional)(ctx)
}

fn link_list(ctx: &RenderContext) -> Markup {
    html! {
        ul class=(ctx.class_of("nav", "list")) {
            @for (href, label) in MAIN_LINKS {
                li { a class=(ctx.class_of("nav", "link")) href=(href) { (label) } }
            }
        }
    }
}

fn traditional(ctx: &RenderContext) -> Markup {
    let inner = html! {
        div class=(ctx.class("container")) {
            div class=(ctx.class_of("flex", "between")) {
                a class=(ctx.class("logo")) href="index.html" { (ctx.site_name()) }
                (link_list(ctx))
            }
        }
    };
    html! {
        @if ctx.semantic() {
            header {
                nav class=(ctx.class("nav")) { (inner) }
            }
        } @else {
            div class=(ctx.classes(&[("nav", None), ("top", Some("bar"))])) role="navigation" { (inner) }
        }
    }
}

fn centered(ctx: &RenderContext) -> Markup {
    html! {
        nav class=(ctx.classes(&[("nav", None), ("nav", Some("centered"))])) {
            div class=(ctx.classes(&[("container", None), ("text", Some("center"))])) {
                a class=(ctx.class("logo")) href="index.html" { (ctx.site_name()) }
                (link_list(ctx))
            }
        }
    }
}

fn sidebar(ctx: &RenderContext) -> Markup {
    html! {
        nav class=(ctx.classes(&[("nav", None), ("nav", Some("sidebar"))])) id="sidebar-nav" data-sidebar {
            div class=(ctx.class_of("sidebar", "header")) {
                a class=(ctx.class("logo")) href="index.html" { (ctx.site_name()) }
                button class=(ctx.class_of("sidebar", "toggle")) type="button" data-sidebar-toggle aria-label="Close menu" { "×" }
            }
            div class=(ctx.class_of("nav", "group")) {
                h4 { "Main Pages" }
                (link_list(ctx))
            }
            div class=(ctx.class_of("nav", "group")) {
                h4 { "Legal" }
                ul class=(ctx.class_of("nav", "list")) {
                    @for (href, label) in LEGAL_LINKS {
                        li { a class=(ctx.class_of("nav", "link")) href=(href) { (label) } }
                    }
                }
            }
        }
        button class=(ctx.classes(&[("sidebar", Some("toggle")), ("sidebar", Some("mobile"))])) type="button" data-sidebar-toggle aria-label="Open menu" { "☰" }
    }
}

fn sticky(ctx: &RenderContext) -> Markup {
    html! {
        nav class=(ctx.classes(&[("nav", None), ("nav", Some("sticky"))])) data-sticky-nav {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("flex", "between")) {
                    a class=(ctx.class("logo")) href="index.html" { (ctx.site_name()) }
                    form class=(ctx.class_of("nav", "search")) action="games.html" method="get" {
                        input class=(ctx.class_of("search", "bar")) type="search" name="q" placeholder="Search games..." aria-label="Search games";
                    }
                    (link_list(ctx))
                }
            }
        }
    }
}

fn mega(ctx: &RenderContext) -> Markup {
    html! {
        nav class=(ctx.classes(&[("nav", None), ("nav", Some("mega"))])) {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("flex", "between")) {
                    a class=(ctx.class("logo")) href="index.html" { (ctx.site_name()) }
                    ul class=(ctx.class_of("nav", "list")) {
                        li class=(ctx.class("dropdown")) {
                            a class=(ctx.class_of("nav", "link")) href="index.html" { "Home" }
                        }
                        li class=(ctx.class("dropdown")) {
                            a class=(ctx.class_of("nav", "link")) href="games.html" { "Games ▾" }
                            div class=(ctx.classes(&[("dropdown", Some("content")), ("dropdown", Some("grid"))])) {
                                div {
                                    h4 { "Categories" }
                                    a href="games.html?type=slot" { "Slots" }
                                    a href="games.html?type=table+game" { "Table Games" }
                                }
                                div {
                                    h4 { "Browse" }
                                    a href="games.html" { "All Games" }
                                    a href="index.html#new" { "New Releases" }
                                    a href="index.html#featured" { "Featured" }
                                }
                            }
                        }
                        li class=(ctx.class("dropdown")) {
                            a class=(ctx.class_of("nav", "link")) href="about.html" { "About ▾" }
                            div class=(ctx.class_of("dropdown", "content")) {
                                a href="about.html" { "About Us" }
                                a href="contact.html" { "Contact" }
                                a href="responsible-gaming.html" { "Responsible Gaming" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_config, fixture_identity};
    use crate::theme::DomStructure;

    fn render_with(style: NavigationStyle, dom: DomStructure) -> String {
        let mut config = fixture_config();
        config.navigation = style;
        config.dom_structure = dom;
        let identity = fixture_identity();
        render(&RenderContext::new(&config, &identity, "")).into_string()
    }

    #[test]
    fn every_style_links_main_pages() {
        for style in NavigationStyle::OPTIONS {
            let html = render_with(*style, DomStructure::Semantic);
            for page in ["index.html", "games.html", "about.html", "contact.html"] {
                assert!(html.contains(page), "{style} nav missing {page}");
            }
            assert!(html.contains("Lucky Spin Casino"));
        }
    }

    #[test]
    fn unrecognized_style_uses_traditional() {
        let fallback = render_with(NavigationStyle::Unrecognized, DomStructure::Semantic);
        assert!(!fallback.is_empty());
        assert_eq!(fallback, render_with(NavigationStyle::Traditional, DomStructure::Semantic));
    }

    #[test]
    fn traditional_follows_dom_structure() {
        let semantic = render_with(NavigationStyle::Traditional, DomStructure::Semantic);
        let generic = render_with(NavigationStyle::Traditional, DomStructure::Generic);
        assert!(semantic.starts_with("<header>"));
        assert!(!generic.contains("<header>"));
        assert!(generic.contains("role=\"navigation\""));
    }

    #[test]
    fn sidebar_has_toggle_hooks_and_legal_links() {
        let html = render_with(NavigationStyle::Sidebar, DomStructure::Semantic);
        assert!(html.contains("data-sidebar-toggle"));
        assert!(html.contains("responsible-gaming.html"));
    }
}
