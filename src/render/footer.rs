//! Site footer, one variant per `footer` axis value.

use super::{LEGAL_LINKS, MAIN_LINKS, RenderContext, dispatch};
use crate::theme::FooterStyle;
use maud::{Markup, html};

type FooterRenderer = fn(&RenderContext<'_>) -> Markup;

const RENDERERS: &[(FooterStyle, FooterRenderer)] = &[
    (FooterStyle::Mega, mega),
    (FooterStyle::Minimal, minimal),
    (FooterStyle::Accordion, accordion),
    (FooterStyle::MapStyle, map_style),
    (FooterStyle::Dark, dark),
];

pub fn render(ctx: &RenderContext) -> Markup {
    dispatch(RENDERERS, ctx.config.footer, minimal)(ctx)
}

fn copyright(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class_of("footer", "bottom")) {
            p {
                "© " (ctx.identity.copyright_year()) " " (ctx.site_name()) ". All rights reserved. "
                "Social casino games for entertainment only. No real money gambling."
            }
        }
    }
}

fn link_column(ctx: &RenderContext, heading: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        div class=(ctx.class_of("footer", "column")) {
            h5 { (heading) }
            ul class=(ctx.class_of("footer", "links")) {
                @for (href, label) in links {
                    li { a class=(ctx.class_of("footer", "link")) href=(href) { (label) } }
                }
            }
        }
    }
}

fn mega(ctx: &RenderContext) -> Markup {
    html! {
        footer class=(ctx.classes(&[("footer", None), ("footer", Some("mega"))])) {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("footer", "grid")) {
                    div class=(ctx.class_of("footer", "column")) {
                        h4 { (ctx.site_name()) }
                        p { "Your favorite social casino destination with hundreds of free games." }
                    }
                    (link_column(ctx, "Quick Links", MAIN_LINKS))
                    (link_column(ctx, "Game Categories", &[
                        ("games.html?type=slot", "Slot Games"),
                        ("games.html?type=table+game", "Table Games"),
                        ("games.html", "All Games"),
                    ]))
                    (link_column(ctx, "Legal", LEGAL_LINKS))
                    div class=(ctx.class_of("footer", "column")) {
                        h5 { "Newsletter" }
                        p { "Get updates on new games and features!" }
                        form class=(ctx.class_of("newsletter", "form")) data-newsletter {
                            input type="email" name="email" placeholder="Your email" aria-label="Email address" required;
                            button class=(ctx.classes(&[("btn", None), ("btn", Some("accent"))])) type="submit" { "Subscribe" }
                        }
                    }
                }
                (copyright(ctx))
            }
        }
    }
}

fn minimal(ctx: &RenderContext) -> Markup {
    html! {
        footer class=(ctx.classes(&[("footer", None), ("footer", Some("minimal"))])) {
            div class=(ctx.classes(&[("container", None), ("flex", Some("between")), ("flex", Some("wrap"))])) {
                span class=(ctx.class("logo")) { (ctx.site_name()) }
                nav class=(ctx.class_of("footer", "links")) aria-label="Footer" {
                    @for (href, label) in MAIN_LINKS.iter().chain(LEGAL_LINKS) {
                        a class=(ctx.class_of("footer", "link")) href=(href) { (label) }
                    }
                }
            }
            div class=(ctx.class("container")) { (copyright(ctx)) }
        }
    }
}

fn accordion(ctx: &RenderContext) -> Markup {
    let groups: [(&str, &[(&str, &str)]); 2] = [("Explore", MAIN_LINKS), ("Legal", LEGAL_LINKS)];
    html! {
        footer class=(ctx.classes(&[("footer", None), ("footer", Some("accordion"))])) {
            div class=(ctx.class("container")) {
                h4 { (ctx.site_name()) }
                @for (heading, links) in groups {
                    details class=(ctx.class_of("accordion", "item")) {
                        summary class=(ctx.class_of("accordion", "header")) { (heading) }
                        ul class=(ctx.class_of("footer", "links")) {
                            @for (href, label) in links {
                                li { a class=(ctx.class_of("footer", "link")) href=(href) { (label) } }
                            }
                        }
                    }
                }
                details class=(ctx.class_of("accordion", "item")) {
                    summary class=(ctx.class_of("accordion", "header")) { "Contact" }
                    p {
                        a class=(ctx.class_of("footer", "link")) href={ "mailto:" (ctx.identity.mailbox("support")) } {
                            (ctx.identity.mailbox("support"))
                        }
                    }
                }
                (copyright(ctx))
            }
        }
    }
}

fn map_style(ctx: &RenderContext) -> Markup {
    html! {
        footer class=(ctx.classes(&[("footer", None), ("footer", Some("map"))])) {
            div class=(ctx.class("container")) {
                div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                    div class=(ctx.class_of("map", "placeholder")) role="img" aria-label="Players around the world" {
                        span aria-hidden="true" { "🌍" }
                        p { "Players from all over the world" }
                    }
                    div {
                        h4 { (ctx.site_name()) }
                        p { "Online everywhere, open around the clock." }
                        p {
                            "Support: "
                            a class=(ctx.class_of("footer", "link")) href={ "mailto:" (ctx.identity.mailbox("support")) } {
                                (ctx.identity.mailbox("support"))
                            }
                        }
                        (link_column(ctx, "Legal", LEGAL_LINKS))
                    }
                }
                (copyright(ctx))
            }
        }
    }
}

fn dark(ctx: &RenderContext) -> Markup {
    html! {
        footer class=(ctx.classes(&[("footer", None), ("footer", Some("dark"))])) {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("footer", "grid")) {
                    div class=(ctx.class_of("footer", "column")) {
                        h4 { (ctx.site_name()) }
                        p { "Free social casino games. Play for fun, every day." }
                    }
                    (link_column(ctx, "Site", MAIN_LINKS))
                    (link_column(ctx, "Legal", LEGAL_LINKS))
                }
                p class=(ctx.class_of("footer", "notice")) {
                    "18+ only. Virtual credits have no cash value and cannot be redeemed."
                }
                (copyright(ctx))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_config, fixture_identity};

    fn render_with(style: FooterStyle) -> String {
        let mut config = fixture_config();
        config.footer = style;
        let identity = fixture_identity();
        render(&RenderContext::new(&config, &identity, "")).into_string()
    }

    #[test]
    fn every_style_links_legal_pages_and_copyright() {
        for style in FooterStyle::OPTIONS {
            let html = render_with(*style);
            assert!(html.starts_with("<footer"), "{style}");
            assert!(html.contains("terms.html"), "{style}");
            assert!(html.contains("privacy.html"), "{style}");
            assert!(html.contains("© 2025 Lucky Spin Casino"), "{style}");
        }
    }

    #[test]
    fn unrecognized_style_uses_minimal() {
        assert_eq!(render_with(FooterStyle::Unrecognized), render_with(FooterStyle::Minimal));
    }

    #[test]
    fn contact_variants_use_site_mailbox() {
        for style in [FooterStyle::Accordion, FooterStyle::MapStyle] {
            assert!(render_with(style).contains("mailto:support@example.com"));
        }
    }
}
