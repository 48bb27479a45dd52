//! About content: the home page block (`about_section`) and the full about
//! page (`about_page_layout`).

use super::{RenderContext, dispatch};
use crate::theme::{AboutPageLayout, AboutSectionStyle};
use maud::{Markup, html};

type AboutRenderer = fn(&RenderContext<'_>) -> Markup;

const SECTIONS: &[(AboutSectionStyle, AboutRenderer)] = &[
    (AboutSectionStyle::TextIcons, text_icons),
    (AboutSectionStyle::Video, video),
    (AboutSectionStyle::Statistics, statistics),
    (AboutSectionStyle::Testimonials, testimonials),
    (AboutSectionStyle::Interactive, interactive),
];

const PAGES: &[(AboutPageLayout, AboutRenderer)] = &[
    (AboutPageLayout::Timeline, timeline_page),
    (AboutPageLayout::TeamGrid, team_grid_page),
    (AboutPageLayout::SplitScreen, split_screen_page),
    (AboutPageLayout::Story, story_page),
    (AboutPageLayout::VideoBackground, video_background_page),
];

/// About block at the bottom of the home page.
pub fn render_section(ctx: &RenderContext) -> Markup {
    dispatch(SECTIONS, ctx.config.about_section, text_icons)(ctx)
}

/// Body of `about.html`.
pub fn render_page(ctx: &RenderContext) -> Markup {
    dispatch(PAGES, ctx.config.about_page_layout, split_screen_page)(ctx)
}

const FEATURES: &[(&str, &str)] = &[
    ("🎰", "100% Free to Play"),
    ("📥", "No Download Required"),
    ("⚡", "Instant Play"),
    ("📱", "Mobile Friendly"),
];

const STATS: &[(&str, &str, &str)] = &[
    ("500+", "Free Games", "Huge collection of casino games to play"),
    ("1M+", "Happy Players", "Join our community of casino game enthusiasts"),
    ("24/7", "Always Open", "Play anytime, anywhere, completely free"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Finally a casino site that is just about fun. The slots look amazing!", "Sarah M."),
    ("I play a few spins every evening. No pressure, no deposits.", "James T."),
    ("Great selection of table games and it works perfectly on my phone.", "Priya K."),
];

const VALUES: &[(&str, &str, &str)] = &[
    (
        "🌟",
        "Excellence",
        "We strive to provide the highest quality gaming experience with premium games and smooth gameplay.",
    ),
    (
        "🤝",
        "Community",
        "Building a welcoming community where players can enjoy casino games in a safe, fun environment.",
    ),
    (
        "⚡",
        "Innovation",
        "Continuously improving our platform with the latest technology and gaming innovations.",
    ),
];

const MILESTONES: &[(&str, &str)] = &[
    (
        "2020 - Founded",
        "Started as a passion project to bring quality casino entertainment to everyone.",
    ),
    ("2021 - Growth", "Expanded our game library to include hundreds of premium casino games."),
    ("2022 - Innovation", "Introduced mobile-first design and an enhanced player experience."),
    ("Today", "Serving players worldwide with the best free social casino experience."),
];

const TEAM: &[(&str, &str)] = &[
    ("Alex Rivera", "Head of Games"),
    ("Morgan Lee", "Community Manager"),
    ("Sam Patel", "Lead Designer"),
    ("Jordan Blake", "Player Support"),
];

fn about_heading(ctx: &RenderContext) -> Markup {
    html! {
        h2 class=(ctx.classes(&[("section", Some("title")), ("text", Some("center"))])) {
            "About " (ctx.site_name())
        }
    }
}

fn section_shell(ctx: &RenderContext, content: Markup) -> Markup {
    html! {
        section class=(ctx.classes(&[("section", None), ("about", Some("section"))])) id="about" {
            div class=(ctx.class("container")) { (content) }
        }
    }
}

// ============================================================================
// Home page block
// ============================================================================

fn text_icons(ctx: &RenderContext) -> Markup {
    section_shell(ctx, html! {
        (about_heading(ctx))
        p class=(ctx.class_of("about", "lead")) {
            "Welcome to the ultimate social casino experience! We offer hundreds of free casino games "
            "that you can play instantly in your browser. No downloads, no registration required."
        }
        ul class=(ctx.classes(&[("grid", None), ("grid", Some("4")), ("features", Some("list"))])) {
            @for (icon, label) in FEATURES {
                li class=(ctx.class_of("feature", "item")) {
                    span class=(ctx.class_of("feature", "icon")) aria-hidden="true" { (icon) }
                    span { (label) }
                }
            }
        }
    })
}

fn video(ctx: &RenderContext) -> Markup {
    section_shell(ctx, html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
            div class=(ctx.class_of("video", "frame")) role="img" aria-label="Gameplay preview" {
                span class=(ctx.class_of("video", "play")) aria-hidden="true" { "▶" }
            }
            div {
                (about_heading(ctx))
                p {
                    "Take a look at the games our players love. Every title runs right in your browser "
                    "with no download and no sign-up."
                }
                a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href="games.html" { "Browse Games" }
            }
        }
    })
}

fn statistics(ctx: &RenderContext) -> Markup {
    section_shell(ctx, html! {
        h2 class=(ctx.classes(&[("section", Some("title")), ("text", Some("center"))])) {
            "Why Choose " (ctx.site_name()) "?"
        }
        div class=(ctx.classes(&[("grid", None), ("grid", Some("3"))])) {
            @for (number, title, text) in STATS {
                div class=(ctx.classes(&[("stat", Some("card")), ("text", Some("center"))])) {
                    div class=(ctx.class_of("stat", "number")) { (number) }
                    h3 { (title) }
                    p { (text) }
                }
            }
        }
    })
}

fn testimonials(ctx: &RenderContext) -> Markup {
    section_shell(ctx, html! {
        h2 class=(ctx.classes(&[("section", Some("title")), ("text", Some("center"))])) { "What Our Players Say" }
        div class=(ctx.classes(&[("grid", None), ("grid", Some("3"))])) {
            @for (quote, author) in TESTIMONIALS {
                figure class=(ctx.class("testimonial")) {
                    blockquote { (quote) }
                    figcaption class=(ctx.class_of("testimonial", "author")) { "- " (author) }
                }
            }
        }
    })
}

fn interactive(ctx: &RenderContext) -> Markup {
    section_shell(ctx, html! {
        (about_heading(ctx))
        div class=(ctx.classes(&[("grid", None), ("grid", Some("3"))])) {
            @for (number, title, text) in STATS {
                details class=(ctx.class_of("flip", "card")) {
                    summary class=(ctx.class_of("stat", "number")) { (number) " " (title) }
                    p { (text) }
                }
            }
        }
    })
}

// ============================================================================
// About page
// ============================================================================

fn page_title(ctx: &RenderContext) -> Markup {
    html! {
        h1 class=(ctx.classes(&[("page", Some("title")), ("text", Some("center"))])) {
            "About " (ctx.site_name())
        }
    }
}

fn values(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class_of("values", "section")) {
            h2 class=(ctx.classes(&[("section", Some("title")), ("text", Some("center"))])) { "Our Values" }
            div class=(ctx.classes(&[("grid", None), ("grid", Some("3"))])) {
                @for (icon, title, text) in VALUES {
                    div class=(ctx.class_of("text", "center")) {
                        div class=(ctx.class_of("feature", "icon")) aria-hidden="true" { (icon) }
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        }
    }
}

fn timeline_page(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (page_title(ctx))
            ol class=(ctx.class("timeline")) {
                @for (idx, (title, text)) in MILESTONES.iter().enumerate() {
                    li class=(ctx.classes(&[("timeline", Some("item")), ("timeline", Some(if idx % 2 == 0 { "left" } else { "right" }))])) {
                        span class=(ctx.class_of("timeline", "marker")) {}
                        div class=(ctx.classes(&[("timeline", Some("content")), ("card", None)])) {
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
            }
        }
    }
}

fn team_grid_page(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (page_title(ctx))
            p class=(ctx.classes(&[("about", Some("lead")), ("text", Some("center"))])) {
                "A small team of game lovers building the friendliest free casino on the web."
            }
            div class=(ctx.classes(&[("grid", None), ("grid", Some("4"))])) {
                @for (name, role) in TEAM {
                    div class=(ctx.classes(&[("card", None), ("team", Some("card"))])) {
                        div class=(ctx.class_of("team", "avatar")) aria-hidden="true" {
                            (name.chars().next().unwrap_or('?'))
                        }
                        h3 { (name) }
                        p class=(ctx.class_of("team", "role")) { (role) }
                    }
                }
            }
            (values(ctx))
        }
    }
}

fn split_screen_page(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (page_title(ctx))
            div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                div {
                    h2 { "Welcome to the Ultimate Casino Experience" }
                    p {
                        "At " (ctx.site_name()) ", we're passionate about providing the best social casino gaming experience. "
                        "Our platform offers hundreds of casino games that you can play for free, anytime, anywhere."
                    }
                    p {
                        "Whether you're a seasoned casino enthusiast or just looking for some fun entertainment, "
                        "our collection of slots and table games has something for everyone."
                    }
                }
                ul class=(ctx.class_of("features", "list")) {
                    @for (icon, label) in FEATURES {
                        li class=(ctx.class_of("feature", "item")) {
                            span class=(ctx.class_of("feature", "icon")) aria-hidden="true" { (icon) }
                            span { (label) }
                        }
                    }
                }
            }
            (values(ctx))
        }
    }
}

fn story_page(ctx: &RenderContext) -> Markup {
    html! {
        article class=(ctx.classes(&[("container", None), ("story", None)])) {
            (page_title(ctx))
            p class=(ctx.class_of("story", "dropcap")) {
                "It started with a simple idea: casino games should be about fun, not risk. "
                (ctx.site_name()) " was built so anyone can enjoy the excitement of the reels and the tables "
                "without spending a cent."
            }
            h2 { "What We Believe" }
            p {
                "Games are entertainment. Nothing on " (ctx.identity.domain) " involves real money, "
                "and nothing ever will."
            }
            @for (_, title, text) in VALUES {
                h3 { (title) }
                p { (text) }
            }
        }
    }
}

fn video_background_page(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class_of("video", "backdrop")) {
            div class=(ctx.classes(&[("container", None), ("text", Some("center"))])) {
                (page_title(ctx))
                p class=(ctx.class_of("about", "lead")) {
                    "Premium free-to-play casino entertainment, straight to your browser."
                }
                div class=(ctx.classes(&[("grid", None), ("grid", Some("3"))])) {
                    @for (number, title, _) in STATS {
                        div class=(ctx.class_of("stat", "card")) {
                            div class=(ctx.class_of("stat", "number")) { (number) }
                            p { (title) }
                        }
                    }
                }
            }
        }
        div class=(ctx.class("container")) { (values(ctx)) }
    }
}
