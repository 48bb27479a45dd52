//! Home page hero, one variant per `hero` axis value.
//!
//! The headline and call to action are drawn once per run from fixed banks
//! ([`HeroCopy::sample`]); the renderers themselves are deterministic.

use super::{RenderContext, dispatch};
use crate::theme::HeroStyle;
use maud::{Markup, html};
use rand::Rng;

const HEADLINES: &[&str] = &[
    "Welcome to {site} - Play Free Casino Games!",
    "Experience the Thrill of Vegas Online",
    "Your #1 Destination for Social Casino Fun",
    "Play, Win, Enjoy - No Download Required",
    "Discover 100+ Free Casino Games",
    "Spin, Play, Win - All for Fun!",
    "The Ultimate Social Casino Experience",
];

const CALLS_TO_ACTION: &[&str] = &[
    "Play Now",
    "Start Playing",
    "Join the Fun",
    "Explore Games",
    "Browse Collection",
    "View All Games",
    "Get Started",
    "Play for Free",
    "Try Your Luck",
    "Spin Now",
    "Deal Me In",
    "Roll the Dice",
];

/// Hero text for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCopy {
    pub headline: String,
    pub call_to_action: String,
}

impl HeroCopy {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, site_name: &str) -> Self {
        let headline = HEADLINES[rng.random_range(0..HEADLINES.len())];
        let cta = CALLS_TO_ACTION[rng.random_range(0..CALLS_TO_ACTION.len())];
        Self {
            headline: headline.replace("{site}", site_name),
            call_to_action: cta.to_string(),
        }
    }
}

type HeroRenderer = fn(&RenderContext<'_>, &HeroCopy) -> Markup;

const RENDERERS: &[(HeroStyle, HeroRenderer)] = &[
    (HeroStyle::Fullscreen, fullscreen),
    (HeroStyle::Split, split),
    (HeroStyle::Centered, centered),
    (HeroStyle::Slider, slider),
    (HeroStyle::Interactive, interactive),
];

pub fn render(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    dispatch(RENDERERS, ctx.config.hero, centered)(ctx, copy)
}

fn cta_button(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href="games.html" {
            (copy.call_to_action)
        }
    }
}

fn fullscreen(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("hero", Some("fullscreen"))])) {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("animate", "fade-in")) {
                    h1 class=(ctx.class_of("hero", "title")) { (copy.headline) }
                    p class=(ctx.class_of("hero", "text")) {
                        "Experience premium casino entertainment with stunning graphics and immersive gameplay!"
                    }
                    div class=(ctx.class_of("hero", "actions")) {
                        (cta_button(ctx, copy))
                        a class=(ctx.classes(&[("btn", None), ("btn", Some("secondary"))])) href="#featured" { "Learn More" }
                    }
                }
            }
        }
    }
}

fn split(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("hero", Some("split"))])) {
            div class=(ctx.classes(&[("container", None), ("grid", Some("2"))])) {
                div class=(ctx.class_of("animate", "slide-in")) {
                    h1 class=(ctx.class_of("hero", "title")) { (copy.headline) }
                    p class=(ctx.class_of("hero", "text")) {
                        "Join thousands of players enjoying our premium collection of casino games!"
                    }
                    (cta_button(ctx, copy))
                }
                div class=(ctx.class_of("hero", "image")) aria-hidden="true" {
                    span class=(ctx.class_of("casino", "chip")) { "🎰" }
                    span class=(ctx.class_of("casino", "chip")) { "🃏" }
                    span class=(ctx.class_of("casino", "chip")) { "🎲" }
                }
            }
        }
    }
}

fn centered(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("hero", Some("centered")), ("text", Some("center"))])) {
            div class=(ctx.class("container")) {
                h1 class=(ctx.class_of("hero", "title")) { (copy.headline) }
                p class=(ctx.class_of("hero", "text")) {
                    "Discover hundreds of free casino games and play for unlimited fun!"
                }
                div class=(ctx.class_of("hero", "floating")) aria-hidden="true" {
                    @for icon in ["🎰", "🃏", "🎲"] {
                        span class=(ctx.class_of("floating", "card")) { (icon) }
                    }
                }
                (cta_button(ctx, copy))
            }
        }
    }
}

const SLIDES: &[(&str, &str, &str, &str)] = &[
    ("🎰 Slot Games", "Spin the reels and win big!", "Play Slots", "games.html?type=slot"),
    ("🃏 Table Games", "Classic casino table games!", "Play Tables", "games.html?type=table+game"),
    ("🎲 New Releases", "Fresh titles added every week!", "See What's New", "index.html#new"),
];

fn slider(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("hero", Some("slider"))])) data-slider {
            @for (idx, (title, text, button, href)) in SLIDES.iter().enumerate() {
                div class=(ctx.class("slide")) data-slide hidden[idx > 0] {
                    div class=(ctx.class("container")) {
                        @if idx == 0 {
                            h1 class=(ctx.class_of("hero", "title")) { (copy.headline) }
                        } @else {
                            h2 class=(ctx.class_of("hero", "title")) { (title) }
                        }
                        p class=(ctx.class_of("hero", "text")) { (text) }
                        a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href=(href) {
                            @if idx == 0 { (copy.call_to_action) } @else { (button) }
                        }
                    }
                }
            }
            div class=(ctx.class_of("slider", "controls")) {
                button class=(ctx.class_of("slider", "btn")) type="button" data-slide-prev aria-label="Previous slide" { "‹" }
                button class=(ctx.class_of("slider", "btn")) type="button" data-slide-next aria-label="Next slide" { "›" }
            }
            div class=(ctx.class_of("slider", "dots")) {
                @for idx in 0..SLIDES.len() {
                    button class=(ctx.class("dot")) type="button" data-slide-to=(idx) aria-label={ "Slide " (idx + 1) } {}
                }
            }
        }
    }
}

fn interactive(ctx: &RenderContext, copy: &HeroCopy) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("hero", Some("interactive"))])) data-parallax {
            div class=(ctx.class("container")) {
                div class=(ctx.class_of("animate", "fade-in")) {
                    h1 class=(ctx.class_of("hero", "title")) { (copy.headline) }
                    p class=(ctx.class_of("hero", "text")) {
                        "Interactive casino experience with stunning animations!"
                    }
                    div class=(ctx.class_of("interactive", "elements")) aria-hidden="true" {
                        span class=(ctx.classes(&[("casino", Some("chip")), ("animate", Some("spin"))])) { "💰" }
                        span class=(ctx.classes(&[("casino", Some("chip")), ("animate", Some("flip"))])) { "🃏" }
                        span class=(ctx.classes(&[("casino", Some("chip")), ("animate", Some("roll"))])) { "🎲" }
                    }
                    (cta_button(ctx, copy))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_config, fixture_identity, seeded};

    fn copy() -> HeroCopy {
        HeroCopy {
            headline: "Spin It".to_string(),
            call_to_action: "Play Now".to_string(),
        }
    }

    fn render_with(style: HeroStyle) -> String {
        let mut config = fixture_config();
        config.hero = style;
        let identity = fixture_identity();
        render(&RenderContext::new(&config, &identity, ""), &copy()).into_string()
    }

    #[test]
    fn every_style_shows_headline_and_cta() {
        for style in HeroStyle::OPTIONS {
            let html = render_with(*style);
            assert!(html.contains("Spin It"), "{style}");
            assert!(html.contains("Play Now"), "{style}");
        }
    }

    #[test]
    fn unrecognized_style_uses_centered() {
        assert_eq!(render_with(HeroStyle::Unrecognized), render_with(HeroStyle::Centered));
    }

    #[test]
    fn slider_hides_all_but_first_slide() {
        let html = render_with(HeroStyle::Slider);
        assert_eq!(html.matches("data-slide ").count() + html.matches("data-slide>").count(), 3);
        assert_eq!(html.matches(" hidden").count(), 2);
    }

    #[test]
    fn copy_is_reproducible_and_fills_site_name() {
        let a = HeroCopy::sample(&mut seeded(1), "Golden Dice Club");
        let b = HeroCopy::sample(&mut seeded(1), "Golden Dice Club");
        assert_eq!(a, b);
        assert!(!a.headline.contains("{site}"));
        for seed in 0..50 {
            let c = HeroCopy::sample(&mut seeded(seed), "Golden Dice Club");
            if c.headline.starts_with("Welcome") {
                assert!(c.headline.contains("Golden Dice Club"));
            }
        }
    }
}
