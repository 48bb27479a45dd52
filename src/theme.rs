//! Layout axes and the per-run configuration sampler.
//!
//! A generated site is described by one choice on each of a dozen independent
//! layout axes (navigation style, hero layout, footer style, ...). Each axis is
//! its own enum. [`SiteConfiguration::sample`] draws every axis uniformly and
//! independently; there are no cross-axis exclusion rules.
//!
//! ## Unrecognized Values
//!
//! Every axis carries an `Unrecognized` variant that deserialization falls back
//! to for unknown strings. The sampler never draws it. Renderers map it to
//! their default fragment, so a configuration written by a newer version (or
//! edited by hand) still renders.
//!
//! ## Randomness
//!
//! Sampling takes an explicit `Rng`. The builder seeds a `StdRng` per run, so
//! the same seed always produces the same configuration.

use crate::naming::NamingConvention;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Declares a layout axis: a unit enum with kebab-case wire names, the list of
/// sampleable options, and an `Unrecognized` catch-all.
macro_rules! layout_axis {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
            /// Any value outside the option set. Never sampled.
            #[serde(other)]
            Unrecognized,
        }

        impl $name {
            /// Every value the sampler may draw, in declaration order.
            pub const OPTIONS: &'static [$name] = &[$($name::$variant),+];

            /// Draw one option uniformly.
            pub fn sample<R: ::rand::Rng + ?Sized>(rng: &mut R) -> Self {
                Self::OPTIONS[rng.random_range(0..Self::OPTIONS.len())]
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Unrecognized => "unrecognized",
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use layout_axis;

layout_axis! {
    /// CSS framework the site links from a CDN, or `custom` for the
    /// generated component stylesheet.
    Framework {
        Tailwind => "tailwind",
        Bootstrap => "bootstrap",
        Bulma => "bulma",
        Foundation => "foundation",
        Materialize => "materialize",
        Pure => "pure",
        Semantic => "semantic",
        Uikit => "uikit",
        Skeleton => "skeleton",
        Custom => "custom",
    }
}

layout_axis! {
    ColorScheme {
        Vegas => "vegas",
        Neon => "neon",
        Royal => "royal",
        Digital => "digital",
        Dark => "dark",
    }
}

layout_axis! {
    NavigationStyle {
        Traditional => "traditional",
        Centered => "centered",
        Sidebar => "sidebar",
        Sticky => "sticky",
        Mega => "mega",
    }
}

layout_axis! {
    HeroStyle {
        Fullscreen => "fullscreen",
        Split => "split",
        Centered => "centered",
        Slider => "slider",
        Interactive => "interactive",
    }
}

layout_axis! {
    /// Layout of the home page "Featured Games" section.
    FeaturedLayout {
        CardGrid => "card-grid",
        Carousel => "carousel",
        Masonry => "masonry",
        List => "list",
        Hexagonal => "hexagonal",
    }
}

layout_axis! {
    /// Layout of the home page "New Games" section.
    NewGamesLayout {
        Ribbon => "ribbon",
        Spotlight => "spotlight",
        Ticker => "ticker",
        GridDates => "grid-dates",
        Timeline => "timeline",
    }
}

layout_axis! {
    /// Style of the about block on the home page.
    AboutSectionStyle {
        TextIcons => "text-icons",
        Video => "video",
        Statistics => "statistics",
        Testimonials => "testimonials",
        Interactive => "interactive",
    }
}

layout_axis! {
    FooterStyle {
        Mega => "mega",
        Minimal => "minimal",
        Accordion => "accordion",
        MapStyle => "map-style",
        Dark => "dark",
    }
}

layout_axis! {
    GamesPageLayout {
        Grid => "grid",
        List => "list",
        CardFlip => "card-flip",
        Magazine => "magazine",
        Masonry => "masonry",
    }
}

layout_axis! {
    GamePageLayout {
        Centered => "centered",
        Sidebar => "sidebar",
        Tabbed => "tabbed",
        Fullscreen => "fullscreen",
        Hero => "hero",
    }
}

layout_axis! {
    AboutPageLayout {
        Timeline => "timeline",
        TeamGrid => "team-grid",
        SplitScreen => "split-screen",
        Story => "story",
        VideoBackground => "video-bg",
    }
}

layout_axis! {
    ContactPageLayout {
        ContactForm => "contact-form",
        EmailDisplay => "email-display",
        SplitLayout => "split-layout",
        FaqContact => "faq-contact",
        MapIntegration => "map-integration",
    }
}

layout_axis! {
    LegalPageLayout {
        SidebarToc => "sidebar-toc",
        Accordion => "accordion",
        SingleColumn => "single-column",
        TabNavigation => "tab-navigation",
        FloatingToc => "floating-toc",
    }
}

layout_axis! {
    /// Whether page bodies use semantic landmarks (`<main>`, `<header>`) or
    /// generic wrapper elements.
    DomStructure {
        Semantic => "semantic",
        Generic => "generic",
    }
}

/// Three brand colors, emitted as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl ColorScheme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Vegas | Self::Unrecognized => Palette {
                primary: "#dc2626",
                secondary: "#1f2937",
                accent: "#fbbf24",
            },
            Self::Neon => Palette {
                primary: "#8b5cf6",
                secondary: "#1e40af",
                accent: "#ec4899",
            },
            Self::Royal => Palette {
                primary: "#6b21a8",
                secondary: "#1c1917",
                accent: "#fbbf24",
            },
            Self::Digital => Palette {
                primary: "#0d9488",
                secondary: "#ea580c",
                accent: "#f8fafc",
            },
            Self::Dark => Palette {
                primary: "#111827",
                secondary: "#4b5563",
                accent: "#06b6d4",
            },
        }
    }
}

/// The full per-run theme: one value per layout axis plus a few flags.
///
/// Sampled once, then shared read-only by every renderer of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfiguration {
    pub framework: Framework,
    pub color_scheme: ColorScheme,
    pub navigation: NavigationStyle,
    pub hero: HeroStyle,
    pub featured_games_layout: FeaturedLayout,
    pub new_games_layout: NewGamesLayout,
    pub about_section: AboutSectionStyle,
    pub footer: FooterStyle,
    pub games_page_layout: GamesPageLayout,
    pub game_page_layout: GamePageLayout,
    pub about_page_layout: AboutPageLayout,
    pub contact_page_layout: ContactPageLayout,
    pub legal_page_layout: LegalPageLayout,
    pub dom_structure: DomStructure,
    pub naming: NamingConvention,
    /// Inline the stylesheet into every page instead of linking `css/style.css`.
    pub inline_css: bool,
    /// Sampled and recorded, but no renderer reads it yet.
    pub use_webp: bool,
    /// Sampled in `1..=5` and recorded. Inert: no renderer reads it.
    pub styling_approach: u8,
}

impl SiteConfiguration {
    /// Draw a configuration, every axis independently and uniformly.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            framework: Framework::sample(rng),
            color_scheme: ColorScheme::sample(rng),
            navigation: NavigationStyle::sample(rng),
            hero: HeroStyle::sample(rng),
            featured_games_layout: FeaturedLayout::sample(rng),
            new_games_layout: NewGamesLayout::sample(rng),
            about_section: AboutSectionStyle::sample(rng),
            footer: FooterStyle::sample(rng),
            games_page_layout: GamesPageLayout::sample(rng),
            game_page_layout: GamePageLayout::sample(rng),
            about_page_layout: AboutPageLayout::sample(rng),
            contact_page_layout: ContactPageLayout::sample(rng),
            legal_page_layout: LegalPageLayout::sample(rng),
            dom_structure: DomStructure::sample(rng),
            naming: NamingConvention::sample(rng),
            inline_css: rng.random_bool(0.5),
            use_webp: rng.random_bool(0.7),
            styling_approach: rng.random_range(1..=5),
        }
    }

    pub fn palette(&self) -> Palette {
        self.color_scheme.palette()
    }

    /// `(axis, value)` pairs for display, in a stable order.
    pub fn axes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("framework", self.framework.to_string()),
            ("color scheme", self.color_scheme.to_string()),
            ("navigation", self.navigation.to_string()),
            ("hero", self.hero.to_string()),
            ("featured games", self.featured_games_layout.to_string()),
            ("new games", self.new_games_layout.to_string()),
            ("about section", self.about_section.to_string()),
            ("footer", self.footer.to_string()),
            ("games page", self.games_page_layout.to_string()),
            ("game page", self.game_page_layout.to_string()),
            ("about page", self.about_page_layout.to_string()),
            ("contact page", self.contact_page_layout.to_string()),
            ("legal pages", self.legal_page_layout.to_string()),
            ("dom structure", self.dom_structure.to_string()),
            ("class naming", self.naming.to_string()),
            ("inline css", self.inline_css.to_string()),
            ("webp", self.use_webp.to_string()),
            ("styling approach", self.styling_approach.to_string()),
        ]
    }
}

const NAME_ADJECTIVES: &[&str] = &[
    "Lucky", "Golden", "Royal", "Diamond", "Vegas", "Supreme", "Elite", "Premium", "Silver",
    "Mega",
];
const NAME_TERMS: &[&str] = &[
    "Spin", "Dice", "Flush", "Slots", "Dreams", "Fortune", "Jackpot", "Palace", "Crown", "Win",
];
const NAME_SUFFIXES: &[&str] = &["Casino", "Games", "Club", "Palace", "Arena"];

/// Draw a site name from the word banks: `"{Adjective} {Term} {Suffix}"`.
pub fn generate_site_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = NAME_ADJECTIVES[rng.random_range(0..NAME_ADJECTIVES.len())];
    let term = NAME_TERMS[rng.random_range(0..NAME_TERMS.len())];
    let suffix = NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())];
    format!("{adjective} {term} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::seeded;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_configuration() {
        let a = SiteConfiguration::sample(&mut seeded(42));
        let b = SiteConfiguration::sample(&mut seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sampler_never_draws_unrecognized() {
        let mut rng = seeded(7);
        for _ in 0..500 {
            let config = SiteConfiguration::sample(&mut rng);
            assert_ne!(config.navigation, NavigationStyle::Unrecognized);
            assert_ne!(config.hero, HeroStyle::Unrecognized);
            assert_ne!(config.footer, FooterStyle::Unrecognized);
            assert_ne!(config.framework, Framework::Unrecognized);
            assert!((1..=5).contains(&config.styling_approach));
        }
    }

    #[test]
    fn sampler_reaches_every_navigation_option() {
        let mut rng = seeded(11);
        let seen: HashSet<_> = (0..500)
            .map(|_| SiteConfiguration::sample(&mut rng).navigation)
            .collect();
        assert_eq!(seen.len(), NavigationStyle::OPTIONS.len());
    }

    #[test]
    fn option_sets_have_expected_sizes() {
        assert_eq!(Framework::OPTIONS.len(), 10);
        assert_eq!(ColorScheme::OPTIONS.len(), 5);
        assert_eq!(NavigationStyle::OPTIONS.len(), 5);
        assert_eq!(LegalPageLayout::OPTIONS.len(), 5);
        assert_eq!(DomStructure::OPTIONS.len(), 2);
    }

    #[test]
    fn axis_serializes_kebab_case() {
        let json = serde_json::to_string(&FeaturedLayout::CardGrid).unwrap();
        assert_eq!(json, "\"card-grid\"");
        assert_eq!(AboutPageLayout::VideoBackground.as_str(), "video-bg");
    }

    #[test]
    fn unknown_axis_value_deserializes_to_unrecognized() {
        let nav: NavigationStyle = serde_json::from_str("\"hamburger\"").unwrap();
        assert_eq!(nav, NavigationStyle::Unrecognized);
        let known: NavigationStyle = serde_json::from_str("\"mega\"").unwrap();
        assert_eq!(known, NavigationStyle::Mega);
    }

    #[test]
    fn configuration_roundtrips_through_json() {
        let config = SiteConfiguration::sample(&mut seeded(3));
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn unrecognized_scheme_still_has_palette() {
        let palette = ColorScheme::Unrecognized.palette();
        assert!(palette.primary.starts_with('#'));
    }

    #[test]
    fn axes_lists_every_layout_axis() {
        let config = SiteConfiguration::sample(&mut seeded(5));
        let axes = config.axes();
        assert_eq!(axes.len(), 18);
        assert_eq!(axes[2], ("navigation", config.navigation.to_string()));
    }

    #[test]
    fn site_name_has_three_words_from_banks() {
        let name = generate_site_name(&mut seeded(9));
        let words: Vec<&str> = name.split(' ').collect();
        assert_eq!(words.len(), 3);
        assert!(NAME_ADJECTIVES.contains(&words[0]));
        assert!(NAME_TERMS.contains(&words[1]));
        assert!(NAME_SUFFIXES.contains(&words[2]));
    }
}
