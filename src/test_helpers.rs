//! Shared test fixtures for the casino-gen test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut config = fixture_config();
//! config.footer = FooterStyle::Dark;
//! let identity = fixture_identity();
//! let ctx = RenderContext::new(&config, &identity, "");
//!
//! let starburst = game(1, "Starburst", "NetEnt");
//! let featured = select_featured(&[starburst], &mut seeded(7));
//! ```

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::content::slugify;
use crate::naming::{NamingConvention, NamingStyle};
use crate::theme::*;
use crate::types::{GameRecord, GameType, SiteIdentity};

// =========================================================================
// Randomness
// =========================================================================

/// Deterministic generator for tests.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// =========================================================================
// Records
// =========================================================================

/// A published slot with a slug derived from `name` and a thumbnail URL.
///
/// `updated_at` is 2024-01-01 plus `id` hours, so higher ids are newer.
pub fn game(id: u64, name: &str, provider: &str) -> GameRecord {
    GameRecord {
        id,
        name: name.to_string(),
        slug: slugify(name),
        provider: provider.to_string(),
        game_type: GameType::Slot,
        published: true,
        thumbnail_url: Some(format!("https://img.example/{id}.jpg")),
        description: format!("{name} by {provider}"),
        updated_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .map(|t| t + Duration::hours(id as i64)),
    }
}

// =========================================================================
// Site fixtures
// =========================================================================

/// A fixed configuration: first option on every axis, semantic naming,
/// custom framework, linked stylesheet.
pub fn fixture_config() -> SiteConfiguration {
    SiteConfiguration {
        framework: Framework::Custom,
        color_scheme: ColorScheme::Vegas,
        navigation: NavigationStyle::Traditional,
        hero: HeroStyle::Fullscreen,
        featured_games_layout: FeaturedLayout::CardGrid,
        new_games_layout: NewGamesLayout::Ribbon,
        about_section: AboutSectionStyle::TextIcons,
        footer: FooterStyle::Mega,
        games_page_layout: GamesPageLayout::Grid,
        game_page_layout: GamePageLayout::Centered,
        about_page_layout: AboutPageLayout::Timeline,
        contact_page_layout: ContactPageLayout::ContactForm,
        legal_page_layout: LegalPageLayout::SidebarToc,
        dom_structure: DomStructure::Semantic,
        naming: NamingConvention::new(NamingStyle::Semantic, "sc"),
        inline_css: false,
        use_webp: false,
        styling_approach: 1,
    }
}

/// "Lucky Spin Casino" at example.com, generated 2025-03-09.
pub fn fixture_identity() -> SiteIdentity {
    SiteIdentity::new(
        "Lucky Spin Casino",
        "example.com",
        NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid fixture date"),
    )
}
