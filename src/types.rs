//! Shared types used across the generation pipeline.
//!
//! [`GameRecord`] is produced by the content source and read by every game
//! renderer. [`SiteIdentity`] and [`PageSpec`] carry per-run and per-page
//! values into the renderers and the assembler.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use maud::Markup;
use serde::{Deserialize, Serialize};

/// One casino game as published by the content API.
///
/// Records are normalized once at fetch time and never mutated afterwards.
/// Within a batch `id` and `slug` are both unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    pub name: String,
    /// URL-safe identifier, used in links and thumbnail file names.
    pub slug: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub published: bool,
    /// Remote thumbnail URL (`thumb` upstream).
    #[serde(rename = "thumb", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GameRecord {
    /// Local thumbnail path, relative to the site root.
    ///
    /// The name is predictable so pages can reference it whether or not the
    /// download succeeded.
    pub fn thumbnail_path(&self) -> String {
        format!("images/games/{}", self.thumbnail_file_name())
    }

    pub fn thumbnail_file_name(&self) -> String {
        format!("{}-{}.jpg", self.slug, self.id)
    }

    /// Link to the game detail page for this record.
    pub fn page_url(&self) -> String {
        format!("game.html?slug={}", self.slug)
    }

    /// Lowercase alphanumeric provider key used by the games page filter.
    pub fn provider_key(&self) -> String {
        provider_key(&self.provider)
    }
}

/// Collapse a provider name to its filter key (`Play'n GO` → `playngo`).
pub fn provider_key(provider: &str) -> String {
    provider
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Game category. Upstream sends free text; the two known values are typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    Slot,
    TableGame,
    Other(String),
}

impl GameType {
    /// Display label, matching the upstream spelling for known types.
    pub fn label(&self) -> &str {
        match self {
            Self::Slot => "Slot",
            Self::TableGame => "Table Game",
            Self::Other(label) => label,
        }
    }

    /// Lowercase key for client-side filtering (`table game`, `slot`, ...).
    pub fn filter_key(&self) -> String {
        self.label().to_lowercase()
    }
}

impl From<String> for GameType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "slot" | "slots" => Self::Slot,
            "table game" | "table games" | "table" => Self::TableGame,
            _ => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<GameType> for String {
    fn from(value: GameType) -> Self {
        value.label().to_string()
    }
}

/// Per-run identity of the generated site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    /// Display name, e.g. "Golden Jackpot Arena".
    pub site_name: String,
    /// Bare host the site is generated for, see [`bare_domain`].
    pub domain: String,
    /// Date stamped into legal pages and the copyright line.
    pub generated_on: NaiveDate,
}

impl SiteIdentity {
    pub fn new(
        site_name: impl Into<String>,
        domain: impl AsRef<str>,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            site_name: site_name.into(),
            domain: bare_domain(domain.as_ref()),
            generated_on,
        }
    }

    pub fn copyright_year(&self) -> i32 {
        self.generated_on.year()
    }

    /// Mailbox at the site's own domain (`support@example.com`).
    pub fn mailbox(&self, local_part: &str) -> String {
        format!("{local_part}@{}", self.domain)
    }
}

/// Host part of a domain argument: `https://example.com/` → `example.com`.
pub fn bare_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}

/// One page handed to the assembler: where it goes, its title, its body.
#[derive(Debug, Clone)]
pub struct PageSpec {
    /// Output path relative to the site root (`index.html`).
    pub route: &'static str,
    pub title: String,
    pub content: Markup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::game;

    #[test]
    fn thumbnail_path_uses_slug_and_id() {
        let g = game(7, "Book of Dead", "Play'n GO");
        assert_eq!(g.thumbnail_file_name(), "book-of-dead-7.jpg");
        assert_eq!(g.thumbnail_path(), "images/games/book-of-dead-7.jpg");
    }

    #[test]
    fn page_url_carries_slug() {
        let g = game(1, "Starburst", "NetEnt");
        assert_eq!(g.page_url(), "game.html?slug=starburst");
    }

    #[test]
    fn provider_key_strips_punctuation_and_case() {
        assert_eq!(provider_key("Play'n GO"), "playngo");
        assert_eq!(provider_key("NetEnt"), "netent");
        assert_eq!(provider_key(""), "");
    }

    #[test]
    fn game_type_parses_known_labels() {
        assert_eq!(GameType::from("Slot".to_string()), GameType::Slot);
        assert_eq!(GameType::from("table game".to_string()), GameType::TableGame);
        assert_eq!(
            GameType::from("Video Poker".to_string()),
            GameType::Other("Video Poker".to_string())
        );
    }

    #[test]
    fn blank_game_type_is_a_slot() {
        assert_eq!(GameType::from(String::new()), GameType::Slot);
        assert_eq!(GameType::from("   ".to_string()), GameType::Slot);
    }

    #[test]
    fn game_type_serializes_as_label() {
        let json = serde_json::to_string(&GameType::TableGame).unwrap();
        assert_eq!(json, "\"Table Game\"");
        assert_eq!(GameType::TableGame.filter_key(), "table game");
    }

    #[test]
    fn game_record_serializes_upstream_field_names() {
        let g = game(3, "Gonzo's Quest", "NetEnt");
        let value = serde_json::to_value(&g).unwrap();
        assert_eq!(value["type"], "Slot");
        assert_eq!(value["slug"], "gonzos-quest");
        assert!(value.get("game_type").is_none());
    }

    #[test]
    fn identity_mailbox_and_year() {
        let identity = SiteIdentity::new(
            "Lucky Spin Casino",
            "example.com",
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        );
        assert_eq!(identity.mailbox("support"), "support@example.com");
        assert_eq!(identity.copyright_year(), 2025);
    }

    #[test]
    fn identity_strips_scheme_from_domain() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let identity = SiteIdentity::new("Lucky Spin Casino", "https://example.com/", date);
        assert_eq!(identity.domain, "example.com");
        assert_eq!(identity.mailbox("support"), "support@example.com");
        let local = SiteIdentity::new("X", " http://localhost:8080 ", date);
        assert_eq!(local.domain, "localhost:8080");
    }
}
