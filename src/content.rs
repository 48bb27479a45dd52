//! Content source: fetch published games, normalize them, fall back on failure.
//!
//! ## Acquisition
//!
//! [`acquire_content`] asks a [`GameSource`] for the raw API response and runs
//! it through [`parse_games`]. Whatever goes wrong (transport error, non-200
//! status, malformed JSON, an unexpected payload shape, or zero published
//! records) the whole batch is replaced by [`fallback_games`] in one step.
//! Live and fallback records are never mixed. The reason is logged and kept in
//! [`ContentOrigin`] so the run summary can report it.
//!
//! ## Payload Shape
//!
//! The upstream API is loose about its envelope. The game array may sit under
//! `data`, under `games`, or be the top-level value. Individual records are
//! parsed leniently:
//!
//! - `published` counts as true for `true`, `1` (or `1.0`), `"1"` and `"true"`
//! - `provider` may be a string or an object with a `name`
//! - `slug` is re-slugified; missing slugs are derived from the name
//! - `updated_at` accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`
//!
//! Records that still fail to parse are skipped with a debug event. Duplicate
//! ids are dropped and colliding slugs get the id appended, so ids and slugs
//! stay unique within a batch.
//!
//! ## Testing Without Network
//!
//! [`GameSource`] is implemented for any `Fn(&str) -> Result<RawResponse, _>`,
//! so tests stub the API with a closure.

use crate::config::ApiConfig;
use crate::types::{GameRecord, GameType};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Number of records in the built-in fallback dataset.
pub const FALLBACK_GAME_COUNT: usize = 10;

/// Longest slice of a response body kept in error messages.
const ERROR_BODY_LIMIT: usize = 500;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    Shape(String),
    #[error("no published games in response")]
    Empty,
}

/// Status code and body of one API response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Something that can fetch the raw game listing for a domain.
pub trait GameSource {
    fn fetch(&self, domain: &str) -> Result<RawResponse, ContentError>;
}

impl<F> GameSource for F
where
    F: Fn(&str) -> Result<RawResponse, ContentError>,
{
    fn fetch(&self, domain: &str) -> Result<RawResponse, ContentError> {
        self(domain)
    }
}

/// Blocking HTTP client for the game listing API.
pub struct HttpGameSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    per_page: u32,
    token: Option<String>,
}

impl HttpGameSource {
    pub fn new(api: &ApiConfig) -> Result<Self, ContentError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("casino-gen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            per_page: api.per_page,
            token: api.token.clone(),
        })
    }
}

impl GameSource for HttpGameSource {
    fn fetch(&self, domain: &str) -> Result<RawResponse, ContentError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("published", "1".to_string()),
                ("per_page", self.per_page.to_string()),
            ])
            .header(reqwest::header::ORIGIN, origin_for(domain));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, bytes = body.len(), "content API responded");
        Ok(RawResponse { status, body })
    }
}

/// `Origin` header value for a bare domain.
fn origin_for(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.trim_end_matches('/').to_string()
    } else {
        format!("https://{domain}")
    }
}

// ============================================================================
// Acquisition
// ============================================================================

/// Where the run's games came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Parsed from a successful API response.
    Live,
    /// The API failed; the fallback dataset was substituted.
    Fallback { reason: String },
    /// Network disabled for this run.
    Offline,
}

impl fmt::Display for ContentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live API"),
            Self::Fallback { reason } => write!(f, "fallback dataset ({reason})"),
            Self::Offline => f.write_str("fallback dataset (offline)"),
        }
    }
}

/// The game list a run renders from, with its provenance.
#[derive(Debug, Clone)]
pub struct Content {
    pub games: Vec<GameRecord>,
    pub origin: ContentOrigin,
}

impl Content {
    pub fn offline() -> Self {
        Self {
            games: fallback_games(),
            origin: ContentOrigin::Offline,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self.origin, ContentOrigin::Live)
    }
}

/// Fetch and normalize the game list, substituting the fallback on any error.
///
/// Never fails.
pub fn acquire_content<S: GameSource + ?Sized>(source: &S, domain: &str) -> Content {
    match source.fetch(domain).and_then(|raw| parse_games(&raw)) {
        Ok(games) => {
            tracing::info!(count = games.len(), "loaded published games");
            Content {
                games,
                origin: ContentOrigin::Live,
            }
        }
        Err(e) => {
            tracing::warn!(domain, error = %e, "content source failed, using fallback games");
            Content {
                games: fallback_games(),
                origin: ContentOrigin::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}

// ============================================================================
// Payload parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawGame {
    id: u64,
    name: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    provider: Option<RawProvider>,
    #[serde(default, rename = "type")]
    game_type: Option<String>,
    #[serde(default)]
    published: Option<PublishedFlag>,
    #[serde(default)]
    thumb: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProvider {
    Name(String),
    Object { name: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PublishedFlag {
    Bool(bool),
    Int(i64),
    Text(String),
    Other(Value),
}

impl PublishedFlag {
    fn is_published(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n == 1,
            Self::Text(s) => matches!(s.trim(), "1" | "true"),
            Self::Other(value) => value.as_f64() == Some(1.0),
        }
    }
}

/// Interpret a raw API response as a batch of published games.
pub fn parse_games(raw: &RawResponse) -> Result<Vec<GameRecord>, ContentError> {
    if raw.status != 200 {
        return Err(ContentError::Status {
            status: raw.status,
            body: truncate_body(&raw.body),
        });
    }

    let payload: Value = serde_json::from_str(&raw.body)?;
    let items = game_array(payload)?;

    let mut seen_ids = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut games = Vec::new();

    for item in items {
        let raw_game: RawGame = match serde_json::from_value(item) {
            Ok(g) => g,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unparseable game record");
                continue;
            }
        };
        if !raw_game.published.as_ref().is_some_and(PublishedFlag::is_published) {
            continue;
        }
        if !seen_ids.insert(raw_game.id) {
            tracing::debug!(id = raw_game.id, "skipping duplicate game id");
            continue;
        }
        let mut game = normalize(raw_game);
        game.slug = unique_slug(&mut seen_slugs, &game.slug, game.id);
        games.push(game);
    }

    if games.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(games)
}

/// `slug`, else `slug-id`, else `slug-id-2`, `slug-id-3`, ... whichever is
/// still free in the batch.
fn unique_slug(seen: &mut HashSet<String>, slug: &str, id: u64) -> String {
    if seen.insert(slug.to_string()) {
        return slug.to_string();
    }
    let with_id = format!("{slug}-{id}");
    let mut candidate = with_id.clone();
    let mut n = 2;
    while !seen.insert(candidate.clone()) {
        candidate = format!("{with_id}-{n}");
        n += 1;
    }
    candidate
}

fn game_array(payload: Value) -> Result<Vec<Value>, ContentError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in ["data", "games"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }
            let keys: Vec<_> = map.keys().cloned().collect();
            Err(ContentError::Shape(format!(
                "no game array in object with keys [{}]",
                keys.join(", ")
            )))
        }
        other => Err(ContentError::Shape(format!("expected array or object, got {other}"))),
    }
}

fn normalize(raw: RawGame) -> GameRecord {
    let slug = raw
        .slug
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(&raw.name));
    let slug = if slug.is_empty() {
        format!("game-{}", raw.id)
    } else {
        slug
    };
    let provider = match raw.provider {
        Some(RawProvider::Name(name)) | Some(RawProvider::Object { name }) => name,
        None => String::new(),
    };
    let provider = if provider.trim().is_empty() {
        "Unknown".to_string()
    } else {
        provider.trim().to_string()
    };

    GameRecord {
        id: raw.id,
        name: raw.name.trim().to_string(),
        slug,
        provider,
        game_type: GameType::from(raw.game_type.unwrap_or_else(|| "Slot".to_string())),
        published: true,
        thumbnail_url: raw.thumb.filter(|t| !t.trim().is_empty()),
        description: raw.description.unwrap_or_default(),
        updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
    }
}

/// Lowercase, URL-safe form of a name: `Gonzo's Quest` → `gonzos-quest`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '\'' || c == '\u{2019}' {
            // apostrophes join words
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

// ============================================================================
// Fallback dataset
// ============================================================================

struct FallbackEntry {
    id: u64,
    name: &'static str,
    slug: &'static str,
    provider: &'static str,
    game_type: &'static str,
    color: &'static str,
    label: &'static str,
    description: &'static str,
    updated: (u32, u32, u32),
}

const FALLBACK: [FallbackEntry; FALLBACK_GAME_COUNT] = [
    FallbackEntry {
        id: 1,
        name: "Starburst",
        slug: "starburst",
        provider: "NetEnt",
        game_type: "Slot",
        color: "FF6B6B",
        label: "Starburst",
        description: "Classic slot game with expanding wilds",
        updated: (15, 10, 0),
    },
    FallbackEntry {
        id: 2,
        name: "Book of Dead",
        slug: "book-of-dead",
        provider: "Play'n GO",
        game_type: "Slot",
        color: "4ECDC4",
        label: "Book+of+Dead",
        description: "Adventure-themed slot with free spins",
        updated: (14, 15, 30),
    },
    FallbackEntry {
        id: 3,
        name: "Gonzo's Quest",
        slug: "gonzos-quest",
        provider: "NetEnt",
        game_type: "Slot",
        color: "45B7D1",
        label: "Gonzo%27s+Quest",
        description: "Avalanche feature slot with multipliers",
        updated: (13, 9, 45),
    },
    FallbackEntry {
        id: 4,
        name: "Mega Moolah",
        slug: "mega-moolah",
        provider: "Microgaming",
        game_type: "Slot",
        color: "F7DC6F",
        label: "Mega+Moolah",
        description: "Progressive jackpot slot",
        updated: (12, 14, 20),
    },
    FallbackEntry {
        id: 5,
        name: "Reactoonz",
        slug: "reactoonz",
        provider: "Play'n GO",
        game_type: "Slot",
        color: "BB8FCE",
        label: "Reactoonz",
        description: "Cluster pays slot with cascading reels",
        updated: (11, 11, 15),
    },
    FallbackEntry {
        id: 6,
        name: "Dead or Alive 2",
        slug: "dead-or-alive-2",
        provider: "NetEnt",
        game_type: "Slot",
        color: "85C1E9",
        label: "Dead+or+Alive+2",
        description: "Western-themed high volatility slot",
        updated: (10, 16, 0),
    },
    FallbackEntry {
        id: 7,
        name: "Blackjack Classic",
        slug: "blackjack-classic",
        provider: "Evolution",
        game_type: "Table Game",
        color: "58D68D",
        label: "Blackjack",
        description: "Classic blackjack table game",
        updated: (9, 12, 30),
    },
    FallbackEntry {
        id: 8,
        name: "European Roulette",
        slug: "european-roulette",
        provider: "Evolution",
        game_type: "Table Game",
        color: "F1948A",
        label: "Roulette",
        description: "European roulette with single zero",
        updated: (8, 13, 45),
    },
    FallbackEntry {
        id: 9,
        name: "Immortal Romance",
        slug: "immortal-romance",
        provider: "Microgaming",
        game_type: "Slot",
        color: "D7BDE2",
        label: "Immortal+Romance",
        description: "Vampire-themed slot with multiple bonus features",
        updated: (7, 10, 20),
    },
    FallbackEntry {
        id: 10,
        name: "Thunderstruck II",
        slug: "thunderstruck-ii",
        provider: "Microgaming",
        game_type: "Slot",
        color: "AED6F1",
        label: "Thunderstruck+II",
        description: "Norse mythology themed slot",
        updated: (6, 14, 10),
    },
];

/// The fixed ten-record dataset used whenever live content is unavailable.
pub fn fallback_games() -> Vec<GameRecord> {
    FALLBACK
        .iter()
        .map(|entry| {
            let (day, hour, minute) = entry.updated;
            GameRecord {
                id: entry.id,
                name: entry.name.to_string(),
                slug: entry.slug.to_string(),
                provider: entry.provider.to_string(),
                game_type: GameType::from(entry.game_type.to_string()),
                published: true,
                thumbnail_url: Some(format!(
                    "https://via.placeholder.com/300x200/{}/FFFFFF?text={}",
                    entry.color, entry.label
                )),
                description: entry.description.to_string(),
                updated_at: Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).single(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(status: u16, body: &'static str) -> impl Fn(&str) -> Result<RawResponse, ContentError> {
        move |_domain: &str| {
            Ok(RawResponse {
                status,
                body: body.to_string(),
            })
        }
    }

    fn fallback_ids() -> Vec<u64> {
        (1..=FALLBACK_GAME_COUNT as u64).collect()
    }

    // =========================================================================
    // Fallback substitution
    // =========================================================================

    #[test]
    fn non_200_falls_back() {
        let content = acquire_content(&stub(500, "upstream exploded"), "example.com");
        let ids: Vec<u64> = content.games.iter().map(|g| g.id).collect();
        assert_eq!(ids, fallback_ids());
        match content.origin {
            ContentOrigin::Fallback { reason } => assert!(reason.contains("500")),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_falls_back() {
        let content = acquire_content(&stub(200, "{not json"), "example.com");
        assert_eq!(content.games.len(), FALLBACK_GAME_COUNT);
        assert!(content.is_fallback());
    }

    #[test]
    fn nothing_published_falls_back() {
        let body = r#"{"data": [{"id": 99, "name": "Hidden", "published": 0}]}"#;
        let content = acquire_content(&stub(200, body), "example.com");
        let ids: Vec<u64> = content.games.iter().map(|g| g.id).collect();
        assert_eq!(ids, fallback_ids());
    }

    #[test]
    fn transport_error_falls_back() {
        let failing = |_: &str| -> Result<RawResponse, ContentError> {
            Err(ContentError::Shape("connection refused".into()))
        };
        let content = acquire_content(&failing, "example.com");
        assert!(content.is_fallback());
        assert_eq!(content.games.len(), FALLBACK_GAME_COUNT);
    }

    #[test]
    fn live_and_fallback_never_mix() {
        let body = r#"[{"id": 500, "name": "Only One", "published": true}]"#;
        let content = acquire_content(&stub(200, body), "example.com");
        assert_eq!(content.origin, ContentOrigin::Live);
        assert_eq!(content.games.len(), 1);
        assert_eq!(content.games[0].id, 500);
    }

    #[test]
    fn source_receives_domain() {
        let source = |domain: &str| -> Result<RawResponse, ContentError> {
            assert_eq!(domain, "lucky.example");
            Ok(RawResponse::ok(r#"[{"id": 1, "name": "A", "published": 1}]"#))
        };
        let content = acquire_content(&source, "lucky.example");
        assert_eq!(content.origin, ContentOrigin::Live);
    }

    // =========================================================================
    // Payload parsing
    // =========================================================================

    #[test]
    fn array_under_data_games_or_top_level() {
        for body in [
            r#"{"data": [{"id": 1, "name": "A", "published": 1}]}"#,
            r#"{"games": [{"id": 1, "name": "A", "published": 1}]}"#,
            r#"[{"id": 1, "name": "A", "published": 1}]"#,
        ] {
            let games = parse_games(&RawResponse::ok(body)).unwrap();
            assert_eq!(games.len(), 1, "body: {body}");
        }
    }

    #[test]
    fn object_without_array_is_shape_error() {
        let err = parse_games(&RawResponse::ok(r#"{"message": "hello"}"#)).unwrap_err();
        assert!(matches!(err, ContentError::Shape(_)));
    }

    #[test]
    fn published_flag_variants() {
        let body = r#"[
            {"id": 1, "name": "Bool", "published": true},
            {"id": 2, "name": "Int", "published": 1},
            {"id": 3, "name": "Text one", "published": "1"},
            {"id": 4, "name": "Text true", "published": "true"},
            {"id": 5, "name": "Zero", "published": 0},
            {"id": 6, "name": "False", "published": false},
            {"id": 7, "name": "Missing"},
            {"id": 8, "name": "Null", "published": null}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        let ids: Vec<u64> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn provider_string_or_object() {
        let body = r#"[
            {"id": 1, "name": "A", "published": 1, "provider": "NetEnt"},
            {"id": 2, "name": "B", "published": 1, "provider": {"name": "Evolution", "id": 4}},
            {"id": 3, "name": "C", "published": 1}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        assert_eq!(games[0].provider, "NetEnt");
        assert_eq!(games[1].provider, "Evolution");
        assert_eq!(games[2].provider, "Unknown");
    }

    #[test]
    fn bad_records_are_skipped() {
        let body = r#"[
            {"id": "not-a-number", "name": "Broken", "published": 1},
            {"name": "No id", "published": 1},
            {"id": 2, "name": "Good", "published": 1}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Good");
    }

    #[test]
    fn duplicate_ids_and_slugs_stay_unique() {
        let body = r#"[
            {"id": 1, "name": "Starburst", "published": 1},
            {"id": 1, "name": "Starburst Again", "published": 1},
            {"id": 2, "name": "Starburst", "published": 1}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].slug, "starburst");
        assert_eq!(games[1].slug, "starburst-2");
    }

    #[test]
    fn repaired_slug_never_reuses_a_taken_one() {
        let body = r#"[
            {"id": 1, "name": "A", "published": 1},
            {"id": 2, "name": "B", "slug": "a-3", "published": 1},
            {"id": 3, "name": "A", "published": 1},
            {"id": 4, "name": "C", "slug": "a-3", "published": 1},
            {"id": 5, "name": "D", "slug": "a-3-4", "published": 1},
            {"id": 6, "name": "E", "slug": "a-3", "published": 1}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        let slugs: Vec<&str> = games.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "a-3", "a-3-2", "a-3-4", "a-3-4-5", "a-3-6"]);
        let unique: HashSet<&str> = slugs.iter().copied().collect();
        assert_eq!(unique.len(), games.len());
    }

    #[test]
    fn slug_is_sanitized_or_derived() {
        let body = r#"[
            {"id": 1, "name": "Gonzo's Quest", "published": 1},
            {"id": 2, "name": "X", "slug": "Big Bass/Bonanza", "published": 1},
            {"id": 3, "name": "!!!", "published": 1}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        assert_eq!(games[0].slug, "gonzos-quest");
        assert_eq!(games[1].slug, "big-bass-bonanza");
        assert_eq!(games[2].slug, "game-3");
    }

    #[test]
    fn timestamps_in_several_formats() {
        let body = r#"[
            {"id": 1, "name": "A", "published": 1, "updated_at": "2024-02-01T08:30:00Z"},
            {"id": 2, "name": "B", "published": 1, "updated_at": "2024-02-01 08:30:00"},
            {"id": 3, "name": "C", "published": 1, "updated_at": "2024-02-01"},
            {"id": 4, "name": "D", "published": 1, "updated_at": "yesterday"}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).single();
        assert_eq!(games[0].updated_at, expected);
        assert_eq!(games[1].updated_at, expected);
        assert_eq!(games[2].updated_at, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single());
        assert_eq!(games[3].updated_at, None);
    }

    #[test]
    fn type_and_thumbnail_mapping() {
        let body = r#"[
            {"id": 1, "name": "A", "published": 1, "type": "Table Game",
             "thumb": "https://cdn/a.jpg"},
            {"id": 2, "name": "B", "published": 1, "thumb": ""},
            {"id": 3, "name": "C", "published": 1, "type": ""}
        ]"#;
        let games = parse_games(&RawResponse::ok(body)).unwrap();
        assert_eq!(games[0].game_type, GameType::TableGame);
        assert_eq!(games[0].thumbnail_url.as_deref(), Some("https://cdn/a.jpg"));
        assert_eq!(games[1].game_type, GameType::Slot);
        assert_eq!(games[1].thumbnail_url, None);
        assert_eq!(games[2].game_type, GameType::Slot);
    }

    #[test]
    fn status_error_body_is_truncated() {
        let long = "x".repeat(2000);
        let err = parse_games(&RawResponse {
            status: 503,
            body: long,
        })
        .unwrap_err();
        match err {
            ContentError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.len() <= ERROR_BODY_LIMIT + 3);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    // =========================================================================
    // Helpers and dataset
    // =========================================================================

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Book of Dead"), "book-of-dead");
        assert_eq!(slugify("Play'n GO"), "playn-go");
        assert_eq!(slugify("  Thunderstruck II  "), "thunderstruck-ii");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn origin_header_gets_scheme() {
        assert_eq!(origin_for("example.com"), "https://example.com");
        assert_eq!(origin_for("http://localhost:8080/"), "http://localhost:8080");
    }

    #[test]
    fn fallback_dataset_is_fixed() {
        let games = fallback_games();
        assert_eq!(games.len(), FALLBACK_GAME_COUNT);
        assert_eq!(games[0].slug, "starburst");
        assert_eq!(games[6].game_type, GameType::TableGame);
        assert!(games.iter().all(|g| g.published && g.updated_at.is_some()));
        let slugs: HashSet<_> = games.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs.len(), FALLBACK_GAME_COUNT);
        for g in &games {
            assert_eq!(slugify(&g.name), g.slug);
        }
    }

    #[test]
    fn offline_content_reports_origin() {
        let content = Content::offline();
        assert_eq!(content.origin, ContentOrigin::Offline);
        assert!(content.is_fallback());
        assert_eq!(content.origin.to_string(), "fallback dataset (offline)");
    }
}
