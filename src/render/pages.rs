//! Page bodies for the games index, the game detail page and the contact page.
//!
//! ## Games Page
//!
//! Every game is rendered server-side inside an item carrying `data-name`,
//! `data-provider` and `data-type`. The site script filters and paginates
//! those items in place (20 per page); provider and type options come from
//! the records themselves.
//!
//! ## Game Page
//!
//! `game.html` is a single static page. It renders the first record as a
//! spotlight and embeds every record as JSON in `#game-data`; the script
//! swaps in the record named by `?slug=` on load.

use super::{RenderContext, dispatch, game_card};
use crate::theme::{ContactPageLayout, GamePageLayout, GamesPageLayout};
use crate::types::{GameRecord, GameType, provider_key};
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Games shown per page by the client-side paginator.
pub const GAMES_PER_PAGE: usize = 20;

/// Related games listed under the game player.
pub const RELATED_LIMIT: usize = 4;

type GamesRenderer = fn(&RenderContext<'_>, &[GameRecord]) -> Markup;
type GameRenderer = fn(&RenderContext<'_>, &GameRecord, &[&GameRecord]) -> Markup;
type ContactRenderer = fn(&RenderContext<'_>) -> Markup;

const GAMES_LAYOUTS: &[(GamesPageLayout, GamesRenderer)] = &[
    (GamesPageLayout::Grid, games_grid),
    (GamesPageLayout::List, games_list),
    (GamesPageLayout::CardFlip, games_card_flip),
    (GamesPageLayout::Magazine, games_magazine),
    (GamesPageLayout::Masonry, games_masonry),
];

const GAME_LAYOUTS: &[(GamePageLayout, GameRenderer)] = &[
    (GamePageLayout::Centered, game_centered),
    (GamePageLayout::Sidebar, game_sidebar),
    (GamePageLayout::Tabbed, game_tabbed),
    (GamePageLayout::Fullscreen, game_fullscreen),
    (GamePageLayout::Hero, game_hero),
];

const CONTACT_LAYOUTS: &[(ContactPageLayout, ContactRenderer)] = &[
    (ContactPageLayout::ContactForm, contact_form),
    (ContactPageLayout::EmailDisplay, email_display),
    (ContactPageLayout::SplitLayout, split_layout),
    (ContactPageLayout::FaqContact, faq_contact),
    (ContactPageLayout::MapIntegration, map_integration),
];

// ============================================================================
// Games page
// ============================================================================

/// Body of `games.html`.
pub fn render_games_page(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    let layout = dispatch(GAMES_LAYOUTS, ctx.config.games_page_layout, games_grid);
    html! {
        div class=(ctx.class("container")) {
            h1 class=(ctx.classes(&[("page", Some("title")), ("text", Some("center"))])) { "All Casino Games" }
            (filters(ctx, games))
            div class=(ctx.class_of("games", "results")) data-games-grid data-page-size=(GAMES_PER_PAGE) {
                (layout(ctx, games))
            }
            p class=(ctx.classes(&[("games", Some("empty")), ("text", Some("center"))])) data-games-empty hidden {
                "No games match your search."
            }
            nav class=(ctx.classes(&[("pagination", None), ("text", Some("center"))])) data-pagination aria-label="Pagination" {}
        }
    }
}

/// `(value, label)` options for the provider and type filters, sorted by label.
pub fn filter_options(games: &[GameRecord]) -> (Vec<(String, String)>, Vec<(String, String)>) {
    let providers: BTreeMap<String, String> = games
        .iter()
        .map(|g| (g.provider.clone(), g.provider_key()))
        .collect();
    let types: BTreeMap<String, String> = games
        .iter()
        .map(|g| (g.game_type.label().to_string(), g.game_type.filter_key()))
        .collect();
    let flip = |m: BTreeMap<String, String>| {
        m.into_iter().map(|(label, key)| (key, label)).collect()
    };
    (flip(providers), flip(types))
}

fn filters(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    let (providers, types) = filter_options(games);
    html! {
        form class=(ctx.class_of("games", "filters")) data-games-filters role="search" {
            input class=(ctx.class_of("search", "input")) type="search" name="q" placeholder="Search games..." aria-label="Search games" data-filter="search";
            select class=(ctx.class_of("filter", "select")) name="provider" aria-label="Provider" data-filter="provider" {
                option value="" { "All Providers" }
                @for (value, label) in &providers {
                    option value=(value) { (label) }
                }
            }
            select class=(ctx.class_of("filter", "select")) name="type" aria-label="Game type" data-filter="type" {
                option value="" { "All Types" }
                @for (value, label) in &types {
                    option value=(value) { (label) }
                }
            }
        }
    }
}

/// Filterable wrapper around one game's markup.
fn filter_item(ctx: &RenderContext, game: &GameRecord, inner: Markup) -> Markup {
    html! {
        div class=(ctx.class_of("games", "item"))
            data-game
            data-name=(game.name.to_lowercase())
            data-provider=(game.provider_key())
            data-type=(game.game_type.filter_key()) {
            (inner)
        }
    }
}

fn games_grid(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("4"))])) {
            @for game in games { (filter_item(ctx, game, game_card(ctx, game))) }
        }
    }
}

fn games_list(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class_of("games", "list")) {
            @for game in games {
                (filter_item(ctx, game, html! {
                    div class=(ctx.class_of("list", "item")) {
                        img class=(ctx.class_of("list", "thumb")) src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
                        div class=(ctx.class_of("game", "info")) {
                            h3 class=(ctx.class_of("game", "title")) { (game.name) }
                            p class=(ctx.class_of("game", "provider")) { (game.provider) }
                            p class=(ctx.class_of("game", "type")) { (game.game_type.label()) }
                        }
                        a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href=(game.page_url()) { "Play Game" }
                    }
                }))
            }
        }
    }
}

fn games_card_flip(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("4"))])) {
            @for game in games {
                (filter_item(ctx, game, html! {
                    div class=(ctx.class_of("flip", "card")) tabindex="0" {
                        div class=(ctx.class_of("flip", "inner")) {
                            div class=(ctx.class_of("flip", "front")) {
                                img class=(ctx.class_of("game", "image")) src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
                                h3 class=(ctx.class_of("game", "title")) { (game.name) }
                            }
                            div class=(ctx.class_of("flip", "back")) {
                                p class=(ctx.class_of("game", "provider")) { (game.provider) }
                                p class=(ctx.class_of("game", "type")) { (game.game_type.label()) }
                                a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href=(game.page_url()) { "Play Game" }
                            }
                        }
                    }
                }))
            }
        }
    }
}

fn games_magazine(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("magazine")) {
            @for (idx, game) in games.iter().enumerate() {
                @let feature = idx % 7 == 0;
                (filter_item(ctx, game, html! {
                    article class=(ctx.classes(&[("magazine", Some(if feature { "feature" } else { "item" }))])) {
                        img class=(ctx.class_of("game", "image")) src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
                        div class=(ctx.class_of("game", "info")) {
                            h3 class=(ctx.class_of("game", "title")) {
                                a href=(game.page_url()) { (game.name) }
                            }
                            p class=(ctx.class_of("game", "provider")) { (game.provider) }
                            @if feature && !game.description.is_empty() {
                                p class=(ctx.class_of("game", "description")) { (game.description) }
                            }
                        }
                    }
                }))
            }
        }
    }
}

fn games_masonry(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("masonry")) {
            @for game in games { (filter_item(ctx, game, game_card(ctx, game))) }
        }
    }
}

// ============================================================================
// Game page
// ============================================================================

/// Body of `game.html`.
pub fn render_game_page(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    let Some(spotlight) = games.first() else {
        return html! {
            div class=(ctx.classes(&[("container", None), ("text", Some("center"))])) {
                h1 class=(ctx.class_of("page", "title")) { "Game not found" }
                a class=(ctx.classes(&[("btn", None), ("btn", Some("secondary"))])) href="games.html" { "Back to Games" }
            }
        };
    };
    let related = related_games(games, spotlight);
    let layout = dispatch(GAME_LAYOUTS, ctx.config.game_page_layout, game_centered);
    html! {
        div class=(ctx.class_of("game", "page")) data-game-page data-game-slug=(spotlight.slug) {
            (layout(ctx, spotlight, &related))
            template data-card-template { (game_card(ctx, spotlight)) }
        }
        script type="application/json" id="game-data" {
            (PreEscaped(game_data_json(ctx, games)))
        }
    }
}

/// Up to four other records from the same provider, in input order.
pub fn related_games<'g>(games: &'g [GameRecord], game: &GameRecord) -> Vec<&'g GameRecord> {
    let key = provider_key(&game.provider);
    games
        .iter()
        .filter(|g| g.id != game.id && g.provider_key() == key)
        .take(RELATED_LIMIT)
        .collect()
}

/// Embedded game list, safe to place inside a `<script>` element.
fn game_data_json(ctx: &RenderContext, games: &[GameRecord]) -> String {
    let records: Vec<Value> = games
        .iter()
        .map(|g| {
            json!({
                "id": g.id,
                "name": g.name,
                "slug": g.slug,
                "provider": g.provider,
                "providerKey": g.provider_key(),
                "type": g.game_type.label(),
                "description": g.description,
                "thumbnail": g.thumbnail_path(),
                "url": g.page_url(),
                "embed": ctx.embed_url(g),
            })
        })
        .collect();
    Value::Array(records).to_string().replace('<', "\\u003c")
}

fn game_header(ctx: &RenderContext, game: &GameRecord) -> Markup {
    html! {
        div class=(ctx.classes(&[("game", Some("header")), ("text", Some("center"))])) {
            h1 class=(ctx.class_of("game", "name")) data-game-field="name" { (game.name) }
            p class=(ctx.class_of("game", "provider")) {
                "by " span data-game-field="provider" { (game.provider) }
            }
        }
    }
}

fn game_player(ctx: &RenderContext, game: &GameRecord) -> Markup {
    html! {
        div class=(ctx.class_of("game", "player")) {
            iframe class=(ctx.class_of("game", "frame"))
                data-game-frame
                src=(ctx.embed_url(game))
                title=(game.name)
                loading="lazy"
                allowfullscreen {}
            div class=(ctx.classes(&[("game", Some("controls")), ("text", Some("center"))])) {
                button class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) type="button" data-game-fullscreen { "Toggle Fullscreen" }
                button class=(ctx.classes(&[("btn", None), ("btn", Some("secondary"))])) type="button" data-game-reload { "Refresh Game" }
            }
        }
    }
}

fn game_info(ctx: &RenderContext, game: &GameRecord) -> Markup {
    let description = if game.description.is_empty() {
        "Experience this exciting casino game!"
    } else {
        game.description.as_str()
    };
    html! {
        div class=(ctx.classes(&[("card", None), ("game", Some("meta"))])) {
            h3 { "Game Information" }
            p { strong { "Provider: " } span data-game-field="provider" { (game.provider) } }
            p { strong { "Type: " } span data-game-field="type" { (game.game_type.label()) } }
            p { strong { "Description: " } span data-game-field="description" { (description) } }
        }
    }
}

fn how_to_play(ctx: &RenderContext, game: &GameRecord) -> Markup {
    html! {
        div class=(ctx.class("card")) {
            h3 { "How to Play" }
            ul {
                @if game.game_type == GameType::TableGame {
                    li { "Place your virtual chips on the table" }
                    li { "Follow the dealer's prompts to play each round" }
                } @else {
                    li { "Click the spin button to start playing" }
                    li { "Adjust your bet size using the controls" }
                    li { "Watch for winning combinations" }
                }
                li { "Enjoy the bonus features!" }
            }
        }
    }
}

fn related_section(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    html! {
        section class=(ctx.class_of("related", "games")) data-related hidden[related.is_empty()] {
            h3 class=(ctx.class_of("text", "center")) {
                "More Games from " span data-game-field="provider" { (game.provider) }
            }
            div class=(ctx.classes(&[("grid", None), ("grid", Some("4"))])) data-related-grid {
                @for g in related { (game_card(ctx, g)) }
            }
        }
    }
}

fn back_link(ctx: &RenderContext) -> Markup {
    html! {
        a class=(ctx.classes(&[("btn", None), ("btn", Some("secondary"))])) href="games.html" { "← Back to Games" }
    }
}

fn game_centered(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (back_link(ctx))
            (game_header(ctx, game))
            (game_player(ctx, game))
            div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                (game_info(ctx, game))
                (how_to_play(ctx, game))
            }
            (related_section(ctx, game, related))
        }
    }
}

fn game_sidebar(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("container", None), ("game", Some("layout-sidebar"))])) {
            div class=(ctx.class_of("game", "main")) {
                (game_header(ctx, game))
                (game_player(ctx, game))
                (related_section(ctx, game, related))
            }
            aside class=(ctx.class_of("game", "aside")) {
                (back_link(ctx))
                (game_info(ctx, game))
                (how_to_play(ctx, game))
            }
        }
    }
}

fn game_tabbed(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    let tabs = [("play", "Play"), ("info", "Information"), ("rules", "How to Play")];
    html! {
        div class=(ctx.class("container")) data-tabs {
            (back_link(ctx))
            (game_header(ctx, game))
            div class=(ctx.class_of("tabs", "nav")) role="tablist" {
                @for (idx, (id, label)) in tabs.iter().enumerate() {
                    button class=(ctx.class_of("tabs", "button")) type="button" role="tab" data-tab=(id) aria-selected=(if idx == 0 { "true" } else { "false" }) { (label) }
                }
            }
            div class=(ctx.class_of("tabs", "panel")) role="tabpanel" data-tab-panel="play" { (game_player(ctx, game)) }
            div class=(ctx.class_of("tabs", "panel")) role="tabpanel" data-tab-panel="info" hidden { (game_info(ctx, game)) }
            div class=(ctx.class_of("tabs", "panel")) role="tabpanel" data-tab-panel="rules" hidden { (how_to_play(ctx, game)) }
            (related_section(ctx, game, related))
        }
    }
}

fn game_fullscreen(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    html! {
        div class=(ctx.class_of("game", "stage")) {
            (game_player(ctx, game))
        }
        div class=(ctx.class("container")) {
            (game_header(ctx, game))
            (game_info(ctx, game))
            (related_section(ctx, game, related))
            (back_link(ctx))
        }
    }
}

fn game_hero(ctx: &RenderContext, game: &GameRecord, related: &[&GameRecord]) -> Markup {
    html! {
        section class=(ctx.classes(&[("hero", None), ("game", Some("hero"))])) {
            div class=(ctx.classes(&[("container", None), ("grid", Some("2"))])) {
                img class=(ctx.class_of("game", "image")) data-game-field="thumbnail" src=(game.thumbnail_path()) alt=(game.name);
                div {
                    (game_header(ctx, game))
                    a class=(ctx.classes(&[("btn", None), ("btn", Some("accent"))])) href="#play" { "Play Now" }
                }
            }
        }
        div class=(ctx.class("container")) id="play" {
            (game_player(ctx, game))
            div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                (game_info(ctx, game))
                (how_to_play(ctx, game))
            }
            (related_section(ctx, game, related))
        }
    }
}

// ============================================================================
// Contact page
// ============================================================================

/// Body of `contact.html`.
pub fn render_contact_page(ctx: &RenderContext) -> Markup {
    dispatch(CONTACT_LAYOUTS, ctx.config.contact_page_layout, contact_form)(ctx)
}

const TOPICS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("technical", "Technical Support"),
    ("games", "Game Suggestion"),
    ("feedback", "Feedback"),
    ("other", "Other"),
];

const FAQ: &[(&str, &str)] = &[
    (
        "Are the games really free?",
        "Yes! All our games are completely free to play. No hidden costs or purchases required.",
    ),
    (
        "Do I need to register to play?",
        "No registration required. You can start playing immediately!",
    ),
    (
        "Can I play on mobile?",
        "Absolutely! Our games are optimized for all devices including smartphones and tablets.",
    ),
    (
        "Can I win real money?",
        "No. Everything on this site is for entertainment only and virtual credits have no cash value.",
    ),
];

fn contact_title(ctx: &RenderContext) -> Markup {
    html! {
        h1 class=(ctx.classes(&[("page", Some("title")), ("text", Some("center"))])) { "Contact Us" }
    }
}

fn mailbox_link(ctx: &RenderContext) -> Markup {
    let support = ctx.identity.mailbox("support");
    html! {
        a class=(ctx.class_of("contact", "email")) href={ "mailto:" (support) } { (support) }
    }
}

fn form(ctx: &RenderContext) -> Markup {
    html! {
        form class=(ctx.class_of("contact", "form")) data-contact-form {
            label for="contact-name" { "Your Name" }
            input class=(ctx.class_of("form", "input")) id="contact-name" type="text" name="name" required;
            label for="contact-email" { "Email Address" }
            input class=(ctx.class_of("form", "input")) id="contact-email" type="email" name="email" required;
            label for="contact-subject" { "Subject" }
            select class=(ctx.class_of("form", "input")) id="contact-subject" name="subject" required {
                option value="" { "Select a topic" }
                @for (value, label) in TOPICS {
                    option value=(value) { (label) }
                }
            }
            label for="contact-message" { "Your Message" }
            textarea class=(ctx.class_of("form", "input")) id="contact-message" name="message" rows="5" required placeholder="Tell us how we can help you..." {}
            button class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) type="submit" { "Send Message" }
            p class=(ctx.class_of("form", "status")) data-form-status role="status" {}
        }
    }
}

fn contact_details(ctx: &RenderContext) -> Markup {
    html! {
        ul class=(ctx.class_of("contact", "info")) {
            li { strong { "Email Us" } br; (mailbox_link(ctx)) }
            li { strong { "Response Time" } br; "We typically respond within 24 hours" }
            li { strong { "Support Hours" } br; "24/7 online support" }
        }
    }
}

fn faq_list(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("faq")) {
            @for (question, answer) in FAQ {
                details class=(ctx.class_of("faq", "item")) {
                    summary { (question) }
                    p { (answer) }
                }
            }
        }
    }
}

fn contact_form(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.classes(&[("container", None), ("contact", Some("narrow"))])) {
            (contact_title(ctx))
            div class=(ctx.class("card")) {
                h3 { "Get in Touch" }
                p { "Have questions or feedback? We'd love to hear from you! You can also write to " (mailbox_link(ctx)) "." }
                (form(ctx))
            }
        }
    }
}

fn email_display(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.classes(&[("container", None), ("text", Some("center"))])) {
            (contact_title(ctx))
            p class=(ctx.class_of("about", "lead")) { "The fastest way to reach us is by email." }
            div class=(ctx.classes(&[("card", None), ("contact", Some("highlight"))])) {
                span class=(ctx.class_of("feature", "icon")) aria-hidden="true" { "📧" }
                p class=(ctx.class_of("contact", "big")) { (mailbox_link(ctx)) }
                p { "We typically respond within 24 hours." }
            }
        }
    }
}

fn split_layout(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (contact_title(ctx))
            div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                div class=(ctx.class("card")) {
                    h3 { "Send us a Message" }
                    (form(ctx))
                }
                div {
                    div class=(ctx.class("card")) {
                        h3 { "Get in Touch" }
                        (contact_details(ctx))
                    }
                    div class=(ctx.class("card")) {
                        h3 { "Frequently Asked Questions" }
                        (faq_list(ctx))
                    }
                }
            }
        }
    }
}

fn faq_contact(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (contact_title(ctx))
            h2 { "Frequently Asked Questions" }
            (faq_list(ctx))
            div class=(ctx.class("card")) {
                h3 { "Still have questions?" }
                p { "Email " (mailbox_link(ctx)) " or use the form below." }
                (form(ctx))
            }
        }
    }
}

fn map_integration(ctx: &RenderContext) -> Markup {
    html! {
        div class=(ctx.class("container")) {
            (contact_title(ctx))
            div class=(ctx.classes(&[("grid", None), ("grid", Some("2"))])) {
                div class=(ctx.class_of("map", "placeholder")) role="img" aria-label="Support available worldwide" {
                    span aria-hidden="true" { "🌍" }
                    p { "Online support, wherever you are." }
                }
                div class=(ctx.class("card")) {
                    h3 { "Get in Touch" }
                    (contact_details(ctx))
                    (form(ctx))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_games;
    use crate::test_helpers::{fixture_config, fixture_identity, game};

    fn ctx_html<F>(
        configure: impl FnOnce(&mut crate::theme::SiteConfiguration),
        render: F,
    ) -> String
    where
        F: FnOnce(&RenderContext) -> Markup,
    {
        let mut config = fixture_config();
        configure(&mut config);
        let identity = fixture_identity();
        let ctx = RenderContext::new(&config, &identity, "https://embed.example/iframe");
        render(&ctx).into_string()
    }

    // =========================================================================
    // Games page
    // =========================================================================

    #[test]
    fn games_page_lists_every_game_in_every_layout() {
        let games = fallback_games();
        for layout in GamesPageLayout::OPTIONS {
            let html = ctx_html(
                |c| c.games_page_layout = *layout,
                |ctx| render_games_page(ctx, &games),
            );
            assert_eq!(html.matches("data-game ").count(), games.len(), "{layout}");
            assert!(html.contains("data-page-size=\"20\""));
        }
    }

    #[test]
    fn filter_options_come_from_data() {
        let games = fallback_games();
        let (providers, types) = filter_options(&games);
        let provider_keys: Vec<&str> = providers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(provider_keys, vec!["evolution", "microgaming", "netent", "playngo"]);
        assert_eq!(providers[3].1, "Play'n GO");
        let type_keys: Vec<&str> = types.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(type_keys, vec!["slot", "table game"]);
    }

    #[test]
    fn game_items_carry_filter_attributes() {
        let games = vec![game(2, "Book of Dead", "Play'n GO")];
        let html = ctx_html(|_| {}, |ctx| render_games_page(ctx, &games));
        assert!(html.contains("data-name=\"book of dead\""));
        assert!(html.contains("data-provider=\"playngo\""));
        assert!(html.contains("data-type=\"slot\""));
    }

    #[test]
    fn unrecognized_games_layout_uses_grid() {
        let games = fallback_games();
        let unknown = ctx_html(
            |c| c.games_page_layout = GamesPageLayout::Unrecognized,
            |ctx| render_games_page(ctx, &games),
        );
        let grid = ctx_html(
            |c| c.games_page_layout = GamesPageLayout::Grid,
            |ctx| render_games_page(ctx, &games),
        );
        assert_eq!(unknown, grid);
    }

    // =========================================================================
    // Game page
    // =========================================================================

    #[test]
    fn game_page_spotlights_first_record() {
        let games = fallback_games();
        for layout in GamePageLayout::OPTIONS {
            let html = ctx_html(
                |c| c.game_page_layout = *layout,
                |ctx| render_game_page(ctx, &games),
            );
            assert!(html.contains("data-game-slug=\"starburst\""), "{layout}");
            assert!(html.contains("src=\"https://embed.example/iframe/1\""), "{layout}");
            assert!(html.contains("id=\"game-data\""), "{layout}");
        }
    }

    #[test]
    fn embedded_json_lists_every_slug_and_cannot_close_script() {
        let mut games = fallback_games();
        games[1].name = "</script><script>alert(1)</script>".to_string();
        let html = ctx_html(|_| {}, |ctx| render_game_page(ctx, &games));
        let start = html.find("id=\"game-data\">").unwrap();
        let json_part = &html[start..];
        let end = json_part.find("</script>").unwrap();
        let json = &json_part["id=\"game-data\">".len()..end];
        let parsed: Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), games.len());
        assert_eq!(parsed[1]["name"], games[1].name);
        assert_eq!(parsed[0]["embed"], "https://embed.example/iframe/1");
    }

    #[test]
    fn related_games_share_provider_and_cap_at_four() {
        let mut games: Vec<GameRecord> = (1..=7)
            .map(|i| game(i, &format!("Net {i}"), "NetEnt"))
            .collect();
        games.push(game(8, "Other", "Evolution"));
        let related = related_games(&games, &games[0]);
        assert_eq!(related.len(), RELATED_LIMIT);
        assert!(related.iter().all(|g| g.provider == "NetEnt" && g.id != 1));

        let lonely = related_games(&games, &games[7]);
        assert!(lonely.is_empty());
    }

    #[test]
    fn empty_catalog_renders_not_found() {
        let html = ctx_html(|_| {}, |ctx| render_game_page(ctx, &[]));
        assert!(html.contains("Game not found"));
    }

    // =========================================================================
    // Contact page
    // =========================================================================

    #[test]
    fn every_contact_layout_shows_support_mailbox() {
        for layout in ContactPageLayout::OPTIONS {
            let html = ctx_html(|c| c.contact_page_layout = *layout, render_contact_page);
            assert!(html.contains("mailto:support@example.com"), "{layout}");
            assert!(html.contains("Contact Us"), "{layout}");
        }
    }

    #[test]
    fn unrecognized_contact_layout_uses_form() {
        let unknown = ctx_html(
            |c| c.contact_page_layout = ContactPageLayout::Unrecognized,
            render_contact_page,
        );
        let form = ctx_html(
            |c| c.contact_page_layout = ContactPageLayout::ContactForm,
            render_contact_page,
        );
        assert_eq!(unknown, form);
    }
}
