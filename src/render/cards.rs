//! Home page game sections: "Featured Games" and "New Games".
//!
//! Each section has its own axis and dispatch table. An empty game list
//! renders nothing at all rather than an empty heading.

use super::{RenderContext, dispatch, game_card, section};
use crate::theme::{FeaturedLayout, NewGamesLayout};
use crate::types::GameRecord;
use maud::{Markup, html};

type CardsRenderer = fn(&RenderContext<'_>, &[GameRecord]) -> Markup;

const FEATURED: &[(FeaturedLayout, CardsRenderer)] = &[
    (FeaturedLayout::CardGrid, card_grid),
    (FeaturedLayout::Carousel, carousel),
    (FeaturedLayout::Masonry, masonry),
    (FeaturedLayout::List, list),
    (FeaturedLayout::Hexagonal, hexagonal),
];

const NEW_GAMES: &[(NewGamesLayout, CardsRenderer)] = &[
    (NewGamesLayout::Ribbon, ribbon),
    (NewGamesLayout::Spotlight, spotlight),
    (NewGamesLayout::Ticker, ticker),
    (NewGamesLayout::GridDates, grid_dates),
    (NewGamesLayout::Timeline, timeline),
];

/// The "Featured Games" section.
pub fn render_featured(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    if games.is_empty() {
        return html! {};
    }
    let layout = dispatch(FEATURED, ctx.config.featured_games_layout, card_grid);
    section(ctx, "featured", "Featured Games", layout(ctx, games))
}

/// The "New Games" section.
pub fn render_new(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    if games.is_empty() {
        return html! {};
    }
    let layout = dispatch(NEW_GAMES, ctx.config.new_games_layout, grid_dates);
    section(ctx, "new", "New Games", layout(ctx, games))
}

fn updated_label(game: &GameRecord) -> String {
    game.updated_at
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Recently added".to_string())
}

// ============================================================================
// Featured layouts
// ============================================================================

fn card_grid(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("5"))])) {
            @for game in games { (game_card(ctx, game)) }
        }
    }
}

fn carousel(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class_of("carousel", "container")) data-carousel {
            div class=(ctx.class_of("carousel", "track")) data-carousel-track {
                @for game in games { (game_card(ctx, game)) }
            }
            button class=(ctx.classes(&[("carousel", Some("btn")), ("carousel", Some("prev"))])) type="button" data-carousel-prev aria-label="Previous" { "‹" }
            button class=(ctx.classes(&[("carousel", Some("btn")), ("carousel", Some("next"))])) type="button" data-carousel-next aria-label="Next" { "›" }
        }
    }
}

fn masonry(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("masonry")) {
            @for game in games {
                div class=(ctx.class_of("masonry", "item")) { (game_card(ctx, game)) }
            }
        }
    }
}

fn list(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        ol class=(ctx.class_of("games", "list")) {
            @for game in games {
                li class=(ctx.class_of("list", "item")) {
                    img class=(ctx.class_of("list", "thumb")) src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
                    div class=(ctx.class_of("game", "info")) {
                        h3 class=(ctx.class_of("game", "title")) { (game.name) }
                        p class=(ctx.class_of("game", "provider")) { (game.provider) " · " (game.game_type.label()) }
                        @if !game.description.is_empty() {
                            p class=(ctx.class_of("game", "description")) { (game.description) }
                        }
                    }
                    a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href=(game.page_url()) { "Play" }
                }
            }
        }
    }
}

fn hexagonal(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("hex-grid")) {
            @for game in games {
                a class=(ctx.class_of("hex", "item")) href=(game.page_url()) title=(game.name) {
                    img src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
                    span class=(ctx.class_of("hex", "label")) { (game.name) }
                }
            }
        }
    }
}

// ============================================================================
// New games layouts
// ============================================================================

fn ribbon(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("5"))])) {
            @for game in games {
                div class=(ctx.class_of("ribbon", "wrapper")) {
                    span class=(ctx.class("ribbon")) { "NEW" }
                    (game_card(ctx, game))
                }
            }
        }
    }
}

fn spotlight(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    let Some((lead, rest)) = games.split_first() else {
        return html! {};
    };
    html! {
        div class=(ctx.class("spotlight")) {
            div class=(ctx.class_of("spotlight", "main")) {
                img class=(ctx.class_of("game", "image")) src=(lead.thumbnail_path()) alt=(lead.name);
                div class=(ctx.class_of("game", "info")) {
                    span class=(ctx.class("ribbon")) { "Just Released" }
                    h3 class=(ctx.class_of("game", "title")) { (lead.name) }
                    p class=(ctx.class_of("game", "provider")) { (lead.provider) }
                    @if !lead.description.is_empty() {
                        p class=(ctx.class_of("game", "description")) { (lead.description) }
                    }
                    a class=(ctx.classes(&[("btn", None), ("btn", Some("accent"))])) href=(lead.page_url()) { "Play Now" }
                }
            }
            @if !rest.is_empty() {
                div class=(ctx.class_of("spotlight", "side")) {
                    @for game in rest { (game_card(ctx, game)) }
                }
            }
        }
    }
}

fn ticker(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.class("ticker")) {
            div class=(ctx.class_of("ticker", "track")) {
                @for game in games {
                    a class=(ctx.class_of("ticker", "item")) href=(game.page_url()) {
                        strong { (game.name) }
                        " by " (game.provider)
                    }
                }
            }
        }
        div class=(ctx.classes(&[("grid", None), ("grid", Some("5"))])) {
            @for game in games { (game_card(ctx, game)) }
        }
    }
}

fn grid_dates(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        div class=(ctx.classes(&[("grid", None), ("grid", Some("5"))])) {
            @for game in games {
                div class=(ctx.class_of("dated", "card")) {
                    time class=(ctx.class_of("game", "date")) datetime=[game.updated_at.map(|t| t.to_rfc3339())] {
                        (updated_label(game))
                    }
                    (game_card(ctx, game))
                }
            }
        }
    }
}

fn timeline(ctx: &RenderContext, games: &[GameRecord]) -> Markup {
    html! {
        ol class=(ctx.class("timeline")) {
            @for game in games {
                li class=(ctx.class_of("timeline", "item")) {
                    span class=(ctx.class_of("timeline", "marker")) {}
                    div class=(ctx.class_of("timeline", "content")) {
                        time class=(ctx.class_of("game", "date")) { (updated_label(game)) }
                        h3 class=(ctx.class_of("game", "title")) {
                            a href=(game.page_url()) { (game.name) }
                        }
                        p class=(ctx.class_of("game", "provider")) { (game.provider) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_games;
    use crate::test_helpers::{fixture_config, fixture_identity};

    #[test]
    fn empty_lists_render_nothing() {
        let config = fixture_config();
        let identity = fixture_identity();
        let ctx = RenderContext::new(&config, &identity, "");
        assert_eq!(render_featured(&ctx, &[]).into_string(), "");
        assert_eq!(render_new(&ctx, &[]).into_string(), "");
    }

    #[test]
    fn every_featured_layout_links_each_game() {
        let games = &fallback_games()[..5];
        let identity = fixture_identity();
        for layout in FeaturedLayout::OPTIONS {
            let mut config = fixture_config();
            config.featured_games_layout = *layout;
            let ctx = RenderContext::new(&config, &identity, "");
            let html = render_featured(&ctx, games).into_string();
            assert!(html.contains("id=\"featured\""));
            for game in games {
                assert!(html.contains(&game.page_url()), "{layout} missing {}", game.slug);
            }
        }
    }

    #[test]
    fn every_new_layout_links_each_game() {
        let games = &fallback_games()[5..];
        let identity = fixture_identity();
        for layout in NewGamesLayout::OPTIONS {
            let mut config = fixture_config();
            config.new_games_layout = *layout;
            let html = render_new(&RenderContext::new(&config, &identity, ""), games).into_string();
            assert!(html.contains("New Games"));
            for game in games {
                assert!(html.contains(&game.page_url()), "{layout} missing {}", game.slug);
            }
        }
    }

    #[test]
    fn unrecognized_layouts_use_defaults() {
        let games = fallback_games();
        let identity = fixture_identity();
        let mut config = fixture_config();

        config.featured_games_layout = FeaturedLayout::Unrecognized;
        let unknown =
            render_featured(&RenderContext::new(&config, &identity, ""), &games).into_string();
        config.featured_games_layout = FeaturedLayout::CardGrid;
        let grid =
            render_featured(&RenderContext::new(&config, &identity, ""), &games).into_string();
        assert_eq!(unknown, grid);

        config.new_games_layout = NewGamesLayout::Unrecognized;
        let unknown = render_new(&RenderContext::new(&config, &identity, ""), &games).into_string();
        config.new_games_layout = NewGamesLayout::GridDates;
        let dated = render_new(&RenderContext::new(&config, &identity, ""), &games).into_string();
        assert_eq!(unknown, dated);
        assert!(!dated.is_empty());
    }

    #[test]
    fn dates_render_human_readable() {
        let games = fallback_games();
        assert_eq!(updated_label(&games[0]), "Jan 15, 2024");
        let mut undated = games[0].clone();
        undated.updated_at = None;
        assert_eq!(updated_label(&undated), "Recently added");
    }
}
