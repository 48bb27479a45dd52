//! Section renderers.
//!
//! Every page region has its own renderer module, and every renderer resolves
//! its variant through exactly one static dispatch table keyed by one layout
//! axis:
//!
//! | Module | Axis | Region |
//! |--------|------|--------|
//! | [`nav`] | `navigation` | Site navigation |
//! | [`hero`] | `hero` | Home page hero |
//! | [`cards`] | `featured_games_layout`, `new_games_layout` | Home page game sections |
//! | [`about`] | `about_section`, `about_page_layout` | Home about block, about page |
//! | [`footer`] | `footer` | Site footer |
//! | [`pages`] | `games_page_layout`, `game_page_layout`, `contact_page_layout` | Page bodies |
//! | [`legal`] | `legal_page_layout` | Legal documents |
//!
//! A value missing from a table (the `Unrecognized` variant) falls through to
//! that table's default renderer, so every lookup yields a non-empty fragment.
//!
//! Renderers are pure: a [`RenderContext`] (and sometimes game records) in,
//! `Markup` out. Class names come from the context's naming convention and
//! script hooks are `data-*` attributes.

pub mod about;
pub mod cards;
pub mod footer;
pub mod hero;
pub mod legal;
pub mod nav;
pub mod pages;

use crate::theme::{Palette, SiteConfiguration};
use crate::types::{GameRecord, SiteIdentity};
use maud::{Markup, html};

/// Everything a renderer may read. Built once per run and shared by reference.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfiguration,
    pub identity: &'a SiteIdentity,
    /// Base URL for game iframes; the game id is appended as a path segment.
    pub embed_base: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a SiteConfiguration,
        identity: &'a SiteIdentity,
        embed_base: &'a str,
    ) -> Self {
        Self {
            config,
            identity,
            embed_base,
        }
    }

    /// Class for a bare base token.
    pub fn class(&self, base: &str) -> String {
        self.config.naming.block(base)
    }

    /// Class for a base token with a modifier.
    pub fn class_of(&self, base: &str, modifier: &str) -> String {
        self.config.naming.element(base, modifier)
    }

    /// Space-separated class list.
    pub fn classes(&self, parts: &[(&str, Option<&str>)]) -> String {
        parts
            .iter()
            .map(|(base, modifier)| self.config.naming.resolve(base, *modifier))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn site_name(&self) -> &str {
        &self.identity.site_name
    }

    pub fn palette(&self) -> Palette {
        self.config.palette()
    }

    pub fn semantic(&self) -> bool {
        self.config.dom_structure != crate::theme::DomStructure::Generic
    }

    pub fn embed_url(&self, game: &GameRecord) -> String {
        format!("{}/{}", self.embed_base.trim_end_matches('/'), game.id)
    }
}

/// Look `key` up in a dispatch table, falling back to `default`.
pub(crate) fn dispatch<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K, default: V) -> V {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(default)
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Primary site links, shared by navigation and footers.
pub(crate) const MAIN_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("games.html", "Games"),
    ("about.html", "About"),
    ("contact.html", "Contact"),
];

pub(crate) const LEGAL_LINKS: &[(&str, &str)] = &[
    ("terms.html", "Terms & Conditions"),
    ("privacy.html", "Privacy Policy"),
    ("cookies.html", "Cookie Policy"),
    ("responsible-gaming.html", "Responsible Gaming"),
];

/// Standard game card: thumbnail, name, provider, play link.
pub(crate) fn game_card(ctx: &RenderContext, game: &GameRecord) -> Markup {
    html! {
        article class=(ctx.classes(&[("card", None), ("game", Some("card"))])) data-game-id=(game.id) {
            img class=(ctx.class_of("game", "image")) src=(game.thumbnail_path()) alt=(game.name) loading="lazy";
            div class=(ctx.class_of("game", "info")) {
                h3 class=(ctx.class_of("game", "title")) { (game.name) }
                p class=(ctx.class_of("game", "provider")) { (game.provider) }
                a class=(ctx.classes(&[("btn", None), ("btn", Some("primary"))])) href=(game.page_url()) {
                    "Play Game"
                }
            }
        }
    }
}

/// Titled home page section wrapping arbitrary content.
pub(crate) fn section(ctx: &RenderContext, id: &str, title: &str, content: Markup) -> Markup {
    html! {
        section class=(ctx.class("section")) id=(id) {
            div class=(ctx.class("container")) {
                h2 class=(ctx.classes(&[("section", Some("title")), ("text", Some("center"))])) { (title) }
                (content)
            }
        }
    }
}
