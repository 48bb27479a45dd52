//! # casino-gen
//!
//! A randomized static site generator for social casino marketing sites.
//! Give it a domain and it draws a visual theme, pulls a list of games from
//! the content API (or a built-in fallback set), and writes a complete site of
//! plain HTML, CSS and JavaScript.
//!
//! # Architecture: One Linear Run
//!
//! Every invocation walks the same phases, never looping back:
//!
//! ```text
//! Init → AcquireContent → SampleConfiguration → RenderPages → PersistOutputs → Done
//! ```
//!
//! - **AcquireContent** never fails. Any network, status, or payload problem is
//!   logged and replaced by the fallback dataset in a single substitution.
//! - **SampleConfiguration** draws one [`theme::SiteConfiguration`]. Every page
//!   of the run is rendered from that one value, so the site looks consistent.
//! - **RenderPages** is pure: configuration plus content in, markup out. All
//!   randomness comes from explicitly seeded generators, so a run can be
//!   reproduced with `--seed`.
//! - **PersistOutputs** writes files and fetches thumbnails. Thumbnail failures
//!   are swallowed; the markup references predictable file names either way.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Content source: API fetch, payload normalization, fallback dataset |
//! | [`select`] | Featured and newest game selection for the home page |
//! | [`theme`] | Layout axes and the per-run configuration sampler |
//! | [`naming`] | CSS class-name resolver for the five naming conventions |
//! | [`render`] | Section renderers, one dispatch table per page region |
//! | [`assemble`] | Page assembler: head metadata, framework link, DOM wrapper |
//! | [`assets`] | Generated stylesheet and the static site script |
//! | [`generate`] | Site builder: phase orchestration and persistence |
//! | [`thumbnails`] | Best-effort thumbnail downloads |
//! | [`config`] | Layered `casino-gen.toml` loading and validation |
//! | [`types`] | Shared data types (`GameRecord`, `SiteIdentity`, `PageSpec`) |
//! | [`output`] | CLI run summary formatting |
//!
//! # Design Decisions
//!
//! ## Sum Types Per Layout Axis
//!
//! Each layout axis is its own enum with an `Unrecognized` catch-all that the
//! sampler never draws. A configuration read back from JSON with a value the
//! renderers do not know still renders, through each renderer's default
//! fragment, instead of failing the run.
//!
//! ## Maud Templates
//!
//! Markup is produced with [Maud](https://maud.lambda.xyz/). Game names and
//! descriptions come from a remote API, so automatic escaping matters here.
//! Literal CSS and JavaScript blocks are spliced with `PreEscaped`.
//!
//! ## Class Names Are Data
//!
//! No renderer writes a class name literally. Every class goes through
//! [`naming::NamingConvention::resolve`], and the stylesheet is generated from
//! the same resolver, so selectors and markup always agree. The site script
//! hooks onto `data-*` attributes instead of classes for the same reason.

pub mod assemble;
pub mod assets;
pub mod config;
pub mod content;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod select;
pub mod theme;
pub mod thumbnails;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
