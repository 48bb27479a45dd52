//! Site generation: the run from domain to files on disk.
//!
//! ## Phases
//!
//! A run moves through fixed phases, each logged at `info`:
//!
//! ```text
//! Init → AcquireContent → SampleConfiguration → RenderPages → PersistOutputs → Done
//! ```
//!
//! Content acquisition never fails (the fallback dataset is substituted), and
//! rendering is pure. Only persistence can return an error.
//!
//! ## Randomness
//!
//! All randomness derives from one `u64` seed. The seed is split into
//! independent streams so that, for example, the number of games fetched
//! never changes which theme a seed produces:
//!
//! | Stream | Drives |
//! |--------|--------|
//! | config | [`SiteConfiguration::sample`] |
//! | copy | site name, hero headline and call to action |
//! | selection | featured games on the home page |
//! | meta | title/description template per page |
//!
//! ## Output Structure
//!
//! ```text
//! casino-site-example-com/
//! ├── index.html
//! ├── games.html
//! ├── game.html                  # ?slug= selects the game client-side
//! ├── about.html
//! ├── contact.html
//! ├── terms.html
//! ├── privacy.html
//! ├── cookies.html
//! ├── responsible-gaming.html
//! ├── css/style.css              # only when the stylesheet isn't inlined
//! ├── js/main.js
//! └── images/games/{slug}-{id}.jpg
//! ```

use crate::assemble::{self, STYLESHEET_PATH, SCRIPT_PATH};
use crate::assets;
use crate::content::{Content, ContentOrigin, GameSource, acquire_content};
use crate::render::hero::HeroCopy;
use crate::render::legal::{self, LegalDocument};
use crate::render::{RenderContext, about, cards, hero, pages};
use crate::select::{HomeSelection, select_home_games};
use crate::theme::{SiteConfiguration, generate_site_name};
use crate::thumbnails::{ThumbnailReport, ThumbnailSource, download_thumbnails};
use crate::types::{GameRecord, PageSpec, SiteIdentity, bare_domain};
use chrono::NaiveDate;
use maud::html;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run phases, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    AcquireContent,
    SampleConfiguration,
    RenderPages,
    PersistOutputs,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Init => "init",
            Self::AcquireContent => "acquire-content",
            Self::SampleConfiguration => "sample-configuration",
            Self::RenderPages => "render-pages",
            Self::PersistOutputs => "persist-outputs",
            Self::Done => "done",
        })
    }
}

/// Directories created under the output root on every run.
pub const OUTPUT_DIRS: &[&str] = &["css", "js", "images", "images/games"];

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub domain: String,
    pub output_dir: PathBuf,
    pub seed: u64,
    /// Fixed site name; generated from the word banks when absent.
    pub site_name: Option<String>,
    /// Game iframe base URL.
    pub embed_base: String,
    /// Date stamped into legal pages and the copyright line.
    pub generated_on: NaiveDate,
}

/// `casino-site-{domain}` with the scheme dropped and every non-alphanumeric
/// character replaced by `-`.
pub fn default_output_dir(domain: &str) -> PathBuf {
    let sanitized: String = bare_domain(domain)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    PathBuf::from(format!("casino-site-{sanitized}"))
}

/// Independent random streams forked from the run seed.
pub struct Streams {
    pub config: StdRng,
    pub copy: StdRng,
    pub selection: StdRng,
    pub meta: StdRng,
}

impl Streams {
    pub fn from_seed(seed: u64) -> Self {
        let mut root = StdRng::seed_from_u64(seed);
        Self {
            config: StdRng::from_rng(&mut root),
            copy: StdRng::from_rng(&mut root),
            selection: StdRng::from_rng(&mut root),
            meta: StdRng::from_rng(&mut root),
        }
    }
}

/// Everything sampled for a run before any page is rendered.
#[derive(Debug, Clone)]
pub struct SiteDraw {
    pub identity: SiteIdentity,
    pub config: SiteConfiguration,
    pub hero: HeroCopy,
}

impl SiteDraw {
    pub fn sample(streams: &mut Streams, options: &GenerateOptions) -> Self {
        let config = SiteConfiguration::sample(&mut streams.config);
        let site_name = match &options.site_name {
            Some(name) => name.clone(),
            None => generate_site_name(&mut streams.copy),
        };
        let hero = HeroCopy::sample(&mut streams.copy, &site_name);
        Self {
            identity: SiteIdentity::new(site_name, &options.domain, options.generated_on),
            config,
            hero,
        }
    }
}

/// One output file, path relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct SiteReport {
    pub output_dir: PathBuf,
    pub seed: u64,
    pub identity: SiteIdentity,
    pub config: SiteConfiguration,
    pub origin: ContentOrigin,
    pub game_count: usize,
    /// Relative paths, in write order.
    pub files: Vec<String>,
    /// `None` when downloads were disabled.
    pub thumbnails: Option<ThumbnailReport>,
}

/// Run every phase and write the site to `options.output_dir`.
///
/// `source: None` skips the network and uses the fallback dataset.
/// `thumbnails: None` skips thumbnail downloads.
pub fn generate(
    source: Option<&dyn GameSource>,
    thumbnails: Option<&dyn ThumbnailSource>,
    options: &GenerateOptions,
) -> Result<SiteReport, GenerateError> {
    tracing::info!(
        phase = %Phase::Init,
        domain = %options.domain,
        seed = options.seed,
        "starting run"
    );
    let mut streams = Streams::from_seed(options.seed);

    tracing::info!(phase = %Phase::AcquireContent, "acquiring content");
    let content = match source {
        Some(source) => acquire_content(source, &options.domain),
        None => Content::offline(),
    };
    if content.is_fallback() {
        tracing::warn!(origin = %content.origin, "rendering from fallback dataset");
    }

    tracing::info!(phase = %Phase::SampleConfiguration, "sampling configuration");
    let draw = SiteDraw::sample(&mut streams, options);
    for (axis, value) in draw.config.axes() {
        tracing::debug!(axis, value = %value, "configuration axis");
    }
    tracing::info!(site_name = %draw.identity.site_name, "site identity");

    tracing::info!(phase = %Phase::RenderPages, games = content.games.len(), "rendering pages");
    let ctx = RenderContext::new(&draw.config, &draw.identity, &options.embed_base);
    let selection = select_home_games(&content.games, &mut streams.selection);
    let files = render_site(&ctx, &content.games, &draw.hero, &selection, &mut streams.meta);

    tracing::info!(
        phase = %Phase::PersistOutputs,
        dir = %options.output_dir.display(),
        "writing site"
    );
    write_site(&options.output_dir, &files)?;
    let thumbnail_report = thumbnails.map(|source| {
        download_thumbnails(source, &content.games, &options.output_dir.join("images/games"))
    });

    tracing::info!(phase = %Phase::Done, files = files.len(), "site generated");
    Ok(SiteReport {
        output_dir: options.output_dir.clone(),
        seed: options.seed,
        identity: draw.identity,
        config: draw.config,
        origin: content.origin,
        game_count: content.games.len(),
        files: files.into_iter().map(|f| f.path).collect(),
        thumbnails: thumbnail_report,
    })
}

/// Render every page and shared asset. Pure apart from the meta stream.
pub fn render_site<R: Rng + ?Sized>(
    ctx: &RenderContext,
    games: &[GameRecord],
    hero_copy: &HeroCopy,
    selection: &HomeSelection,
    meta_rng: &mut R,
) -> Vec<RenderedFile> {
    let home = html! {
        (hero::render(ctx, hero_copy))
        (cards::render_featured(ctx, &selection.featured))
        (cards::render_new(ctx, &selection.newest))
        (about::render_section(ctx))
    };

    let mut specs = vec![
        PageSpec { route: "index.html", title: "Home".to_string(), content: home },
        PageSpec {
            route: "games.html",
            title: "All Games".to_string(),
            content: pages::render_games_page(ctx, games),
        },
        PageSpec {
            route: "game.html",
            title: "Play Game".to_string(),
            content: pages::render_game_page(ctx, games),
        },
        PageSpec {
            route: "about.html",
            title: "About Us".to_string(),
            content: about::render_page(ctx),
        },
        PageSpec {
            route: "contact.html",
            title: "Contact Us".to_string(),
            content: pages::render_contact_page(ctx),
        },
    ];
    specs.extend(LegalDocument::ALL.into_iter().map(|doc| PageSpec {
        route: doc.route(),
        title: doc.title().to_string(),
        content: legal::render_legal_page(ctx, doc),
    }));

    let mut files: Vec<RenderedFile> = specs
        .iter()
        .map(|spec| RenderedFile {
            path: spec.route.to_string(),
            contents: assemble::assemble(ctx, spec, meta_rng).into_string(),
        })
        .collect();

    if !ctx.config.inline_css {
        files.push(RenderedFile {
            path: STYLESHEET_PATH.to_string(),
            contents: assets::generate_stylesheet(ctx.config),
        });
    }
    files.push(RenderedFile {
        path: SCRIPT_PATH.to_string(),
        contents: assets::SCRIPT.to_string(),
    });
    files
}

/// Create the output directories and write every file. Not retried.
pub fn write_site(output_dir: &Path, files: &[RenderedFile]) -> Result<(), GenerateError> {
    for dir in OUTPUT_DIRS {
        fs::create_dir_all(output_dir.join(dir))?;
    }
    for file in files {
        let target = output_dir.join(&file.path);
        fs::write(&target, &file.contents)?;
        tracing::debug!(path = %target.display(), bytes = file.contents.len(), "wrote file");
    }
    Ok(())
}
