use casino_gen::content::{GameSource, HttpGameSource};
use casino_gen::generate::{self, GenerateOptions};
use casino_gen::thumbnails::{HttpThumbnailSource, ThumbnailSource};
use casino_gen::{config, output};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "casino-gen")]
#[command(about = "Randomized static site generator for social casino sites")]
#[command(long_about = "\
Randomized static site generator for social casino sites

Give it a domain and it draws a theme (framework, colors, layouts, class
naming), fetches games from the content API, and writes a complete static
site:

  casino-site-example-com/
  ├── index.html                   # hero, featured, new games, about
  ├── games.html                   # searchable, filterable game grid
  ├── game.html                    # player page, ?slug= picks the game
  ├── about.html
  ├── contact.html
  ├── terms.html, privacy.html, cookies.html, responsible-gaming.html
  ├── css/style.css                # unless the stylesheet is inlined
  ├── js/main.js
  └── images/games/{slug}-{id}.jpg

If the API is unreachable the built-in list of ten games is used instead.
The seed is printed after every run; pass it to --seed to reproduce a site.

Run 'casino-gen --gen-config' to generate a documented casino-gen.toml.")]
#[command(version)]
struct Cli {
    /// Domain the site is generated for
    #[arg(required_unless_present = "gen_config")]
    domain: Option<String>,

    /// Output directory [default: casino-site-{domain}]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Seed for every random draw
    #[arg(long)]
    seed: Option<u64>,

    /// Config file [default: ./casino-gen.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bearer token for the content API
    #[arg(long, env = "CASINO_GEN_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Skip the network: fallback games, no thumbnails
    #[arg(long)]
    offline: bool,

    /// Don't download thumbnails
    #[arg(long)]
    no_thumbnails: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,

    /// Print a stock casino-gen.toml with all options documented
    #[arg(long)]
    gen_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    init_tracing(cli.verbose);

    let domain = cli.domain.ok_or("a domain is required")?;
    let mut gen_config = config::load_config(cli.config.as_deref())?;
    if cli.api_token.is_some() {
        gen_config.api.token = cli.api_token;
    }

    let options = GenerateOptions {
        output_dir: cli
            .output
            .unwrap_or_else(|| generate::default_output_dir(&domain)),
        domain,
        seed: cli.seed.unwrap_or_else(rand::random),
        site_name: gen_config.site.name.clone(),
        embed_base: gen_config.api.embed_base.clone(),
        generated_on: chrono::Utc::now().date_naive(),
    };

    let game_source = if cli.offline {
        None
    } else {
        Some(HttpGameSource::new(&gen_config.api)?)
    };
    let thumbnail_source = if cli.offline || cli.no_thumbnails || !gen_config.thumbnails.download {
        None
    } else {
        Some(HttpThumbnailSource::new(gen_config.thumbnails.timeout_secs)?)
    };

    let report = generate::generate(
        game_source.as_ref().map(|s| s as &dyn GameSource),
        thumbnail_source.as_ref().map(|s| s as &dyn ThumbnailSource),
        &options,
    )?;
    output::print_site_report(&report);

    Ok(())
}

/// stderr logging; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
