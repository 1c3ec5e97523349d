use clap::{Parser, Subcommand};
use site_hydrate::content::{ContentSource, FileSource, HttpSource};
use site_hydrate::page::{Page, PageBindings};
use site_hydrate::slideshow::{SlideImage, SlideshowContainer};
use site_hydrate::theme::ThemeVars;
use site_hydrate::{bootstrap, color, config, output};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "site-hydrate")]
#[command(about = "Hydrate static site pages from a shared content document")]
#[command(long_about = "\
Hydrate static site pages from a shared content document

Every page reads one JSON document and applies it to the parts it has:

  data/content.json
  {
    \"site\":  { \"logo\": ..., \"name\": ..., \"brand\": { \"primary\", \"accent\", \"bg\" } },
    \"legal\": { \"scio\": ..., \"oscr_badge\": ... }
  }

Brand colors become theme variables (card colors are mixed from them), the
header gets the logo, name and navigation, the footer gets the year, name
and charity number. A missing or broken document leaves page defaults.

--root is a site directory or an http(s) URL to the site.

Run 'site-hydrate gen-config' to generate a documented site-hydrate.toml.")]
#[command(version)]
struct Cli {
    /// Site directory or base URL
    #[arg(long, default_value = ".", global = true)]
    root: String,

    /// Config file (defaults to site-hydrate.toml in a directory root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bootstrap a page and report its header, footer and theme
    Hydrate {
        /// Page path, e.g. programmes.html
        #[arg(default_value = "index.html")]
        page: String,
    },
    /// Print the theme variables after brand colors are applied
    Theme,
    /// Print the navigation for a page
    Nav {
        #[arg(default_value = "index.html")]
        page: String,
    },
    /// Start a slideshow from a JSON image list and let time pass
    Slideshow {
        /// Slideshow element id
        id: String,
        /// JSON array of {src, alt, caption}
        images: PathBuf,
        /// Auto-advance interval
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Virtual time to let elapse before printing
        #[arg(long, default_value_t = 0)]
        advance_ms: u64,
    },
    /// Mix two hex colors: a + (b - a) * t
    Mix { a: String, b: String, t: f64 },
    /// Print a stock site-hydrate.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Hydrate { page } => {
            let config = load_config(&cli)?;
            let source = open_source(&cli.root, page, &config)?;
            let page = bootstrap::hydrate(
                PageBindings::complete(&page_path(page)),
                source.as_ref(),
                &config,
            );
            output::print_hydrate_output(&page, &config.content.resource);
        }
        Command::Theme => {
            let config = load_config(&cli)?;
            let source = open_source(&cli.root, "index.html", &config)?;
            let page = bootstrap::hydrate(PageBindings::new("/"), source.as_ref(), &config);
            print!("{}", page.theme().to_css());
        }
        Command::Nav { page } => {
            for line in output::format_nav(&page_path(page)) {
                println!("{}", line);
            }
        }
        Command::Slideshow {
            id,
            images,
            interval_ms,
            advance_ms,
        } => {
            let config = load_config(&cli)?;
            let images: Vec<SlideImage> =
                serde_json::from_str(&std::fs::read_to_string(images)?)?;
            let bindings =
                PageBindings::new("/").with_slideshow(id, SlideshowContainer::complete());
            let mut page = Page::new(bindings, ThemeVars::new())
                .with_slideshow_interval(config.slideshow.interval());
            if !page.init_slideshow(id, images, interval_ms.map(Duration::from_millis)) {
                return Err(format!("slideshow {id} has no images").into());
            }
            page.advance(Duration::from_millis(*advance_ms));
            if let Some(show) = page.slideshow(id) {
                output::print_slideshow_output(show);
            }
        }
        Command::Mix { a, b, t } => {
            println!("{}", color::mix(a, b, *t));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--config` wins; a directory root is searched for `site-hydrate.toml`;
/// a URL root uses the defaults.
fn load_config(cli: &Cli) -> Result<config::HydrateConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None if is_url(&cli.root) => Ok(config::HydrateConfig::default()),
        None => config::load_config(Path::new(&cli.root)),
    }
}

fn is_url(root: &str) -> bool {
    root.starts_with("http://") || root.starts_with("https://")
}

/// Location path for a page argument: `programmes.html` → `/programmes.html`.
fn page_path(page: &str) -> String {
    format!("/{}", page.trim_start_matches('/'))
}

/// Content source for a page under `root`. Resources resolve against the
/// page itself, as a browser would.
fn open_source(
    root: &str,
    page: &str,
    config: &config::HydrateConfig,
) -> Result<Box<dyn ContentSource>, Box<dyn std::error::Error>> {
    if is_url(root) {
        let base = format!("{}/", root.trim_end_matches('/'));
        let page_url = url::Url::parse(&base)?.join(page.trim_start_matches('/'))?;
        log::debug!("content from {}", page_url.join(&config.content.resource)?);
        Ok(Box::new(HttpSource::new(
            page_url.as_str(),
            config.content.timeout(),
        )?))
    } else {
        Ok(Box::new(FileSource::for_page(root, page)))
    }
}
