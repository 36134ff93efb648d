use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use folio_tui::{App, Config, ImageResolver, LogTarget, init_logger, mount, portfolio, print_document, run};

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio with rotating image carousels", version)]
struct Args {
    /// Path to a TOML config file (default: ./folio.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that /images/... paths resolve against
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the whole page to stdout and exit
    #[arg(long)]
    print: bool,

    /// Content column width
    #[arg(long)]
    width: Option<u16>,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Dump the portfolio content as JSON and exit
    #[arg(long)]
    dump_content: bool,

    /// Carousel rotation interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG)).with_context(|| format!("loading config {DEFAULT_CONFIG}"))?
        }
        None => Config::default(),
    };

    if let Some(assets) = &args.assets {
        config.media.asset_root = assets.clone();
    }
    if let Some(width) = args.width {
        config.display.max_width = width;
    }
    if let Some(interval) = args.interval_ms {
        config.carousel.interval_ms = interval;
    }
    if args.no_color {
        config.display.color = false;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn print_page(config: &Config) -> Result<()> {
    let width = config.display.max_width;
    let resolver = ImageResolver::from_config(&config.media);
    // Everything fits in the viewport, so every section has entered.
    let mut app = App::new(portfolio(), resolver, config, (width.saturating_add(2), u16::MAX));
    let doc = app.document();
    app.sync_visibility(&doc);
    app.disconnect();

    let doc = app.document();
    let mut out = io::stdout().lock();
    print_document(&mut out, &doc, config.display.color).context("writing page")?;
    Ok(())
}

fn interactive(config: &Config) -> Result<()> {
    let size = crossterm::terminal::size().context("reading terminal size")?;
    let resolver = ImageResolver::from_config(&config.media);
    let mut app = App::new(portfolio(), resolver, config, size);

    let mut handle = mount(config.rotation_interval()).context("mounting terminal")?;
    let result = run(&mut app, &mut handle);
    handle.unmount();
    result.context("event loop")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let target = match (&config.log.file, args.print || args.dump_content) {
        (_, true) => LogTarget::Stderr,
        (Some(path), false) => LogTarget::File(path),
        (None, false) => LogTarget::Off,
    };
    init_logger(&config.log.level, args.verbose, target).context("initializing logger")?;

    let content = portfolio();
    content.validate().context("invalid portfolio content")?;

    if args.dump_content {
        let json = content.to_json()?;
        let mut out = io::stdout().lock();
        writeln!(out, "{json}")?;
        return Ok(());
    }

    if args.print {
        return print_page(&config);
    }

    tracing::info!(interval_ms = config.carousel.interval_ms, "starting");
    interactive(&config)
}
