use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use dealshelf::{
    config::{Config, Overrides},
    fetch::{self, CatalogSource},
    render::{self, PageMeta},
    Catalog, Language, RenderContext,
};
use reqwest::Client;
use std::{fs, path::PathBuf, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Render the affiliate deals catalog into a static page")]
struct Args {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Catalog CSV path or http(s) URL
    #[arg(short, long)]
    source: Option<String>,
    /// Output HTML file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Page language: en or he
    #[arg(short, long)]
    lang: Option<Language>,
    /// Only render products whose name contains this term
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resolve config ───────────────────────────────────────────
    let args = Args::parse();
    let cfg = Config::resolve(
        args.config.as_deref(),
        Overrides {
            source: args.source,
            output: args.output,
            language: args.lang,
            search: args.search,
        },
    )?;
    info!(source = %cfg.source, lang = %cfg.language, "config resolved");

    // ─── 3) load + parse catalog ─────────────────────────────────────
    let start = Instant::now();
    let client = Client::new();
    let source = CatalogSource::parse(&cfg.source);
    let records = fetch::load_records(&client, &source).await;
    if records.is_empty() {
        warn!("catalog is empty; rendering the no-products page");
    }

    let ctx = RenderContext::new(cfg.language);
    let mut catalog = Catalog::from_records(&records);
    if let Some(term) = cfg.search.as_deref().filter(|t| !t.trim().is_empty()) {
        catalog = catalog.filtered(term, ctx.language);
        info!(term, matched = catalog.len(), "applied search filter");
    }
    for section in catalog.sections() {
        info!(category = %section.category, products = section.products.len(), "section");
    }
    info!(latest = catalog.latest().count(), "latest deals");

    // ─── 4) render + write ───────────────────────────────────────────
    let meta = PageMeta {
        title: cfg.title.clone(),
        updated: Local::now().date_naive(),
    };
    let html = render::render_page(&catalog, &ctx, &meta);

    if let Some(parent) = cfg.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(&cfg.output, &html)
        .with_context(|| format!("writing page to {}", cfg.output.display()))?;

    info!(
        output = %cfg.output.display(),
        products = catalog.len(),
        bytes = html.len(),
        elapsed = ?start.elapsed(),
        "all done"
    );
    Ok(())
}
