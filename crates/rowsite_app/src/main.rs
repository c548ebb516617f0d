//! `rowsite` CLI: build a crawlable static site from a public dataset.
//!
//! One binary covers both modes: auto-pagination from offset 0 until the API
//! returns an empty page (default), or an explicit `--pages` list.

use std::path::PathBuf;

use build_logging::{build_info, LogDestination};
use clap::Parser;
use log::LevelFilter;
use rowsite_engine::{
    build_pages, build_site, BuildOptions, BuildSummary, FetchSettings, ReqwestRowFetcher,
};

#[derive(Parser)]
#[command(name = "rowsite")]
#[command(about = "Build a crawlable static HTML site from dataset rows")]
#[command(version)]
struct Cli {
    /// Dataset identifier, e.g. myorg/mydataset
    #[arg(long, default_value = "slava-medvedev/zelensky-speeches")]
    dataset: String,

    /// Dataset config name
    #[arg(long, default_value = "default")]
    config: String,

    /// Dataset split name
    #[arg(long, default_value = "train")]
    split: String,

    /// Rows per generated page
    #[arg(long, default_value_t = 100, value_parser = positive_u32)]
    rows_per_page: u32,

    /// Output directory for the generated site
    #[arg(long, default_value = "docs")]
    outdir: PathBuf,

    /// Public base URL for sitemap generation (e.g. https://user.github.io/repo/)
    #[arg(long)]
    base_url: Option<String>,

    /// Comma-separated 1-based page numbers to build instead of auto-pagination
    #[arg(long, value_delimiter = ',', value_parser = positive_u32)]
    pages: Option<Vec<u32>>,

    /// Safety ceiling on pages fetched in one run
    #[arg(long, default_value_t = 10_000, value_parser = positive_u32)]
    max_pages: u32,

    /// Also write logs to ./rowsite.log
    #[arg(long)]
    log_file: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn positive_u32(raw: &str) -> Result<u32, String> {
    let value: u32 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if value == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(value)
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::TerminalAndFile
    } else {
        LogDestination::Terminal
    };
    build_logging::initialize(destination, log_level(cli.verbose));

    let fetcher = ReqwestRowFetcher::new(FetchSettings::default())?;
    let options = BuildOptions {
        dataset: cli.dataset,
        config: cli.config,
        split: cli.split,
        rows_per_page: cli.rows_per_page,
        outdir: cli.outdir,
        base_url: cli.base_url,
        max_pages: cli.max_pages,
    };

    let summary: BuildSummary = match cli.pages.as_deref() {
        Some(pages) => build_pages(&fetcher, &options, pages).await?,
        None => build_site(&fetcher, &options).await?,
    };

    build_info!(
        "Done. Wrote {} page(s) + index.html into {}/",
        summary.pages_written,
        options.outdir.display()
    );
    Ok(())
}
