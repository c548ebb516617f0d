use std::path::PathBuf;

use build_logging::{build_info, build_warn};
use rowsite_core::{update, BuildEffect, BuildMsg, BuildPhase, BuildState, PageEntry, Row};
use thiserror::Error;

use crate::fetch::{FetchError, RowFetcher, RowQuery};
use crate::page::write_page;
use crate::persist::{ensure_output_dir, PersistError};
use crate::render::render_rows;
use crate::site_index::write_index;
use crate::sitemap::{write_sitemap, SitemapError};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub dataset: String,
    pub config: String,
    pub split: String,
    /// Rows requested per page; must be > 0.
    pub rows_per_page: u32,
    pub outdir: PathBuf,
    /// Public base URL; enables the sitemap when set.
    pub base_url: Option<String>,
    /// Safety ceiling on the number of pages fetched in one run.
    pub max_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages_written: u32,
    pub total_rows: u64,
    /// True when the run stopped at `max_pages` rather than an empty page.
    pub hit_page_ceiling: bool,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error(transparent)]
    Sitemap(#[from] SitemapError),
}

/// Public dataset page used as the `Source:` link on every document.
pub fn dataset_url(dataset: &str) -> String {
    format!("https://huggingface.co/datasets/{dataset}")
}

/// Fetches pages sequentially from offset 0 until the API returns an empty
/// page, writing one HTML file per page, then the index and, when a base URL
/// is configured, the sitemap.
///
/// A fetch failure aborts immediately: pages already on disk stay, the
/// index and sitemap are skipped. Strictly sequential, one request and one
/// file write at a time.
pub async fn build_site(
    fetcher: &dyn RowFetcher,
    options: &BuildOptions,
) -> Result<BuildSummary, BuildError> {
    ensure_output_dir(&options.outdir)?;

    let mut state = BuildState::new(
        options.rows_per_page,
        options.max_pages,
        options.base_url.is_some(),
    );

    loop {
        let BuildPhase::Fetching { offset, page_index } = state.phase() else {
            break;
        };
        build_info!("Fetching page {page_index} (offset={offset})");

        let query = RowQuery {
            dataset: options.dataset.clone(),
            config: options.config.clone(),
            split: options.split.clone(),
            offset,
            length: options.rows_per_page,
        };
        let rows = match fetcher.fetch_rows(&query).await {
            Ok(rows) => rows,
            Err(err) => {
                // Terminal without index/sitemap effects; pages already on
                // disk stay as they are.
                let (_done, _) = update(state, BuildMsg::FetchFailed);
                return Err(err.into());
            }
        };
        if rows.is_empty() {
            build_info!("No more rows. Stopping.");
        }

        let (next, effects) = update(
            state,
            BuildMsg::RowsFetched {
                row_count: rows.len(),
            },
        );
        state = next;
        apply_effects(&effects, &rows, &state, options)?;
    }

    if state.hit_page_ceiling() {
        build_warn!(
            "Reached the page ceiling ({} pages) before the API returned an empty page.",
            options.max_pages
        );
    }

    Ok(summarize(state.manifest(), state.hit_page_ceiling()))
}

/// Explicit-pages mode: fetches exactly the listed 1-based page numbers,
/// writes each non-empty one, then the index and optional sitemap. Empty
/// pages are logged and skipped; they do not end the run.
pub async fn build_pages(
    fetcher: &dyn RowFetcher,
    options: &BuildOptions,
    pages: &[u32],
) -> Result<BuildSummary, BuildError> {
    ensure_output_dir(&options.outdir)?;
    let source_url = dataset_url(&options.dataset);

    let mut manifest: Vec<PageEntry> = Vec::with_capacity(pages.len());
    for &page_index in pages {
        let offset = (page_index as u64 - 1) * options.rows_per_page as u64;
        build_info!("Fetching page {page_index} (offset={offset})");

        let query = RowQuery {
            dataset: options.dataset.clone(),
            config: options.config.clone(),
            split: options.split.clone(),
            offset,
            length: options.rows_per_page,
        };
        let rows = fetcher.fetch_rows(&query).await?;
        if rows.is_empty() {
            build_warn!("Page {page_index} has no rows; skipping.");
            continue;
        }

        render_and_write_page(&rows, page_index, options, &source_url)?;
        manifest.push(PageEntry {
            index: page_index,
            row_count: rows.len(),
        });
    }

    write_index(
        &options.outdir,
        &manifest,
        &format!("{} – index", options.dataset),
        &source_url,
    )?;
    if let Some(base_url) = options.base_url.as_deref() {
        write_sitemap(&options.outdir, base_url, &manifest)?;
    }

    Ok(summarize(&manifest, false))
}

fn apply_effects(
    effects: &[BuildEffect],
    rows: &[Row],
    state: &BuildState,
    options: &BuildOptions,
) -> Result<(), BuildError> {
    let source_url = dataset_url(&options.dataset);
    for effect in effects {
        match effect {
            BuildEffect::WritePage { page_index } => {
                render_and_write_page(rows, *page_index, options, &source_url)?;
            }
            BuildEffect::WriteIndex => {
                let path = write_index(
                    &options.outdir,
                    state.manifest(),
                    &format!("{} – index", options.dataset),
                    &source_url,
                )?;
                build_info!("Wrote {}", path.display());
            }
            BuildEffect::WriteSitemap => {
                // The effect is only emitted when a base URL is configured.
                if let Some(base_url) = options.base_url.as_deref() {
                    let path = write_sitemap(&options.outdir, base_url, state.manifest())?;
                    build_info!("Wrote {}", path.display());
                }
            }
        }
    }
    Ok(())
}

fn render_and_write_page(
    rows: &[Row],
    page_index: u32,
    options: &BuildOptions,
    source_url: &str,
) -> Result<(), BuildError> {
    let inner = render_rows(rows);
    let title = format!("{} – page {}", options.dataset, page_index);
    let path = write_page(&options.outdir, page_index, &title, &inner, source_url)?;
    build_info!("Wrote {} ({} rows)", path.display(), rows.len());
    Ok(())
}

fn summarize(manifest: &[PageEntry], hit_page_ceiling: bool) -> BuildSummary {
    BuildSummary {
        pages_written: manifest.len() as u32,
        total_rows: manifest.iter().map(|entry| entry.row_count as u64).sum(),
        hit_page_ceiling,
    }
}
