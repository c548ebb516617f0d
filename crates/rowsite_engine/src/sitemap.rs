use std::path::{Path, PathBuf};

use rowsite_core::{escape_html, page_filename, PageEntry};
use thiserror::Error;
use url::Url;

use crate::persist::{write_atomic, PersistError};
use crate::site_index::INDEX_FILENAME;

pub const SITEMAP_FILENAME: &str = "sitemap.xml";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("invalid base url {url}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Absolute URLs for the index and every page, joined onto the base URL with
/// a trailing slash ensured.
fn absolute_urls(base_url: &str, manifest: &[PageEntry]) -> Result<Vec<String>, SitemapError> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base).map_err(|source| SitemapError::BaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let join = |relative: &str| -> Result<String, SitemapError> {
        base.join(relative)
            .map(|joined| joined.to_string())
            .map_err(|source| SitemapError::BaseUrl {
                url: base_url.to_string(),
                source,
            })
    };

    let mut urls = vec![join(INDEX_FILENAME)?];
    for entry in manifest {
        urls.push(join(&page_filename(entry.index))?);
    }
    Ok(urls)
}

/// Standards-format sitemap: one `<url><loc>` per document, values escaped.
pub fn sitemap_document(base_url: &str, manifest: &[PageEntry]) -> Result<String, SitemapError> {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string(),
    ];
    for url in absolute_urls(base_url, manifest)? {
        lines.push(format!("  <url><loc>{}</loc></url>", escape_html(&url)));
    }
    lines.push("</urlset>".to_string());
    Ok(lines.join("\n"))
}

/// Writes `sitemap.xml`. Only called when a base URL is configured.
pub fn write_sitemap(
    dir: &Path,
    base_url: &str,
    manifest: &[PageEntry],
) -> Result<PathBuf, SitemapError> {
    let document = sitemap_document(base_url, manifest)?;
    Ok(write_atomic(dir, SITEMAP_FILENAME, &document)?)
}
