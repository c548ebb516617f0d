use std::path::{Path, PathBuf};

use rowsite_core::{page_filename, PageEntry};

use crate::page::html_document;
use crate::persist::{write_atomic, PersistError};

pub const INDEX_FILENAME: &str = "index.html";

/// Navigation document linking every written page with its row count, in
/// manifest order. An empty manifest renders a placeholder item; that is a
/// valid build, not an error.
pub fn index_document(manifest: &[PageEntry], title: &str, dataset_url: &str) -> String {
    let links = if manifest.is_empty() {
        "<li>No pages found.</li>".to_string()
    } else {
        manifest
            .iter()
            .map(|entry| {
                format!(
                    "<li><a class=\"page\" href=\"{href}\">Page {index} <small>({count} rows)</small></a></li>",
                    href = page_filename(entry.index),
                    index = entry.index,
                    count = entry.row_count,
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ")
    };

    let body_main = format!(
        "    <nav>\n      <ul>\n        {links}\n      </ul>\n    </nav>"
    );
    html_document(
        title,
        &body_main,
        dataset_url,
        "License: CC BY 4.0. This index links to static subpages for easy crawling.",
    )
}

/// Writes `index.html`, overwriting any previous one.
pub fn write_index(
    dir: &Path,
    manifest: &[PageEntry],
    title: &str,
    dataset_url: &str,
) -> Result<PathBuf, PersistError> {
    let document = index_document(manifest, title, dataset_url);
    write_atomic(dir, INDEX_FILENAME, &document)
}
