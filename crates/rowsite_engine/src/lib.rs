//! Rowsite engine: IO pipeline from the rows API to static HTML on disk.
mod build;
mod fetch;
mod page;
mod persist;
mod render;
mod site_index;
mod sitemap;

pub use build::{build_pages, build_site, dataset_url, BuildError, BuildOptions, BuildSummary};
pub use fetch::{FetchError, FetchSettings, ReqwestRowFetcher, RowFetcher, RowQuery};
pub use page::{page_document, write_page};
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use render::render_rows;
pub use site_index::{index_document, write_index, INDEX_FILENAME};
pub use sitemap::{sitemap_document, write_sitemap, SitemapError, SITEMAP_FILENAME};
