use std::fs;

use pretty_assertions::assert_eq;
use rowsite_core::PageEntry;
use rowsite_engine::{
    ensure_output_dir, index_document, sitemap_document, write_atomic, write_index, write_page,
    write_sitemap, SitemapError,
};
use tempfile::TempDir;

const DATASET_URL: &str = "https://huggingface.co/datasets/org/speeches";

fn manifest() -> Vec<PageEntry> {
    vec![
        PageEntry {
            index: 1,
            row_count: 100,
        },
        PageEntry {
            index: 2,
            row_count: 100,
        },
    ]
}

#[test]
fn ensure_output_dir_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("docs").join("site");
    assert!(!nested.exists());
    ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn ensure_output_dir_rejects_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let first = write_atomic(temp.path(), "doc.html", "hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = write_atomic(temp.path(), "doc.html", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn page_writer_emits_crawlable_document_under_stable_name() {
    let temp = TempDir::new().unwrap();
    let path = write_page(
        temp.path(),
        7,
        "org/speeches – page 7",
        "<article><p>inner</p></article>",
        DATASET_URL,
    )
    .unwrap();

    assert_eq!(path.file_name().unwrap(), "page-0007.html");
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains(r#"<meta name="robots" content="index,follow">"#));
    assert!(html.contains(r#"<meta charset="utf-8">"#));
    assert!(html.contains("<article><p>inner</p></article>"));
    assert!(html.contains(DATASET_URL));
    assert!(!html.contains("<script"));
}

#[test]
fn page_writer_escapes_the_title_and_overwrites_idempotently() {
    let temp = TempDir::new().unwrap();
    let first = write_page(temp.path(), 1, "a <b> & \"c\"", "x", DATASET_URL).unwrap();
    let html = fs::read_to_string(&first).unwrap();
    assert!(html.contains("<title>a &lt;b&gt; &amp; &quot;c&quot;</title>"));

    let second = write_page(temp.path(), 1, "a <b> & \"c\"", "y", DATASET_URL).unwrap();
    assert_eq!(first, second);
    assert!(fs::read_to_string(&second).unwrap().contains("y"));
}

#[test]
fn index_lists_every_page_with_row_counts_in_order() {
    let html = index_document(&manifest(), "org/speeches – index", DATASET_URL);
    let first = html
        .find(r#"<a class="page" href="page-0001.html">Page 1 <small>(100 rows)</small></a>"#)
        .expect("page 1 link");
    let second = html
        .find(r#"<a class="page" href="page-0002.html">Page 2 <small>(100 rows)</small></a>"#)
        .expect("page 2 link");
    assert!(first < second);
    assert!(!html.contains("No pages found."));
}

#[test]
fn empty_manifest_renders_placeholder_not_error() {
    let temp = TempDir::new().unwrap();
    let path = write_index(temp.path(), &[], "org/speeches – index", DATASET_URL).unwrap();
    assert_eq!(path.file_name().unwrap(), "index.html");
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<li>No pages found.</li>"));
    assert!(!html.contains("class=\"page\""));
}

#[test]
fn sitemap_lists_index_and_every_page_under_the_base() {
    let xml = sitemap_document("https://x.io/site/", &manifest()).unwrap();
    assert_eq!(xml.matches("<url>").count(), 3);
    assert!(xml.contains("<loc>https://x.io/site/index.html</loc>"));
    assert!(xml.contains("<loc>https://x.io/site/page-0001.html</loc>"));
    assert!(xml.contains("<loc>https://x.io/site/page-0002.html</loc>"));
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
}

#[test]
fn sitemap_base_url_gets_a_trailing_slash() {
    let xml = sitemap_document("https://user.github.io/repo", &manifest()).unwrap();
    assert!(xml.contains("<loc>https://user.github.io/repo/index.html</loc>"));
    assert!(xml.contains("<loc>https://user.github.io/repo/page-0002.html</loc>"));
}

#[test]
fn sitemap_escapes_loc_values() {
    let xml = sitemap_document("https://x.io/a&b/", &[]).unwrap();
    assert!(xml.contains("<loc>https://x.io/a&amp;b/index.html</loc>"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = write_sitemap(TempDir::new().unwrap().path(), "not a url", &manifest()).unwrap_err();
    assert!(matches!(err, SitemapError::BaseUrl { .. }));
}

#[test]
fn sitemap_writer_writes_the_file() {
    let temp = TempDir::new().unwrap();
    let path = write_sitemap(temp.path(), "https://x.io/site/", &manifest()).unwrap();
    assert_eq!(path.file_name().unwrap(), "sitemap.xml");
    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.ends_with("</urlset>"));
}
