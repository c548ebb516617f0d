use std::path::{Path, PathBuf};

use rowsite_core::{escape_html, page_filename};

use crate::persist::{write_atomic, PersistError};

/// Fixed stylesheet shared by every generated document. Dark theme, no
/// external assets, no scripts.
pub const SITE_CSS: &str = r#"
  body{margin:0; font-family:system-ui,-apple-system,Segoe UI,Roboto,Inter,Arial,sans-serif; background:#0f1220; color:#e8ecff}
  main{max-width:1100px;margin:0 auto;padding:20px} header{max-width:1100px;margin:0 auto;padding:16px 20px 0}
  h1{font-size:22px;margin:12px 0}
  .grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:16px;margin:16px 0}
  article{background:#161a2b;border:1px solid #262a45;border-radius:16px;padding:16px;box-shadow:0 4px 14px rgba(0,0,0,.25)}
  h2{font-size:16px;margin:0 0 8px}
  .badges{display:flex;gap:8px;flex-wrap:wrap;margin-bottom:8px}
  .chip{display:inline-flex;align-items:center;gap:6px;background:#222642;border:1px solid #262a45;color:#9aa3c7;padding:4px 8px;border-radius:999px;font-size:12px}
  p{white-space:pre-wrap;margin:0;color:#e1e6ff;line-height:1.45}
  a{color:#6aa0ff;word-break:break-all;text-decoration:none}
  nav ul{display:flex;flex-wrap:wrap;gap:8px;list-style:none;padding:0}
  nav a.page{display:inline-block;padding:6px 10px;border-radius:10px;background:#222642;border:1px solid #262a45;text-decoration:none;color:#e8ecff;font-size:14px}
  footer{max-width:1100px;margin:0 auto;padding:16px 20px 40px;color:#9aa3c7}
"#;

/// Wraps a body in the full crawlable document: charset/viewport metas,
/// `robots: index,follow`, inline style, header with the dataset source
/// link, footer. No script tags anywhere.
pub(crate) fn html_document(title: &str, body_main: &str, dataset_url: &str, footer: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="index,follow">
  <title>{title}</title>
  <style>{SITE_CSS}</style>
</head>
<body>
  <header>
    <h1>{title}</h1>
    <div>Source: <a href="{dataset_url}">{dataset_url}</a></div>
  </header>
  <main>
{body_main}
  </main>
  <footer>{footer}</footer>
</body>
</html>
"#
    )
}

/// Assembles one page document around a pre-rendered article fragment.
pub fn page_document(title: &str, inner_html: &str, dataset_url: &str) -> String {
    let body_main = format!(
        "    <section class=\"grid\">\n{inner_html}\n    </section>"
    );
    html_document(
        title,
        &body_main,
        dataset_url,
        "License: CC BY 4.0. This page is static (no JS) for easy crawling.",
    )
}

/// Writes `page-NNNN.html` for a 1-based page index, creating the output
/// directory if absent. Re-running overwrites the same filename.
pub fn write_page(
    dir: &Path,
    page_index: u32,
    title: &str,
    inner_html: &str,
    dataset_url: &str,
) -> Result<PathBuf, PersistError> {
    let document = page_document(title, inner_html, dataset_url);
    write_atomic(dir, &page_filename(page_index), &document)
}
