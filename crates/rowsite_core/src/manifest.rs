/// One entry of the page manifest: a written page and how many rows it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    /// 1-based page index.
    pub index: u32,
    pub row_count: usize,
}

/// Deterministic filename for a page: `page-NNNN.html`, zero-padded to 4
/// digits. Stable across runs for the same index.
pub fn page_filename(index: u32) -> String {
    format!("page-{index:04}.html")
}
