use crate::manifest::PageEntry;

/// Where the build currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Waiting for the page at `offset` to be fetched.
    Fetching { offset: u64, page_index: u32 },
    /// Terminal: no further effects are emitted.
    Done,
}

/// Input events for the build state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMsg {
    /// A fetch completed with `row_count` rows. Zero rows is the sole
    /// pagination terminator and is not an error.
    RowsFetched { row_count: usize },
    /// A fetch failed. The machine goes terminal without emitting the
    /// index/sitemap effects; the driver propagates the error.
    FetchFailed,
}

/// Side effects for the driver to execute, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEffect {
    WritePage { page_index: u32 },
    WriteIndex,
    WriteSitemap,
}

/// Pure pagination state: phase, accumulated manifest, and the page ceiling.
///
/// The ceiling is a deliberate deviation from the upstream behavior, which
/// loops forever against an API that never returns an empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    phase: BuildPhase,
    manifest: Vec<PageEntry>,
    rows_per_page: u32,
    max_pages: u32,
    sitemap_enabled: bool,
    hit_page_ceiling: bool,
}

impl BuildState {
    /// Initial state: offset 0, page index 1.
    pub fn new(rows_per_page: u32, max_pages: u32, sitemap_enabled: bool) -> Self {
        debug_assert!(rows_per_page > 0);
        debug_assert!(max_pages > 0);
        Self {
            phase: BuildPhase::Fetching {
                offset: 0,
                page_index: 1,
            },
            manifest: Vec::new(),
            rows_per_page,
            max_pages,
            sitemap_enabled,
            hit_page_ceiling: false,
        }
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Ordered (page index, row count) pairs for every page written so far.
    /// Read-only once the machine reaches `Done`.
    pub fn manifest(&self) -> &[PageEntry] {
        &self.manifest
    }

    /// True when the run stopped at the page ceiling instead of an empty page.
    pub fn hit_page_ceiling(&self) -> bool {
        self.hit_page_ceiling
    }

    fn finish_effects(&self) -> Vec<BuildEffect> {
        let mut effects = vec![BuildEffect::WriteIndex];
        if self.sitemap_enabled {
            effects.push(BuildEffect::WriteSitemap);
        }
        effects
    }
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BuildState, msg: BuildMsg) -> (BuildState, Vec<BuildEffect>) {
    let BuildPhase::Fetching { offset, page_index } = state.phase else {
        // Terminal state absorbs everything.
        return (state, Vec::new());
    };
    debug_assert_eq!(offset, (page_index as u64 - 1) * state.rows_per_page as u64);

    let effects = match msg {
        BuildMsg::RowsFetched { row_count: 0 } => {
            state.phase = BuildPhase::Done;
            state.finish_effects()
        }
        BuildMsg::RowsFetched { row_count } => {
            state.manifest.push(PageEntry {
                index: page_index,
                row_count,
            });
            let mut effects = vec![BuildEffect::WritePage { page_index }];
            if page_index >= state.max_pages {
                state.hit_page_ceiling = true;
                state.phase = BuildPhase::Done;
                effects.extend(state.finish_effects());
            } else {
                state.phase = BuildPhase::Fetching {
                    offset: offset + state.rows_per_page as u64,
                    page_index: page_index + 1,
                };
            }
            effects
        }
        BuildMsg::FetchFailed => {
            state.phase = BuildPhase::Done;
            Vec::new()
        }
    };

    (state, effects)
}
