use rowsite_core::{update, BuildEffect, BuildMsg, BuildPhase, BuildState, PageEntry};

fn fetched(state: BuildState, row_count: usize) -> (BuildState, Vec<BuildEffect>) {
    update(state, BuildMsg::RowsFetched { row_count })
}

#[test]
fn starts_at_offset_zero_page_one() {
    build_logging::initialize_for_tests();
    let state = BuildState::new(100, 10_000, false);
    assert_eq!(
        state.phase(),
        BuildPhase::Fetching {
            offset: 0,
            page_index: 1
        }
    );
    assert!(state.manifest().is_empty());
}

#[test]
fn two_full_pages_then_empty_writes_both_and_finishes() {
    let state = BuildState::new(100, 10_000, false);

    let (state, effects) = fetched(state, 100);
    assert_eq!(effects, vec![BuildEffect::WritePage { page_index: 1 }]);
    assert_eq!(
        state.phase(),
        BuildPhase::Fetching {
            offset: 100,
            page_index: 2
        }
    );

    let (state, effects) = fetched(state, 100);
    assert_eq!(effects, vec![BuildEffect::WritePage { page_index: 2 }]);

    let (state, effects) = fetched(state, 0);
    assert_eq!(state.phase(), BuildPhase::Done);
    assert_eq!(effects, vec![BuildEffect::WriteIndex]);
    assert_eq!(
        state.manifest(),
        &[
            PageEntry {
                index: 1,
                row_count: 100
            },
            PageEntry {
                index: 2,
                row_count: 100
            }
        ]
    );
    assert!(!state.hit_page_ceiling());
}

#[test]
fn sitemap_effect_only_when_base_url_configured() {
    let (_, effects) = fetched(BuildState::new(100, 10_000, true), 0);
    assert_eq!(effects, vec![BuildEffect::WriteIndex, BuildEffect::WriteSitemap]);

    let (_, effects) = fetched(BuildState::new(100, 10_000, false), 0);
    assert_eq!(effects, vec![BuildEffect::WriteIndex]);
}

#[test]
fn empty_first_fetch_finishes_with_empty_manifest() {
    let (state, effects) = fetched(BuildState::new(50, 10_000, false), 0);
    assert_eq!(state.phase(), BuildPhase::Done);
    assert!(state.manifest().is_empty());
    assert_eq!(effects, vec![BuildEffect::WriteIndex]);
}

#[test]
fn short_page_still_advances_offset_by_rows_per_page() {
    // The API may serve a final partial page before the empty one; the next
    // offset always moves by the requested page length.
    let (state, _) = fetched(BuildState::new(100, 10_000, false), 37);
    assert_eq!(
        state.phase(),
        BuildPhase::Fetching {
            offset: 100,
            page_index: 2
        }
    );
}

#[test]
fn page_ceiling_stops_the_run_and_still_writes_index() {
    let state = BuildState::new(10, 3, true);
    let (state, _) = fetched(state, 10);
    let (state, _) = fetched(state, 10);
    let (state, effects) = fetched(state, 10);

    assert_eq!(state.phase(), BuildPhase::Done);
    assert!(state.hit_page_ceiling());
    assert_eq!(
        effects,
        vec![
            BuildEffect::WritePage { page_index: 3 },
            BuildEffect::WriteIndex,
            BuildEffect::WriteSitemap
        ]
    );
    assert_eq!(state.manifest().len(), 3);
}

#[test]
fn fetch_failure_goes_terminal_without_index_effects() {
    let state = BuildState::new(100, 10_000, true);
    let (state, _) = fetched(state, 100);

    let (state, effects) = update(state, BuildMsg::FetchFailed);
    assert_eq!(state.phase(), BuildPhase::Done);
    assert!(effects.is_empty());
    // The page already written stays in the manifest.
    assert_eq!(state.manifest().len(), 1);
}

#[test]
fn terminal_state_absorbs_further_messages() {
    let (state, _) = fetched(BuildState::new(100, 10_000, true), 0);

    let (state, effects) = fetched(state, 100);
    assert_eq!(state.phase(), BuildPhase::Done);
    assert!(effects.is_empty());
    assert!(state.manifest().is_empty());
}
