use uuid::Uuid;
use verne_table::{SortConfig, SortDirection, TableViewState, DEFAULT_PAGE_SIZE};

fn state() -> TableViewState {
    TableViewState::new(SortConfig::descending("added"))
}

#[test]
fn test_defaults() {
    let state = state();
    assert_eq!(state.search_term(), "");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(state.sort(), &SortConfig::descending("added"));
    assert_eq!(state.editing(), None);
}

#[test]
fn test_search_change_returns_to_first_page() {
    let mut state = state();
    state.set_current_page(4);
    state.set_search_term("dune");
    assert_eq!(state.search_term(), "dune");
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_toggle_same_column_flips_direction() {
    let mut state = state();
    state.set_current_page(3);

    state.toggle_sort("added");
    assert_eq!(state.sort(), &SortConfig::ascending("added"));
    assert_eq!(state.current_page(), 1);

    state.toggle_sort("added");
    assert_eq!(state.sort().direction, SortDirection::Descending);
}

#[test]
fn test_toggle_new_column_starts_ascending() {
    let mut state = state();
    state.toggle_sort("added");
    state.toggle_sort("title");
    assert_eq!(state.sort(), &SortConfig::ascending("title"));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_set_current_page_is_stored_as_requested() {
    let mut state = state();
    state.set_total_items(6);
    state.set_current_page(99);
    // Out-of-range pages are corrected at derivation time, not here.
    assert_eq!(state.current_page(), 99);
}

#[test]
fn test_total_pages_rounds_up() {
    let mut state = state();
    state.set_total_items(11);
    assert_eq!(state.total_pages(), 3);

    state.set_total_items(10);
    assert_eq!(state.total_pages(), 2);

    state.set_total_items(0);
    assert_eq!(state.total_pages(), 0);
}

#[test]
fn test_editing_lock_holds_one_record() {
    let mut state = state();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    state.begin_edit(first);
    assert_eq!(state.editing(), Some(first));

    state.begin_edit(second);
    assert_eq!(state.editing(), Some(second));

    state.end_edit();
    assert_eq!(state.editing(), None);
}

#[test]
fn test_reset_restores_defaults_but_not_editing() {
    let mut state = state();
    let id = Uuid::new_v4();
    state.set_search_term("solaris");
    state.toggle_sort("title");
    state.set_current_page(2);
    state.begin_edit(id);

    state.reset();

    assert_eq!(state.search_term(), "");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.sort(), &SortConfig::descending("added"));
    assert_eq!(state.editing(), Some(id));
}
