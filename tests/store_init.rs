use artist_compare_wasm::domain::explore::ExploreState;

#[test]
fn initial_state_has_one_empty_slot() {
    let state = ExploreState::new();
    assert_eq!(state.slot_count(), 1);

    let slot = &state.selected_artists()[0];
    assert_eq!(slot.select_index.value(), 0);
    assert!(slot.is_empty());
    assert_eq!(slot.name, "");

    assert!(state.artist_streams().is_empty());
}

#[test]
fn default_matches_new() {
    assert_eq!(ExploreState::default(), ExploreState::new());
}
