use artist_compare_wasm::domain::explore::{ExploreMessage, ExploreState};

#[test]
fn add_appends_empty_slot_at_slot_count() {
    let state = ExploreState::new();
    let state = state.apply(ExploreMessage::AddArtist);

    assert_eq!(state.slot_count(), 2);
    let added = &state.selected_artists()[1];
    assert_eq!(added.select_index.value(), 1);
    assert!(added.is_empty());
}

#[test]
fn add_leaves_prior_slots_and_streams_untouched() {
    let mut state = ExploreState::new();
    for _ in 0..3 {
        state = state.apply(ExploreMessage::AddArtist);
    }
    let before_slots = state.selected_artists().to_vec();
    let before_streams = state.artist_streams().to_vec();

    let after = state.apply(ExploreMessage::AddArtist);

    assert_eq!(after.slot_count(), before_slots.len() + 1);
    assert_eq!(&after.selected_artists()[..before_slots.len()], &before_slots[..]);
    assert_eq!(after.artist_streams(), &before_streams[..]);
}

#[test]
fn add_is_monotonic_over_many_applications() {
    let mut state = ExploreState::new();
    for expected in 1..10 {
        state = state.apply(ExploreMessage::AddArtist);
        assert_eq!(state.slot_count(), expected + 1);
        assert_eq!(state.selected_artists()[expected].select_index.value(), expected);
    }
}
