use artist_compare_wasm::domain::errors::StoreError;
use artist_compare_wasm::domain::explore::{ExploreMessage, ExploreState, MessageKind};

#[test]
fn parses_add_artist() {
    let message = ExploreMessage::parse(r#"{"type":"ADD_ARTIST"}"#).unwrap();
    assert_eq!(message, ExploreMessage::AddArtist);
    assert_eq!(message.kind(), MessageKind::AddArtist);
}

#[test]
fn parses_add_artist_details() {
    let message = ExploreMessage::parse(
        r#"{
            "type": "ADD_ARTIST_DETAILS",
            "payload": {
                "meta": {
                    "selectIndex": 0,
                    "id": "A1",
                    "name": "Artist One",
                    "rank": 3,
                    "prevRank": 5,
                    "currentListens": 1000,
                    "prevListens": 900
                },
                "streams": [
                    {
                        "id": "A1",
                        "points": [
                            {"updatedAt": "2024-07-01", "monthlyListeners": 900},
                            {"updatedAt": "2024-07-02", "monthlyListeners": 1000}
                        ]
                    }
                ]
            }
        }"#,
    )
    .unwrap();

    let ExploreMessage::AddArtistDetails { meta, streams } = message else {
        panic!("wrong variant");
    };
    assert_eq!(meta.select_index.value(), 0);
    assert_eq!(meta.id.value(), "A1");
    assert_eq!(meta.rank.unwrap().value(), 3);
    assert_eq!(meta.current_listens.unwrap().value(), 1000);
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].count(), 2);
}

#[test]
fn parses_remove_artist_with_numeric_payload() {
    let message = ExploreMessage::parse(r#"{"type":"REMOVE_ARTIST","payload":2}"#).unwrap();
    assert_eq!(message, ExploreMessage::RemoveArtist(2.into()));
}

#[test]
fn unknown_kind_is_rejected_as_unknown_message() {
    let error = ExploreMessage::parse(r#"{"type":"BOGUS","payload":1}"#).unwrap_err();
    assert_eq!(error, StoreError::UnknownMessage("BOGUS".to_string()));
}

#[test]
fn missing_type_is_an_invalid_payload() {
    let error = ExploreMessage::parse(r#"{"payload":1}"#).unwrap_err();
    assert!(matches!(error, StoreError::InvalidPayload(_)));
}

#[test]
fn malformed_details_payload_is_rejected() {
    // selectIndex absent from meta
    let error = ExploreMessage::parse(
        r#"{"type":"ADD_ARTIST_DETAILS","payload":{"meta":{"id":"A1","name":"x"}}}"#,
    )
    .unwrap_err();
    assert!(matches!(error, StoreError::InvalidPayload(_)));

    // payload missing entirely
    let error = ExploreMessage::parse(r#"{"type":"ADD_ARTIST_DETAILS"}"#).unwrap_err();
    assert!(matches!(error, StoreError::InvalidPayload(_)));
}

#[test]
fn non_numeric_remove_payload_is_rejected() {
    let error = ExploreMessage::parse(r#"{"type":"REMOVE_ARTIST","payload":"first"}"#).unwrap_err();
    assert!(matches!(error, StoreError::InvalidPayload(_)));
}

#[test]
fn non_json_input_is_rejected() {
    let error = ExploreMessage::parse("not json at all").unwrap_err();
    assert!(matches!(error, StoreError::InvalidPayload(_)));
}

#[test]
fn failed_parse_leaves_state_untouched() {
    let state = ExploreState::new();
    let before = state.clone();
    // A rejected message never reaches the reducer
    assert!(ExploreMessage::parse(r#"{"type":"BOGUS"}"#).is_err());
    assert_eq!(state, before);
}
