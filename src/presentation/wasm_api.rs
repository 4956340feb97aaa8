use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::domain::artist_data::{ArtistId, Rank, SlotIndex, TrendAnalysisService};
use crate::domain::events::{DomainEvent, EventDispatcher, ExploreEvent, InMemoryEventDispatcher};
use crate::domain::explore::{ExploreMessage, ExploreState};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error};

/// WASM facade over the explore core
///
/// Holds the current state snapshot and the dispatch channel the JS page
/// calls into. No rendering and no fetching happen here: the page fetches
/// artist data itself and hands the result over as an ADD_ARTIST_DETAILS
/// message.
#[wasm_bindgen]
pub struct ExploreApi {
    state: ExploreState,
    events: InMemoryEventDispatcher,
    trends: TrendAnalysisService,
}

#[wasm_bindgen]
impl ExploreApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: ExploreState::new(),
            events: InMemoryEventDispatcher::new(),
            trends: TrendAnalysisService::new(),
        }
    }

    /// Apply one `{ "type": ..., "payload": ... }` message from JS
    ///
    /// Parse failures are surfaced to the caller and leave state untouched.
    pub fn dispatch(&mut self, message: &str) -> Result<(), JsValue> {
        match ExploreMessage::parse(message) {
            Ok(parsed) => {
                self.apply(parsed);
                Ok(())
            }
            Err(error) => {
                log_error!(LogComponent::Presentation("ExploreApi"), "rejected message: {}", error);
                self.events
                    .publish(ExploreEvent::MessageRejected { reason: error.to_string() });
                Err(JsValue::from_str(&error.to_string()))
            }
        }
    }

    /// Typed shortcut for ADD_ARTIST
    #[wasm_bindgen(js_name = addArtist)]
    pub fn add_artist(&mut self) {
        self.apply(ExploreMessage::AddArtist);
    }

    /// Typed shortcut for REMOVE_ARTIST
    #[wasm_bindgen(js_name = removeArtist)]
    pub fn remove_artist(&mut self, select_index: usize) {
        self.apply(ExploreMessage::RemoveArtist(SlotIndex::from(select_index)));
    }

    #[wasm_bindgen(js_name = slotCount)]
    pub fn slot_count(&self) -> usize {
        self.state.slot_count()
    }

    /// Full state snapshot as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ordered slot sequence as JSON
    #[wasm_bindgen(js_name = selectedArtistsJson)]
    pub fn selected_artists_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.state.selected_artists())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stream entry for one artist id as JSON, `null` when absent
    #[wasm_bindgen(js_name = streamsJson)]
    pub fn streams_json(&self, artist_id: &str) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.streams_for(&ArtistId::from(artist_id)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Listener trend (current - previous) as JSON
    #[wasm_bindgen(js_name = listenerTrendJson)]
    pub fn listener_trend_json(&self, current: i64, previous: i64) -> Result<String, JsValue> {
        serde_json::to_string(&self.trends.change(current, previous))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Rank trend (previous - current, improvement is up) as JSON
    #[wasm_bindgen(js_name = rankTrendJson)]
    pub fn rank_trend_json(&self, current: u32, previous: u32) -> Result<String, JsValue> {
        serde_json::to_string(&self.trends.rank_change(Rank::from(current), Rank::from(previous)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl ExploreApi {
    fn apply(&mut self, message: ExploreMessage) {
        let event = match &message {
            ExploreMessage::AddArtist => {
                ExploreEvent::SlotAdded { select_index: SlotIndex::from(self.state.slot_count()) }
            }
            ExploreMessage::AddArtistDetails { meta, streams } => ExploreEvent::SlotReplaced {
                select_index: meta.select_index,
                artist_id: meta.id.clone(),
                stream_count: streams.len(),
            },
            ExploreMessage::RemoveArtist(select_index) => {
                ExploreEvent::SlotRemoved { select_index: *select_index }
            }
        };

        log_debug!(
            LogComponent::Presentation("ExploreApi"),
            "applying {} -> {} ({} slots)",
            message.kind(),
            event.event_type(),
            self.state.slot_count()
        );
        self.state = self.state.apply(message);
        self.events.publish(event);
    }

    /// Observe transition events from Rust callers
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ExploreEvent) + 'static,
    {
        self.events.subscribe(handler);
    }

    /// Read access for Rust callers embedding the api
    pub fn state(&self) -> &ExploreState {
        &self.state
    }
}

impl Default for ExploreApi {
    fn default() -> Self {
        Self::new()
    }
}
