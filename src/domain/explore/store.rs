use crate::domain::artist_data::{ArtistId, ArtistStream, SelectedArtist, SlotIndex};
use crate::domain::explore::messages::ExploreMessage;
use serde::Serialize;

/// State owned by the explore page: the ordered comparison slots and the
/// listener-history series of the artists bound to them
///
/// The state is immutable-and-replaced: every transition returns a new
/// value, so a stale reference stays a valid snapshot. Both collections are
/// owned exclusively by the store; collaborators read through the accessors
/// and mutate only by dispatching messages into [`ExploreState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreState {
    selected_artists: Vec<SelectedArtist>,
    artist_streams: Vec<ArtistStream>,
}

impl Default for ExploreState {
    /// One unbound slot at index 0, no streams
    fn default() -> Self {
        Self {
            selected_artists: vec![SelectedArtist::empty(SlotIndex::from(0))],
            artist_streams: Vec::new(),
        }
    }
}

impl ExploreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one message, producing the next state
    ///
    /// Pure and total over the message set: the match is exhaustive and
    /// every arm runs to completion before the result is visible.
    pub fn apply(&self, message: ExploreMessage) -> ExploreState {
        match message {
            ExploreMessage::AddArtist => self.add_artist(),
            ExploreMessage::AddArtistDetails { meta, streams } => {
                self.add_artist_details(meta, streams)
            }
            ExploreMessage::RemoveArtist(select_index) => self.remove_artist(select_index),
        }
    }

    /// Append an empty slot whose index equals the current slot count
    fn add_artist(&self) -> ExploreState {
        let mut selected_artists = self.selected_artists.clone();
        selected_artists.push(SelectedArtist::empty(SlotIndex::from(selected_artists.len())));
        ExploreState { selected_artists, artist_streams: self.artist_streams.clone() }
    }

    /// Replace the slot at `meta.select_index` and swap its stream data
    ///
    /// The stale occupant's streams are purged even when the incoming list
    /// is empty. Targeting a vacant index degrades to an insert; the final
    /// sort restores the ordering invariant either way.
    fn add_artist_details(
        &self,
        meta: SelectedArtist,
        streams: Vec<ArtistStream>,
    ) -> ExploreState {
        let stale_id: Option<ArtistId> = self
            .selected_artists
            .iter()
            .find(|artist| artist.select_index == meta.select_index)
            .map(|artist| artist.id.clone());

        let mut artist_streams: Vec<ArtistStream> = self
            .artist_streams
            .iter()
            .filter(|stream| Some(&stream.id) != stale_id.as_ref())
            .cloned()
            .collect();
        artist_streams.extend(streams);

        let mut selected_artists: Vec<SelectedArtist> = self
            .selected_artists
            .iter()
            .filter(|artist| artist.select_index != meta.select_index)
            .cloned()
            .collect();
        selected_artists.push(meta);
        selected_artists.sort_by_key(|artist| artist.select_index);

        ExploreState { selected_artists, artist_streams }
    }

    /// Remove the slot at the index, purge streams no remaining slot
    /// references, and renumber the rest contiguously from 0
    ///
    /// Removing a vacant index is a no-op; removing the only slot resets to
    /// the initial state so the collection never goes empty.
    fn remove_artist(&self, select_index: SlotIndex) -> ExploreState {
        let Some(removed) =
            self.selected_artists.iter().find(|artist| artist.select_index == select_index)
        else {
            return self.clone();
        };
        let removed_id = removed.id.clone();

        let mut selected_artists: Vec<SelectedArtist> = self
            .selected_artists
            .iter()
            .filter(|artist| artist.select_index != select_index)
            .cloned()
            .collect();
        if selected_artists.is_empty() {
            return ExploreState::new();
        }
        for (position, artist) in selected_artists.iter_mut().enumerate() {
            artist.select_index = SlotIndex::from(position);
        }

        let still_referenced =
            selected_artists.iter().any(|artist| artist.id == removed_id);
        let artist_streams = if still_referenced || removed_id.is_empty() {
            self.artist_streams.clone()
        } else {
            self.artist_streams
                .iter()
                .filter(|stream| stream.id != removed_id)
                .cloned()
                .collect()
        };

        ExploreState { selected_artists, artist_streams }
    }

    /// Ordered slot sequence
    pub fn selected_artists(&self) -> &[SelectedArtist] {
        &self.selected_artists
    }

    /// Stream collection, one entry per bound artist id
    pub fn artist_streams(&self) -> &[ArtistStream] {
        &self.artist_streams
    }

    pub fn slot_count(&self) -> usize {
        self.selected_artists.len()
    }

    pub fn slot_at(&self, select_index: SlotIndex) -> Option<&SelectedArtist> {
        self.selected_artists.iter().find(|artist| artist.select_index == select_index)
    }

    pub fn streams_for(&self, id: &ArtistId) -> Option<&ArtistStream> {
        self.artist_streams.iter().find(|stream| &stream.id == id)
    }
}
