use crate::domain::artist_data::{ArtistStream, SelectedArtist, SlotIndex};
use crate::domain::errors::{StoreError, StoreResult};
use serde::Deserialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Wire-level message kinds accepted by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
pub enum MessageKind {
    #[strum(serialize = "ADD_ARTIST")]
    AddArtist,

    #[strum(serialize = "ADD_ARTIST_DETAILS")]
    AddArtistDetails,

    #[strum(serialize = "REMOVE_ARTIST")]
    RemoveArtist,
}

/// Closed set of store transitions
///
/// Typed callers dispatch these directly and the reducer matches
/// exhaustively; an unknown message can only arise from the untrusted JSON
/// boundary, where [`ExploreMessage::parse`] rejects it.
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreMessage {
    /// Append an empty slot at the end of the collection
    AddArtist,
    /// Atomically replace the slot at `meta.select_index` and its streams
    AddArtistDetails { meta: SelectedArtist, streams: Vec<ArtistStream> },
    /// Remove the slot at the index and renumber the rest
    RemoveArtist(SlotIndex),
}

#[derive(Deserialize)]
struct DetailsPayload {
    meta: SelectedArtist,
    #[serde(default)]
    streams: Vec<ArtistStream>,
}

impl ExploreMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            ExploreMessage::AddArtist => MessageKind::AddArtist,
            ExploreMessage::AddArtistDetails { .. } => MessageKind::AddArtistDetails,
            ExploreMessage::RemoveArtist(_) => MessageKind::RemoveArtist,
        }
    }

    /// Validate a `{ "type": ..., "payload": ... }` message from an
    /// untrusted source
    ///
    /// An unrecognized `type` fails with [`StoreError::UnknownMessage`]; a
    /// missing or malformed payload fails with [`StoreError::InvalidPayload`].
    /// A failed parse never reaches the reducer, so state stays untouched.
    pub fn parse(input: &str) -> StoreResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| StoreError::InvalidPayload(format!("not a JSON message: {}", e)))?;

        let kind_str = raw
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| StoreError::InvalidPayload("missing message type".to_string()))?;

        let kind: MessageKind = kind_str
            .parse()
            .map_err(|_| StoreError::UnknownMessage(kind_str.to_string()))?;

        let payload = raw.get("payload");

        match kind {
            MessageKind::AddArtist => Ok(ExploreMessage::AddArtist),
            MessageKind::AddArtistDetails => {
                let payload = payload.cloned().ok_or_else(|| {
                    StoreError::InvalidPayload("ADD_ARTIST_DETAILS requires a payload".to_string())
                })?;
                let details: DetailsPayload = serde_json::from_value(payload)
                    .map_err(|e| StoreError::InvalidPayload(e.to_string()))?;
                Ok(ExploreMessage::AddArtistDetails {
                    meta: details.meta,
                    streams: details.streams,
                })
            }
            MessageKind::RemoveArtist => {
                let select_index = payload
                    .and_then(serde_json::Value::as_u64)
                    .ok_or_else(|| {
                        StoreError::InvalidPayload(
                            "REMOVE_ARTIST requires a numeric selectIndex payload".to_string(),
                        )
                    })?;
                Ok(ExploreMessage::RemoveArtist(SlotIndex::from(select_index as usize)))
            }
        }
    }
}
