pub use super::value_objects::{ArtistId, ListenerCount, Rank, SlotIndex};
use serde::{Deserialize, Serialize};

/// Domain entity - A comparison slot, optionally bound to an artist
///
/// Field names follow the JSON shape the original explore page exchanges
/// with its data source, so slots round-trip through the wire unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedArtist {
    pub select_index: SlotIndex,
    pub id: ArtistId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_listens: Option<ListenerCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_listens: Option<ListenerCount>,
}

impl SelectedArtist {
    /// An unbound slot at the given position
    pub fn empty(select_index: SlotIndex) -> Self {
        Self {
            select_index,
            id: ArtistId::default(),
            name: String::new(),
            image: None,
            genres: Vec::new(),
            album_count: None,
            single_count: None,
            url_instagram: None,
            url_twitter: None,
            latest_release_name: None,
            latest_release_date: None,
            rank: None,
            prev_rank: None,
            current_listens: None,
            prev_listens: None,
        }
    }

    /// A bound slot with no extra metadata yet
    pub fn named(select_index: SlotIndex, id: impl Into<ArtistId>, name: &str) -> Self {
        Self { id: id.into(), name: name.to_string(), ..Self::empty(select_index) }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Public artist page URL, `None` for an unbound slot
    pub fn spotify_url(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("https://open.spotify.com/artist/{}", self.id.value()))
        }
    }

    /// Title-case the genre list and join it for display
    pub fn clean_genres(&self) -> String {
        self.genres
            .iter()
            .map(|genre| {
                genre
                    .split_whitespace()
                    .map(|word| {
                        let mut chars = word.chars();
                        match chars.next() {
                            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                            None => String::new(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Domain entity - One observation of an artist's monthly listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPoint {
    pub updated_at: String,
    pub monthly_listeners: ListenerCount,
}

impl StreamPoint {
    pub fn new(updated_at: &str, monthly_listeners: impl Into<ListenerCount>) -> Self {
        Self { updated_at: updated_at.to_string(), monthly_listeners: monthly_listeners.into() }
    }
}

/// Domain entity - Listener-history series for one artist id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStream {
    pub id: ArtistId,
    pub points: Vec<StreamPoint>,
}

impl ArtistStream {
    pub fn new(id: impl Into<ArtistId>, points: Vec<StreamPoint>) -> Self {
        Self { id: id.into(), points }
    }

    pub fn points(&self) -> &[StreamPoint] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Most recent observation
    pub fn latest(&self) -> Option<&StreamPoint> {
        self.points.last()
    }

    /// Latest and previous listener counts, when at least two points exist
    pub fn latest_pair(&self) -> Option<(ListenerCount, ListenerCount)> {
        match self.points.as_slice() {
            [.., prev, last] => Some((last.monthly_listeners, prev.monthly_listeners)),
            _ => None,
        }
    }
}
