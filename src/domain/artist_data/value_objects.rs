use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - Spotify artist identifier
///
/// An empty id marks an unbound comparison slot.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, From, Into, Deref, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ArtistId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - Position of a comparison slot
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    From,
    Into,
    Deref,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct SlotIndex(usize);

impl SlotIndex {
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Value Object - Monthly listener count
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Deref,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct ListenerCount(u64);

impl ListenerCount {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - Chart rank (smaller is better)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Deref,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Rank(u32);

impl Rank {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - Three-way trend classification
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TrendDirection {
    #[strum(serialize = "up")]
    #[serde(rename = "up")]
    Up,

    #[strum(serialize = "down")]
    #[serde(rename = "down")]
    Down,

    #[strum(serialize = "flat")]
    #[serde(rename = "flat")]
    Flat,
}

impl TrendDirection {
    /// Classify a signed delta by its sign
    pub fn from_delta(delta: i64) -> Self {
        match delta.cmp(&0) {
            std::cmp::Ordering::Greater => Self::Up,
            std::cmp::Ordering::Less => Self::Down,
            std::cmp::Ordering::Equal => Self::Flat,
        }
    }
}
