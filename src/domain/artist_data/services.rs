use crate::domain::artist_data::{ListenerCount, Rank, TrendDirection};
use serde::Serialize;

/// Result of comparing a current value against a previous one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChange {
    pub delta: i64,
    pub direction: TrendDirection,
    pub display_text: String,
}

impl TrendChange {
    pub fn is_improvement(&self) -> bool {
        self.direction == TrendDirection::Up
    }
}

/// Domain service deriving trend indicators from paired observations
///
/// The service only classifies the sign of the delta it computes; which
/// convention produced the pair (listeners grow upward, ranks shrink upward)
/// is encoded in the entry point the caller picks.
pub struct TrendAnalysisService;

impl TrendAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Classify a signed delta
    pub fn classify(&self, delta: i64) -> TrendDirection {
        TrendDirection::from_delta(delta)
    }

    /// Listener-style comparison: delta = current - previous
    pub fn change(&self, current: i64, previous: i64) -> TrendChange {
        self.from_delta(current - previous)
    }

    /// Listener-style comparison with a custom display formatter
    pub fn change_with<F>(&self, current: i64, previous: i64, format: F) -> TrendChange
    where
        F: Fn(i64) -> String,
    {
        let delta = current - previous;
        TrendChange { delta, direction: self.classify(delta), display_text: format(delta) }
    }

    /// Rank-style comparison: delta = previous - current, so climbing the
    /// chart (a numerically smaller rank) reads as an upward trend
    pub fn rank_change(&self, current: Rank, previous: Rank) -> TrendChange {
        self.from_delta(i64::from(previous.value()) - i64::from(current.value()))
    }

    /// Listener comparison over `ListenerCount` pairs
    pub fn listener_change(&self, current: ListenerCount, previous: ListenerCount) -> TrendChange {
        self.change(current.value() as i64, previous.value() as i64)
    }

    fn from_delta(&self, delta: i64) -> TrendChange {
        TrendChange { delta, direction: self.classify(delta), display_text: delta.to_string() }
    }
}

/// Group a listener count with thousands separators ("1,234,567")
pub fn format_monthly_listeners(listeners: u64) -> String {
    let digits = listeners.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
