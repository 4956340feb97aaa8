use crate::domain::artist_data::{ArtistId, SlotIndex};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Events emitted around explore-state transitions
#[derive(Debug, Clone)]
pub enum ExploreEvent {
    SlotAdded {
        select_index: SlotIndex,
    },
    SlotReplaced {
        select_index: SlotIndex,
        artist_id: ArtistId,
        stream_count: usize,
    },
    SlotRemoved {
        select_index: SlotIndex,
    },
    MessageRejected {
        reason: String,
    },
}

impl DomainEvent for ExploreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ExploreEvent::SlotAdded { .. } => "SlotAdded",
            ExploreEvent::SlotReplaced { .. } => "SlotReplaced",
            ExploreEvent::SlotRemoved { .. } => "SlotRemoved",
            ExploreEvent::MessageRejected { .. } => "MessageRejected",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: ExploreEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&ExploreEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ExploreEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: ExploreEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}
