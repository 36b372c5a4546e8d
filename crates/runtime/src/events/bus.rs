//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{AutomationEvent, RefreshEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Refresh pass results
    Refresh,
    /// Delivery automation progress
    Automation,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Refresh(RefreshEvent),
    Automation(AutomationEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Refresh(_) => Topic::Refresh,
            Event::Automation(_) => Topic::Automation,
        }
    }
}

struct Channels {
    refresh: broadcast::Sender<Event>,
    automation: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels are created up front, one per topic.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                refresh: broadcast::channel(capacity).0,
                automation: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Refresh => &self.channels.refresh,
            Topic::Automation => &self.channels.automation,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut refresh = bus.subscribe(Topic::Refresh);
        let mut automation = bus.subscribe(Topic::Automation);

        bus.publish(Event::Automation(AutomationEvent::Started {
            npc_index: 1,
            steps: 3,
        }));

        let event = automation.recv().await.expect("automation event");
        assert_eq!(event.topic(), Topic::Automation);
        assert!(refresh.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::with_capacity(0);
        bus.publish(Event::Automation(AutomationEvent::Started {
            npc_index: 0,
            steps: 0,
        }));
    }
}
