//! Tokio broadcast event bus for discovery notifications.

use crate::models::DiscoveryEvent;
use tokio::sync::broadcast;

/// Broadcasts [`DiscoveryEvent`]s to any number of subscribers.
///
/// Publishing never blocks; slow subscribers observe `Lagged` and skip ahead.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DiscoveryEvent>,
}

/// Receiver that only yields events matching a predicate.
pub struct FilteredReceiver<F> {
    receiver: broadcast::Receiver<DiscoveryEvent>,
    predicate: F,
}

impl EventBus {
    /// Creates a new event bus with the given buffer capacity.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event to all subscribers (best effort).
    pub fn publish(&self, event: DiscoveryEvent) {
        metrics::counter!("discovery_events_total", "event_type" => event.event_type())
            .increment(1);
        if self.sender.send(event).is_err() {
            tracing::trace!("discovery event dropped: no subscribers");
        }
    }

    /// Subscribes to every event.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DiscoveryEvent> {
        self.sender.subscribe()
    }

    /// Subscribes with a predicate over events.
    #[must_use]
    pub fn subscribe_filtered<F>(&self, predicate: F) -> FilteredReceiver<F>
    where
        F: Fn(&DiscoveryEvent) -> bool,
    {
        FilteredReceiver {
            receiver: self.sender.subscribe(),
            predicate,
        }
    }

    /// Subscribes to events of one type, as named by
    /// [`DiscoveryEvent::event_type`].
    #[must_use]
    pub fn subscribe_event_type(
        &self,
        event_type: &'static str,
    ) -> FilteredReceiver<impl Fn(&DiscoveryEvent) -> bool> {
        self.subscribe_filtered(move |event| event.event_type() == event_type)
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<F> FilteredReceiver<F>
where
    F: Fn(&DiscoveryEvent) -> bool,
{
    /// Receives the next event that matches the predicate.
    ///
    /// # Errors
    ///
    /// Returns `Closed` once every sender is gone.
    pub async fn recv(&mut self) -> Result<DiscoveryEvent, broadcast::error::RecvError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if (self.predicate)(&event) => return Ok(event),
                Ok(_) => {},
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    metrics::counter!("discovery_events_lagged_total").increment(skipped);
                },
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_filtered_skips_non_matching() {
        let bus = EventBus::new(16);
        let mut filtered = bus.subscribe_event_type("page_appended");

        bus.publish(DiscoveryEvent::Recomputed {
            generation: 1,
            total: 30,
            visible: 12,
        });
        bus.publish(DiscoveryEvent::PageAppended {
            generation: 1,
            pages_loaded: 2,
            visible: 24,
            has_more: true,
        });

        let event = filtered.recv().await.expect("receive event");
        assert_eq!(event.event_type(), "page_appended");
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let bus = EventBus::new(0);
        bus.publish(DiscoveryEvent::FetchCompleted { records: 3 });
        assert_eq!(bus.receiver_count(), 0);
    }
}
