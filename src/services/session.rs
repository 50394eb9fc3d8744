//! Async driver for a discovery session.
//!
//! Wraps a [`DiscoveryCoordinator`] with the two suspension points of a
//! session: fetching the base collection and the settling delay before a
//! page is appended. Criteria changes take the same lock as completing
//! loads, and every reset bumps the pagination generation, so a settling
//! load that loses the race is discarded rather than appended.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinSet;

use crate::Result;
use crate::config::DiscoveryConfig;
use crate::models::{DiscoveryEvent, FilterCriteria};
use crate::services::discovery::{DiscoveryCoordinator, DiscoveryView};
use crate::services::pagination::LoadOutcome;
use crate::storage::CreatorSource;

/// Scroll geometry reported by the presentation layer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Total height of the document.
    pub document_height: f64,
}

impl ScrollPosition {
    /// Returns true when the bottom of the viewport is within `threshold`
    /// pixels of the end of the document.
    #[must_use]
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_top >= self.document_height - threshold
    }
}

/// One discovery page backed by a [`CreatorSource`].
///
/// Dropping the session aborts any settling load.
pub struct DiscoverySession<S> {
    coordinator: Arc<Mutex<DiscoveryCoordinator>>,
    source: S,
    settle_interval: Duration,
    scroll_threshold_px: f64,
    pending: JoinSet<LoadOutcome>,
    closed: bool,
}

impl<S: CreatorSource> DiscoverySession<S> {
    /// Creates a session over an empty collection; call [`Self::refresh`]
    /// to load it.
    #[must_use]
    pub fn new(config: &DiscoveryConfig, source: S) -> Self {
        Self {
            coordinator: Arc::new(Mutex::new(DiscoveryCoordinator::new(config))),
            source,
            settle_interval: config.settle_interval,
            scroll_threshold_px: config.scroll_threshold_px,
            pending: JoinSet::new(),
            closed: false,
        }
    }

    /// Fetches the base collection and replaces the current one.
    ///
    /// No retry is attempted. On failure the session keeps working on an
    /// empty collection and reports the error in its status.
    ///
    /// # Errors
    ///
    /// Returns the source's error.
    pub async fn refresh(&self) -> Result<usize> {
        self.coordinator.lock().await.begin_fetch();
        let outcome = self.source.fetch_creators().await;
        self.coordinator.lock().await.finish_fetch(outcome)
    }

    /// Replaces the criteria; see [`DiscoveryCoordinator::set_criteria`].
    pub async fn set_criteria(&self, criteria: FilterCriteria) -> bool {
        self.coordinator.lock().await.set_criteria(criteria)
    }

    /// Runs `f` against the coordinator under the session lock.
    pub async fn update<R>(&self, f: impl FnOnce(&mut DiscoveryCoordinator) -> R) -> R {
        f(&mut *self.coordinator.lock().await)
    }

    /// Takes a rendering snapshot.
    pub async fn view(&self) -> DiscoveryView {
        self.coordinator.lock().await.view()
    }

    /// Subscribes to discovery events.
    pub async fn subscribe(&self) -> broadcast::Receiver<DiscoveryEvent> {
        self.coordinator.lock().await.subscribe()
    }

    /// Starts loading the next page after the settling delay.
    ///
    /// Returns false when a load is already settling, no pages remain or the
    /// session has been shut down.
    pub async fn request_more(&mut self) -> bool {
        if self.closed {
            return false;
        }
        let Some(ticket) = self.coordinator.lock().await.begin_load_more() else {
            return false;
        };
        let coordinator = Arc::clone(&self.coordinator);
        let delay = self.settle_interval;
        self.pending.spawn(async move {
            tokio::time::sleep(delay).await;
            coordinator.lock().await.complete_load_more(ticket)
        });
        true
    }

    /// Handles a scroll signal, loading more when near the bottom.
    pub async fn on_scroll(&mut self, position: ScrollPosition) -> bool {
        position.is_near_bottom(self.scroll_threshold_px) && self.request_more().await
    }

    /// Waits for every settling load and returns their outcomes.
    pub async fn settle(&mut self) -> Vec<LoadOutcome> {
        let mut outcomes = Vec::new();
        while let Some(joined) = self.pending.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => tracing::warn!(error = %err, "settling load did not finish"),
            }
        }
        outcomes
    }

    /// Tears the session down: stops reacting to scroll and load-more
    /// requests, aborts settling loads and invalidates their tickets.
    pub async fn shutdown(&mut self) {
        self.closed = true;
        self.pending.abort_all();
        self.coordinator.lock().await.invalidate_pending();
        while self.pending.join_next().await.is_some() {}
        tracing::debug!("discovery session shut down");
    }
}
