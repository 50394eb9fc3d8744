//! Discovery coordinator.
//!
//! Owns the live [`FilterCriteria`], the filtered set and the
//! [`PaginationController`] for one discovery session. Every change to the
//! criteria or to the base collection runs a full filter pass, resets
//! pagination and publishes [`DiscoveryEvent::Recomputed`].
//!
//! The coordinator is synchronous. The settling delay and the data fetch are
//! driven from outside, either by [`crate::services::DiscoverySession`] or by
//! a caller that owns its own event loop.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::instrument;

use crate::config::DiscoveryConfig;
use crate::models::{
    ActiveFilter, CreatorRecord, DiscoveryEvent, DiscoveryStatus, FilterCriteria, PlatformFilter,
    RatingBucket, TagFilter,
};
use crate::observability::EventBus;
use crate::services::filter::filter_indices;
use crate::services::pagination::{LoadOutcome, LoadTicket, PaginationController, PaginationState};
use crate::validation::{ValidationError, validate_search_query};
use crate::{Error, Result};

/// Everything the rendering layer needs to draw the discovery page.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryView {
    /// Visible records in filtered order.
    pub visible: Vec<CreatorRecord>,
    /// Records matching the criteria before pagination.
    pub total_count: usize,
    /// Chips for each non-default criteria field.
    pub active_filters: Vec<ActiveFilter>,
    /// Current status.
    pub status: DiscoveryStatus,
    /// Inline warning for the live search text.
    pub search_warning: Option<ValidationError>,
    /// Whether more pages remain.
    pub has_more: bool,
}

/// Sole owner of criteria and pagination state.
#[derive(Debug)]
pub struct DiscoveryCoordinator {
    records: Vec<CreatorRecord>,
    criteria: FilterCriteria,
    filtered: Vec<usize>,
    pagination: PaginationController,
    search_warning: Option<ValidationError>,
    fetching: bool,
    fetch_error: Option<Arc<str>>,
    events: EventBus,
}

impl DiscoveryCoordinator {
    /// Creates a coordinator over an empty collection.
    #[must_use]
    pub fn new(config: &DiscoveryConfig) -> Self {
        let mut coordinator = Self {
            records: Vec::new(),
            criteria: FilterCriteria::new(),
            filtered: Vec::new(),
            pagination: PaginationController::new(config.page_size),
            search_warning: None,
            fetching: false,
            fetch_error: None,
            events: EventBus::new(config.event_capacity),
        };
        coordinator.recompute();
        coordinator
    }

    /// Creates a coordinator over `records`.
    #[must_use]
    pub fn with_records(config: &DiscoveryConfig, records: Vec<CreatorRecord>) -> Self {
        let mut coordinator = Self::new(config);
        coordinator.replace_records(records);
        coordinator
    }

    /// Returns the live criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the base collection.
    #[must_use]
    pub fn records(&self) -> &[CreatorRecord] {
        &self.records
    }

    /// Replaces the criteria wholesale.
    ///
    /// Returns false, and leaves pagination untouched, when `criteria` equals
    /// the live value. A changed query replaces the search warning.
    #[instrument(skip(self, criteria), fields(operation = "set_criteria"))]
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if criteria == self.criteria {
            return false;
        }
        if criteria.text_query != self.criteria.text_query {
            self.search_warning = validate_search_query(&criteria.text_query);
        }
        self.criteria = criteria;
        self.recompute();
        true
    }

    /// Applies raw search text.
    ///
    /// The warning from [`validate_search_query`] is kept for display but
    /// never blocks filtering; the sanitized text becomes the query.
    pub fn set_query(&mut self, raw: &str) -> bool {
        let criteria = self.criteria.clone().with_query(raw);
        let changed = self.set_criteria(criteria);
        self.search_warning = validate_search_query(raw);
        changed
    }

    /// Selects a platform.
    pub fn set_platform(&mut self, platform: PlatformFilter) -> bool {
        let criteria = self.criteria.clone().with_platform(platform);
        self.set_criteria(criteria)
    }

    /// Selects a rating bucket.
    pub fn set_rating_bucket(&mut self, bucket: RatingBucket) -> bool {
        let criteria = self.criteria.clone().with_rating_bucket(bucket);
        self.set_criteria(criteria)
    }

    /// Selects a tag.
    pub fn set_tag(&mut self, tag: TagFilter) -> bool {
        let criteria = self.criteria.clone().with_tag(tag);
        self.set_criteria(criteria)
    }

    /// Selects a tag by name, as clicked on a tag chip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a name outside the tag vocabulary;
    /// the criteria are left unchanged.
    pub fn select_tag(&mut self, name: &str) -> Result<bool> {
        let tag = TagFilter::parse(name)
            .ok_or_else(|| Error::InvalidInput(format!("unknown tag: {name}")))?;
        Ok(self.set_tag(tag))
    }

    /// Resets every criteria field.
    pub fn clear_filters(&mut self) -> bool {
        let changed = self.set_criteria(FilterCriteria::cleared());
        self.search_warning = None;
        changed
    }

    /// Marks a fetch of the base collection as in flight.
    pub fn begin_fetch(&mut self) {
        self.fetching = true;
    }

    /// Applies the outcome of a fetch.
    ///
    /// On success the collection is replaced and the previous error cleared.
    /// On failure the engine continues on an empty collection and the error
    /// is reported through [`Self::status`] until the next successful fetch.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after it has been applied.
    #[instrument(skip(self, outcome), fields(operation = "finish_fetch"))]
    pub fn finish_fetch(&mut self, outcome: Result<Vec<CreatorRecord>>) -> Result<usize> {
        self.fetching = false;
        match outcome {
            Ok(records) => {
                let count = records.len();
                self.fetch_error = None;
                self.replace_records(records);
                tracing::info!(records = count, "creator collection loaded");
                self.events
                    .publish(DiscoveryEvent::FetchCompleted { records: count });
                Ok(count)
            },
            Err(err) => {
                let message: Arc<str> = Arc::from(fetch_message(&err));
                tracing::warn!(error = %err, "creator collection fetch failed");
                metrics::counter!("discovery_fetch_failed_total").increment(1);
                self.fetch_error = Some(Arc::clone(&message));
                self.replace_records(Vec::new());
                self.events.publish(DiscoveryEvent::FetchFailed { message });
                Err(err)
            },
        }
    }

    /// Replaces the base collection and recomputes.
    pub fn replace_records(&mut self, records: Vec<CreatorRecord>) {
        self.records = records;
        self.recompute();
    }

    /// Starts a page load, if one is possible.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        let ticket = self.pagination.begin_load_more()?;
        tracing::debug!(generation = ticket.generation(), "load more started");
        Some(ticket)
    }

    /// Completes a page load started with [`Self::begin_load_more`].
    #[instrument(skip(self), fields(operation = "complete_load_more"))]
    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> LoadOutcome {
        let outcome = self.pagination.complete_load_more(ticket);
        match &outcome {
            LoadOutcome::Appended { range } => {
                metrics::counter!("discovery_load_more_total").increment(1);
                let state = self.pagination.state();
                tracing::debug!(
                    appended = range.len(),
                    pages_loaded = state.pages_loaded,
                    has_more = state.has_more,
                    "page appended"
                );
                self.events.publish(DiscoveryEvent::PageAppended {
                    generation: ticket.generation(),
                    pages_loaded: state.pages_loaded,
                    visible: self.pagination.visible_len(),
                    has_more: state.has_more,
                });
            },
            LoadOutcome::Stale => {
                metrics::counter!("discovery_load_more_stale_total").increment(1);
                tracing::debug!(
                    ticket_generation = ticket.generation(),
                    current_generation = self.pagination.generation(),
                    "stale load discarded"
                );
                self.events.publish(DiscoveryEvent::StaleLoadDiscarded {
                    ticket_generation: ticket.generation(),
                    current_generation: self.pagination.generation(),
                });
            },
            LoadOutcome::NotPending => {},
        }
        outcome
    }

    /// Renders every outstanding load ticket inert.
    pub fn invalidate_pending(&mut self) {
        self.pagination.invalidate_pending();
    }

    /// Returns the visible records in filtered order.
    #[must_use]
    pub fn visible(&self) -> Vec<&CreatorRecord> {
        self.filtered[..self.pagination.visible_len()]
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Returns the number of records matching the criteria.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }

    /// Returns the warning for the live search text, if any.
    #[must_use]
    pub const fn search_warning(&self) -> Option<&ValidationError> {
        self.search_warning.as_ref()
    }

    /// Derives the status reported to the rendering layer.
    #[must_use]
    pub fn status(&self) -> DiscoveryStatus {
        let state = self.pagination.state();
        if self.fetching {
            DiscoveryStatus::Loading
        } else if let Some(message) = &self.fetch_error {
            DiscoveryStatus::Error(message.to_string())
        } else if state.is_loading_more {
            DiscoveryStatus::LoadingMore
        } else if !state.has_more && !self.filtered.is_empty() {
            DiscoveryStatus::Exhausted
        } else {
            DiscoveryStatus::Idle
        }
    }

    /// Takes an owned snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> DiscoveryView {
        DiscoveryView {
            visible: self.visible().into_iter().cloned().collect(),
            total_count: self.total_count(),
            active_filters: self.criteria.active_filters(),
            status: self.status(),
            search_warning: self.search_warning.clone(),
            has_more: self.pagination.state().has_more,
        }
    }

    /// Returns the pagination snapshot.
    #[must_use]
    pub const fn pagination_state(&self) -> PaginationState {
        self.pagination.state()
    }

    /// Returns the current pagination generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.pagination.generation()
    }

    /// Returns the event bus.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribes to discovery events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DiscoveryEvent> {
        self.events.subscribe()
    }

    fn recompute(&mut self) {
        self.filtered = filter_indices(&self.records, &self.criteria);
        self.pagination.reset(self.filtered.len());
        metrics::counter!("discovery_filter_total").increment(1);

        let visible = self.pagination.visible_len();
        tracing::debug!(
            records = self.records.len(),
            matched = self.filtered.len(),
            visible,
            "filtered set recomputed"
        );
        self.events.publish(DiscoveryEvent::Recomputed {
            generation: self.pagination.generation(),
            total: self.filtered.len(),
            visible,
        });
    }
}

fn fetch_message(err: &Error) -> String {
    match err {
        Error::Fetch(message) => format!("Failed to load creators: {message}"),
        other => format!("Failed to load creators: {other}"),
    }
}
