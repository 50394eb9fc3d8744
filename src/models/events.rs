//! Discovery events published to subscribers.

use std::sync::Arc;

/// Events emitted while the discovery view changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// The filtered set was recomputed and pagination reset.
    Recomputed {
        /// Pagination generation after the reset.
        generation: u64,
        /// Number of records matching the criteria.
        total: usize,
        /// Number of records now visible.
        visible: usize,
    },
    /// A settled page was appended to the visible window.
    PageAppended {
        /// Pagination generation the page belongs to.
        generation: u64,
        /// Pages loaded after the append.
        pages_loaded: usize,
        /// Number of records now visible.
        visible: usize,
        /// Whether further pages remain.
        has_more: bool,
    },
    /// A settled page belonged to a superseded filtered set and was dropped.
    StaleLoadDiscarded {
        /// Generation captured when the load started.
        ticket_generation: u64,
        /// Generation at completion time.
        current_generation: u64,
    },
    /// The base collection was fetched.
    FetchCompleted {
        /// Number of records received.
        records: usize,
    },
    /// The base collection could not be fetched.
    FetchFailed {
        /// Banner message for the user.
        message: Arc<str>,
    },
}

impl DiscoveryEvent {
    /// Returns the event type as a string slice.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Recomputed { .. } => "recomputed",
            Self::PageAppended { .. } => "page_appended",
            Self::StaleLoadDiscarded { .. } => "stale_load_discarded",
            Self::FetchCompleted { .. } => "fetch_completed",
            Self::FetchFailed { .. } => "fetch_failed",
        }
    }
}
