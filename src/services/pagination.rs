//! Page-by-page reveal of a filtered set.
//!
//! The controller is a two-phase state machine (`Idle`, `LoadingMore`).
//! Running out of pages is not a separate phase; it is `has_more == false`.
//!
//! Loads are two-step so a settling delay can sit between them:
//! [`PaginationController::begin_load_more`] hands out a [`LoadTicket`]
//! stamped with the current generation, and
//! [`PaginationController::complete_load_more`] applies it. Every reset bumps
//! the generation, so a ticket issued before a reset can never append pages
//! of a superseded filtered set.

use serde::Serialize;
use std::ops::Range;

/// Number of records revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Phase of the pagination state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PaginationPhase {
    /// No load in flight.
    #[default]
    Idle,
    /// A page is settling.
    LoadingMore,
}

/// Snapshot of pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Records per page.
    pub page_size: usize,
    /// Pages revealed so far.
    pub pages_loaded: usize,
    /// Whether more pages remain.
    pub has_more: bool,
    /// Whether a page is settling.
    pub is_loading_more: bool,
}

/// Proof that a load was started against a specific generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// Returns the generation this ticket was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of completing a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The next page was appended; `range` indexes into the filtered set.
    Appended {
        /// Positions of the newly visible records.
        range: Range<usize>,
    },
    /// The ticket predates the latest reset and was discarded.
    Stale,
    /// No load was pending for this generation.
    NotPending,
}

/// Windows a filtered set into pages.
#[derive(Debug, Clone)]
pub struct PaginationController {
    page_size: usize,
    generation: u64,
    filtered_count: usize,
    pages_loaded: usize,
    has_more: bool,
    is_loading_more: bool,
}

impl PaginationController {
    /// Creates a controller with nothing loaded.
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            generation: 0,
            filtered_count: 0,
            pages_loaded: 0,
            has_more: false,
            is_loading_more: false,
        }
    }

    /// Starts over on a new filtered set of `filtered_count` records.
    ///
    /// Shows the first page, drops every previously revealed page and
    /// invalidates outstanding tickets.
    pub fn reset(&mut self, filtered_count: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.filtered_count = filtered_count;
        self.pages_loaded = 1;
        self.has_more = filtered_count > self.page_size;
        self.is_loading_more = false;
    }

    /// Starts loading the next page.
    ///
    /// Returns `None` while a load is already settling or when no pages
    /// remain, so duplicate triggers are harmless.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.is_loading_more || !self.has_more {
            return None;
        }
        self.is_loading_more = true;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a settled load.
    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> LoadOutcome {
        if ticket.generation != self.generation {
            return LoadOutcome::Stale;
        }
        if !self.is_loading_more {
            return LoadOutcome::NotPending;
        }
        let start = (self.pages_loaded * self.page_size).min(self.filtered_count);
        let end = (start + self.page_size).min(self.filtered_count);
        self.pages_loaded += 1;
        self.has_more = self.pages_loaded * self.page_size < self.filtered_count;
        self.is_loading_more = false;
        LoadOutcome::Appended { range: start..end }
    }

    /// Abandons any settling load without revealing a page.
    ///
    /// Used on teardown; outstanding tickets become stale.
    pub fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.is_loading_more = false;
    }

    /// Returns the number of records currently revealed.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        (self.pages_loaded * self.page_size).min(self.filtered_count)
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> PaginationPhase {
        if self.is_loading_more {
            PaginationPhase::LoadingMore
        } else {
            PaginationPhase::Idle
        }
    }

    /// Returns a snapshot of the pagination state.
    #[must_use]
    pub const fn state(&self) -> PaginationState {
        PaginationState {
            page_size: self.page_size,
            pages_loaded: self.pages_loaded,
            has_more: self.has_more,
            is_loading_more: self.is_loading_more,
        }
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
