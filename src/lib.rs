//! # Creatorscope
//!
//! Discovery and aggregation engine for a community-driven creator rating
//! directory.
//!
//! Creatorscope turns a collection of creator records into the search and
//! browse page of a rating directory: it derives average ratings, filters by
//! free text, platform, rating bucket and tag, and reveals the result a page
//! at a time as the reader scrolls.
//!
//! ## Features
//!
//! - Pure, order-preserving filtering with no hidden caches
//! - Page windowing whose in-flight loads are invalidated by any reset
//! - Input sanitization and field-level validation for data-entry forms
//! - Broadcast events and `tracing` spans for every recompute
//!
//! ## Example
//!
//! ```rust
//! use creatorscope::config::DiscoveryConfig;
//! use creatorscope::models::{CreatorRecord, PlatformFilter, RatingEntry};
//! use creatorscope::services::DiscoveryCoordinator;
//!
//! let records = vec![
//!     CreatorRecord::new("1")
//!         .with_fullname("Ana Souza")
//!         .with_platform(creatorscope::models::Platform::Instagram)
//!         .with_rating_entries(vec![RatingEntry::with_overall(5.0)]),
//!     CreatorRecord::new("2").with_fullname("Marco Ruiz"),
//! ];
//! let mut coordinator = DiscoveryCoordinator::with_records(&DiscoveryConfig::default(), records);
//! coordinator.set_platform(PlatformFilter::Instagram);
//!
//! let view = coordinator.view();
//! assert_eq!(view.total_count, 1);
//! assert_eq!(view.visible[0].derived_average_rating(), Some(5.0));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;
pub mod storage;
pub mod validation;

pub use config::DiscoveryConfig;
pub use models::{
    CreatorId, CreatorRecord, DiscoveryEvent, DiscoveryStatus, FilterCriteria, Platform,
    PlatformFilter, RatingBucket, RatingEntry, TagFilter,
};
pub use services::{
    DiscoveryCoordinator, DiscoverySession, DiscoveryView, LoadOutcome, PaginationController,
};
pub use storage::{CreatorSource, InMemorySource, JsonFileSource};
pub use validation::{FieldErrors, ValidationError};

/// Error type for creatorscope operations.
///
/// Field-level input problems are [`ValidationError`]s and never appear here.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | A criteria value outside its allowed set, such as an unknown tag |
/// | `OperationFailed` | Config file I/O, logging init, poisoned locks |
/// | `Fetch` | The base creator collection cannot be loaded |
/// | `Config` | Config values that parse but cannot be used |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The creator collection could not be fetched.
    ///
    /// Surfaced once as a banner; the engine keeps running on an empty
    /// collection and does not retry.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for creatorscope operations.
pub type Result<T> = std::result::Result<T, Error>;
