//! Creator data sources.
//!
//! The discovery engine never talks to a database directly. It pulls the
//! whole base collection from a [`CreatorSource`] once per session and again
//! on explicit refresh.

mod file;
mod memory;
mod raw;

pub use file::JsonFileSource;
pub use memory::InMemorySource;
pub use raw::{RawCreator, RawId, RawRating};

use crate::Result;
use crate::models::CreatorRecord;
use std::future::Future;

/// Supplies the base creator collection.
///
/// Implementations return records with their derived averages already
/// computed, in the order they should be listed.
pub trait CreatorSource: Send + Sync {
    /// Fetches every creator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Fetch`] when the collection cannot be loaded.
    fn fetch_creators(&self) -> impl Future<Output = Result<Vec<CreatorRecord>>> + Send;
}
