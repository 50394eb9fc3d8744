//! In-memory creator source.

use std::sync::{Arc, RwLock};

use super::CreatorSource;
use crate::models::CreatorRecord;
use crate::{Error, Result};

/// Serves a fixed collection that can be swapped between fetches.
///
/// Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Arc<RwLock<Vec<CreatorRecord>>>,
}

impl InMemorySource {
    /// Creates a source serving `records`.
    #[must_use]
    pub fn new(records: Vec<CreatorRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Replaces the collection returned by subsequent fetches.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn replace(&self, records: Vec<CreatorRecord>) -> Result<()> {
        let mut guard = self.records.write().map_err(|e| Error::OperationFailed {
            operation: "replace_records".to_string(),
            cause: e.to_string(),
        })?;
        *guard = records;
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<CreatorRecord>> {
        self.records
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| Error::Fetch(e.to_string()))
    }
}

impl CreatorSource for InMemorySource {
    async fn fetch_creators(&self) -> Result<Vec<CreatorRecord>> {
        self.snapshot()
    }
}
