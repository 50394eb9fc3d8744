//! JSON file creator source.
//!
//! The file holds a JSON array of [`RawCreator`] rows, the same shape the
//! listing query returns.

use std::path::{Path, PathBuf};

use super::{CreatorSource, RawCreator};
use crate::models::CreatorRecord;
use crate::{Error, Result};

/// Maximum accepted file size (16MB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Reads the creator collection from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<CreatorRecord>> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| Error::Fetch(format!("{}: {e}", self.path.display())))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::Fetch(format!(
                "{}: file exceeds {MAX_FILE_SIZE} bytes",
                self.path.display()
            )));
        }

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Fetch(format!("{}: {e}", self.path.display())))?;
        let rows: Vec<RawCreator> = serde_json::from_str(&json)
            .map_err(|e| Error::Fetch(format!("{}: {e}", self.path.display())))?;

        Ok(rows.into_iter().map(RawCreator::into_record).collect())
    }
}

impl CreatorSource for JsonFileSource {
    async fn fetch_creators(&self) -> Result<Vec<CreatorRecord>> {
        let records = self.load().await?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded creators");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_rows_in_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("creators.json");
        std::fs::write(
            &path,
            r#"[{"id": 2, "fullname": "Marco"}, {"id": 1, "username": "ana"}]"#,
        )
        .expect("write fixture");

        let records = JsonFileSource::new(&path)
            .fetch_creators()
            .await
            .expect("fetch");
        let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = JsonFileSource::new(dir.path().join("absent.json"))
            .fetch_creators()
            .await
            .expect_err("missing file");
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_fetch_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("creators.json");
        std::fs::write(&path, "{not json").expect("write fixture");
        let err = JsonFileSource::new(&path)
            .fetch_creators()
            .await
            .expect_err("malformed file");
        assert!(matches!(err, Error::Fetch(_)));
    }
}
