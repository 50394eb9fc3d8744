//! Drafts supplied by data-entry forms and their validated forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Platform, RatingEntry};

/// Unvalidated creator submission, as typed into the add-creator form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatorDraft {
    /// Display name.
    pub fullname: String,
    /// Handle on the platform.
    pub username: String,
    /// Platform name as selected.
    pub platform: String,
    /// Biography.
    pub bio: String,
    /// Follower count; `None` when left blank.
    pub followers: Option<i64>,
    /// Profile picture URL; empty when omitted.
    pub profile_pic: String,
    /// Banner image URL; empty when omitted.
    pub banner_pic: String,
    /// Selected tags.
    pub tags: Vec<String>,
}

/// Sanitized creator ready to hand to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreator {
    /// Display name.
    pub fullname: String,
    /// Handle on the platform.
    pub username: String,
    /// Platform.
    pub platform: Platform,
    /// Biography.
    pub bio: String,
    /// Follower count.
    pub followers: u64,
    /// Profile picture URL.
    pub profile_pic: Option<String>,
    /// Banner image URL.
    pub banner_pic: Option<String>,
    /// Tags, sanitized but not restricted to the filter vocabulary.
    pub tags: Vec<String>,
}

/// Unvalidated review submission.
///
/// Category scores are star counts; `0` means the category was not rated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewDraft {
    /// Authenticity stars.
    pub authenticity: u8,
    /// Professionalism stars.
    pub professionalism: u8,
    /// Communication stars.
    pub communication: u8,
    /// Review text.
    pub content: String,
}

/// Sanitized review with its overall score fixed at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRating {
    /// Authenticity stars (1-5).
    pub authenticity: u8,
    /// Professionalism stars (1-5).
    pub professionalism: u8,
    /// Communication stars (1-5).
    pub communication: u8,
    /// Mean of the three category scores.
    pub overall: f64,
    /// Sanitized review text.
    pub content: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

impl NewRating {
    /// Converts the submission into an immutable rating entry.
    #[must_use]
    pub fn into_entry(self, author_ref: Option<String>) -> RatingEntry {
        RatingEntry {
            overall: self.overall,
            authenticity: Some(f64::from(self.authenticity)),
            professionalism: Some(f64::from(self.professionalism)),
            communication: Some(f64::from(self.communication)),
            content: self.content,
            created_at: Some(self.created_at),
            author_ref,
        }
    }
}
