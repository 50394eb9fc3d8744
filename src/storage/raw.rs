//! Wire shape of creator rows as delivered by the data-fetch layer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{CreatorId, CreatorRecord, Platform, RatingEntry};

/// Creator identifier as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric primary key.
    Number(i64),
    /// Textual key.
    Text(String),
}

impl From<RawId> for CreatorId {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => Self::new(n.to_string()),
            RawId::Text(s) => Self::new(s),
        }
    }
}

/// A rating row joined onto a creator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRating {
    /// Overall score; absent counts as 0.
    #[serde(default)]
    pub overall: Option<f64>,
    /// Authenticity score.
    #[serde(default)]
    pub authenticity: Option<f64>,
    /// Professionalism score.
    #[serde(default)]
    pub professionalism: Option<f64>,
    /// Communication score.
    #[serde(default)]
    pub communication: Option<f64>,
    /// Review text.
    #[serde(default)]
    pub content: Option<String>,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Author of the rating.
    #[serde(default, rename = "user_id_comment")]
    pub author_ref: Option<String>,
}

impl From<RawRating> for RatingEntry {
    fn from(raw: RawRating) -> Self {
        Self {
            overall: raw.overall.unwrap_or(0.0),
            authenticity: raw.authenticity,
            professionalism: raw.professionalism,
            communication: raw.communication,
            content: raw.content.unwrap_or_default(),
            created_at: raw.created_at,
            author_ref: raw.author_ref,
        }
    }
}

/// A creator row with every field but `id` optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreator {
    /// Primary key.
    pub id: RawId,
    /// Display name.
    #[serde(default)]
    pub fullname: Option<String>,
    /// Platform handle.
    #[serde(default)]
    pub username: Option<String>,
    /// Platform name, any case.
    #[serde(default)]
    pub platform: Option<String>,
    /// Biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Follower count.
    #[serde(default)]
    pub followers: Option<i64>,
    /// Profile picture URL.
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Banner image URL.
    #[serde(default)]
    pub banner_pic: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Joined rating rows.
    #[serde(default)]
    pub ratings: Option<Vec<RawRating>>,
}

impl RawCreator {
    /// Converts the row into a record, deriving its average rating.
    ///
    /// Unknown platforms become `None`; negative follower counts become 0.
    /// The raw platform string is not kept, so free-text search never
    /// matches an unrecognised platform name.
    #[must_use]
    pub fn into_record(self) -> CreatorRecord {
        let id = CreatorId::from(self.id);
        let platform = self.platform.as_deref().and_then(|value| {
            let parsed = Platform::parse(value);
            if parsed.is_none() && !value.trim().is_empty() {
                tracing::warn!(creator_id = %id, platform = value, "unknown platform");
            }
            parsed
        });

        let mut record = CreatorRecord::new(id).with_rating_entries(
            self.ratings
                .unwrap_or_default()
                .into_iter()
                .map(RatingEntry::from)
                .collect(),
        );
        record.fullname = self.fullname;
        record.username = self.username;
        record.platform = platform;
        record.bio = self.bio;
        record.followers = self
            .followers
            .map_or(0, |count| u64::try_from(count).unwrap_or(0));
        record.profile_pic = self.profile_pic;
        record.banner_pic = self.banner_pic;
        record.tags = self.tags.unwrap_or_default();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row() {
        let raw: RawCreator = serde_json::from_str(
            r##"{
                "id": 7,
                "fullname": "Ana Souza",
                "username": "anaskin",
                "platform": "Instagram",
                "bio": "Skincare",
                "followers": 15300,
                "profilePic": "https://cdn.example.com/a.png",
                "tags": ["#Skincare"],
                "ratings": [{"overall": 4}, {"overall": 5}],
                "user_id": "owner-1"
            }"##,
        )
        .expect("valid row");
        let record = raw.into_record();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.platform, Some(Platform::Instagram));
        assert_eq!(record.followers, 15_300);
        assert_eq!(record.derived_average_rating(), Some(4.5));
        assert_eq!(record.tags, vec!["#Skincare"]);
    }

    #[test]
    fn test_missing_overall_counts_as_zero() {
        let raw: RawCreator =
            serde_json::from_str(r#"{"id": "x", "ratings": [{"overall": 4}, {}]}"#)
                .expect("valid row");
        assert_eq!(raw.into_record().derived_average_rating(), Some(2.0));
    }

    #[test]
    fn test_sparse_row_defaults() {
        let raw: RawCreator = serde_json::from_str(
            r#"{"id": "x", "platform": "myspace", "followers": -3, "tags": null, "ratings": null}"#,
        )
        .expect("valid row");
        let record = raw.into_record();
        assert_eq!(record.platform, None);
        assert_eq!(record.followers, 0);
        assert!(record.tags.is_empty());
        assert_eq!(record.derived_average_rating(), None);
        assert!(!record.has_display_name());
    }

    #[test]
    fn test_id_is_required() {
        assert!(serde_json::from_str::<RawCreator>(r#"{"fullname": "Ana"}"#).is_err());
    }
}
