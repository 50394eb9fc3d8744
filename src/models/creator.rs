//! Creator records and their rating entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::aggregation::compute_average;

/// Unique identifier for a creator record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatorId(String);

impl CreatorId {
    /// Creates a new creator ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CreatorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CreatorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Social platforms a creator can publish on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Instagram.
    Instagram,
    /// YouTube.
    YouTube,
    /// TikTok.
    TikTok,
}

impl Platform {
    /// Returns all platform variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Instagram, Self::YouTube, Self::TikTok]
    }

    /// Returns the stored (lowercase) form of the platform.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
        }
    }

    /// Returns the human-readable label of the platform.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
        }
    }

    /// Parses a platform name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Some(Self::Instagram),
            "youtube" => Some(Self::YouTube),
            "tiktok" => Some(Self::TikTok),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single user-submitted rating of a creator.
///
/// Entries are immutable once created. The per-category scores are optional
/// because the listing query only selects `overall`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingEntry {
    /// Overall score in `[0, 5]`.
    pub overall: f64,
    /// Authenticity score in `[0, 5]`.
    pub authenticity: Option<f64>,
    /// Professionalism score in `[0, 5]`.
    pub professionalism: Option<f64>,
    /// Communication score in `[0, 5]`.
    pub communication: Option<f64>,
    /// Sanitized review text.
    pub content: String,
    /// Submission time.
    pub created_at: Option<DateTime<Utc>>,
    /// Opaque reference to the author, owned by the auth layer.
    pub author_ref: Option<String>,
}

impl RatingEntry {
    /// Creates an entry carrying only an overall score.
    #[must_use]
    pub const fn with_overall(overall: f64) -> Self {
        Self {
            overall,
            authenticity: None,
            professionalism: None,
            communication: None,
            content: String::new(),
            created_at: None,
            author_ref: None,
        }
    }

    /// Sets the three category scores.
    #[must_use]
    pub const fn with_categories(
        mut self,
        authenticity: f64,
        professionalism: f64,
        communication: f64,
    ) -> Self {
        self.authenticity = Some(authenticity);
        self.professionalism = Some(professionalism);
        self.communication = Some(communication);
        self
    }

    /// Sets the review text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// One catalog entry representing a rated creator.
///
/// `derived_average_rating` is a projection of the rating entries. Both are
/// private so the average can only change together with the entries it is
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorRecord {
    /// Unique identifier.
    pub id: CreatorId,
    /// Display name.
    pub fullname: Option<String>,
    /// Handle on the creator's platform.
    pub username: Option<String>,
    /// Primary platform.
    pub platform: Option<Platform>,
    /// Short biography.
    pub bio: Option<String>,
    /// Follower count.
    pub followers: u64,
    /// Profile picture URL.
    pub profile_pic: Option<String>,
    /// Banner image URL.
    pub banner_pic: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    rating_entries: Vec<RatingEntry>,
    derived_average_rating: Option<f64>,
}

impl CreatorRecord {
    /// Creates a record with no ratings.
    #[must_use]
    pub fn new(id: impl Into<CreatorId>) -> Self {
        Self {
            id: id.into(),
            fullname: None,
            username: None,
            platform: None,
            bio: None,
            followers: 0,
            profile_pic: None,
            banner_pic: None,
            tags: Vec::new(),
            rating_entries: Vec::new(),
            derived_average_rating: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the biography.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Sets the follower count.
    #[must_use]
    pub const fn with_followers(mut self, followers: u64) -> Self {
        self.followers = followers;
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replaces the rating entries and recomputes the derived average.
    #[must_use]
    pub fn with_rating_entries(mut self, entries: Vec<RatingEntry>) -> Self {
        self.derived_average_rating = compute_average(&entries);
        self.rating_entries = entries;
        self
    }

    /// Returns the rating entries in submission order.
    #[must_use]
    pub fn rating_entries(&self) -> &[RatingEntry] {
        &self.rating_entries
    }

    /// Returns the mean overall rating, or `None` without ratings.
    #[must_use]
    pub const fn derived_average_rating(&self) -> Option<f64> {
        self.derived_average_rating
    }

    /// Returns true if the record has a non-empty full name or username.
    ///
    /// Records without either are never listed.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.fullname) || present(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse_ignores_case() {
        assert_eq!(Platform::parse("YouTube"), Some(Platform::YouTube));
        assert_eq!(Platform::parse(" tiktok "), Some(Platform::TikTok));
        assert_eq!(Platform::parse("INSTAGRAM"), Some(Platform::Instagram));
        assert_eq!(Platform::parse("myspace"), None);
    }

    #[test]
    fn test_platform_as_str_roundtrips() {
        for platform in Platform::all() {
            assert_eq!(Platform::parse(platform.as_str()), Some(*platform));
            assert_eq!(Platform::parse(platform.label()), Some(*platform));
        }
    }

    #[test]
    fn test_derived_average_tracks_entries() {
        let record = CreatorRecord::new("c1");
        assert_eq!(record.derived_average_rating(), None);

        let record = record.with_rating_entries(vec![
            RatingEntry::with_overall(4.0),
            RatingEntry::with_overall(5.0),
        ]);
        assert_eq!(record.derived_average_rating(), Some(4.5));
        assert_eq!(record.rating_entries().len(), 2);

        let record = record.with_rating_entries(Vec::new());
        assert_eq!(record.derived_average_rating(), None);
    }

    #[test]
    fn test_has_display_name() {
        assert!(!CreatorRecord::new("c1").has_display_name());
        assert!(!CreatorRecord::new("c1").with_fullname("").has_display_name());
        assert!(CreatorRecord::new("c1").with_username("ana").has_display_name());
        assert!(CreatorRecord::new("c1").with_fullname("Ana").has_display_name());
    }

    #[test]
    fn test_creator_id_display() {
        let id = CreatorId::from("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }
}
