//! Filter criteria and their human-readable descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Platform;
use crate::validation::sanitize;

/// Tags offered by the filter bar, without the leading `#`.
pub const TAG_VOCABULARY: &[&str] = &[
    "Beauty",
    "Lifestyle",
    "HonestReviews",
    "Skincare",
    "Food",
    "Travel",
    "Tech",
    "Education",
    "Gaming",
    "Entertainment",
    "Fitness",
];

/// Platform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlatformFilter {
    /// Any platform.
    #[default]
    All,
    /// Instagram only.
    Instagram,
    /// YouTube only.
    YouTube,
    /// TikTok only.
    TikTok,
}

impl PlatformFilter {
    /// Returns the selected platform, or `None` for `All`.
    #[must_use]
    pub const fn platform(&self) -> Option<Platform> {
        match self {
            Self::All => None,
            Self::Instagram => Some(Platform::Instagram),
            Self::YouTube => Some(Platform::YouTube),
            Self::TikTok => Some(Platform::TikTok),
        }
    }

    /// Returns the label shown in the platform selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.platform() {
            None => "All Platforms",
            Some(platform) => platform.label(),
        }
    }

    /// Parses a selector label or platform name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "all" || lower == "all platforms" {
            return Some(Self::All);
        }
        Platform::parse(&lower).map(Self::from)
    }
}

impl From<Platform> for PlatformFilter {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Instagram => Self::Instagram,
            Platform::YouTube => Self::YouTube,
            Platform::TikTok => Self::TikTok,
        }
    }
}

/// Minimum average rating selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RatingBucket {
    /// Any rating, including unrated creators.
    #[default]
    All,
    /// Average of at least 4.5.
    FiveStars,
    /// Average of at least 3.5.
    FourAndUp,
    /// Average of at least 2.5.
    ThreeAndUp,
}

impl RatingBucket {
    /// Returns all buckets in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::FiveStars, Self::FourAndUp, Self::ThreeAndUp]
    }

    /// Returns the inclusive lower bound, or `None` for `All`.
    #[must_use]
    pub const fn threshold(&self) -> Option<f64> {
        match self {
            Self::All => None,
            Self::FiveStars => Some(4.5),
            Self::FourAndUp => Some(3.5),
            Self::ThreeAndUp => Some(2.5),
        }
    }

    /// Returns the label shown in the rating selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All Ratings",
            Self::FiveStars => "5 Stars",
            Self::FourAndUp => "4 Stars & up",
            Self::ThreeAndUp => "3 Stars & up",
        }
    }

    /// Parses a selector label.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Tag selection.
///
/// [`TagFilter::parse`] only yields `All` or a member of [`TAG_VOCABULARY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TagFilter {
    /// Any tag.
    #[default]
    All,
    /// A vocabulary tag, stored without the leading `#`.
    Tag(&'static str),
}

impl TagFilter {
    /// Parses `All` or a vocabulary tag, with or without a leading `#`.
    ///
    /// Returns `None` for tags outside the vocabulary.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let name = trimmed.strip_prefix('#').unwrap_or(trimmed);
        TAG_VOCABULARY
            .iter()
            .copied()
            .find(|tag| tag.eq_ignore_ascii_case(name))
            .map(Self::Tag)
    }

    /// Returns the lowercase needle compared against record tags.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Tag(name) => Some(name.to_lowercase()),
        }
    }

    /// Returns the label shown on the tag chip.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Tag(name) => format!("#{name}"),
        }
    }
}

/// Complete snapshot of the active search and filter selections.
///
/// A new value replaces the previous one wholesale; the builder methods return
/// a fresh value rather than editing in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterCriteria {
    /// Sanitized free-text query.
    pub text_query: String,
    /// Platform selection.
    pub platform: PlatformFilter,
    /// Rating bucket selection.
    pub rating_bucket: RatingBucket,
    /// Tag selection.
    pub tag: TagFilter,
}

impl FilterCriteria {
    /// Creates criteria that match every listable record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the "clear all" criteria.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Sets the query, sanitizing it first.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.text_query = sanitize(query);
        self
    }

    /// Sets the platform selection.
    #[must_use]
    pub const fn with_platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the rating bucket.
    #[must_use]
    pub const fn with_rating_bucket(mut self, bucket: RatingBucket) -> Self {
        self.rating_bucket = bucket;
        self
    }

    /// Sets the tag selection.
    #[must_use]
    pub fn with_tag(mut self, tag: TagFilter) -> Self {
        self.tag = tag;
        self
    }

    /// Returns true if every field is at its default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_query.is_empty()
            && self.platform == PlatformFilter::All
            && self.rating_bucket == RatingBucket::All
            && self.tag == TagFilter::All
    }

    /// Describes each non-default field, in display order.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.text_query.is_empty() {
            active.push(ActiveFilter::Search(self.text_query.clone()));
        }
        if let TagFilter::Tag(name) = self.tag {
            active.push(ActiveFilter::Tag(name));
        }
        if self.rating_bucket != RatingBucket::All {
            active.push(ActiveFilter::Rating(self.rating_bucket));
        }
        if self.platform != PlatformFilter::All {
            active.push(ActiveFilter::Platform(self.platform));
        }
        active
    }
}

/// A non-default criteria field, rendered as a filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActiveFilter {
    /// Free-text query.
    Search(String),
    /// Tag selection.
    Tag(&'static str),
    /// Rating bucket selection.
    Rating(RatingBucket),
    /// Platform selection.
    Platform(PlatformFilter),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(query) => write!(f, "Search: \"{query}\""),
            Self::Tag(name) => write!(f, "Tag: #{name}"),
            Self::Rating(bucket) => write!(f, "Rating: {}", bucket.label()),
            Self::Platform(platform) => write!(f, "Platform: {}", platform.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("All", Some(TagFilter::All); "all")]
    #[test_case("#Travel", Some(TagFilter::Tag("Travel")); "hash prefixed")]
    #[test_case("travel", Some(TagFilter::Tag("Travel")); "bare lowercase")]
    #[test_case("#HONESTREVIEWS", Some(TagFilter::Tag("HonestReviews")); "uppercase")]
    #[test_case("#Music", None; "outside vocabulary")]
    fn test_tag_filter_parse(input: &str, expected: Option<TagFilter>) {
        assert_eq!(TagFilter::parse(input), expected);
    }

    #[test]
    fn test_tag_filter_needle_strips_hash() {
        let tag = TagFilter::parse("#Travel");
        assert_eq!(tag.as_ref().and_then(TagFilter::needle), Some("travel".to_string()));
        assert_eq!(TagFilter::All.needle(), None);
    }

    #[test]
    fn test_rating_bucket_labels_roundtrip() {
        for bucket in RatingBucket::all() {
            assert_eq!(RatingBucket::parse(bucket.label()), Some(*bucket));
        }
        assert_eq!(RatingBucket::parse("6 Stars"), None);
    }

    #[test]
    fn test_platform_filter_parse() {
        assert_eq!(PlatformFilter::parse("All Platforms"), Some(PlatformFilter::All));
        assert_eq!(PlatformFilter::parse("YouTube"), Some(PlatformFilter::YouTube));
        assert_eq!(PlatformFilter::parse("vimeo"), None);
    }

    #[test]
    fn test_with_query_sanitizes() {
        let criteria = FilterCriteria::new().with_query("  <b>ana</b> ");
        assert_eq!(criteria.text_query, "ana");
    }

    #[test]
    fn test_active_filters_order_and_labels() {
        let criteria = FilterCriteria::new()
            .with_platform(PlatformFilter::TikTok)
            .with_rating_bucket(RatingBucket::FourAndUp)
            .with_tag(TagFilter::Tag("Food"))
            .with_query("chef");

        let labels: Vec<String> = criteria
            .active_filters()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Search: \"chef\"",
                "Tag: #Food",
                "Rating: 4 Stars & up",
                "Platform: TikTok",
            ]
        );
    }

    #[test]
    fn test_cleared_has_no_active_filters() {
        let criteria = FilterCriteria::cleared();
        assert!(criteria.is_empty());
        assert!(criteria.active_filters().is_empty());
    }
}
