//! Multi-criterion record filtering.
//!
//! A record is listed when it has a display name and every predicate holds:
//!
//! | Predicate | Passes when |
//! |-----------|-------------|
//! | search    | query empty, or a substring of fullname, username, bio or platform |
//! | platform  | `All`, or the record's platform equals the selection |
//! | rating    | `All`, or the derived average meets the bucket threshold |
//! | tag       | `All`, or any record tag contains the selected tag |
//!
//! All text comparisons are case-insensitive. Filtering is a full pass over
//! the collection with no caching between calls.

use crate::models::{CreatorRecord, FilterCriteria, PlatformFilter, RatingBucket, TagFilter};
use crate::validation::sanitize;

/// Returns true if `record` belongs to the filtered set for `criteria`.
#[must_use]
pub fn matches(record: &CreatorRecord, criteria: &FilterCriteria) -> bool {
    record.has_display_name()
        && matches_search(record, &criteria.text_query)
        && matches_platform(record, criteria.platform)
        && matches_rating(record, criteria.rating_bucket)
        && matches_tag(record, &criteria.tag)
}

/// Returns the matching records in their original order.
#[must_use]
pub fn filter<'a>(
    records: &'a [CreatorRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CreatorRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Returns the positions of the matching records, in ascending order.
#[must_use]
pub fn filter_indices(records: &[CreatorRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, criteria))
        .map(|(index, _)| index)
        .collect()
}

/// Free-text predicate over fullname, username, bio and platform.
#[must_use]
pub fn matches_search(record: &CreatorRecord, query: &str) -> bool {
    let query = sanitize(query);
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains =
        |field: Option<&str>| field.is_some_and(|text| text.to_lowercase().contains(&needle));

    contains(record.fullname.as_deref())
        || contains(record.username.as_deref())
        || contains(record.bio.as_deref())
        || contains(record.platform.map(|platform| platform.as_str()))
}

/// Platform predicate.
#[must_use]
pub fn matches_platform(record: &CreatorRecord, selection: PlatformFilter) -> bool {
    match selection.platform() {
        None => true,
        Some(wanted) => record.platform == Some(wanted),
    }
}

/// Rating bucket predicate; unrated records only pass `All`.
#[must_use]
pub fn matches_rating(record: &CreatorRecord, bucket: RatingBucket) -> bool {
    let Some(threshold) = bucket.threshold() else {
        return true;
    };
    record
        .derived_average_rating()
        .is_some_and(|average| average >= threshold)
}

/// Tag predicate; a record tag matches when it contains the selected tag.
#[must_use]
pub fn matches_tag(record: &CreatorRecord, tag: &TagFilter) -> bool {
    let Some(needle) = tag.needle() else {
        return true;
    };
    record
        .tags
        .iter()
        .any(|candidate| candidate.to_lowercase().contains(&needle))
}
