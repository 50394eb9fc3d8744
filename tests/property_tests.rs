//! Property-based tests for filtering, aggregation and sanitization.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Filtering yields an ordered subset of its input with no duplicates
//! - Filtering is deterministic
//! - Rating bucket inclusion is monotonic
//! - Sanitized text never contains angle brackets
//! - Pagination never reveals more than the filtered set

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use creatorscope::models::{
    CreatorRecord, FilterCriteria, Platform, PlatformFilter, RatingBucket, RatingEntry,
    TAG_VOCABULARY, TagFilter,
};
use creatorscope::services::{PaginationController, compute_average, filter, filter_indices};
use creatorscope::validation::sanitize;
use proptest::prelude::*;

fn platform_strategy() -> impl Strategy<Value = Option<Platform>> {
    prop::option::of(prop::sample::select(Platform::all().to_vec()))
}

fn record_strategy() -> impl Strategy<Value = (
    Option<String>,
    Option<String>,
    Option<Platform>,
    Option<String>,
    Vec<String>,
    Vec<f64>,
)> {
    (
        prop::option::of("[A-Za-z ]{0,12}"),
        prop::option::of("[a-z_]{0,10}"),
        platform_strategy(),
        prop::option::of("[a-z ]{0,30}"),
        prop::collection::vec(prop::sample::select(TAG_VOCABULARY.to_vec()), 0..3)
            .prop_map(|tags| tags.into_iter().map(str::to_lowercase).collect()),
        prop::collection::vec(0.0f64..=5.0, 0..5),
    )
}

fn records_strategy() -> impl Strategy<Value = Vec<CreatorRecord>> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (fullname, username, platform, bio, tags, ratings))| {
                let mut record = CreatorRecord::new(format!("c{i}")).with_rating_entries(
                    ratings.into_iter().map(RatingEntry::with_overall).collect(),
                );
                record.fullname = fullname;
                record.username = username;
                record.platform = platform;
                record.bio = bio;
                record.tags = tags;
                record
            })
            .collect()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    let platforms = vec![
        PlatformFilter::All,
        PlatformFilter::Instagram,
        PlatformFilter::YouTube,
        PlatformFilter::TikTok,
    ];
    let tags: Vec<TagFilter> = std::iter::once(TagFilter::All)
        .chain(TAG_VOCABULARY.iter().copied().map(TagFilter::Tag))
        .collect();
    (
        "[a-z]{0,3}",
        prop::sample::select(platforms),
        prop::sample::select(RatingBucket::all().to_vec()),
        prop::sample::select(tags),
    )
        .prop_map(|(query, platform, bucket, tag)| {
            FilterCriteria::new()
                .with_query(&query)
                .with_platform(platform)
                .with_rating_bucket(bucket)
                .with_tag(tag)
        })
}

proptest! {
    /// Property: the filtered set is an ordered subset with no duplicates.
    #[test]
    fn prop_filter_is_ordered_subset(
        records in records_strategy(),
        criteria in criteria_strategy(),
    ) {
        let indices = filter_indices(&records, &criteria);
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(indices.iter().all(|&index| index < records.len()));

        let filtered = filter(&records, &criteria);
        prop_assert_eq!(filtered.len(), indices.len());
        for (record, &index) in filtered.iter().zip(&indices) {
            prop_assert!(std::ptr::eq(*record, &records[index]));
        }
    }

    /// Property: filtering the same input twice gives the same output.
    #[test]
    fn prop_filter_is_deterministic(
        records in records_strategy(),
        criteria in criteria_strategy(),
    ) {
        prop_assert_eq!(filter(&records, &criteria), filter(&records, &criteria));
    }

    /// Property: tightening the rating bucket never adds records.
    #[test]
    fn prop_bucket_inclusion_is_monotonic(records in records_strategy()) {
        let sizes: Vec<usize> = [
            RatingBucket::All,
            RatingBucket::ThreeAndUp,
            RatingBucket::FourAndUp,
            RatingBucket::FiveStars,
        ]
        .into_iter()
        .map(|bucket| filter(&records, &FilterCriteria::new().with_rating_bucket(bucket)).len())
        .collect();
        prop_assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// Property: the average lies between the smallest and largest score.
    #[test]
    fn prop_average_is_bounded(scores in prop::collection::vec(0.0f64..=5.0, 1..20)) {
        let entries: Vec<RatingEntry> =
            scores.iter().copied().map(RatingEntry::with_overall).collect();
        let average = compute_average(&entries).unwrap();
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(average >= min - 1e-9 && average <= max + 1e-9);
    }

    /// Property: sanitize never leaves angle brackets or surrounding space.
    #[test]
    fn prop_sanitize_strips_brackets(text in ".{0,200}") {
        let clean = sanitize(&text);
        prop_assert!(!clean.contains('<') && !clean.contains('>'));
        prop_assert_eq!(clean.trim(), clean.as_str());
    }

    /// Property: sanitize is idempotent.
    #[test]
    fn prop_sanitize_is_idempotent(text in ".{0,200}") {
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once);
    }

    /// Property: paging reveals whole pages until the set runs out.
    #[test]
    fn prop_pagination_windows(count in 0usize..200, page_size in 1usize..30, loads in 0usize..12) {
        let mut controller = PaginationController::new(page_size);
        controller.reset(count);
        for _ in 0..loads {
            if let Some(ticket) = controller.begin_load_more() {
                controller.complete_load_more(ticket);
            }
        }
        let state = controller.state();
        prop_assert_eq!(controller.visible_len(), (state.pages_loaded * page_size).min(count));
        prop_assert_eq!(state.has_more, controller.visible_len() < count);
    }
}
