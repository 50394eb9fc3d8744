//! Text helpers for the presentation layer.
//!
//! Aggregates are stored unrounded; rounding happens only here.

use crate::services::DiscoveryView;

/// Formats a follower count as `1.5M`, `12.3K`, or the raw number below 1000.
///
/// # Examples
///
/// ```
/// use creatorscope::rendering::format_followers;
///
/// assert_eq!(format_followers(1_500_000), "1.5M");
/// assert_eq!(format_followers(12_345), "12.3K");
/// assert_eq!(format_followers(999), "999");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_followers(followers: u64) -> String {
    if followers >= 1_000_000 {
        format!("{:.1}M", followers as f64 / 1_000_000.0)
    } else if followers >= 1_000 {
        format!("{:.1}K", followers as f64 / 1_000.0)
    } else {
        followers.to_string()
    }
}

/// Formats an average for a listing card: two decimals, or `N/A`.
#[must_use]
pub fn format_rating(average: Option<f64>) -> String {
    average.map_or_else(|| "N/A".to_string(), |value| format!("{value:.2}"))
}

/// Formats a score for the detail view: one decimal, or `N/A`.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "N/A".to_string(), |value| format!("{value:.1}"))
}

/// Summarizes the result list under the search bar.
#[must_use]
pub fn describe_results(view: &DiscoveryView, query: &str) -> String {
    if view.total_count == 0 {
        return if query.is_empty() {
            "No creators available".to_string()
        } else {
            format!("No creators found for \"{query}\"")
        };
    }
    let noun = if view.total_count == 1 {
        "creator"
    } else {
        "creators"
    };
    format!(
        "Showing {} of {} {noun}",
        view.visible.len(),
        view.total_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscoveryConfig;
    use crate::models::CreatorRecord;
    use crate::services::DiscoveryCoordinator;
    use test_case::test_case;

    #[test_case(0, "0"; "zero")]
    #[test_case(1_000, "1.0K"; "one thousand")]
    #[test_case(999_999, "1000.0K"; "just below a million")]
    #[test_case(2_000_000, "2.0M"; "two million")]
    fn test_format_followers(followers: u64, expected: &str) {
        assert_eq!(format_followers(followers), expected);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(13.0 / 3.0)), "4.33");
        assert_eq!(format_score(Some(4.26)), "4.3");
        assert_eq!(format_score(None), "N/A");
    }

    #[test]
    fn test_describe_results() {
        let records = (0..20)
            .map(|i| CreatorRecord::new(i.to_string()).with_fullname(format!("Creator {i}")))
            .collect();
        let mut coordinator =
            DiscoveryCoordinator::with_records(&DiscoveryConfig::default(), records);
        assert_eq!(
            describe_results(&coordinator.view(), ""),
            "Showing 12 of 20 creators"
        );

        coordinator.set_query("Creator 7");
        assert_eq!(
            describe_results(&coordinator.view(), "Creator 7"),
            "Showing 1 of 1 creator"
        );

        coordinator.set_query("nobody");
        assert_eq!(
            describe_results(&coordinator.view(), "nobody"),
            "No creators found for \"nobody\""
        );
    }
}
