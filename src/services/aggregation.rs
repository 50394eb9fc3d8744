//! Aggregate scores derived from rating entries.
//!
//! No rounding happens here; presentation rounding lives in
//! [`crate::rendering`].

use serde::Serialize;

use crate::models::RatingEntry;

/// Per-category means for the creator detail view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryAverages {
    /// Mean authenticity score.
    pub authenticity: Option<f64>,
    /// Mean professionalism score.
    pub professionalism: Option<f64>,
    /// Mean communication score.
    pub communication: Option<f64>,
}

/// Rating overview for a single creator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Number of rating entries.
    pub review_count: usize,
    /// Mean overall score.
    pub average: Option<f64>,
    /// Mean of each category.
    pub categories: CategoryAverages,
    /// Entries per star value, index 0 holding 1-star ratings.
    pub distribution: [usize; 5],
}

impl RatingSummary {
    /// Summarizes a sequence of rating entries.
    #[must_use]
    pub fn from_entries(entries: &[RatingEntry]) -> Self {
        let mut distribution = [0usize; 5];
        for entry in entries {
            distribution[star_index(entry.overall)] += 1;
        }
        Self {
            review_count: entries.len(),
            average: compute_average(entries),
            categories: compute_category_averages(entries),
            distribution,
        }
    }
}

/// Returns the mean `overall` score, or `None` for no entries.
///
/// # Examples
///
/// ```
/// use creatorscope::models::RatingEntry;
/// use creatorscope::services::compute_average;
///
/// assert_eq!(compute_average(&[]), None);
/// let entries = [RatingEntry::with_overall(4.0), RatingEntry::with_overall(5.0)];
/// assert_eq!(compute_average(&entries), Some(4.5));
/// ```
#[must_use]
pub fn compute_average(entries: &[RatingEntry]) -> Option<f64> {
    mean(entries.iter().map(|entry| entry.overall))
}

/// Returns the mean of each category over the entries that carry it.
#[must_use]
pub fn compute_category_averages(entries: &[RatingEntry]) -> CategoryAverages {
    CategoryAverages {
        authenticity: mean(entries.iter().filter_map(|entry| entry.authenticity)),
        professionalism: mean(entries.iter().filter_map(|entry| entry.professionalism)),
        communication: mean(entries.iter().filter_map(|entry| entry.communication)),
    }
}

/// Computes the overall score of a new submission from its three categories.
///
/// Called once when the rating is submitted; stored entries are never
/// re-derived.
#[must_use]
pub fn overall_from_categories(authenticity: u8, professionalism: u8, communication: u8) -> f64 {
    (f64::from(authenticity) + f64::from(professionalism) + f64::from(communication)) / 3.0
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn star_index(overall: f64) -> usize {
    if overall.is_nan() {
        return 0;
    }
    (overall.round().clamp(1.0, 5.0) as usize) - 1
}
