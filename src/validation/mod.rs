//! Input sanitization and validation.
//!
//! Every free-text value is passed through [`sanitize`] before it is stored
//! or used as a search operand. Validators never fail hard: they return an
//! optional [`ValidationError`] that the caller shows next to the field.

mod drafts;
mod fields;
mod sanitize;

pub use drafts::{
    BIO_MAX_LENGTH, FULLNAME_MAX_LENGTH, REVIEW_MAX_LENGTH, REVIEW_MIN_LENGTH, USERNAME_MAX_LENGTH,
    validate_creator_draft, validate_review_draft,
};
pub use fields::{
    MAX_QUERY_LENGTH, validate_required_field, validate_search_query, validate_url,
};
pub use sanitize::sanitize;

use std::collections::BTreeMap;
use thiserror::Error as ThisError;

/// Field-level validation failure.
///
/// Display strings are the messages shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// Search text longer than the allowed maximum.
    #[error("Search query too long (max {max} characters)")]
    QueryTooLong {
        /// Maximum allowed length.
        max: usize,
    },

    /// Required field left empty or whitespace-only.
    #[error("{field} is required")]
    Required {
        /// Human-readable field name.
        field: String,
    },

    /// Field longer than its maximum.
    #[error("{field} must be less than {max} characters")]
    TooLong {
        /// Human-readable field name.
        field: String,
        /// Maximum allowed length.
        max: usize,
    },

    /// Field shorter than its minimum.
    #[error("{field} must be at least {min} characters long")]
    TooShort {
        /// Human-readable field name.
        field: String,
        /// Minimum allowed length.
        min: usize,
    },

    /// Optional URL that does not parse.
    #[error("Please enter a valid URL")]
    InvalidUrl,

    /// Follower count below zero.
    #[error("Follower count cannot be negative")]
    NegativeFollowers,

    /// At least one rating category left unrated.
    #[error("Please rate all categories")]
    MissingRating,

    /// Star rating outside 1-5.
    #[error("{field} rating must be between 1 and 5")]
    RatingOutOfRange {
        /// Human-readable category name.
        field: String,
    },

    /// Platform outside the supported set.
    #[error("{value} is not a supported platform")]
    UnknownPlatform {
        /// The rejected value.
        value: String,
    },
}

/// Validation errors keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, ValidationError>,
}

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error for `field` if one is given.
    pub fn record(&mut self, field: &'static str, error: Option<ValidationError>) {
        if let Some(error) = error {
            self.errors.insert(field, error);
        }
    }

    /// Returns the error for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over failing fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}
