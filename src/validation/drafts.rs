//! Validation of creator and review drafts from data-entry forms.

use chrono::Utc;

use super::{
    FieldErrors, ValidationError, sanitize, validate_required_field, validate_url,
};
use crate::models::{CreatorDraft, NewCreator, NewRating, Platform, ReviewDraft};
use crate::services::aggregation::overall_from_categories;

/// Maximum length of a creator's full name.
pub const FULLNAME_MAX_LENGTH: usize = 50;
/// Maximum length of a creator's username.
pub const USERNAME_MAX_LENGTH: usize = 30;
/// Maximum length of a creator's bio.
pub const BIO_MAX_LENGTH: usize = 500;
/// Minimum length of review text.
pub const REVIEW_MIN_LENGTH: usize = 10;
/// Maximum length of review text.
pub const REVIEW_MAX_LENGTH: usize = 1000;

/// Validates a creator draft and returns its sanitized form.
///
/// Text fields are sanitized before they are checked, so markup-only input
/// counts as empty. Tags are sanitized but not restricted to the filter
/// vocabulary.
///
/// # Errors
///
/// Returns every failing field when any check fails.
pub fn validate_creator_draft(draft: &CreatorDraft) -> Result<NewCreator, FieldErrors> {
    let fullname = sanitize(&draft.fullname);
    let username = sanitize(&draft.username);
    let bio = sanitize(&draft.bio);
    let profile_pic = sanitize(&draft.profile_pic);
    let banner_pic = sanitize(&draft.banner_pic);

    let mut errors = FieldErrors::new();
    errors.record(
        "fullname",
        validate_required_field(&fullname, "Full Name", FULLNAME_MAX_LENGTH),
    );
    errors.record(
        "username",
        validate_required_field(&username, "Username", USERNAME_MAX_LENGTH),
    );
    errors.record("bio", validate_required_field(&bio, "Bio", BIO_MAX_LENGTH));
    errors.record("profilePic", validate_url(&profile_pic));
    errors.record("bannerPic", validate_url(&banner_pic));

    let platform = parse_platform(&draft.platform, &mut errors);

    let followers = match draft.followers {
        Some(count) if count < 0 => {
            errors.record("followers", Some(ValidationError::NegativeFollowers));
            0
        },
        Some(count) => u64::try_from(count).unwrap_or(0),
        None => 0,
    };

    match platform {
        Some(platform) if errors.is_empty() => Ok(NewCreator {
            fullname,
            username,
            platform,
            bio,
            followers,
            profile_pic: non_empty(profile_pic),
            banner_pic: non_empty(banner_pic),
            tags: draft
                .tags
                .iter()
                .map(|tag| sanitize(tag))
                .filter(|tag| !tag.is_empty())
                .collect(),
        }),
        _ => Err(errors),
    }
}

/// Validates a review draft and fixes its overall score.
///
/// # Errors
///
/// Returns every failing field when any check fails.
pub fn validate_review_draft(draft: &ReviewDraft) -> Result<NewRating, FieldErrors> {
    let mut errors = FieldErrors::new();

    let scores = [
        ("Authenticity", draft.authenticity),
        ("Professionalism", draft.professionalism),
        ("Communication", draft.communication),
    ];
    if scores.iter().any(|(_, stars)| *stars == 0) {
        errors.record("ratings", Some(ValidationError::MissingRating));
    } else if let Some((field, _)) = scores.iter().find(|(_, stars)| *stars > 5) {
        errors.record(
            "ratings",
            Some(ValidationError::RatingOutOfRange {
                field: (*field).to_string(),
            }),
        );
    }

    let content = sanitize(&draft.content);
    errors.record("content", validate_review_content(&content));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewRating {
        authenticity: draft.authenticity,
        professionalism: draft.professionalism,
        communication: draft.communication,
        overall: overall_from_categories(
            draft.authenticity,
            draft.professionalism,
            draft.communication,
        ),
        content,
        created_at: Utc::now(),
    })
}

fn validate_review_content(content: &str) -> Option<ValidationError> {
    if let Some(error) = validate_required_field(content, "Review content", REVIEW_MAX_LENGTH) {
        return Some(error);
    }
    (content.chars().count() < REVIEW_MIN_LENGTH).then(|| ValidationError::TooShort {
        field: "Review".to_string(),
        min: REVIEW_MIN_LENGTH,
    })
}

fn parse_platform(value: &str, errors: &mut FieldErrors) -> Option<Platform> {
    let value = sanitize(value);
    if value.is_empty() {
        errors.record(
            "platform",
            Some(ValidationError::Required {
                field: "Platform".to_string(),
            }),
        );
        return None;
    }
    let platform = Platform::parse(&value);
    if platform.is_none() {
        errors.record("platform", Some(ValidationError::UnknownPlatform { value }));
    }
    platform
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
