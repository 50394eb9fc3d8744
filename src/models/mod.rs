//! Data models for creatorscope.
//!
//! Records, criteria, status values, events and form drafts.

mod creator;
mod criteria;
mod draft;
mod events;
mod status;

pub use creator::{CreatorId, CreatorRecord, Platform, RatingEntry};
pub use criteria::{
    ActiveFilter, FilterCriteria, PlatformFilter, RatingBucket, TAG_VOCABULARY, TagFilter,
};
pub use draft::{CreatorDraft, NewCreator, NewRating, ReviewDraft};
pub use events::DiscoveryEvent;
pub use status::DiscoveryStatus;
