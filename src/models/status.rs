//! Discovery status reported to the rendering layer.

use serde::Serialize;
use std::fmt;

/// Status of the discovery view.
///
/// An empty filtered set is reported as `Idle`; it is a normal outcome rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum DiscoveryStatus {
    /// Nothing in flight and more pages may be available.
    #[default]
    Idle,
    /// The base collection is being fetched.
    Loading,
    /// The last fetch failed; the engine runs on an empty collection.
    Error(String),
    /// A page is settling and will be appended.
    LoadingMore,
    /// Every matching record is visible.
    Exhausted,
}

impl DiscoveryStatus {
    /// Returns the status as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::LoadingMore => "loading_more",
            Self::Exhausted => "exhausted",
        }
    }

    /// Returns true for the `Error` status.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for DiscoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => write!(f, "error: {message}"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
