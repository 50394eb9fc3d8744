//! Discovery services.
//!
//! - [`aggregation`]: rating averages and summaries
//! - [`filter`]: pure multi-criterion filtering
//! - [`pagination`]: page windowing with generation tokens
//! - [`discovery`]: the coordinator that ties criteria to pagination
//! - [`session`]: async fetch, settling delay and teardown

pub mod aggregation;
pub mod discovery;
pub mod filter;
pub mod pagination;
pub mod session;

pub use aggregation::{
    CategoryAverages, RatingSummary, compute_average, compute_category_averages,
    overall_from_categories,
};
pub use discovery::{DiscoveryCoordinator, DiscoveryView};
pub use filter::{filter, filter_indices, matches};
pub use pagination::{
    DEFAULT_PAGE_SIZE, LoadOutcome, LoadTicket, PaginationController, PaginationPhase,
    PaginationState,
};
pub use session::{DiscoverySession, ScrollPosition};
