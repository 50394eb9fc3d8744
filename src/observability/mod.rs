//! Observability: structured logging and the discovery event bus.
//!
//! Counters are recorded through the `metrics` facade. No recorder is
//! installed here; embedding applications choose their own exporter.

mod event_bus;
mod logging;

pub use event_bus::{EventBus, FilteredReceiver};
pub use logging::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LogFormat, LoggingConfig, init_logging};
