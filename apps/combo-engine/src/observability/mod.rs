//! Observability module for structured logging.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the host process through [`init_tracing`].

mod logging;

pub use logging::{ObservabilityError, init_tracing};
