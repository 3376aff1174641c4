//! Application Layer
//!
//! Orchestrates the domain services behind a single classifier object that
//! owns its configuration and divisor cache.

pub mod services;

pub use services::*;
