//! Tracing Subscriber Setup
//!
//! Installs a global `tracing-subscriber` registry with an `EnvFilter` and
//! a formatting layer chosen by `LoggingConfig::format`.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; overrides `LoggingConfig::level` when set
//!
//! # Usage
//!
//! ```rust,ignore
//! use combo_engine::config::load_config;
//! use combo_engine::observability::init_tracing;
//!
//! let config = load_config(None)?;
//! init_tracing(&config.observability.logging)?;
//! ```

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Error type for subscriber initialization.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        message: String,
    },

    /// The configured output format is not supported.
    #[error("unsupported log format: {format}")]
    UnsupportedFormat {
        /// Requested format.
        format: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set and valid. The
/// configured level is still checked so a bad config never goes unnoticed.
///
/// # Errors
///
/// Returns an error if the level or format is invalid, or if a global
/// subscriber has already been installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let configured =
        EnvFilter::try_new(&config.level).map_err(|e| ObservabilityError::InvalidFilter {
            directive: config.level.clone(),
            message: e.to_string(),
        })?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry.with(fmt::layer().json()).try_init(),
        "pretty" => registry.with(fmt::layer().pretty()).try_init(),
        "compact" => registry.with(fmt::layer().compact()).try_init(),
        other => {
            return Err(ObservabilityError::UnsupportedFormat {
                format: other.to_string(),
            });
        }
    };
    installed.map_err(|e| ObservabilityError::SubscriberError(e.to_string()))?;

    tracing::info!(
        level = %config.level,
        format = %config.format,
        "Tracing initialized"
    );

    Ok(())
}
