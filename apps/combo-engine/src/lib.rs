// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::items_after_statements,
        clippy::cast_possible_truncation
    )
)]

//! Combo Engine - Leg Classification Core
//!
//! Infers, from a set of option and equity legs, the trading action that
//! produced them and the strategy structure they form, and reconstructs
//! candidate combos from a flat leg list.
//!
//! # Architecture
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure classification logic
//!   - `leg`: `LegView` trait, `Leg` and `Product` value objects, OSI symbols
//!   - `combo`: ordering, action/structure classifiers, unit quantities,
//!     grouping
//!
//! - **Application**: `ComboClassifier`, the facade over the domain services
//!
//! - **Config / Observability**: YAML configuration and tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use combo_engine::{ComboCandidate, ComboClassifier};
//!
//! let classifier = ComboClassifier::default();
//! for combo in classifier.classify_legs(legs) {
//!     println!("{:?}: {:?}", combo.candidate.symbols(), combo.result);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Layers
// =============================================================================

/// Domain layer - Leg and combo classification logic.
pub mod domain;

/// Application layer - Classification facade.
pub mod application;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{ClassifiedCombo, ComboClassifier};
pub use config::{EngineConfig, load_config, load_config_from_string};
pub use domain::combo::{
    Action, Classification, ClassifierError, ComboCandidate, ComboStructure, DivisorCache,
    SpreadShape,
};
pub use domain::leg::{
    CallPut, Direction, Leg, LegError, LegView, PositionSide, Product, SecurityType,
};
pub use observability::init_tracing;
