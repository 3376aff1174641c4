//! Combo Bounded Context
//!
//! Everything that turns legs into classified combos:
//! - Canonical ordering and near/far splitting
//! - Action and structure classification
//! - Unit quantity resolution
//! - Grouping a flat leg list into candidates

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::ClassifierError;
pub use services::{
    DivisorCache, canonical_sort, classify_action, classify_structure, group_legs, units_of,
};
pub use value_objects::{
    Action, Classification, ComboCandidate, ComboStructure, SpreadShape, UnknownTagError,
};
