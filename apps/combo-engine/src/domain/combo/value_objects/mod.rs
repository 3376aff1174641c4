//! Combo Value Objects

mod action;
mod candidate;
mod classification;
mod combo_structure;

pub use action::Action;
pub use candidate::ComboCandidate;
pub use classification::Classification;
pub use combo_structure::{ComboStructure, SpreadShape, UnknownTagError};
