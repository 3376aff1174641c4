//! Application Services

mod combo_classifier;

pub use combo_classifier::{ClassifiedCombo, ComboClassifier};
