//! Domain Layer
//!
//! Pure classification logic with no I/O.

pub mod combo;
pub mod leg;
