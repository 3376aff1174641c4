//! Leg Bounded Context
//!
//! The typed input of the classification core:
//! - `LegView`: the capability trait any vendor leg implements
//! - `Leg` / `Product`: the crate's own validated value objects
//! - OSI symbol formatting

pub mod errors;
pub mod value_objects;

pub use errors::LegError;
pub use value_objects::{
    CallPut, Direction, EQUITY_EXPIRATION, Leg, LegView, PositionSide, Product, SecurityType,
    format_osi,
};
