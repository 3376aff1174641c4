//! Leg Value Objects

mod leg;
mod product;
mod security;
mod side;

pub use leg::{Leg, LegView};
pub use product::{EQUITY_EXPIRATION, Product, format_osi};
pub use security::{CallPut, SecurityType};
pub use side::{Direction, PositionSide};
