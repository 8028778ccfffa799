//! Core data types for the interchange matching engine
//!
//! ## Types
//!
//! - [`Order`]: A limit order, resting or incoming
//! - [`Side`]: Buy or Sell
//! - [`Liquidation`]: A resting order consumed by a match, carrying the traded quantity
//!
//! ## Integer Arithmetic
//!
//! Quantities and prices are `u64` within the bounds in [`price`].
//! Nothing in the matching path uses floating point.

mod order;
mod liquidation;
pub mod price;

pub use order::{Order, Side};
pub use liquidation::Liquidation;
