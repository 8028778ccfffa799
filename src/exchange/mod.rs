//! Reference caller around the matching engine.
//!
//! The engine only mutates books. Everything a real participant adds on top
//! lives here, expressed as plain data so the surrounding system can plug in
//! its own transport, storage and settlement:
//!
//! - [`PairKey`]: route plus asset pair, the key books are stored under
//! - [`OrderPacket`] / [`OrderAck`]: what travels to and from the counterparty
//! - [`Transfer`]: reservations, payouts and refunds for settlement
//! - [`AssetResolver`]: which identifier to pay an asset out in
//! - [`Exchange`]: book registry, order flow and owner-checked cancellation

pub mod asset;
pub mod packet;
pub mod state;

pub use asset::{AssetResolver, Passthrough};
pub use packet::{OrderAck, OrderPacket, PairKey, Transfer};
pub use state::{AckOutcome, Exchange};
