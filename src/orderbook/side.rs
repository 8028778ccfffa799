//! Side policies: the ordering rules that distinguish bids from asks.
//!
//! Both books keep their best price at the *tail* of the order sequence:
//!
//! ```text
//! Bids: [ 10, 12, 12, 15 ]   ascending, best (highest) last
//! Asks: [ 25, 20, 20, 15 ]   descending, best (lowest) last
//! ```
//!
//! A single generic [`OrderBook`](super::OrderBook) is parameterized by one
//! of the zero-sized policies below, so insertion and matching are written
//! once for both sides.

use std::fmt::Debug;

use crate::types::Side;

/// Price ordering and crossing rule for one side of a pair.
pub trait SidePolicy: Copy + Debug + Default + Send + Sync + 'static {
    /// Which side this book rests
    const SIDE: Side;

    /// Returns true if `price` is strictly better than `other` for this side.
    fn outranks(price: u64, other: u64) -> bool;

    /// Returns true if an incoming opposite-side order at `incoming` can
    /// trade against a resting order of this side at `resting`.
    ///
    /// - Resting asks: a buy crosses when `buy >= ask`
    /// - Resting bids: a sell crosses when `sell <= bid`
    fn crosses(incoming: u64, resting: u64) -> bool {
        !Self::outranks(incoming, resting)
    }
}

/// Bid side: ascending storage, highest price at the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bids;

/// Ask side: descending storage, lowest price at the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Asks;

impl SidePolicy for Bids {
    const SIDE: Side = Side::Buy;

    #[inline]
    fn outranks(price: u64, other: u64) -> bool {
        price > other
    }
}

impl SidePolicy for Asks {
    const SIDE: Side = Side::Sell;

    #[inline]
    fn outranks(price: u64, other: u64) -> bool {
        price < other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bids_ordering() {
        assert!(Bids::outranks(20, 15));
        assert!(!Bids::outranks(15, 20));
        assert!(!Bids::outranks(15, 15));
    }

    #[test]
    fn test_asks_ordering() {
        assert!(Asks::outranks(15, 20));
        assert!(!Asks::outranks(20, 15));
        assert!(!Asks::outranks(15, 15));
    }

    #[test]
    fn test_buy_crosses_resting_ask() {
        assert!(Asks::crosses(18, 15));
        assert!(Asks::crosses(15, 15));
        assert!(!Asks::crosses(10, 15));
    }

    #[test]
    fn test_sell_crosses_resting_bid() {
        assert!(Bids::crosses(15, 18));
        assert!(Bids::crosses(15, 15));
        assert!(!Bids::crosses(20, 15));
    }

    #[test]
    fn test_side_constants() {
        assert_eq!(Bids::SIDE, Side::Buy);
        assert_eq!(Asks::SIDE, Side::Sell);
    }
}
