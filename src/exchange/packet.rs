//! Data contracts exchanged with the transport and settlement collaborators.

use std::fmt;

use crate::types::Side;

/// Identifies a pair's books: the counterparty route plus both assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    /// Opaque routing identifier for the counterparty
    pub route: String,

    /// Asset being bought or sold
    pub amount_asset: String,

    /// Asset the price is quoted in
    pub price_asset: String,
}

impl PairKey {
    /// Build a key from a route and the two asset identifiers
    pub fn new(
        route: impl Into<String>,
        amount_asset: impl Into<String>,
        price_asset: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            amount_asset: amount_asset.into(),
            price_asset: price_asset.into(),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.route, self.amount_asset, self.price_asset)
    }
}

/// An order request carried to the counterparty that holds the opposite book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPacket {
    /// Pair the order trades on
    pub pair: PairKey,

    /// Side of the incoming order, opposite to the book it is filled from
    pub side: Side,

    /// Account that placed the order on the sending side
    pub owner: String,

    /// Amount-asset units requested
    pub quantity: u64,

    /// Limit price in price-asset units per amount-asset unit
    pub price: u64,
}

/// Counterparty's answer to an [`OrderPacket`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderAck {
    /// Unfilled quantity the sender may rest locally
    pub remaining_quantity: u64,

    /// Amount-asset units traded (a buyer's purchase)
    pub total_traded: u64,

    /// Price-asset value traded (a seller's gain)
    pub notional: u64,
}

/// A value movement the settlement collaborator must execute.
///
/// Depending on where it is returned it is either a reservation taken from
/// `owner` before an order leaves, or a payment/refund to `owner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Account debited for a reservation, credited otherwise
    pub owner: String,

    /// Asset identifier to move
    pub asset: String,

    /// Units of `asset`
    pub amount: u64,
}

impl Transfer {
    /// Build a transfer of `amount` units of `asset` for `owner`
    pub fn new(owner: impl Into<String>, asset: impl Into<String>, amount: u64) -> Self {
        Self {
            owner: owner.into(),
            asset: asset.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_display() {
        let pair = PairKey::new("channel-0", "marscoin", "venuscoin");
        assert_eq!(pair.to_string(), "channel-0/marscoin/venuscoin");
    }

    #[test]
    fn test_pair_key_ordering() {
        let a = PairKey::new("channel-0", "a", "b");
        let b = PairKey::new("channel-0", "a", "c");
        let c = PairKey::new("channel-1", "a", "a");
        assert!(a < b);
        assert!(b < c);
    }
}
