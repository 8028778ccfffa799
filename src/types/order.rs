//! Order types for the interchange matching engine.
//!
//! An [`Order`] is a plain limit order. Once a book has accepted it, the
//! only thing that ever changes is its remaining quantity, and that change
//! happens inside the book's own bookkeeping.

use std::fmt;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Bid - offers price-asset to acquire amount-asset
    Buy,
    /// Ask - offers amount-asset to acquire price-asset
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("buy"),
            Side::Sell => f.write_str("sell"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// ## Fields
///
/// - `id`: assigned by the book that accepted the order, unique within it
/// - `owner`: opaque identity of whoever may cancel the order and receives proceeds
/// - `quantity`: units of amount-asset, `1..=MAX_AMOUNT`
/// - `price`: price-asset per unit of amount-asset, `1..=MAX_PRICE`
///
/// An incoming order that has not been placed on any book carries whatever
/// id the caller chose; the engine never interprets it.
///
/// ## Example
///
/// ```
/// use interchange_dex::types::Order;
///
/// let order = Order::new(0, "alice", 60, 18);
/// assert_eq!(order.notional(), Some(1080));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Order {
    /// Book-assigned identifier
    pub id: u64,

    /// Owner identity
    pub owner: String,

    /// Remaining quantity in amount-asset units
    pub quantity: u64,

    /// Limit price in price-asset per amount-asset unit
    pub price: u64,
}

impl Order {
    /// Create a new limit order
    pub fn new(id: u64, owner: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            id,
            owner: owner.into(),
            quantity,
            price,
        }
    }

    /// Value of the order in price-asset units (`quantity * price`).
    ///
    /// Always `Some` for an order within the configured bounds.
    pub fn notional(&self) -> Option<u64> {
        self.quantity.checked_mul(self.price)
    }

    /// Check if nothing is left to fill
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Copy of this order with a different remaining quantity
    pub(crate) fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
