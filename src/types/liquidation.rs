//! Liquidation record produced when a resting order is consumed.

/// A resting order that was fully or partially consumed by an incoming order.
///
/// `quantity` is the traded quantity, not the resting order's original size.
/// Downstream settlement pays from this record, so `order_id`, `owner` and
/// `price` are copied from the resting order unchanged.
///
/// ## Example
///
/// ```
/// use interchange_dex::types::Liquidation;
///
/// let liquidation = Liquidation::new(2, "carol", 30, 15);
/// assert_eq!(liquidation.notional(), Some(450));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Liquidation {
    /// Id of the resting order in its book
    pub order_id: u64,

    /// Owner of the resting order (receives the proceeds)
    pub owner: String,

    /// Traded quantity in amount-asset units
    pub quantity: u64,

    /// Resting order price (execution price)
    pub price: u64,
}

impl Liquidation {
    /// Create a new liquidation record
    pub fn new(order_id: u64, owner: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            order_id,
            owner: owner.into(),
            quantity,
            price,
        }
    }

    /// Traded value in price-asset units (`quantity * price`)
    pub fn notional(&self) -> Option<u64> {
        self.quantity.checked_mul(self.price)
    }

    /// Traded value without overflow, for summing across a fill
    pub fn notional_raw(&self) -> u128 {
        u128::from(self.quantity) * u128::from(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquidation_new() {
        let liquidation = Liquidation::new(1, "bob", 30, 20);

        assert_eq!(liquidation.order_id, 1);
        assert_eq!(liquidation.owner, "bob");
        assert_eq!(liquidation.quantity, 30);
        assert_eq!(liquidation.price, 20);
        assert_eq!(liquidation.notional(), Some(600));
        assert_eq!(liquidation.notional_raw(), 600);
    }
}
