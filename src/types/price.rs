//! Numeric bounds for quantities and prices.
//!
//! ## Overview
//!
//! Quantities and prices are plain `u64` integers. Settlement needs
//! `quantity * price` for a single order, and the sum of `traded * price`
//! over all liquidations of one fill. Both are bounded by
//! `MAX_AMOUNT * MAX_PRICE`, which is checked at compile time to fit in
//! `u64`.
//!
//! Human-facing values such as an average execution price use
//! `rust_decimal` so the matching path never touches floating point.
//!
//! ## Examples
//!
//! ```
//! use interchange_dex::types::price::{validate_order, MAX_AMOUNT};
//!
//! assert!(validate_order(10, 5).is_ok());
//! assert!(validate_order(MAX_AMOUNT + 1, 5).is_err());
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::BookError;

/// Largest quantity a single order may carry
pub const MAX_AMOUNT: u64 = 1_000_000_000_000;

/// Largest price a single order may carry
pub const MAX_PRICE: u64 = 1_000_000;

// Settlement totals are u64.
const _: () = assert!(MAX_AMOUNT.checked_mul(MAX_PRICE).is_some());

/// Longest owner identity accepted in a book snapshot, in bytes
pub const MAX_OWNER_LEN: usize = 256;

/// Longest asset identifier accepted in a book snapshot, in bytes
pub const MAX_ASSET_LEN: usize = 128;

/// Largest number of resting orders a book snapshot can hold
pub const MAX_BOOK_ORDERS: usize = 1 << 20;

// ============================================================================
// Validation
// ============================================================================

/// Check an order's quantity and price against the configured bounds.
///
/// Checks run in a fixed order and the first failure wins:
/// zero quantity, quantity too large, zero price, price too large.
pub fn validate_order(quantity: u64, price: u64) -> Result<(), BookError> {
    if quantity == 0 {
        return Err(BookError::ZeroAmount);
    }
    if quantity > MAX_AMOUNT {
        return Err(BookError::AmountTooLarge {
            quantity,
            max: MAX_AMOUNT,
        });
    }
    if price == 0 {
        return Err(BookError::ZeroPrice);
    }
    if price > MAX_PRICE {
        return Err(BookError::PriceTooLarge {
            price,
            max: MAX_PRICE,
        });
    }
    Ok(())
}

// ============================================================================
// Decimal helpers
// ============================================================================

/// Volume-weighted average price of a fill
///
/// # Returns
///
/// * `Some(Decimal)` - `notional / quantity`
/// * `None` - If nothing traded or the notional does not fit a `Decimal`
///
/// # Example
///
/// ```
/// use interchange_dex::types::price::average_price;
/// use rust_decimal::Decimal;
///
/// // 30 @ 15 + 30 @ 20 = 1050 for 60 units
/// assert_eq!(average_price(1050, 60), Some(Decimal::new(175, 1)));
/// assert_eq!(average_price(0, 0), None);
/// ```
pub fn average_price(notional: u128, quantity: u64) -> Option<Decimal> {
    if quantity == 0 {
        return None;
    }
    Decimal::from_u128(notional)?.checked_div(Decimal::from(quantity))
}

// ============================================================================
// Unit Tests
// ============================================================================
