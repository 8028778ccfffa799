//! Match-and-liquidate algorithm.
//!
//! The incoming order is always on the opposite side of the book it is
//! matched against: a buy is filled from a [`SellBook`], a sell from a
//! [`BuyBook`]. Both directions run the same generic code; only the side
//! policy's crossing rule differs.
//!
//! ## Single Step
//!
//! [`PairBook::liquidate_from_opposite`] trades against the best resting
//! order only:
//!
//! 1. Empty book or no cross: nothing happens
//! 2. Resting quantity covers the incoming order: the incoming order is
//!    filled, the resting order shrinks (or is removed if it hits zero)
//! 3. Otherwise the resting order is consumed entirely and removed, and the
//!    incoming order keeps the rest
//!
//! ## Fill Loop
//!
//! [`PairBook::fill_order`] repeats the step until the incoming order is
//! filled or the book stops crossing. It never rests the remainder; the
//! caller decides whether to append it.

use tracing::debug;

use crate::orderbook::{Asks, Bids, PairBook, SidePolicy};
use crate::types::price::average_price;
use crate::types::{Liquidation, Order};

use rust_decimal::Decimal;

/// Outcome of one liquidation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidationStep {
    /// Incoming order with its remaining quantity
    pub remaining: Order,

    /// Resting order consumed by this step, with the traded quantity
    pub liquidated: Option<Liquidation>,

    /// Quantity traded in this step
    pub traded: u64,

    /// True if the incoming order has nothing left to fill
    pub filled: bool,
}

impl LiquidationStep {
    fn no_match(incoming: Order) -> Self {
        Self {
            remaining: incoming,
            liquidated: None,
            traded: 0,
            filled: false,
        }
    }

    /// True if the step traded against a resting order
    #[inline]
    pub fn matched(&self) -> bool {
        self.liquidated.is_some()
    }
}

/// Outcome of filling an incoming order against a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillResult {
    /// Unfilled part of the incoming order (quantity may be zero)
    pub remaining: Order,

    /// Consumed resting orders, best price first
    pub liquidated: Vec<Liquidation>,

    /// Sum of traded quantities (amount-asset units)
    pub total_traded: u64,

    /// Sum of `traded * price` over all liquidations (price-asset units)
    pub notional: u128,

    /// True if the incoming order was completely filled
    pub filled: bool,
}

impl FillResult {
    /// Volume-weighted execution price, `None` if nothing traded
    pub fn average_price(&self) -> Option<Decimal> {
        average_price(self.notional, self.total_traded)
    }
}

impl<S: SidePolicy> PairBook<S> {
    /// Trade an incoming opposite-side order against the best resting order.
    ///
    /// The book is left untouched when there is no match.
    pub fn liquidate_from_opposite(&mut self, incoming: Order) -> LiquidationStep {
        if incoming.is_filled() {
            return LiquidationStep::no_match(incoming);
        }

        let book = self.book_mut();
        let Some(resting) = book.best_mut() else {
            return LiquidationStep::no_match(incoming);
        };
        if !S::crosses(incoming.price, resting.price) {
            return LiquidationStep::no_match(incoming);
        }

        let step = if resting.quantity >= incoming.quantity {
            let traded = incoming.quantity;
            let liquidation =
                Liquidation::new(resting.id, resting.owner.clone(), traded, resting.price);

            resting.quantity -= traded;
            if resting.quantity == 0 {
                book.pop_best();
            }

            LiquidationStep {
                remaining: incoming.with_quantity(0),
                liquidated: Some(liquidation),
                traded,
                filled: true,
            }
        } else {
            let traded = resting.quantity;
            let liquidation =
                Liquidation::new(resting.id, resting.owner.clone(), traded, resting.price);
            book.pop_best();

            LiquidationStep {
                remaining: incoming.with_quantity(incoming.quantity - traded),
                liquidated: Some(liquidation),
                traded,
                filled: false,
            }
        };

        debug!(
            book = %S::SIDE,
            resting_id = step.liquidated.as_ref().map(|l| l.order_id),
            traded = step.traded,
            filled = step.filled,
            "liquidation step"
        );
        step
    }

    /// Fill an incoming opposite-side order as far as the book allows.
    ///
    /// # Example
    ///
    /// ```
    /// use interchange_dex::orderbook::SellBook;
    /// use interchange_dex::types::Order;
    ///
    /// let mut book = SellBook::new("foo", "bar");
    /// book.append_order("alice", 30, 15).unwrap();
    ///
    /// let result = book.fill_order(Order::new(0, "bob", 60, 18));
    /// assert_eq!(result.total_traded, 30);
    /// assert_eq!(result.remaining.quantity, 30);
    /// assert!(!result.filled);
    /// ```
    pub fn fill_order(&mut self, incoming: Order) -> FillResult {
        let mut remaining = incoming;
        let mut liquidated = Vec::new();
        let mut total_traded = 0u64;
        let mut notional = 0u128;
        let mut filled = remaining.is_filled();

        while !filled {
            let step = self.liquidate_from_opposite(remaining);
            remaining = step.remaining;

            let Some(liquidation) = step.liquidated else {
                break;
            };
            total_traded += step.traded;
            notional += liquidation.notional_raw();
            liquidated.push(liquidation);
            filled = step.filled;
        }

        debug!(
            book = %S::SIDE,
            liquidations = liquidated.len(),
            total_traded,
            remaining = remaining.quantity,
            filled,
            "order filled against book"
        );

        FillResult {
            remaining,
            liquidated,
            total_traded,
            notional,
            filled,
        }
    }
}

// ============================================================================
// Side-specific entry points
// ============================================================================

impl PairBook<Asks> {
    /// Single liquidation step for an incoming buy order
    pub fn liquidate_from_buy_order(&mut self, buy: Order) -> LiquidationStep {
        self.liquidate_from_opposite(buy)
    }

    /// Fill an incoming buy order against the resting asks.
    ///
    /// `total_traded` is the buyer's purchase in amount-asset units.
    pub fn fill_buy_order(&mut self, buy: Order) -> FillResult {
        self.fill_order(buy)
    }
}

impl PairBook<Bids> {
    /// Single liquidation step for an incoming sell order
    pub fn liquidate_from_sell_order(&mut self, sell: Order) -> LiquidationStep {
        self.liquidate_from_opposite(sell)
    }

    /// Fill an incoming sell order against the resting bids.
    ///
    /// `notional` is the seller's gain in price-asset units.
    pub fn fill_sell_order(&mut self, sell: Order) -> FillResult {
        self.fill_order(sell)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
