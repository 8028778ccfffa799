//! One side of one pair: a sorted sequence of resting orders.
//!
//! ## Layout
//!
//! Orders live in a contiguous `Vec` sorted by the side policy with the best
//! price at the tail, so matching only ever touches the last element:
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append order | O(log n) search + O(n) shift |
//! | Best order | O(1) |
//! | Consume best | O(1) |
//! | Get / remove by id | O(n) |
//!
//! ## Time Priority
//!
//! Within a price level the earliest arrival sits closest to the tail, so it
//! is consumed first. A new order is inserted in front of every resting order
//! at the same price.
//!
//! ## Example
//!
//! ```
//! use interchange_dex::orderbook::{Asks, OrderBook};
//!
//! let mut book = OrderBook::<Asks>::new();
//! book.append_order("alice", 50, 25).unwrap();
//! book.append_order("bob", 30, 15).unwrap();
//!
//! assert_eq!(book.best().map(|o| o.price), Some(15));
//! assert_eq!(book.next_id(), 2);
//! ```

use std::marker::PhantomData;

use tracing::debug;

use crate::error::BookError;
use crate::orderbook::SidePolicy;
use crate::types::price::validate_order;
use crate::types::Order;

/// Sorted resting orders for one side, with its own id counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBook<S: SidePolicy> {
    /// Next id to assign; never decreases
    next_id: u64,

    /// Resting orders, worst price first, best price last
    orders: Vec<Order>,

    side: PhantomData<S>,
}

impl<S: SidePolicy> OrderBook<S> {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a book with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 0,
            orders: Vec::with_capacity(capacity),
            side: PhantomData,
        }
    }

    /// Rebuild a book from persisted parts, checking every invariant.
    pub(crate) fn from_parts(next_id: u64, orders: Vec<Order>) -> Result<Self, BookError> {
        let book = Self {
            next_id,
            orders,
            side: PhantomData,
        };
        book.check_invariants()?;
        Ok(book)
    }

    // ========================================================================
    // Size and Access
    // ========================================================================

    /// The id the next appended order will receive
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of resting orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in storage order (best price last)
    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The order the next match will trade against
    #[inline]
    pub fn best(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Best resting price
    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        self.best().map(|order| order.price)
    }

    /// Total resting quantity across all orders
    pub fn total_quantity(&self) -> u64 {
        self.orders.iter().map(|order| order.quantity).sum()
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Validate and insert a new resting order.
    ///
    /// # Returns
    ///
    /// The id assigned to the order. On error the book is unchanged.
    pub fn append_order(
        &mut self,
        owner: impl Into<String>,
        quantity: u64,
        price: u64,
    ) -> Result<u64, BookError> {
        validate_order(quantity, price)?;

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(BookError::IdsExhausted)?;

        let index = self.insertion_index(price);
        self.orders.insert(index, Order::new(id, owner, quantity, price));

        debug!(side = %S::SIDE, id, quantity, price, index, "order appended");
        Ok(id)
    }

    /// Look up a resting order by id
    pub fn get_order_from_id(&self, id: u64) -> Result<&Order, BookError> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .ok_or(BookError::OrderNotFound { id })
    }

    /// Remove a resting order by id, returning it.
    ///
    /// Removing one element keeps the remaining sequence sorted.
    pub fn remove_order_from_id(&mut self, id: u64) -> Result<Order, BookError> {
        let index = self
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(BookError::OrderNotFound { id })?;

        let order = self.orders.remove(index);
        debug!(side = %S::SIDE, id, quantity = order.quantity, "order removed");
        Ok(order)
    }

    // ========================================================================
    // Matching Access
    // ========================================================================

    /// Mutable access to the best resting order
    #[inline]
    pub(crate) fn best_mut(&mut self) -> Option<&mut Order> {
        self.orders.last_mut()
    }

    /// Remove and return the best resting order
    #[inline]
    pub(crate) fn pop_best(&mut self) -> Option<Order> {
        self.orders.pop()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Position for a new order at `price`: after every strictly worse order,
    /// in front of every order at the same or a better price.
    fn insertion_index(&self, price: u64) -> usize {
        self.orders
            .partition_point(|resting| S::outranks(price, resting.price))
    }

    /// Verify ordering, id and bound invariants
    pub(crate) fn check_invariants(&self) -> Result<(), BookError> {
        let mut seen = std::collections::BTreeSet::new();
        for order in &self.orders {
            validate_order(order.quantity, order.price)?;
            if order.id >= self.next_id {
                return Err(BookError::Snapshot(format!(
                    "order id {} not below next id {}",
                    order.id, self.next_id
                )));
            }
            if !seen.insert(order.id) {
                return Err(BookError::Snapshot(format!("duplicate order id {}", order.id)));
            }
        }

        // Equal prices must hold the earlier arrival (smaller id) nearer the tail
        let sorted = self.orders.windows(2).all(|pair| {
            !S::outranks(pair[0].price, pair[1].price)
                && (pair[0].price != pair[1].price || pair[0].id > pair[1].id)
        });
        if !sorted {
            return Err(BookError::Snapshot(format!(
                "{} orders are not sorted",
                S::SIDE
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
