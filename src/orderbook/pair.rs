//! Books bound to a trading pair.
//!
//! A [`PairBook`] owns one [`OrderBook`] plus the two asset identifiers of
//! its pair. Asset identifiers are opaque strings; the book never resolves
//! them.
//!
//! - [`BuyBook`]: resting bids, sorted ascending (best bid at the tail)
//! - [`SellBook`]: resting asks, sorted descending (best ask at the tail)
//!
//! Matching operations live in [`crate::engine`].

use crate::error::BookError;
use crate::orderbook::{Asks, Bids, OrderBook, SidePolicy};
use crate::types::Order;

/// An order book for one side of one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBook<S: SidePolicy> {
    /// Asset being bought or sold
    amount_asset: String,

    /// Asset the price is quoted in
    price_asset: String,

    /// Resting orders
    book: OrderBook<S>,
}

/// Resting bids for a pair
pub type BuyBook = PairBook<Bids>;

/// Resting asks for a pair
pub type SellBook = PairBook<Asks>;

impl<S: SidePolicy> PairBook<S> {
    /// Create an empty book for a pair
    ///
    /// # Example
    ///
    /// ```
    /// use interchange_dex::orderbook::SellBook;
    ///
    /// let book = SellBook::new("marscoin", "venuscoin");
    /// assert_eq!(book.amount_asset(), "marscoin");
    /// assert!(book.book().is_empty());
    /// ```
    pub fn new(amount_asset: impl Into<String>, price_asset: impl Into<String>) -> Self {
        Self::from_book(amount_asset, price_asset, OrderBook::new())
    }

    /// Bind an existing order book to a pair
    pub fn from_book(
        amount_asset: impl Into<String>,
        price_asset: impl Into<String>,
        book: OrderBook<S>,
    ) -> Self {
        Self {
            amount_asset: amount_asset.into(),
            price_asset: price_asset.into(),
            book,
        }
    }

    /// Asset being bought or sold
    #[inline]
    pub fn amount_asset(&self) -> &str {
        &self.amount_asset
    }

    /// Asset the price is quoted in
    #[inline]
    pub fn price_asset(&self) -> &str {
        &self.price_asset
    }

    /// The underlying order book
    #[inline]
    pub fn book(&self) -> &OrderBook<S> {
        &self.book
    }

    #[inline]
    pub(crate) fn book_mut(&mut self) -> &mut OrderBook<S> {
        &mut self.book
    }

    // ========================================================================
    // Delegated Order Management
    // ========================================================================

    /// Validate and rest a new order; see [`OrderBook::append_order`]
    pub fn append_order(
        &mut self,
        owner: impl Into<String>,
        quantity: u64,
        price: u64,
    ) -> Result<u64, BookError> {
        self.book.append_order(owner, quantity, price)
    }

    /// Look up a resting order by id
    pub fn get_order_from_id(&self, id: u64) -> Result<&Order, BookError> {
        self.book.get_order_from_id(id)
    }

    /// Remove a resting order by id
    pub fn remove_order_from_id(&mut self, id: u64) -> Result<Order, BookError> {
        self.book.remove_order_from_id(id)
    }
}
