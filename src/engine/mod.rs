//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same book and incoming order always produce the same
//!    book, remainder and liquidation list
//! 2. **Integer Math**: No floating-point operations
//! 3. **Synchronous Execution**: Every call completes or fails before returning
//! 4. **Price-Time Priority**: Best price first, then earliest arrival
//!
//! ## Matching Rules
//!
//! - **Buy orders** are filled from a sell book (lowest ask first)
//! - **Sell orders** are filled from a buy book (highest bid first)
//! - Trades execute at the resting order's price
//! - The unfilled remainder is returned, never rested automatically
//!
//! ## Example
//!
//! ```
//! use interchange_dex::orderbook::SellBook;
//! use interchange_dex::types::Order;
//!
//! let mut asks = SellBook::new("marscoin", "venuscoin");
//! asks.append_order("alice", 50, 25).unwrap();
//! asks.append_order("bob", 200, 20).unwrap();
//! asks.append_order("carol", 30, 15).unwrap();
//!
//! let result = asks.fill_buy_order(Order::new(0, "dave", 60, 22));
//!
//! assert!(result.filled);
//! assert_eq!(result.liquidated.len(), 2);
//! assert_eq!(asks.book().best().map(|o| o.quantity), Some(170));
//! ```

pub mod matcher;

pub use matcher::{FillResult, LiquidationStep};
