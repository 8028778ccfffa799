//! Order book module for the interchange matching engine.
//!
//! ## Architecture
//!
//! Each pair has two books, one per side. A book is a single sorted `Vec`
//! of orders with the best price at the tail:
//!
//! - **Side policy**: zero-sized [`Bids`] / [`Asks`] types carrying the sort
//!   direction and crossing rule
//! - **Order book**: generic [`OrderBook<S>`] with its own id counter
//! - **Pair book**: [`PairBook<S>`] binds an order book to its two assets
//! - **Snapshots**: SSZ encoding and SHA-256 state roots for persistence
//!
//! ## Example
//!
//! ```
//! use interchange_dex::orderbook::BuyBook;
//!
//! let mut book = BuyBook::new("marscoin", "venuscoin");
//! book.append_order("alice", 100, 10).unwrap();
//! book.append_order("bob", 100, 12).unwrap();
//!
//! assert_eq!(book.book().best_price(), Some(12));
//! ```

pub mod side;
pub mod book;
pub mod pair;
pub mod snapshot;

pub use side::{Asks, Bids, SidePolicy};
pub use book::OrderBook;
pub use pair::{BuyBook, PairBook, SellBook};
pub use snapshot::{compute_hash, BookRecord, OrderRecord};
