//! # Interchange DEX
//!
//! Order-matching core for one trading pair of a two-party exchange.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Liquidation) and order bounds
//! - **OrderBook**: Price-time sorted buy and sell books, SSZ snapshots
//! - **Engine**: Liquidation step and fill loop against the opposite book
//! - **Exchange**: Reference caller with pair registry, order flow and cancellation
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **No Floating Point**: Quantities and prices are `u64`, notionals `u128`
//! 3. **Atomic Operations**: A failing call leaves its book unchanged
//! 4. **Plain Data Out**: Settlement, transport and persistence are left to the caller
//!
//! ## Example
//!
//! ```
//! use interchange_dex::{BuyBook, Order};
//!
//! let mut bids = BuyBook::new("marscoin", "venuscoin");
//! let id = bids.append_order("alice", 100, 10).unwrap();
//!
//! let result = bids.fill_sell_order(Order::new(0, "bob", 40, 9));
//! assert!(result.filled);
//! assert_eq!(bids.get_order_from_id(id).unwrap().quantity, 60);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, Liquidation, bounds
pub mod types;

/// Order books: sorted storage, side policies, snapshots
pub mod orderbook;

/// Matching engine: liquidation and fill
pub mod engine;

/// Caller layer: pairs, order flow, settlement transfers
pub mod exchange;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Liquidation, Order, Side};
pub use orderbook::{Asks, Bids, BuyBook, OrderBook, PairBook, SellBook, SidePolicy};
pub use engine::{FillResult, LiquidationStep};
pub use exchange::{Exchange, OrderAck, OrderPacket, PairKey, Transfer};
pub use error::{BookError, ExchangeError};
