//! Deterministic book snapshots and state roots.
//!
//! ## SSZ Encoding
//!
//! A [`PairBook`] is persisted as an SSZ container ([`BookRecord`]):
//!
//! ```text
//! BookRecord {
//!     side_raw:     u8            (0 = bids, 1 = asks)
//!     amount_asset: List<u8, 128>
//!     price_asset:  List<u8, 128>
//!     next_id:      u64
//!     orders:       List<OrderRecord, 2^20>   storage order, best last
//! }
//! ```
//!
//! The encoding preserves the order sequence and `next_id` exactly, so a
//! book written by one replica and read back by another continues with the
//! same ids and the same matching priority.
//!
//! ## State Root
//!
//! The state root is the SHA-256 of the snapshot bytes. Two replicas that
//! applied the same operations to the same book agree on it.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::BookError;
use crate::orderbook::{OrderBook, PairBook, SidePolicy};
use crate::types::price::{MAX_ASSET_LEN, MAX_BOOK_ORDERS, MAX_OWNER_LEN};
use crate::types::{Order, Side};

/// SSZ form of a resting order
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct OrderRecord {
    pub id: u64,
    pub owner: List<u8, MAX_OWNER_LEN>,
    pub quantity: u64,
    pub price: u64,
}

/// SSZ form of a pair book
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct BookRecord {
    /// Book side as u8 (0=Bids, 1=Asks)
    pub side_raw: u8,
    pub amount_asset: List<u8, MAX_ASSET_LEN>,
    pub price_asset: List<u8, MAX_ASSET_LEN>,
    pub next_id: u64,
    pub orders: List<OrderRecord, MAX_BOOK_ORDERS>,
}

fn side_to_u8(side: Side) -> u8 {
    match side {
        Side::Buy => 0,
        Side::Sell => 1,
    }
}

fn bytes_list<const N: usize>(field: &str, value: &str) -> Result<List<u8, N>, BookError> {
    List::try_from(value.as_bytes().to_vec()).map_err(|_| {
        BookError::Snapshot(format!("{field} longer than {N} bytes"))
    })
}

fn list_string<const N: usize>(field: &str, value: &List<u8, N>) -> Result<String, BookError> {
    String::from_utf8(value.iter().copied().collect())
        .map_err(|_| BookError::Snapshot(format!("{field} is not valid UTF-8")))
}

impl OrderRecord {
    fn from_order(order: &Order) -> Result<Self, BookError> {
        Ok(Self {
            id: order.id,
            owner: bytes_list("owner", &order.owner)?,
            quantity: order.quantity,
            price: order.price,
        })
    }

    fn to_order(&self) -> Result<Order, BookError> {
        Ok(Order::new(
            self.id,
            list_string("owner", &self.owner)?,
            self.quantity,
            self.price,
        ))
    }
}

impl<S: SidePolicy> PairBook<S> {
    /// Convert to the SSZ record
    pub fn to_record(&self) -> Result<BookRecord, BookError> {
        let records = self
            .book()
            .orders()
            .iter()
            .map(OrderRecord::from_order)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookRecord {
            side_raw: side_to_u8(S::SIDE),
            amount_asset: bytes_list("amount asset", self.amount_asset())?,
            price_asset: bytes_list("price asset", self.price_asset())?,
            next_id: self.book().next_id(),
            orders: List::try_from(records).map_err(|_| {
                BookError::Snapshot(format!("more than {MAX_BOOK_ORDERS} orders"))
            })?,
        })
    }

    /// Rebuild from an SSZ record, re-checking every book invariant
    pub fn from_record(record: &BookRecord) -> Result<Self, BookError> {
        if record.side_raw != side_to_u8(S::SIDE) {
            return Err(BookError::Snapshot(format!(
                "snapshot side {} does not match {} book",
                record.side_raw,
                S::SIDE
            )));
        }

        let orders = record
            .orders
            .iter()
            .map(OrderRecord::to_order)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_book(
            list_string("amount asset", &record.amount_asset)?,
            list_string("price asset", &record.price_asset)?,
            OrderBook::from_parts(record.next_id, orders)?,
        ))
    }

    /// Serialize the book to SSZ bytes
    ///
    /// # Example
    ///
    /// ```
    /// use interchange_dex::orderbook::SellBook;
    ///
    /// let mut book = SellBook::new("foo", "bar");
    /// book.append_order("alice", 10, 3).unwrap();
    ///
    /// let bytes = book.to_snapshot_bytes().unwrap();
    /// assert_eq!(SellBook::from_snapshot_bytes(&bytes).unwrap(), book);
    /// ```
    pub fn to_snapshot_bytes(&self) -> Result<Vec<u8>, BookError> {
        let record = self.to_record()?;
        ssz_rs::serialize(&record).map_err(|err| BookError::Snapshot(format!("{err:?}")))
    }

    /// Deserialize a book from SSZ bytes
    pub fn from_snapshot_bytes(bytes: &[u8]) -> Result<Self, BookError> {
        let record: BookRecord =
            ssz_rs::deserialize(bytes).map_err(|err| BookError::Snapshot(format!("{err:?}")))?;
        Self::from_record(&record)
    }

    /// SHA-256 of the snapshot bytes
    pub fn state_root(&self) -> Result<[u8; 32], BookError> {
        Ok(compute_hash(&self.to_snapshot_bytes()?))
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> Result<String, BookError> {
        Ok(hex::encode(self.state_root()?))
    }
}

/// Compute SHA-256 of the given data
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orderbook::{BuyBook, SellBook};

    fn sample_sell_book() -> SellBook {
        let mut book = SellBook::new("marscoin", "venuscoin");
        book.append_order("alice", 50, 25).unwrap();
        book.append_order("bob", 200, 20).unwrap();
        book.append_order("carol", 30, 15).unwrap();
        book
    }

    #[test]
    fn test_snapshot_preserves_next_id_after_removal() {
        let mut book = sample_sell_book();
        book.remove_order_from_id(2).unwrap();

        let bytes = book.to_snapshot_bytes().unwrap();
        let mut restored = SellBook::from_snapshot_bytes(&bytes).unwrap();

        assert_eq!(restored, book);
        assert_eq!(restored.book().next_id(), 3);
        assert_eq!(restored.append_order("dave", 1, 1).unwrap(), 3);
    }

    #[test]
    fn test_snapshot_rejects_wrong_side() {
        let bytes = sample_sell_book().to_snapshot_bytes().unwrap();
        let result = BuyBook::from_snapshot_bytes(&bytes);

        assert!(matches!(result, Err(BookError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_rejects_tampered_order() {
        let mut record = sample_sell_book().to_record().unwrap();
        record.next_id = 1;

        assert!(SellBook::from_record(&record).is_err());
    }

    #[test]
    fn test_snapshot_rejects_swapped_equal_prices() {
        let mut book = SellBook::new("foo", "bar");
        book.append_order("early", 10, 15).unwrap();
        book.append_order("late", 10, 15).unwrap();

        let record = book.to_record().unwrap();
        let mut orders: Vec<OrderRecord> = record.orders.iter().cloned().collect();
        orders.swap(0, 1);
        let tampered = BookRecord {
            orders: List::try_from(orders).unwrap(),
            ..record
        };

        assert!(matches!(SellBook::from_record(&tampered), Err(BookError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_at_id_limit_rejects_append() {
        let mut record = SellBook::new("foo", "bar").to_record().unwrap();
        record.next_id = u64::MAX;

        let mut book = SellBook::from_record(&record).unwrap();
        assert_eq!(book.append_order("alice", 1, 1), Err(BookError::IdsExhausted));
        assert!(book.book().is_empty());
        assert_eq!(book.state_root().unwrap(), SellBook::from_record(&record).unwrap().state_root().unwrap());
    }

    #[test]
    fn test_snapshot_rejects_long_owner() {
        let mut book = SellBook::new("foo", "bar");
        book.append_order("x".repeat(MAX_OWNER_LEN + 1), 1, 1).unwrap();

        assert!(matches!(book.to_snapshot_bytes(), Err(BookError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(SellBook::from_snapshot_bytes(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_state_root_determinism() {
        let root1 = sample_sell_book().state_root().unwrap();
        let root2 = sample_sell_book().state_root().unwrap();
        assert_eq!(root1, root2);

        let mut changed = sample_sell_book();
        changed.remove_order_from_id(0).unwrap();
        assert_ne!(root1, changed.state_root().unwrap());
    }

    #[test]
    fn test_state_root_hex() {
        let hex = sample_sell_book().state_root_hex().unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_compute_hash() {
        assert_eq!(compute_hash(b"book"), compute_hash(b"book"));
        assert_ne!(compute_hash(b"book"), compute_hash(b"other"));
    }
}
