//! Error types for the order book and the exchange layer.
//!
//! Every condition here is local and recoverable: an operation that fails
//! leaves the book it was called on exactly as it was.

use thiserror::Error;

/// Errors raised by [`OrderBook`](crate::orderbook::OrderBook) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("order quantity must be positive")]
    ZeroAmount,

    #[error("order quantity {quantity} exceeds maximum {max}")]
    AmountTooLarge { quantity: u64, max: u64 },

    #[error("order price must be positive")]
    ZeroPrice,

    #[error("order price {price} exceeds maximum {max}")]
    PriceTooLarge { price: u64, max: u64 },

    #[error("order not found: {id}")]
    OrderNotFound { id: u64 },

    #[error("order ids exhausted")]
    IdsExhausted,

    #[error("invalid book snapshot: {0}")]
    Snapshot(String),
}

/// Errors raised by the [`Exchange`](crate::exchange::Exchange) caller layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error(transparent)]
    Book(#[from] BookError),

    #[error("pair not found: {pair}")]
    PairNotFound { pair: String },

    #[error("pair already exists: {pair}")]
    PairExists { pair: String },

    #[error("{owner} is not the owner of order {id}")]
    NotOwner { id: u64, owner: String },

    #[error("settlement amount overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_error_display() {
        let err = BookError::AmountTooLarge { quantity: 11, max: 10 };
        assert_eq!(err.to_string(), "order quantity 11 exceeds maximum 10");

        let err = BookError::OrderNotFound { id: 7 };
        assert_eq!(err.to_string(), "order not found: 7");
    }

    #[test]
    fn test_exchange_error_from_book_error() {
        let err: ExchangeError = BookError::ZeroPrice.into();
        assert!(matches!(err, ExchangeError::Book(BookError::ZeroPrice)));
        assert_eq!(err.to_string(), "order price must be positive");
    }

    #[test]
    fn test_not_owner_display() {
        let err = ExchangeError::NotOwner { id: 3, owner: "mallory".to_string() };
        assert!(err.to_string().contains("mallory"));
        assert!(err.to_string().contains('3'));
    }
}
