//! One participant's view of the exchange.
//!
//! ## Flow
//!
//! ```text
//!   creator                              counterparty
//!   -------                              ------------
//!   send create-pair  ----------------->  on_recv_create_pair   (opens BuyBook)
//!   on_ack_create_pair (opens SellBook) <--------------------
//!
//!   send_sell_order   --- OrderPacket -->  on_recv_sell_order   (fills from BuyBook,
//!     reserves qty                           pays liquidated bids)
//!   on_ack_sell_order <---- OrderAck ---
//!     rests remainder, pays gain
//! ```
//!
//! Buy orders run the same flow in the other direction. If a packet cannot
//! be delivered the sender calls the matching `*_failed` handler, which
//! returns the refund of the original reservation.
//!
//! Every operation returns the [`Transfer`]s the settlement collaborator has
//! to execute; nothing here moves value itself.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::engine::FillResult;
use crate::error::ExchangeError;
use crate::exchange::{AssetResolver, OrderAck, OrderPacket, PairKey, Passthrough, Transfer};
use crate::orderbook::{BuyBook, SellBook};
use crate::types::price::validate_order;
use crate::types::{Order, Side};

/// What acknowledging an order did locally
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AckOutcome {
    /// Id of the resting order created for the remainder, if any
    pub rested: Option<u64>,

    /// Proceeds paid to the order's owner, if anything traded
    pub payout: Option<Transfer>,
}

/// Books held by one participant, keyed by pair
#[derive(Debug, Clone, Default)]
pub struct Exchange<R: AssetResolver = Passthrough> {
    resolver: R,
    buy_books: BTreeMap<PairKey, BuyBook>,
    sell_books: BTreeMap<PairKey, SellBook>,
}

impl Exchange<Passthrough> {
    /// Create an exchange that pays out assets under their own identifiers
    pub fn new() -> Self {
        Self::with_resolver(Passthrough)
    }
}

impl<R: AssetResolver> Exchange<R> {
    /// Create an exchange with a custom asset resolver
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            buy_books: BTreeMap::new(),
            sell_books: BTreeMap::new(),
        }
    }

    /// Local buy book for a pair, if one is open
    pub fn buy_book(&self, pair: &PairKey) -> Option<&BuyBook> {
        self.buy_books.get(pair)
    }

    /// Local sell book for a pair, if one is open
    pub fn sell_book(&self, pair: &PairKey) -> Option<&SellBook> {
        self.sell_books.get(pair)
    }

    // ========================================================================
    // Pair Setup
    // ========================================================================

    /// Counterparty side of pair creation: open the buy book
    pub fn on_recv_create_pair(&mut self, pair: PairKey) -> Result<(), ExchangeError> {
        if self.buy_books.contains_key(&pair) {
            return Err(ExchangeError::PairExists {
                pair: pair.to_string(),
            });
        }
        info!(%pair, "buy book opened");
        let book = BuyBook::new(pair.amount_asset.clone(), pair.price_asset.clone());
        self.buy_books.insert(pair, book);
        Ok(())
    }

    /// Creator side of pair creation: open the sell book
    pub fn on_ack_create_pair(&mut self, pair: PairKey) -> Result<(), ExchangeError> {
        if self.sell_books.contains_key(&pair) {
            return Err(ExchangeError::PairExists {
                pair: pair.to_string(),
            });
        }
        info!(%pair, "sell book opened");
        let book = SellBook::new(pair.amount_asset.clone(), pair.price_asset.clone());
        self.sell_books.insert(pair, book);
        Ok(())
    }

    // ========================================================================
    // Sell Orders
    // ========================================================================

    /// Prepare a sell order for the counterparty.
    ///
    /// # Returns
    ///
    /// The packet to send and the reservation of `quantity` amount-asset to
    /// take from the seller before sending.
    pub fn send_sell_order(
        &self,
        pair: &PairKey,
        seller: &str,
        quantity: u64,
        price: u64,
    ) -> Result<(OrderPacket, Transfer), ExchangeError> {
        validate_order(quantity, price)?;
        if !self.sell_books.contains_key(pair) {
            return Err(pair_not_found(pair));
        }

        let packet = OrderPacket {
            pair: pair.clone(),
            side: Side::Sell,
            owner: seller.to_string(),
            quantity,
            price,
        };
        let reservation = Transfer::new(seller, pair.amount_asset.clone(), quantity);
        Ok((packet, reservation))
    }

    /// Fill a received sell order against the local buy book.
    ///
    /// Each liquidated bid is paid its traded quantity in the amount asset.
    /// Validation and the pair lookup run before the book is touched. Once
    /// the packet is within bounds every settlement amount fits in `u64`.
    pub fn on_recv_sell_order(
        &mut self,
        packet: &OrderPacket,
    ) -> Result<(OrderAck, Vec<Transfer>), ExchangeError> {
        validate_order(packet.quantity, packet.price)?;
        let book = self
            .buy_books
            .get_mut(&packet.pair)
            .ok_or_else(|| pair_not_found(&packet.pair))?;

        let result = book.fill_sell_order(incoming(packet));

        let asset = self
            .resolver
            .payout_asset(&packet.pair.route, &packet.pair.amount_asset);
        let payouts = result
            .liquidated
            .iter()
            .map(|l| Transfer::new(l.owner.clone(), asset.clone(), l.quantity))
            .collect();
        let ack = ack_for(&result)?;

        debug!(pair = %packet.pair, traded = ack.total_traded, remaining = ack.remaining_quantity, "sell order received");
        Ok((ack, payouts))
    }

    /// Handle the counterparty's answer to a sell order we sent.
    ///
    /// Rests the unfilled quantity on the local sell book and pays the
    /// seller's gain in the price asset.
    ///
    /// # Panics
    ///
    /// Panics if the local sell book for the pair no longer exists. The
    /// order could only have been sent while it existed, so this means the
    /// caller's state is corrupt.
    pub fn on_ack_sell_order(
        &mut self,
        packet: &OrderPacket,
        ack: &OrderAck,
    ) -> Result<AckOutcome, ExchangeError> {
        let book = self
            .sell_books
            .get_mut(&packet.pair)
            .unwrap_or_else(|| panic!("sell order book must exist for pair {}", packet.pair));

        let mut outcome = AckOutcome::default();
        if ack.remaining_quantity > 0 {
            outcome.rested =
                Some(book.append_order(packet.owner.clone(), ack.remaining_quantity, packet.price)?);
        }
        if ack.notional > 0 {
            let asset = self
                .resolver
                .payout_asset(&packet.pair.route, &packet.pair.price_asset);
            outcome.payout = Some(Transfer::new(packet.owner.clone(), asset, ack.notional));
        }
        Ok(outcome)
    }

    /// Refund a sell order that could not be delivered or was rejected
    pub fn on_sell_order_failed(&self, packet: &OrderPacket) -> Transfer {
        warn!(pair = %packet.pair, owner = %packet.owner, "sell order failed, refunding");
        Transfer::new(
            packet.owner.clone(),
            packet.pair.amount_asset.clone(),
            packet.quantity,
        )
    }

    // ========================================================================
    // Buy Orders
    // ========================================================================

    /// Prepare a buy order for the counterparty.
    ///
    /// The reservation is `quantity * price` of the price asset.
    pub fn send_buy_order(
        &self,
        pair: &PairKey,
        buyer: &str,
        quantity: u64,
        price: u64,
    ) -> Result<(OrderPacket, Transfer), ExchangeError> {
        validate_order(quantity, price)?;
        if !self.buy_books.contains_key(pair) {
            return Err(pair_not_found(pair));
        }

        let packet = OrderPacket {
            pair: pair.clone(),
            side: Side::Buy,
            owner: buyer.to_string(),
            quantity,
            price,
        };
        let reserved = quantity.checked_mul(price).ok_or(ExchangeError::Overflow)?;
        let reservation = Transfer::new(buyer, pair.price_asset.clone(), reserved);
        Ok((packet, reservation))
    }

    /// Fill a received buy order against the local sell book.
    ///
    /// Each liquidated ask is paid `traded * price` in the price asset.
    /// Validation and the pair lookup run before the book is touched.
    pub fn on_recv_buy_order(
        &mut self,
        packet: &OrderPacket,
    ) -> Result<(OrderAck, Vec<Transfer>), ExchangeError> {
        validate_order(packet.quantity, packet.price)?;
        let book = self
            .sell_books
            .get_mut(&packet.pair)
            .ok_or_else(|| pair_not_found(&packet.pair))?;

        let result = book.fill_buy_order(incoming(packet));

        let asset = self
            .resolver
            .payout_asset(&packet.pair.route, &packet.pair.price_asset);
        let payouts = result
            .liquidated
            .iter()
            .map(|l| {
                l.notional()
                    .map(|amount| Transfer::new(l.owner.clone(), asset.clone(), amount))
                    .ok_or(ExchangeError::Overflow)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let ack = ack_for(&result)?;

        debug!(pair = %packet.pair, traded = ack.total_traded, remaining = ack.remaining_quantity, "buy order received");
        Ok((ack, payouts))
    }

    /// Handle the counterparty's answer to a buy order we sent.
    ///
    /// Rests the unfilled quantity on the local buy book and pays the
    /// buyer's purchase in the amount asset.
    ///
    /// The reservation taken by [`send_buy_order`](Self::send_buy_order) is
    /// `quantity * price`, but the buyer is only charged `ack.notional`. The
    /// difference from trading below the limit price is not refunded here;
    /// it stays with the caller, which can compute it from the packet and ack.
    ///
    /// # Panics
    ///
    /// Panics if the local buy book for the pair no longer exists.
    pub fn on_ack_buy_order(
        &mut self,
        packet: &OrderPacket,
        ack: &OrderAck,
    ) -> Result<AckOutcome, ExchangeError> {
        let book = self
            .buy_books
            .get_mut(&packet.pair)
            .unwrap_or_else(|| panic!("buy order book must exist for pair {}", packet.pair));

        let mut outcome = AckOutcome::default();
        if ack.remaining_quantity > 0 {
            outcome.rested =
                Some(book.append_order(packet.owner.clone(), ack.remaining_quantity, packet.price)?);
        }
        if ack.total_traded > 0 {
            let asset = self
                .resolver
                .payout_asset(&packet.pair.route, &packet.pair.amount_asset);
            outcome.payout = Some(Transfer::new(packet.owner.clone(), asset, ack.total_traded));
        }
        Ok(outcome)
    }

    /// Refund a buy order that could not be delivered or was rejected
    pub fn on_buy_order_failed(&self, packet: &OrderPacket) -> Result<Transfer, ExchangeError> {
        warn!(pair = %packet.pair, owner = %packet.owner, "buy order failed, refunding");
        let amount = packet
            .quantity
            .checked_mul(packet.price)
            .ok_or(ExchangeError::Overflow)?;
        Ok(Transfer::new(
            packet.owner.clone(),
            packet.pair.price_asset.clone(),
            amount,
        ))
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Cancel a resting ask and refund its remaining quantity
    pub fn cancel_sell_order(
        &mut self,
        pair: &PairKey,
        owner: &str,
        id: u64,
    ) -> Result<Transfer, ExchangeError> {
        let book = self
            .sell_books
            .get_mut(pair)
            .ok_or_else(|| pair_not_found(pair))?;

        check_owner(book.get_order_from_id(id)?, owner)?;
        let order = book.remove_order_from_id(id)?;

        info!(%pair, id, "sell order cancelled");
        Ok(Transfer::new(order.owner, pair.amount_asset.clone(), order.quantity))
    }

    /// Cancel a resting bid and refund `quantity * price` of the price asset
    pub fn cancel_buy_order(
        &mut self,
        pair: &PairKey,
        owner: &str,
        id: u64,
    ) -> Result<Transfer, ExchangeError> {
        let book = self
            .buy_books
            .get_mut(pair)
            .ok_or_else(|| pair_not_found(pair))?;

        let order = book.get_order_from_id(id)?;
        check_owner(order, owner)?;
        let refund = order.notional().ok_or(ExchangeError::Overflow)?;
        let order = book.remove_order_from_id(id)?;

        info!(%pair, id, "buy order cancelled");
        Ok(Transfer::new(order.owner, pair.price_asset.clone(), refund))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn pair_not_found(pair: &PairKey) -> ExchangeError {
    ExchangeError::PairNotFound {
        pair: pair.to_string(),
    }
}

fn incoming(packet: &OrderPacket) -> Order {
    Order::new(0, packet.owner.clone(), packet.quantity, packet.price)
}

fn ack_for(result: &FillResult) -> Result<OrderAck, ExchangeError> {
    Ok(OrderAck {
        remaining_quantity: result.remaining.quantity,
        total_traded: result.total_traded,
        notional: u64::try_from(result.notional).map_err(|_| ExchangeError::Overflow)?,
    })
}

fn check_owner(order: &Order, owner: &str) -> Result<(), ExchangeError> {
    if order.owner != owner {
        warn!(id = order.id, requester = owner, "cancellation by non-owner rejected");
        return Err(ExchangeError::NotOwner {
            id: order.id,
            owner: owner.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
