//! Interchange DEX - Binary Entry Point
//!
//! Walks through the two reference fills against a small ask book and prints
//! the liquidations and the resulting state root. Set `RUST_LOG=debug` to see
//! the engine's trace output.

use interchange_dex::{Order, SellBook};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  Interchange DEX - Matching Core");
    println!("===========================================");
    println!();

    for (quantity, price) in [(60, 18), (60, 22)] {
        if let Err(e) = run_fill(quantity, price) {
            error!(error = %e, "demo fill failed");
        }
    }
}

fn run_fill(quantity: u64, price: u64) -> Result<(), interchange_dex::BookError> {
    let mut asks = SellBook::new("marscoin", "venuscoin");
    asks.append_order("alice", 50, 25)?;
    asks.append_order("bob", 200, 20)?;
    asks.append_order("carol", 30, 15)?;

    println!("Buy {quantity} @ {price} against asks 50@25, 200@20, 30@15");
    let result = asks.fill_buy_order(Order::new(0, "dave", quantity, price));

    for l in &result.liquidated {
        println!("  liquidated #{} {} {} @ {}", l.order_id, l.owner, l.quantity, l.price);
    }
    println!("  remaining: {}", result.remaining.quantity);
    println!("  filled:    {}", result.filled);
    if let Some(avg) = result.average_price() {
        println!("  avg price: {avg}");
    }
    println!("  book:      {:?}", asks.book().orders().iter().map(|o| (o.quantity, o.price)).collect::<Vec<_>>());
    println!("  root:      {}", asks.state_root_hex()?);
    println!();

    info!(traded = result.total_traded, "fill complete");
    Ok(())
}
