//! passbook demo
//!
//! Runs a scripted pair of account lifecycles and prints each closing
//! statement as JSON. Log verbosity follows `RUST_LOG` (default
//! `passbook=debug`).

use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passbook::{BankAccount, DomainError, Ledger, OverdraftLimit};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Closing statement printed for each account at the end of the demo
#[derive(Debug, Serialize)]
struct ClosingStatement<'a> {
    holder: &'a str,
    account_number: u64,
    card: String,
    paid_out: Decimal,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let ledger = Ledger::new();
    let mut rng = rand::thread_rng();

    // Basic account lifecycle
    let mut alice = ledger.open_basic("Alice", Decimal::new(10000, 2));
    alice.deposit(Decimal::new(5000, 2))?;

    if let Err(err) = alice.withdraw(Decimal::new(20000, 2)) {
        tracing::warn!(%err, "withdrawal rejected");
    }
    alice.withdraw(Decimal::new(15000, 2))?;
    alice.issue_card(&mut rng);
    println!("{alice}");

    let paid_out = alice.close()?;
    let statement = ClosingStatement {
        holder: alice.holder_name(),
        account_number: alice.account_number().value(),
        card: alice.card().to_string(),
        paid_out,
    };
    println!("{}", serde_json::to_string_pretty(&statement)?);

    // Premium account lifecycle: draw on the overdraft, fail to close while
    // overdrawn, repay, close
    let mut bob = ledger.open_premium("Bob", Decimal::ZERO, OverdraftLimit::new(Decimal::new(10000, 2))?);
    bob.withdraw(Decimal::new(8000, 2))?;
    println!("{}", bob.balance_summary());

    match bob.close() {
        Err(DomainError::Overdrawn { debt }) => {
            tracing::warn!(%debt, "closure refused, repaying");
            bob.deposit(debt)?;
        }
        other => anyhow::bail!("expected overdrawn closure refusal, got {other:?}"),
    }

    let paid_out = bob.close()?;
    let statement = ClosingStatement {
        holder: bob.holder_name(),
        account_number: bob.account_number().value(),
        card: bob.card().to_string(),
        paid_out,
    };
    println!("{}", serde_json::to_string_pretty(&statement)?);

    Ok(())
}
