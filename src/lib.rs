//! Paperdesk - Simulated trading-account backend.
//!
//! This crate provides the account ledger and trade-lifecycle engine for a
//! simulated brokerage: per-user cash/equity ledgers, buy/sell positions
//! with P&L settlement on close, and per-account strategy-parameter
//! storage. Prices are supplied by the caller; there is no market data or
//! order matching here.
//!
//! # Architecture
//!
//! Each account is the unit of isolation. The ledger keeps one lockable
//! cell per account, so opening a position, settling it, and updating the
//! balance happen as one atomic unit for that account while unrelated
//! accounts proceed in parallel.
//!
//! - **`service::LedgerStore`** - Owns accounts; atomic debit/credit
//! - **`service::lifecycle`** - Opens and closes trades, computes P&L
//! - **`service::robot`** - Strategy-parameter records with contract defaults
//! - **`service::AccountService`** - Facade the API surface invokes
//! - **`port::Authenticator`** - Credential/session capability the core
//!   delegates to; **`adapter::SessionAuthenticator`** is the bundled
//!   in-memory implementation
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Accounts, trades, robot configs, and the P&L formula
//! - [`error`] - Error taxonomy: validation, conflict, not-found, invariant
//! - [`port`] - Trait definitions the core depends on
//! - [`adapter`] - Bundled port implementations
//! - [`service`] - The engine itself
//!
//! # Example
//!
//! ```
//! use paperdesk::adapter::SessionAuthenticator;
//! use paperdesk::domain::Side;
//! use paperdesk::service::{AccountService, OpenOrder};
//! use rust_decimal_macros::dec;
//!
//! # tokio_test::block_on(async {
//! let desk = AccountService::new(SessionAuthenticator::new(720));
//! let registration = desk.register("Ana", "ana@x.com", "secret").await.unwrap();
//!
//! let opened = desk
//!     .open_position(
//!         &registration.account_id,
//!         OpenOrder {
//!             side: Side::Buy,
//!             symbol: "EURUSD".into(),
//!             volume: dec!(2),
//!             entry_price: dec!(1.10),
//!             stop_loss: None,
//!             take_profit: None,
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(opened.new_balance, dec!(997.80));
//! # });
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
