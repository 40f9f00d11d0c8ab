//! Position lifecycle: open, close, and query trades against an account.
//!
//! All functions here take `&mut AccountState` (or `&AccountState`), which
//! by construction means the caller already holds the account's cell lock
//! via [`LedgerStore::with_account`]. Trade-set mutation and the matching
//! ledger debit/credit therefore land as one atomic unit: no reader ever
//! observes a debited balance with no corresponding open position, or a
//! settled trade whose credit has not been applied.
//!
//! [`LedgerStore::with_account`]: super::ledger::LedgerStore::with_account

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::{Balance, Price, Side, Trade, TradeId, Volume};
use crate::error::{Error, Result};
use crate::service::ledger::AccountState;

/// A request to open a position. Stops are advisory only.
#[derive(Debug, Clone)]
pub struct OpenOrder {
    /// Buy or Sell.
    pub side: Side,
    /// Instrument identifier, e.g. "EURUSD".
    pub symbol: String,
    /// Position size. Must be positive.
    pub volume: Volume,
    /// Simulated fill price supplied by the caller. Must be positive.
    pub entry_price: Price,
    /// Advisory stop-loss level; never enforced by this core.
    pub stop_loss: Option<Price>,
    /// Advisory take-profit level; never enforced by this core.
    pub take_profit: Option<Price>,
}

/// Outcome of opening a position.
#[derive(Debug, Clone, Serialize)]
pub struct OpenReceipt {
    /// The trade as recorded, status `OPEN`.
    pub trade: Trade,
    /// Cash balance after the notional debit.
    pub new_balance: Balance,
}

/// Outcome of closing a position.
#[derive(Debug, Clone, Serialize)]
pub struct CloseReceipt {
    /// The finalized trade, status `CLOSED`.
    pub trade: Trade,
    /// Profit or loss fixed at close time.
    pub realized_pnl: Price,
    /// Cash balance after the settlement credit.
    pub new_balance: Balance,
}

/// Open a position: record the trade, then reserve its full notional.
///
/// The debit equals `volume * entry_price` — a simplistic reserve-full-
/// notional model, not real margin. Overdraft is permitted, so the debit
/// never fails.
///
/// # Errors
///
/// Returns a validation error if the order parameters are out of range;
/// in that case no state was touched.
pub fn open_position(state: &mut AccountState, order: OpenOrder) -> Result<OpenReceipt> {
    let trade = Trade::try_open(
        TradeId::new(),
        order.side,
        order.symbol,
        order.volume,
        order.entry_price,
        order.stop_loss,
        order.take_profit,
        Utc::now(),
    )?;

    let notional = trade.notional();
    // Insert before the debit so the trade-set and balance move together
    // under the held cell lock.
    state.book_mut().add_open(trade.clone());
    let new_balance = state.debit(notional);

    info!(
        account_id = %state.account().id(),
        trade_id = %trade.id(),
        side = %trade.side(),
        symbol = trade.symbol(),
        volume = %trade.volume(),
        entry_price = %trade.entry_price(),
        %new_balance,
        "position opened"
    );

    Ok(OpenReceipt { trade, new_balance })
}

/// Close a position: settle P&L and return the reservation plus the gain
/// (or minus the loss).
///
/// The credit is `volume * close_price + pnl`, which algebraically equals
/// `volume * entry_price + pnl` — the notional reserved at open, adjusted
/// by the realized result.
///
/// # Errors
///
/// Returns [`Error::TradeNotFound`] if the id is not currently in the
/// open set; a second close of the same id fails the same way, it is not
/// a no-op. Returns a validation error for a non-positive close price.
pub fn close_position(
    state: &mut AccountState,
    trade_id: &TradeId,
    close_price: Price,
) -> Result<CloseReceipt> {
    if close_price <= Price::ZERO {
        return Err(DomainError::NonPositivePrice {
            field: "close_price",
            price: close_price,
        }
        .into());
    }

    let mut trade = state
        .book_mut()
        .take_open(trade_id)
        .ok_or_else(|| Error::TradeNotFound {
            trade_id: trade_id.clone(),
        })?;

    let realized_pnl = trade.close(close_price, Utc::now());
    let new_balance = state.credit(trade.volume() * close_price + realized_pnl);
    state.book_mut().push_closed(trade.clone());

    info!(
        account_id = %state.account().id(),
        trade_id = %trade.id(),
        %close_price,
        %realized_pnl,
        %new_balance,
        "position closed"
    );

    Ok(CloseReceipt {
        trade,
        realized_pnl,
        new_balance,
    })
}

/// Snapshot of the open positions.
///
/// The underlying book exposes a lazy, restartable iterator; this clones
/// it out so the cell lock can be released before the caller consumes it.
#[must_use]
pub fn list_open(state: &AccountState) -> Vec<Trade> {
    state.book().open_trades().cloned().collect()
}

/// Snapshot of the closed positions, in close order.
#[must_use]
pub fn list_history(state: &AccountState) -> Vec<Trade> {
    state.book().history().to_vec()
}
