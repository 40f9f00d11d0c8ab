//! Trade records and the realized P&L sign convention.
//!
//! A [`Trade`] is created `Open` when a position is opened and transitions
//! to `Closed` exactly once. The closed state is terminal and carries the
//! settlement data (close price, close time, realized P&L), so a closed
//! trade cannot be mutated afterwards.
//!
//! # P&L sign convention
//!
//! For BUY, `pnl = (close_price - entry_price) * volume`; for SELL,
//! `pnl = (entry_price - close_price) * volume`. BUY profits when the
//! price rises, SELL profits when it falls.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::TradeId;
use super::money::{Price, Volume};

/// Direction of a simulated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Long: profits when the price rises.
    Buy,
    /// Short: profits when the price falls.
    Sell,
}

impl Side {
    /// Realized P&L for a position on this side.
    ///
    /// This is the single authoritative P&L formula; all settlement goes
    /// through it.
    #[must_use]
    pub fn realized_pnl(self, entry_price: Price, close_price: Price, volume: Volume) -> Price {
        match self {
            Side::Buy => (close_price - entry_price) * volume,
            Side::Sell => (entry_price - close_price) * volume,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Status of a trade.
///
/// `Closed` carries the settlement fields so they cannot exist on an open
/// trade and cannot change after close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum TradeStatus {
    /// Position is live; no settlement data yet.
    Open,
    /// Position is settled. Terminal.
    Closed {
        /// Price the position was settled at.
        close_price: Price,
        /// When the position was settled.
        closed_at: DateTime<Utc>,
        /// Profit or loss fixed at close time.
        realized_pnl: Price,
    },
}

impl TradeStatus {
    /// Returns true if the trade is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, TradeStatus::Open)
    }

    /// Returns true if the trade is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, TradeStatus::Closed { .. })
    }
}

/// A simulated position owned by exactly one account for its entire life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    id: TradeId,
    side: Side,
    symbol: String,
    volume: Volume,
    entry_price: Price,
    stop_loss: Option<Price>,
    take_profit: Option<Price>,
    opened_at: DateTime<Utc>,
    #[serde(flatten)]
    status: TradeStatus,
}

impl Trade {
    /// Create a new open trade, validating the order parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the volume or entry price is not
    /// positive, the symbol is empty, or an advisory stop level is not
    /// positive.
    pub fn try_open(
        id: TradeId,
        side: Side,
        symbol: impl Into<String>,
        volume: Volume,
        entry_price: Price,
        stop_loss: Option<Price>,
        take_profit: Option<Price>,
        opened_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let symbol = symbol.into();
        if volume <= Price::ZERO {
            return Err(DomainError::NonPositiveVolume { volume });
        }
        if entry_price <= Price::ZERO {
            return Err(DomainError::NonPositivePrice {
                field: "entry_price",
                price: entry_price,
            });
        }
        if symbol.trim().is_empty() {
            return Err(DomainError::EmptySymbol);
        }
        if let Some(price) = stop_loss {
            if price <= Price::ZERO {
                return Err(DomainError::NonPositivePrice {
                    field: "stop_loss",
                    price,
                });
            }
        }
        if let Some(price) = take_profit {
            if price <= Price::ZERO {
                return Err(DomainError::NonPositivePrice {
                    field: "take_profit",
                    price,
                });
            }
        }

        Ok(Self {
            id,
            side,
            symbol,
            volume,
            entry_price,
            stop_loss,
            take_profit,
            opened_at,
            status: TradeStatus::Open,
        })
    }

    /// Get the trade ID.
    #[must_use]
    pub fn id(&self) -> &TradeId {
        &self.id
    }

    /// Get the side.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Get the entry price.
    #[must_use]
    pub fn entry_price(&self) -> Price {
        self.entry_price
    }

    /// Get the advisory stop-loss level, if any. Not enforced by the core.
    #[must_use]
    pub fn stop_loss(&self) -> Option<Price> {
        self.stop_loss
    }

    /// Get the advisory take-profit level, if any. Not enforced by the core.
    #[must_use]
    pub fn take_profit(&self) -> Option<Price> {
        self.take_profit
    }

    /// Get when the position was opened.
    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> &TradeStatus {
        &self.status
    }

    /// Returns true if the trade is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Notional value at entry (`volume * entry_price`), the amount the
    /// ledger reserved when the position was opened.
    #[must_use]
    pub fn notional(&self) -> Price {
        self.volume * self.entry_price
    }

    /// Realized P&L once closed, `None` while open.
    #[must_use]
    pub fn realized_pnl(&self) -> Option<Price> {
        match self.status {
            TradeStatus::Open => None,
            TradeStatus::Closed { realized_pnl, .. } => Some(realized_pnl),
        }
    }

    /// Settle the trade at the given price and return the realized P&L.
    ///
    /// Only the position book calls this, after removing the trade from
    /// the open set, so a closed trade can never be settled twice.
    pub(crate) fn close(&mut self, close_price: Price, closed_at: DateTime<Utc>) -> Price {
        let realized_pnl = self.side.realized_pnl(self.entry_price, close_price, self.volume);
        self.status = TradeStatus::Closed {
            close_price,
            closed_at,
            realized_pnl,
        };
        realized_pnl
    }
}
