//! Account records keyed by identity.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::money::Balance;

/// Cash balance every account starts with. Contract value.
pub const STARTING_BALANCE: Balance = dec!(1000);

/// A simulated trading account.
///
/// Created once at registration and retained for the process lifetime;
/// there is no deletion path. `cash_balance` changes only through the
/// ledger's debit/credit operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    email: String,
    cash_balance: Balance,
    equity: Balance,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the contract starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            email: email.into(),
            cash_balance: STARTING_BALANCE,
            equity: STARTING_BALANCE,
            created_at,
        }
    }

    /// Get the account ID.
    #[must_use]
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the email the account is keyed by.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the current cash balance.
    #[must_use]
    pub fn cash_balance(&self) -> Balance {
        self.cash_balance
    }

    /// Get the current equity.
    ///
    /// Tracked in lockstep with the cash balance; no mark-to-market of
    /// open positions is performed.
    #[must_use]
    pub fn equity(&self) -> Balance {
        self.equity
    }

    /// Get when the account was registered.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply a balance delta. Ledger-internal: the only mutation path.
    pub(crate) fn apply(&mut self, delta: Balance) -> Balance {
        self.cash_balance += delta;
        self.equity += delta;
        self.cash_balance
    }
}
