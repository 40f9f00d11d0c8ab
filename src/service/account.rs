//! Account service: the operations an external API surface invokes.
//!
//! Composes the ledger store, the position lifecycle, and the robot
//! config store behind one facade, and delegates credential and session
//! handling to the [`Authenticator`] port. Registration aside, every
//! operation is addressed by [`AccountId`] and executes inside that
//! account's exclusion scope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    AccountId, Balance, Price, RobotConfig, RobotParams, Trade, TradeId, STARTING_BALANCE,
};
use crate::error::{Error, Result};
use crate::port::{Authenticator, SessionToken};
use crate::service::ledger::LedgerStore;
use crate::service::lifecycle::{self, CloseReceipt, OpenOrder, OpenReceipt};
use crate::service::robot;

/// Outcome of registering an account.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// Identifier of the freshly created account.
    pub account_id: AccountId,
    /// Always the contract value of 1000.
    pub starting_balance: Balance,
}

/// Point-in-time view of an account for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub cash_balance: Balance,
    pub equity: Balance,
    pub open_position_count: usize,
    pub created_at: DateTime<Utc>,
}

/// The trade-lifecycle engine's public face.
pub struct AccountService<A> {
    ledger: LedgerStore,
    authenticator: A,
}

impl<A: Authenticator> AccountService<A> {
    /// Create a service with an empty ledger.
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self {
            ledger: LedgerStore::new(),
            authenticator,
        }
    }

    /// Register an account and enroll its credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmail`] if the email is already
    /// registered; in that case no credential is enrolled.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        credential: &str,
    ) -> Result<Registration> {
        let account = self.ledger.create_account(name, email)?;
        self.authenticator.enroll(email, credential).await?;
        Ok(Registration {
            account_id: account.id().clone(),
            starting_balance: STARTING_BALANCE,
        })
    }

    /// Verify credentials and obtain a session token. Fully delegated.
    pub async fn authenticate(&self, email: &str, credential: &str) -> Result<SessionToken> {
        self.authenticator.login(email, credential).await
    }

    /// Map a session token to the account it was issued for.
    ///
    /// # Errors
    ///
    /// Token failures surface as auth errors. A token that resolves to an
    /// email with no account cannot happen through this service's own
    /// operations and is reported as an invariant violation.
    pub async fn resolve(&self, token: &SessionToken) -> Result<AccountId> {
        let email = self.authenticator.resolve(token).await?;
        self.ledger.account_id_for(&email).ok_or_else(|| {
            Error::Invariant(format!("authenticated email {email} has no backing account"))
        })
    }

    /// Invalidate a session token.
    pub async fn logout(&self, token: &SessionToken) -> Result<bool> {
        self.authenticator.revoke(token).await
    }

    /// Look up the account id registered for an email.
    #[must_use]
    pub fn account_id_for(&self, email: &str) -> Option<AccountId> {
        self.ledger.account_id_for(email)
    }

    /// Snapshot the account's headline figures.
    pub fn account_info(&self, id: &AccountId) -> Result<AccountInfo> {
        self.ledger.with_account(id, |state| {
            let account = state.account();
            Ok(AccountInfo {
                id: account.id().clone(),
                name: account.name().to_owned(),
                email: account.email().to_owned(),
                cash_balance: account.cash_balance(),
                equity: account.equity(),
                open_position_count: state.book().open_count(),
                created_at: account.created_at(),
            })
        })
    }

    /// Open a position against the account. See [`lifecycle::open_position`].
    pub fn open_position(&self, id: &AccountId, order: OpenOrder) -> Result<OpenReceipt> {
        self.ledger
            .with_account(id, |state| lifecycle::open_position(state, order))
    }

    /// Close a position at the supplied price. See [`lifecycle::close_position`].
    pub fn close_position(
        &self,
        id: &AccountId,
        trade_id: &TradeId,
        close_price: Price,
    ) -> Result<CloseReceipt> {
        self.ledger
            .with_account(id, |state| lifecycle::close_position(state, trade_id, close_price))
    }

    /// Currently open positions.
    pub fn list_open_positions(&self, id: &AccountId) -> Result<Vec<Trade>> {
        self.ledger
            .with_account(id, |state| Ok(lifecycle::list_open(state)))
    }

    /// Closed positions, in close order.
    pub fn list_history(&self, id: &AccountId) -> Result<Vec<Trade>> {
        self.ledger
            .with_account(id, |state| Ok(lifecycle::list_history(state)))
    }

    /// Replace the account's robot config.
    pub fn set_robot_config(&self, id: &AccountId, params: RobotParams) -> Result<RobotConfig> {
        self.ledger
            .with_account(id, |state| Ok(robot::set_config(state, params)))
    }

    /// Read the account's robot config (defaulted, never absent).
    pub fn get_robot_config(&self, id: &AccountId) -> Result<RobotConfig> {
        self.ledger
            .with_account(id, |state| Ok(robot::get_config(state)))
    }
}
