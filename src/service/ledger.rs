//! Ledger store: one lockable cell per account.
//!
//! Accounts live in a sharded [`DashMap`] keyed by [`AccountId`], each
//! wrapped in its own `parking_lot::Mutex`. That mutex is the per-account
//! exclusion scope required by the trade lifecycle: balance mutation,
//! position-book mutation, and robot-config writes for one account all
//! happen under the one lock, while operations on different accounts run
//! in parallel with no global coordination.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::{Account, AccountId, Balance, PositionBook, RobotConfig};
use crate::error::{Error, Result};

/// Everything the ledger guards for one account.
///
/// Obtainable only through [`LedgerStore::with_account`], so any reachable
/// `&mut AccountState` is already inside the account's exclusion scope.
#[derive(Debug)]
pub struct AccountState {
    account: Account,
    book: PositionBook,
    robot: Option<RobotConfig>,
}

impl AccountState {
    fn new(account: Account) -> Self {
        Self {
            account,
            book: PositionBook::new(),
            robot: None,
        }
    }

    /// Get the account record.
    #[must_use]
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Get the position book.
    #[must_use]
    pub fn book(&self) -> &PositionBook {
        &self.book
    }

    pub(crate) fn book_mut(&mut self) -> &mut PositionBook {
        &mut self.book
    }

    /// Get the stored robot config, if one was ever written.
    #[must_use]
    pub fn robot(&self) -> Option<&RobotConfig> {
        self.robot.as_ref()
    }

    pub(crate) fn set_robot(&mut self, config: RobotConfig) {
        self.robot = Some(config);
    }

    /// Reduce the cash balance by a non-negative magnitude.
    ///
    /// The store never rejects: overdraft is accepted simulation
    /// behavior, so the resulting balance may be negative. Direction is
    /// the caller's decision; the amount is always a magnitude.
    pub fn debit(&mut self, amount: Balance) -> Balance {
        let balance = self.account.apply(-amount);
        debug!(account_id = %self.account.id(), %amount, %balance, "ledger debit");
        balance
    }

    /// Increase the cash balance by a non-negative magnitude.
    pub fn credit(&mut self, amount: Balance) -> Balance {
        let balance = self.account.apply(amount);
        debug!(account_id = %self.account.id(), %amount, %balance, "ledger credit");
        balance
    }
}

/// Owns every account for the process lifetime.
#[derive(Debug, Default)]
pub struct LedgerStore {
    accounts: DashMap<AccountId, Arc<Mutex<AccountState>>>,
    emails: DashMap<String, AccountId>,
}

impl LedgerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account, enforcing email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmail`] if an account already exists for
    /// the email. The uniqueness check and the insert are one atomic step
    /// on the email index.
    pub fn create_account(&self, name: &str, email: &str) -> Result<Account> {
        match self.emails.entry(email.to_owned()) {
            Entry::Occupied(_) => Err(Error::DuplicateEmail {
                email: email.to_owned(),
            }),
            Entry::Vacant(vacant) => {
                let account = Account::new(name, email, chrono::Utc::now());
                let id = account.id().clone();
                self.accounts
                    .insert(id.clone(), Arc::new(Mutex::new(AccountState::new(account.clone()))));
                vacant.insert(id);
                info!(account_id = %account.id(), email, "account registered");
                Ok(account)
            }
        }
    }

    /// Look up the account id registered for an email.
    #[must_use]
    pub fn account_id_for(&self, email: &str) -> Option<AccountId> {
        self.emails.get(email).map(|entry| entry.value().clone())
    }

    /// Run `f` inside the account's exclusion scope.
    ///
    /// The cell lock is held for the duration of `f`; nothing in `f` may
    /// block on I/O. The `Arc` is cloned out of the map first so the map
    /// shard lock is not held while `f` runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccountNotFound`] for an unknown id, plus whatever
    /// `f` returns.
    pub fn with_account<T>(
        &self,
        id: &AccountId,
        f: impl FnOnce(&mut AccountState) -> Result<T>,
    ) -> Result<T> {
        let cell = self
            .accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::AccountNotFound(id.clone()))?;
        let mut state = cell.lock();
        f(&mut state)
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
