//! Service layer: ledger store, position lifecycle, robot config store,
//! and the account service facade that composes them.

mod account;
pub mod ledger;
pub mod lifecycle;
pub mod robot;

pub use account::{AccountInfo, AccountService, Registration};
pub use ledger::{AccountState, LedgerStore};
pub use lifecycle::{CloseReceipt, OpenOrder, OpenReceipt};
