//! Exchange-agnostic domain logic: accounts, trades, P&L, robot configs.

mod account;
mod ids;
mod money;
mod position;
mod robot;
mod trade;

pub mod error;

// Core domain types
pub use account::{Account, STARTING_BALANCE};
pub use ids::{AccountId, TradeId};
pub use money::{Balance, Price, Volume};
pub use position::PositionBook;
pub use robot::{RobotConfig, RobotParams};
pub use trade::{Side, Trade, TradeStatus};
