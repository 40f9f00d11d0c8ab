//! Robot config store: at most one strategy-parameter record per account.

use chrono::Utc;
use tracing::info;

use crate::domain::{RobotConfig, RobotParams};
use crate::service::ledger::AccountState;

/// Replace the account's robot config wholesale and stamp the write time.
///
/// Parameter validation happened at [`RobotParams::try_new`]; by the time
/// a value of that type exists, the write cannot fail.
pub fn set_config(state: &mut AccountState, params: RobotParams) -> RobotConfig {
    let config = RobotConfig::from_params(params, Utc::now());
    state.set_robot(config.clone());
    info!(account_id = %state.account().id(), "robot config replaced");
    config
}

/// Read the account's robot config.
///
/// Never absent: accounts that have not stored one get the documented
/// contract default.
#[must_use]
pub fn get_config(state: &AccountState) -> RobotConfig {
    state
        .robot()
        .cloned()
        .unwrap_or_else(|| RobotConfig::contract_default(Utc::now()))
}
