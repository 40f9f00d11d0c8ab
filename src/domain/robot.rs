//! Robot strategy-parameter records.
//!
//! At most one [`RobotConfig`] exists per account; a write replaces the
//! prior record wholesale (no merge). Reads on an account that never
//! stored one return [`RobotConfig::contract_default`], which is part of
//! the public contract and must never drift.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Validated strategy parameters, as submitted by a caller.
///
/// All six fields are required; construction through
/// [`RobotParams::try_new`] guarantees they are positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotParams {
    fast_ma: u32,
    slow_ma: u32,
    rsi_period: u32,
    lot_size: Decimal,
    risk_percent: Decimal,
    max_positions: u32,
}

impl RobotParams {
    /// Validate and build a parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveParam`] naming the first field
    /// that is zero or negative.
    pub fn try_new(
        fast_ma: u32,
        slow_ma: u32,
        rsi_period: u32,
        lot_size: Decimal,
        risk_percent: Decimal,
        max_positions: u32,
    ) -> Result<Self, DomainError> {
        fn positive_int(field: &'static str, value: u32) -> Result<(), DomainError> {
            if value == 0 {
                return Err(DomainError::NonPositiveParam {
                    field,
                    value: value.to_string(),
                });
            }
            Ok(())
        }
        fn positive_dec(field: &'static str, value: Decimal) -> Result<(), DomainError> {
            if value <= Decimal::ZERO {
                return Err(DomainError::NonPositiveParam {
                    field,
                    value: value.to_string(),
                });
            }
            Ok(())
        }

        positive_int("fast_ma", fast_ma)?;
        positive_int("slow_ma", slow_ma)?;
        positive_int("rsi_period", rsi_period)?;
        positive_dec("lot_size", lot_size)?;
        positive_dec("risk_percent", risk_percent)?;
        positive_int("max_positions", max_positions)?;

        Ok(Self {
            fast_ma,
            slow_ma,
            rsi_period,
            lot_size,
            risk_percent,
            max_positions,
        })
    }
}

/// A stored strategy-parameter record with its write timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    fast_ma: u32,
    slow_ma: u32,
    rsi_period: u32,
    lot_size: Decimal,
    risk_percent: Decimal,
    max_positions: u32,
    created_at: DateTime<Utc>,
}

impl RobotConfig {
    /// Build a record from validated parameters, stamping the write time.
    #[must_use]
    pub fn from_params(params: RobotParams, created_at: DateTime<Utc>) -> Self {
        Self {
            fast_ma: params.fast_ma,
            slow_ma: params.slow_ma,
            rsi_period: params.rsi_period,
            lot_size: params.lot_size,
            risk_percent: params.risk_percent,
            max_positions: params.max_positions,
            created_at,
        }
    }

    /// The documented default returned when an account never stored a
    /// config: `{fast_ma: 50, slow_ma: 200, rsi_period: 14, lot_size: 0.01,
    /// max_positions: 5, risk_percent: 0.2}`.
    #[must_use]
    pub fn contract_default(created_at: DateTime<Utc>) -> Self {
        Self {
            fast_ma: 50,
            slow_ma: 200,
            rsi_period: 14,
            lot_size: dec!(0.01),
            risk_percent: dec!(0.2),
            max_positions: 5,
            created_at,
        }
    }

    /// Fast moving-average window.
    #[must_use]
    pub fn fast_ma(&self) -> u32 {
        self.fast_ma
    }

    /// Slow moving-average window.
    #[must_use]
    pub fn slow_ma(&self) -> u32 {
        self.slow_ma
    }

    /// RSI lookback period.
    #[must_use]
    pub fn rsi_period(&self) -> u32 {
        self.rsi_period
    }

    /// Lot size per order.
    #[must_use]
    pub fn lot_size(&self) -> Decimal {
        self.lot_size
    }

    /// Risk budget per trade as a fraction.
    #[must_use]
    pub fn risk_percent(&self) -> Decimal {
        self.risk_percent
    }

    /// Maximum simultaneously open positions the robot may hold.
    #[must_use]
    pub fn max_positions(&self) -> u32 {
        self.max_positions
    }

    /// When this record was written.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
