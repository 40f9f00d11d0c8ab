//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are
//! violated. These errors are returned by `try_new` constructors that
//! validate inputs before any state is touched.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
///
/// These errors are returned by `try_new` constructors and other methods
/// that validate domain rules. They correspond to the `ValidationError`
/// class of failures: the caller fixes the request, retrying is useless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Volume must be positive for trading operations.
    #[error("volume must be positive, got {volume}")]
    NonPositiveVolume {
        /// The invalid volume that was provided.
        volume: rust_decimal::Decimal,
    },

    /// Prices (entry, close, stop-loss, take-profit) must be positive.
    #[error("{field} must be positive, got {price}")]
    NonPositivePrice {
        /// Which price field was invalid.
        field: &'static str,
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Instrument symbols cannot be empty.
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Robot strategy parameters must all be positive.
    #[error("robot parameter {field} must be positive, got {value}")]
    NonPositiveParam {
        /// Which parameter was invalid.
        field: &'static str,
        /// The invalid value, rendered as text.
        value: String,
    },
}
