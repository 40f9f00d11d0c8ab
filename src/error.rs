use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{AccountId, TradeId};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Authentication errors surfaced by [`Authenticator`] implementations.
///
/// [`Authenticator`]: crate::port::Authenticator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no credentials enrolled for email {email}")]
    UnknownEmail { email: String },

    #[error("credential rejected for email {email}")]
    BadCredential { email: String },

    #[error("session token is not valid")]
    InvalidToken,

    #[error("session token has expired")]
    ExpiredToken,
}

/// Coarse classification of failures, for callers that map errors onto a
/// wire protocol. Exactly one kind applies to every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input; the caller fixes the request.
    Validation,
    /// Duplicate registration; terminal for that request.
    Conflict,
    /// Unknown account or trade id, including a second close of the same trade.
    NotFound,
    /// Credential or session-token failure.
    Auth,
    /// Internal consistency bug; never user-actionable.
    Invariant,
    /// Process configuration problem.
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("an account is already registered for email {email}")]
    DuplicateEmail { email: String },

    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("trade {trade_id} not found among open positions")]
    TradeNotFound { trade_id: TradeId },

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Signals an internal consistency bug (e.g. a resolved identity with
    /// no backing account). Should never surface in correct operation.
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Classify this error into the public taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::DuplicateEmail { .. } => ErrorKind::Conflict,
            Error::AccountNotFound(_) | Error::TradeNotFound { .. } => ErrorKind::NotFound,
            Error::Auth(_) => ErrorKind::Auth,
            Error::Invariant(_) => ErrorKind::Invariant,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
