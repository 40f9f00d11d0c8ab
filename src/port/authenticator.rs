//! Authenticator port: maps caller credentials and tokens to identities.
//!
//! The core never inspects credential material or token contents; any
//! mechanism that maps a token back to a stable email identity is
//! conformant (signed tokens, opaque session ids, capability tokens).
//!
//! # Implementation Notes
//!
//! - Implementations must be thread-safe (`Send + Sync`)
//! - Methods return futures that can be awaited; real implementations may
//!   do I/O, the core never calls these while holding an account lock

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An opaque session token bound to an email identity.
///
/// The inner String is private; the core treats tokens as capability
/// values and never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an implementation-issued token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token as a string slice, e.g. to place in a wire header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credential and session operations delegated by the account service.
pub trait Authenticator: Send + Sync {
    /// Store credential material for an email at registration time.
    fn enroll(&self, email: &str, credential: &str) -> impl Future<Output = Result<()>> + Send;

    /// Verify credentials and issue a session token bound to the email.
    fn login(
        &self,
        email: &str,
        credential: &str,
    ) -> impl Future<Output = Result<SessionToken>> + Send;

    /// Map a token back to the email identity it was issued for.
    fn resolve(&self, token: &SessionToken) -> impl Future<Output = Result<String>> + Send;

    /// Invalidate a token. Returns true if the token was live.
    fn revoke(&self, token: &SessionToken) -> impl Future<Output = Result<bool>> + Send;
}
