//! In-memory session authenticator.
//!
//! Issues opaque UUID session tokens with a configurable TTL. Credential
//! material is stored and compared as given; hashing schemes are the
//! concern of heavier [`Authenticator`] implementations behind the same
//! port.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::error::{AuthError, Result};
use crate::port::{Authenticator, SessionToken};

#[derive(Debug, Clone)]
struct Session {
    email: String,
    expires_at: DateTime<Utc>,
}

/// Authenticator backed by process-local maps.
#[derive(Debug)]
pub struct SessionAuthenticator {
    credentials: DashMap<String, String>,
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionAuthenticator {
    /// Create an authenticator whose tokens live for `ttl_hours`.
    #[must_use]
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            credentials: DashMap::new(),
            sessions: DashMap::new(),
            ttl: Duration::hours(ttl_hours),
        }
    }
}

impl Authenticator for SessionAuthenticator {
    async fn enroll(&self, email: &str, credential: &str) -> Result<()> {
        self.credentials
            .insert(email.to_owned(), credential.to_owned());
        Ok(())
    }

    async fn login(&self, email: &str, credential: &str) -> Result<SessionToken> {
        let stored = self
            .credentials
            .get(email)
            .ok_or_else(|| AuthError::UnknownEmail {
                email: email.to_owned(),
            })?;
        if stored.value().as_str() != credential {
            return Err(AuthError::BadCredential {
                email: email.to_owned(),
            }
            .into());
        }

        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                email: email.to_owned(),
                expires_at: Utc::now() + self.ttl,
            },
        );
        Ok(SessionToken::new(token))
    }

    async fn resolve(&self, token: &SessionToken) -> Result<String> {
        let session = self
            .sessions
            .get(token.as_str())
            .ok_or(AuthError::InvalidToken)?;
        if session.expires_at < Utc::now() {
            drop(session);
            self.sessions.remove(token.as_str());
            return Err(AuthError::ExpiredToken.into());
        }
        Ok(session.email.clone())
    }

    async fn revoke(&self, token: &SessionToken) -> Result<bool> {
        Ok(self.sessions.remove(token.as_str()).is_some())
    }
}
