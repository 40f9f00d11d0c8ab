//! Port definitions: traits the core depends on but does not implement.

mod authenticator;

pub use authenticator::{Authenticator, SessionToken};
