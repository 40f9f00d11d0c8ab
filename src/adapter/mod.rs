//! Adapters implementing the crate's ports.

mod session;

pub use session::SessionAuthenticator;
