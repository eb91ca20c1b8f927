//! Client-side authentication session lifecycle.
//!
//! `SessionStore` is the single source of truth for "is the user logged
//! in"; `secrets` is the durable storage it persists the token to.

pub mod secrets;
pub mod store;

pub use secrets::{SecretFile, TOKEN_KEY, TokenStore, mask_token};
pub use store::{Session, SessionStatus, SessionStore};
