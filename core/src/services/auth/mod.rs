//! Authentication service module
//!
//! Owns the session lifecycle built on the dual-token scheme:
//! - `login` opens a session and returns an access/refresh token pair
//! - `refresh_access_token` mints new access tokens, never rotating the
//!   refresh token
//! - `logout` revokes the session, idempotently
//! - `register` creates users with bcrypt-hashed passwords

mod password;
mod service;


pub use password::{hash_password, verify_password};
pub use service::AuthService;
