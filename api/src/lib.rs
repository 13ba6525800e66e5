//! HTTP layer for the Keystone authentication core.
//!
//! Currently hosts the request authentication guard: actix-web middleware
//! that verifies bearer access tokens and injects an [`AuthContext`] into
//! protected requests.
//!
//! [`AuthContext`]: middleware::AuthContext

pub mod middleware;

pub use middleware::{AuthContext, JwtAuth, OptionalAuth};
