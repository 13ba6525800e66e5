//! Business services of the token core.

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{TokenCodec, TokenConfig};
