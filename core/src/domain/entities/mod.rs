pub mod token;
pub mod user;

pub use token::{AccessClaims, RefreshClaims, RefreshTokenRecord, TokenPair};
pub use user::{User, UserRole};
