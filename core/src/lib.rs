//! # Keystone Core
//!
//! Core token lifecycle and domain layer for the Keystone authentication
//! service. This crate contains the domain entities, the token codec, the
//! lifecycle service (login, refresh, logout), repository interfaces, and
//! error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessClaims, RefreshClaims, RefreshTokenRecord, TokenPair};
pub use domain::entities::{User, UserRole};
pub use errors::*;
pub use repositories::{TokenRepository, UserRepository};
pub use services::{AuthService, TokenCodec, TokenConfig};
