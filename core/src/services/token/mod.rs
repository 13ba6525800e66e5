//! Token codec module for JWT handling
//!
//! This module owns everything about token strings:
//! - Access and refresh token signing, each under its own secret and TTL
//! - Verification with strict expiry (zero leeway), nbf, issuer and
//!   audience checks
//! - Signature-blind decoding for server-side-state lookups

mod codec;
mod config;


pub use codec::TokenCodec;
pub use config::TokenConfig;
