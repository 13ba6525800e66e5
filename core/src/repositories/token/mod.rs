#[path = "trait.rs"]
mod token_trait;

pub use token_trait::TokenRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockTokenRepository;
