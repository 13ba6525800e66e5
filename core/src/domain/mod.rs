//! Domain layer: entities shared by the token lifecycle and its collaborators.

pub mod entities;

pub use entities::*;
