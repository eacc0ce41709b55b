//! Domain layer: entities and parsing rules
//!
//! This layer is independent of external concerns (no file I/O, no CLI, no HTTP).

pub mod entities;
pub mod error;

pub use entities::*;
pub use error::DomainError;
