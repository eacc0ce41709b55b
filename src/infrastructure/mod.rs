//! Infrastructure layer: I/O implementations, API client and process wiring
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod client;
pub mod di;
pub mod error;
pub mod traits;

pub use client::WhiskClient;
pub use error::{BootstrapError, ClientError, ClientResult};
