//! Process wiring: bootstrap and the shared application context

pub mod bootstrap;
pub mod context;

pub use bootstrap::{bootstrap, Bootstrap};
pub use context::AppContext;
