//! wsk: command-line client for a serverless actions platform
//!
//! Startup builds one [`AppContext`](infrastructure::di::AppContext) from the
//! props file and `WSK_*` environment overrides; every command borrows it.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
