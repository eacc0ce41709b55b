//! Application services

pub mod props;

pub use props::PropsStore;
