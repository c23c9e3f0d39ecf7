//! HTTP handlers

pub mod health;
pub mod quotes;

pub use health::{health, ready, root};
