//! Quotes Types - Pure type definitions shared by the server and its clients
//!
//! This crate contains only pure data types with no async runtime dependencies.

pub mod health;
pub mod quote;

pub use health::*;
pub use quote::*;
