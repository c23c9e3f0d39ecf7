//! Request extractors

pub mod quote;

pub use quote::{QuoteBody, QuoteId};
