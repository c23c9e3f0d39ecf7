//! Movie quote types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored movie quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuote {
    pub id: i32,
    pub quote: String,
    pub movie: String,
}

impl MovieQuote {
    pub fn new(id: i32, draft: QuoteDraft) -> Self {
        Self {
            id,
            quote: draft.quote,
            movie: draft.movie,
        }
    }

    /// Overwrite the text fields, keeping the id
    pub fn apply(&mut self, draft: QuoteDraft) {
        self.quote = draft.quote;
        self.movie = draft.movie;
    }
}

/// Request body for create and update.
///
/// Mirrors [`MovieQuote`] on the wire, but every field is optional so that
/// missing text can be reported as a bad request instead of a decode failure.
/// The `id` is accepted and ignored: ids are always assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub movie: Option<String>,
}

/// Validated quote text, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    pub quote: String,
    pub movie: String,
}

impl QuoteDraft {
    pub fn new(quote: impl Into<String>, movie: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            movie: movie.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl TryFrom<QuotePayload> for QuoteDraft {
    type Error = DraftError;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        let quote = required(payload.quote, "quote")?;
        let movie = required(payload.movie, "movie")?;
        Ok(Self { quote, movie })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DraftError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(DraftError::MissingField(field)),
    }
}
