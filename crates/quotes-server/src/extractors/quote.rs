//! Quote id and body extractors
//!
//! Both reject with a bare 400 instead of axum's default rejections
//! (415/422 with a text body).

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use quotes_types::{QuoteDraft, QuotePayload};

/// Quote id taken from the `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct QuoteId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for QuoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(QuoteId(id))
    }
}

/// JSON body with `quote` and `movie` present and non-empty
#[derive(Debug, Clone)]
pub struct QuoteBody(pub QuoteDraft);

#[async_trait]
impl<S> FromRequest<S> for QuoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<QuotePayload>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let draft =
            QuoteDraft::try_from(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(QuoteBody(draft))
    }
}
