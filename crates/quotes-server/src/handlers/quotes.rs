//! Quote handlers

use crate::error::ApiError;
use crate::extractors::{QuoteBody, QuoteId};
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use quotes_types::MovieQuote;
use tracing::{debug, info};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MovieQuote>>, ApiError> {
    let quotes = state.store.list().await?;
    debug!("Listing {} quotes", quotes.len());
    Ok(Json(quotes))
}

pub async fn get(
    State(state): State<AppState>,
    QuoteId(id): QuoteId,
) -> Result<Json<MovieQuote>, ApiError> {
    let quote = state.store.get(id).await?;
    Ok(Json(quote))
}

pub async fn random(State(state): State<AppState>) -> Result<Json<MovieQuote>, ApiError> {
    let quote = state.store.random().await?;
    debug!("Picked random quote {}", quote.id);
    Ok(Json(quote))
}

pub async fn create(
    State(state): State<AppState>,
    QuoteBody(draft): QuoteBody,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.store.create(draft).await?;
    let location = format!("/api/quotes/{}", quote.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(quote)))
}

pub async fn update(
    State(state): State<AppState>,
    QuoteId(id): QuoteId,
    QuoteBody(draft): QuoteBody,
) -> Result<Json<MovieQuote>, ApiError> {
    let quote = state.store.update(id, draft).await?;
    info!("Updated quote {}", id);
    Ok(Json(quote))
}

pub async fn delete(
    State(state): State<AppState>,
    QuoteId(id): QuoteId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    info!("Deleted quote {}", id);
    Ok(StatusCode::NO_CONTENT)
}
