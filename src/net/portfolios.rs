//! Portfolio endpoints.

use super::http::{self, ApiError};
use super::types::{Envelope, Portfolio, PortfolioCreate, PortfolioUpdate};

fn portfolio_endpoint(id: i64) -> String {
    format!("/portfolios/{id}")
}

/// List the user's portfolios via `GET /portfolios`.
pub async fn list() -> Result<Vec<Portfolio>, ApiError> {
    let envelope: Envelope<Vec<Portfolio>> = http::get_json("/portfolios").await?;
    Ok(envelope.data)
}

/// Fetch one portfolio via `GET /portfolios/{id}`.
pub async fn get(id: i64) -> Result<Portfolio, ApiError> {
    let envelope: Envelope<Portfolio> = http::get_json(&portfolio_endpoint(id)).await?;
    Ok(envelope.data)
}

/// Create a portfolio via `POST /portfolios`.
pub async fn create(request: &PortfolioCreate) -> Result<Portfolio, ApiError> {
    let envelope: Envelope<Portfolio> = http::post_json("/portfolios", request).await?;
    Ok(envelope.data)
}

/// Update a portfolio via `PUT /portfolios/{id}`.
pub async fn update(id: i64, request: &PortfolioUpdate) -> Result<Portfolio, ApiError> {
    let envelope: Envelope<Portfolio> = http::put_json(&portfolio_endpoint(id), request).await?;
    Ok(envelope.data)
}

/// Delete a portfolio via `DELETE /portfolios/{id}`.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&portfolio_endpoint(id)).await
}
