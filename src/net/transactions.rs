//! Transaction endpoints.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use super::http::{self, ApiError};
use super::types::{Envelope, Transaction, TransactionCreate, TransactionFilter, TransactionUpdate};

fn transaction_endpoint(id: i64) -> String {
    format!("/transactions/{id}")
}

/// List transactions via `GET /transactions`, filtered server-side.
pub async fn list(filter: &TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
    let envelope: Envelope<Vec<Transaction>> =
        http::get_json_query("/transactions", &filter.query_pairs()).await?;
    Ok(envelope.data)
}

/// Fetch one transaction via `GET /transactions/{id}`.
pub async fn get(id: i64) -> Result<Transaction, ApiError> {
    let envelope: Envelope<Transaction> = http::get_json(&transaction_endpoint(id)).await?;
    Ok(envelope.data)
}

/// Create a transaction via `POST /transactions`.
pub async fn create(request: &TransactionCreate) -> Result<Transaction, ApiError> {
    let envelope: Envelope<Transaction> = http::post_json("/transactions", request).await?;
    Ok(envelope.data)
}

/// Update a transaction via `PUT /transactions/{id}`.
pub async fn update(id: i64, request: &TransactionUpdate) -> Result<Transaction, ApiError> {
    let envelope: Envelope<Transaction> =
        http::put_json(&transaction_endpoint(id), request).await?;
    Ok(envelope.data)
}

/// Delete a transaction via `DELETE /transactions/{id}`.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&transaction_endpoint(id)).await
}
