//! Account endpoints.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use super::http::{self, ApiError};
use super::types::{Account, AccountCreate, AccountUpdate, Envelope};

fn account_endpoint(id: i64) -> String {
    format!("/accounts/{id}")
}

/// List the user's accounts via `GET /accounts`.
pub async fn list() -> Result<Vec<Account>, ApiError> {
    let envelope: Envelope<Vec<Account>> = http::get_json("/accounts").await?;
    Ok(envelope.data)
}

/// Fetch one account via `GET /accounts/{id}`.
pub async fn get(id: i64) -> Result<Account, ApiError> {
    let envelope: Envelope<Account> = http::get_json(&account_endpoint(id)).await?;
    Ok(envelope.data)
}

/// Create an account via `POST /accounts`.
pub async fn create(request: &AccountCreate) -> Result<Account, ApiError> {
    let envelope: Envelope<Account> = http::post_json("/accounts", request).await?;
    Ok(envelope.data)
}

/// Update an account via `PUT /accounts/{id}`.
pub async fn update(id: i64, request: &AccountUpdate) -> Result<Account, ApiError> {
    let envelope: Envelope<Account> = http::put_json(&account_endpoint(id), request).await?;
    Ok(envelope.data)
}

/// Delete an account via `DELETE /accounts/{id}`.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&account_endpoint(id)).await
}
