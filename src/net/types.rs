//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response schemas field-for-field so serde
//! round-trips stay lossless. Monetary amounts arrive as plain JSON numbers
//! and timestamps as RFC 3339 strings; both are carried verbatim because
//! formatting for display is a view concern.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The backend wraps JSON payloads as `{ "data": <payload> }`.
///
/// The login token response is the one body delivered unwrapped.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A user profile as returned by `/auth/me` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Display username.
    pub username: String,
    /// Optional given name.
    pub first_name: Option<String>,
    /// Optional family name.
    pub last_name: Option<String>,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

/// Bearer credential issued by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token attached to subsequent requests.
    pub access_token: String,
    /// Token scheme, always `"bearer"` for this backend.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A financial account (checking, savings, credit, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub institution_name: Option<String>,
    pub current_balance: f64,
    pub available_balance: Option<f64>,
    pub currency: String,
    pub is_active: bool,
    pub is_archived: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /accounts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    pub current_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Partial payload for `PUT /accounts/{id}`; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A single ledger transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub amount: f64,
    pub currency: String,
    /// Posting date (ISO 8601 date).
    pub date: String,
    pub description: String,
    pub merchant_name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub is_pending: bool,
    pub is_recurring: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /transactions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionCreate {
    pub account_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

/// Partial payload for `PUT /transactions/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

/// Server-side filters for `GET /transactions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub account_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl TransactionFilter {
    /// Query-string pairs in the order the backend documents them.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(account_id) = self.account_id {
            pairs.push(("account_id", account_id.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date", end_date.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Aggregate balance report from `GET /balances/overview`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BalanceOverview {
    pub total_balance: f64,
    pub total_available_balance: f64,
    pub currency: String,
    pub accounts: Vec<AccountBalance>,
    pub net_worth_trend: Vec<NetWorthPoint>,
    pub last_updated: String,
}

/// Per-account slice of the balance overview.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountBalance {
    pub account_id: i64,
    pub account_name: String,
    pub account_type: String,
    pub institution_name: Option<String>,
    pub current_balance: f64,
    pub available_balance: Option<f64>,
    pub currency: String,
    pub last_updated: String,
}

/// One point on the net-worth trend line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetWorthPoint {
    pub date: String,
    pub balance: f64,
}

/// A dated balance record from `GET /balances/snapshots`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BalanceSnapshot {
    pub id: i64,
    pub account_id: i64,
    pub date: String,
    pub balance: f64,
    pub available_balance: Option<f64>,
    pub currency: String,
    pub created_at: String,
}

/// Server-side filters for `GET /balances/snapshots`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotFilter {
    pub account_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SnapshotFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(account_id) = self.account_id {
            pairs.push(("account_id", account_id.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date", end_date.clone()));
        }
        pairs
    }
}

/// An investment portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub total_value: f64,
    pub currency: String,
    pub is_active: bool,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /portfolios`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PortfolioCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Partial payload for `PUT /portfolios/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PortfolioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
