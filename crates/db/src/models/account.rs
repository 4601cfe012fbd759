//! Account entity model and DTOs.

use brandhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An account row from the `accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub logo: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields persisted when inserting a new account.
///
/// Built by splitting the flat creation payload; never deserialized
/// directly from a request body.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub logo: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
}
