//! Brand entity model and DTOs.

use brandhub_core::brand::{
    validate_account_email, validate_account_name, validate_brand_budget,
    validate_brand_description, validate_sales_phase,
};
use brandhub_core::error::CoreError;
use brandhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::models::account::{Account, CreateAccount};

/// A brand row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: DbId,
    pub account_id: DbId,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub sales_phase: Option<String>,
    pub budget: Option<i64>,
    pub is_vetted: bool,
    pub pdf_audit: Option<String>,
    pub pdf_review: Option<String>,
    pub profile_live: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields persisted when inserting a new brand.
///
/// `is_vetted` and `profile_live` default to `false` when omitted; the
/// PDF fields stay `NULL`.
#[derive(Debug, Clone)]
pub struct CreateBrand {
    pub description: Option<String>,
    pub sales_phase: Option<String>,
    pub budget: Option<i64>,
    pub is_vetted: Option<bool>,
    pub pdf_audit: Option<String>,
    pub pdf_review: Option<String>,
    pub profile_live: Option<bool>,
}

/// The flat creation payload: account and brand fields in one object,
/// exactly as the client submits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandWithAccount {
    pub name: String,
    pub email: String,
    pub logo: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub sales_phase: Option<String>,
    pub budget: Option<i64>,
    pub is_vetted: Option<bool>,
    pub pdf_audit: Option<String>,
    pub pdf_review: Option<String>,
    pub profile_live: Option<bool>,
}

impl CreateBrandWithAccount {
    /// Check every field against the intake rules. Runs before any
    /// persistence call, so a rejected payload writes nothing.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_account_name(&self.name)?;
        validate_account_email(&self.email)?;
        if let Some(description) = &self.description {
            validate_brand_description(description)?;
        }
        if let Some(sales_phase) = &self.sales_phase {
            validate_sales_phase(sales_phase)?;
        }
        if let Some(budget) = self.budget {
            validate_brand_budget(budget)?;
        }
        Ok(())
    }

    /// Split the flat payload into its account and brand halves.
    pub fn split(self) -> (CreateAccount, CreateBrand) {
        let account = CreateAccount {
            name: self.name,
            email: self.email,
            logo: self.logo,
            region: self.region,
            language: self.language,
        };
        let brand = CreateBrand {
            description: self.description,
            sales_phase: self.sales_phase,
            budget: self.budget,
            is_vetted: self.is_vetted,
            pdf_audit: self.pdf_audit,
            pdf_review: self.pdf_review,
            profile_live: self.profile_live,
        };
        (account, brand)
    }
}

/// A brand joined with its owning account.
///
/// Every brand returned by the API travels in this shape; a bare brand
/// without account context never leaves the repository layer.
#[derive(Debug, Clone, Serialize)]
pub struct BrandWithAccount {
    #[serde(flatten)]
    pub brand: Brand,
    pub account: Account,
}

impl<'r> FromRow<'r, PgRow> for BrandWithAccount {
    /// Built from a joined row: brand columns under their own names,
    /// account columns aliased with an `account_` prefix. The account id
    /// is read from the brand's `account_id` foreign key, which the join
    /// condition guarantees is the same value.
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let brand = Brand::from_row(row)?;
        let account = Account {
            id: row.try_get("account_id")?,
            name: row.try_get("account_name")?,
            email: row.try_get("account_email")?,
            logo: row.try_get("account_logo")?,
            region: row.try_get("account_region")?,
            language: row.try_get("account_language")?,
            created_at: row.try_get("account_created_at")?,
            updated_at: row.try_get("account_updated_at")?,
        };
        Ok(Self { brand, account })
    }
}
