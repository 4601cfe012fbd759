//! Repository for the `brands` table and its account join.

use brandhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use brandhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::CreateAccount;
use crate::models::brand::{BrandWithAccount, CreateBrand};

/// Column list for brand-with-account joins.
///
/// Brand columns keep their bare names so `Brand`'s `FromRow` applies to
/// the joined row; account columns are aliased with an `account_` prefix
/// for the manual `BrandWithAccount` mapping.
const JOINED_COLUMNS: &str =
    "b.id, b.account_id, b.description, b.sales_phase, b.budget, b.is_vetted, \
     b.pdf_audit, b.pdf_review, b.profile_live, b.created_at, b.updated_at, \
     a.name AS account_name, a.email AS account_email, a.logo AS account_logo, \
     a.region AS account_region, a.language AS account_language, \
     a.created_at AS account_created_at, a.updated_at AS account_updated_at";

/// Provides creation and read operations for brands. A brand never leaves
/// this layer without its owning account.
pub struct BrandRepo;

impl BrandRepo {
    /// Insert a new account and its brand as one transaction, then
    /// re-fetch the pair through the join path.
    ///
    /// Runs in a transaction: if the brand insert fails, the account
    /// insert rolls back with it and nothing persists.
    ///
    /// If `is_vetted` or `profile_live` is `None`, defaults to `false`.
    pub async fn create_with_account(
        pool: &PgPool,
        account: &CreateAccount,
        brand: &CreateBrand,
    ) -> Result<BrandWithAccount, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let account_id: DbId = sqlx::query_scalar(
            "INSERT INTO accounts (name, email, logo, region, language)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.logo)
        .bind(&account.region)
        .bind(&account.language)
        .fetch_one(&mut *tx)
        .await?;

        let brand_id: DbId = sqlx::query_scalar(
            "INSERT INTO brands
                (account_id, description, sales_phase, budget, is_vetted,
                 pdf_audit, pdf_review, profile_live)
             VALUES ($1, $2, $3, $4, COALESCE($5, false), $6, $7, COALESCE($8, false))
             RETURNING id",
        )
        .bind(account_id)
        .bind(&brand.description)
        .bind(&brand.sales_phase)
        .bind(brand.budget)
        .bind(brand.is_vetted)
        .bind(&brand.pdf_audit)
        .bind(&brand.pdf_review)
        .bind(brand.profile_live)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_with_account(pool, brand_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a brand by its ID, joined with its owning account.
    pub async fn find_with_account(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BrandWithAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM brands b
             JOIN accounts a ON a.id = b.account_id
             WHERE b.id = $1"
        );
        sqlx::query_as::<_, BrandWithAccount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List brands joined with their accounts, newest first.
    pub async fn list_with_account(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<BrandWithAccount>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM brands b
             JOIN accounts a ON a.id = b.account_id
             ORDER BY b.created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BrandWithAccount>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
