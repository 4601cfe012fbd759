//! Integration tests for the brand repository.
//!
//! Exercises the repository layer against a real database:
//! - Atomic account + brand creation and the joined read-back
//! - Empty and populated listing
//! - Rollback when the second insert fails
//! - The one-brand-per-account unique constraint

use brandhub_db::models::account::CreateAccount;
use brandhub_db::models::brand::CreateBrand;
use brandhub_db::repositories::BrandRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_account(name: &str, email: &str) -> CreateAccount {
    CreateAccount {
        name: name.to_string(),
        email: email.to_string(),
        logo: Some("logo.png".to_string()),
        region: Some("US".to_string()),
        language: Some("en".to_string()),
    }
}

fn new_brand(description: &str, budget: Option<i64>) -> CreateBrand {
    CreateBrand {
        description: Some(description.to_string()),
        sales_phase: Some("LEAD".to_string()),
        budget,
        is_vetted: None,
        pdf_audit: None,
        pdf_review: None,
        profile_live: None,
    }
}

async fn count_accounts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: Creation returns the submitted fields joined with the account
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_returns_joined_pair(pool: PgPool) {
    let created = BrandRepo::create_with_account(
        &pool,
        &new_account("Acme", "a@acme.co"),
        &new_brand("d", Some(1000)),
    )
    .await
    .unwrap();

    // Account sub-fields equal the submitted values.
    assert_eq!(created.account.name, "Acme");
    assert_eq!(created.account.email, "a@acme.co");
    assert_eq!(created.account.logo.as_deref(), Some("logo.png"));
    assert_eq!(created.account.region.as_deref(), Some("US"));
    assert_eq!(created.account.language.as_deref(), Some("en"));

    // Brand sub-fields equal the submitted values.
    assert_eq!(created.brand.description.as_deref(), Some("d"));
    assert_eq!(created.brand.sales_phase.as_deref(), Some("LEAD"));
    assert_eq!(created.brand.budget, Some(1000));
    assert_eq!(created.brand.pdf_audit, None);
    assert_eq!(created.brand.pdf_review, None);

    // Omitted booleans default to false.
    assert!(!created.brand.is_vetted);
    assert!(!created.brand.profile_live);

    // The embedded account is the brand's owner.
    assert_eq!(created.account.id, created.brand.account_id);
}

// ---------------------------------------------------------------------------
// Test: Explicit boolean values are persisted as given
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_persists_explicit_booleans(pool: PgPool) {
    let brand = CreateBrand {
        is_vetted: Some(true),
        profile_live: Some(true),
        ..new_brand("vetted", None)
    };
    let created = BrandRepo::create_with_account(&pool, &new_account("V", "v@v.co"), &brand)
        .await
        .unwrap();

    assert!(created.brand.is_vetted);
    assert!(created.brand.profile_live);
}

// ---------------------------------------------------------------------------
// Test: Listing with zero brands returns an empty vec, not an error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_empty(pool: PgPool) {
    let brands = BrandRepo::list_with_account(&pool, None, None).await.unwrap();
    assert!(brands.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Listing returns every brand with its account embedded
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_returns_all_with_accounts(pool: PgPool) {
    for i in 0..3 {
        BrandRepo::create_with_account(
            &pool,
            &new_account(&format!("Acct {i}"), &format!("a{i}@acme.co")),
            &new_brand(&format!("brand {i}"), Some(i * 100)),
        )
        .await
        .unwrap();
    }

    let brands = BrandRepo::list_with_account(&pool, None, None).await.unwrap();
    assert_eq!(brands.len(), 3);
    for entry in &brands {
        assert_eq!(entry.account.id, entry.brand.account_id);
    }
}

// ---------------------------------------------------------------------------
// Test: Limit and offset are applied
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_pagination(pool: PgPool) {
    for i in 0..3 {
        BrandRepo::create_with_account(
            &pool,
            &new_account(&format!("Acct {i}"), &format!("a{i}@acme.co")),
            &new_brand(&format!("brand {i}"), None),
        )
        .await
        .unwrap();
    }

    let page = BrandRepo::list_with_account(&pool, Some(2), None).await.unwrap();
    assert_eq!(page.len(), 2);

    let rest = BrandRepo::list_with_account(&pool, Some(2), Some(2)).await.unwrap();
    assert_eq!(rest.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: A failing brand insert rolls back the account insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_failed_brand_insert_leaves_no_orphan_account(pool: PgPool) {
    // A negative budget violates ck_brands_budget_non_negative at the SQL
    // layer, failing the second insert of the pair.
    let result = BrandRepo::create_with_account(
        &pool,
        &new_account("Orphan Candidate", "o@o.co"),
        &new_brand("bad", Some(-1)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(count_accounts(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: One brand per account is enforced by uq_brands_account_id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_second_brand_for_account_violates_unique(pool: PgPool) {
    let created = BrandRepo::create_with_account(
        &pool,
        &new_account("Solo", "s@s.co"),
        &new_brand("first", None),
    )
    .await
    .unwrap();

    let err = sqlx::query("INSERT INTO brands (account_id) VALUES ($1)")
        .bind(created.brand.account_id)
        .execute(&pool)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_brands_account_id"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: find_with_account returns None for an unknown id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_unknown_id_returns_none(pool: PgPool) {
    let found = BrandRepo::find_with_account(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}
