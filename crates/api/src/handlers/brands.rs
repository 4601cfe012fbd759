//! Handlers for the `/brands` resource.
//!
//! Creation accepts one flat payload carrying both the account and brand
//! fields; the two rows are written in a single transaction and the
//! response is the brand joined with the account it now owns.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::error::CoreError;
use brandhub_core::types::DbId;
use brandhub_db::models::brand::{BrandWithAccount, CreateBrandWithAccount};
use brandhub_db::repositories::BrandRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/brands
///
/// Validates the payload before touching the database, so a rejected
/// request persists nothing. On success both writes have committed and
/// the joined pair is returned with 201.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrandWithAccount>,
) -> AppResult<(StatusCode, Json<BrandWithAccount>)> {
    input.validate()?;
    let (account, brand) = input.split();
    let created = BrandRepo::create_with_account(&state.pool, &account, &brand).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/brands
///
/// Every entry embeds its owning account. Newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<BrandWithAccount>>> {
    let brands = BrandRepo::list_with_account(&state.pool, params.limit, params.offset).await?;
    Ok(Json(brands))
}

/// GET /api/v1/brands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BrandWithAccount>> {
    let brand = BrandRepo::find_with_account(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id,
        }))?;
    Ok(Json(brand))
}
