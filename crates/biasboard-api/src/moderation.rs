//! Handlers for the moderation queue under `/admin`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/admin/pending-biases` | Queue summary |
//! | `GET`  | `/admin/pending-bias/:id` | Full pending detail |
//! | `POST` | `/admin/approve-bias` | Body `{id}`; promotes atomically |
//! | `POST` | `/admin/decline-bias` | Body `{id}`; idempotent discard |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use biasboard_core::store::BiasStore;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct IdBody {
  pub id: i64,
}

/// `GET /admin/pending-biases`
pub async fn list_pending<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let biases = store.list_pending().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "biases": biases })))
}

/// `GET /admin/pending-bias/:id`
pub async fn get_pending<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let bias = store
    .get_pending(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound("Bias not found".into()))?;
  Ok(Json(json!({ "success": true, "bias": bias })))
}

/// `POST /admin/approve-bias` — the four-step promotion runs as one
/// transaction in the store.
pub async fn approve<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<IdBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  store.approve(body.id).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success": true,
    "message": "Bias approved and linked to mitigation strategy",
  })))
}

/// `POST /admin/decline-bias` — succeeds whether or not the id exists.
pub async fn decline<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<IdBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  store.decline(body.id).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "message": "Bias declined" })))
}
