//! Handlers for admin edits and deletes of permanent records.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `PUT`    | `/admin/biases/:id` | Full field update + mitigation upsert |
//! | `DELETE` | `/admin/biases/:id` | Cascading delete, strategy first |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use biasboard_core::{
  record::{Severity, SourceAttrs},
  store::{BiasStore, BiasUpdate},
};

use crate::error::ApiError;

/// JSON body for `PUT /admin/biases/:id`. Carries no `type` field — a
/// record's source kind is immutable after creation, so attempts to edit it
/// are silently ignored at the boundary.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub name:                  Option<String>,
  pub domain:                Option<String>,
  pub description:           Option<String>,
  pub bias_type:             Option<String>,
  pub severity:              Option<String>,
  #[serde(flatten)]
  pub attrs:                 SourceAttrs,
  pub mitigation_strategies: Option<String>,
}

fn require(field: Option<String>) -> Result<String, ApiError> {
  match field {
    Some(v) if !v.is_empty() => Ok(v),
    _ => Err(ApiError::BadRequest("All fields required".into())),
  }
}

impl UpdateBody {
  fn into_update(self) -> Result<BiasUpdate, ApiError> {
    let severity = require(self.severity)?
      .parse::<Severity>()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(BiasUpdate {
      name: require(self.name)?,
      domain: require(self.domain)?,
      description: require(self.description)?,
      bias_type: require(self.bias_type)?,
      severity,
      attrs: self.attrs,
      mitigation_strategies: require(self.mitigation_strategies)?,
    })
  }
}

/// `PUT /admin/biases/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  store
    .update_bias(id, body.into_update()?)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success": true,
    "message": "Bias updated successfully.",
  })))
}

/// `DELETE /admin/biases/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  store.delete_bias(id).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success": true,
    "message": "Bias deleted successfully.",
  })))
}
