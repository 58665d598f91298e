//! Handlers for the public `/api/biases` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/biases` | End-user intake; queues a pending request |
//! | `POST` | `/api/biases/admin` | Direct insert; needs a known submitter |
//! | `GET`  | `/api/biases` | `?search=&severity=&biasType=&componentType=` |
//! | `GET`  | `/api/biases/:id` | Detail incl. aggregated occurrence count |
//! | `GET`  | `/api/bias-types` | Distinct categories for the filter bar |
//! | `GET`  | `/api/users` | Non-admin users with submission counts |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use biasboard_core::{
  record::{Severity, SourceAttrs, SourceKind},
  store::{BiasQuery, BiasStore},
  submission::NewSubmission,
};

use crate::error::ApiError;

// ─── Intake ───────────────────────────────────────────────────────────────────

/// JSON body accepted by both intake endpoints. Required fields are checked
/// here rather than by serde so their absence reports 400, not a
/// deserialisation rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  #[serde(rename = "type")]
  pub source_kind:           Option<String>,
  pub name:                  Option<String>,
  pub domain:                Option<String>,
  pub description:           Option<String>,
  pub bias_type:             Option<String>,
  pub severity:              Option<String>,
  #[serde(flatten)]
  pub attrs:                 SourceAttrs,
  pub mitigation_strategies: Option<String>,
  pub submitted_by:          Option<i64>,
}

fn require(field: Option<String>) -> Result<String, ApiError> {
  match field {
    Some(v) if !v.is_empty() => Ok(v),
    _ => Err(ApiError::BadRequest("All fields required".into())),
  }
}

impl SubmitBody {
  fn into_submission(self) -> Result<NewSubmission, ApiError> {
    let source_kind = require(self.source_kind)?
      .parse::<SourceKind>()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let severity = require(self.severity)?
      .parse::<Severity>()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(NewSubmission {
      source_kind,
      name: require(self.name)?,
      domain: require(self.domain)?,
      description: require(self.description)?,
      bias_type: require(self.bias_type)?,
      severity,
      attrs: self.attrs,
      mitigation_strategies: require(self.mitigation_strategies)?,
      submitted_by: self.submitted_by,
    })
  }
}

/// `POST /api/biases` — queues the report for moderation.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  store
    .submit(body.into_submission()?)
    .await
    .map_err(ApiError::from_store)?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "Bias submitted for review",
    })),
  ))
}

/// `POST /api/biases/admin` — inserts straight into the permanent set;
/// the submitter must resolve to a known user.
pub async fn submit_admin<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let submitter = body
    .submitted_by
    .ok_or_else(|| ApiError::BadRequest("All fields required".into()))?;

  store
    .insert_approved(submitter, body.into_submission()?)
    .await
    .map_err(ApiError::from_store)?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "Bias submitted successfully",
    })),
  ))
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// Query-string parameters for the filtered listing. Empty string means
/// "any"; the param names are the frontend's.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
  pub search:   String,
  pub severity: String,
  #[serde(rename = "biasType")]
  pub bias_type: String,
  #[serde(rename = "componentType")]
  pub component_type: String,
}

/// `GET /api/biases[?search=&severity=&biasType=&componentType=]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let query = BiasQuery {
    search:      params.search,
    severity:    params.severity,
    bias_type:   params.bias_type,
    source_kind: params.component_type,
  };

  let biases = store.search(&query).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "biases": biases })))
}

/// `GET /api/biases/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let bias = store
    .get_bias(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound("Bias not found".into()))?;
  Ok(Json(json!({ "success": true, "bias": bias })))
}

/// `GET /api/bias-types`
pub async fn bias_types<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let types = store.bias_categories().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "types": types })))
}

/// `GET /api/users`
pub async fn users<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let users = store.list_users().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "users": users })))
}
