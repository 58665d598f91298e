//! Handlers for `/register` and `/login`, plus argon2 password helpers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/register` | Body `{user_name, password}`; 409 if taken |
//! | `POST` | `/login` | Body `{user_name, password}`; 401 on mismatch |

use std::sync::Arc;

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rand_core::OsRng;
use serde::Deserialize;
use serde_json::json;

use biasboard_core::{store::BiasStore, user::NewUser};

use crate::error::ApiError;

// ─── Password helpers ─────────────────────────────────────────────────────────

/// Hash a password into an argon2 PHC string, e.g. `$argon2id$v=19$…`
pub fn hash_password(password: &str) -> Result<String, ApiError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|h| h.to_string())
    .map_err(|e| ApiError::Internal(format!("argon2 error: {e}")))
}

/// Verify a password against a stored PHC string. An unparseable hash is
/// treated as a mismatch.
pub fn verify_password(hash: &str, password: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(hash) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// JSON body accepted by both `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
  pub user_name: Option<String>,
  pub password:  Option<String>,
}

impl Credentials {
  fn required(self) -> Result<(String, String), ApiError> {
    match (self.user_name, self.password) {
      (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
      _ => Err(ApiError::BadRequest("All fields required".into())),
    }
  }
}

/// `POST /register`
pub async fn register<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let (user_name, password) = body.required()?;
  let password_hash = hash_password(&password)?;

  store
    .create_user(NewUser { user_name, password_hash })
    .await
    .map_err(ApiError::from_store)?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "User registered successfully",
    })),
  ))
}

/// `POST /login`
pub async fn login<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BiasStore,
{
  let (user_name, password) = body.required()?;

  let user = store
    .find_user(&user_name)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(ApiError::Unauthorized)?;

  if !verify_password(&user.password_hash, &password) {
    return Err(ApiError::Unauthorized);
  }

  Ok(Json(json!({ "success": true, "users": user })))
}
