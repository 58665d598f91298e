//! User accounts — registered submitters and the admin.
//!
//! Users are created at registration and referenced by submissions and
//! approved records; they are never deleted in-flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:       i64,
  pub user_name:     String,
  /// Argon2 PHC string, e.g. `$argon2id$v=19$…`
  #[serde(skip_serializing)]
  pub password_hash: String,
  pub created_at:    DateTime<Utc>,
}

/// Input for [`crate::store::BiasStore::create_user`]. The caller hashes the
/// password before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub user_name:     String,
  pub password_hash: String,
}

/// One row of the user listing: identity plus approved-submission count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
  pub user_id:          i64,
  pub user_name:        String,
  pub submission_count: i64,
}
