//! JSON REST API for Biasboard.
//!
//! Exposes an axum [`Router`] backed by any [`biasboard_core::store::BiasStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = biasboard_api::api_router(store.clone());
//! ```

pub mod admin;
pub mod auth;
pub mod biases;
pub mod error;
pub mod moderation;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use biasboard_core::store::BiasStore;

pub use error::ApiError;

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: BiasStore + 'static,
{
  Router::new()
    // Accounts
    .route("/register", post(auth::register::<S>))
    .route("/login", post(auth::login::<S>))
    // Public records
    .route("/api/biases", get(biases::list::<S>).post(biases::submit::<S>))
    .route("/api/biases/admin", post(biases::submit_admin::<S>))
    .route("/api/biases/{id}", get(biases::get_one::<S>))
    .route("/api/bias-types", get(biases::bias_types::<S>))
    .route("/api/users", get(biases::users::<S>))
    // Moderation queue
    .route("/admin/pending-biases", get(moderation::list_pending::<S>))
    .route("/admin/pending-bias/{id}", get(moderation::get_pending::<S>))
    .route("/admin/approve-bias", post(moderation::approve::<S>))
    .route("/admin/decline-bias", post(moderation::decline::<S>))
    // Record administration
    .route("/admin/biases/{id}", put(admin::update::<S>).delete(admin::delete::<S>))
    .with_state(store)
}
