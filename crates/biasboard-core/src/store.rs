//! The `BiasStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `biasboard-store-sqlite`). The HTTP layer (`biasboard-api`) depends on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  record::{BiasDetail, BiasRecord, BiasRow, MitigationStrategy, Severity, SourceAttrs},
  submission::{NewSubmission, PendingRequest, PendingSummary},
  user::{NewUser, User, UserSummary},
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`BiasStore::search`].
///
/// `search` is free text matched case-insensitively (OR) across name,
/// domain, description, category, and submitter username. The remaining
/// fields are ANDed exact matches; the empty string means "any".
#[derive(Debug, Clone, Default)]
pub struct BiasQuery {
  pub search:      String,
  pub severity:    String,
  pub bias_type:   String,
  pub source_kind: String,
}

/// Full field set for [`BiasStore::update_bias`].
///
/// Deliberately has no source-kind field: a record's `type` is immutable
/// after creation.
#[derive(Debug, Clone)]
pub struct BiasUpdate {
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              Severity,
  pub attrs:                 SourceAttrs,
  pub mitigation_strategies: String,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Biasboard storage backend.
///
/// Multi-step writes (approval promotion, cascading delete, edit upsert,
/// duplicate-checked inserts) must each execute as a single atomic
/// transaction; a partial failure must leave no orphan rows behind.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BiasStore: Send + Sync {
  type Error: std::error::Error
    + Into<crate::Error>
    + Send
    + Sync
    + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. Fails with a duplicate-user conflict if the
  /// username is taken; the unique constraint is authoritative.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Look a user up by username. Returns `None` if unknown.
  fn find_user<'a>(
    &'a self,
    user_name: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// List non-admin users with their approved-submission counts, ordered
  /// by user id ascending.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<UserSummary>, Self::Error>> + Send + '_;

  // ── Intake ────────────────────────────────────────────────────────────

  /// Queue a report for moderation.
  ///
  /// The duplicate check against the permanent set, an exact match on
  /// `(type, name, description, bias_type)`, runs in the same transaction
  /// as the pending insert. A match fails with a duplicate-bias conflict and
  /// writes nothing.
  fn submit(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<PendingRequest, Self::Error>> + Send + '_;

  /// Admin direct insert, skipping the queue: duplicate check, record
  /// insert, strategy insert, and link update in one transaction.
  ///
  /// Fails with a not-found error if `submitter_id` does not resolve.
  fn insert_approved(
    &self,
    submitter_id: i64,
    input: NewSubmission,
  ) -> impl Future<Output = Result<BiasRecord, Self::Error>> + Send + '_;

  // ── Moderation ────────────────────────────────────────────────────────

  /// Promote a pending request into the permanent set.
  ///
  /// One transaction: load the request (absent fails not-found), insert
  /// the record, insert its strategy, link the strategy id back onto the
  /// record, delete the pending row. Any failure rolls the whole
  /// promotion back.
  fn approve(
    &self,
    request_id: i64,
  ) -> impl Future<Output = Result<BiasRecord, Self::Error>> + Send + '_;

  /// Discard a pending request. Idempotent: declining an id that does not
  /// exist is reported as success.
  fn decline(
    &self,
    request_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// List the moderation queue, ordered by request id.
  fn list_pending(
    &self,
  ) -> impl Future<Output = Result<Vec<PendingSummary>, Self::Error>> + Send + '_;

  /// Full detail for one pending request. Returns `None` if not found.
  fn get_pending(
    &self,
    request_id: i64,
  ) -> impl Future<Output = Result<Option<PendingRequest>, Self::Error>> + Send + '_;

  // ── Reads over the permanent set ──────────────────────────────────────

  /// Filtered listing, newest first. Always returns the complete matching
  /// set; pagination is a presentation concern.
  fn search<'a>(
    &'a self,
    query: &'a BiasQuery,
  ) -> impl Future<Output = Result<Vec<BiasRow>, Self::Error>> + Send + 'a;

  /// Detail for one record, including its aggregated occurrence count.
  fn get_bias(
    &self,
    bias_id: i64,
  ) -> impl Future<Output = Result<Option<BiasDetail>, Self::Error>> + Send + '_;

  /// The mitigation strategy linked to a record, if any.
  fn get_strategy(
    &self,
    bias_id: i64,
  ) -> impl Future<Output = Result<Option<MitigationStrategy>, Self::Error>> + Send + '_;

  /// Distinct bias categories present in the permanent set, ascending.
  fn bias_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  // ── Edit / delete ─────────────────────────────────────────────────────

  /// Update all mutable fields of a record in place, then upsert its
  /// mitigation strategy, in one transaction. The record's `type` is
  /// never touched. Fails not-found if the record does not exist.
  fn update_bias(
    &self,
    bias_id: i64,
    update: BiasUpdate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a record and its strategy in one transaction, strategy row
  /// first to satisfy the foreign key. Fails not-found if the record does
  /// not exist.
  fn delete_bias(
    &self,
    bias_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
