//! Submission types — reports waiting in the moderation queue.
//!
//! A pending request carries the same descriptive shape as a permanent
//! record plus its mitigation text inline; the text is only split into its
//! own strategy row when an admin approves the request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Severity, SourceAttrs, SourceKind};

/// Input for a new report, from either the end-user or the admin intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
  #[serde(rename = "type")]
  pub source_kind:           SourceKind,
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              Severity,
  #[serde(flatten)]
  pub attrs:                 SourceAttrs,
  pub mitigation_strategies: String,
  /// End-user submissions may be anonymous.
  pub submitted_by:          Option<i64>,
}

/// A stored pending request, as returned by the single-request detail query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRequest {
  pub request_id:            i64,
  #[serde(rename = "type")]
  pub source_kind:           SourceKind,
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              Severity,
  #[serde(flatten)]
  pub attrs:                 SourceAttrs,
  pub mitigation_strategies: String,
  pub submitted_by:          Option<i64>,
  pub submitted_by_name:     Option<String>,
  pub created_at:            DateTime<Utc>,
}

/// The trimmed-down shape the moderation queue listing shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSummary {
  pub request_id:        i64,
  #[serde(rename = "type")]
  pub source_kind:       SourceKind,
  pub name:              String,
  pub domain:            String,
  pub bias_type:         String,
  pub severity:          Severity,
  pub submitted_by_name: Option<String>,
  pub created_at:        DateTime<Utc>,
}
