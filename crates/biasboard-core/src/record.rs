//! Bias record types — the permanent, admin-approved report set.
//!
//! A record documents one observed bias in a dataset or algorithm. Records
//! only enter the permanent set through moderation approval or a direct
//! admin insert, and every record is paired with exactly one mitigation
//! strategy via the insert-then-link pattern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// What kind of component the reported bias lives in.
///
/// Immutable once a record exists; edits never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
  Dataset,
  Algorithm,
}

impl SourceKind {
  pub const fn as_str(self) -> &'static str {
    match self {
      SourceKind::Dataset => "Dataset",
      SourceKind::Algorithm => "Algorithm",
    }
  }
}

impl std::str::FromStr for SourceKind {
  type Err = crate::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Dataset" => Ok(SourceKind::Dataset),
      "Algorithm" => Ok(SourceKind::Algorithm),
      other => Err(crate::Error::UnknownSourceKind(other.to_owned())),
    }
  }
}

/// Reported severity. Unknown strings are rejected at the API boundary;
/// the schema carries a matching CHECK constraint as a second line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
  Low,
  Medium,
  High,
}

impl Severity {
  pub const fn as_str(self) -> &'static str {
    match self {
      Severity::Low => "Low",
      Severity::Medium => "Medium",
      Severity::High => "High",
    }
  }
}

impl std::str::FromStr for Severity {
  type Err = crate::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Low" => Ok(Severity::Low),
      "Medium" => Ok(Severity::Medium),
      "High" => Ok(Severity::High),
      other => Err(crate::Error::UnknownSeverity(other.to_owned())),
    }
  }
}

// ─── Kind-specific attributes ────────────────────────────────────────────────

/// Optional technical attributes describing the affected component.
///
/// Dataset reports tend to fill `published_date`/`size`/`format`; algorithm
/// reports tend to fill `technique`/`bias_identification`. All are free text
/// and all are optional — the end-user intake form omits most of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAttrs {
  pub dataset_algorithm_version: Option<String>,
  pub published_date:            Option<String>,
  pub size:                      Option<String>,
  pub format:                    Option<String>,
  pub technique:                 Option<String>,
  pub bias_identification:       Option<String>,
  pub key_characteristic:        Option<String>,
  pub bias_version_range:        Option<String>,
  pub reference:                 Option<String>,
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A permanent bias record as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasRecord {
  pub bias_id:       i64,
  #[serde(rename = "type")]
  pub source_kind:   SourceKind,
  /// Name of the affected dataset or algorithm.
  pub name:          String,
  pub domain:        String,
  pub description:   String,
  /// Bias category, e.g. "Representation Bias".
  pub bias_type:     String,
  pub severity:      Severity,
  #[serde(flatten)]
  pub attrs:         SourceAttrs,
  pub submitted_by:  Option<i64>,
  /// Link to the record's mitigation strategy. `None` only transiently,
  /// between the record insert and the link update inside one transaction.
  pub m_strategy_id: Option<i64>,
  pub created_at:    DateTime<Utc>,
}

/// The free-text remediation guidance paired one-to-one with a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationStrategy {
  pub mitigation_strategy_id: i64,
  pub bias_id:                i64,
  pub m_strategy_description: String,
}

// ─── Read models ─────────────────────────────────────────────────────────────

/// One row of a filtered listing: the record joined with its submitter's
/// username and mitigation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasRow {
  pub bias_id:               i64,
  #[serde(rename = "type")]
  pub source_kind:           SourceKind,
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              Severity,
  pub submitted_by:          Option<String>,
  pub mitigation_strategies: Option<String>,
  pub created_at:            DateTime<Utc>,
}

/// Full detail view for one record, including the aggregated occurrence
/// count summed over `bias_occurrences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasDetail {
  #[serde(flatten)]
  pub record:                BiasRecord,
  pub submitted_by_name:     Option<String>,
  pub mitigation_strategies: Option<String>,
  pub occurrence_count:      i64,
}
