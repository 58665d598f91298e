//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; the `type` and `severity`
//! enumerations as their canonical capitalised spellings, matching the
//! schema's CHECK constraints.

use biasboard_core::{
  record::{BiasRecord, BiasRow, Severity, SourceAttrs, SourceKind},
  submission::{PendingRequest, PendingSummary},
  user::User,
};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Enumerations ────────────────────────────────────────────────────────────

// Stored text matches the canonical spellings in the schema's CHECK
// constraints; parsing is delegated to the core `FromStr` impls.

pub fn encode_source_kind(k: SourceKind) -> &'static str { k.as_str() }

pub fn decode_source_kind(s: &str) -> Result<SourceKind> {
  Ok(s.parse::<SourceKind>().map_err(Error::Core)?)
}

pub fn encode_severity(s: Severity) -> &'static str { s.as_str() }

pub fn decode_severity(s: &str) -> Result<Severity> {
  Ok(s.parse::<Severity>().map_err(Error::Core)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// The nine optional kind-specific columns, read in schema order.
pub struct RawAttrs {
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

impl RawAttrs {
  pub fn read(row: &rusqlite::Row<'_>, first: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      dataset_algorithm_version: row.get(first)?,
      published_date:            row.get(first + 1)?,
      size:                      row.get(first + 2)?,
      format:                    row.get(first + 3)?,
      technique:                 row.get(first + 4)?,
      bias_identification:       row.get(first + 5)?,
      key_characteristic:        row.get(first + 6)?,
      bias_version_range:        row.get(first + 7)?,
      reference:                 row.get(first + 8)?,
    })
  }

  pub fn into_attrs(self) -> SourceAttrs {
    SourceAttrs {
      dataset_algorithm_version: self.dataset_algorithm_version,
      published_date:            self.published_date,
      size:                      self.size,
      format:                    self.format,
      technique:                 self.technique,
      bias_identification:       self.bias_identification,
      key_characteristic:        self.key_characteristic,
      bias_version_range:        self.bias_version_range,
      reference:                 self.reference,
    }
  }
}

/// Raw values read directly from a `biases` row.
pub struct RawBias {
  pub bias_id:       i64,
  pub source_kind:   String,
  pub name:          String,
  pub domain:        String,
  pub description:   String,
  pub bias_type:     String,
  pub severity:      String,
  pub attrs:         RawAttrs,
  pub submitted_by:  Option<i64>,
  pub m_strategy_id: Option<i64>,
  pub created_at:    String,
}

/// Column list matching [`RawBias::read`]; keep the two in sync.
pub const BIAS_COLUMNS: &str = "bias_id, type, name, domain, description, \
   bias_type, severity, dataset_algorithm_version, published_date, size, \
   format, technique, bias_identification, key_characteristic, \
   bias_version_range, reference, submitted_by, m_strategy_id, created_at";

/// Same columns qualified with the `b` alias, for joined queries where bare
/// `bias_id`/`created_at` would be ambiguous.
pub const BIAS_COLUMNS_QUALIFIED: &str = "b.bias_id, b.type, b.name, \
   b.domain, b.description, b.bias_type, b.severity, \
   b.dataset_algorithm_version, b.published_date, b.size, b.format, \
   b.technique, b.bias_identification, b.key_characteristic, \
   b.bias_version_range, b.reference, b.submitted_by, b.m_strategy_id, \
   b.created_at";

impl RawBias {
  pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      bias_id:       row.get(0)?,
      source_kind:   row.get(1)?,
      name:          row.get(2)?,
      domain:        row.get(3)?,
      description:   row.get(4)?,
      bias_type:     row.get(5)?,
      severity:      row.get(6)?,
      attrs:         RawAttrs::read(row, 7)?,
      submitted_by:  row.get(16)?,
      m_strategy_id: row.get(17)?,
      created_at:    row.get(18)?,
    })
  }

  pub fn into_record(self) -> Result<BiasRecord> {
    Ok(BiasRecord {
      bias_id:       self.bias_id,
      source_kind:   decode_source_kind(&self.source_kind)?,
      name:          self.name,
      domain:        self.domain,
      description:   self.description,
      bias_type:     self.bias_type,
      severity:      decode_severity(&self.severity)?,
      attrs:         self.attrs.into_attrs(),
      submitted_by:  self.submitted_by,
      m_strategy_id: self.m_strategy_id,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read from a `pending_bias_requests` row joined with `users`.
pub struct RawPending {
  pub request_id:            i64,
  pub source_kind:           String,
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              String,
  pub attrs:                 RawAttrs,
  pub mitigation_strategies: String,
  pub submitted_by:          Option<i64>,
  pub submitted_by_name:     Option<String>,
  pub created_at:            String,
}

/// Column list matching [`RawPending::read`]; keep the two in sync.
pub const PENDING_COLUMNS: &str = "pb.request_id, pb.type, pb.name, pb.domain, \
   pb.description, pb.bias_type, pb.severity, pb.dataset_algorithm_version, \
   pb.published_date, pb.size, pb.format, pb.technique, \
   pb.bias_identification, pb.key_characteristic, pb.bias_version_range, \
   pb.reference, pb.mitigation_strategies, pb.submitted_by, \
   u.user_name, pb.created_at";

impl RawPending {
  pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      request_id:            row.get(0)?,
      source_kind:           row.get(1)?,
      name:                  row.get(2)?,
      domain:                row.get(3)?,
      description:           row.get(4)?,
      bias_type:             row.get(5)?,
      severity:              row.get(6)?,
      attrs:                 RawAttrs::read(row, 7)?,
      mitigation_strategies: row.get(16)?,
      submitted_by:          row.get(17)?,
      submitted_by_name:     row.get(18)?,
      created_at:            row.get(19)?,
    })
  }

  pub fn into_pending(self) -> Result<PendingRequest> {
    Ok(PendingRequest {
      request_id:            self.request_id,
      source_kind:           decode_source_kind(&self.source_kind)?,
      name:                  self.name,
      domain:                self.domain,
      description:           self.description,
      bias_type:             self.bias_type,
      severity:              decode_severity(&self.severity)?,
      attrs:                 self.attrs.into_attrs(),
      mitigation_strategies: self.mitigation_strategies,
      submitted_by:          self.submitted_by,
      submitted_by_name:     self.submitted_by_name,
      created_at:            decode_dt(&self.created_at)?,
    })
  }

  pub fn into_summary(self) -> Result<PendingSummary> {
    Ok(PendingSummary {
      request_id:        self.request_id,
      source_kind:       decode_source_kind(&self.source_kind)?,
      name:              self.name,
      domain:            self.domain,
      bias_type:         self.bias_type,
      severity:          decode_severity(&self.severity)?,
      submitted_by_name: self.submitted_by_name,
      created_at:        decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read from a filtered-listing row: `biases` joined with
/// `users` and `mitigation_strategies`.
pub struct RawBiasRow {
  pub bias_id:               i64,
  pub source_kind:           String,
  pub name:                  String,
  pub domain:                String,
  pub description:           String,
  pub bias_type:             String,
  pub severity:              String,
  pub submitted_by:          Option<String>,
  pub mitigation_strategies: Option<String>,
  pub created_at:            String,
}

impl RawBiasRow {
  pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      bias_id:               row.get(0)?,
      source_kind:           row.get(1)?,
      name:                  row.get(2)?,
      domain:                row.get(3)?,
      description:           row.get(4)?,
      bias_type:             row.get(5)?,
      severity:              row.get(6)?,
      submitted_by:          row.get(7)?,
      mitigation_strategies: row.get(8)?,
      created_at:            row.get(9)?,
    })
  }

  pub fn into_row(self) -> Result<BiasRow> {
    Ok(BiasRow {
      bias_id:               self.bias_id,
      source_kind:           decode_source_kind(&self.source_kind)?,
      name:                  self.name,
      domain:                self.domain,
      description:           self.description,
      bias_type:             self.bias_type,
      severity:              decode_severity(&self.severity)?,
      submitted_by:          self.submitted_by,
      mitigation_strategies: self.mitigation_strategies,
      created_at:            decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `users` row.
pub struct RawUser {
  pub user_id:       i64,
  pub user_name:     String,
  pub password_hash: String,
  pub created_at:    String,
}

impl RawUser {
  pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:       row.get(0)?,
      user_name:     row.get(1)?,
      password_hash: row.get(2)?,
      created_at:    row.get(3)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:       self.user_id,
      user_name:     self.user_name,
      password_hash: self.password_hash,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}
