//! [`SqliteStore`] — the SQLite implementation of [`BiasStore`].
//!
//! Every operation with more than one dependent write (submission's
//! check-then-insert, approval's four-step promotion, the edit upsert, the
//! cascading delete) runs inside a single `rusqlite` transaction so a
//! partial failure rolls the whole operation back.

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use biasboard_core::{
  Error as CoreError,
  record::{BiasDetail, BiasRecord, BiasRow, MitigationStrategy},
  store::{BiasQuery, BiasStore, BiasUpdate},
  submission::{NewSubmission, PendingRequest, PendingSummary},
  user::{NewUser, User, UserSummary},
};

use crate::{
  Error, Result,
  encode::{
    BIAS_COLUMNS, BIAS_COLUMNS_QUALIFIED, PENDING_COLUMNS, RawBias,
    RawBiasRow, RawPending, RawUser, encode_dt, encode_severity,
    encode_source_kind,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Biasboard store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// True when the underlying failure is a UNIQUE/CHECK constraint violation.
/// Used to turn the duplicate-tuple backstop index into a domain conflict.
fn constraint_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

/// Bind-ready owned copy of a submission's column values, in schema order.
struct SubmissionParams {
  source_kind:           String,
  name:                  String,
  domain:                String,
  description:           String,
  bias_type:             String,
  severity:              String,
  attrs:                 [Option<String>; 9],
  mitigation_strategies: String,
  submitted_by:          Option<i64>,
  created_at:            String,
}

impl SubmissionParams {
  fn new(input: &NewSubmission, created_at: String) -> Self {
    let a = &input.attrs;
    Self {
      source_kind: encode_source_kind(input.source_kind).to_owned(),
      name: input.name.clone(),
      domain: input.domain.clone(),
      description: input.description.clone(),
      bias_type: input.bias_type.clone(),
      severity: encode_severity(input.severity).to_owned(),
      attrs: [
        a.dataset_algorithm_version.clone(),
        a.published_date.clone(),
        a.size.clone(),
        a.format.clone(),
        a.technique.clone(),
        a.bias_identification.clone(),
        a.key_characteristic.clone(),
        a.bias_version_range.clone(),
        a.reference.clone(),
      ],
      mitigation_strategies: input.mitigation_strategies.clone(),
      submitted_by: input.submitted_by,
      created_at,
    }
  }
}

/// Exact-tuple existence check against the permanent set. Runs inside the
/// caller's transaction so check and insert cannot interleave with another
/// writer.
fn duplicate_exists(
  tx: &rusqlite::Transaction<'_>,
  p: &SubmissionParams,
) -> rusqlite::Result<bool> {
  let hit: Option<i64> = tx
    .query_row(
      "SELECT bias_id FROM biases
       WHERE type = ?1 AND name = ?2 AND description = ?3 AND bias_type = ?4",
      rusqlite::params![p.source_kind, p.name, p.description, p.bias_type],
      |r| r.get(0),
    )
    .optional()?;
  Ok(hit.is_some())
}

/// Insert a permanent record from bound submission values; returns the new
/// `bias_id`. The mitigation link is left NULL for the caller's link step.
fn insert_bias_row(
  tx: &rusqlite::Transaction<'_>,
  p: &SubmissionParams,
  submitted_by: Option<i64>,
) -> rusqlite::Result<i64> {
  tx.execute(
    "INSERT INTO biases (
       type, name, domain, description, bias_type, severity,
       dataset_algorithm_version, published_date, size, format, technique,
       bias_identification, key_characteristic, bias_version_range,
       reference, submitted_by, created_at
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
               ?15, ?16, ?17)",
    rusqlite::params![
      p.source_kind,
      p.name,
      p.domain,
      p.description,
      p.bias_type,
      p.severity,
      p.attrs[0],
      p.attrs[1],
      p.attrs[2],
      p.attrs[3],
      p.attrs[4],
      p.attrs[5],
      p.attrs[6],
      p.attrs[7],
      p.attrs[8],
      submitted_by,
      p.created_at,
    ],
  )?;
  Ok(tx.last_insert_rowid())
}

/// Insert a strategy row and complete the one-to-one link back onto the
/// record. Returns the new strategy id.
fn insert_and_link_strategy(
  tx: &rusqlite::Transaction<'_>,
  bias_id: i64,
  description: &str,
) -> rusqlite::Result<i64> {
  tx.execute(
    "INSERT INTO mitigation_strategies (bias_id, m_strategy_description)
     VALUES (?1, ?2)",
    rusqlite::params![bias_id, description],
  )?;
  let strategy_id = tx.last_insert_rowid();
  tx.execute(
    "UPDATE biases SET m_strategy_id = ?1 WHERE bias_id = ?2",
    rusqlite::params![strategy_id, bias_id],
  )?;
  Ok(strategy_id)
}

/// Read one fully-linked record back out, inside the transaction.
fn read_bias_row(
  tx: &rusqlite::Transaction<'_>,
  bias_id: i64,
) -> rusqlite::Result<RawBias> {
  tx.query_row(
    &format!("SELECT {BIAS_COLUMNS} FROM biases WHERE bias_id = ?1"),
    rusqlite::params![bias_id],
    RawBias::read,
  )
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Occurrence rows have no write path in this service; tests seed them
  /// directly to exercise the aggregated read.
  #[cfg(test)]
  pub(crate) async fn seed_occurrence(&self, bias_id: i64, count: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bias_occurrences (bias_id, occurrence_count)
           VALUES (?1, ?2)",
          rusqlite::params![bias_id, count],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── BiasStore impl ──────────────────────────────────────────────────────────

impl BiasStore for SqliteStore {
  type Error = Error;

  // ── Users ──────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let user_name = input.user_name.clone();
    let password_hash = input.password_hash.clone();

    let user_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_name, password_hash, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![user_name, password_hash, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| {
        if constraint_violation(&e) {
          Error::Core(CoreError::DuplicateUser(input.user_name.clone()))
        } else {
          Error::Database(e)
        }
      })?;

    Ok(User {
      user_id,
      user_name: input.user_name,
      password_hash: input.password_hash,
      created_at,
    })
  }

  async fn find_user(&self, user_name: &str) -> Result<Option<User>> {
    let name = user_name.to_owned();

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, user_name, password_hash, created_at
               FROM users WHERE user_name = ?1",
              rusqlite::params![name],
              RawUser::read,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn list_users(&self) -> Result<Vec<UserSummary>> {
    let rows: Vec<UserSummary> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT u.user_id, u.user_name, COUNT(b.bias_id)
           FROM users u
           LEFT JOIN biases b ON b.submitted_by = u.user_id
           WHERE LOWER(u.user_name) != 'admin'
           GROUP BY u.user_id
           ORDER BY u.user_id ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(UserSummary {
              user_id:          row.get(0)?,
              user_name:        row.get(1)?,
              submission_count: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  // ── Intake ─────────────────────────────────────────────────────────────

  async fn submit(&self, input: NewSubmission) -> Result<PendingRequest> {
    let created_at = Utc::now();
    let p = SubmissionParams::new(&input, encode_dt(created_at));

    let outcome: Option<(i64, Option<String>)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        if duplicate_exists(&tx, &p)? {
          return Ok(None);
        }

        tx.execute(
          "INSERT INTO pending_bias_requests (
             type, name, domain, description, bias_type, severity,
             dataset_algorithm_version, published_date, size, format,
             technique, bias_identification, key_characteristic,
             bias_version_range, reference, mitigation_strategies,
             submitted_by, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                     ?13, ?14, ?15, ?16, ?17, ?18)",
          rusqlite::params![
            p.source_kind,
            p.name,
            p.domain,
            p.description,
            p.bias_type,
            p.severity,
            p.attrs[0],
            p.attrs[1],
            p.attrs[2],
            p.attrs[3],
            p.attrs[4],
            p.attrs[5],
            p.attrs[6],
            p.attrs[7],
            p.attrs[8],
            p.mitigation_strategies,
            p.submitted_by,
            p.created_at,
          ],
        )?;
        let request_id = tx.last_insert_rowid();

        let submitter_name: Option<String> = match p.submitted_by {
          Some(uid) => tx
            .query_row(
              "SELECT user_name FROM users WHERE user_id = ?1",
              rusqlite::params![uid],
              |r| r.get(0),
            )
            .optional()?,
          None => None,
        };

        tx.commit()?;
        Ok(Some((request_id, submitter_name)))
      })
      .await?;

    let (request_id, submitted_by_name) =
      outcome.ok_or(Error::Core(CoreError::DuplicateBias))?;

    Ok(PendingRequest {
      request_id,
      source_kind: input.source_kind,
      name: input.name,
      domain: input.domain,
      description: input.description,
      bias_type: input.bias_type,
      severity: input.severity,
      attrs: input.attrs,
      mitigation_strategies: input.mitigation_strategies,
      submitted_by: input.submitted_by,
      submitted_by_name,
      created_at,
    })
  }

  async fn insert_approved(
    &self,
    submitter_id: i64,
    input: NewSubmission,
  ) -> Result<BiasRecord> {
    let p = SubmissionParams::new(&input, encode_dt(Utc::now()));

    enum Outcome {
      Created(Box<RawBias>),
      Duplicate,
      NoSubmitter,
    }

    let outcome: Outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let known: Option<i64> = tx
          .query_row(
            "SELECT user_id FROM users WHERE user_id = ?1",
            rusqlite::params![submitter_id],
            |r| r.get(0),
          )
          .optional()?;
        if known.is_none() {
          return Ok(Outcome::NoSubmitter);
        }

        if duplicate_exists(&tx, &p)? {
          return Ok(Outcome::Duplicate);
        }

        let bias_id = insert_bias_row(&tx, &p, Some(submitter_id))?;
        insert_and_link_strategy(&tx, bias_id, &p.mitigation_strategies)?;
        let raw = read_bias_row(&tx, bias_id)?;

        tx.commit()?;
        Ok(Outcome::Created(Box::new(raw)))
      })
      .await?;

    match outcome {
      Outcome::Created(raw) => raw.into_record(),
      Outcome::Duplicate => Err(Error::Core(CoreError::DuplicateBias)),
      Outcome::NoSubmitter => {
        Err(Error::Core(CoreError::UserNotFound(submitter_id)))
      }
    }
  }

  // ── Moderation ─────────────────────────────────────────────────────────

  async fn approve(&self, request_id: i64) -> Result<BiasRecord> {
    let at_str = encode_dt(Utc::now());

    let raw: Option<RawBias> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let pending: Option<RawPending> = tx
          .query_row(
            &format!(
              "SELECT {PENDING_COLUMNS}
               FROM pending_bias_requests pb
               LEFT JOIN users u ON u.user_id = pb.submitted_by
               WHERE pb.request_id = ?1"
            ),
            rusqlite::params![request_id],
            RawPending::read,
          )
          .optional()?;

        let Some(pending) = pending else {
          return Ok(None);
        };

        tx.execute(
          "INSERT INTO biases (
             type, name, domain, description, bias_type, severity,
             dataset_algorithm_version, published_date, size, format,
             technique, bias_identification, key_characteristic,
             bias_version_range, reference, submitted_by, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                     ?13, ?14, ?15, ?16, ?17)",
          rusqlite::params![
            pending.source_kind,
            pending.name,
            pending.domain,
            pending.description,
            pending.bias_type,
            pending.severity,
            pending.attrs.dataset_algorithm_version,
            pending.attrs.published_date,
            pending.attrs.size,
            pending.attrs.format,
            pending.attrs.technique,
            pending.attrs.bias_identification,
            pending.attrs.key_characteristic,
            pending.attrs.bias_version_range,
            pending.attrs.reference,
            pending.submitted_by,
            at_str,
          ],
        )?;
        let bias_id = tx.last_insert_rowid();

        insert_and_link_strategy(&tx, bias_id, &pending.mitigation_strategies)?;

        tx.execute(
          "DELETE FROM pending_bias_requests WHERE request_id = ?1",
          rusqlite::params![request_id],
        )?;

        let raw = read_bias_row(&tx, bias_id)?;
        tx.commit()?;
        Ok(Some(raw))
      })
      .await
      .map_err(|e| {
        // An identical record approved concurrently trips the identity index.
        if constraint_violation(&e) {
          Error::Core(CoreError::DuplicateBias)
        } else {
          Error::Database(e)
        }
      })?;

    raw
      .ok_or(Error::Core(CoreError::RequestNotFound(request_id)))?
      .into_record()
  }

  async fn decline(&self, request_id: i64) -> Result<()> {
    // Deliberately row-count-indifferent: declining an unknown id succeeds.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM pending_bias_requests WHERE request_id = ?1",
          rusqlite::params![request_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_pending(&self) -> Result<Vec<PendingSummary>> {
    let raws: Vec<RawPending> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PENDING_COLUMNS}
           FROM pending_bias_requests pb
           LEFT JOIN users u ON u.user_id = pb.submitted_by
           ORDER BY pb.request_id ASC"
        ))?;
        let rows = stmt
          .query_map([], RawPending::read)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPending::into_summary).collect()
  }

  async fn get_pending(&self, request_id: i64) -> Result<Option<PendingRequest>> {
    let raw: Option<RawPending> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {PENDING_COLUMNS}
                 FROM pending_bias_requests pb
                 LEFT JOIN users u ON u.user_id = pb.submitted_by
                 WHERE pb.request_id = ?1"
              ),
              rusqlite::params![request_id],
              RawPending::read,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPending::into_pending).transpose()
  }

  // ── Reads over the permanent set ───────────────────────────────────────

  async fn search(&self, query: &BiasQuery) -> Result<Vec<BiasRow>> {
    let pattern = format!("%{}%", query.search);
    let severity = query.severity.clone();
    let bias_type = query.bias_type.clone();
    let source_kind = query.source_kind.clone();

    let raws: Vec<RawBiasRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             b.bias_id, b.type, b.name, b.domain, b.description,
             b.bias_type, b.severity, u.user_name,
             ms.m_strategy_description, b.created_at
           FROM biases b
           LEFT JOIN users u ON u.user_id = b.submitted_by
           LEFT JOIN mitigation_strategies ms ON ms.bias_id = b.bias_id
           WHERE
             (LOWER(b.name) LIKE LOWER(?1) OR
              LOWER(b.domain) LIKE LOWER(?1) OR
              LOWER(b.description) LIKE LOWER(?1) OR
              LOWER(b.bias_type) LIKE LOWER(?1) OR
              LOWER(IFNULL(u.user_name, '')) LIKE LOWER(?1))
             AND (?2 = '' OR LOWER(b.severity) = LOWER(?2))
             AND (?3 = '' OR LOWER(b.bias_type) = LOWER(?3))
             AND (?4 = '' OR LOWER(b.type) = LOWER(?4))
           ORDER BY b.bias_id DESC",
        )?;
        let rows = stmt
          .query_map(
            rusqlite::params![pattern, severity, bias_type, source_kind],
            RawBiasRow::read,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBiasRow::into_row).collect()
  }

  async fn get_bias(&self, bias_id: i64) -> Result<Option<BiasDetail>> {
    let raw: Option<(RawBias, Option<String>, Option<String>, i64)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {BIAS_COLUMNS_QUALIFIED}, u.user_name,
                        ms.m_strategy_description,
                        COALESCE(SUM(o.occurrence_count), 0)
                 FROM biases b
                 LEFT JOIN users u ON u.user_id = b.submitted_by
                 LEFT JOIN mitigation_strategies ms ON ms.bias_id = b.bias_id
                 LEFT JOIN bias_occurrences o ON o.bias_id = b.bias_id
                 WHERE b.bias_id = ?1
                 GROUP BY b.bias_id"
              ),
              rusqlite::params![bias_id],
              |row| {
                Ok((
                  RawBias::read(row)?,
                  row.get(19)?,
                  row.get(20)?,
                  row.get(21)?,
                ))
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|(raw, submitted_by_name, mitigation_strategies, occurrence_count)| {
        Ok(BiasDetail {
          record: raw.into_record()?,
          submitted_by_name,
          mitigation_strategies,
          occurrence_count,
        })
      })
      .transpose()
  }

  async fn get_strategy(&self, bias_id: i64) -> Result<Option<MitigationStrategy>> {
    let strategy: Option<MitigationStrategy> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT mitigation_strategy_id, bias_id, m_strategy_description
               FROM mitigation_strategies WHERE bias_id = ?1",
              rusqlite::params![bias_id],
              |row| {
                Ok(MitigationStrategy {
                  mitigation_strategy_id: row.get(0)?,
                  bias_id:                row.get(1)?,
                  m_strategy_description: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(strategy)
  }

  async fn bias_categories(&self) -> Result<Vec<String>> {
    let types: Vec<String> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT DISTINCT bias_type FROM biases ORDER BY bias_type ASC")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(types)
  }

  // ── Edit / delete ──────────────────────────────────────────────────────

  async fn update_bias(&self, bias_id: i64, update: BiasUpdate) -> Result<()> {
    let a = update.attrs.clone();
    let severity = encode_severity(update.severity).to_owned();

    let found: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let known: Option<i64> = tx
          .query_row(
            "SELECT bias_id FROM biases WHERE bias_id = ?1",
            rusqlite::params![bias_id],
            |r| r.get(0),
          )
          .optional()?;
        if known.is_none() {
          return Ok(false);
        }

        // `type` is immutable post-creation; it is simply never listed here.
        tx.execute(
          "UPDATE biases SET
             name = ?1, domain = ?2, description = ?3, bias_type = ?4,
             severity = ?5, dataset_algorithm_version = ?6,
             published_date = ?7, size = ?8, format = ?9, technique = ?10,
             bias_identification = ?11, key_characteristic = ?12,
             bias_version_range = ?13, reference = ?14
           WHERE bias_id = ?15",
          rusqlite::params![
            update.name,
            update.domain,
            update.description,
            update.bias_type,
            severity,
            a.dataset_algorithm_version,
            a.published_date,
            a.size,
            a.format,
            a.technique,
            a.bias_identification,
            a.key_characteristic,
            a.bias_version_range,
            a.reference,
            bias_id,
          ],
        )?;

        let existing: Option<i64> = tx
          .query_row(
            "SELECT mitigation_strategy_id FROM mitigation_strategies
             WHERE bias_id = ?1",
            rusqlite::params![bias_id],
            |r| r.get(0),
          )
          .optional()?;

        match existing {
          Some(_) => {
            tx.execute(
              "UPDATE mitigation_strategies SET m_strategy_description = ?1
               WHERE bias_id = ?2",
              rusqlite::params![update.mitigation_strategies, bias_id],
            )?;
          }
          None => {
            insert_and_link_strategy(&tx, bias_id, &update.mitigation_strategies)?;
          }
        }

        tx.commit()?;
        Ok(true)
      })
      .await
      .map_err(|e| {
        // Editing onto another record's identity tuple trips the index.
        if constraint_violation(&e) {
          Error::Core(CoreError::DuplicateBias)
        } else {
          Error::Database(e)
        }
      })?;

    if found {
      Ok(())
    } else {
      Err(Error::Core(CoreError::BiasNotFound(bias_id)))
    }
  }

  async fn delete_bias(&self, bias_id: i64) -> Result<()> {
    let found: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let known: Option<i64> = tx
          .query_row(
            "SELECT bias_id FROM biases WHERE bias_id = ?1",
            rusqlite::params![bias_id],
            |r| r.get(0),
          )
          .optional()?;
        if known.is_none() {
          return Ok(false);
        }

        // Children first to satisfy the foreign keys.
        tx.execute(
          "DELETE FROM bias_occurrences WHERE bias_id = ?1",
          rusqlite::params![bias_id],
        )?;
        tx.execute(
          "DELETE FROM mitigation_strategies WHERE bias_id = ?1",
          rusqlite::params![bias_id],
        )?;
        tx.execute(
          "DELETE FROM biases WHERE bias_id = ?1",
          rusqlite::params![bias_id],
        )?;

        tx.commit()?;
        Ok(true)
      })
      .await?;

    if found {
      Ok(())
    } else {
      Err(Error::Core(CoreError::BiasNotFound(bias_id)))
    }
  }
}
