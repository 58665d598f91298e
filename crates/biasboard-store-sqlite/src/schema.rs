//! SQL schema for the Biasboard SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    user_name     TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS biases (
    bias_id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    type                      TEXT NOT NULL CHECK (type IN ('Dataset', 'Algorithm')),
    name                      TEXT NOT NULL,
    domain                    TEXT NOT NULL,
    description               TEXT NOT NULL,
    bias_type                 TEXT NOT NULL,   -- category, e.g. 'Representation Bias'
    severity                  TEXT NOT NULL CHECK (severity IN ('Low', 'Medium', 'High')),
    dataset_algorithm_version TEXT,
    published_date            TEXT,
    size                      TEXT,
    format                    TEXT,
    technique                 TEXT,
    bias_identification       TEXT,
    key_characteristic        TEXT,
    bias_version_range        TEXT,
    reference                 TEXT,
    submitted_by              INTEGER REFERENCES users(user_id),
    m_strategy_id             INTEGER,         -- set by the link step after the strategy insert
    created_at                TEXT NOT NULL
);

-- Authoritative backstop for the in-transaction duplicate check.
CREATE UNIQUE INDEX IF NOT EXISTS biases_identity_idx
    ON biases(type, name, description, bias_type);

CREATE TABLE IF NOT EXISTS mitigation_strategies (
    mitigation_strategy_id INTEGER PRIMARY KEY AUTOINCREMENT,
    bias_id                INTEGER NOT NULL REFERENCES biases(bias_id),
    m_strategy_description TEXT NOT NULL,
    UNIQUE (bias_id)
);

-- The moderation queue. Rows only ever leave through approval (copied into
-- biases + mitigation_strategies, then deleted) or decline (deleted).
CREATE TABLE IF NOT EXISTS pending_bias_requests (
    request_id                INTEGER PRIMARY KEY AUTOINCREMENT,
    type                      TEXT NOT NULL CHECK (type IN ('Dataset', 'Algorithm')),
    name                      TEXT NOT NULL,
    domain                    TEXT NOT NULL,
    description               TEXT NOT NULL,
    bias_type                 TEXT NOT NULL,
    severity                  TEXT NOT NULL CHECK (severity IN ('Low', 'Medium', 'High')),
    dataset_algorithm_version TEXT,
    published_date            TEXT,
    size                      TEXT,
    format                    TEXT,
    technique                 TEXT,
    bias_identification       TEXT,
    key_characteristic        TEXT,
    bias_version_range        TEXT,
    reference                 TEXT,
    mitigation_strategies     TEXT NOT NULL,   -- inline until promotion splits it out
    submitted_by              INTEGER REFERENCES users(user_id),
    created_at                TEXT NOT NULL
);

-- Aggregated per record on read; no write path in this service.
CREATE TABLE IF NOT EXISTS bias_occurrences (
    occurrence_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    bias_id          INTEGER NOT NULL REFERENCES biases(bias_id),
    occurrence_count INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS biases_category_idx    ON biases(bias_type);
CREATE INDEX IF NOT EXISTS biases_submitter_idx   ON biases(submitted_by);
CREATE INDEX IF NOT EXISTS occurrences_bias_idx   ON bias_occurrences(bias_id);

PRAGMA user_version = 1;
";
