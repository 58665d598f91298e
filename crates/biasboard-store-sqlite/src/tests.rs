//! Integration tests for `SqliteStore` against an in-memory database.

use biasboard_core::{
  record::{Severity, SourceAttrs, SourceKind},
  store::{BiasQuery, BiasStore, BiasUpdate},
  submission::NewSubmission,
  user::NewUser,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn register(s: &SqliteStore, name: &str) -> i64 {
  s.create_user(NewUser {
    user_name:     name.into(),
    password_hash: "$argon2id$stub".into(),
  })
  .await
  .unwrap()
  .user_id
}

fn submission(name: &str) -> NewSubmission {
  NewSubmission {
    source_kind:           SourceKind::Dataset,
    name:                  name.into(),
    domain:                "Computer Vision".into(),
    description:           format!("{name} skews toward lighter skin tones"),
    bias_type:             "Representation Bias".into(),
    severity:              Severity::High,
    attrs:                 SourceAttrs::default(),
    mitigation_strategies: "Rebalance sampling".into(),
    submitted_by:          None,
  }
}

fn algorithm_submission(name: &str, severity: Severity) -> NewSubmission {
  NewSubmission {
    source_kind: SourceKind::Algorithm,
    name: name.into(),
    domain: "Hiring".into(),
    description: format!("{name} downranks certain applicants"),
    bias_type: "Measurement Bias".into(),
    severity,
    attrs: SourceAttrs {
      technique: Some("Gradient boosting".into()),
      ..SourceAttrs::default()
    },
    mitigation_strategies: "Audit feature weights".into(),
    submitted_by: None,
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_find_user() {
  let s = store().await;

  let id = register(&s, "alice").await;
  let found = s.find_user("alice").await.unwrap().unwrap();
  assert_eq!(found.user_id, id);
  assert_eq!(found.user_name, "alice");
  assert_eq!(found.password_hash, "$argon2id$stub");
}

#[tokio::test]
async fn find_user_missing_returns_none() {
  let s = store().await;
  assert!(s.find_user("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_conflicts() {
  let s = store().await;
  register(&s, "alice").await;

  let err = s
    .create_user(NewUser {
      user_name:     "alice".into(),
      password_hash: "$argon2id$other".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::DuplicateUser(_))
  ));
}

#[tokio::test]
async fn list_users_excludes_admin_and_counts_submissions() {
  let s = store().await;
  register(&s, "admin").await;
  let alice = register(&s, "alice").await;
  register(&s, "bob").await;

  s.insert_approved(alice, submission("FaceSet")).await.unwrap();
  s.insert_approved(alice, submission("VoiceSet")).await.unwrap();

  let users = s.list_users().await.unwrap();
  assert_eq!(users.len(), 2);
  assert_eq!(users[0].user_name, "alice");
  assert_eq!(users[0].submission_count, 2);
  assert_eq!(users[1].user_name, "bob");
  assert_eq!(users[1].submission_count, 0);
}

// ─── Intake ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_creates_exactly_one_pending_row() {
  let s = store().await;

  let pending = s.submit(submission("FaceSet")).await.unwrap();
  assert_eq!(pending.name, "FaceSet");
  assert_eq!(pending.severity, Severity::High);

  let queue = s.list_pending().await.unwrap();
  assert_eq!(queue.len(), 1);
  assert_eq!(queue[0].request_id, pending.request_id);
}

#[tokio::test]
async fn submit_resolves_submitter_name() {
  let s = store().await;
  let alice = register(&s, "alice").await;

  let mut input = submission("FaceSet");
  input.submitted_by = Some(alice);
  let pending = s.submit(input).await.unwrap();
  assert_eq!(pending.submitted_by_name.as_deref(), Some("alice"));
}

#[tokio::test]
async fn submit_duplicate_of_permanent_record_conflicts() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  let err = s.submit(submission("FaceSet")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::DuplicateBias)
  ));

  // Nothing was queued.
  assert!(s.list_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_same_name_different_description_is_not_a_duplicate() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  let mut input = submission("FaceSet");
  input.description = "Underrepresents older subjects".into();
  s.submit(input).await.unwrap();
  assert_eq!(s.list_pending().await.unwrap().len(), 1);
}

#[tokio::test]
async fn insert_approved_unknown_submitter_errors() {
  let s = store().await;
  let err = s.insert_approved(99, submission("FaceSet")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::UserNotFound(99))
  ));
}

#[tokio::test]
async fn insert_approved_links_strategy() {
  let s = store().await;
  let alice = register(&s, "alice").await;

  let record = s.insert_approved(alice, submission("FaceSet")).await.unwrap();
  let strategy = s.get_strategy(record.bias_id).await.unwrap().unwrap();
  assert_eq!(record.m_strategy_id, Some(strategy.mitigation_strategy_id));
  assert_eq!(strategy.m_strategy_description, "Rebalance sampling");
}

#[tokio::test]
async fn insert_approved_duplicate_conflicts() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  let err = s.insert_approved(alice, submission("FaceSet")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::DuplicateBias)
  ));
}

// ─── Moderation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn approve_promotes_pending_into_permanent_set() {
  let s = store().await;
  let alice = register(&s, "alice").await;

  let mut input = submission("FaceSet");
  input.submitted_by = Some(alice);
  let pending = s.submit(input).await.unwrap();

  let record = s.approve(pending.request_id).await.unwrap();

  // Pending row gone, permanent record and strategy present and linked.
  assert!(s.get_pending(pending.request_id).await.unwrap().is_none());
  assert!(s.list_pending().await.unwrap().is_empty());

  let strategy = s.get_strategy(record.bias_id).await.unwrap().unwrap();
  assert_eq!(record.m_strategy_id, Some(strategy.mitigation_strategy_id));
  assert_eq!(strategy.m_strategy_description, "Rebalance sampling");

  let detail = s.get_bias(record.bias_id).await.unwrap().unwrap();
  assert_eq!(detail.record.severity, Severity::High);
  assert_eq!(detail.submitted_by_name.as_deref(), Some("alice"));
  assert_eq!(
    detail.mitigation_strategies.as_deref(),
    Some("Rebalance sampling")
  );
}

#[tokio::test]
async fn approve_missing_request_errors() {
  let s = store().await;
  let err = s.approve(42).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::RequestNotFound(42))
  ));
}

#[tokio::test]
async fn approve_rolls_back_when_identical_record_exists() {
  let s = store().await;
  let alice = register(&s, "alice").await;

  let pending = s.submit(submission("FaceSet")).await.unwrap();
  // Identical record lands before the moderator gets to the request.
  s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  let err = s.approve(pending.request_id).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::DuplicateBias)
  ));

  // The transaction rolled back: the request is still queued, and only the
  // directly-inserted record exists.
  assert!(s.get_pending(pending.request_id).await.unwrap().is_some());
  assert_eq!(s.search(&BiasQuery::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn decline_discards_without_promoting() {
  let s = store().await;
  let pending = s.submit(submission("FaceSet")).await.unwrap();

  s.decline(pending.request_id).await.unwrap();

  assert!(s.list_pending().await.unwrap().is_empty());
  assert!(s.search(&BiasQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn decline_missing_request_still_succeeds() {
  let s = store().await;
  s.decline(42).await.unwrap();
}

#[tokio::test]
async fn pending_detail_roundtrips_fields() {
  let s = store().await;
  let pending = s.submit(algorithm_submission("RankNet", Severity::Medium))
    .await
    .unwrap();

  let detail = s.get_pending(pending.request_id).await.unwrap().unwrap();
  assert_eq!(detail.source_kind, SourceKind::Algorithm);
  assert_eq!(detail.severity, Severity::Medium);
  assert_eq!(detail.attrs.technique.as_deref(), Some("Gradient boosting"));
  assert_eq!(detail.mitigation_strategies, "Audit feature weights");
}

// ─── Search ──────────────────────────────────────────────────────────────────

async fn seeded(s: &SqliteStore) -> i64 {
  let alice = register(s, "alice").await;
  s.insert_approved(alice, submission("FaceSet")).await.unwrap();
  s.insert_approved(alice, algorithm_submission("RankNet", Severity::Medium))
    .await
    .unwrap();
  s.insert_approved(alice, algorithm_submission("CreditScorer", Severity::Low))
    .await
    .unwrap();
  alice
}

#[tokio::test]
async fn empty_query_matches_all_newest_first() {
  let s = store().await;
  seeded(&s).await;

  let rows = s.search(&BiasQuery::default()).await.unwrap();
  assert_eq!(rows.len(), 3);
  assert_eq!(rows[0].name, "CreditScorer");
  assert_eq!(rows[2].name, "FaceSet");
}

#[tokio::test]
async fn free_text_matches_across_fields_case_insensitively() {
  let s = store().await;
  seeded(&s).await;

  // Name match.
  let rows = s
    .search(&BiasQuery { search: "faceset".into(), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "FaceSet");

  // Submitter username match.
  let rows = s
    .search(&BiasQuery { search: "ALICE".into(), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(rows.len(), 3);

  // Domain match.
  let rows = s
    .search(&BiasQuery { search: "hiring".into(), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn filters_compose_with_and_semantics() {
  let s = store().await;
  seeded(&s).await;

  let rows = s
    .search(&BiasQuery {
      source_kind: "Algorithm".into(),
      severity: "Medium".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "RankNet");

  // Same kind, severity nothing matches.
  let rows = s
    .search(&BiasQuery {
      source_kind: "Algorithm".into(),
      severity: "High".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(rows.is_empty());

  let rows = s
    .search(&BiasQuery {
      bias_type: "Representation Bias".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "FaceSet");
}

#[tokio::test]
async fn bias_categories_are_distinct_and_sorted() {
  let s = store().await;
  seeded(&s).await;

  let types = s.bias_categories().await.unwrap();
  assert_eq!(types, vec!["Measurement Bias", "Representation Bias"]);
}

#[tokio::test]
async fn get_bias_aggregates_occurrences() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  let record = s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  let detail = s.get_bias(record.bias_id).await.unwrap().unwrap();
  assert_eq!(detail.occurrence_count, 0);

  s.seed_occurrence(record.bias_id, 3).await.unwrap();
  s.seed_occurrence(record.bias_id, 2).await.unwrap();

  let detail = s.get_bias(record.bias_id).await.unwrap().unwrap();
  assert_eq!(detail.occurrence_count, 5);
}

#[tokio::test]
async fn get_bias_missing_returns_none() {
  let s = store().await;
  assert!(s.get_bias(1).await.unwrap().is_none());
}

// ─── Edit / delete ───────────────────────────────────────────────────────────

fn update_fields() -> BiasUpdate {
  BiasUpdate {
    name: "FaceSet v2".into(),
    domain: "Biometrics".into(),
    description: "Skews toward lighter skin tones".into(),
    bias_type: "Sampling Bias".into(),
    severity: Severity::Medium,
    attrs: SourceAttrs {
      size: Some("120k images".into()),
      ..SourceAttrs::default()
    },
    mitigation_strategies: "Stratified resampling".into(),
  }
}

#[tokio::test]
async fn update_roundtrips_fields_and_keeps_source_kind() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  let record = s.insert_approved(alice, submission("FaceSet")).await.unwrap();

  s.update_bias(record.bias_id, update_fields()).await.unwrap();

  let detail = s.get_bias(record.bias_id).await.unwrap().unwrap();
  assert_eq!(detail.record.name, "FaceSet v2");
  assert_eq!(detail.record.domain, "Biometrics");
  assert_eq!(detail.record.bias_type, "Sampling Bias");
  assert_eq!(detail.record.severity, Severity::Medium);
  assert_eq!(detail.record.attrs.size.as_deref(), Some("120k images"));
  // Immutable post-creation.
  assert_eq!(detail.record.source_kind, SourceKind::Dataset);

  let strategy = s.get_strategy(record.bias_id).await.unwrap().unwrap();
  assert_eq!(strategy.m_strategy_description, "Stratified resampling");
}

#[tokio::test]
async fn update_missing_record_errors() {
  let s = store().await;
  let err = s.update_bias(7, update_fields()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::BiasNotFound(7))
  ));
}

#[tokio::test]
async fn delete_cascades_to_strategy() {
  let s = store().await;
  let alice = register(&s, "alice").await;
  let record = s.insert_approved(alice, submission("FaceSet")).await.unwrap();
  s.seed_occurrence(record.bias_id, 1).await.unwrap();

  s.delete_bias(record.bias_id).await.unwrap();

  assert!(s.get_bias(record.bias_id).await.unwrap().is_none());
  assert!(s.get_strategy(record.bias_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_record_errors() {
  let s = store().await;
  let err = s.delete_bias(7).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(biasboard_core::Error::BiasNotFound(7))
  ));
}

// ─── End-to-end scenario ─────────────────────────────────────────────────────

#[tokio::test]
async fn submitted_report_flows_through_approval_into_search() {
  let s = store().await;

  let pending = s.submit(submission("FaceSet")).await.unwrap();
  assert_eq!(s.list_pending().await.unwrap().len(), 1);

  let record = s.approve(pending.request_id).await.unwrap();
  assert_eq!(record.severity, Severity::High);
  let strategy = s.get_strategy(record.bias_id).await.unwrap().unwrap();
  assert_eq!(strategy.m_strategy_description, "Rebalance sampling");

  let high = s
    .search(&BiasQuery { severity: "High".into(), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(high.len(), 1);
  assert_eq!(high[0].bias_id, record.bias_id);

  let low = s
    .search(&BiasQuery { severity: "Low".into(), ..Default::default() })
    .await
    .unwrap();
  assert!(low.is_empty());
}
