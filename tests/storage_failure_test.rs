//! Failure propagation tests.
//!
//! Uses SeaORM's mock connection to inject store errors at precise points
//! and to inspect which statements were actually issued.

use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult};

use auth_user_store::domain::{now_utc, AdminAllowList};
use auth_user_store::errors::{AppError, UserKey};
use auth_user_store::infra::repositories::entities::UserModel;
use auth_user_store::infra::{UserRepository, UserStore};

fn stored_model() -> UserModel {
    let now = now_utc();
    UserModel {
        id: "1".to_string(),
        username: "bob".to_string(),
        avatar: "https://example.com/bob.png".to_string(),
        access_token: "tok".to_string(),
        access_secret: "sec".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn connection_reset() -> DbErr {
    DbErr::Custom("connection reset by peer".to_string())
}

fn store(db: &DatabaseConnection) -> UserStore {
    UserStore::new(db.clone(), AdminAllowList::default())
}

#[tokio::test]
async fn test_find_by_id_storage_error_propagates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([connection_reset()])
        .into_connection();

    let err = store(&db).find_by_id("1").await.unwrap_err();

    assert!(matches!(err, AppError::Storage(DbErr::Custom(ref msg)) if msg.contains("reset")));
}

#[tokio::test]
async fn test_find_by_username_uses_upper_on_both_sides() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_model()]])
        .into_connection();

    let user = store(&db).find_by_username("BOB").await.unwrap();
    assert_eq!(user.username, "bob");

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert_eq!(statement.matches("UPPER(").count(), 2, "{statement}");
    assert!(statement.contains("BOB"), "{statement}");
}

#[tokio::test]
async fn test_create_pre_check_storage_error_aborts_before_insert() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([connection_reset()])
        .into_connection();

    let err = store(&db)
        .create_user(
            "1".into(),
            "bob".into(),
            String::new(),
            "tok".into(),
            "sec".into(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)));
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_create_username_conflict_skips_insert() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<UserModel>::new(), vec![stored_model()]])
        .into_connection();

    let err = store(&db)
        .create_user(
            "2".into(),
            "BOB".into(),
            String::new(),
            "tok".into(),
            "sec".into(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::AlreadyExists { key: UserKey::Username, ref value } if value == "BOB"
    ));
    // id lookup + username lookup, no insert
    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn test_create_skips_pre_checks_for_empty_keys() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let user = store(&db)
        .create_user(
            String::new(),
            String::new(),
            String::new(),
            "tok".into(),
            "sec".into(),
        )
        .await
        .unwrap();

    assert_eq!(user.created_at, user.updated_at);
    // Insert only
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_create_insert_failure_is_storage_not_conflict() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<UserModel>::new(), Vec::<UserModel>::new()])
        .append_exec_errors([DbErr::Custom(
            "duplicate key value violates unique constraint".to_string(),
        )])
        .into_connection();

    let err = store(&db)
        .create_user(
            "1".into(),
            "bob".into(),
            String::new(),
            "tok".into(),
            "sec".into(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)));
    assert!(!err.is_already_exists());
}

#[tokio::test]
async fn test_refresh_update_failure_returns_no_entity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_model()]])
        .append_exec_errors([connection_reset()])
        .into_connection();

    let result = store(&db).refresh_credentials("1", "tok2", "sec2").await;

    assert!(matches!(result, Err(AppError::Storage(_))));
}

#[tokio::test]
async fn test_refresh_missing_user_issues_no_update() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<UserModel>::new()])
        .into_connection();

    let err = store(&db)
        .refresh_credentials("ghost", "tok2", "sec2")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_refresh_row_vanished_before_update_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_model()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let err = store(&db)
        .refresh_credentials("1", "tok2", "sec2")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { key: UserKey::Id, .. }));
}

#[tokio::test]
async fn test_refresh_success_keeps_identity_fields() {
    let model = stored_model();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let user = store(&db)
        .refresh_credentials("1", "tok2", "sec2")
        .await
        .unwrap();

    assert_eq!(user.access_token, "tok2");
    assert_eq!(user.access_secret, "sec2");
    assert_eq!(user.username, model.username);
    assert_eq!(user.avatar_url, model.avatar);
    assert_eq!(user.created_at, model.created_at);
    assert!(user.updated_at > model.updated_at);
    assert_eq!(db.into_transaction_log().len(), 2);
}
