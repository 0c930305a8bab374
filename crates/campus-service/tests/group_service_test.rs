//! Integration tests for the group service using in-memory SurrealDB.

use campus_core::error::CampusError;
use campus_core::models::group::{
    CreateGroup, GROUP_NAME_TOO_SHORT, GROUP_START_YEAR_TOO_SMALL,
};
use campus_db::repository::SurrealGroupRepository;
use campus_service::group::{GroupLookup, GroupService};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

async fn setup() -> GroupService<SurrealGroupRepository<surrealdb::engine::local::Db>> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    campus_db::run_migrations(&db).await.unwrap();
    GroupService::new(SurrealGroupRepository::new(db))
}

#[tokio::test]
async fn create_and_list_round_trip() {
    let svc = setup().await;

    let id = svc
        .create(CreateGroup {
            name: "Group".into(),
            start_year: 2025,
        })
        .await
        .unwrap();

    let groups = svc.list().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, id.to_string());
    assert_eq!(groups[0].name, "Group");
    assert_eq!(groups[0].start_year, 2025);
}

#[tokio::test]
async fn invalid_fields_are_aggregated_and_nothing_persists() {
    let svc = setup().await;

    let err = svc
        .create(CreateGroup {
            name: "G".into(),
            start_year: 2019,
        })
        .await
        .unwrap_err();

    let CampusError::Validation { messages } = err else {
        panic!("expected validation error, got: {err:?}");
    };
    assert_eq!(
        messages,
        vec![GROUP_NAME_TOO_SHORT, GROUP_START_YEAR_TOO_SMALL]
    );

    assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn exists_rejects_malformed_id_without_storage_call() {
    let svc = setup().await;

    let err = svc.exists("not-a-valid-id").await.unwrap_err();

    let CampusError::Validation { messages } = err else {
        panic!("expected validation error, got: {err:?}");
    };
    assert_eq!(messages, vec!["Group id not-a-valid-id is invalid"]);
}

#[tokio::test]
async fn exists_reports_presence() {
    let svc = setup().await;

    let id = svc
        .create(CreateGroup {
            name: "Chemistry".into(),
            start_year: 2024,
        })
        .await
        .unwrap();

    assert!(svc.exists(id.as_str()).await.unwrap());
    assert!(!svc.exists("ffffffffffffffffffffffff").await.unwrap());
}
