//! Migration runner behavior against the in-memory engine.

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use surrealdb_types::SurrealValue;

#[derive(Debug, SurrealValue)]
struct AppliedRow {
    version: u32,
    name: String,
}

async fn fresh_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    db
}

#[tokio::test]
async fn fresh_database_applies_and_records_every_migration() {
    let db = fresh_db().await;

    let applied = campus_db::run_migrations(&db).await.unwrap();
    assert_eq!(applied, 1);

    let mut result = db
        .query("SELECT version, name FROM _migration ORDER BY version ASC")
        .await
        .unwrap();
    let rows: Vec<AppliedRow> = result.take(0).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 1);
    assert_eq!(rows[0].name, "initial_schema");
}

#[tokio::test]
async fn rerunning_applies_nothing() {
    let db = fresh_db().await;

    assert_eq!(campus_db::run_migrations(&db).await.unwrap(), 1);
    assert_eq!(campus_db::run_migrations(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn migrated_schema_accepts_writes() {
    let db = fresh_db().await;
    campus_db::run_migrations(&db).await.unwrap();

    let result = db
        .query("CREATE group SET name = 'CS-101', start_year = 2024")
        .await
        .unwrap();
    assert!(result.check().is_ok());
}
