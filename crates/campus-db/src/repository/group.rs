//! SurrealDB implementation of [`GroupRepository`].

use campus_core::error::CampusResult;
use campus_core::id::DocumentId;
use campus_core::models::group::{CreateGroup, Group};
use campus_core::repository::GroupRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct GroupRow {
    record_id: String,
    name: String,
    start_year: i32,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl GroupRow {
    fn try_into_group(self) -> Result<Group, DbError> {
        let id = DocumentId::parse(&self.record_id)
            .ok_or_else(|| DbError::Malformed(format!("invalid record id: {}", self.record_id)))?;
        Ok(Group {
            id,
            name: self.name,
            start_year: self.start_year,
        })
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Group repository.
#[derive(Clone)]
pub struct SurrealGroupRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealGroupRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> GroupRepository for SurrealGroupRepository<C> {
    async fn create(&self, input: CreateGroup) -> CampusResult<DocumentId> {
        let id = DocumentId::generate();

        let result = self
            .db
            .query(
                "CREATE type::record('group', $id) SET \
                 name = $name, start_year = $start_year",
            )
            .bind(("id", id.as_str().to_owned()))
            .bind(("name", input.name))
            .bind(("start_year", input.start_year))
            .await
            .map_err(DbError::from)?;

        result
            .check()
            .map_err(|e| DbError::Constraint(e.to_string()))?;

        Ok(id)
    }

    async fn list(&self) -> CampusResult<Vec<Group>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM group \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GroupRow> = result.take(0).map_err(DbError::from)?;

        let groups = rows
            .into_iter()
            .map(|row| row.try_into_group())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(groups)
    }

    async fn exists(&self, id: &DocumentId) -> CampusResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM group \
                 WHERE id = type::record('group', $id) GROUP ALL",
            )
            .bind(("id", id.as_str().to_owned()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;

        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }
}
