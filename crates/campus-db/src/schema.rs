//! Schema definitions and migration runner for SurrealDB.
//!
//! Both tables use SCHEMAFULL mode. The `ASSERT` constraints on
//! `group.name`, `group.start_year`, and `student.birth_date` are the
//! storage engine's second line of defense behind service-level
//! validation. Note that `birth_date <= time::now()` is evaluated at
//! write time, while the service checks the same bound at validation
//! time; the two may disagree across a date boundary.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct VersionRow {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    tables: &'static [&'static str],
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    tables: &["group", "student"],
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Groups
-- =======================================================================
DEFINE TABLE group SCHEMAFULL;
DEFINE FIELD name ON TABLE group TYPE string \
    ASSERT string::len($value) >= 2;
DEFINE FIELD start_year ON TABLE group TYPE int \
    ASSERT $value >= 2020;
DEFINE FIELD created_at ON TABLE group TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Students
-- =======================================================================
DEFINE TABLE student SCHEMAFULL;
DEFINE FIELD name ON TABLE student TYPE string;
DEFINE FIELD surname ON TABLE student TYPE string;
DEFINE FIELD group_id ON TABLE student TYPE string;
DEFINE FIELD birth_date ON TABLE student TYPE datetime \
    ASSERT $value <= time::now();
DEFINE FIELD phone_numbers ON TABLE student TYPE option<array<string>>;
DEFINE FIELD address ON TABLE student TYPE option<object>;
DEFINE FIELD address.country ON TABLE student TYPE option<string>;
DEFINE FIELD address.town ON TABLE student TYPE option<string>;
DEFINE FIELD address.address_string ON TABLE student TYPE option<string>;
DEFINE FIELD created_at ON TABLE student TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE student TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_student_group ON TABLE student COLUMNS group_id;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Apply every migration newer than the recorded schema version and
/// return how many ran.
///
/// The `_migration` tracking table is created on first use, and all
/// DEFINE statements are idempotent, so calling this on every startup
/// is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(format!("migration table setup failed: {e}")))?;

    let from = current_version(db).await?;
    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > from) {
        apply(db, migration).await?;
        applied += 1;
    }

    if applied > 0 {
        info!(from_version = from, to_version = from + applied, "schema migrated");
    }
    Ok(applied)
}

async fn current_version<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let rows: Vec<VersionRow> = result.take(0)?;
    Ok(rows.first().map(|row| row.version).unwrap_or(0))
}

async fn apply<C: Connection>(db: &Surreal<C>, migration: &Migration) -> Result<(), DbError> {
    info!(
        version = migration.version,
        name = migration.name,
        tables = ?migration.tables,
        "applying schema migration"
    );

    db.query(migration.sql).await?.check().map_err(|e| {
        DbError::Migration(format!("{} (v{}): {e}", migration.name, migration.version))
    })?;

    // Record id doubles as the version, so a replayed migration can
    // never be recorded twice.
    db.query("CREATE type::record('_migration', $version) SET version = $version, name = $name")
        .bind(("version", migration.version))
        .bind(("name", migration.name))
        .await?
        .check()
        .map_err(|e| DbError::Migration(format!("recording v{} failed: {e}", migration.version)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_v1_defines_both_tables() {
        assert!(SCHEMA_V1.contains("DEFINE TABLE group"));
        assert!(SCHEMA_V1.contains("DEFINE TABLE student"));
    }

    #[test]
    fn migrations_are_ordered() {
        for window in MIGRATIONS.windows(2) {
            assert!(
                window[0].version < window[1].version,
                "Migrations must be in ascending version order"
            );
        }
    }

    #[test]
    fn every_migration_names_its_tables() {
        for migration in MIGRATIONS {
            assert!(!migration.tables.is_empty());
            for table in migration.tables {
                assert!(migration.sql.contains(&format!("DEFINE TABLE {table}")));
            }
        }
    }
}
