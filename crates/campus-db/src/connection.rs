//! SurrealDB connection management.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

use crate::error::DbError;
use crate::schema;

/// Root credentials for the WebSocket connection.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Connection settings, assembled by the binary from CLI flags or
/// environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub credentials: Credentials,
}

/// A connected client scoped to one namespace and database.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Open the WebSocket connection, sign in as root, and select the
    /// configured namespace and database.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.credentials.username.clone(),
            password: config.credentials.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "connected to SurrealDB"
        );

        Ok(Self { db })
    }

    /// Bring the selected database up to the current schema version.
    pub async fn migrate(&self) -> Result<(), DbError> {
        schema::run_migrations(&self.db).await?;
        Ok(())
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}
