//! Application entry point.

use std::net::SocketAddr;

use anyhow::Context;
use campus_api::AppState;
use campus_db::{Credentials, DbConfig, DbManager};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "campus-server", about = "Groups and students over HTTP")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "CAMPUS_LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    listen_addr: SocketAddr,

    /// SurrealDB WebSocket URL.
    #[arg(long, env = "CAMPUS_DB_URL", default_value = "127.0.0.1:8000")]
    db_url: String,

    /// SurrealDB namespace.
    #[arg(long, env = "CAMPUS_DB_NAMESPACE", default_value = "campus")]
    db_namespace: String,

    /// SurrealDB database name.
    #[arg(long, env = "CAMPUS_DB_DATABASE", default_value = "main")]
    db_database: String,

    /// SurrealDB root username.
    #[arg(long, env = "CAMPUS_DB_USERNAME", default_value = "root")]
    db_username: String,

    /// SurrealDB root password.
    #[arg(long, env = "CAMPUS_DB_PASSWORD", default_value = "root")]
    db_password: String,
}

impl Args {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.db_url.clone(),
            namespace: self.db_namespace.clone(),
            database: self.db_database.clone(),
            credentials: Credentials {
                username: self.db_username.clone(),
                password: self.db_password.clone(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("campus=info".parse()?),
        )
        .json()
        .init();

    let args = Args::parse();

    let db = DbManager::connect(&args.db_config())
        .await
        .context("failed to connect to SurrealDB")?;
    db.migrate()
        .await
        .context("failed to apply schema migrations")?;

    let app = campus_api::router(AppState::new(db.client().clone()));

    let listener = tokio::net::TcpListener::bind(args.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", args.listen_addr))?;
    tracing::info!(addr = %args.listen_addr, "Campus server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Campus server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install shutdown handler");
    }
}
