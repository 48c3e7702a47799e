//! Database module providing connection management, migrations, and queries.

pub mod access_keys;
pub mod organizations;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::migration::Migrator;

/// Database connection pool wrapper around a SeaORM connection.
///
/// The pool is owned by the embedding application; query functions in
/// the submodules borrow `&DatabaseConnection` for the duration of one
/// request and never open or close connections themselves.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect_timeout(Duration::from_secs(config.database.connect_timeout_secs))
            .sqlx_logging(config.is_development());

        debug!(
            max_connections = config.database.max_connections,
            min_connections = config.database.min_connections,
            "Connecting to database"
        );
        let conn = Database::connect(options).await?;
        info!("Connected to database");

        Ok(DbPool { conn })
    }

    /// Get the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Close the underlying connection pool.
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}
