use std::sync::Arc;

use migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{AppError, AppResult};

const SQLITE_PRAGMAS: &[&str] = &[
    "PRAGMA journal_mode=WAL",
    "PRAGMA synchronous=NORMAL",
    "PRAGMA foreign_keys=ON",
    "PRAGMA cache_size=-64000",
];

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        for pragma in SQLITE_PRAGMAS {
            db.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma.to_string())).await?;
        }
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Connection handle built once at startup and passed to whoever needs it.
///
/// The first caller connects and migrates; later callers reuse the
/// connection. A failed attempt leaves the cell empty, so the next call
/// retries instead of caching the failure.
#[derive(Clone)]
pub struct LazyDb {
    url: Option<String>,
    cell: Arc<OnceCell<DatabaseConnection>>,
}

impl LazyDb {
    pub fn new(url: Option<String>) -> Self {
        Self { url, cell: Arc::new(OnceCell::new()) }
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { url: None, cell: Arc::new(OnceCell::new_with(Some(db))) }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() || self.cell.initialized()
    }

    pub async fn get(&self) -> AppResult<&DatabaseConnection> {
        self.cell
            .get_or_try_init(|| async {
                let url = self
                    .url
                    .as_deref()
                    .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
                let db = connect_and_migrate(url).await?;
                info!(backend = ?db.get_database_backend(), "database connected");
                Ok::<_, AppError>(db)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_url_is_a_config_error_on_use() {
        let db = LazyDb::new(None);
        assert!(!db.is_configured());
        let err = db.get().await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn connects_once_and_reuses() {
        let db = LazyDb::new(Some("sqlite::memory:".to_string()));
        let first = db.get().await.unwrap() as *const DatabaseConnection;
        let second = db.get().await.unwrap() as *const DatabaseConnection;
        assert_eq!(first, second);
    }
}
