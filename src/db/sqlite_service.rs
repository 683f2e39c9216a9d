use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Process-wide handle to the review app's sqlite database. Opened once at
/// startup and shared read-only by every request.
#[derive(Clone)]
pub struct SqliteService {
    pub(crate) db: DatabaseConnection,
}

impl SqliteService {
    /// Opens the database file (creating it if missing), ensures the schema
    /// exists and verifies the connection answers before handing it out.
    pub async fn new(db_path: &str) -> Result<Self, DbErr> {
        let url = format!("sqlite://{}?mode=rwc", db_path);
        log::info!("Opening sqlite store at {}", db_path);
        let db = Database::connect(url).await?;
        Migrator::up(&db, None).await?;
        db.ping().await?;
        log::info!("Sqlite store ready.");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn health_check(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}
