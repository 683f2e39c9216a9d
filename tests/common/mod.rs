use std::sync::Arc;

use review_api::db::sqlite_service::SqliteService;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<SqliteService>,
    // Held so the database file outlives the test.
    _data_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = data_dir.path().join("review_app.db");

        let db = Arc::new(
            SqliteService::new(db_path.to_str().expect("Temp path is not utf-8"))
                .await
                .expect("Failed to initialize SqliteService"),
        );

        TestContext {
            db,
            _data_dir: data_dir,
        }
    }
}
