use actix_web::{web, App};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Model as UserModel};
use review_api::db::{sqlite_service::SqliteService, user::ANONYMOUS_USERNAME};
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<SqliteService>,
}

impl TestClient {
    pub fn new(db: Arc<SqliteService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(review_api::routes::configure_routes)
    }

    /// Inserts a row the way the review app would; the service itself never
    /// writes, so tests seed through the entity layer directly.
    #[allow(dead_code)]
    pub async fn seed_user(&self, user_id: i64, username: &str) -> UserModel {
        let now = Utc::now();

        UserActive {
            user_id: Set(user_id),
            username: Set(username.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to seed user")
    }

    #[allow(dead_code)]
    pub async fn seed_anonymous_user(&self, user_id: i64) -> UserModel {
        self.seed_user(user_id, ANONYMOUS_USERNAME).await
    }
}
