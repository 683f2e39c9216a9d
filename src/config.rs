use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_path: String,
}

impl EnvConfig {
    /// Every value has a default, so the service runs with no configuration:
    /// the client app expects it on port 3000 next to its database file.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_path: env::var("DB_PATH").unwrap_or_else(|_| "review_app.db".to_string()),
        }
    }
}
