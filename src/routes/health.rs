use std::sync::Arc;

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
async fn health(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<Response> {
    db.health_check().await?;
    Ok(ApiResponse::EmptyOk)
}
