use std::sync::Arc;

use actix_web::{get, web};
use entity::user::Model as UserModel;

use crate::db::sqlite_service::SqliteService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserLookup;

#[get("")]
async fn get_default(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<UserModel> {
    let user = db.find_user(UserLookup::Default).await?;
    Ok(ApiResponse::Ok(user))
}

// `[^/]*` also admits the empty segment, so a bare trailing slash falls back
// to the default lookup instead of 404ing on the route table.
#[get("/{user_id:[^/]*}")]
async fn get_by_id(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<String>,
) -> ApiResult<UserModel> {
    let raw = path.into_inner();
    let lookup = match UserLookup::from_path_segment(&raw) {
        Some(lookup) => lookup,
        None => return Err(AppError::NotFound),
    };
    let user = db.find_user(lookup).await?;
    Ok(ApiResponse::Ok(user))
}
