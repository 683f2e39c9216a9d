use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, user::UserLookup};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};

/// Reserved username marking the single default anonymous user row.
pub const ANONYMOUS_USERNAME: &str = "匿名ラッコ";

impl SqliteService {
    /// Runs exactly one query for the given lookup.
    pub async fn find_user(&self, lookup: UserLookup) -> Result<UserModel, AppError> {
        match lookup {
            UserLookup::ById(id) => self.get_user_by_id(id).await,
            UserLookup::Default => self.get_default_user().await,
        }
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Anonymous user does not exist".into()))?)
    }

    /// First row carrying the reserved username. Ordering among duplicates is
    /// whatever the store returns first.
    pub async fn get_default_user(&self) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(ANONYMOUS_USERNAME))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Anonymous user does not exist".into()))?)
    }
}
