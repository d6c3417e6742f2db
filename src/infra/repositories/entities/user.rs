//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub avatar: String,
    pub access_token: String,
    pub access_secret: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// `is_admin` comes out `false`; the repository derives it after loading.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            avatar_url: model.avatar,
            access_token: model.access_token,
            access_secret: model.access_secret,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_admin: false,
        }
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id.clone()),
            username: Set(user.username.clone()),
            avatar: Set(user.avatar_url.clone()),
            access_token: Set(user.access_token.clone()),
            access_secret: Set(user.access_secret.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}
