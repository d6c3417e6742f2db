//! User repository: lookups, creation with duplicate pre-checks and the
//! credentials refresh.
//!
//! The pre-checks in `create_user` are advisory. Two concurrent creates for
//! the same id or username can both pass them; the loser then fails on the
//! table's unique constraint and surfaces as `AppError::Storage`, not
//! `AlreadyExists`.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{AdminAllowList, User};
use crate::errors::{AppError, AppResult, UserKey};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every returned `User` has `is_admin` computed against the allow-list the
/// repository was built with.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact id
    async fn find_by_id(&self, id: &str) -> AppResult<User>;

    /// Find user by username, ignoring case
    async fn find_by_username(&self, username: &str) -> AppResult<User>;

    /// Create a new user; fails with `AlreadyExists` if the id or username
    /// is already taken
    async fn create_user(
        &self,
        id: String,
        username: String,
        avatar_url: String,
        access_token: String,
        access_secret: String,
    ) -> AppResult<User>;

    /// Overwrite the stored OAuth credentials and advance `updated_at`
    async fn refresh_credentials(
        &self,
        id: &str,
        access_token: &str,
        access_secret: &str,
    ) -> AppResult<User>;
}

/// Concrete implementation of UserRepository over a SeaORM connection.
///
/// Holds no state beyond the shared connection handle and the immutable
/// allow-list, so one instance can serve any number of concurrent callers.
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
    admins: AdminAllowList,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection, admins: AdminAllowList) -> Self {
        Self { db, admins }
    }

    fn hydrate(&self, model: user::Model) -> User {
        User::from(model).with_admin_flag(&self.admins)
    }
}

/// Turn a pre-check lookup into "key is free" or the error to report.
fn ensure_vacant(lookup: AppResult<User>, key: UserKey, value: &str) -> AppResult<()> {
    match lookup {
        Ok(_) => {
            tracing::warn!(%key, value, "User already exists");
            Err(AppError::already_exists(key, value))
        }
        Err(AppError::NotFound { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        tracing::debug!(user_id = id, "Finding user by id");

        let model = UserEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(UserKey::Id, id))?;

        Ok(self.hydrate(model))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<User> {
        tracing::debug!(username, "Finding user by username");

        // UPPER(username) = UPPER($1)
        let model = UserEntity::find()
            .filter(
                Expr::expr(Func::upper(Expr::col(user::Column::Username)))
                    .eq(Func::upper(Expr::val(username))),
            )
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(UserKey::Username, username))?;

        Ok(self.hydrate(model))
    }

    async fn create_user(
        &self,
        id: String,
        username: String,
        avatar_url: String,
        access_token: String,
        access_secret: String,
    ) -> AppResult<User> {
        if !id.is_empty() {
            ensure_vacant(self.find_by_id(&id).await, UserKey::Id, &id)?;
        }
        if !username.is_empty() {
            ensure_vacant(
                self.find_by_username(&username).await,
                UserKey::Username,
                &username,
            )?;
        }

        let user = User::new(id, username, avatar_url, access_token, access_secret);

        UserEntity::insert(ActiveModel::from(&user))
            .exec_without_returning(&self.db)
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user.with_admin_flag(&self.admins))
    }

    async fn refresh_credentials(
        &self,
        id: &str,
        access_token: &str,
        access_secret: &str,
    ) -> AppResult<User> {
        let mut user = self.find_by_id(id).await?;
        user.refresh_credentials(access_token.to_owned(), access_secret.to_owned());

        let result = UserEntity::update_many()
            .col_expr(user::Column::AccessToken, Expr::value(user.access_token.clone()))
            .col_expr(user::Column::AccessSecret, Expr::value(user.access_secret.clone()))
            .col_expr(user::Column::UpdatedAt, Expr::value(user.updated_at))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        // The row vanished between the load and the update
        if result.rows_affected == 0 {
            return Err(AppError::not_found(UserKey::Id, id));
        }

        tracing::info!(user_id = id, "User credentials refreshed");
        Ok(user)
    }
}
