//! User service - Handles user-related use cases.
//!
//! Validates inbound credentials before handing primitives to the
//! repository. Errors from the repository pass through unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Credentials, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by id
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Get user by username (case-insensitive)
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// Register a user signing in through the OAuth provider for the first time
    async fn register(
        &self,
        id: String,
        username: String,
        avatar_url: String,
        credentials: Credentials,
    ) -> AppResult<User>;

    /// Store fresh OAuth credentials for an existing user
    async fn refresh_credentials(&self, id: &str, credentials: Credentials) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.repo.find_by_username(username).await
    }

    async fn register(
        &self,
        id: String,
        username: String,
        avatar_url: String,
        credentials: Credentials,
    ) -> AppResult<User> {
        let credentials = credentials.validated()?;
        self.repo
            .create_user(
                id,
                username,
                avatar_url,
                credentials.access_token,
                credentials.access_secret,
            )
            .await
    }

    async fn refresh_credentials(&self, id: &str, credentials: Credentials) -> AppResult<User> {
        let credentials = credentials.validated()?;
        self.repo
            .refresh_credentials(id, &credentials.access_token, &credentials.access_secret)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::now_utc;
    use crate::errors::{AppError, UserKey};
    use crate::infra::MockUserRepository;

    fn create_test_user(id: &str, username: &str) -> User {
        let now = now_utc();
        User {
            id: id.to_string(),
            username: username.to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            access_token: "tok".to_string(),
            access_secret: "sec".to_string(),
            created_at: now,
            updated_at: now,
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "1")
            .returning(|id| Ok(create_test_user(id, "bob")));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user("1").await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.username, "bob");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Err(AppError::not_found(UserKey::Id, id)));

        let service = UserManager::new(Arc::new(repo));
        let err = service.get_user("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.key(), Some(UserKey::Id));
    }

    #[tokio::test]
    async fn test_get_user_by_username_delegates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username| username == "ALICE")
            .times(1)
            .returning(|_| Ok(create_test_user("7", "alice")));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user_by_username("ALICE").await.unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_passes_credentials_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|id, username, _, token, secret| {
                id == "1" && username == "bob" && token == "tok" && secret == "sec"
            })
            .times(1)
            .returning(|id, username, _, _, _| Ok(create_test_user(&id, &username)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .register(
                "1".into(),
                "bob".into(),
                String::new(),
                Credentials::new("tok", "sec"),
            )
            .await
            .unwrap();

        assert_eq!(user.id, "1");
    }

    #[tokio::test]
    async fn test_register_conflict_is_reported() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .returning(|_, username, _, _, _| {
                Err(AppError::already_exists(UserKey::Username, username))
            });

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .register(
                "2".into(),
                "BOB".into(),
                String::new(),
                Credentials::new("tok", "sec"),
            )
            .await
            .unwrap_err();

        assert!(err.is_already_exists());
        assert_eq!(err.key(), Some(UserKey::Username));
    }

    #[tokio::test]
    async fn test_refresh_rejects_empty_credentials_without_touching_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_refresh_credentials().never();

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .refresh_credentials("1", Credentials::new("", "sec2"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_refresh_credentials_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_refresh_credentials()
            .withf(|id, token, secret| id == "1" && token == "tok2" && secret == "sec2")
            .times(1)
            .returning(|id, token, secret| {
                let mut user = create_test_user(id, "bob");
                user.refresh_credentials(token.to_string(), secret.to_string());
                Ok(user)
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .refresh_credentials("1", Credentials::new("tok2", "sec2"))
            .await
            .unwrap();

        assert_eq!(user.access_token, "tok2");
        assert_eq!(user.access_secret, "sec2");
    }
}
