//! User domain entity and related types.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::Serialize;

use super::AdminAllowList;

/// Stored timestamps keep microsecond precision, which is what Postgres
/// keeps for `timestamptz`.
const TIMESTAMP_PRECISION_DIGITS: u16 = 6;

/// Current time truncated to storage precision.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(TIMESTAMP_PRECISION_DIGITS)
}

/// User domain entity
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    #[serde(skip_serializing)]
    pub access_secret: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Derived on load, never persisted
    pub is_admin: bool,
}

// Don't expose secrets in debug output (security)
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("avatar_url", &self.avatar_url)
            .field("access_token", &"[REDACTED]")
            .field("access_secret", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl User {
    /// Create a new user; both timestamps are set to now.
    pub fn new(
        id: String,
        username: String,
        avatar_url: String,
        access_token: String,
        access_secret: String,
    ) -> Self {
        let now = now_utc();
        Self {
            id,
            username,
            avatar_url,
            access_token,
            access_secret,
            created_at: now,
            updated_at: now,
            is_admin: false,
        }
    }

    /// Whether this user's id is on the administrator allow-list.
    pub fn compute_is_admin(&self, admins: &AdminAllowList) -> bool {
        admins.contains(&self.id)
    }

    /// Recompute the derived admin flag.
    pub fn with_admin_flag(mut self, admins: &AdminAllowList) -> Self {
        self.is_admin = self.compute_is_admin(admins);
        self
    }

    /// Replace the OAuth credentials and advance `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even if the wall clock
    /// has not (or went backwards) since the last write.
    pub fn refresh_credentials(&mut self, access_token: String, access_secret: String) {
        self.access_token = access_token;
        self.access_secret = access_secret;

        let now = now_utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_admin: user.is_admin,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_admin: user.is_admin,
        }
    }
}
