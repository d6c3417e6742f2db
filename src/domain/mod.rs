//! Domain layer - Core business entities and logic
//!
//! This module contains the user entity, its derived admin flag and the
//! narrow credentials shape, independent of infrastructure concerns.

pub mod admin;
pub mod credentials;
pub mod user;

pub use admin::AdminAllowList;
pub use credentials::Credentials;
pub use user::{now_utc, User, UserResponse};
