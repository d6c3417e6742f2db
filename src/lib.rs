//! Auth user store - persistence for OAuth-authenticated users
//!
//! Owns the `auth_user` table and the repository over it: lookups by id
//! and (case-insensitive) username, creation guarded by duplicate-key
//! pre-checks, and an OAuth credentials refresh.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, admin allow-list, inbound credentials
//! - **services**: Application use cases
//! - **infra**: Database connection, schema, migrations, repository
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the table
//! cargo run -- migrate up
//!
//! # Print the DDL
//! cargo run -- schema --backend postgres
//!
//! # Look up a user
//! cargo run -- user get --username Alice
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AdminAllowList, Credentials, User, UserResponse};
pub use errors::{AppError, AppResult, UserKey};
pub use infra::{Database, UserRepository, UserStore};
