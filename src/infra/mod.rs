//! Infrastructure layer - External systems integration
//!
//! This module handles the relational store:
//! - Connection management and migrations
//! - Table schema definition
//! - The user repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
