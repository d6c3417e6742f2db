//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `schema` - Print the table DDL
//! - `user` - Look up, create and refresh users

pub mod args;

pub use args::{Cli, Commands};
