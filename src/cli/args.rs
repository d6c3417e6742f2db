//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Auth user store - provisioning and maintenance for OAuth-backed users
#[derive(Parser, Debug)]
#[command(name = "auth-user-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Print the auth_user table DDL
    Schema(SchemaArgs),

    /// Look up, create or update users
    User(UserArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// SQL dialects the DDL can be rendered for
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Mysql,
    Sqlite,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// SQL dialect to render
    #[arg(long, value_enum, default_value_t = Backend::Postgres)]
    pub backend: Backend,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// User actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Show a user by id or username
    Get(LookupArgs),

    /// Create a user
    Create {
        /// Provider-issued user id
        #[arg(long)]
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        avatar_url: String,
        #[arg(long)]
        access_token: String,
        #[arg(long)]
        access_secret: String,
    },

    /// Replace a user's OAuth credentials
    Refresh {
        #[arg(long)]
        id: String,
        #[arg(long)]
        access_token: String,
        #[arg(long)]
        access_secret: String,
    },
}

/// Exactly one lookup key
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    #[arg(long)]
    pub id: Option<String>,
    /// Matched case-insensitively
    #[arg(long)]
    pub username: Option<String>,
}
