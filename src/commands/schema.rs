//! Schema command - Print the table DDL without touching a database.

use sea_orm::DbBackend;

use crate::cli::args::{Backend, SchemaArgs};
use crate::errors::AppResult;
use crate::infra::db::schema::create_table_sql;

impl From<Backend> for DbBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Postgres => DbBackend::Postgres,
            Backend::Mysql => DbBackend::MySql,
            Backend::Sqlite => DbBackend::Sqlite,
        }
    }
}

/// Execute the schema command
pub fn execute(args: SchemaArgs) -> AppResult<()> {
    tracing::debug!(backend = ?args.backend, "Rendering table DDL");
    println!("{};", create_table_sql(args.backend.into()));
    Ok(())
}
