//! Fixed DDL for the `auth_user` table.
//!
//! Used by the initial migration and the `schema` command. Nothing on the
//! request path touches this.

use sea_orm::sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use sea_orm::DbBackend;

use crate::infra::repositories::entities::user::{Column, Entity};

/// Table definition: id, username, avatar, the two OAuth secrets and the
/// two timestamps, with unique constraints on `id` and `username`.
///
/// Timestamps are `timestamp with time zone` so they decode as
/// `DateTime<Utc>` on every backend.
pub fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .col(
            ColumnDef::new(Column::Id)
                .text()
                .not_null()
                .primary_key()
                .unique_key(),
        )
        .col(ColumnDef::new(Column::Username).text().not_null().unique_key())
        .col(ColumnDef::new(Column::Avatar).text().not_null())
        .col(ColumnDef::new(Column::AccessToken).text().not_null())
        .col(ColumnDef::new(Column::AccessSecret).text().not_null())
        .col(
            ColumnDef::new(Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Column::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

pub fn drop_table_statement() -> TableDropStatement {
    Table::drop().table(Entity).to_owned()
}

/// Render the table DDL for the given backend.
pub fn create_table_sql(backend: DbBackend) -> String {
    backend.build(&create_table_statement()).sql
}
