//! Migration: Create users table.

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH};
use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only autoincrements a column declared exactly INTEGER PRIMARY KEY
        let mut id = ColumnDef::new(Users::Id);
        match manager.get_database_backend() {
            DbBackend::Sqlite => id.integer(),
            _ => id.big_integer(),
        };
        id.not_null().auto_increment().primary_key();

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(&mut id)
                    .col(
                        ColumnDef::new(Users::Name)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Password)
                            .string_len(MAX_PASSWORD_LENGTH)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Password,
}
