//! Create `password` table.
//!
//! One row per stored service credential; the hashed form is written once
//! at creation and never updated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Password::Table)
                    .if_not_exists()
                    .col(pk_auto(Password::Id))
                    .col(string_len(Password::ServiceName, 30).not_null())
                    .col(string_len(Password::Password, 50).not_null())
                    .col(string_len(Password::HashedPassword, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Password::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Password { Table, Id, ServiceName, Password, HashedPassword }
