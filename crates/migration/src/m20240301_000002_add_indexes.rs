use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Password: unique lookup index on service_name, used by both the
        // exact and substring read paths.
        manager
            .create_index(
                Index::create()
                    .name("ix_password_service_name")
                    .table(Password::Table)
                    .col(Password::ServiceName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("ix_password_service_name").table(Password::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Password { Table, ServiceName }
