//! Database migrations for system config

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_system_config::Migration)]
    }
}

mod m20250301_000001_create_system_config {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SystemConfig::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SystemConfig::Id)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SystemConfig::Data).json().not_null())
                        .col(
                            ColumnDef::new(SystemConfig::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(SystemConfig::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SystemConfig::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SystemConfig {
        Table,
        Id,
        Data,
        CreatedAt,
        UpdatedAt,
    }
}
