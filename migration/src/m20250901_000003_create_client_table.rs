use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000002_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(integer(Client::CompanyId))
                    .col(string(Client::Name))
                    .col(string_null(Client::Email))
                    .col(string_null(Client::Phone))
                    .col(double(Client::HourlyRate).default(75.0))
                    .col(
                        timestamp(Client::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Client::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_company_id")
                            .from(Client::Table, Client::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    CompanyId,
    Name,
    Email,
    Phone,
    HourlyRate,
    CreatedAt,
    UpdatedAt,
}
