use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::Name))
                    .col(string_uniq(Company::Email))
                    .col(string(Company::Phone))
                    .col(string_null(Company::RegistrationNumber))
                    .col(string_null(Company::VatNumber))
                    .col(string_null(Company::Industry))
                    .col(string_null(Company::Size))
                    .col(string_null(Company::Street))
                    .col(string_null(Company::City))
                    .col(string_null(Company::State))
                    .col(string_null(Company::ZipCode))
                    .col(string_null(Company::Country))
                    .col(string_null(Company::BankName))
                    .col(string_null(Company::AccountHolder))
                    .col(string_null(Company::AccountNumber))
                    .col(string_null(Company::BranchCode))
                    .col(string_null(Company::AccountType))
                    .col(integer(Company::OwnerId))
                    .col(
                        timestamp(Company::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Company::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_owner_id")
                            .from(Company::Table, Company::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    Email,
    Phone,
    RegistrationNumber,
    VatNumber,
    Industry,
    Size,
    Street,
    City,
    State,
    ZipCode,
    Country,
    BankName,
    AccountHolder,
    AccountNumber,
    BranchCode,
    AccountType,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
