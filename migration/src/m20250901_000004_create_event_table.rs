use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000002_create_company_table::Company,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(string(Event::Client))
                    .col(integer(Event::EmployeeId))
                    .col(integer(Event::CompanyId))
                    .col(timestamp(Event::Start))
                    .col(timestamp(Event::End))
                    .col(string_null(Event::Color))
                    .col(boolean(Event::Completed).default(false))
                    .col(boolean(Event::Invoiced).default(false))
                    .col(double(Event::Hours))
                    .col(double(Event::Rate))
                    .col(double(Event::Amount))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_employee_id")
                            .from(Event::Table, Event::EmployeeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_company_id")
                            .from(Event::Table, Event::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_company_start")
                    .table(Event::Table)
                    .col(Event::CompanyId)
                    .col(Event::Start)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Client,
    EmployeeId,
    CompanyId,
    Start,
    End,
    Color,
    Completed,
    Invoiced,
    Hours,
    Rate,
    Amount,
    CreatedAt,
    UpdatedAt,
}
