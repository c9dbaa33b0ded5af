use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000003_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(integer(Invoice::UserId))
                    .col(integer_null(Invoice::ClientId))
                    .col(string_uniq(Invoice::InvoiceNumber))
                    .col(date(Invoice::Date))
                    .col(date(Invoice::DueDate))
                    .col(double(Invoice::Subtotal).default(0.0))
                    .col(double(Invoice::Tax).default(0.0))
                    .col(double(Invoice::Total))
                    .col(text_null(Invoice::Notes))
                    .col(string(Invoice::Status).default("draft"))
                    .col(timestamp_null(Invoice::SentAt))
                    .col(timestamp_null(Invoice::PaidAt))
                    .col(
                        timestamp(Invoice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Invoice::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_user_id")
                            .from(Invoice::Table, Invoice::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_client_id")
                            .from(Invoice::Table, Invoice::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    UserId,
    ClientId,
    InvoiceNumber,
    Date,
    DueDate,
    Subtotal,
    Tax,
    Total,
    Notes,
    Status,
    SentAt,
    PaidAt,
    CreatedAt,
    UpdatedAt,
}
