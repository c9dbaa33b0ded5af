use sea_orm_migration::{prelude::*, schema::*};

use super::m20250902_000005_create_invoice_table::Invoice;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceItem::Id))
                    .col(integer(InvoiceItem::InvoiceId))
                    .col(date_null(InvoiceItem::Date))
                    .col(string(InvoiceItem::Description))
                    .col(double(InvoiceItem::Hours))
                    .col(double(InvoiceItem::Rate))
                    .col(double(InvoiceItem::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_item_invoice_id")
                            .from(InvoiceItem::Table, InvoiceItem::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InvoiceItem {
    Table,
    Id,
    InvoiceId,
    Date,
    Description,
    Hours,
    Rate,
    Amount,
}
