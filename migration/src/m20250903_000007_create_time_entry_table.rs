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
                    .table(TimeEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeEntry::Id))
                    .col(integer(TimeEntry::UserId))
                    .col(integer_null(TimeEntry::ClientId))
                    .col(string(TimeEntry::Description))
                    .col(double(TimeEntry::Hours))
                    .col(date(TimeEntry::Date))
                    .col(
                        timestamp(TimeEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_entry_user_id")
                            .from(TimeEntry::Table, TimeEntry::UserId)
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
            .drop_table(Table::drop().table(TimeEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeEntry {
    Table,
    Id,
    UserId,
    ClientId,
    Description,
    Hours,
    Date,
    CreatedAt,
}
