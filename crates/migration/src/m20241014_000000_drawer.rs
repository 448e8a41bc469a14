//! Drawer schema.
//!
//! - `bill_counts`: number of bills held per denomination
//! - `sales`: running total of lemonades sold

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum BillCounts {
    Table,
    Denomination,
    Count,
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    TotalLemonades,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillCounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillCounts::Denomination)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillCounts::Count)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(BillCounts::Count).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sales::TotalLemonades)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Sales::TotalLemonades).gte(0)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BillCounts::Table).to_owned())
            .await
    }
}
