//! 点击事件表迁移
//!
//! 创建 analytics 表，每一行代表一次点击，插入后不再修改。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Analytics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Analytics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Analytics::ShortCode)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Analytics::ClickedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 单链接计数与 GROUP BY 都走这个索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analytics_short_code")
                    .table(Analytics::Table)
                    .col(Analytics::ShortCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_analytics_short_code").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Analytics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Analytics {
    #[sea_orm(iden = "analytics")]
    Table,
    Id,
    ShortCode,
    ClickedAt,
}
