//! 点击事件的写入与聚合查询
//!
//! 每次写入都是单条自动提交的 INSERT，聚合在读取时实时计算。

use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, sea_query::Expr,
};
use tracing::trace;

use crate::errors::Result;
use crate::storage::ClickSummary;
use migration::entities::click_event;

/// 聚合查询结果行
#[derive(Debug, FromQueryResult)]
struct ClickSummaryRow {
    short_code: String,
    clicks: i64,
}

impl super::SeaOrmStorage {
    /// 记录一次点击
    pub async fn insert_click(&self, short_code: &str) -> Result<()> {
        let event = click_event::ActiveModel {
            short_code: Set(short_code.to_owned()),
            clicked_at: Set(Utc::now()),
            ..Default::default()
        };

        click_event::Entity::insert(event).exec(&self.db).await?;
        trace!("Click recorded for {}", short_code);
        Ok(())
    }

    /// 统计指定短码的点击数，没有记录时为 0
    pub async fn count_clicks(&self, short_code: &str) -> Result<u64> {
        let count = click_event::Entity::find()
            .filter(click_event::Column::ShortCode.eq(short_code))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    /// 按短码分组计数，点击数倒序；同票顺序由数据库决定
    pub async fn click_summaries(&self) -> Result<Vec<ClickSummary>> {
        let rows = click_event::Entity::find()
            .select_only()
            .column(click_event::Column::ShortCode)
            .column_as(click_event::Column::Id.count(), "clicks")
            .group_by(click_event::Column::ShortCode)
            .order_by_desc(Expr::cust("clicks"))
            .into_model::<ClickSummaryRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ClickSummary {
                short_code: row.short_code,
                clicks: row.clicks.max(0) as u64,
            })
            .collect())
    }

    /// 点击事件总数
    pub async fn total_clicks(&self) -> Result<u64> {
        Ok(click_event::Entity::find().count(&self.db).await?)
    }
}
