//! Link table operations used by the link service

use chrono::Utc;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::converters::model_to_link;
use crate::errors::Result;
use crate::storage::Link;
use migration::entities::link;

impl super::SeaOrmStorage {
    pub async fn find_link(&self, short_code: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::ShortCode.eq(short_code))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_link))
    }

    pub async fn find_link_by_url(&self, original_url: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::OriginalUrl.eq(original_url))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_link))
    }

    pub async fn insert_link(&self, short_code: &str, original_url: &str) -> Result<Link> {
        let created_at = Utc::now();
        let model = link::ActiveModel {
            short_code: Set(short_code.to_owned()),
            original_url: Set(original_url.to_owned()),
            created_at: Set(created_at),
            ..Default::default()
        };

        link::Entity::insert(model).exec(&self.db).await?;

        Ok(Link {
            short_code: short_code.to_owned(),
            original_url: original_url.to_owned(),
            created_at,
        })
    }

    /// 全部链接，最新创建的在前
    pub async fn list_links(&self) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .order_by_desc(link::Column::CreatedAt)
            .order_by_desc(link::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_link).collect())
    }
}
