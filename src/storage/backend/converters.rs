use crate::storage::Link;
use migration::entities::link;

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        short_code: model.short_code,
        original_url: model.original_url,
        created_at: model.created_at,
    }
}
